// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! What the tool prints for one paste.

use rich_editor::ingest::{classify_line, LineKind};
use rich_editor::{
    copy_with_fallback, ClipboardSink, CopyOutcome, CopyPayload, Counters,
    IngestSource, Ingestion, ListType, PastePayload,
};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub source: IngestSource,
    pub html: String,
    pub text: String,
    pub counters: Counters,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<LineReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy: Option<CopyOutcome>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineReport {
    pub kind: &'static str,
    pub line: String,
}

impl Report {
    pub fn new(ingestion: &Ingestion) -> Self {
        Self {
            source: ingestion.source,
            html: ingestion.fragment.to_html(),
            text: ingestion.fragment.text(),
            counters: Counters::of(&ingestion.fragment),
            lines: Vec::new(),
            copy: None,
        }
    }

    /// Write the normalized content to `sink` and record how it went.
    pub fn copy_to(&mut self, sink: &mut dyn ClipboardSink) -> CopyOutcome {
        let payload = CopyPayload {
            html: self.html.clone(),
            text: self.text.clone(),
        };
        let outcome = copy_with_fallback(sink, &payload);
        self.copy = Some(outcome);
        outcome
    }

    /// Add the classification of every plain-text line. Only meaningful
    /// when the text flavor was the one ingested.
    pub fn with_explanation(mut self, payload: &PastePayload) -> Self {
        if self.source != IngestSource::PlainText {
            return self;
        }
        let text = payload.plain_text().unwrap_or_default();
        self.lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .map(|line| LineReport {
                kind: kind_name(&classify_line(line)),
                line: line.to_owned(),
            })
            .collect();
        self
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

fn kind_name(kind: &LineKind) -> &'static str {
    match kind {
        LineKind::Blank => "blank",
        LineKind::ListItem {
            list_type: ListType::Ordered,
            ..
        } => "ordered",
        LineKind::ListItem {
            list_type: ListType::Unordered,
            ..
        } => "unordered",
        LineKind::Heading(_) => "heading",
        LineKind::Label(_) => "label",
        LineKind::Indented { .. } => "indented",
        LineKind::Plain(_) => "plain",
    }
}
