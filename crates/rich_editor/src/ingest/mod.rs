// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Paste ingestion: turn clipboard content into a [`Fragment`].
//!
//! Markup is preferred and goes through [`sanitize`]. Plain text goes
//! through [`enhance`]. Ingestion itself never fails: if either path errors
//! the text is inserted verbatim as one unformatted block.

pub mod enhance;
pub mod sanitize;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};
use thiserror::Error;
use tracing::{debug, warn};

pub use enhance::{classify_line, enhance, LineKind};
pub use sanitize::{sanitize, sanitize_markup, strip_meta_tags};

use crate::parser::{MarkupParser, ParseError};
use crate::Fragment;

/// Clipboard content offered by a single paste.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastePayload {
    pub html: Option<String>,
    pub text: Option<String>,
}

impl PastePayload {
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            text: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            html: None,
            text: Some(text.into()),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// The markup representation, unless it is missing or blank.
    pub fn markup(&self) -> Option<&str> {
        self.html.as_deref().filter(|html| !html.trim().is_empty())
    }

    /// The plain-text representation, unless it is missing or empty.
    pub fn plain_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("paste carried no content")]
    Empty,
}

/// Which path produced an ingested fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IngestSource {
    Markup,
    PlainText,
    Fallback,
    Nothing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ingestion {
    pub fragment: Fragment,
    pub source: IngestSource,
}

/// Convert a payload without any fallback.
pub fn try_ingest(
    payload: &PastePayload,
    parser: &dyn MarkupParser,
) -> Result<Ingestion, IngestError> {
    if let Some(markup) = payload.markup() {
        let fragment = sanitize_markup(markup, parser)?;
        debug!(bytes = markup.len(), "Ingested pasted markup");
        return Ok(Ingestion {
            fragment,
            source: IngestSource::Markup,
        });
    }
    if let Some(text) = payload.plain_text() {
        debug!(chars = text.len(), "Ingested pasted plain text");
        return Ok(Ingestion {
            fragment: enhance(text),
            source: IngestSource::PlainText,
        });
    }
    Err(IngestError::Empty)
}

/// Convert a payload, degrading to a verbatim text block on error.
pub fn ingest_detailed(
    payload: &PastePayload,
    parser: &dyn MarkupParser,
) -> Ingestion {
    match try_ingest(payload, parser) {
        Ok(ingestion) => ingestion,
        Err(IngestError::Empty) => Ingestion {
            fragment: Fragment::new(),
            source: IngestSource::Nothing,
        },
        Err(err) => {
            warn!(error = %err, "Paste ingestion failed, inserting text");
            Ingestion {
                fragment: Fragment::plain_block(&fallback_text(payload)),
                source: IngestSource::Fallback,
            }
        }
    }
}

pub fn ingest(payload: &PastePayload, parser: &dyn MarkupParser) -> Fragment {
    ingest_detailed(payload, parser).fragment
}

static ANY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// The plain text, or the markup with its tags removed when there is none.
fn fallback_text(payload: &PastePayload) -> String {
    match (payload.plain_text(), payload.markup()) {
        (Some(text), _) => text.to_owned(),
        (None, Some(markup)) => ANY_TAG.replace_all(markup, "").into_owned(),
        (None, None) => String::new(),
    }
}
