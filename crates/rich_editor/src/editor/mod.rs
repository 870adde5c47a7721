// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The editor component.
//!
//! [`RichEditor`] owns the canonical document and drives an editing surface
//! through a [`SelectionPort`]. Every mutating call recomputes what it
//! affects before returning, and reports it in an [`EditorUpdate`].

mod commands;
mod deferred;
mod reconcile;
pub mod shortcuts;
mod update;

use std::collections::VecDeque;

use tracing::{debug, warn};

pub use deferred::DeferredTask;
pub use shortcuts::{shortcut_command, KeyCode, KeyStroke, Modifiers};
pub use update::{EditorUpdate, KeyDownOutcome};

use crate::ingest::sanitize_markup;
use crate::parser::MarkupParser;
use crate::{ActiveFormats, Counters, EditorConfig, Fragment, SelectionPort};

pub struct RichEditor<P: SelectionPort> {
    port: P,
    parser: Box<dyn MarkupParser>,
    config: EditorConfig,
    /// The document as last read back from the surface.
    document: Fragment,
    /// `document` serialized, as handed to the owner.
    value: String,
    counters: Counters,
    /// The snapshot last shown to the user.
    active_formats: ActiveFormats,
    deferred: VecDeque<DeferredTask>,
}

#[cfg(feature = "sys")]
impl<P: SelectionPort> RichEditor<P> {
    pub fn new(port: P, config: EditorConfig) -> Self {
        Self::with_parser(
            port,
            Box::new(crate::parser::Html5everParser::new()),
            config,
        )
    }
}

impl<P: SelectionPort> RichEditor<P> {
    /// An editor over whatever the surface currently holds.
    pub fn with_parser(
        port: P,
        parser: Box<dyn MarkupParser>,
        config: EditorConfig,
    ) -> Self {
        let mut editor = Self {
            port,
            parser,
            config,
            document: Fragment::new(),
            value: String::new(),
            counters: Counters::default(),
            active_formats: ActiveFormats::default(),
            deferred: VecDeque::new(),
        };
        editor.read_document();
        editor.active_formats = ActiveFormats::query(&editor.port);
        editor
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// Direct access to the surface, for changes the editor is told about
    /// afterwards through the `handle_*` calls.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn document(&self) -> &Fragment {
        &self.document
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn active_formats(&self) -> ActiveFormats {
        self.active_formats
    }

    /// Whether the placeholder should be shown.
    pub fn shows_placeholder(&self) -> bool {
        self.document.text().trim().is_empty()
    }

    /// The counter line under the surface, if enabled.
    pub fn counter_label(&self) -> Option<String> {
        self.config.counter_label(&self.counters)
    }

    /// Take a new value from the owner.
    ///
    /// The surface is only replaced when the value differs from what it
    /// already shows and the owner has no local edits in flight, so typing
    /// is never clobbered by a stale echo of itself.
    pub fn set_value(
        &mut self,
        value: &str,
        has_pending_local_edits: bool,
    ) -> EditorUpdate {
        if has_pending_local_edits {
            debug!("Ignoring external value while local edits are pending");
            return EditorUpdate::keep();
        }
        if value == self.value {
            return EditorUpdate::keep();
        }
        let document = match sanitize_markup(value, self.parser.as_ref()) {
            Ok(document) => document,
            Err(err) => {
                warn!(error = %err, "Ignoring unreadable external value");
                return EditorUpdate::keep();
            }
        };
        self.port.set_content_html(&document.to_html());
        self.read_document();
        self.active_formats = ActiveFormats::query(&self.port);
        EditorUpdate {
            value: None,
            counters: Some(self.counters),
            active_formats: Some(self.active_formats),
        }
    }

    /// The surface content changed through typing. Value and counters are
    /// recomputed; the toolbar waits for key-up.
    pub fn handle_input(&mut self) -> EditorUpdate {
        if !self.read_document() {
            return EditorUpdate::keep();
        }
        EditorUpdate {
            value: Some(self.value.clone()),
            counters: Some(self.counters),
            active_formats: None,
        }
    }

    /// The selection moved without the content changing.
    pub fn handle_selection_change(&mut self) -> EditorUpdate {
        self.refresh_formats()
    }

    /// Read the surface back into the document after a change, and report
    /// everything.
    fn commit(&mut self) -> EditorUpdate {
        self.read_document();
        self.active_formats = ActiveFormats::query(&self.port);
        EditorUpdate {
            value: Some(self.value.clone()),
            counters: Some(self.counters),
            active_formats: Some(self.active_formats),
        }
    }

    fn refresh_formats(&mut self) -> EditorUpdate {
        self.active_formats = ActiveFormats::query(&self.port);
        EditorUpdate::formats(self.active_formats)
    }

    /// Returns false, keeping the previous document, when the surface
    /// content cannot be read.
    fn read_document(&mut self) -> bool {
        let html = self.port.content_html();
        match sanitize_markup(&html, self.parser.as_ref()) {
            Ok(document) => {
                self.value = document.to_html();
                self.counters = Counters::of(&document);
                self.document = document;
                true
            }
            Err(err) => {
                warn!(error = %err, "Surface unreadable, keeping document");
                false
            }
        }
    }
}
