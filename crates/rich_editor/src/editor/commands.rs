// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Formatting commands, paste, keys and copy.

use tracing::debug;

use super::{
    shortcut_command, DeferredTask, EditorUpdate, KeyCode, KeyDownOutcome,
    KeyStroke, RichEditor,
};
use crate::clipboard::{copy_with_fallback, ClipboardSink, CopyOutcome};
use crate::ingest::{ingest_detailed, PastePayload};
use crate::{CopyPayload, FormatCommand, ListType, SelectionPort};

impl<P: SelectionPort> RichEditor<P> {
    /// Apply a formatting command to the selection.
    ///
    /// An unfocused surface is focused first, keeping the selection it had.
    /// A command the surface refuses changes nothing and reports
    /// [`EditorUpdate::keep`].
    pub fn apply_format(
        &mut self,
        command: FormatCommand,
        value: Option<&str>,
    ) -> EditorUpdate {
        self.ensure_focus();
        if !self.port.exec_command(command, value) {
            debug!(%command, "Surface refused formatting command");
            return EditorUpdate::keep();
        }
        let update = self.commit();
        if command == FormatCommand::InsertUnorderedList
            && self.active_formats.unordered_list
        {
            self.defer(DeferredTask::NormalizeLists(ListType::Unordered));
        }
        update
    }

    /// Insert pasted content at the selection.
    ///
    /// The payload is ingested into a fragment and inserted as markup. If
    /// the surface refuses markup the fragment's text is inserted instead.
    pub fn handle_paste(&mut self, payload: &PastePayload) -> EditorUpdate {
        let ingestion = ingest_detailed(payload, self.parser.as_ref());
        if ingestion.fragment.is_empty() {
            debug!("Nothing to paste");
            return EditorUpdate::keep();
        }
        debug!(source = %ingestion.source, "Inserting pasted content");
        self.ensure_focus();
        let html = ingestion.fragment.to_html();
        if self.port.exec_command(FormatCommand::InsertHtml, Some(&html)) {
            return self.commit();
        }
        let text = ingestion.fragment.text();
        if self.port.exec_command(FormatCommand::InsertText, Some(&text)) {
            debug!("Surface refused markup, pasted as text");
            return self.commit();
        }
        debug!("Surface refused the paste");
        EditorUpdate::keep()
    }

    /// Run the shortcut bound to `stroke`, if any.
    pub fn handle_key_down(&mut self, stroke: &KeyStroke) -> KeyDownOutcome {
        match shortcut_command(stroke) {
            Some(command) => {
                debug!(%stroke, %command, "Shortcut");
                KeyDownOutcome {
                    prevent_default: true,
                    update: self.apply_format(command, None),
                }
            }
            None => KeyDownOutcome::default(),
        }
    }

    /// After a key is released the snapshot is refreshed. Releasing a
    /// deletion key first clears formats left stuck at the caret.
    pub fn handle_key_up(&mut self, key: KeyCode) -> EditorUpdate {
        if key.is_deletion() && self.reconcile_if_at_boundary() {
            return self.commit();
        }
        self.refresh_formats()
    }

    pub fn handle_mouse_up(&mut self) -> EditorUpdate {
        if self.reconcile_if_at_boundary() {
            return self.commit();
        }
        self.refresh_formats()
    }

    /// Copy the whole document to `sink`.
    pub fn copy_to_clipboard(
        &self,
        sink: &mut dyn ClipboardSink,
    ) -> CopyOutcome {
        let payload = CopyPayload {
            html: self.value.clone(),
            text: self.document.text(),
        };
        copy_with_fallback(sink, &payload)
    }

    /// Focus the surface if needed, restoring the selection it had before.
    fn ensure_focus(&mut self) {
        if self.port.has_focus() {
            return;
        }
        let saved = self.port.get_selection();
        self.port.focus();
        if let Some(saved) = saved {
            if !self.port.set_selection(saved.range()) {
                debug!("Could not restore the selection after focusing");
            }
        }
    }
}
