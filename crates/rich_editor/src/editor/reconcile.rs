// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Clearing formats that stick to the caret after a deletion.
//!
//! When formatted text is deleted up to the start of a node, the surface can
//! keep reporting its format at the caret even though the toolbar shows it
//! off, and the next typed characters pick it up. Toggling the format twice
//! makes the surface drop the leftover state. This is a heuristic: it only
//! looks at offset 0 and trusts the double toggle to be neutral otherwise.

use tracing::debug;

use super::RichEditor;
use crate::{FormatCommand, SelectionPort};

/// Checked in this order.
const RECONCILED_FORMATS: [FormatCommand; 3] = [
    FormatCommand::Underline,
    FormatCommand::Bold,
    FormatCommand::Italic,
];

impl<P: SelectionPort> RichEditor<P> {
    /// Returns true when any toggles were accepted. The snapshot is left for
    /// the caller to recompute.
    pub fn reconcile_if_at_boundary(&mut self) -> bool {
        let Some(selection) = self.port.get_selection() else {
            return false;
        };
        if selection.start_offset() != 0 {
            return false;
        }
        let mut issued = false;
        for command in RECONCILED_FORMATS {
            if self.active_formats.is_active(command)
                || !self.port.query_format_state(command)
            {
                continue;
            }
            debug!(%command, "Clearing format stuck at the caret");
            // A refused first toggle changed nothing, so the second would
            // not be neutral.
            if !self.port.exec_command(command, None) {
                debug!(%command, "Surface refused the first toggle");
                continue;
            }
            if !self.port.exec_command(command, None) {
                debug!(%command, "Surface refused the second toggle");
            }
            issued = true;
        }
        issued
    }
}
