// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The Active Format Snapshot shown by a toolbar.

use serde::Serialize;

use crate::{FormatCommand, SelectionPort};

/// Formats tracked by the snapshot, in toolbar order.
pub const TRACKED_FORMATS: [FormatCommand; 7] = [
    FormatCommand::Bold,
    FormatCommand::Italic,
    FormatCommand::Underline,
    FormatCommand::JustifyLeft,
    FormatCommand::JustifyCenter,
    FormatCommand::JustifyRight,
    FormatCommand::InsertUnorderedList,
];

/// Which formats are on at the caret or selection, as of the last query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFormats {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub align_left: bool,
    pub align_center: bool,
    pub align_right: bool,
    pub unordered_list: bool,
}

impl ActiveFormats {
    /// Ask the port for the state of every tracked format. Everything is off
    /// when there is no selection.
    pub fn query(port: &dyn SelectionPort) -> Self {
        let mut formats = Self::default();
        if port.get_selection().is_none() {
            return formats;
        }
        for command in TRACKED_FORMATS {
            formats.set(command, port.query_format_state(command));
        }
        formats
    }

    pub fn is_active(&self, command: FormatCommand) -> bool {
        match command {
            FormatCommand::Bold => self.bold,
            FormatCommand::Italic => self.italic,
            FormatCommand::Underline => self.underline,
            FormatCommand::JustifyLeft => self.align_left,
            FormatCommand::JustifyCenter => self.align_center,
            FormatCommand::JustifyRight => self.align_right,
            FormatCommand::InsertUnorderedList => self.unordered_list,
            _ => false,
        }
    }

    /// Untracked commands are ignored.
    pub fn set(&mut self, command: FormatCommand, active: bool) {
        let flag = match command {
            FormatCommand::Bold => &mut self.bold,
            FormatCommand::Italic => &mut self.italic,
            FormatCommand::Underline => &mut self.underline,
            FormatCommand::JustifyLeft => &mut self.align_left,
            FormatCommand::JustifyCenter => &mut self.align_center,
            FormatCommand::JustifyRight => &mut self.align_right,
            FormatCommand::InsertUnorderedList => &mut self.unordered_list,
            _ => return,
        };
        *flag = active;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tests::recording_port::RecordingPort;

    #[test]
    fn no_selection_means_nothing_is_active() {
        let mut port = RecordingPort::new();
        port.set_state(FormatCommand::Bold, true);
        port.selection = None;
        assert_eq!(ActiveFormats::query(&port), ActiveFormats::default());
    }

    #[test]
    fn query_reads_every_tracked_format() {
        let mut port = RecordingPort::new();
        port.set_state(FormatCommand::Italic, true);
        port.set_state(FormatCommand::JustifyCenter, true);
        port.set_state(FormatCommand::InsertUnorderedList, true);
        let formats = ActiveFormats::query(&port);
        assert_eq!(
            formats,
            ActiveFormats {
                italic: true,
                align_center: true,
                unordered_list: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn set_ignores_untracked_commands() {
        let mut formats = ActiveFormats::default();
        formats.set(FormatCommand::Undo, true);
        formats.set(FormatCommand::Underline, true);
        assert!(!formats.is_active(FormatCommand::Undo));
        assert!(formats.is_active(FormatCommand::Underline));
    }
}
