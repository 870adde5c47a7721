// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use tracing::debug;

use super::base::{Alignment, BlockKind};
use super::formatting::InlineFormatType;
use super::MemorySurface;
use crate::{
    FormatCommand, ListStyle, ListType, SelectionPort, SelectionRange,
    SelectionState,
};

impl SelectionPort for MemorySurface {
    fn get_selection(&self) -> Option<SelectionState> {
        self.selection_state()
    }

    fn set_selection(&mut self, range: SelectionRange) -> bool {
        match (
            self.offset_of_position(range.anchor),
            self.offset_of_position(range.focus),
        ) {
            (Some(anchor), Some(focus)) => {
                self.select(anchor, focus);
                true
            }
            _ => {
                debug!(?range, "Rejecting selection outside the document");
                false
            }
        }
    }

    fn query_format_state(&self, command: FormatCommand) -> bool {
        match command {
            FormatCommand::Bold => {
                self.is_format_active(InlineFormatType::Bold)
            }
            FormatCommand::Italic => {
                self.is_format_active(InlineFormatType::Italic)
            }
            FormatCommand::Underline => {
                self.is_format_active(InlineFormatType::Underline)
            }
            FormatCommand::JustifyLeft => {
                self.alignment_at_selection() == Some(Alignment::Left)
            }
            FormatCommand::JustifyCenter => {
                self.alignment_at_selection() == Some(Alignment::Center)
            }
            FormatCommand::JustifyRight => {
                self.alignment_at_selection() == Some(Alignment::Right)
            }
            FormatCommand::InsertOrderedList => {
                self.list_at_selection() == Some(ListType::Ordered)
            }
            FormatCommand::InsertUnorderedList => {
                self.list_at_selection() == Some(ListType::Unordered)
            }
            _ => false,
        }
    }

    fn exec_command(
        &mut self,
        command: FormatCommand,
        value: Option<&str>,
    ) -> bool {
        match command {
            FormatCommand::Bold => {
                self.toggle_inline_format(InlineFormatType::Bold)
            }
            FormatCommand::Italic => {
                self.toggle_inline_format(InlineFormatType::Italic)
            }
            FormatCommand::Underline => {
                self.toggle_inline_format(InlineFormatType::Underline)
            }
            FormatCommand::JustifyLeft => self.set_alignment(Alignment::Left),
            FormatCommand::JustifyCenter => {
                self.set_alignment(Alignment::Center)
            }
            FormatCommand::JustifyRight => self.set_alignment(Alignment::Right),
            FormatCommand::InsertOrderedList => {
                self.toggle_list(ListType::Ordered)
            }
            FormatCommand::InsertUnorderedList => {
                self.toggle_list(ListType::Unordered)
            }
            FormatCommand::Indent => self.indent(),
            FormatCommand::Outdent => self.outdent(),
            FormatCommand::Undo => self.undo(),
            FormatCommand::InsertHtml => {
                value.is_some_and(|html| self.insert_html(html))
            }
            FormatCommand::InsertText => {
                value.is_some_and(|text| self.type_text(text))
            }
            FormatCommand::Delete => self.backspace(),
            FormatCommand::ForwardDelete => self.delete(),
        }
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    /// Focusing a surface that has no selection puts the caret at the
    /// start, as browsers do.
    fn focus(&mut self) {
        self.focused = true;
        if self.selection.is_none() {
            self.selection = Some((0, 0));
        }
    }

    fn content_html(&self) -> String {
        self.to_fragment().to_html()
    }

    fn set_content_html(&mut self, html: &str) {
        self.replace_content(html);
    }

    fn set_list_style(
        &mut self,
        list_type: ListType,
        style: &ListStyle,
    ) -> bool {
        self.list_styles.insert(list_type, style.clone());
        self.blocks
            .iter()
            .any(|b| b.kind == BlockKind::ListItem(list_type))
    }
}
