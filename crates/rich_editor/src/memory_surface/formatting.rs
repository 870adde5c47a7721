// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Inline formatting: bold, italic, underline.

use super::base::InlineFormat;
use super::MemorySurface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InlineFormatType {
    Bold,
    Italic,
    Underline,
}

impl InlineFormatType {
    pub(crate) fn get(self, format: &InlineFormat) -> bool {
        match self {
            InlineFormatType::Bold => format.bold,
            InlineFormatType::Italic => format.italic,
            InlineFormatType::Underline => format.underline,
        }
    }

    pub(crate) fn set(self, format: &mut InlineFormat, on: bool) {
        match self {
            InlineFormatType::Bold => format.bold = on,
            InlineFormatType::Italic => format.italic = on,
            InlineFormatType::Underline => format.underline = on,
        }
    }
}

impl MemorySurface {
    /// Toggle an inline format on the current selection.
    ///
    /// - **Collapsed caret**: flips the pending typing style, starting from
    ///   the format at the caret.
    /// - **Range**: removes the format when the whole range has it,
    ///   otherwise applies it to the whole range.
    pub(crate) fn toggle_inline_format(
        &mut self,
        format_type: InlineFormatType,
    ) -> bool {
        let Some((start, end)) = self.selection_bounds() else {
            return false;
        };
        if start == end {
            let mut style =
                self.typing_style.unwrap_or_else(|| self.format_at(start));
            let was_on = format_type.get(&style);
            format_type.set(&mut style, !was_on);
            self.typing_style = Some(style);
            return true;
        }
        self.push_undo();
        let on = !self.range_has_format(start, end, format_type);
        self.set_range_format(start, end, format_type, on);
        true
    }

    /// Whether the format is on at the selection.
    pub(crate) fn is_format_active(
        &self,
        format_type: InlineFormatType,
    ) -> bool {
        match self.selection_bounds() {
            None => false,
            Some((start, end)) if start == end => {
                let style =
                    self.typing_style.unwrap_or_else(|| self.format_at(start));
                format_type.get(&style)
            }
            Some((start, end)) => {
                self.range_has_format(start, end, format_type)
            }
        }
    }

    /// Whether every character of the range has the format. Ranges holding
    /// no characters do not.
    fn range_has_format(
        &self,
        start: usize,
        end: usize,
        format_type: InlineFormatType,
    ) -> bool {
        let mut seen = false;
        for block in self.blocks_in(start, end) {
            let block_start = self.offset_of(block, 0);
            let from = start.saturating_sub(block_start);
            let to = end.saturating_sub(block_start);
            let mut run_start = 0;
            for run in &self.blocks[block].runs {
                let run_end = run_start + run.len();
                if run_start < to && from < run_end {
                    if !format_type.get(&run.format) {
                        return false;
                    }
                    seen = true;
                }
                run_start = run_end;
            }
        }
        seen
    }

    fn set_range_format(
        &mut self,
        start: usize,
        end: usize,
        format_type: InlineFormatType,
        on: bool,
    ) {
        for block in self.blocks_in(start, end) {
            let block_start = self.offset_of(block, 0);
            let len = self.blocks[block].len();
            let from = start.saturating_sub(block_start).min(len);
            let to = end.saturating_sub(block_start).min(len);
            if from >= to {
                continue;
            }
            let first = self.split_run_at(block, from);
            let last = self.split_run_at(block, to);
            for run in &mut self.blocks[block].runs[first..last] {
                format_type.set(&mut run.format, on);
            }
            self.blocks[block].normalize();
        }
    }
}

#[cfg(all(test, feature = "sys"))]
mod test {
    use crate::tests::testutils_surface::surface;
    use crate::{FormatCommand, SelectionPort};

    fn html(s: &crate::MemorySurface) -> String {
        s.content_html()
    }

    #[test]
    fn selecting_and_bolding_adds_strong_tags() {
        let mut s = surface("aa{bb}|cc");
        assert!(s.exec_command(FormatCommand::Bold, None));
        assert_eq!(html(&s), "<div>aa<strong>bb</strong>cc</div>");
    }

    #[test]
    fn bolding_a_bold_range_removes_it() {
        let mut s = surface("<strong>aa{bb}|cc</strong>");
        s.exec_command(FormatCommand::Bold, None);
        assert_eq!(
            html(&s),
            "<div><strong>aa</strong>bb<strong>cc</strong></div>"
        );
    }

    #[test]
    fn partly_formatted_ranges_are_fully_formatted() {
        let mut s = surface("a{a<em>bb</em>c}|c");
        s.exec_command(FormatCommand::Italic, None);
        assert_eq!(html(&s), "<div>a<em>abbc</em>c</div>");
    }

    #[test]
    fn formats_nest_in_a_fixed_order() {
        let mut s = surface("{abc}|");
        s.exec_command(FormatCommand::Underline, None);
        s.exec_command(FormatCommand::Italic, None);
        s.exec_command(FormatCommand::Bold, None);
        assert_eq!(
            html(&s),
            "<div><strong><em><u>abc</u></em></strong></div>"
        );
    }

    #[test]
    fn formatting_across_blocks() {
        let mut s = surface("<p>a{b</p><p>c}|d</p>");
        s.exec_command(FormatCommand::Underline, None);
        assert_eq!(html(&s), "<p>a<u>b</u></p><p><u>c</u>d</p>");
        assert!(s.query_format_state(FormatCommand::Underline));
    }

    #[test]
    fn toggling_at_a_caret_sets_the_typing_style() {
        let mut s = surface("ab|");
        s.exec_command(FormatCommand::Bold, None);
        assert!(s.query_format_state(FormatCommand::Bold));
        assert_eq!(html(&s), "<div>ab</div>");
        s.type_text("c");
        assert_eq!(html(&s), "<div>ab<strong>c</strong></div>");
    }

    #[test]
    fn toggling_twice_at_a_caret_restores_the_format() {
        let mut s = surface("<strong>ab|</strong>");
        s.exec_command(FormatCommand::Bold, None);
        s.exec_command(FormatCommand::Bold, None);
        assert!(s.query_format_state(FormatCommand::Bold));
    }

    #[test]
    fn moving_the_caret_clears_the_typing_style() {
        let mut s = surface("ab|");
        s.exec_command(FormatCommand::Italic, None);
        s.select(1, 1);
        assert!(!s.query_format_state(FormatCommand::Italic));
    }
}
