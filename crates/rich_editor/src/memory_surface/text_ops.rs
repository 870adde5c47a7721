// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Text insertion and deletion.

use super::base::{Block, BlockKind, InlineFormat, Run};
use super::MemorySurface;

impl MemorySurface {
    /// Type `text` at the selection, replacing any selected text. The text
    /// takes the pending typing style, or the format at the caret.
    pub fn type_text(&mut self, text: &str) -> bool {
        let Some((start, end)) = self.selection_bounds() else {
            return false;
        };
        self.push_undo();
        let format = self.typing_style.unwrap_or_else(|| self.format_at(start));
        if start != end {
            self.delete_range(start, end);
        }
        let caret = self.insert_text_at(start, text, format);
        self.selection = Some((caret, caret));
        self.typing_style = None;
        true
    }

    /// Delete the selection, or the character before the caret.
    ///
    /// Deleting the last character of a formatted run keeps that format
    /// as the typing style, so the next typed text continues it even though
    /// nothing formatted is left at the caret.
    pub fn backspace(&mut self) -> bool {
        let Some((start, end)) = self.selection_bounds() else {
            return false;
        };
        if start != end {
            return self.delete_selection(start, end);
        }
        if start == 0 {
            return false;
        }
        self.push_undo();
        let stuck = self.format_if_last_in_run(start - 1);
        self.delete_range(start - 1, start);
        self.selection = Some((start - 1, start - 1));
        self.typing_style = stuck;
        true
    }

    /// Delete the selection, or the character after the caret.
    pub fn delete(&mut self) -> bool {
        let Some((start, end)) = self.selection_bounds() else {
            return false;
        };
        if start != end {
            return self.delete_selection(start, end);
        }
        if start >= self.len() {
            return false;
        }
        self.push_undo();
        let stuck = self.format_if_last_in_run(start);
        self.delete_range(start, start + 1);
        self.selection = Some((start, start));
        self.typing_style = stuck;
        true
    }

    fn delete_selection(&mut self, start: usize, end: usize) -> bool {
        self.push_undo();
        self.delete_range(start, end);
        self.selection = Some((start, start));
        self.typing_style = None;
        true
    }

    /// The format of the character at document offset `offset` when it is
    /// the only character of a formatted run.
    fn format_if_last_in_run(&self, offset: usize) -> Option<InlineFormat> {
        let (block, offset) = self.locate(offset);
        let mut start = 0;
        for run in &self.blocks[block].runs {
            let len = run.len();
            if offset < start + len {
                return (len == 1 && !run.format.is_plain())
                    .then_some(run.format);
            }
            start += len;
        }
        None
    }

    /// Insert `text` at document offset `at`. A `\n` starts a new block.
    /// Returns the document offset just after the inserted text.
    pub(crate) fn insert_text_at(
        &mut self,
        at: usize,
        text: &str,
        format: InlineFormat,
    ) -> usize {
        let mut caret = at;
        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                self.split_block_at(caret);
                caret += 1;
            }
            if line.is_empty() {
                continue;
            }
            let (block, offset) = self.locate(caret);
            let run = self.split_run_at(block, offset);
            self.blocks[block].runs.insert(run, Run::new(line, format));
            self.blocks[block].normalize();
            caret += line.chars().count();
        }
        caret
    }

    /// Split the block holding document offset `at` in two.
    pub(crate) fn split_block_at(&mut self, at: usize) {
        let (block, offset) = self.locate(at);
        let run = self.split_run_at(block, offset);
        let tail = self.blocks[block].runs.split_off(run);
        let mut next = self.blocks[block].empty_like();
        if let BlockKind::Heading(_) = next.kind {
            next.kind = BlockKind::Generic;
        }
        next.runs = tail;
        self.blocks.insert(block + 1, next);
    }

    /// Remove the document range `start..end`, joining the blocks at both
    /// ends when it spans a block boundary.
    pub(crate) fn delete_range(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let (first, first_offset) = self.locate(start);
        let (last, last_offset) = self.locate(end);

        let tail_from = self.split_run_at(last, last_offset);
        let tail: Vec<Run> = self.blocks[last].runs.split_off(tail_from);

        let cut = self.split_run_at(first, first_offset);
        self.blocks[first].runs.truncate(cut);

        if last > first {
            self.blocks.drain(first + 1..=last);
        }
        let block: &mut Block = &mut self.blocks[first];
        block.runs.extend(tail);
        block.normalize();
        self.ensure_block();
    }
}

#[cfg(all(test, feature = "sys"))]
mod test {
    use crate::tests::testutils_surface::surface;
    use crate::SelectionPort;

    #[test]
    fn typing_into_an_empty_surface() {
        let mut s = surface("|");
        assert!(s.type_text("hello"));
        assert_eq!(s.text(), "hello");
        assert_eq!(s.selection(), Some((5, 5)));
    }

    #[test]
    fn typing_replaces_the_selection() {
        let mut s = surface("aa{bb}|cc");
        s.type_text("X");
        assert_eq!(s.text(), "aaXcc");
        assert_eq!(s.selection(), Some((3, 3)));
    }

    #[test]
    fn typing_continues_the_format_at_the_caret() {
        let mut s = surface("<strong>bold|</strong>");
        s.type_text("er");
        assert_eq!(s.content_html(), "<div><strong>bolder</strong></div>");
    }

    #[test]
    fn newlines_split_blocks() {
        let mut s = surface("<p>ab|cd</p>");
        s.type_text("\n");
        assert_eq!(s.content_html(), "<p>ab</p><p>cd</p>");
        assert_eq!(s.selection(), Some((3, 3)));
    }

    #[test]
    fn backspace_deletes_the_previous_character() {
        let mut s = surface("abc|");
        assert!(s.backspace());
        assert_eq!(s.text(), "ab");
        assert_eq!(s.selection(), Some((2, 2)));
    }

    #[test]
    fn backspace_at_the_start_does_nothing() {
        let mut s = surface("|abc");
        assert!(!s.backspace());
        assert_eq!(s.text(), "abc");
    }

    #[test]
    fn backspace_at_a_block_start_joins_blocks() {
        let mut s = surface("<p>ab</p><p>|cd</p>");
        s.backspace();
        assert_eq!(s.content_html(), "<p>abcd</p>");
        assert_eq!(s.selection(), Some((2, 2)));
    }

    #[test]
    fn backspace_deletes_a_selection_across_blocks() {
        let mut s = surface("<p>a{b</p><p>c}|d</p>");
        s.backspace();
        assert_eq!(s.content_html(), "<p>ad</p>");
    }

    #[test]
    fn emptying_a_formatted_run_leaves_its_format_pending() {
        let mut s = surface("<p><strong>b|</strong></p>");
        s.backspace();
        assert_eq!(s.content_html(), "<p><br></p>");
        assert!(s.query_format_state(crate::FormatCommand::Bold));
        s.type_text("x");
        assert_eq!(s.content_html(), "<p><strong>x</strong></p>");
    }

    #[test]
    fn forward_delete_removes_the_next_character() {
        let mut s = surface("a|bc");
        assert!(s.delete());
        assert_eq!(s.text(), "ac");
        let mut s = surface("abc|");
        assert!(!s.delete());
    }

    #[test]
    fn forward_delete_at_block_end_joins_blocks() {
        let mut s = surface("<p>ab|</p><p>cd</p>");
        s.delete();
        assert_eq!(s.content_html(), "<p>abcd</p>");
    }
}
