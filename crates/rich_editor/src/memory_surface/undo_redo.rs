// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Undo using whole-document snapshots.
//!
//! Before each mutating operation the blocks and the selection are pushed
//! onto the undo stack. `undo()` pops the newest snapshot and restores it.

use super::base::MAX_UNDO_DEPTH;
use super::MemorySurface;

impl MemorySurface {
    pub(crate) fn push_undo(&mut self) {
        if self.undo_stack.len() == MAX_UNDO_DEPTH {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push((self.blocks.clone(), self.selection));
    }

    /// Undo the last editing operation.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some((blocks, selection)) => {
                self.blocks = blocks;
                self.selection = selection;
                self.typing_style = None;
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear_undo(&mut self) {
        self.undo_stack.clear();
    }
}

#[cfg(all(test, feature = "sys"))]
mod tests {
    use crate::tests::testutils_surface::surface;
    use crate::{FormatCommand, SelectionPort};

    #[test]
    fn undo_restores_previous_text() {
        let mut s = surface("ab|");
        s.type_text("c");
        assert!(s.undo());
        assert_eq!(s.text(), "ab");
        assert_eq!(s.selection(), Some((2, 2)));
    }

    #[test]
    fn undo_on_fresh_surface_is_refused() {
        let mut s = surface("ab|");
        assert!(!s.exec_command(FormatCommand::Undo, None));
    }

    #[test]
    fn undo_reverts_formatting() {
        let mut s = surface("{ab}|");
        s.exec_command(FormatCommand::Bold, None);
        s.exec_command(FormatCommand::Undo, None);
        assert_eq!(s.content_html(), "<div>ab</div>");
    }

    #[test]
    fn undo_history_is_bounded() {
        let mut s = surface("|");
        for _ in 0..150 {
            s.type_text("x");
        }
        let mut undone = 0;
        while s.undo() {
            undone += 1;
        }
        assert_eq!(undone, super::MAX_UNDO_DEPTH);
        assert_eq!(s.text(), "x".repeat(50));
    }
}
