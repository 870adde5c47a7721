// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Block level operations: alignment, lists and indentation.

use super::base::{Alignment, BlockKind, INDENT_PX};
use super::MemorySurface;
use crate::ListType;

impl MemorySurface {
    /// Align every block touched by the selection.
    pub(crate) fn set_alignment(&mut self, align: Alignment) -> bool {
        let Some((start, end)) = self.selection_bounds() else {
            return false;
        };
        self.push_undo();
        for block in self.blocks_in(start, end) {
            self.blocks[block].align = Some(align);
        }
        true
    }

    /// Turn the touched blocks into items of a `list_type` list, or back
    /// into plain blocks when they all already are.
    pub(crate) fn toggle_list(&mut self, list_type: ListType) -> bool {
        let Some((start, end)) = self.selection_bounds() else {
            return false;
        };
        self.push_undo();
        let range = self.blocks_in(start, end);
        let all_listed = self.blocks[range.clone()]
            .iter()
            .all(|b| b.kind == BlockKind::ListItem(list_type));
        let kind = if all_listed {
            BlockKind::Generic
        } else {
            BlockKind::ListItem(list_type)
        };
        for block in range {
            self.blocks[block].kind = kind;
        }
        true
    }

    /// Move the touched blocks one step to the right.
    pub(crate) fn indent(&mut self) -> bool {
        let Some((start, end)) = self.selection_bounds() else {
            return false;
        };
        self.push_undo();
        for block in self.blocks_in(start, end) {
            self.blocks[block].indent_px += INDENT_PX;
        }
        true
    }

    /// Move the touched blocks one step to the left. Refused when none of
    /// them is indented.
    pub(crate) fn outdent(&mut self) -> bool {
        let Some((start, end)) = self.selection_bounds() else {
            return false;
        };
        let range = self.blocks_in(start, end);
        if self.blocks[range.clone()].iter().all(|b| b.indent_px == 0) {
            return false;
        }
        self.push_undo();
        for block in range {
            let indent = &mut self.blocks[block].indent_px;
            *indent = indent.saturating_sub(INDENT_PX);
        }
        true
    }

    /// Alignment of the block holding the selection start. Unaligned blocks
    /// read as left aligned.
    pub(crate) fn alignment_at_selection(&self) -> Option<Alignment> {
        let (start, _) = self.selection_bounds()?;
        let (block, _) = self.locate(start);
        Some(self.blocks[block].align.unwrap_or(Alignment::Left))
    }

    pub(crate) fn list_at_selection(&self) -> Option<ListType> {
        let (start, _) = self.selection_bounds()?;
        match self.blocks[self.locate(start).0].kind {
            BlockKind::ListItem(list_type) => Some(list_type),
            _ => None,
        }
    }
}
