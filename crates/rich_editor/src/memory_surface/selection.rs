// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Selection management and node id mapping.

use super::MemorySurface;
use crate::{NodeId, Position, SelectionState};

impl MemorySurface {
    /// Set the selection as document offsets. Offsets past the end are
    /// clamped. Any pending typing style is dropped.
    pub fn select(&mut self, anchor: usize, focus: usize) {
        let len = self.len();
        self.selection = Some((anchor.min(len), focus.min(len)));
        self.typing_style = None;
    }

    /// Remove the caret from the surface.
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.typing_style = None;
    }

    /// The selection as `(anchor, focus)` document offsets.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    /// Selection start and end, ensuring start <= end.
    pub(crate) fn selection_bounds(&self) -> Option<(usize, usize)> {
        self.selection.map(|(a, f)| (a.min(f), a.max(f)))
    }

    /// Lose focus. The selection is kept, as browsers keep it.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub(crate) fn position_of(&self, offset: usize) -> Position {
        let (block, offset) = self.locate(offset);
        let (run, offset) = self.run_at(block, offset);
        Position::new(node_id(block, run), offset)
    }

    /// Document offset of a port position, if it names an existing run.
    pub(crate) fn offset_of_position(
        &self,
        position: Position,
    ) -> Option<usize> {
        let (block, run) = split_node_id(position.node);
        let runs = &self.blocks.get(block)?.runs;
        if runs.is_empty() {
            return (run == 0 && position.offset == 0)
                .then(|| self.offset_of(block, 0));
        }
        let target = runs.get(run)?;
        if position.offset > target.len() {
            return None;
        }
        let run_start: usize = runs[..run].iter().map(|r| r.len()).sum();
        Some(self.offset_of(block, run_start + position.offset))
    }

    pub(crate) fn selection_state(&self) -> Option<SelectionState> {
        let (anchor, focus) = self.selection?;
        Some(SelectionState::new(
            self.position_of(anchor),
            self.position_of(focus),
        ))
    }
}

pub(crate) fn node_id(block: usize, run: usize) -> NodeId {
    NodeId(((block as u64) << 32) | (run as u64 & 0xffff_ffff))
}

pub(crate) fn split_node_id(node: NodeId) -> (usize, usize) {
    ((node.0 >> 32) as usize, (node.0 & 0xffff_ffff) as usize)
}

#[cfg(all(test, feature = "sys"))]
mod test {
    use super::*;
    use crate::tests::testutils_surface::surface;
    use crate::{SelectionPort, SelectionRange};

    #[test]
    fn selecting_clamps_to_the_document() {
        let mut s = surface("abc");
        s.select(1, 9);
        assert_eq!(s.selection(), Some((1, 3)));
    }

    #[test]
    fn caret_at_run_boundary_belongs_to_the_earlier_run() {
        let s = surface("<p>aa<strong>bb</strong>|</p>");
        let state = s.get_selection().expect("selection");
        assert_eq!(state.focus, Position::new(node_id(0, 1), 2));
        let s = surface("<p>aa|<strong>bb</strong></p>");
        let state = s.get_selection().expect("selection");
        assert_eq!(state.focus, Position::new(node_id(0, 0), 2));
    }

    #[test]
    fn offset_zero_only_at_block_start() {
        let s = surface("<p>ab</p><p>|cd</p>");
        let state = s.get_selection().expect("selection");
        assert_eq!(state.focus, Position::new(node_id(1, 0), 0));
    }

    #[test]
    fn ports_round_trip_positions() {
        let mut s = surface("<p>aa<em>bb</em></p><p>cc</p>");
        let range = SelectionRange::new(
            Position::new(node_id(0, 1), 1),
            Position::new(node_id(1, 0), 2),
        );
        assert!(s.set_selection(range));
        assert_eq!(s.selection(), Some((3, 7)));
    }

    #[test]
    fn unknown_nodes_are_rejected() {
        let mut s = surface("<p>a|b</p>");
        let bad = SelectionRange::collapsed(Position::new(node_id(4, 0), 0));
        assert!(!s.set_selection(bad));
        let too_far =
            SelectionRange::collapsed(Position::new(node_id(0, 0), 3));
        assert!(!s.set_selection(too_far));
        assert_eq!(s.selection(), Some((1, 1)));
    }

    #[test]
    fn empty_blocks_accept_offset_zero() {
        let mut s = surface("<p>a</p><p><br></p>");
        let range = SelectionRange::collapsed(Position::new(node_id(1, 0), 0));
        assert!(s.set_selection(range));
        assert_eq!(s.selection(), Some((2, 2)));
    }

    #[test]
    fn blur_keeps_the_selection() {
        let mut s = surface("a|b");
        s.blur();
        assert!(!s.has_focus());
        assert_eq!(s.selection(), Some((1, 1)));
    }
}
