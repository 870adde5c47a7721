// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use rich_editor::NodeId;

/// Hands out stable [`NodeId`]s for DOM nodes. Ids are never reused, so a
/// stale id resolves to nothing rather than to a different node.
pub struct NodeRegistry<T> {
    entries: Vec<(u64, T)>,
    next_id: u64,
}

impl<T: PartialEq + Clone> NodeRegistry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub fn id_of(&mut self, node: T) -> NodeId {
        if let Some((id, _)) = self.entries.iter().find(|(_, n)| *n == node)
        {
            return NodeId(*id);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, node));
        NodeId(id)
    }

    pub fn get(&self, id: NodeId) -> Option<T> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id.0)
            .map(|(_, node)| node.clone())
    }

    /// Forget every node for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.entries.retain(|(_, node)| keep(node));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}
