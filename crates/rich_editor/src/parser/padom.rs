// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::PaNodeContainer;

/// Index of a node inside a [`PaDom`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PaDomHandle(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct PaNodeText {
    pub content: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PaDomNode {
    Document(PaNodeContainer),
    Container(PaNodeContainer),
    Text(PaNodeText),
    /// Comments and processing instructions. They are kept in the tree so
    /// handles stay valid but never contribute content.
    Comment,
}

impl PaDomNode {
    fn children(&self) -> &[PaDomHandle] {
        match self {
            PaDomNode::Document(c) | PaDomNode::Container(c) => &c.children,
            PaDomNode::Text(_) | PaDomNode::Comment => &[],
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<PaDomHandle>> {
        match self {
            PaDomNode::Document(c) | PaDomNode::Container(c) => {
                Some(&mut c.children)
            }
            PaDomNode::Text(_) | PaDomNode::Comment => None,
        }
    }
}

/// A parsed markup tree.
///
/// Parents refer to their children by handle and every node is owned by the
/// flat `nodes` list. Nodes that were detached while parsing stay in the list
/// but are unreachable from the document, so walks from the document handle
/// never see them.
#[derive(Clone, Debug, PartialEq)]
pub struct PaDom {
    nodes: Vec<PaDomNode>,
    document_handle: PaDomHandle,
}

impl Default for PaDom {
    fn default() -> Self {
        Self::new()
    }
}

impl PaDom {
    pub fn new() -> Self {
        Self {
            nodes: vec![PaDomNode::Document(PaNodeContainer::new(
                "#document",
            ))],
            document_handle: PaDomHandle(0),
        }
    }

    pub fn document_handle(&self) -> &PaDomHandle {
        &self.document_handle
    }

    pub fn get_document(&self) -> &PaDomNode {
        self.get_node(&self.document_handle)
    }

    pub fn get_node(&self, handle: &PaDomHandle) -> &PaDomNode {
        &self.nodes[handle.0]
    }

    pub fn get_mut_node(&mut self, handle: &PaDomHandle) -> &mut PaDomNode {
        &mut self.nodes[handle.0]
    }

    pub fn add_node(&mut self, node: PaDomNode) -> PaDomHandle {
        self.nodes.push(node);
        PaDomHandle(self.nodes.len() - 1)
    }

    pub fn children(&self, handle: &PaDomHandle) -> &[PaDomHandle] {
        self.get_node(handle).children()
    }

    /// Append `child` to `parent`. Returns false when `parent` cannot hold
    /// children.
    pub fn append_child(
        &mut self,
        parent: &PaDomHandle,
        child: PaDomHandle,
    ) -> bool {
        match self.get_mut_node(parent).children_mut() {
            Some(children) => {
                children.push(child);
                true
            }
            None => false,
        }
    }

    /// Insert `child` into `parent` at `index` (clamped to the end).
    pub fn insert_child(
        &mut self,
        parent: &PaDomHandle,
        index: usize,
        child: PaDomHandle,
    ) -> bool {
        match self.get_mut_node(parent).children_mut() {
            Some(children) => {
                let index = index.min(children.len());
                children.insert(index, child);
                true
            }
            None => false,
        }
    }

    /// Parent of `handle` and the child's index within it.
    pub fn parent_of(
        &self,
        handle: &PaDomHandle,
    ) -> Option<(PaDomHandle, usize)> {
        self.nodes.iter().enumerate().find_map(|(i, node)| {
            node.children()
                .iter()
                .position(|c| c == handle)
                .map(|index| (PaDomHandle(i), index))
        })
    }

    pub fn detach(&mut self, handle: &PaDomHandle) {
        if let Some((parent, index)) = self.parent_of(handle) {
            if let Some(children) = self.get_mut_node(&parent).children_mut()
            {
                children.remove(index);
            }
        }
    }

    /// Move every child of `from` to the end of `to`.
    pub fn reparent_children(&mut self, from: &PaDomHandle, to: &PaDomHandle) {
        let moved = match self.get_mut_node(from).children_mut() {
            Some(children) => std::mem::take(children),
            None => return,
        };
        match self.get_mut_node(to).children_mut() {
            Some(children) => children.extend(moved),
            None => {
                if let Some(children) =
                    self.get_mut_node(from).children_mut()
                {
                    *children = moved;
                }
            }
        }
    }

    /// Concatenated text of every text node below `handle`. Elements in
    /// `skip` are not descended into.
    pub fn text_content(&self, handle: &PaDomHandle, skip: &[&str]) -> String {
        let mut text = String::new();
        self.collect_text(handle, skip, &mut text);
        text
    }

    fn collect_text(
        &self,
        handle: &PaDomHandle,
        skip: &[&str],
        out: &mut String,
    ) {
        match self.get_node(handle) {
            PaDomNode::Text(t) => out.push_str(&t.content),
            PaDomNode::Comment => {}
            PaDomNode::Container(c) if skip.contains(&c.name.as_str()) => {}
            PaDomNode::Document(c) | PaDomNode::Container(c) => {
                for child in &c.children {
                    self.collect_text(child, skip, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn text(dom: &mut PaDom, content: &str) -> PaDomHandle {
        dom.add_node(PaDomNode::Text(PaNodeText {
            content: content.to_owned(),
        }))
    }

    fn element(dom: &mut PaDom, name: &str) -> PaDomHandle {
        dom.add_node(PaDomNode::Container(PaNodeContainer::new(name)))
    }

    #[test]
    fn new_dom_only_holds_a_document() {
        let dom = PaDom::new();
        assert!(matches!(dom.get_document(), PaDomNode::Document(_)));
        assert!(dom.children(dom.document_handle()).is_empty());
    }

    #[test]
    fn text_content_skips_requested_elements() {
        let mut dom = PaDom::new();
        let doc = dom.document_handle().clone();
        let p = element(&mut dom, "p");
        let style = element(&mut dom, "style");
        let a = text(&mut dom, "visible");
        let b = text(&mut dom, "p { color: red }");
        dom.append_child(&doc, p.clone());
        dom.append_child(&p, a);
        dom.append_child(&p, style.clone());
        dom.append_child(&style, b);
        assert_eq!(dom.text_content(&doc, &["style"]), "visible");
        assert_eq!(dom.text_content(&doc, &[]), "visiblep { color: red }");
    }

    #[test]
    fn detached_nodes_are_unreachable() {
        let mut dom = PaDom::new();
        let doc = dom.document_handle().clone();
        let a = text(&mut dom, "a");
        dom.append_child(&doc, a.clone());
        assert_eq!(dom.parent_of(&a), Some((doc.clone(), 0)));
        dom.detach(&a);
        assert_eq!(dom.parent_of(&a), None);
        assert_eq!(dom.text_content(&doc, &[]), "");
    }

    #[test]
    fn text_nodes_cannot_hold_children() {
        let mut dom = PaDom::new();
        let a = text(&mut dom, "a");
        let b = text(&mut dom, "b");
        assert!(!dom.append_child(&a, b));
    }

    #[test]
    fn reparenting_moves_children_in_order() {
        let mut dom = PaDom::new();
        let from = element(&mut dom, "b");
        let to = element(&mut dom, "i");
        let x = text(&mut dom, "x");
        let y = text(&mut dom, "y");
        dom.append_child(&from, x.clone());
        dom.append_child(&from, y.clone());
        dom.reparent_children(&from, &to);
        assert!(dom.children(&from).is_empty());
        assert_eq!(dom.children(&to), &[x, y]);
    }
}
