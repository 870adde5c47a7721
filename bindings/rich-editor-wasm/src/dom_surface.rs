// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! A [`SelectionPort`] over a `contenteditable` element, using the
//! browser's selection and `execCommand`.

use std::cell::RefCell;

use rich_editor::{
    merge_style, FormatCommand, ListStyle, ListType, NodeId, Position,
    SelectionPort, SelectionRange, SelectionState,
};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlDocument, HtmlElement, Node};

use crate::node_registry::NodeRegistry;

pub struct DomSurface {
    element: HtmlElement,
    document: HtmlDocument,
    /// DOM nodes handed out as [`NodeId`]s. Nodes that have left the
    /// element are pruned on every selection read.
    nodes: RefCell<NodeRegistry<Node>>,
}

impl DomSurface {
    pub fn new(element: HtmlElement) -> Option<Self> {
        let document = element.owner_document()?.dyn_into().ok()?;
        Some(Self {
            element,
            document,
            nodes: RefCell::new(NodeRegistry::new()),
        })
    }

    fn node_id(&self, node: Node) -> NodeId {
        self.nodes.borrow_mut().id_of(node)
    }

    fn node(&self, id: NodeId) -> Option<Node> {
        self.nodes.borrow().get(id)
    }

    fn contains(&self, node: &Node) -> bool {
        self.element.contains(Some(node))
    }

    fn selection(&self) -> Option<web_sys::Selection> {
        let window = web_sys::window()?;
        match window.get_selection() {
            Ok(Some(selection)) if selection.range_count() > 0 => {
                Some(selection)
            }
            _ => None,
        }
    }
}

impl SelectionPort for DomSurface {
    fn get_selection(&self) -> Option<SelectionState> {
        let selection = self.selection()?;
        let anchor = selection.anchor_node()?;
        let focus = selection.focus_node()?;
        if !self.contains(&anchor) || !self.contains(&focus) {
            return None;
        }
        self.nodes.borrow_mut().retain(|node| self.contains(node));
        let anchor = Position::new(
            self.node_id(anchor),
            selection.anchor_offset() as usize,
        );
        let focus = Position::new(
            self.node_id(focus),
            selection.focus_offset() as usize,
        );
        Some(SelectionState::new(anchor, focus))
    }

    fn set_selection(&mut self, range: SelectionRange) -> bool {
        let (Some(anchor), Some(focus)) =
            (self.node(range.anchor.node), self.node(range.focus.node))
        else {
            return false;
        };
        if !self.contains(&anchor) || !self.contains(&focus) {
            return false;
        }
        let Some(selection) = web_sys::window()
            .and_then(|window| window.get_selection().ok().flatten())
        else {
            return false;
        };
        selection
            .set_base_and_extent(
                &anchor,
                range.anchor.offset as u32,
                &focus,
                range.focus.offset as u32,
            )
            .is_ok()
    }

    fn query_format_state(&self, command: FormatCommand) -> bool {
        self.document
            .query_command_state(command.as_ref())
            .unwrap_or(false)
    }

    fn exec_command(
        &mut self,
        command: FormatCommand,
        value: Option<&str>,
    ) -> bool {
        let result = match value {
            Some(value) => self.document.exec_command_with_show_ui_and_value(
                command.as_ref(),
                false,
                value,
            ),
            None => self.document.exec_command(command.as_ref()),
        };
        match result {
            Ok(accepted) => accepted,
            Err(err) => {
                warn!(%command, ?err, "execCommand threw");
                false
            }
        }
    }

    fn has_focus(&self) -> bool {
        let element: &Element = &self.element;
        self.document.active_element().as_ref() == Some(element)
    }

    fn focus(&mut self) {
        if let Err(err) = self.element.focus() {
            debug!(?err, "Could not focus the surface");
        }
    }

    fn content_html(&self) -> String {
        self.element.inner_html()
    }

    fn set_content_html(&mut self, html: &str) {
        self.element.set_inner_html(html);
        self.nodes.borrow_mut().clear();
    }

    fn set_list_style(
        &mut self,
        list_type: ListType,
        style: &ListStyle,
    ) -> bool {
        let tag = match list_type {
            ListType::Ordered => "ol",
            ListType::Unordered => "ul",
        };
        let mut styled = false;
        for (selector, value) in [
            (tag.to_owned(), &style.list),
            (format!("{tag} > li"), &style.item),
        ] {
            let Ok(found) = self.element.query_selector_all(&selector) else {
                continue;
            };
            for index in 0..found.length() {
                let Some(element) = found
                    .item(index)
                    .and_then(|node| node.dyn_into::<Element>().ok())
                else {
                    continue;
                };
                let existing =
                    element.get_attribute("style").unwrap_or_default();
                let merged = merge_style(&existing, value);
                if element.set_attribute("style", &merged).is_ok() {
                    styled = true;
                }
            }
        }
        styled
    }
}
