// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::borrow::Cow;
use std::cell::{Ref, RefCell};

use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{
    parse_fragment, Attribute, LocalName, Namespace, ParseOpts, QualName,
};
use tracing::debug;

use super::{
    MarkupParser, PaDom, PaDomHandle, PaDomNode, PaNodeContainer, PaNodeText,
    ParseError,
};

/// Inputs larger than this are refused instead of parsed.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 4 * 1024 * 1024;

pub(crate) fn paqual_name(name: &str) -> QualName {
    QualName::new(
        None,
        Namespace::from("http://www.w3.org/1999/xhtml"),
        LocalName::from(name),
    )
}

/// The default [`MarkupParser`], backed by html5ever's fragment parser.
///
/// Malformed markup is repaired the way browsers repair it: unclosed
/// elements are closed, misnested formatting is split and stray table text
/// is foster-parented in front of its table.
#[derive(Clone, Debug)]
pub struct Html5everParser {
    max_input_bytes: usize,
}

impl Html5everParser {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_INPUT_BYTES)
    }

    pub fn with_limit(max_input_bytes: usize) -> Self {
        Self { max_input_bytes }
    }
}

impl Default for Html5everParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupParser for Html5everParser {
    fn parse(&self, markup: &str) -> Result<PaDom, ParseError> {
        if markup.len() > self.max_input_bytes {
            return Err(ParseError::TooLarge {
                len: markup.len(),
                limit: self.max_input_bytes,
            });
        }
        Ok(PaDomCreator::parse(markup))
    }
}

struct CreatorState {
    dom: PaDom,
    /// Qualified names, indexed like the nodes of `dom`. Non-element nodes
    /// hold an empty name.
    names: Vec<QualName>,
    parse_errors: usize,
}

impl CreatorState {
    fn add_node(&mut self, node: PaDomNode, name: QualName) -> PaDomHandle {
        let handle = self.dom.add_node(node);
        self.names.push(name);
        handle
    }

    fn add_text(&mut self, content: &str) -> PaDomHandle {
        self.add_node(
            PaDomNode::Text(PaNodeText {
                content: content.to_owned(),
            }),
            paqual_name(""),
        )
    }

    /// Append text to `handle` if it is a text node.
    fn extend_text(&mut self, handle: &PaDomHandle, content: &str) -> bool {
        match self.dom.get_mut_node(handle) {
            PaDomNode::Text(text) => {
                text.content.push_str(content);
                true
            }
            _ => false,
        }
    }
}

pub(crate) struct PaDomCreator {
    state: RefCell<CreatorState>,
}

impl PaDomCreator {
    pub fn parse(html: &str) -> PaDom {
        parse_fragment(
            PaDomCreator::default(),
            ParseOpts::default(),
            paqual_name("body"),
            vec![],
        )
        .from_utf8()
        .one(html.as_bytes())
    }
}

impl Default for PaDomCreator {
    fn default() -> Self {
        Self {
            state: RefCell::new(CreatorState {
                dom: PaDom::new(),
                names: vec![paqual_name("")],
                parse_errors: 0,
            }),
        }
    }
}

impl TreeSink for PaDomCreator {
    type Handle = PaDomHandle;
    type Output = PaDom;
    type ElemName<'a> = Ref<'a, QualName>;

    fn finish(self) -> Self::Output {
        let state = self.state.into_inner();
        if state.parse_errors > 0 {
            debug!(
                parse_errors = state.parse_errors,
                "Markup repaired while parsing"
            );
        }
        state.dom
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        debug!(%msg, "Markup parse error");
        self.state.borrow_mut().parse_errors += 1;
    }

    fn get_document(&self) -> Self::Handle {
        self.state.borrow().dom.document_handle().clone()
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        Ref::map(self.state.borrow(), |state| &state.names[target.0])
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let container = PaNodeContainer::with_attrs(
            &name.local,
            attrs
                .iter()
                .map(|attr| (&*attr.name.local, &*attr.value)),
        );
        self.state
            .borrow_mut()
            .add_node(PaDomNode::Container(container), name)
    }

    fn create_comment(&self, _text: StrTendril) -> Self::Handle {
        self.state
            .borrow_mut()
            .add_node(PaDomNode::Comment, paqual_name(""))
    }

    fn create_pi(
        &self,
        _target: StrTendril,
        _data: StrTendril,
    ) -> Self::Handle {
        self.state
            .borrow_mut()
            .add_node(PaDomNode::Comment, paqual_name(""))
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        let state = &mut *self.state.borrow_mut();
        match child {
            NodeOrText::AppendNode(child) => {
                state.dom.append_child(parent, child);
            }
            NodeOrText::AppendText(tendril) => {
                let last = state.dom.children(parent).last().cloned();
                if let Some(last) = last {
                    if state.extend_text(&last, &tendril) {
                        return;
                    }
                }
                let text = state.add_text(&tendril);
                state.dom.append_child(parent, text);
            }
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let has_parent = self.state.borrow().dom.parent_of(element).is_some();
        if has_parent {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
        // Doctypes carry no content
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        target.clone()
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x == y
    }

    fn set_quirks_mode(&self, _mode: QuirksMode) {}

    fn append_before_sibling(
        &self,
        sibling: &Self::Handle,
        new_node: NodeOrText<Self::Handle>,
    ) {
        let state = &mut *self.state.borrow_mut();
        let Some((parent, index)) = state.dom.parent_of(sibling) else {
            return;
        };
        let child = match new_node {
            NodeOrText::AppendNode(node) => node,
            NodeOrText::AppendText(tendril) => {
                let previous = index
                    .checked_sub(1)
                    .map(|i| state.dom.children(&parent)[i].clone());
                if let Some(previous) = previous {
                    if state.extend_text(&previous, &tendril) {
                        return;
                    }
                }
                state.add_text(&tendril)
            }
        };
        state.dom.detach(&child);
        let index = match state.dom.parent_of(sibling) {
            Some((_, index)) => index,
            None => return,
        };
        state.dom.insert_child(&parent, index, child);
    }

    fn add_attrs_if_missing(
        &self,
        target: &Self::Handle,
        attrs: Vec<Attribute>,
    ) {
        let state = &mut *self.state.borrow_mut();
        if let PaDomNode::Container(node) = state.dom.get_mut_node(target) {
            for attr in attrs {
                let name = attr.name.local.to_ascii_lowercase();
                let name = name.to_string();
                if node.get_attr(&name).is_none() {
                    node.attrs.push((name, attr.value.to_string()));
                }
            }
        }
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        self.state.borrow_mut().dom.detach(target);
    }

    fn reparent_children(
        &self,
        node: &Self::Handle,
        new_parent: &Self::Handle,
    ) {
        self.state
            .borrow_mut()
            .dom
            .reparent_children(node, new_parent);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// A compact rendering of the tree used to compare parser output.
    fn render(dom: &PaDom, handle: &PaDomHandle, out: &mut String) {
        match dom.get_node(handle) {
            PaDomNode::Text(t) => out.push_str(&t.content),
            PaDomNode::Comment => out.push_str("<!---->"),
            PaDomNode::Document(c) => {
                for child in &c.children {
                    render(dom, child, out);
                }
            }
            PaDomNode::Container(c) => {
                out.push('<');
                out.push_str(&c.name);
                out.push('>');
                for child in &c.children {
                    render(dom, child, out);
                }
                out.push_str("</");
                out.push_str(&c.name);
                out.push('>');
            }
        }
    }

    fn parse(html: &str) -> String {
        let dom = PaDomCreator::parse(html);
        let mut out = String::new();
        render(&dom, dom.document_handle(), &mut out);
        out
    }

    #[test]
    fn fragments_are_wrapped_in_a_single_html_element() {
        assert_eq!(parse("<b>x</b>"), "<html><b>x</b></html>");
    }

    #[test]
    fn attributes_are_kept() {
        let dom =
            PaDomCreator::parse("<span STYLE=\"font-weight:bold\">x</span>");
        let html = &dom.children(dom.document_handle())[0];
        let span = &dom.children(html)[0];
        match dom.get_node(span) {
            PaDomNode::Container(c) => {
                assert_eq!(c.get_attr("style"), Some("font-weight:bold"))
            }
            other => panic!("Expected a span, got {other:?}"),
        }
    }

    #[test]
    fn unclosed_elements_are_closed() {
        assert_eq!(
            parse("<p>one<p>two"),
            "<html><p>one</p><p>two</p></html>"
        );
    }

    #[test]
    fn misnested_formatting_is_repaired() {
        assert_eq!(
            parse("<b>a<i>b</b>c</i>"),
            "<html><b>a<i>b</i></b><i>c</i></html>"
        );
    }

    #[test]
    fn stray_table_text_is_foster_parented() {
        assert_eq!(
            parse("<table>oops<tr><td>cell</td></tr></table>"),
            "<html>oops<table><tbody><tr><td>cell</td></tr></tbody>\
             </table></html>"
        );
    }

    #[test]
    fn comments_become_placeholder_nodes() {
        assert_eq!(parse("a<!-- note -->b"), "<html>a<!---->b</html>");
    }

    #[test]
    fn adjacent_text_is_merged() {
        let dom = PaDomCreator::parse("a&amp;b");
        let html = &dom.children(dom.document_handle())[0];
        assert_eq!(dom.children(html).len(), 1);
        assert_eq!(dom.text_content(html, &[]), "a&b");
    }

    #[test]
    fn oversized_input_is_refused() {
        let parser = Html5everParser::with_limit(4);
        assert_eq!(
            parser.parse("<p>too long</p>"),
            Err(ParseError::TooLarge { len: 15, limit: 4 })
        );
        assert!(parser.parse("ok").is_ok());
    }
}
