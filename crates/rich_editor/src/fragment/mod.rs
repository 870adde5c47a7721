// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The structural, tag-restricted representation of rich content.
//!
//! A [`Fragment`] is what the editor exchanges with its owner: an ordered
//! list of [`Node`]s whose elements only ever use an allow-listed [`Tag`] and
//! a filtered `style` attribute. The constructors enforce both rules, so a
//! fragment cannot be built in a state that violates them.

pub mod style;
pub mod tag;

use std::fmt;

pub use style::{filter_style, merge_style, ALLOWED_STYLE_PROPERTIES};
pub use tag::Tag;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Raw, unescaped text.
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn line_break() -> Self {
        Node::Element(Element::new(Tag::Br))
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Node::Element(e) if e.tag == Tag::Br)
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: Tag,
    style: Option<String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            style: None,
            children: Vec::new(),
        }
    }

    /// An element whose style attribute is filtered down to the allowed
    /// properties. An empty result leaves the element unstyled.
    pub fn with_style(tag: Tag, style: &str) -> Self {
        let mut element = Self::new(tag);
        element.set_style(style);
        element
    }

    pub fn with_children(
        tag: Tag,
        children: impl IntoIterator<Item = Node>,
    ) -> Self {
        let mut element = Self::new(tag);
        element.extend(children);
        element
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn set_style(&mut self, style: &str) {
        let filtered = filter_style(style);
        self.style = if filtered.is_empty() {
            None
        } else {
            Some(filtered)
        };
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Append a child. Void elements ignore children, empty text is skipped
    /// and adjacent text nodes are merged.
    pub fn push(&mut self, node: impl Into<Node>) {
        if self.tag.is_void() {
            return;
        }
        push_node(&mut self.children, node.into());
    }

    pub fn extend(&mut self, nodes: impl IntoIterator<Item = Node>) {
        for node in nodes {
            self.push(node);
        }
    }
}

/// Append `node` to `nodes`, merging adjacent text and skipping empty text.
pub(crate) fn push_node(nodes: &mut Vec<Node>, node: Node) {
    match node {
        Node::Text(text) if text.is_empty() => {}
        Node::Text(text) => {
            if let Some(Node::Text(last)) = nodes.last_mut() {
                last.push_str(&text);
            } else {
                nodes.push(Node::Text(text));
            }
        }
        element => nodes.push(element),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut fragment = Self::new();
        for node in nodes {
            fragment.push(node);
        }
        fragment
    }

    /// A single unformatted block holding `text` verbatim.
    pub fn plain_block(text: &str) -> Self {
        if text.is_empty() {
            return Self::new();
        }
        Self::from_nodes([Element::with_children(
            Tag::Div,
            [Node::text(text)],
        )
        .into()])
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        push_node(&mut self.nodes, node.into());
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for node in &self.nodes {
            write_html(node, &mut html);
        }
        html
    }

    /// Flatten the fragment to text: line breaks become `\n` and every
    /// block sits on its own line. The terminator of the final line, a
    /// closing block or a trailing `<br>`, is dropped, so text rebuilt
    /// one node per line flattens back to the lines it came from.
    pub fn text(&self) -> String {
        let mut text = String::new();
        let mut ends_line = false;
        for node in &self.nodes {
            ends_line = write_text(node, &mut text);
        }
        if ends_line {
            text.pop();
        }
        text
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

fn write_html(node: &Node, html: &mut String) {
    match node {
        Node::Text(text) => html.push_str(&html_escape::encode_text(text)),
        Node::Element(element) => {
            let tag = element.tag.as_ref();
            html.push('<');
            html.push_str(tag);
            if let Some(style) = &element.style {
                html.push_str(" style=\"");
                html.push_str(&html_escape::encode_double_quoted_attribute(
                    style,
                ));
                html.push('"');
            }
            html.push('>');
            if element.tag.is_void() {
                return;
            }
            for child in &element.children {
                write_html(child, html);
            }
            html.push_str("</");
            html.push_str(tag);
            html.push('>');
        }
    }
}

/// Returns true when the text now ends with a line terminator written by
/// this node or its last descendant: a line break or a closing block.
fn write_text(node: &Node, text: &mut String) -> bool {
    match node {
        Node::Text(t) => {
            text.push_str(t);
            false
        }
        Node::Element(element) if element.tag.is_void() => {
            text.push('\n');
            true
        }
        Node::Element(element) => {
            let is_block = element.tag.is_block();
            if is_block && !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            let mut closed = false;
            for child in &element.children {
                closed = write_text(child, text);
            }
            if is_block && !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
                true
            } else {
                closed
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn div(text: &str) -> Node {
        Element::with_children(Tag::Div, [Node::text(text)]).into()
    }

    #[test]
    fn empty_fragment_serializes_to_nothing() {
        let fragment = Fragment::new();
        assert_eq!(fragment.to_html(), "");
        assert_eq!(fragment.text(), "");
    }

    #[test]
    fn text_is_escaped_when_serialized() {
        let fragment = Fragment::from_nodes([div("a < b & c")]);
        assert_eq!(fragment.to_html(), "<div>a &lt; b &amp; c</div>");
        assert_eq!(fragment.text(), "a < b & c");
    }

    #[test]
    fn line_breaks_are_void() {
        let fragment =
            Fragment::from_nodes([Node::text("a"), Node::line_break()]);
        assert_eq!(fragment.to_html(), "a<br>");
        assert_eq!(fragment.text(), "a");
    }

    #[test]
    fn trailing_break_after_a_block_is_one_blank_line() {
        let fragment = Fragment::from_nodes([div("a"), Node::line_break()]);
        assert_eq!(fragment.text(), "a\n");
        let fragment = Fragment::from_nodes([
            div("a"),
            Node::line_break(),
            Node::line_break(),
        ]);
        assert_eq!(fragment.text(), "a\n\n");
    }

    #[test]
    fn break_closing_a_block_is_not_doubled() {
        let fragment = Fragment::from_nodes([Element::with_children(
            Tag::P,
            [Node::text("x"), Node::line_break()],
        )
        .into()]);
        assert_eq!(fragment.text(), "x");
    }

    #[test]
    fn void_elements_ignore_children() {
        let mut br = Element::new(Tag::Br);
        br.push(Node::text("lost"));
        assert!(br.children().is_empty());
    }

    #[test]
    fn styles_are_filtered_on_construction() {
        let element = Element::with_style(
            Tag::Span,
            "color: red; font-style: italic",
        );
        assert_eq!(element.style(), Some("font-style: italic"));
        let element = Element::with_style(Tag::Span, "color: red");
        assert_eq!(element.style(), None);
    }

    #[test]
    fn style_attribute_is_escaped() {
        let fragment = Fragment::from_nodes([Element::with_style(
            Tag::Span,
            "font-weight: \"bold\"",
        )
        .into()]);
        assert_eq!(
            fragment.to_html(),
            "<span style=\"font-weight: &quot;bold&quot;\"></span>"
        );
    }

    #[test]
    fn adjacent_text_nodes_merge() {
        let fragment = Fragment::from_nodes([
            Node::text("a"),
            Node::text(""),
            Node::text("b"),
        ]);
        assert_eq!(fragment.nodes(), &[Node::text("ab")]);
    }

    #[test]
    fn blocks_sit_on_their_own_lines() {
        let fragment = Fragment::from_nodes([div("one"), div("two")]);
        assert_eq!(fragment.text(), "one\ntwo");
    }

    #[test]
    fn blank_line_between_blocks_survives_flattening() {
        let fragment =
            Fragment::from_nodes([div("one"), Node::line_break(), div("two")]);
        assert_eq!(fragment.text(), "one\n\ntwo");
    }

    #[test]
    fn list_items_flatten_one_per_line() {
        let list = Element::with_children(
            Tag::Ul,
            [
                Element::with_children(Tag::Li, [Node::text("a")]).into(),
                Element::with_children(Tag::Li, [Node::text("b")]).into(),
            ],
        );
        let fragment = Fragment::from_nodes([Node::text("x"), list.into()]);
        assert_eq!(fragment.to_html(), "x<ul><li>a</li><li>b</li></ul>");
        assert_eq!(fragment.text(), "x\na\nb");
    }

    #[test]
    fn inline_elements_do_not_break_lines() {
        let fragment = Fragment::from_nodes([Element::with_children(
            Tag::P,
            [
                Node::text("a "),
                Element::with_children(Tag::Strong, [Node::text("b")]).into(),
                Node::text(" c"),
            ],
        )
        .into()]);
        assert_eq!(fragment.text(), "a b c");
    }

    #[test]
    fn plain_block_keeps_text_verbatim() {
        let fragment = Fragment::plain_block("  line one\nline two ");
        assert_eq!(fragment.to_html(), "<div>  line one\nline two </div>");
        assert!(Fragment::plain_block("").is_empty());
    }
}
