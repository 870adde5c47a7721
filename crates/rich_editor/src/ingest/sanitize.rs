// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::fragment::{push_node, Element, Fragment, Node, Tag};
use crate::parser::{MarkupParser, PaDom, PaDomHandle, PaDomNode, ParseError};

/// Elements whose content is never shown and is dropped with them.
pub const DISCARDED_TAGS: [&str; 8] = [
    "script", "style", "template", "head", "title", "noscript", "meta", "link",
];

/// Wrappers the parser adds around a fragment. Their children are kept, the
/// wrappers themselves are not.
const TRANSPARENT_TAGS: [&str; 2] = ["html", "body"];

static META_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<meta[^>]*>").expect("valid meta pattern"));

/// Remove `<meta …>` tags that pasteboards put in front of their markup.
pub fn strip_meta_tags(markup: &str) -> String {
    META_TAG.replace_all(markup, "").into_owned()
}

/// Parse untrusted markup and reduce it to a [`Fragment`].
pub fn sanitize_markup(
    markup: &str,
    parser: &dyn MarkupParser,
) -> Result<Fragment, ParseError> {
    let cleaned = strip_meta_tags(markup);
    let dom = parser.parse(&cleaned)?;
    Ok(sanitize(&dom))
}

/// Reduce a parsed tree to a [`Fragment`].
///
/// Allow-listed elements keep their tag and a filtered `style`. Comments and
/// the [`DISCARDED_TAGS`] vanish. Any other element is replaced by its text
/// followed by a line break, so no visible text is lost.
pub fn sanitize(dom: &PaDom) -> Fragment {
    let mut nodes = Vec::new();
    convert_children(dom, dom.document_handle(), &mut nodes);
    Fragment::from_nodes(nodes)
}

fn convert_children(dom: &PaDom, handle: &PaDomHandle, out: &mut Vec<Node>) {
    for child in dom.children(handle) {
        convert(dom, child, out);
    }
}

fn convert(dom: &PaDom, handle: &PaDomHandle, out: &mut Vec<Node>) {
    match dom.get_node(handle) {
        PaDomNode::Text(text) => push_node(out, Node::text(&text.content)),
        PaDomNode::Comment => {}
        PaDomNode::Document(_) => convert_children(dom, handle, out),
        PaDomNode::Container(container) => {
            let name = container.name.as_str();
            if TRANSPARENT_TAGS.contains(&name) {
                convert_children(dom, handle, out);
            } else if DISCARDED_TAGS.contains(&name) {
                debug!(tag = name, "Dropping non-content element");
            } else if let Ok(tag) = Tag::from_str(name) {
                let mut element = match container.get_attr("style") {
                    Some(style) => Element::with_style(tag, style),
                    None => Element::new(tag),
                };
                let mut children = Vec::new();
                convert_children(dom, handle, &mut children);
                element.extend(children);
                push_node(out, element.into());
            } else {
                debug!(tag = name, "Flattening disallowed element");
                push_node(
                    out,
                    Node::text(dom.text_content(handle, &DISCARDED_TAGS)),
                );
                push_node(out, Node::line_break());
            }
        }
    }
}

#[cfg(all(test, feature = "sys"))]
mod test {
    use indoc::indoc;

    use super::*;
    use crate::parser::Html5everParser;

    fn sanitized(markup: &str) -> String {
        sanitize_markup(markup, &Html5everParser::new())
            .map(|f| f.to_html())
            .unwrap_or_else(|e| panic!("Failed to sanitize {markup}: {e}"))
    }

    fn assert_idempotent(markup: &str) {
        let once = sanitized(markup);
        assert_eq!(sanitized(&once), once, "re-sanitizing {markup}");
    }

    #[test]
    fn allowed_markup_is_unchanged() {
        let markup = "<p>Hello <strong>big</strong> <em>wide</em> \
                      <u>world</u></p><ul><li>one</li></ul>";
        assert_eq!(sanitized(markup), markup);
    }

    #[test]
    fn table_is_flattened_to_text_and_a_break() {
        assert_eq!(
            sanitized("<table><tr><td>Q1 Revenue</td></tr></table>"),
            "Q1 Revenue<br>"
        );
    }

    #[test]
    fn unknown_inline_elements_are_flattened() {
        assert_eq!(
            sanitized(
                "<p>See <a href=\"https://example.com\">the docs</a></p>"
            ),
            "<p>See the docs<br></p>"
        );
    }

    #[test]
    fn attributes_other_than_style_are_dropped() {
        assert_eq!(
            sanitized(
                "<p class=\"MsoNormal\" id=\"x\" onclick=\"evil()\">text</p>"
            ),
            "<p>text</p>"
        );
    }

    #[test]
    fn styles_are_filtered() {
        assert_eq!(
            sanitized(
                "<span style=\"color:red;font-weight:700;mso-bidi:x\">\
                 bold</span>"
            ),
            "<span style=\"font-weight: 700\">bold</span>"
        );
    }

    #[test]
    fn scripts_styles_and_comments_vanish() {
        let markup = indoc! {r#"
            <style>p { color: red }</style><!-- note --><p>kept</p><script>
            alert(1)</script>"#};
        assert_eq!(sanitized(markup), "<p>kept</p>");
    }

    #[test]
    fn scripts_inside_flattened_elements_vanish() {
        assert_eq!(
            sanitized("<section>a<script>b</script>c</section>"),
            "ac<br>"
        );
    }

    #[test]
    fn meta_tags_are_stripped_before_parsing() {
        assert_eq!(
            sanitized("<META charset=\"utf-8\"><b>x</b>"),
            "<b>x</b>"
        );
    }

    #[test]
    fn malformed_markup_is_repaired() {
        assert_eq!(sanitized("<p>one<p>two"), "<p>one</p><p>two</p>");
        assert_eq!(sanitized("<b>unclosed"), "<b>unclosed</b>");
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(sanitized("1 &lt; 2 &amp; 3"), "1 &lt; 2 &amp; 3");
    }

    #[test]
    fn word_markup_keeps_its_text() {
        let markup = indoc! {r#"
            <html xmlns:o="urn:schemas-microsoft-com:office:office">
            <body><!--StartFragment--><p class=MsoNormal
            style='margin-left:36pt;text-indent:-18pt;mso-list:l0 level1 lfo1'>
            <span style='font-family:Symbol'>·</span>Led the team<o:p></o:p></p>
            <!--EndFragment--></body></html>"#};
        let fragment = sanitize_markup(markup, &Html5everParser::new())
            .expect("sanitized");
        assert!(fragment.text().contains("Led the team"));
        assert!(!fragment.to_html().contains("mso-list"));
        assert!(!fragment.to_html().contains("class"));
    }

    #[test]
    fn sanitizing_is_idempotent() {
        for markup in [
            "<table><tr><td>Q1 Revenue</td></tr></table>",
            "<b>a<i>b</b>c</i>",
            "<p style=\"TEXT-ALIGN:center;color:red\">x</p>",
            "<ul><li>a<ul><li>b</li></ul></li></ul>",
            "<div><font face=\"Arial\">f</font> tail</div>",
            "a &amp; b<br>c",
            "<table>stray<tr><td>cell</td></tr></table>",
            "<h3><p>nested</p></h3>",
            "",
        ] {
            assert_idempotent(markup);
        }
    }
}
