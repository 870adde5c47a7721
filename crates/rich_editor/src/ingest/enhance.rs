// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Structure recovery for pasted plain text.
//!
//! Every line is classified on its own and the first matching rule wins:
//!
//! 1. blank line: a line break
//! 2. bullet glyph or `-`, `*`, `+` followed by whitespace: unordered item
//! 3. `1. `, `2. `, …: ordered item
//! 4. upper-case line under 100 characters with at least one letter: bold
//!    `h3`
//! 5. line ending in `:` under 100 characters: bold `h4`
//! 6. leading tab or 4+ spaces: indented block
//! 7. anything else: plain block
//!
//! These are heuristics. A short line ending in `:` that is really a
//! sentence still becomes a heading. A line with no letters at all, such as
//! `2020 - 2024`, has no case and stays plain.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fragment::{Element, Fragment, Node, Tag};
use crate::ListType;

/// Lines this long or longer are never treated as headings.
pub const HEADING_MAX_CHARS: usize = 100;

/// Left margin per indentation level, in pixels.
pub const INDENT_STEP_PX: usize = 20;

const HEADING_STYLE: &str = "font-weight: bold";

static BULLET_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[•●○◦▪▫■□‣⁃➢➤►*+\-]\s").expect("valid bullet pattern")
});

static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.\s").expect("valid numbered item pattern")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    ListItem { list_type: ListType, text: String },
    /// An upper-case line.
    Heading(String),
    /// A line ending in a colon.
    Label(String),
    Indented { level: usize, text: String },
    Plain(String),
}

pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    if BULLET_ITEM.is_match(trimmed) {
        let text: String = trimmed.chars().skip(2).collect();
        return LineKind::ListItem {
            list_type: ListType::Unordered,
            text: text.trim().to_owned(),
        };
    }

    if let Some(marker) = NUMBERED_ITEM.find(trimmed) {
        return LineKind::ListItem {
            list_type: ListType::Ordered,
            text: trimmed[marker.end()..].trim().to_owned(),
        };
    }

    let short = trimmed.chars().count() < HEADING_MAX_CHARS;
    if short && is_upper_case(trimmed) {
        return LineKind::Heading(trimmed.to_owned());
    }
    if short && trimmed.ends_with(':') {
        return LineKind::Label(trimmed.to_owned());
    }

    let level = indent_level(line);
    if level > 0 {
        return LineKind::Indented {
            level,
            text: trimmed.to_owned(),
        };
    }

    LineKind::Plain(trimmed.to_owned())
}

/// At least one letter and no lower-case ones.
fn is_upper_case(text: &str) -> bool {
    text.chars().any(char::is_alphabetic)
        && !text.chars().any(char::is_lowercase)
}

/// A leading tab is one level, otherwise every four leading spaces are one.
fn indent_level(line: &str) -> usize {
    if line.starts_with('\t') {
        return 1;
    }
    line.chars().take_while(|c| *c == ' ').count() / 4
}

/// Rebuild structure from plain text. Consecutive items of the same list
/// type share one list.
pub fn enhance(text: &str) -> Fragment {
    let mut fragment = Fragment::new();
    let mut open_list: Option<(ListType, Element)> = None;

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let kind = classify_line(line);

        if let LineKind::ListItem { list_type, text } = kind {
            let item = Element::with_children(Tag::Li, [Node::text(text)]);
            let continues_list = matches!(
                &open_list,
                Some((open_type, _)) if *open_type == list_type
            );
            if !continues_list {
                if let Some((_, list)) = open_list.take() {
                    fragment.push(list);
                }
                open_list = Some((list_type, Element::new(list_type.into())));
            }
            if let Some((_, list)) = open_list.as_mut() {
                list.push(item);
            }
            continue;
        }

        if let Some((_, list)) = open_list.take() {
            fragment.push(list);
        }
        fragment.push(block_for(kind));
    }

    if let Some((_, list)) = open_list {
        fragment.push(list);
    }
    fragment
}

fn block_for(kind: LineKind) -> Node {
    match kind {
        LineKind::Blank => Node::line_break(),
        LineKind::Heading(text) => heading(Tag::H3, text),
        LineKind::Label(text) => heading(Tag::H4, text),
        LineKind::Indented { level, text } => {
            let mut block = Element::with_style(
                Tag::Div,
                &format!("margin-left: {}px", level * INDENT_STEP_PX),
            );
            block.push(Node::text(text));
            block.into()
        }
        LineKind::Plain(text) => {
            Element::with_children(Tag::Div, [Node::text(text)]).into()
        }
        LineKind::ListItem { text, .. } => {
            Element::with_children(Tag::Li, [Node::text(text)]).into()
        }
    }
}

fn heading(tag: Tag, text: String) -> Node {
    let mut block = Element::with_style(tag, HEADING_STYLE);
    block.push(Node::text(text));
    block.into()
}

#[cfg(test)]
mod test {
    use indoc::indoc;
    use speculoos::prelude::*;

    use super::*;

    fn enhanced(text: &str) -> String {
        enhance(text).to_html()
    }

    #[test]
    fn blank_lines_become_breaks() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line(" \t "), LineKind::Blank);
        assert_eq!(enhanced("a\n\nb"), "<div>a</div><br><div>b</div>");
    }

    #[test]
    fn bullet_glyphs_make_unordered_items() {
        assert_eq!(
            enhanced("• First item\n• Second item"),
            "<ul><li>First item</li><li>Second item</li></ul>"
        );
    }

    #[test]
    fn ascii_bullets_make_unordered_items() {
        for line in ["- dash", "* star", "+ plus", "  ➤ arrow", "▪\tsquare"] {
            assert_that!(classify_line(line)).matches(|kind| {
                matches!(
                    kind,
                    LineKind::ListItem {
                        list_type: ListType::Unordered,
                        ..
                    }
                )
            });
        }
    }

    #[test]
    fn bullet_without_whitespace_is_not_an_item() {
        assert_eq!(classify_line("-dash"), LineKind::Plain("-dash".into()));
        assert_eq!(classify_line("•"), LineKind::Plain("•".into()));
    }

    #[test]
    fn numbered_lines_make_ordered_items() {
        assert_eq!(
            enhanced("1. Step one\n2. Step two"),
            "<ol><li>Step one</li><li>Step two</li></ol>"
        );
        assert_eq!(
            classify_line("12.   Twelve"),
            LineKind::ListItem {
                list_type: ListType::Ordered,
                text: "Twelve".into(),
            }
        );
    }

    #[test]
    fn numbers_without_space_are_plain() {
        assert_eq!(classify_line("3.14"), LineKind::Plain("3.14".into()));
    }

    #[test]
    fn list_type_change_starts_a_new_list() {
        assert_eq!(
            enhanced("- a\n1. b\n2. c\n- d"),
            "<ul><li>a</li></ul><ol><li>b</li><li>c</li></ol>\
             <ul><li>d</li></ul>"
        );
    }

    #[test]
    fn blank_line_splits_lists() {
        assert_eq!(
            enhanced("- a\n\n- b"),
            "<ul><li>a</li></ul><br><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn upper_case_lines_become_bold_headings() {
        assert_eq!(
            enhanced("SUMMARY"),
            "<h3 style=\"font-weight: bold\">SUMMARY</h3>"
        );
        assert_eq!(
            classify_line("  WORK EXPERIENCE (2019-2024)  "),
            LineKind::Heading("WORK EXPERIENCE (2019-2024)".into())
        );
    }

    #[test]
    fn lines_without_letters_are_not_headings() {
        assert_eq!(classify_line("2024"), LineKind::Plain("2024".into()));
    }

    #[test]
    fn long_upper_case_lines_are_plain() {
        let line = "A".repeat(HEADING_MAX_CHARS);
        assert_eq!(classify_line(&line), LineKind::Plain(line.clone()));
        let line = "A".repeat(HEADING_MAX_CHARS - 1);
        assert_eq!(classify_line(&line), LineKind::Heading(line.clone()));
    }

    #[test]
    fn lines_ending_in_a_colon_become_labels() {
        assert_eq!(
            enhanced("Skills:"),
            "<h4 style=\"font-weight: bold\">Skills:</h4>"
        );
    }

    #[test]
    fn short_sentences_ending_in_a_colon_are_labels_too() {
        assert_eq!(
            classify_line("Here is what I did last year:"),
            LineKind::Label("Here is what I did last year:".into())
        );
    }

    #[test]
    fn headings_win_over_indentation() {
        assert_eq!(
            classify_line("\tSUMMARY"),
            LineKind::Heading("SUMMARY".into())
        );
    }

    #[test]
    fn indentation_sets_a_left_margin() {
        assert_eq!(
            enhanced("\tTabbed"),
            "<div style=\"margin-left: 20px\">Tabbed</div>"
        );
        assert_eq!(
            enhanced("        Eight spaces"),
            "<div style=\"margin-left: 40px\">Eight spaces</div>"
        );
        assert_eq!(classify_line("   three"), LineKind::Plain("three".into()));
    }

    #[test]
    fn carriage_returns_are_ignored() {
        assert_eq!(
            enhanced("one\r\ntwo\r\n"),
            "<div>one</div><div>two</div><br>"
        );
    }

    #[test]
    fn plain_lines_round_trip_through_text() {
        let text = indoc! {"
            Managed a team of five
            Shipped the billing rewrite

            Mentored two juniors"};
        let fragment = enhance(text);
        assert_that!(fragment.text().as_str()).is_equal_to(text);
    }

    #[test]
    fn blank_edge_lines_round_trip_through_text() {
        for text in ["a\n", "one\ntwo\n", "a\n\n", "\na", "a\n\nb", ""] {
            assert_that!(enhance(text).text().as_str()).is_equal_to(text);
        }
    }

    #[test]
    fn resume_paste_is_structured() {
        let text = indoc! {"
            EXPERIENCE
            Acme Corp, 2020-2024
            Highlights:
            • Cut build times in half
            • Led the migration
            1. First
            2. Second"};
        assert_eq!(
            enhanced(&format!("{text}\n\tIndented note")),
            "<h3 style=\"font-weight: bold\">EXPERIENCE</h3>\
             <div>Acme Corp, 2020-2024</div>\
             <h4 style=\"font-weight: bold\">Highlights:</h4>\
             <ul><li>Cut build times in half</li>\
             <li>Led the migration</li></ul>\
             <ol><li>First</li><li>Second</li></ol>\
             <div style=\"margin-left: 20px\">Indented note</div>"
        );
    }
}
