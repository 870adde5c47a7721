// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Word and character counts derived from the document.

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::Fragment;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub words: usize,
    pub chars: usize,
}

impl Counters {
    pub fn of(document: &Fragment) -> Self {
        Self::of_text(&get_text(document))
    }

    pub fn of_text(text: &str) -> Self {
        Self {
            words: count_words(text),
            chars: count_chars(text),
        }
    }
}

/// The document flattened to text, see [`Fragment::text`].
pub fn get_text(document: &Fragment) -> String {
    document.text()
}

/// Number of whitespace-delimited, non-empty tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Length of the flattened text in user-perceived characters (extended
/// grapheme clusters). Nothing is trimmed.
pub fn count_chars(text: &str) -> usize {
    text.graphemes(true).count()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fragment::{Element, Node, Tag};

    #[test]
    fn empty_text_has_no_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("\n\t "), 0);
    }

    #[test]
    fn runs_of_whitespace_separate_words() {
        assert_eq!(count_words("a b  c"), 3);
        assert_eq!(count_words("  lead and trail  "), 3);
        assert_eq!(count_words("line\nbreak\ttab"), 3);
    }

    #[test]
    fn chars_are_counted_before_trimming() {
        assert_eq!(count_chars(""), 0);
        assert_eq!(count_chars("   "), 3);
        assert_eq!(count_chars(" ab "), 4);
    }

    #[test]
    fn chars_count_graphemes_not_bytes() {
        assert_eq!(count_chars("caf\u{e9}"), 4);
        assert_eq!(count_chars("e\u{301}"), 1);
        // Woman astronaut with skin tone: one visible character
        assert_eq!(count_chars("\u{1F469}\u{1F3FF}\u{200D}\u{1F680}"), 1);
    }

    #[test]
    fn counters_use_the_flattened_document() {
        let document = Fragment::from_nodes([
            Element::with_children(Tag::P, [Node::text("Senior engineer")])
                .into(),
            Element::with_children(Tag::P, [Node::text("Rust")]).into(),
        ]);
        assert_eq!(
            Counters::of(&document),
            Counters {
                words: 3,
                chars: "Senior engineer\nRust".len(),
            }
        );
    }

    #[test]
    fn empty_document_counts_nothing() {
        assert_eq!(Counters::of(&Fragment::new()), Counters::default());
    }
}
