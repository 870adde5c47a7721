// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::ListType;

/// The tags a [`Fragment`](crate::Fragment) may contain. Anything else is
/// flattened to text while sanitizing.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tag {
    P,
    Div,
    Span,
    Br,
    Strong,
    B,
    Em,
    I,
    U,
    Ol,
    Ul,
    Li,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl Tag {
    /// Void elements are serialized without children or a closing tag.
    pub fn is_void(self) -> bool {
        self == Tag::Br
    }

    /// Block elements start on their own line when the fragment is
    /// flattened to text.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            Tag::P
                | Tag::Div
                | Tag::Ol
                | Tag::Ul
                | Tag::Li
                | Tag::H1
                | Tag::H2
                | Tag::H3
                | Tag::H4
                | Tag::H5
                | Tag::H6
        )
    }

    pub fn list_type(self) -> Option<ListType> {
        match self {
            Tag::Ol => Some(ListType::Ordered),
            Tag::Ul => Some(ListType::Unordered),
            _ => None,
        }
    }

    pub fn heading_level(self) -> Option<u8> {
        match self {
            Tag::H1 => Some(1),
            Tag::H2 => Some(2),
            Tag::H3 => Some(3),
            Tag::H4 => Some(4),
            Tag::H5 => Some(5),
            Tag::H6 => Some(6),
            _ => None,
        }
    }

    /// Heading tag for `level`, clamped to `h1..=h6`.
    pub fn heading(level: u8) -> Tag {
        match level {
            0 | 1 => Tag::H1,
            2 => Tag::H2,
            3 => Tag::H3,
            4 => Tag::H4,
            5 => Tag::H5,
            _ => Tag::H6,
        }
    }
}

impl From<ListType> for Tag {
    fn from(list_type: ListType) -> Self {
        match list_type {
            ListType::Ordered => Tag::Ol,
            ListType::Unordered => Tag::Ul,
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn tags_parse_case_insensitively() {
        assert_eq!(Tag::from_str("STRONG"), Ok(Tag::Strong));
        assert_eq!(Tag::from_str("h3"), Ok(Tag::H3));
        assert!(Tag::from_str("table").is_err());
    }

    #[test]
    fn every_tag_round_trips_through_its_name() {
        for tag in Tag::iter() {
            assert_eq!(Tag::from_str(tag.as_ref()), Ok(tag));
        }
    }

    #[test]
    fn only_br_is_void() {
        assert_eq!(Tag::iter().filter(|t| t.is_void()).count(), 1);
        assert!(Tag::Br.is_void());
    }

    #[test]
    fn heading_levels_clamp() {
        assert_eq!(Tag::heading(0), Tag::H1);
        assert_eq!(Tag::heading(3), Tag::H3);
        assert_eq!(Tag::heading(9), Tag::H6);
        assert_eq!(Tag::H4.heading_level(), Some(4));
        assert_eq!(Tag::Div.heading_level(), None);
    }
}
