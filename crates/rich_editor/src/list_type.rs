// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Ordered,
    Unordered,
}

impl ListType {
    /// The `list-style-type` marker lists of this type are drawn with.
    pub fn marker(self) -> &'static str {
        match self {
            ListType::Ordered => "decimal",
            ListType::Unordered => "disc",
        }
    }
}

/// Styles merged onto a list and each of its items when a list is
/// normalized to a fixed look.
///
/// The marker and item spacing are presentation only: they are not in the
/// fragment allow-list, so they never reach the document value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListStyle {
    pub list: String,
    pub item: String,
}

/// Vertical gap below every normalized list item, in pixels.
pub const LIST_ITEM_SPACING_PX: u32 = 4;

impl ListStyle {
    /// Type marker, standard left padding, no extra margin and uniform item
    /// spacing.
    pub fn normalized(list_type: ListType) -> Self {
        Self {
            list: format!(
                "list-style-type: {}; padding-left: 20px; margin-left: 0px",
                list_type.marker()
            ),
            item: format!(
                "margin-left: 0px; margin-top: 0px; margin-bottom: {}px",
                LIST_ITEM_SPACING_PX
            ),
        }
    }
}
