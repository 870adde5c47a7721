// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use serde::Serialize;

use crate::{ActiveFormats, Counters};

/// What changed as the result of an editor call. `None` fields are
/// unchanged.
///
/// `value` is the serialized document, and is only set when the owner should
/// be told about a change it did not make itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorUpdate {
    pub value: Option<String>,
    pub counters: Option<Counters>,
    pub active_formats: Option<ActiveFormats>,
}

impl EditorUpdate {
    /// Nothing changed.
    pub fn keep() -> Self {
        Self::default()
    }

    pub fn is_keep(&self) -> bool {
        *self == Self::keep()
    }

    pub(crate) fn formats(active_formats: ActiveFormats) -> Self {
        Self {
            active_formats: Some(active_formats),
            ..Self::keep()
        }
    }
}

/// The result of a key-down.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDownOutcome {
    /// The key was handled and its default action must be suppressed.
    pub prevent_default: bool,
    pub update: EditorUpdate,
}
