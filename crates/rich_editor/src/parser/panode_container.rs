// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::PaDomHandle;

/// An element of a parsed markup tree.
#[derive(Clone, Debug, PartialEq)]
pub struct PaNodeContainer {
    /// Lower-case local name, e.g. `"p"` or `"o:p"`.
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<PaDomHandle>,
}

impl PaNodeContainer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attrs<'a>(
        name: &str,
        attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut container = Self::new(name);
        container.attrs = attrs
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v.to_owned()))
            .collect();
        container
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _v)| n == name)
            .map(|(_n, v)| v.as_str())
    }
}
