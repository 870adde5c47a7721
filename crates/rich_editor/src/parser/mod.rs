// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Markup parsing into a [`PaDom`] tree.

pub mod padom;
pub mod panode_container;

#[cfg(feature = "sys")]
mod padom_creator;

use thiserror::Error;

pub use padom::{PaDom, PaDomHandle, PaDomNode, PaNodeText};
pub use panode_container::PaNodeContainer;

cfg_if::cfg_if! {
    if #[cfg(feature = "sys")] {
        pub use padom_creator::{Html5everParser, DEFAULT_MAX_INPUT_BYTES};
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("markup is {len} bytes, over the {limit} byte limit")]
    TooLarge { len: usize, limit: usize },
    #[error("markup could not be parsed: {0}")]
    Failed(String),
}

/// Turns untrusted markup into a tree, repairing it where needed.
///
/// Implementations must accept any string: malformed markup is repaired or
/// reported as an error, never a panic.
pub trait MarkupParser {
    fn parse(&self, markup: &str) -> Result<PaDom, ParseError>;
}

impl<F> MarkupParser for F
where
    F: Fn(&str) -> Result<PaDom, ParseError>,
{
    fn parse(&self, markup: &str) -> Result<PaDom, ParseError> {
        self(markup)
    }
}
