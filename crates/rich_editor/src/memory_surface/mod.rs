// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! An editing surface kept in memory.
//!
//! [`MemorySurface`] implements [`SelectionPort`](crate::SelectionPort)
//! without a browser, which is what headless callers and the tests drive
//! the editor with. It follows the way browsers edit `contenteditable`
//! content closely enough for the editor's behaviour to carry over.

mod base;
mod block_ops;
mod formatting;
mod html_export;
mod html_import;
mod port_impl;
mod selection;
mod text_ops;
mod undo_redo;

pub use base::{
    Alignment, Block, BlockKind, InlineFormat, MemorySurface, Run, INDENT_PX,
};

use crate::parser::MarkupParser;

impl MemorySurface {
    /// An empty, unfocused surface.
    #[cfg(feature = "sys")]
    pub fn new() -> Self {
        Self::with_parser(Box::new(crate::parser::Html5everParser::new()))
    }

    /// A surface holding `html`, with no selection.
    #[cfg(feature = "sys")]
    pub fn from_html(html: &str) -> Self {
        let mut surface = Self::new();
        surface.replace_content(html);
        surface
    }

    /// A surface holding `html`, read with `parser`.
    pub fn from_html_with_parser(
        html: &str,
        parser: Box<dyn MarkupParser>,
    ) -> Self {
        let mut surface = Self::with_parser(parser);
        surface.replace_content(html);
        surface
    }
}

#[cfg(feature = "sys")]
impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}
