// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Rich content editing and paste normalization.
//!
//! The crate is built from four parts:
//!
//! * the content model, [`Fragment`], and the [`Counters`] derived from it,
//! * paste ingestion ([`ingest`]), which sanitizes markup and rebuilds
//!   structure from plain text,
//! * the formatting command engine, [`RichEditor`], which drives an editing
//!   surface through a [`SelectionPort`],
//! * reconciliation of formats left stuck at the caret after deletions.
//!
//! [`MemorySurface`] is an editing surface that needs no browser.

pub mod clipboard;
pub mod config;
pub mod counters;
pub mod editor;
pub mod format_state;
pub mod fragment;
pub mod ingest;
pub mod list_type;
pub mod memory_surface;
pub mod parser;
pub mod selection_port;

#[cfg(test)]
mod tests;

pub use crate::clipboard::{
    copy_with_fallback, ClipboardError, ClipboardSink, CopyOutcome,
    CopyPayload,
};
#[cfg(feature = "clipboard")]
pub use crate::clipboard::ArboardClipboard;
pub use crate::config::{ConfigError, EditorConfig};
pub use crate::counters::{count_chars, count_words, get_text, Counters};
pub use crate::editor::{
    DeferredTask, EditorUpdate, KeyCode, KeyDownOutcome, KeyStroke, Modifiers,
    RichEditor,
};
pub use crate::format_state::{ActiveFormats, TRACKED_FORMATS};
pub use crate::fragment::{merge_style, Element, Fragment, Node, Tag};
pub use crate::ingest::{
    enhance, ingest, ingest_detailed, sanitize, sanitize_markup, try_ingest,
    IngestError, IngestSource, Ingestion, PastePayload,
};
pub use crate::list_type::{ListStyle, ListType, LIST_ITEM_SPACING_PX};
pub use crate::memory_surface::{
    Alignment, Block, BlockKind, InlineFormat, MemorySurface, Run,
};
pub use crate::parser::{MarkupParser, ParseError};
#[cfg(feature = "sys")]
pub use crate::parser::Html5everParser;
pub use crate::selection_port::{
    FormatCommand, NodeId, Position, SelectionPort, SelectionRange,
    SelectionState,
};
