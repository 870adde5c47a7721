// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The narrow interface the editor uses to read and write the live editing
//! surface.
//!
//! A browser adapter implements it over the native selection and editing
//! APIs. [`MemorySurface`](crate::MemorySurface) implements it in memory.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::{ListStyle, ListType};

/// Identifies a node of the editing surface. Only meaningful to the port
/// that handed it out.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct NodeId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub node: NodeId,
    /// Offset inside `node`, in characters for text nodes.
    pub offset: usize,
}

impl Position {
    pub fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRange {
    pub anchor: Position,
    pub focus: Position,
}

impl SelectionRange {
    pub fn new(anchor: Position, focus: Position) -> Self {
        Self { anchor, focus }
    }

    pub fn collapsed(at: Position) -> Self {
        Self::new(at, at)
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }
}

/// The selection as reported by a port.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub anchor: Position,
    pub focus: Position,
    pub collapsed: bool,
}

impl SelectionState {
    pub fn new(anchor: Position, focus: Position) -> Self {
        Self {
            anchor,
            focus,
            collapsed: anchor == focus,
        }
    }

    pub fn caret(at: Position) -> Self {
        Self::new(at, at)
    }

    pub fn range(&self) -> SelectionRange {
        SelectionRange::new(self.anchor, self.focus)
    }

    /// Offset of the selection start inside its node. Positions in
    /// different nodes cannot be ordered here, so the anchor counts as the
    /// start for those.
    pub fn start_offset(&self) -> usize {
        if self.anchor.node == self.focus.node {
            self.anchor.offset.min(self.focus.offset)
        } else {
            self.anchor.offset
        }
    }
}

/// The editing commands understood by a port. The serialized names are the
/// `execCommand` names.
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
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    JustifyLeft,
    JustifyCenter,
    JustifyRight,
    InsertOrderedList,
    InsertUnorderedList,
    Indent,
    Outdent,
    Undo,
    #[strum(serialize = "insertHTML")]
    #[serde(rename = "insertHTML")]
    InsertHtml,
    InsertText,
    Delete,
    ForwardDelete,
}

impl FormatCommand {
    /// Commands that flip an inline format on and off.
    pub fn is_inline_toggle(self) -> bool {
        matches!(
            self,
            FormatCommand::Bold
                | FormatCommand::Italic
                | FormatCommand::Underline
        )
    }

    /// Commands that carry a value argument.
    pub fn takes_value(self) -> bool {
        matches!(self, FormatCommand::InsertHtml | FormatCommand::InsertText)
    }
}

/// Read/write access to the live editing surface.
///
/// Boolean results report whether the surface accepted the request, the way
/// `execCommand` does. A rejected request leaves the surface unchanged.
pub trait SelectionPort {
    /// The current selection, or `None` when there is no caret inside the
    /// surface.
    fn get_selection(&self) -> Option<SelectionState>;

    fn set_selection(&mut self, range: SelectionRange) -> bool;

    /// Whether `command` is currently "on" at the selection.
    fn query_format_state(&self, command: FormatCommand) -> bool;

    fn exec_command(
        &mut self,
        command: FormatCommand,
        value: Option<&str>,
    ) -> bool;

    fn has_focus(&self) -> bool;

    fn focus(&mut self);

    /// The surface content as markup.
    fn content_html(&self) -> String;

    /// Replace the whole surface content.
    fn set_content_html(&mut self, html: &str);

    /// Restyle every list of `list_type` and its items. Returns false when
    /// there was no such list.
    fn set_list_style(&mut self, list_type: ListType, style: &ListStyle)
        -> bool;
}
