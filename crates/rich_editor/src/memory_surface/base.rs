// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::parser::MarkupParser;
use crate::{ListStyle, ListType};

/// Undo snapshots kept before the oldest is dropped.
pub(crate) const MAX_UNDO_DEPTH: usize = 100;

/// Left margin added or removed by one indent step, in pixels.
pub const INDENT_PX: u32 = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InlineFormat {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl InlineFormat {
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub format: InlineFormat,
}

impl Run {
    pub fn new(text: impl Into<String>, format: InlineFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Generic,
    Paragraph,
    Heading(u8),
    ListItem(ListType),
}

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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub align: Option<Alignment>,
    pub indent_px: u32,
    pub runs: Vec<Run>,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            align: None,
            indent_px: 0,
            runs: Vec::new(),
        }
    }

    /// A block of the same kind and layout, without content.
    pub fn empty_like(&self) -> Self {
        Self {
            kind: self.kind,
            align: self.align,
            indent_px: self.indent_px,
            runs: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.runs.iter().map(Run::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(Run::is_empty)
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Merge neighbouring runs with the same format and drop empty runs.
    pub(crate) fn normalize(&mut self) {
        let mut runs: Vec<Run> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if run.is_empty() {
                continue;
            }
            match runs.last_mut() {
                Some(last) if last.format == run.format => {
                    last.text.push_str(&run.text)
                }
                _ => runs.push(run),
            }
        }
        self.runs = runs;
    }
}

/// An in-memory editing surface.
///
/// The document is a list of blocks holding formatted runs of text. Offsets
/// are counted in characters across the whole document, with one extra unit
/// between neighbouring blocks for the block boundary. There is always at
/// least one block.
///
/// Node ids handed out through the [`SelectionPort`](crate::SelectionPort)
/// name a run: the block index in the high 32 bits and the run index in the
/// low 32 bits. A caret between two runs belongs to the end of the earlier
/// run, so offset 0 inside a node only happens at the start of a block.
pub struct MemorySurface {
    pub(crate) blocks: Vec<Block>,
    /// Anchor and focus as document offsets.
    pub(crate) selection: Option<(usize, usize)>,
    pub(crate) focused: bool,
    /// Format for the next typed text at a collapsed caret, overriding the
    /// format found at the caret. Cleared when the selection moves.
    pub(crate) typing_style: Option<InlineFormat>,
    pub(crate) undo_stack: Vec<(Vec<Block>, Option<(usize, usize)>)>,
    pub(crate) list_styles: HashMap<ListType, ListStyle>,
    pub(crate) parser: Box<dyn MarkupParser>,
}

impl MemorySurface {
    /// An empty, unfocused surface that reads markup with `parser`.
    pub fn with_parser(parser: Box<dyn MarkupParser>) -> Self {
        Self {
            blocks: vec![Block::new(BlockKind::Generic)],
            selection: None,
            focused: false,
            typing_style: None,
            undo_stack: Vec::new(),
            list_styles: HashMap::new(),
            parser,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Document length including block boundaries.
    pub fn len(&self) -> usize {
        let content: usize = self.blocks.iter().map(Block::len).sum();
        content + self.blocks.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.len() == 1 && self.blocks[0].is_empty()
    }

    /// Block index and offset inside that block for a document offset.
    /// Offsets past the end clamp to the end of the last block.
    pub(crate) fn locate(&self, offset: usize) -> (usize, usize) {
        let mut remaining = offset;
        for (index, block) in self.blocks.iter().enumerate() {
            let len = block.len();
            if remaining <= len {
                return (index, remaining);
            }
            remaining -= len + 1;
        }
        let last = self.blocks.len() - 1;
        (last, self.blocks[last].len())
    }

    /// Document offset of `offset` inside block `block`.
    pub(crate) fn offset_of(&self, block: usize, offset: usize) -> usize {
        self.blocks[..block]
            .iter()
            .map(|b| b.len() + 1)
            .sum::<usize>()
            + offset
    }

    /// The run holding the caret at `offset` inside `block`, and the offset
    /// inside that run.
    pub(crate) fn run_at(&self, block: usize, offset: usize) -> (usize, usize) {
        let mut start = 0;
        for (index, run) in self.blocks[block].runs.iter().enumerate() {
            let end = start + run.len();
            if offset <= end {
                return (index, offset - start);
            }
            start = end;
        }
        (0, 0)
    }

    /// Make sure a run boundary exists at `offset` inside `block`. Returns
    /// the index of the first run starting at or after it.
    pub(crate) fn split_run_at(
        &mut self,
        block: usize,
        offset: usize,
    ) -> usize {
        let runs = &mut self.blocks[block].runs;
        let mut start = 0;
        for index in 0..runs.len() {
            let len = runs[index].len();
            if offset == start {
                return index;
            }
            if offset < start + len {
                let split = char_to_byte(&runs[index].text, offset - start);
                let tail = runs[index].text.split_off(split);
                let format = runs[index].format;
                runs.insert(index + 1, Run::new(tail, format));
                return index + 1;
            }
            start += len;
        }
        runs.len()
    }

    /// Format of the text the caret at document `offset` would extend.
    pub(crate) fn format_at(&self, offset: usize) -> InlineFormat {
        let (block, offset) = self.locate(offset);
        let (run, _) = self.run_at(block, offset);
        self.blocks[block]
            .runs
            .get(run)
            .map(|r| r.format)
            .unwrap_or_default()
    }

    /// Indices of the blocks touched by the document range.
    pub(crate) fn blocks_in(
        &self,
        start: usize,
        end: usize,
    ) -> std::ops::RangeInclusive<usize> {
        self.locate(start).0..=self.locate(end).0
    }

    pub(crate) fn ensure_block(&mut self) {
        if self.blocks.is_empty() {
            self.blocks.push(Block::new(BlockKind::Generic));
        }
    }
}

/// Byte index of the `chars`th character of `text`.
pub(crate) fn char_to_byte(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
