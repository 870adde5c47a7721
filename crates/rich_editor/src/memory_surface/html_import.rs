// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Reading markup into blocks and runs.

use tracing::warn;

use super::base::{Alignment, Block, BlockKind, InlineFormat, Run};
use super::MemorySurface;
use crate::fragment::style::{parse_px, style_value};
use crate::fragment::{Element, Fragment, Node, Tag};
use crate::ingest::sanitize_markup;
use crate::parser::ParseError;
use crate::ListType;

/// What the enclosing elements contribute to the content being read.
#[derive(Clone, Copy)]
struct Context {
    kind: BlockKind,
    align: Option<Alignment>,
    indent_px: u32,
    format: InlineFormat,
    list: Option<ListType>,
    /// Inside a block element, where whitespace is content.
    in_block: bool,
}

impl Context {
    fn top_level() -> Self {
        Self {
            kind: BlockKind::Generic,
            align: None,
            indent_px: 0,
            format: InlineFormat::default(),
            list: None,
            in_block: false,
        }
    }

    fn empty_block(&self) -> Block {
        let mut block = Block::new(self.kind);
        block.align = self.align;
        block.indent_px = self.indent_px;
        block
    }
}

#[derive(Default)]
struct Importer {
    blocks: Vec<Block>,
    current: Option<Block>,
}

impl Importer {
    fn close(&mut self) {
        if let Some(mut block) = self.current.take() {
            block.normalize();
            self.blocks.push(block);
        }
    }

    fn produced(&self) -> usize {
        self.blocks.len() + usize::from(self.current.is_some())
    }

    fn nodes(&mut self, nodes: &[Node], ctx: Context) {
        for node in nodes {
            match node {
                Node::Text(text) => self.text(text, ctx),
                Node::Element(element) => self.element(element, ctx),
            }
        }
    }

    fn text(&mut self, text: &str, ctx: Context) {
        if self.current.is_none() && !ctx.in_block && text.trim().is_empty() {
            return;
        }
        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                self.line_break(ctx);
            }
            if line.is_empty() {
                continue;
            }
            self.current
                .get_or_insert_with(|| ctx.empty_block())
                .runs
                .push(Run::new(line, ctx.format));
        }
    }

    fn line_break(&mut self, ctx: Context) {
        match self.current {
            Some(_) => self.close(),
            None => self.blocks.push(ctx.empty_block()),
        }
    }

    fn element(&mut self, element: &Element, ctx: Context) {
        let mut inner = ctx;
        match element.tag() {
            Tag::Strong | Tag::B => inner.format.bold = true,
            Tag::Em | Tag::I => inner.format.italic = true,
            Tag::U => inner.format.underline = true,
            _ => {}
        }
        // An inline style overrides what the tag implies.
        if let Some(style) = element.style() {
            apply_style(style, &mut inner);
        }
        match element.tag() {
            Tag::Br => self.line_break(ctx),
            Tag::Strong | Tag::B | Tag::Em | Tag::I | Tag::U | Tag::Span => {
                self.nodes(element.children(), inner)
            }
            Tag::Ol | Tag::Ul => {
                self.close();
                // Lists carry their own presentation. Only the items'
                // layout is kept.
                inner.align = ctx.align;
                inner.indent_px = ctx.indent_px;
                inner.list = element.tag().list_type();
                inner.kind = BlockKind::ListItem(
                    inner.list.unwrap_or(ListType::Unordered),
                );
                inner.in_block = false;
                self.nodes(element.children(), inner);
                self.close();
            }
            tag => {
                inner.kind = match tag {
                    // Paragraphs wrapped in a list item stay list items.
                    Tag::P | Tag::Div
                        if ctx.in_block
                            && matches!(ctx.kind, BlockKind::ListItem(_)) =>
                    {
                        ctx.kind
                    }
                    Tag::P => BlockKind::Paragraph,
                    Tag::Li => BlockKind::ListItem(
                        ctx.list.unwrap_or(ListType::Unordered),
                    ),
                    _ => match tag.heading_level() {
                        Some(level) => BlockKind::Heading(level),
                        None => BlockKind::Generic,
                    },
                };
                inner.in_block = true;
                self.close();
                let before = self.produced();
                self.nodes(element.children(), inner);
                if self.produced() == before {
                    self.blocks.push(inner.empty_block());
                }
                self.close();
            }
        }
    }
}

/// Fold allowed style declarations into the context.
fn apply_style(style: &str, ctx: &mut Context) {
    if let Some(align) = style_value(style, "text-align")
        .and_then(|value| value.parse::<Alignment>().ok())
    {
        ctx.align = Some(align);
    }
    if let Some(indent) =
        style_value(style, "margin-left").and_then(|value| parse_px(&value))
    {
        ctx.indent_px = indent;
    }
    if let Some(weight) = style_value(style, "font-weight") {
        let weight = weight.to_ascii_lowercase();
        ctx.format.bold = match weight.as_str() {
            "bold" | "bolder" => true,
            "normal" | "lighter" => false,
            number => {
                number.parse::<u32>().map_or(ctx.format.bold, |w| w >= 600)
            }
        };
    }
    if let Some(font_style) = style_value(style, "font-style") {
        let font_style = font_style.to_ascii_lowercase();
        ctx.format.italic = font_style == "italic" || font_style == "oblique";
    }
    if let Some(decoration) = style_value(style, "text-decoration") {
        ctx.format.underline =
            decoration.to_ascii_lowercase().contains("underline");
    }
}

/// Blocks for a fragment. Inline content outside any block element lands in
/// generic blocks. Line breaks end the block they are in, or stand for an
/// empty block where none is open.
pub(crate) fn import_fragment(fragment: &Fragment) -> Vec<Block> {
    let mut importer = Importer::default();
    importer.nodes(fragment.nodes(), Context::top_level());
    importer.close();
    importer.blocks
}

impl MemorySurface {
    pub(crate) fn parse_blocks(
        &self,
        html: &str,
    ) -> Result<Vec<Block>, ParseError> {
        let fragment = sanitize_markup(html, self.parser.as_ref())?;
        Ok(import_fragment(&fragment))
    }

    /// Replace the whole document. Unreadable markup leaves the document
    /// as it was.
    pub(crate) fn replace_content(&mut self, html: &str) {
        match self.parse_blocks(html) {
            Ok(blocks) => {
                self.blocks = blocks;
                self.ensure_block();
                self.clear_undo();
                self.typing_style = None;
                if let Some((anchor, focus)) = self.selection {
                    let len = self.len();
                    self.selection = Some((anchor.min(len), focus.min(len)));
                }
            }
            Err(err) => warn!(error = %err, "Ignoring unreadable content"),
        }
    }

    /// Insert markup at the selection, replacing any selected text.
    pub(crate) fn insert_html(&mut self, html: &str) -> bool {
        let Some((start, end)) = self.selection_bounds() else {
            return false;
        };
        let incoming = match self.parse_blocks(html) {
            Ok(blocks) => blocks,
            Err(err) => {
                warn!(error = %err, "Refusing unreadable markup");
                return false;
            }
        };
        self.push_undo();
        if start != end {
            self.delete_range(start, end);
        }
        let caret = self.insert_blocks_at(start, incoming);
        self.selection = Some((caret, caret));
        self.typing_style = None;
        true
    }

    /// Splice `incoming` into the document at offset `at`. The first block
    /// joins the text before `at`, the last one the text after it. Returns
    /// the offset just after the inserted content.
    fn insert_blocks_at(
        &mut self,
        at: usize,
        mut incoming: Vec<Block>,
    ) -> usize {
        if incoming.is_empty() {
            return at;
        }
        let (block, offset) = self.locate(at);
        let run = self.split_run_at(block, offset);
        let tail_runs = self.blocks[block].runs.split_off(run);

        let first = incoming.remove(0);
        let head = &mut self.blocks[block];
        if head.is_empty() && (tail_runs.is_empty() || !incoming.is_empty()) {
            head.kind = first.kind;
            head.align = first.align;
            head.indent_px = first.indent_px;
        }
        let Some(mut last) = incoming.pop() else {
            let caret = offset + first.len();
            head.runs.extend(first.runs);
            head.runs.extend(tail_runs);
            head.normalize();
            return self.offset_of(block, caret);
        };
        head.runs.extend(first.runs);
        head.normalize();

        let caret = last.len();
        last.runs.extend(tail_runs);
        last.normalize();
        incoming.push(last);
        let last_index = block + incoming.len();
        for (index, new_block) in incoming.into_iter().enumerate() {
            self.blocks.insert(block + 1 + index, new_block);
        }
        self.offset_of(last_index, caret)
    }
}
