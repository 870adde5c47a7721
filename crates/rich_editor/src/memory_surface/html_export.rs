// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Writing blocks back out as a fragment.

use super::base::{Block, BlockKind, InlineFormat, Run};
use super::MemorySurface;
use crate::fragment::{Element, Fragment, Node, Tag};
use crate::ListType;

/// Consecutive blocks rendered together: a lone block, or the items of one
/// list.
enum BlockWrapper<'a> {
    Single(&'a Block),
    List(ListType, Vec<&'a Block>),
}

impl MemorySurface {
    /// The document as a fragment. Runs of list items of one type share a
    /// list element.
    pub fn to_fragment(&self) -> Fragment {
        if self.is_empty() && self.blocks[0] == Block::new(BlockKind::Generic) {
            return Fragment::new();
        }
        let mut fragment = Fragment::new();
        for wrapper in group_blocks(&self.blocks) {
            match wrapper {
                BlockWrapper::Single(block) => {
                    fragment.push(self.block_element(block, None))
                }
                BlockWrapper::List(list_type, items) => {
                    let style = self.list_styles.get(&list_type);
                    let mut list = match style {
                        Some(style) => {
                            Element::with_style(list_type.into(), &style.list)
                        }
                        None => Element::new(list_type.into()),
                    };
                    for item in items {
                        list.push(self.block_element(
                            item,
                            style.map(|s| s.item.as_str()),
                        ));
                    }
                    fragment.push(list);
                }
            }
        }
        fragment
    }

    /// The document text, one line per block.
    pub fn text(&self) -> String {
        self.to_fragment().text()
    }

    fn block_element(
        &self,
        block: &Block,
        base_style: Option<&str>,
    ) -> Element {
        let tag = match block.kind {
            BlockKind::Generic => Tag::Div,
            BlockKind::Paragraph => Tag::P,
            BlockKind::Heading(level) => Tag::heading(level),
            BlockKind::ListItem(_) => Tag::Li,
        };
        let mut declarations: Vec<String> =
            base_style.map(str::to_owned).into_iter().collect();
        if let Some(align) = block.align {
            declarations.push(format!("text-align: {align}"));
        }
        if block.indent_px > 0 {
            declarations.push(format!("margin-left: {}px", block.indent_px));
        }
        let mut element = Element::with_style(tag, &declarations.join("; "));
        if block.is_empty() {
            element.push(Node::line_break());
        }
        for run in &block.runs {
            element.push(run_node(run));
        }
        element
    }
}

fn group_blocks(blocks: &[Block]) -> Vec<BlockWrapper<'_>> {
    let mut wrappers: Vec<BlockWrapper> = Vec::new();
    for block in blocks {
        match (block.kind, wrappers.last_mut()) {
            (BlockKind::ListItem(t), Some(BlockWrapper::List(open, items)))
                if *open == t =>
            {
                items.push(block)
            }
            (BlockKind::ListItem(t), _) => {
                wrappers.push(BlockWrapper::List(t, vec![block]))
            }
            _ => wrappers.push(BlockWrapper::Single(block)),
        }
    }
    wrappers
}

/// Text wrapped in its format elements, nested strong, em, u from the
/// outside in.
fn run_node(run: &Run) -> Node {
    let InlineFormat {
        bold,
        italic,
        underline,
    } = run.format;
    let mut node = Node::text(&run.text);
    let tags = [(underline, Tag::U), (italic, Tag::Em), (bold, Tag::Strong)];
    for (on, tag) in tags {
        if on {
            node = Element::with_children(tag, [node]).into();
        }
    }
    node
}
