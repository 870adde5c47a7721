// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Build a [`MemorySurface`] from markup with selection markers.
//!
//! `|` marks the caret. `{` and `}` mark the ends of a range, with `|` next
//! to the end the focus is at: `{abc}|` selects forwards, `|{abc}`
//! backwards. Without markers the caret sits at the end. The surface is
//! focused.

use crate::MemorySurface;

const START: char = '\u{E000}';
const END: char = '\u{E001}';
const CARET: char = '\u{E002}';

pub fn surface(html: &str) -> MemorySurface {
    let marked: String = html
        .chars()
        .map(|c| match c {
            '{' => START,
            '}' => END,
            '|' => CARET,
            c => c,
        })
        .collect();
    let mut s = MemorySurface::from_html(&marked);

    let mut start = None;
    let mut end = None;
    let mut caret = None;
    let mut offset = 0;
    for (index, block) in s.blocks.iter_mut().enumerate() {
        if index > 0 {
            offset += 1;
        }
        for run in &mut block.runs {
            let mut text = String::with_capacity(run.text.len());
            for c in run.text.chars() {
                match c {
                    START => start = Some(offset),
                    END => end = Some(offset),
                    CARET => caret = Some(offset),
                    c => {
                        text.push(c);
                        offset += 1;
                    }
                }
            }
            run.text = text;
        }
        block.normalize();
    }

    let selection = match (start, end, caret) {
        (Some(s), Some(e), Some(c)) if c == s && s != e => (e, s),
        (Some(s), Some(e), _) => (s, e),
        (_, _, Some(c)) => (c, c),
        _ => (offset, offset),
    };
    s.selection = Some(selection);
    s.focused = true;
    s
}

#[test]
fn markers_become_the_selection() {
    assert_eq!(surface("ab|c").selection(), Some((2, 2)));
    assert_eq!(surface("a{bc}|d").selection(), Some((1, 3)));
    assert_eq!(surface("a|{bc}d").selection(), Some((3, 1)));
    assert_eq!(surface("<p>ab</p><p>c{d}|</p>").selection(), Some((4, 5)));
    assert_eq!(surface("abc").selection(), Some((3, 3)));
}

#[test]
fn markers_leave_no_text_behind() {
    let s = surface("<p>a{<strong>b</strong>}|</p>");
    assert_eq!(s.text(), "ab");
    assert_eq!(s.blocks()[0].runs.len(), 2);
}
