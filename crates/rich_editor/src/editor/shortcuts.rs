// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Keystrokes and the formatting shortcuts bound to them.

use std::fmt;

use crate::FormatCommand;

/// Modifier keys as a bitfield.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    /// Cmd on macOS, Win elsewhere.
    pub const META: Modifiers = Modifiers(0b1000);

    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= Self::CTRL.0;
        }
        if shift {
            bits |= Self::SHIFT.0;
        }
        if alt {
            bits |= Self::ALT.0;
        }
        if meta {
            bits |= Self::META.0;
        }
        Modifiers(bits)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & Self::CTRL.0 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & Self::SHIFT.0 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & Self::ALT.0 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & Self::META.0 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The command key of whichever platform the page runs on: browsers
    /// report Ctrl or Cmd, and both are accepted.
    #[inline]
    pub const fn has_cmd(self) -> bool {
        self.ctrl() || self.meta()
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push("Alt");
        }
        if self.meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key, normalized to lowercase.
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    /// Anything the editor does not care about.
    Other,
}

impl KeyCode {
    /// From a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Enter" => KeyCode::Enter,
            "Escape" => KeyCode::Escape,
            "Tab" => KeyCode::Tab,
            "Backspace" => KeyCode::Backspace,
            "Delete" => KeyCode::Delete,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        KeyCode::Char(c.to_lowercase().next().unwrap_or(c))
                    }
                    _ => KeyCode::Other,
                }
            }
        }
    }

    pub fn is_deletion(self) -> bool {
        matches!(self, KeyCode::Backspace | KeyCode::Delete)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Other => write!(f, "?"),
        }
    }
}

/// A key together with the modifiers held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyStroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl KeyStroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    pub const fn plain(key: KeyCode) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

impl fmt::Display for KeyStroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.mods, self.key)
        }
    }
}

/// The formatting command bound to a keystroke.
///
/// | Keys               | Command     |
/// |--------------------|-------------|
/// | Ctrl/Cmd + B       | `bold`      |
/// | Ctrl/Cmd + I       | `italic`    |
/// | Ctrl/Cmd + U       | `underline` |
/// | Ctrl/Cmd + Z       | `undo`      |
/// | Tab                | `indent`    |
/// | Shift + Tab        | `outdent`   |
pub fn shortcut_command(stroke: &KeyStroke) -> Option<FormatCommand> {
    let mods = stroke.mods;
    match stroke.key {
        KeyCode::Tab if mods.is_empty() => Some(FormatCommand::Indent),
        KeyCode::Tab if mods == Modifiers::SHIFT => {
            Some(FormatCommand::Outdent)
        }
        KeyCode::Char(c) if mods.has_cmd() && !mods.alt() && !mods.shift() => {
            match c {
                'b' => Some(FormatCommand::Bold),
                'i' => Some(FormatCommand::Italic),
                'u' => Some(FormatCommand::Underline),
                'z' => Some(FormatCommand::Undo),
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn cmd(c: char) -> KeyStroke {
        KeyStroke::new(KeyCode::Char(c), Modifiers::CTRL)
    }

    #[test]
    fn format_shortcuts() {
        assert_eq!(shortcut_command(&cmd('b')), Some(FormatCommand::Bold));
        assert_eq!(shortcut_command(&cmd('i')), Some(FormatCommand::Italic));
        assert_eq!(shortcut_command(&cmd('u')), Some(FormatCommand::Underline));
        assert_eq!(shortcut_command(&cmd('z')), Some(FormatCommand::Undo));
        assert_eq!(shortcut_command(&cmd('x')), None);
    }

    #[test]
    fn meta_works_like_ctrl() {
        let stroke = KeyStroke::new(KeyCode::Char('b'), Modifiers::META);
        assert_eq!(shortcut_command(&stroke), Some(FormatCommand::Bold));
    }

    #[test]
    fn shifted_shortcuts_are_left_alone() {
        let stroke = KeyStroke::new(
            KeyCode::Char('z'),
            Modifiers::CTRL | Modifiers::SHIFT,
        );
        assert_eq!(shortcut_command(&stroke), None);
        let plain = KeyStroke::plain(KeyCode::Char('b'));
        assert_eq!(shortcut_command(&plain), None);
    }

    #[test]
    fn tab_indents_and_shift_tab_outdents() {
        assert_eq!(
            shortcut_command(&KeyStroke::plain(KeyCode::Tab)),
            Some(FormatCommand::Indent)
        );
        assert_eq!(
            shortcut_command(&KeyStroke::new(KeyCode::Tab, Modifiers::SHIFT)),
            Some(FormatCommand::Outdent)
        );
        assert_eq!(
            shortcut_command(&KeyStroke::new(KeyCode::Tab, Modifiers::CTRL)),
            None
        );
    }

    #[test]
    fn dom_keys_are_normalized() {
        assert_eq!(KeyCode::from_dom_key("B"), KeyCode::Char('b'));
        assert_eq!(KeyCode::from_dom_key("Backspace"), KeyCode::Backspace);
        assert_eq!(KeyCode::from_dom_key("ArrowLeft"), KeyCode::Other);
        assert!(KeyCode::Delete.is_deletion());
    }

    #[test]
    fn keystrokes_display_with_modifiers() {
        let stroke = KeyStroke::new(
            KeyCode::Char('b'),
            Modifiers::new(true, true, false, false),
        );
        assert_eq!(stroke.to_string(), "Ctrl+Shift+B");
        assert_eq!(KeyStroke::plain(KeyCode::Tab).to_string(), "Tab");
    }
}
