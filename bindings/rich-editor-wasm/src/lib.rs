// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! JavaScript bindings for the rich editor.
//!
//! The page owns the `contenteditable` element and forwards its events;
//! every call returns an update object whose fields are only present when
//! they changed:
//!
//! ```js
//! const editor = new RichTextEditor(element, JSON.stringify({ rows: 8 }));
//! element.addEventListener("input", () => render(editor.handleInput()));
//! ```

mod dom_surface;
mod node_registry;
mod web_clipboard;

use std::str::FromStr;

use js_sys::{Object, Reflect};
use rich_editor::{
    ActiveFormats, CopyOutcome, Counters, EditorConfig, EditorUpdate,
    FormatCommand, KeyCode, KeyStroke, Modifiers, PastePayload, RichEditor,
};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::dom_surface::DomSurface;
use crate::web_clipboard::WebClipboard;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct RichTextEditor {
    inner: RichEditor<DomSurface>,
}

#[wasm_bindgen]
impl RichTextEditor {
    /// `config` is the JSON form of the editor options, or undefined for
    /// the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        element: HtmlElement,
        config: Option<String>,
    ) -> Result<RichTextEditor, JsError> {
        let config = match config {
            Some(json) => EditorConfig::from_json(&json)?,
            None => EditorConfig::default(),
        };
        let surface = DomSurface::new(element).ok_or_else(|| {
            JsError::new("element is not in an HTML document")
        })?;
        Ok(Self {
            inner: RichEditor::new(surface, config),
        })
    }

    pub fn value(&self) -> String {
        self.inner.value().to_owned()
    }

    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(
        &mut self,
        value: &str,
        has_pending_local_edits: bool,
    ) -> JsValue {
        update_to_js(&self.inner.set_value(value, has_pending_local_edits))
    }

    /// `command` is an `execCommand` name such as `bold` or
    /// `insertUnorderedList`.
    #[wasm_bindgen(js_name = applyFormat)]
    pub fn apply_format(
        &mut self,
        command: &str,
        value: Option<String>,
    ) -> Result<JsValue, JsError> {
        let command = FormatCommand::from_str(command).map_err(|_| {
            JsError::new(&format!("unknown command: {command}"))
        })?;
        Ok(update_to_js(
            &self.inner.apply_format(command, value.as_deref()),
        ))
    }

    #[wasm_bindgen(js_name = handleInput)]
    pub fn handle_input(&mut self) -> JsValue {
        update_to_js(&self.inner.handle_input())
    }

    /// Returns the update, or null when the event should be left to the
    /// browser because there was nothing to paste.
    #[wasm_bindgen(js_name = handlePaste)]
    pub fn handle_paste(
        &mut self,
        html: Option<String>,
        text: Option<String>,
    ) -> JsValue {
        let payload = PastePayload { html, text };
        if payload.markup().is_none() && payload.plain_text().is_none() {
            return JsValue::NULL;
        }
        update_to_js(&self.inner.handle_paste(&payload))
    }

    /// Returns the update, or null when the key was not a shortcut and its
    /// default action should go ahead.
    #[wasm_bindgen(js_name = handleKeyDown)]
    pub fn handle_key_down(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> JsValue {
        let stroke = KeyStroke::new(
            KeyCode::from_dom_key(key),
            Modifiers::new(ctrl, shift, alt, meta),
        );
        let outcome = self.inner.handle_key_down(&stroke);
        if outcome.prevent_default {
            update_to_js(&outcome.update)
        } else {
            JsValue::NULL
        }
    }

    #[wasm_bindgen(js_name = handleKeyUp)]
    pub fn handle_key_up(&mut self, key: &str) -> JsValue {
        update_to_js(&self.inner.handle_key_up(KeyCode::from_dom_key(key)))
    }

    #[wasm_bindgen(js_name = handleMouseUp)]
    pub fn handle_mouse_up(&mut self) -> JsValue {
        update_to_js(&self.inner.handle_mouse_up())
    }

    #[wasm_bindgen(js_name = handleSelectionChange)]
    pub fn handle_selection_change(&mut self) -> JsValue {
        update_to_js(&self.inner.handle_selection_change())
    }

    /// Call from a zero-delay timeout after any call that may queue work.
    #[wasm_bindgen(js_name = flushDeferred)]
    pub fn flush_deferred(&mut self) -> JsValue {
        update_to_js(&self.inner.flush_deferred())
    }

    #[wasm_bindgen(js_name = hasDeferredWork)]
    pub fn has_deferred_work(&self) -> bool {
        self.inner.pending_tasks() > 0
    }

    #[wasm_bindgen(js_name = activeFormats)]
    pub fn active_formats(&self) -> JsValue {
        formats_to_js(&self.inner.active_formats())
    }

    pub fn words(&self) -> usize {
        self.inner.counters().words
    }

    pub fn chars(&self) -> usize {
        self.inner.counters().chars
    }

    #[wasm_bindgen(js_name = counterLabel)]
    pub fn counter_label(&self) -> Option<String> {
        self.inner.counter_label()
    }

    #[wasm_bindgen(js_name = showsPlaceholder)]
    pub fn shows_placeholder(&self) -> bool {
        self.inner.shows_placeholder()
    }

    /// The document's plain text, for the `text/plain` flavor of a copy.
    #[wasm_bindgen(js_name = plainText)]
    pub fn plain_text(&self) -> String {
        self.inner.document().text()
    }

    /// Copy the document as markup with a plain-text alternative, or as
    /// text alone when the browser cannot write markup. Returns `"rich"`,
    /// `"plain_text"` or `"failed"`.
    #[wasm_bindgen(js_name = copyToClipboard)]
    pub fn copy_to_clipboard(&self) -> Result<String, JsError> {
        let mut clipboard = WebClipboard::new()?;
        let outcome = self.inner.copy_to_clipboard(&mut clipboard);
        Ok(outcome_name(outcome).to_owned())
    }
}

fn outcome_name(outcome: CopyOutcome) -> &'static str {
    match outcome {
        CopyOutcome::Rich => "rich",
        CopyOutcome::PlainText => "plain_text",
        CopyOutcome::Failed => "failed",
    }
}

fn set(target: &Object, key: &str, value: impl Into<JsValue>) {
    // Setting a property on a plain object cannot throw.
    let _ = Reflect::set(target, &JsValue::from_str(key), &value.into());
}

fn update_to_js(update: &EditorUpdate) -> JsValue {
    let object = Object::new();
    if let Some(value) = &update.value {
        set(&object, "value", value.as_str());
    }
    if let Some(counters) = &update.counters {
        set(&object, "counters", counters_to_js(counters));
    }
    if let Some(formats) = &update.active_formats {
        set(&object, "activeFormats", formats_to_js(formats));
    }
    object.into()
}

fn counters_to_js(counters: &Counters) -> JsValue {
    let object = Object::new();
    set(&object, "words", counters.words as u32);
    set(&object, "chars", counters.chars as u32);
    object.into()
}

fn formats_to_js(formats: &ActiveFormats) -> JsValue {
    let object = Object::new();
    set(&object, "bold", formats.bold);
    set(&object, "italic", formats.italic);
    set(&object, "underline", formats.underline);
    set(&object, "alignLeft", formats.align_left);
    set(&object, "alignCenter", formats.align_center);
    set(&object, "alignRight", formats.align_right);
    set(&object, "unorderedList", formats.unordered_list);
    object.into()
}
