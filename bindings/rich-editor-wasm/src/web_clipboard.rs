// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The async Clipboard API as a [`ClipboardSink`].
//!
//! A write is accepted once the browser has taken the request. The promise
//! settles later, and a rejection at that point can only be logged.

use js_sys::{Array, Object, Promise, Reflect};
use rich_editor::{ClipboardError, ClipboardSink, CopyPayload};
use tracing::{debug, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Blob, BlobPropertyBag, Clipboard, ClipboardItem};

pub struct WebClipboard {
    clipboard: Clipboard,
}

impl WebClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let window = web_sys::window().ok_or_else(|| {
            ClipboardError::Unavailable("no window".to_owned())
        })?;
        let clipboard = window.navigator().clipboard();
        // Only exposed in secure contexts.
        if clipboard.is_undefined() {
            return Err(ClipboardError::Unavailable(
                "navigator.clipboard is undefined".to_owned(),
            ));
        }
        Ok(Self { clipboard })
    }
}

impl ClipboardSink for WebClipboard {
    fn write_rich(
        &mut self,
        payload: &CopyPayload,
    ) -> Result<(), ClipboardError> {
        let record = Object::new();
        for (mime, content) in
            [("text/html", &payload.html), ("text/plain", &payload.text)]
        {
            let blob = blob(mime, content).map_err(rejected)?;
            Reflect::set(&record, &JsValue::from_str(mime), &blob)
                .map_err(rejected)?;
        }
        let item =
            ClipboardItem::new_with_record_from_str_to_blob_promise(&record)
                .map_err(rejected)?;
        let items = Array::of1(&item);
        settle("rich", self.clipboard.write(&items));
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        settle("text", self.clipboard.write_text(text));
        Ok(())
    }
}

fn blob(mime: &str, content: &str) -> Result<Blob, JsValue> {
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    Blob::new_with_str_sequence_and_options(
        &Array::of1(&JsValue::from_str(content)),
        &options,
    )
}

fn rejected(err: JsValue) -> ClipboardError {
    ClipboardError::Rejected(format!("{err:?}"))
}

fn settle(flavor: &'static str, promise: Promise) {
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => debug!(flavor, "Clipboard write finished"),
            Err(err) => warn!(flavor, ?err, "Clipboard write was rejected"),
        }
    });
}
