// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Copying the document out, rich first and plain text as a fallback.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CopyPayload {
    pub html: String,
    pub text: String,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard refused the write: {0}")]
    Rejected(String),
}

/// Somewhere copied content can be written.
pub trait ClipboardSink {
    /// Write markup together with its plain-text alternative.
    fn write_rich(
        &mut self,
        payload: &CopyPayload,
    ) -> Result<(), ClipboardError>;

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyOutcome {
    Rich,
    PlainText,
    Failed,
}

/// Write `payload` as rich content, falling back to its text. A total
/// failure is only logged.
pub fn copy_with_fallback(
    sink: &mut dyn ClipboardSink,
    payload: &CopyPayload,
) -> CopyOutcome {
    let rich_error = match sink.write_rich(payload) {
        Ok(()) => return CopyOutcome::Rich,
        Err(err) => err,
    };
    debug!(error = %rich_error, "Rich copy failed, copying text");
    match sink.write_text(&payload.text) {
        Ok(()) => CopyOutcome::PlainText,
        Err(err) => {
            warn!(error = %err, "Copy failed");
            CopyOutcome::Failed
        }
    }
}

#[cfg(feature = "clipboard")]
pub use native::ArboardClipboard;

#[cfg(feature = "clipboard")]
mod native {
    use super::{ClipboardError, ClipboardSink, CopyPayload};

    /// The system clipboard.
    pub struct ArboardClipboard {
        clipboard: arboard::Clipboard,
    }

    impl ArboardClipboard {
        pub fn new() -> Result<Self, ClipboardError> {
            arboard::Clipboard::new()
                .map(|clipboard| Self { clipboard })
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))
        }
    }

    impl ClipboardSink for ArboardClipboard {
        fn write_rich(
            &mut self,
            payload: &CopyPayload,
        ) -> Result<(), ClipboardError> {
            self.clipboard
                .set_html(payload.html.as_str(), Some(payload.text.as_str()))
                .map_err(|e| ClipboardError::Rejected(e.to_string()))
        }

        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::Rejected(e.to_string()))
        }
    }
}
