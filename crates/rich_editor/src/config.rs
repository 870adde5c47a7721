// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Presentation options the owner passes to the editor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Counters;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid editor config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("rows must be at least 1")]
    NoRows,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Shown while the document is empty.
    pub placeholder: String,
    /// Visible height of the surface, in text rows.
    pub rows: u32,
    pub label: Option<String>,
    pub show_word_count: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            rows: 6,
            label: None,
            show_word_count: true,
        }
    }
}

impl EditorConfig {
    /// Read a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::NoRows);
        }
        Ok(())
    }

    /// The counter line shown under the surface, when enabled.
    pub fn counter_label(&self, counters: &Counters) -> Option<String> {
        self.show_word_count.then(|| {
            format!("{} words · {} characters", counters.words, counters.chars)
        })
    }
}
