// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Command-line arguments and the optional YAML settings file.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use rich_editor::parser::DEFAULT_MAX_INPUT_BYTES;
use rich_editor::{EditorConfig, PastePayload};
use serde::Deserialize;

/// Normalize clipboard content the way the editor does on paste
#[derive(Parser, Debug)]
#[command(name = "paste-normalize", version)]
pub struct CliArgs {
    /// File holding the markup flavor of the clipboard
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// File holding the plain-text flavor. Read from stdin when neither
    /// flavor is given.
    #[arg(long, value_name = "FILE")]
    pub text: Option<PathBuf>,

    /// YAML settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a JSON report instead of the markup
    #[arg(long)]
    pub json: bool,

    /// Show how each plain-text line was classified
    #[arg(long)]
    pub explain: bool,

    /// Put the normalized markup on the system clipboard, with its text
    /// as the plain alternative
    #[arg(long)]
    pub copy: bool,

    /// Log ingestion decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Settings {
    /// Markup longer than this is pasted as text.
    pub max_input_bytes: usize,
    pub pretty_json: bool,
    /// Only `show_word_count` matters here: it controls the counter line.
    pub editor: EditorConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            pretty_json: false,
            editor: EditorConfig::default(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_yaml(&yaml)
            .with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Self = serde_yaml::from_str(yaml)?;
        if settings.max_input_bytes == 0 {
            bail!("max_input_bytes must be positive");
        }
        settings.editor.validate()?;
        Ok(settings)
    }
}

impl CliArgs {
    pub fn settings(&self) -> Result<Settings> {
        match &self.config {
            Some(path) => Settings::load(path),
            None => Ok(Settings::default()),
        }
    }

    /// Build the clipboard payload from the given files, or from `stdin`
    /// as plain text when no file is given.
    pub fn payload(&self, mut stdin: impl Read) -> Result<PastePayload> {
        let html = self.html.as_deref().map(read_file).transpose()?;
        let text = self.text.as_deref().map(read_file).transpose()?;
        if html.is_some() || text.is_some() {
            return Ok(PastePayload { html, text });
        }
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer).context("reading stdin")?;
        Ok(PastePayload::text(buffer))
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))
}
