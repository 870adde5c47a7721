// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! `paste-normalize`: run clipboard content through the editor's paste
//! ingestion and print the result.
//!
//! ```text
//! pbpaste | paste-normalize --explain
//! paste-normalize --html copied.html --text copied.txt --json
//! paste-normalize --copy < resume.txt
//! ```

mod cli;
mod logging;
mod report;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use rich_editor::{
    ingest_detailed, ArboardClipboard, CopyOutcome, Html5everParser,
};
use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::report::Report;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    logging::init(args.verbose);

    let settings = args.settings()?;
    let payload = args.payload(io::stdin().lock())?;
    let parser = Html5everParser::with_limit(settings.max_input_bytes);
    let ingestion = ingest_detailed(&payload, &parser);
    info!(source = %ingestion.source, "Normalized paste");

    let mut report = Report::new(&ingestion);
    if args.explain {
        report = report.with_explanation(&payload);
    }
    if args.copy {
        match ArboardClipboard::new() {
            Ok(mut clipboard) => {
                let outcome = report.copy_to(&mut clipboard);
                info!(?outcome, "Copied to the clipboard");
            }
            Err(err) => {
                warn!(error = %err, "No clipboard to copy to");
                report.copy = Some(CopyOutcome::Failed);
            }
        }
    }

    let mut out = io::stdout().lock();
    if args.json {
        let json = report
            .to_json(settings.pretty_json)
            .context("serializing the report")?;
        writeln!(out, "{json}")?;
        return Ok(());
    }

    for line in &report.lines {
        writeln!(out, "{:>9}  {}", line.kind, line.line)?;
    }
    if !report.lines.is_empty() {
        writeln!(out)?;
    }
    writeln!(out, "{}", report.html)?;
    if let Some(label) = settings.editor.counter_label(&report.counters) {
        writeln!(out, "{label}")?;
    }
    Ok(())
}
