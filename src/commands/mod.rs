//! CLI command implementations for moda operations.
//!
//! Available commands:
//! - **parse**: Show how identifiers are understood
//! - **drawings**: Shop-drawing coverage per module
//! - **sort**: Modules in production order
//! - **heatmap**: Station x day difficulty from the weekly schedule
//! - **init**: Write a default `.moda.toml`
//!
//! Handlers load data at the edge, call the pure library functions, and hand
//! the resulting [`Report`] to a writer.

pub mod drawings;
pub mod heatmap;
pub mod init;
pub mod parse;
pub mod sort;

use crate::cli::OutputArgs;
use crate::config::ModaConfig;
use crate::io::{create_writer, OutputFormat, Report};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Resolve the output format: flag, then config, then terminal.
pub fn resolve_format(args: &OutputArgs, config: &ModaConfig) -> OutputFormat {
    args.format.unwrap_or_else(|| config.output_format())
}

/// Write a report to the requested destination.
pub fn emit(report: &Report, args: &OutputArgs, config: &ModaConfig) -> Result<()> {
    let format = resolve_format(args, config);
    let sink: Box<dyn Write> = match &args.output {
        Some(path) => {
            // Files never get ANSI escapes
            colored::control::set_override(false);
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    let mut writer = create_writer(format, sink);
    writer.write_report(report)?;
    writer.flush().context("failed to write report")?;
    Ok(())
}
