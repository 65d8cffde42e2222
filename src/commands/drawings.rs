use super::emit;
use crate::blm::{drawing_coverage, DrawingCoverage, DrawingStatus};
use crate::cli::OutputArgs;
use crate::config::ModaConfig;
use crate::io::{load_drawings, load_modules, Report};
use anyhow::Result;
use std::path::PathBuf;

pub struct DrawingsConfig {
    pub modules: PathBuf,
    pub drawings: PathBuf,
    pub missing_only: bool,
    pub output: OutputArgs,
}

/// Keep only modules still waiting on a drawing; counts are untouched.
pub fn retain_missing(mut coverage: DrawingCoverage) -> DrawingCoverage {
    coverage
        .modules
        .retain(|m| matches!(m.status, DrawingStatus::Missing));
    coverage
}

pub fn handle_drawings(config: DrawingsConfig, settings: &ModaConfig) -> Result<()> {
    let modules = load_modules(&config.modules)?;
    let drawings = load_drawings(&config.drawings)?;

    let mut coverage = drawing_coverage(&modules, &drawings);
    if config.missing_only {
        coverage = retain_missing(coverage);
    }

    emit(&Report::Coverage(coverage), &config.output, settings)
}
