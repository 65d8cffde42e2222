//! Per-project shop-drawing coverage: which modules have a drawing and
//! which are still missing one.

use super::matcher::MatchKeys;
use super::parser::{normalize, parse};
use crate::core::{Drawing, Module};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DrawingStatus {
    Matched { drawing: String },
    Missing,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDrawingStatus {
    pub serial_number: String,
    /// Parsed identifier rendered for display
    pub blm: String,
    pub sawbox: bool,
    #[serde(flatten)]
    pub status: DrawingStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawingCoverage {
    pub modules: Vec<ModuleDrawingStatus>,
    pub total: usize,
    pub matched: usize,
    pub missing: usize,
}

impl DrawingCoverage {
    /// Share of modules with a drawing, 0.0 for an empty project
    pub fn coverage_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.matched as f64 / self.total as f64 * 100.0
    }

    pub fn missing_modules(&self) -> impl Iterator<Item = &ModuleDrawingStatus> {
        self.modules
            .iter()
            .filter(|m| matches!(m.status, DrawingStatus::Missing))
    }
}

/// Match every module against the drawing set, preserving module order.
pub fn drawing_coverage(modules: &[Module], drawings: &[Drawing]) -> DrawingCoverage {
    // Names are normalized once and shared by every module
    let names: Vec<String> = drawings.iter().map(|d| normalize(&d.name)).collect();

    let statuses: Vec<ModuleDrawingStatus> = modules
        .iter()
        .map(|module| {
            let keys = MatchKeys::for_module(module);
            let status = match keys.first_match(drawings.iter().zip(&names)) {
                Some(drawing) => DrawingStatus::Matched {
                    drawing: drawing.name.clone(),
                },
                None => DrawingStatus::Missing,
            };
            let id = parse(Some(keys.primary.as_str()));
            ModuleDrawingStatus {
                serial_number: module.serial_number.clone(),
                blm: if id.is_matched() { id.to_string() } else { id.raw },
                sawbox: module.sawbox,
                status,
            }
        })
        .collect();

    let matched = statuses
        .iter()
        .filter(|s| matches!(s.status, DrawingStatus::Matched { .. }))
        .count();

    log::info!(
        "drawing coverage: {matched}/{} modules matched against {} drawings",
        statuses.len(),
        drawings.len()
    );

    DrawingCoverage {
        total: statuses.len(),
        matched,
        missing: statuses.len() - matched,
        modules: statuses,
    }
}
