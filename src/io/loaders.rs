//! Typed loading of exported project data.
//!
//! This is the only place loosely shaped store exports become typed records.
//! Field spelling differences are absorbed by serde aliases on the record
//! types; structural problems are reported with the offending file path.

use crate::core::errors::{Error, Result};
use crate::core::{Drawing, Module};
use crate::difficulty::{DifficultyIndicator, EntriesByProject};
use crate::schedule::{Station, WeeklySchedule};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Indicators plus every project's heat-map rows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DifficultyData {
    #[serde(default)]
    pub indicators: Vec<DifficultyIndicator>,
    #[serde(default, alias = "entries", alias = "heatMap", alias = "heat_map")]
    pub entries_by_project: EntriesByProject,
}

/// Line stations and the planned week.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleData {
    pub stations: Vec<Station>,
    pub week: WeeklySchedule,
}

pub fn parse_json<T: DeserializeOwned>(contents: &str, path: &Path) -> Result<T> {
    serde_json::from_str(contents).map_err(|e| Error::input(path, e.to_string()))
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::read_failed(path, e))?;
    parse_json(&contents, path)
}

/// Reject exports where two modules claim the same serial number.
pub fn validate_modules(modules: &[Module]) -> Result<()> {
    let mut seen = HashSet::new();
    let duplicates: Vec<&str> = modules
        .iter()
        .map(|m| m.serial_number.as_str())
        .filter(|serial| !serial.is_empty())
        .filter(|serial| !seen.insert(*serial))
        .collect();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "duplicate module serial numbers: {}",
            duplicates.join(", ")
        )))
    }
}

pub fn load_modules(path: &Path) -> Result<Vec<Module>> {
    let modules: Vec<Module> = load_json(path)?;
    validate_modules(&modules)?;
    log::debug!("loaded {} modules from {}", modules.len(), path.display());
    Ok(modules)
}

pub fn load_drawings(path: &Path) -> Result<Vec<Drawing>> {
    let drawings: Vec<Drawing> = load_json(path)?;
    log::debug!("loaded {} drawings from {}", drawings.len(), path.display());
    Ok(drawings)
}

pub fn load_difficulty(path: &Path) -> Result<DifficultyData> {
    load_json(path)
}

pub fn load_schedule(path: &Path) -> Result<ScheduleData> {
    let data: ScheduleData = load_json(path)?;
    if data.stations.iter().any(|s| s.id.is_empty()) {
        return Err(Error::input(path, "station with empty id"));
    }
    Ok(data)
}
