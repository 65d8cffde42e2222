use super::category::DifficultyCategory;
use crate::core::Module;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named factor that makes modules harder to build at some stations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyIndicator {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// One cell of a project's heat map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatMapEntry {
    #[serde(alias = "difficultyIndicatorId", alias = "indicator_id")]
    pub difficulty_indicator_id: String,
    #[serde(alias = "stationId")]
    pub station_id: String,
    #[serde(default, alias = "difficultyCategory", alias = "category")]
    pub difficulty_category: DifficultyCategory,
}

/// Heat-map entries keyed by project id.
pub type EntriesByProject = HashMap<String, Vec<HeatMapEntry>>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorScore {
    pub indicator_id: String,
    pub indicator_name: String,
    pub category: DifficultyCategory,
    pub score: i32,
}

/// Nonzero indicators for one module at one station.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDifficulty {
    pub serial_number: String,
    pub project_id: String,
    pub subtotal: i64,
    pub indicators: Vec<IndicatorScore>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationDayScore {
    pub station_id: String,
    pub score: i64,
    pub module_count: usize,
    pub details: Vec<ModuleDifficulty>,
}

// Pure function: indicator -> category for one station in one project.
// The first entry for a pair wins if the data holds duplicates.
fn station_categories<'a>(
    entries: &'a [HeatMapEntry],
    station_id: &str,
) -> HashMap<&'a str, DifficultyCategory> {
    let mut categories = HashMap::new();
    for entry in entries.iter().filter(|e| e.station_id == station_id) {
        categories
            .entry(entry.difficulty_indicator_id.as_str())
            .or_insert(entry.difficulty_category);
    }
    categories
}

/// Sum indicator scores over every module scheduled at a station on one day.
///
/// Projects without heat-map data count as all-average. `details` keeps only
/// modules with at least one nonzero indicator, and only those indicators.
pub fn aggregate_station_day(
    station_id: &str,
    scheduled_modules: &[&Module],
    entries_by_project: &EntriesByProject,
    indicators: &[DifficultyIndicator],
) -> StationDayScore {
    let mut per_project: HashMap<&str, HashMap<&str, DifficultyCategory>> = HashMap::new();
    let mut score = 0i64;
    let mut details = Vec::new();

    for module in scheduled_modules {
        let categories = per_project
            .entry(module.project_id.as_str())
            .or_insert_with(|| {
                entries_by_project
                    .get(&module.project_id)
                    .map(|entries| station_categories(entries, station_id))
                    .unwrap_or_default()
            });

        let scored: Vec<IndicatorScore> = indicators
            .iter()
            .filter_map(|indicator| {
                let category = *categories.get(indicator.id.as_str())?;
                let points = category.score();
                (points != 0).then(|| IndicatorScore {
                    indicator_id: indicator.id.clone(),
                    indicator_name: indicator.name.clone(),
                    category,
                    score: points,
                })
            })
            .collect();

        let subtotal: i64 = scored.iter().map(|s| i64::from(s.score)).sum();
        score += subtotal;

        if !scored.is_empty() {
            details.push(ModuleDifficulty {
                serial_number: module.serial_number.clone(),
                project_id: module.project_id.clone(),
                subtotal,
                indicators: scored,
            });
        }
    }

    StationDayScore {
        station_id: station_id.to_string(),
        score,
        module_count: scheduled_modules.len(),
        details,
    }
}
