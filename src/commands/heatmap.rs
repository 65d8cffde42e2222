use super::emit;
use crate::cli::OutputArgs;
use crate::config::ModaConfig;
use crate::core::Module;
use crate::difficulty::{aggregate_grid, HeatMapGrid};
use crate::io::{load_difficulty, load_modules, load_schedule, DifficultyData, Report, ScheduleData};
use crate::schedule::project_week;
use anyhow::Result;
use std::path::PathBuf;

pub struct HeatmapConfig {
    pub modules: PathBuf,
    pub difficulty: PathBuf,
    pub schedule: PathBuf,
    pub output: OutputArgs,
}

/// Project the planned week onto stations and score every station-day.
pub fn build_heat_map(
    modules: &[Module],
    difficulty: &DifficultyData,
    schedule: &ScheduleData,
) -> HeatMapGrid {
    let station_days = project_week(&schedule.week, &schedule.stations, modules);
    aggregate_grid(
        &station_days,
        &difficulty.entries_by_project,
        &difficulty.indicators,
    )
}

pub fn handle_heatmap(config: HeatmapConfig, settings: &ModaConfig) -> Result<()> {
    let modules = load_modules(&config.modules)?;
    let difficulty = load_difficulty(&config.difficulty)?;
    let schedule = load_schedule(&config.schedule)?;

    let grid = build_heat_map(&modules, &difficulty, &schedule);
    log::info!(
        "scored {} station-days, total difficulty {:+}",
        grid.cells.len(),
        grid.total_score()
    );

    emit(&Report::HeatMap(grid), &config.output, settings)
}
