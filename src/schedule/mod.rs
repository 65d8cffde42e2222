//! Weekly production schedule projection.
//!
//! A week is planned as per-day shift targets (modules per shift) starting
//! from a given module. Stations further down the line work the same
//! sequence a fixed number of modules behind the line start. Projecting the
//! week yields, for every station and day, the modules that station works on.

use crate::core::Module;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A production stage on the factory line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Position on the line; projected days are emitted in this order
    #[serde(default)]
    pub order: u32,
    /// Modules this station trails the line start by
    #[serde(default)]
    pub offset: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledDay {
    pub date: NaiveDate,
    /// Module target for each shift
    #[serde(default)]
    pub shifts: Vec<u32>,
}

impl ScheduledDay {
    pub fn target(&self) -> usize {
        self.shifts.iter().map(|&s| s as usize).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(alias = "weekStart")]
    pub week_start: NaiveDate,
    /// Serial number of the first module the line starts on this week
    #[serde(default, alias = "startingModule")]
    pub starting_module: Option<String>,
    #[serde(default)]
    pub days: Vec<ScheduledDay>,
}

impl WeeklySchedule {
    pub fn total_target(&self) -> usize {
        self.days.iter().map(ScheduledDay::target).sum()
    }
}

/// Modules one station works on one day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationDay<'a> {
    pub station_id: String,
    pub date: NaiveDate,
    pub modules: Vec<&'a Module>,
}

/// Modules in line order: by build sequence, missing sequences last.
pub fn line_order(modules: &[Module]) -> Vec<&Module> {
    let mut ordered: Vec<&Module> = modules.iter().collect();
    ordered.sort_by_key(|m| m.sequence_or_default());
    ordered
}

// Pure function: half-open slice of the line for a station on one day, clamped
fn day_window(start: usize, cumulative: usize, target: usize, offset: usize, len: usize) -> (usize, usize) {
    let from = (start + cumulative).saturating_sub(offset).min(len);
    let to = (start + cumulative + target).saturating_sub(offset).min(len);
    (from, to)
}

/// Project a week onto stations. Output is stations outer (by `order`, ties
/// in input order), days inner in input order.
pub fn project_week<'a>(
    schedule: &WeeklySchedule,
    stations: &[Station],
    modules: &'a [Module],
) -> Vec<StationDay<'a>> {
    let ordered = line_order(modules);

    let start = match schedule.starting_module.as_deref() {
        Some(serial) => ordered
            .iter()
            .position(|m| m.serial_number == serial)
            .unwrap_or_else(|| {
                log::warn!("starting module {serial} not found, starting from the first module");
                0
            }),
        None => 0,
    };

    let mut by_order: Vec<&Station> = stations.iter().collect();
    by_order.sort_by_key(|s| s.order);

    let mut projected = Vec::with_capacity(stations.len() * schedule.days.len());
    for station in by_order {
        let mut cumulative = 0;
        for day in &schedule.days {
            let target = day.target();
            let (from, to) = day_window(start, cumulative, target, station.offset, ordered.len());
            projected.push(StationDay {
                station_id: station.id.clone(),
                date: day.date,
                modules: ordered[from..to].to_vec(),
            });
            cumulative += target;
        }
    }

    log::debug!(
        "projected {} station-days from week of {} ({} modules planned)",
        projected.len(),
        schedule.week_start,
        schedule.total_target()
    );
    projected
}
