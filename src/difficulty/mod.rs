//! Station difficulty heat maps.
//!
//! Each project rates difficulty indicators per station on a five-step scale.
//! Ratings map to integer workload scores that are summed per module and per
//! station-day, then bucketed into an intensity label.

pub mod aggregation;
pub mod category;
pub mod grid;
pub mod intensity;

pub use aggregation::{
    aggregate_station_day, DifficultyIndicator, EntriesByProject, HeatMapEntry, IndicatorScore,
    ModuleDifficulty, StationDayScore,
};
pub use category::{score_of, DifficultyCategory};
pub use grid::{aggregate_grid, HeatMapCell, HeatMapGrid};
pub use intensity::{intensity_label, IntensityLabel};
