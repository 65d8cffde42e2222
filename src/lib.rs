// Export modules for library usage
pub mod blm;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod difficulty;
pub mod io;
pub mod schedule;

// Re-export commonly used types
pub use crate::core::{Drawing, Module, DEFAULT_BUILD_SEQUENCE};

pub use crate::blm::{
    core_pattern, drawing_coverage, find_matching_drawing, has_matching_drawing, normalize, parse,
    sort_modules, BlmId, DrawingCoverage, DrawingStatus, SortDirection, SortKey,
};

pub use crate::difficulty::{
    aggregate_grid, aggregate_station_day, intensity_label, score_of, DifficultyCategory,
    DifficultyIndicator, EntriesByProject, HeatMapEntry, HeatMapGrid, IntensityLabel,
    StationDayScore,
};

pub use crate::schedule::{project_week, ScheduledDay, Station, StationDay, WeeklySchedule};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, Report};
