use super::aggregation::{aggregate_station_day, DifficultyIndicator, EntriesByProject, StationDayScore};
use super::intensity::{intensity_label, IntensityLabel};
use crate::schedule::StationDay;
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatMapCell {
    pub date: NaiveDate,
    pub label: IntensityLabel,
    #[serde(flatten)]
    pub result: StationDayScore,
}

/// Station x day intensity grid, cells in the order they were projected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatMapGrid {
    pub cells: Vec<HeatMapCell>,
}

impl HeatMapGrid {
    /// Station ids in first-seen order
    pub fn stations(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for cell in &self.cells {
            if !seen.contains(&cell.result.station_id.as_str()) {
                seen.push(&cell.result.station_id);
            }
        }
        seen
    }

    /// Dates in ascending order
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.cells.iter().map(|c| c.date).collect();
        dates.sort();
        dates.dedup();
        dates
    }

    pub fn cell(&self, station_id: &str, date: NaiveDate) -> Option<&HeatMapCell> {
        self.cells
            .iter()
            .find(|c| c.date == date && c.result.station_id == station_id)
    }

    pub fn total_score(&self) -> i64 {
        self.cells.iter().map(|c| c.result.score).sum()
    }
}

/// Score every projected station-day. Cells are independent, so they are
/// computed in parallel; `collect` keeps input order.
pub fn aggregate_grid(
    station_days: &[StationDay<'_>],
    entries_by_project: &EntriesByProject,
    indicators: &[DifficultyIndicator],
) -> HeatMapGrid {
    let cells = station_days
        .par_iter()
        .map(|day| {
            let result = aggregate_station_day(
                &day.station_id,
                &day.modules,
                entries_by_project,
                indicators,
            );
            HeatMapCell {
                date: day.date,
                label: intensity_label(result.score, result.module_count),
                result,
            }
        })
        .collect();

    HeatMapGrid { cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Module;
    use crate::difficulty::{DifficultyCategory, HeatMapEntry};

    #[test]
    fn test_grid_scores_each_cell() {
        let hard = Module::new("m1").with_project("p1");
        let plain = Module::new("m2").with_project("p1");
        let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let tuesday = monday.succ_opt().unwrap();

        let days = vec![
            StationDay {
                station_id: "frame".into(),
                date: monday,
                modules: vec![&hard, &plain],
            },
            StationDay {
                station_id: "frame".into(),
                date: tuesday,
                modules: vec![],
            },
            StationDay {
                station_id: "roof".into(),
                date: monday,
                modules: vec![&hard],
            },
        ];

        let mut entries = EntriesByProject::new();
        entries.insert(
            "p1".into(),
            vec![
                HeatMapEntry {
                    difficulty_indicator_id: "stairs".into(),
                    station_id: "frame".into(),
                    difficulty_category: DifficultyCategory::Hard,
                },
                HeatMapEntry {
                    difficulty_indicator_id: "stairs".into(),
                    station_id: "roof".into(),
                    difficulty_category: DifficultyCategory::VeryHard,
                },
            ],
        );
        let indicators = vec![DifficultyIndicator {
            id: "stairs".into(),
            name: "Stairs".into(),
        }];

        let grid = aggregate_grid(&days, &entries, &indicators);
        assert_eq!(grid.cells.len(), 3);
        assert_eq!(grid.stations(), vec!["frame", "roof"]);
        assert_eq!(grid.dates(), vec![monday, tuesday]);

        // m1 and m2 share a project, so both carry the hard entry
        let frame_monday = grid.cell("frame", monday).unwrap();
        assert_eq!(frame_monday.result.score, 2);
        assert_eq!(frame_monday.label, IntensityLabel::Heavy);

        assert_eq!(grid.cell("frame", tuesday).unwrap().label, IntensityLabel::NoModules);
        assert_eq!(grid.cell("roof", monday).unwrap().label, IntensityLabel::VeryHeavy);
        assert_eq!(grid.total_score(), 4);
    }
}
