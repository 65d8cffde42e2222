use serde::{Deserialize, Serialize};
use std::fmt;

/// Labor-intensity bucket for a station-day.
///
/// Buckets are keyed on the average score per module; every upper bound is
/// inclusive:
///
/// | average score        | label      |
/// |----------------------|------------|
/// | `avg <= -0.5`        | Light      |
/// | `avg <= 0.25`        | Normal     |
/// | `avg <= 0.75`        | Moderate   |
/// | `avg <= 1.25`        | Heavy      |
/// | otherwise            | Very Heavy |
///
/// A day with no modules is `No modules` regardless of score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntensityLabel {
    Light,
    Normal,
    Moderate,
    Heavy,
    #[serde(rename = "Very Heavy")]
    VeryHeavy,
    #[serde(rename = "No modules")]
    NoModules,
}

const LIGHT_MAX: f64 = -0.5;
const NORMAL_MAX: f64 = 0.25;
const MODERATE_MAX: f64 = 0.75;
const HEAVY_MAX: f64 = 1.25;

impl IntensityLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Normal => "Normal",
            Self::Moderate => "Moderate",
            Self::Heavy => "Heavy",
            Self::VeryHeavy => "Very Heavy",
            Self::NoModules => "No modules",
        }
    }

    pub fn from_average(avg: f64) -> Self {
        if avg <= LIGHT_MAX {
            Self::Light
        } else if avg <= NORMAL_MAX {
            Self::Normal
        } else if avg <= MODERATE_MAX {
            Self::Moderate
        } else if avg <= HEAVY_MAX {
            Self::Heavy
        } else {
            Self::VeryHeavy
        }
    }
}

impl fmt::Display for IntensityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn intensity_label(score: i64, module_count: usize) -> IntensityLabel {
    if module_count == 0 {
        return IntensityLabel::NoModules;
    }
    IntensityLabel::from_average(score as f64 / module_count as f64)
}
