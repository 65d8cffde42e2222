use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// How hard an indicator makes a module at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyCategory {
    Easy,
    #[default]
    Average,
    Medium,
    Hard,
    VeryHard,
}

impl DifficultyCategory {
    pub const ALL: [DifficultyCategory; 5] = [
        Self::Easy,
        Self::Average,
        Self::Medium,
        Self::Hard,
        Self::VeryHard,
    ];

    /// Workload contribution. Medium and hard deliberately share a score.
    pub const fn score(self) -> i32 {
        match self {
            Self::Easy => -1,
            Self::Average => 0,
            Self::Medium => 1,
            Self::Hard => 1,
            Self::VeryHard => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Average => "average",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::VeryHard => "very_hard",
        }
    }

    /// Lenient conversion: anything other than an exact snake_case label is
    /// `Average`.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            log::debug!("unrecognized difficulty category {label:?}, using average");
            Self::Average
        })
    }
}

impl FromStr for DifficultyCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "average" => Ok(Self::Average),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "very_hard" => Ok(Self::VeryHard),
            other => Err(format!("unknown difficulty category: {other}")),
        }
    }
}

impl fmt::Display for DifficultyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DifficultyCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().map(Self::from_label).unwrap_or_default())
    }
}

/// Score for a category label; unknown labels score like `average` (0).
pub fn score_of(category: &str) -> i32 {
    DifficultyCategory::from_label(category).score()
}
