pub mod errors;

use serde::{Deserialize, Deserializer, Serialize};

/// Sort position used for modules that carry no build sequence.
pub const DEFAULT_BUILD_SEQUENCE: i64 = 9999;

/// A manufactured module unit as exported by the project store.
///
/// Field names accept both the camelCase spelling of the store export
/// (`hitchBLM`, `serialNumber`) and snake_case.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Module {
    #[serde(default, alias = "serialNumber")]
    pub serial_number: String,
    #[serde(default, alias = "projectId")]
    pub project_id: String,
    #[serde(default, alias = "hitchBLM", alias = "hitchBlm")]
    pub hitch_blm: String,
    #[serde(default, alias = "rearBLM", alias = "rearBlm")]
    pub rear_blm: String,
    /// Sawboxes are matched using only the hitch-side identifier.
    #[serde(default, alias = "isSawbox")]
    pub sawbox: bool,
    #[serde(
        default,
        alias = "buildSequence",
        deserialize_with = "deserialize_build_sequence"
    )]
    pub build_sequence: Option<i64>,
}

impl Module {
    pub fn new(serial_number: impl Into<String>) -> Self {
        Self {
            serial_number: serial_number.into(),
            ..Self::default()
        }
    }

    pub fn with_blm(mut self, hitch: impl Into<String>, rear: impl Into<String>) -> Self {
        self.hitch_blm = hitch.into();
        self.rear_blm = rear.into();
        self
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    pub fn with_sequence(mut self, sequence: i64) -> Self {
        self.build_sequence = Some(sequence);
        self
    }

    pub fn as_sawbox(mut self) -> Self {
        self.sawbox = true;
        self
    }

    /// Build sequence with missing values mapped to the sort-last sentinel
    pub fn sequence_or_default(&self) -> i64 {
        self.build_sequence.unwrap_or(DEFAULT_BUILD_SEQUENCE)
    }
}

/// A shop-drawing file. Only the name takes part in matching; everything
/// else in the export is carried through untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Drawing {
    #[serde(alias = "fileName", alias = "file_name")]
    pub name: String,
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl Drawing {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: serde_json::Map::new(),
        }
    }
}

/// Accepts `12`, `"12"`, `""` and `null`; anything unparsable becomes `None`.
fn deserialize_build_sequence<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(serde_json::Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}
