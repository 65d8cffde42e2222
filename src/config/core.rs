use crate::blm::{SortDirection, SortKey};
use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};

/// Root configuration structure for moda
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ModaConfig {
    /// Default module ordering
    #[serde(default)]
    pub sorting: Option<SortingConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SortingConfig {
    #[serde(default)]
    pub key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl ModaConfig {
    pub fn sort_key(&self) -> SortKey {
        self.sorting.map(|s| s.key).unwrap_or_default()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sorting.map(|s| s.direction).unwrap_or_default()
    }

    /// Configured default format; unknown names fall back to terminal
    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
            .map(|name| {
                OutputFormat::parse(name).unwrap_or_else(|| {
                    log::warn!("Unknown output format {name:?} in config, using terminal");
                    OutputFormat::Terminal
                })
            })
            .unwrap_or(OutputFormat::Terminal)
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }
}
