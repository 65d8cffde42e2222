//! Building/Level/Module identifier parsing.
//!
//! Identifiers arrive as free-form text typed by people: `B2-L3-M07`,
//! `b2 l3 m07`, `L5M12`, or embedded in a file name such as
//! `B1L2M03_Electrical.pdf`. Parsing normalizes the text and then searches it
//! for `B<digits>L<digits>M<digits>`, where the building part is optional.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Building code assumed when an identifier names only level and module.
pub const DEFAULT_BUILDING: &str = "1";

// ASCII digits only; `\d` would also accept other scripts' digits
static BLM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:B([0-9]+))?L([0-9]+)M([0-9]+)").unwrap());

static CORE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"L[0-9]+M[0-9]+").unwrap());

/// A parsed identifier. `raw` is always the normalized text, so parsing
/// `raw` again yields the same value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlmId {
    pub building: String,
    pub level: u32,
    pub module: u32,
    pub raw: String,
}

impl BlmId {
    /// The "no identifier found" value. Not an error.
    pub fn unmatched(raw: impl Into<String>) -> Self {
        Self {
            building: String::new(),
            level: 0,
            module: 0,
            raw: raw.into(),
        }
    }

    pub fn is_matched(&self) -> bool {
        !self.building.is_empty()
    }
}

impl fmt::Display for BlmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_matched() {
            write!(f, "B{}L{}M{:02}", self.building, self.level, self.module)
        } else {
            write!(f, "(unmatched)")
        }
    }
}

/// Uppercase and strip underscores, hyphens and whitespace.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Parse a raw identifier. Never fails; see [`BlmId::unmatched`].
pub fn parse(raw: Option<&str>) -> BlmId {
    let normalized = raw.map(normalize).unwrap_or_default();
    parse_normalized(normalized)
}

fn parse_normalized(normalized: String) -> BlmId {
    // Digit runs that overflow u32 cannot be real grid positions, so such a
    // candidate is skipped in favor of a later one
    let found = BLM_PATTERN.captures_iter(&normalized).find_map(|caps| {
        let level = caps[2].parse::<u32>().ok()?;
        let module = caps[3].parse::<u32>().ok()?;
        let building = caps
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| DEFAULT_BUILDING.to_string());
        Some((building, level, module))
    });

    match found {
        Some((building, level, module)) => BlmId {
            building,
            level,
            module,
            raw: normalized,
        },
        None => {
            log::debug!("no usable BLM identifier in {normalized:?}");
            BlmId::unmatched(normalized)
        }
    }
}

/// First `L<digits>M<digits>` run in an already-normalized identifier.
pub fn core_pattern(normalized: &str) -> Option<&str> {
    CORE_PATTERN.find(normalized).map(|m| m.as_str())
}
