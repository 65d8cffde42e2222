//! Shop-drawing lookup for modules.
//!
//! A drawing belongs to a module when its normalized file name contains the
//! module's normalized identifier, or just the `L<n>M<n>` core of it (drawing
//! names often leave the building code out).

use super::parser::{core_pattern, normalize};
use crate::core::{Drawing, Module};

/// The identifier strings a module is matched and sorted by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchKeys {
    /// Normalized primary identifier, empty when the module has none.
    /// Sorting parses this one.
    pub primary: String,
    /// Normalized rear identifier when it differs from the hitch side
    pub secondary: Option<String>,
    needles: Vec<String>,
}

impl MatchKeys {
    /// Select identifiers for a module.
    ///
    /// Sawboxes use the hitch side only. Other modules use the hitch side
    /// (falling back to the rear side when hitch is blank) plus the rear
    /// side when it names something different.
    pub fn for_module(module: &Module) -> Self {
        let (primary, secondary) = select_identifiers(module);
        let needles = build_needles(&primary, secondary.as_deref());
        Self {
            primary,
            secondary,
            needles,
        }
    }

    /// Search strings in match order: full identifiers, then their cores
    pub fn needles(&self) -> &[String] {
        &self.needles
    }

    fn matches_name(&self, normalized_name: &str) -> bool {
        self.needles
            .iter()
            .any(|needle| normalized_name.contains(needle.as_str()))
    }

    /// First drawing whose pre-normalized name contains a needle.
    pub(crate) fn first_match<'a, N: AsRef<str>>(
        &self,
        candidates: impl IntoIterator<Item = (&'a Drawing, N)>,
    ) -> Option<&'a Drawing> {
        if self.needles.is_empty() {
            return None;
        }
        candidates
            .into_iter()
            .find(|(_, name)| self.matches_name(name.as_ref()))
            .map(|(drawing, _)| drawing)
    }
}

// Pure function: (primary, secondary) normalized identifiers for a module
fn select_identifiers(module: &Module) -> (String, Option<String>) {
    let hitch = normalize(&module.hitch_blm);
    if module.sawbox {
        return (hitch, None);
    }

    let rear = normalize(&module.rear_blm);
    if hitch.is_empty() {
        return (rear, None);
    }

    let distinct = !rear.is_empty() && rear != hitch;
    (hitch, distinct.then_some(rear))
}

// Pure function: non-empty full identifiers followed by their core patterns
fn build_needles(primary: &str, secondary: Option<&str>) -> Vec<String> {
    let full: Vec<&str> = std::iter::once(primary)
        .chain(secondary)
        .filter(|id| !id.is_empty())
        .collect();
    let cores: Vec<&str> = full.iter().filter_map(|&id| core_pattern(id)).collect();
    full.into_iter().chain(cores).map(str::to_string).collect()
}

/// Whether any drawing in `drawings` belongs to `module`.
pub fn has_matching_drawing(module: &Module, drawings: &[Drawing]) -> bool {
    find_matching_drawing(module, drawings).is_some()
}

/// First drawing, in input order, that belongs to `module`.
///
/// When several drawings qualify, array order decides; there is no ranking.
pub fn find_matching_drawing<'a>(module: &Module, drawings: &'a [Drawing]) -> Option<&'a Drawing> {
    let keys = MatchKeys::for_module(module);
    let found = keys.first_match(drawings.iter().map(|d| (d, normalize(&d.name))));

    log::debug!(
        "module {} ({}): {}",
        module.serial_number,
        keys.primary,
        found.map_or("no drawing", |d| d.name.as_str())
    );
    found
}
