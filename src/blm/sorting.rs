use super::matcher::MatchKeys;
use super::parser::{parse, BlmId};
use crate::core::Module;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Module number, then level, then building (production order)
    #[default]
    Module,
    /// Level, then module number, then building
    Level,
    /// Building, then level, then module number
    Building,
    /// Build sequence; modules without one go last
    Sequence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Module => "module",
            Self::Level => "level",
            Self::Building => "building",
            Self::Sequence => "sequence",
        };
        f.write_str(name)
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// Identifier a module sorts by, chosen the same way as for drawing matching.
pub fn sort_identifier(module: &Module) -> BlmId {
    parse(Some(MatchKeys::for_module(module).primary.as_str()))
}

// Pure function: compare two parsed identifiers under a key
fn compare_ids(a: &BlmId, b: &BlmId, key: SortKey) -> Ordering {
    match key {
        SortKey::Module => a
            .module
            .cmp(&b.module)
            .then(a.level.cmp(&b.level))
            .then_with(|| a.building.cmp(&b.building)),
        SortKey::Level => a
            .level
            .cmp(&b.level)
            .then(a.module.cmp(&b.module))
            .then_with(|| a.building.cmp(&b.building)),
        SortKey::Building => a
            .building
            .cmp(&b.building)
            .then(a.level.cmp(&b.level))
            .then(a.module.cmp(&b.module)),
        SortKey::Sequence => Ordering::Equal,
    }
}

/// Order modules by `key`. `Desc` flips every comparison; it does not
/// change which field leads.
///
/// Ties keep input order because `sort_by` is stable, but callers should not
/// rely on that.
pub fn sort_modules(modules: &[Module], key: SortKey, direction: SortDirection) -> Vec<&Module> {
    let mut keyed: Vec<(BlmId, &Module)> = modules
        .iter()
        .map(|module| (sort_identifier(module), module))
        .collect();

    keyed.sort_by(|(id_a, a), (id_b, b)| {
        let ordering = match key {
            SortKey::Sequence => a.sequence_or_default().cmp(&b.sequence_or_default()),
            _ => compare_ids(id_a, id_b, key),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    keyed.into_iter().map(|(_, module)| module).collect()
}
