use super::emit;
use crate::blm::{sort_identifier, sort_modules, SortDirection, SortKey};
use crate::cli::OutputArgs;
use crate::config::ModaConfig;
use crate::core::Module;
use crate::io::output::{SortedModule, SortedModules};
use crate::io::{load_modules, Report};
use anyhow::Result;
use std::path::PathBuf;

pub struct SortConfig {
    pub modules: PathBuf,
    pub key: Option<SortKey>,
    pub direction: Option<SortDirection>,
    pub output: OutputArgs,
}

pub fn sorted_report(modules: &[Module], key: SortKey, direction: SortDirection) -> SortedModules {
    let ordered = sort_modules(modules, key, direction)
        .into_iter()
        .map(|module| SortedModule::from_module(module, &sort_identifier(module)))
        .collect();

    SortedModules {
        key,
        direction,
        modules: ordered,
    }
}

pub fn handle_sort(config: SortConfig, settings: &ModaConfig) -> Result<()> {
    let modules = load_modules(&config.modules)?;
    let key = config.key.unwrap_or_else(|| settings.sort_key());
    let direction = config.direction.unwrap_or_else(|| settings.sort_direction());
    log::info!("sorting {} modules by {key} {direction}", modules.len());

    let report = sorted_report(&modules, key, direction);
    emit(&Report::Sorted(report), &config.output, settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_report_renders_identifiers() {
        let modules = vec![
            Module::new("late").with_blm("b1-l2-m3", ""),
            Module::new("early").with_blm("L1M1", "").with_sequence(4),
        ];
        let report = sorted_report(&modules, SortKey::Module, SortDirection::Asc);
        assert_eq!(report.modules[0].serial_number, "early");
        assert_eq!(report.modules[0].blm, "B1L1M01");
        assert_eq!(report.modules[0].build_sequence, Some(4));
        assert_eq!(report.modules[1].blm, "B1L2M03");
    }
}
