use anyhow::Result;
use clap::Parser;
use moda::cli::{Cli, Commands};
use moda::commands::{
    drawings::{handle_drawings, DrawingsConfig},
    heatmap::{handle_heatmap, HeatmapConfig},
    init::init_config,
    parse::handle_parse,
    sort::{handle_sort, SortConfig},
};

// Pure function: map -v count to a default log filter
fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

// RUST_LOG, when set, overrides the -v default
fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = moda::config::load_config();
    let plain = cli.plain || config.use_color() == Some(false);
    if plain {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Parse { ids, output } => handle_parse(&ids, &output, &config),
        Commands::Drawings {
            modules,
            drawings,
            missing_only,
            output,
        } => handle_drawings(
            DrawingsConfig {
                modules,
                drawings,
                missing_only,
                output,
            },
            &config,
        ),
        Commands::Sort {
            modules,
            key,
            direction,
            output,
        } => handle_sort(
            SortConfig {
                modules,
                key,
                direction,
                output,
            },
            &config,
        ),
        Commands::Heatmap {
            modules,
            difficulty,
            schedule,
            output,
        } => handle_heatmap(
            HeatmapConfig {
                modules,
                difficulty,
                schedule,
                output,
            },
            &config,
        ),
        Commands::Init { force } => init_config(force),
    }
}
