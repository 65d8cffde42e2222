use crate::blm::{SortDirection, SortKey};
use crate::io::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moda")]
#[command(about = "Modular building production tracking: shop drawings and station difficulty", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long = "plain", global = true, env = "MODA_PLAIN")]
    pub plain: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format (defaults to the config file, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse building/level/module identifiers
    Parse {
        /// Identifiers such as B2-L3-M07 or L5M12
        #[arg(required = true)]
        ids: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Report which modules have a matching shop drawing
    Drawings {
        /// JSON array of modules
        #[arg(long)]
        modules: PathBuf,

        /// JSON array of drawing files
        #[arg(long)]
        drawings: PathBuf,

        /// Only list modules without a drawing
        #[arg(long = "missing-only")]
        missing_only: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print modules in production order
    Sort {
        /// JSON array of modules
        #[arg(long)]
        modules: PathBuf,

        /// Sort key (defaults to the config file, then module)
        #[arg(long = "by", value_enum)]
        key: Option<SortKey>,

        /// Sort direction (defaults to the config file, then asc)
        #[arg(long, value_enum)]
        direction: Option<SortDirection>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Project the week's schedule and score station difficulty per day
    Heatmap {
        /// JSON array of modules
        #[arg(long)]
        modules: PathBuf,

        /// JSON with difficulty indicators and per-project heat-map entries
        #[arg(long)]
        difficulty: PathBuf,

        /// JSON with stations and the weekly schedule
        #[arg(long)]
        schedule: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write a default .moda.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}
