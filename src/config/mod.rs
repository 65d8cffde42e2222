//! `.moda.toml` configuration.
//!
//! The file is looked up in the current directory and up to nine of its
//! ancestors. A missing file means defaults; a broken one is reported and
//! ignored. Command-line flags always win over file values.

mod core;
mod loader;

pub use self::core::{ModaConfig, OutputConfig, SortingConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_config, CONFIG_FILE_NAME,
};

/// Contents written by `moda init`
pub const DEFAULT_CONFIG: &str = r#"# moda configuration

[sorting]
# module | level | building | sequence
key = "module"
# asc | desc
direction = "asc"

[output]
# terminal | json | markdown
default_format = "terminal"
"#;
