use clap::Parser;

use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "todos.toml";

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
pub struct CliConfig {
    /// Optional TOML file with `todo_file` and `cors_origins`.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,
}
