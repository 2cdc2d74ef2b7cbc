use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Runs a script of filesystem commands against a fresh in-memory tree.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// YAML script to run. Runs the built-in demo when omitted
    pub script: Option<PathBuf>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Stop at the first failing step instead of reporting it and moving on
    #[clap(long)]
    pub fail_fast: bool,
}
