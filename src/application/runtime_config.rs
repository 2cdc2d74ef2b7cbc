use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Script to run; the built-in demo when absent.
    pub script: Option<PathBuf>,
    pub fail_fast: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            script: cli.script,
            fail_fast: cli.fail_fast,
        }
    }
}
