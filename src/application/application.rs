use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info, warn};

use crate::application::RuntimeConfig;
use crate::application::render;
use crate::filesystem::FsError;
use crate::script::{Script, ScriptError};
use crate::shell::Shell;

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let script = match &app_config.script {
            Some(path) => Script::read(path).await.context(ScriptLoadSnafu)?,
            None => {
                info!("No script given, running the built-in demo");
                Script::demo().context(ScriptLoadSnafu)?
            }
        };
        debug!("Loaded script with {} steps", script.len());

        render::configure_colors();
        let failures = Self::execute(&script, &app_config)?;
        if failures > 0 {
            warn!("{} of {} steps failed", failures, script.len());
        } else {
            info!("All {} steps succeeded", script.len());
        }

        Ok(())
    }

    /// Runs every step, printing outcomes and errors as they happen. Returns the number
    /// of failed steps, or the first failure when `fail_fast` is set.
    fn execute(script: &Script, app_config: &RuntimeConfig) -> Result<usize, ApplicationError> {
        let mut shell = Shell::new();
        let mut failures = 0;

        for (index, command) in script.commands().iter().enumerate() {
            match shell.execute(command) {
                Ok(outcome) => render::print_outcome(&outcome),
                Err(error) => {
                    render::print_error(command, &error);
                    if app_config.fail_fast {
                        return Err(error).context(StepFailedSnafu {
                            step: index + 1,
                            command: command.to_string(),
                        });
                    }
                    failures += 1;
                }
            }
        }

        Ok(failures)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to load the script"))]
    ScriptLoadError { source: ScriptError },
    #[snafu(display("Step {} ('{}') failed", step, command))]
    StepFailed {
        step: usize,
        command: String,
        source: FsError,
    },
}
