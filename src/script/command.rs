use std::borrow::Cow;

use derive_more::Display;
use saphyr::{Scalar, Yaml};
use snafu::Snafu;
use tracing::trace;

/// One step of a script.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Command {
    #[display("mkdir {path}")]
    MakeDir { path: String },
    #[display("touch {path}")]
    Touch { path: String },
    #[display("ls {path}")]
    List { path: String },
    #[display("cd {path}")]
    ChangeDir { path: String },
    #[display("mv {from} {to}")]
    Move { from: String, to: String },
    #[display("write {path}")]
    Write { path: String, data: String },
    #[display("cat {path}")]
    Read { path: String },
    #[display("rm {path}")]
    Remove { path: String },
    #[display("stat {path}")]
    Stat { path: String },
    #[display("pwd")]
    PrintWorkingDir,
}

impl Command {
    /// Parses a step written either as a bare command name (`pwd`) or as a single-key
    /// mapping whose value is a path or a mapping of named arguments.
    pub fn from_step_yaml(step: &Yaml) -> Result<Self, CommandError> {
        if let Some(name) = step.as_str() {
            return Self::without_arguments(name);
        }

        let mapping = step.as_mapping().ok_or(CommandError::NotACommand)?;
        let mut entries = mapping.iter();
        let (Some((key, arguments)), None) = (entries.next(), entries.next()) else {
            return Err(CommandError::NotSingleCommand {
                count: mapping.len(),
            });
        };
        let name = key.as_str().ok_or(CommandError::NotACommand)?;
        trace!("Parsing '{}' step", name);

        let command = match name {
            "mkdir" => Command::MakeDir {
                path: path_argument(name, arguments)?,
            },
            "touch" => Command::Touch {
                path: path_argument(name, arguments)?,
            },
            "ls" => Command::List {
                path: path_argument(name, arguments)?,
            },
            "cd" => Command::ChangeDir {
                path: path_argument(name, arguments)?,
            },
            "cat" => Command::Read {
                path: path_argument(name, arguments)?,
            },
            "rm" => Command::Remove {
                path: path_argument(name, arguments)?,
            },
            "stat" => Command::Stat {
                path: path_argument(name, arguments)?,
            },
            "write" => Command::Write {
                path: named_argument(name, arguments, "path")?,
                data: named_argument(name, arguments, "data")?,
            },
            "mv" => Command::Move {
                from: named_argument(name, arguments, "from")?,
                to: named_argument(name, arguments, "to")?,
            },
            "pwd" => Command::PrintWorkingDir,
            _ => {
                return Err(CommandError::UnknownCommand {
                    name: name.to_string(),
                });
            }
        };
        Ok(command)
    }

    fn without_arguments(name: &str) -> Result<Self, CommandError> {
        match name {
            "pwd" => Ok(Command::PrintWorkingDir),
            "ls" => Ok(Command::List {
                path: "/".to_string(),
            }),
            _ => Err(CommandError::MissingArgument {
                command: name.to_string(),
                argument: "path",
            }),
        }
    }
}

/// Accepts both `cmd: /some/path` and `cmd: { path: /some/path }`.
fn path_argument(command: &str, arguments: &Yaml) -> Result<String, CommandError> {
    match arguments.as_str() {
        Some(path) => Ok(path.to_string()),
        None => named_argument(command, arguments, "path"),
    }
}

fn named_argument(
    command: &str,
    arguments: &Yaml,
    argument: &'static str,
) -> Result<String, CommandError> {
    arguments
        .as_mapping()
        .and_then(|mapping| mapping.get(&Yaml::Value(Scalar::String(Cow::Borrowed(argument)))))
        .and_then(|value| value.as_str())
        .map(str::to_string)
        .ok_or_else(|| CommandError::MissingArgument {
            command: command.to_string(),
            argument,
        })
}

#[derive(Debug, Snafu)]
pub enum CommandError {
    #[snafu(display("Step should be a command name or a single-key map"))]
    NotACommand,
    #[snafu(display("Step should hold exactly one command, found {}", count))]
    NotSingleCommand { count: usize },
    #[snafu(display("Unknown command '{}'", name))]
    UnknownCommand { name: String },
    #[snafu(display("Command '{}' is missing string argument '{}'", command, argument))]
    MissingArgument {
        command: String,
        argument: &'static str,
    },
}
