use std::borrow::Cow;
use std::path::Path;

use compio::fs;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

use crate::script::command::{Command, CommandError};

/// Run when no script is given on the command line.
const DEMO_SCRIPT: &str = r#"
steps:
  - mkdir: /dir1
  - touch: /dir1/file1.txt
  - ls: /dir1
  - write: { path: /dir1/file1.txt, data: "Hello, World!" }
  - cat: /dir1/file1.txt
  - mkdir: /dir2
  - mv: { from: /dir1/file1.txt, to: /dir2 }
  - rm: /dir1
  - ls: /dir2
  - mkdir: /dir2/dir3
  - cd: /dir2/dir3
  - ls: /dir2/dir3
  - cd: /dir2
  - ls: /dir2
"#;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub async fn read(path: &Path) -> Result<Self, ScriptError> {
        debug!("Reading script file: {}", path.display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.display().to_string(),
        })?;
        debug!("Successfully read script file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.display().to_string(),
        })?;
        contents.as_str().try_into()
    }

    pub fn demo() -> Result<Self, ScriptError> {
        DEMO_SCRIPT.try_into()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn parse_steps(steps: &Yaml) -> Result<Vec<Command>, ScriptError> {
        steps
            .as_sequence()
            .ok_or(ScriptError::StepsNotSequence)?
            .iter()
            .enumerate()
            .map(|(index, step)| {
                Command::from_step_yaml(step).context(InvalidStepSnafu { index: index + 1 })
            })
            .collect()
    }
}

impl TryFrom<&str> for Script {
    type Error = ScriptError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().context(MalformedScriptSnafu)?;

        let top_level = document
            .as_mapping()
            .ok_or(ScriptError::TopLevelNotMap)?;

        let Some(steps) = top_level.get(&Yaml::Value(Scalar::String(Cow::Borrowed("steps"))))
        else {
            debug!("Script has no 'steps' section");
            return Ok(Script::default());
        };

        let commands = Self::parse_steps(steps)?;
        debug!("Parsed {} script steps", commands.len());
        Ok(Script { commands })
    }
}

#[derive(Debug, Snafu)]
pub enum ScriptError {
    #[snafu(display("Failed to read the script file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Script file is not valid UTF-8: {}", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the script"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted script"))]
    MalformedScript,
    #[snafu(display("Top level of the script should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Steps section should be a list"))]
    StepsNotSequence,
    #[snafu(display("Step {} is invalid", index))]
    InvalidStep { index: usize, source: CommandError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[compio::test]
    async fn script_returns_error_on_nonexistent_file() {
        let result = Script::read(Path::new("nonexistent.yaml")).await;
        assert!(matches!(result, Err(ScriptError::ReadError { .. })));
    }

    #[compio::test]
    async fn script_reads_steps_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "steps:\n  - mkdir: /docs\n  - pwd\n").expect("Failed to write script");

        let script = Script::read(file.path()).await.expect("Failed to read script");

        assert_eq!(
            script.commands(),
            &[
                Command::MakeDir {
                    path: "/docs".to_string()
                },
                Command::PrintWorkingDir,
            ]
        );
    }

    #[compio::test]
    async fn script_rejects_non_utf8_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(&[0xff, 0xfe, 0x00]).expect("Failed to write bytes");

        let result = Script::read(file.path()).await;

        assert!(matches!(result, Err(ScriptError::EncodingError { .. })));
    }

    #[test]
    fn script_returns_error_on_invalid_yaml() {
        let result: Result<Script, _> = "steps: [unclosed".try_into();
        assert!(matches!(result, Err(ScriptError::ParseError { .. })));
    }

    #[test]
    fn script_returns_error_on_empty_file() {
        let result: Result<Script, _> = "".try_into();
        assert!(matches!(result, Err(ScriptError::MalformedScript)));
    }

    #[test]
    fn script_returns_error_when_top_level_is_not_map() {
        let result: Result<Script, _> = "- mkdir: /a\n- pwd".try_into();
        assert!(matches!(result, Err(ScriptError::TopLevelNotMap)));
    }

    #[test]
    fn script_returns_error_when_steps_is_not_list() {
        let result: Result<Script, _> = "steps:\n  mkdir: /a".try_into();
        assert!(matches!(result, Err(ScriptError::StepsNotSequence)));
    }

    #[test]
    fn script_without_steps_is_empty() {
        let result: Result<Script, _> = "other: value".try_into();
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn script_reports_position_of_invalid_step() {
        let result: Result<Script, _> = "steps:\n  - pwd\n  - explode: /\n".try_into();
        assert!(matches!(
            result,
            Err(ScriptError::InvalidStep {
                index: 2,
                source: CommandError::UnknownCommand { .. }
            })
        ));
    }

    #[test]
    fn demo_script_parses() {
        let script = Script::demo().expect("Demo script should parse");

        assert_eq!(script.len(), 14);
        assert_eq!(
            script.commands()[3],
            Command::Write {
                path: "/dir1/file1.txt".to_string(),
                data: "Hello, World!".to_string()
            }
        );
    }
}
