use tracing::{debug, warn};

use crate::filesystem::{ChangeDir, DirEntry, FileSystem, FsError, Metadata, NodeKind};
use crate::script::Command;

/// Result of a successfully executed command, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { path: String, kind: NodeKind },
    Listed { path: String, entries: Vec<DirEntry> },
    ChangedDir(ChangeDir),
    Moved { from: String, to: String },
    Written { path: String, bytes: usize },
    Read { path: String, contents: String },
    Removed { path: String },
    Stat { path: String, metadata: Metadata },
    WorkingDir { path: String },
}

/// Runs script commands against one filesystem session.
#[derive(Debug, Default)]
pub struct Shell {
    filesystem: FileSystem,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filesystem(&self) -> &FileSystem {
        &self.filesystem
    }

    pub fn execute(&mut self, command: &Command) -> Result<Outcome, FsError> {
        debug!("Executing '{}'", command);
        let result = self.dispatch(command);
        if let Err(error) = &result {
            warn!("'{}' failed: {}", command, error);
        }
        result
    }

    fn dispatch(&mut self, command: &Command) -> Result<Outcome, FsError> {
        let fs = &mut self.filesystem;
        let outcome = match command {
            Command::MakeDir { path } => {
                fs.create(path, NodeKind::Directory)?;
                Outcome::Created {
                    path: path.clone(),
                    kind: NodeKind::Directory,
                }
            }
            Command::Touch { path } => {
                fs.create(path, NodeKind::File)?;
                Outcome::Created {
                    path: path.clone(),
                    kind: NodeKind::File,
                }
            }
            Command::List { path } => Outcome::Listed {
                path: path.clone(),
                entries: fs.read_dir(path)?,
            },
            Command::ChangeDir { path } => Outcome::ChangedDir(fs.change_dir(path)?),
            Command::Move { from, to } => {
                fs.move_node(from, to)?;
                Outcome::Moved {
                    from: from.clone(),
                    to: to.clone(),
                }
            }
            Command::Write { path, data } => {
                fs.write(path, data)?;
                Outcome::Written {
                    path: path.clone(),
                    bytes: data.len(),
                }
            }
            Command::Read { path } => Outcome::Read {
                path: path.clone(),
                contents: fs.read(path)?,
            },
            Command::Remove { path } => {
                fs.delete(path)?;
                Outcome::Removed { path: path.clone() }
            }
            Command::Stat { path } => Outcome::Stat {
                path: path.clone(),
                metadata: fs.stat(path)?,
            },
            Command::PrintWorkingDir => Outcome::WorkingDir {
                path: fs.current_dir_path(),
            },
        };
        Ok(outcome)
    }
}
