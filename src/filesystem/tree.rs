use snafu::prelude::*;
use tracing::{debug, error, trace};

use crate::filesystem::error::{
    AlreadyExistsSnafu, DirectoryNotEmptySnafu, FsError, InvalidOperationSnafu,
    NotADirectorySnafu, NotFoundSnafu,
};
use crate::filesystem::node::{Node, NodeKind, ROOT_NAME};
use crate::filesystem::path::Segments;

/// A single in-memory filesystem session: the tree itself plus the current directory.
///
/// Every path is resolved from the root. The current directory is kept as the list of
/// segments leading to it, which is all `..` needs to step back up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystem {
    root: Node,
    current: Segments,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub name: String,
    pub kind: NodeKind,
    pub size: u64,
    pub children: usize,
}

/// What `change_dir` did to the current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeDir {
    /// `..` was requested while already at the root.
    AlreadyAtRoot,
    /// `.` was requested; `name` is the current directory's name.
    Stayed { name: String },
    Changed { path: String },
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem {
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            current: Segments::root(),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn current_dir(&self) -> &Segments {
        &self.current
    }

    pub fn current_dir_path(&self) -> String {
        self.current.to_path_string()
    }

    pub fn current_dir_name(&self) -> &str {
        self.current.last().map_or(ROOT_NAME, String::as_str)
    }

    /// Creates an empty file or directory at `path`. The parent must already exist.
    pub fn create(&mut self, path: &str, kind: NodeKind) -> Result<(), FsError> {
        let (parent, name) = Self::split_target(path, "create")?;
        let siblings = self.resolve_mut(&parent)?.children_mut()?;
        ensure!(!siblings.contains_key(&name), AlreadyExistsSnafu { name: &name });

        siblings.insert(name.clone(), Node::new(name.as_str(), kind));
        debug!("Created {} '{}' in '{}'", kind, name, parent);
        Ok(())
    }

    /// Child names of the directory at `path`, in insertion order.
    pub fn list_dir(&self, path: &str) -> Result<Vec<String>, FsError> {
        let names = self
            .resolve(&Segments::parse(path))?
            .children()?
            .keys()
            .cloned()
            .collect();
        Ok(names)
    }

    /// Same listing as `list_dir`, with the kind of every child.
    pub fn read_dir(&self, path: &str) -> Result<Vec<DirEntry>, FsError> {
        let entries = self
            .resolve(&Segments::parse(path))?
            .children()?
            .values()
            .map(|child| DirEntry {
                name: child.name().to_string(),
                kind: child.kind(),
            })
            .collect();
        Ok(entries)
    }

    pub fn change_dir(&mut self, path: &str) -> Result<ChangeDir, FsError> {
        match path {
            ".." => {
                if self.current.pop().is_none() {
                    debug!("Already at the root directory");
                    return Ok(ChangeDir::AlreadyAtRoot);
                }
            }
            "." => {
                return Ok(ChangeDir::Stayed {
                    name: self.current_dir_name().to_string(),
                });
            }
            _ => {
                let segments = Segments::parse(path);
                let target = self.resolve(&segments)?;
                ensure!(
                    target.is_directory(),
                    NotADirectorySnafu {
                        name: target.name()
                    }
                );
                self.current = segments;
            }
        }

        debug!("Current directory is now '{}'", self.current);
        Ok(ChangeDir::Changed {
            path: self.current_dir_path(),
        })
    }

    /// Moves the node at `src` under the existing directory `dest`, keeping its name.
    pub fn move_node(&mut self, src: &str, dest: &str) -> Result<(), FsError> {
        let (src_parent, name) = Self::split_target(src, "move")?;
        let dest = Segments::parse(dest);

        self.resolve(&src_parent)?.child(&name)?;
        let target = self.resolve(&dest)?.children()?;

        let mut moved_path = src_parent.clone();
        moved_path.push(name.as_str());
        ensure!(
            !dest.starts_with(&moved_path),
            InvalidOperationSnafu {
                reason: format!("cannot move '{}' into itself", moved_path),
            }
        );
        ensure!(
            !target.contains_key(&name),
            AlreadyExistsSnafu { name: &name }
        );

        let node = self.detach(&src_parent, &name)?;
        if let Err((source, node)) = self.attach(&dest, node) {
            if self.attach(&src_parent, node).is_err() {
                error!("Lost '{}' while rolling back a failed move", moved_path);
            }
            return Err(source);
        }

        let mut new_path = dest.clone();
        new_path.push(name.as_str());
        if self.current.rebase(&moved_path, &new_path) {
            trace!("Current directory followed the move to '{}'", self.current);
        }

        debug!("Moved '{}' to '{}'", moved_path, dest);
        Ok(())
    }

    /// Appends `data` to the file at `path`.
    pub fn write(&mut self, path: &str, data: &str) -> Result<(), FsError> {
        self.resolve_mut(&Segments::parse(path))?.append(data)?;
        debug!("Wrote {} bytes to '{}'", data.len(), path);
        Ok(())
    }

    pub fn read(&self, path: &str) -> Result<String, FsError> {
        self.resolve(&Segments::parse(path))?.read()
    }

    /// Removes a file or an empty directory.
    pub fn delete(&mut self, path: &str) -> Result<(), FsError> {
        let (parent, name) = Self::split_target(path, "delete")?;
        let siblings = self.resolve_mut(&parent)?.children_mut()?;
        let node = siblings.get(&name).context(NotFoundSnafu { name: &name })?;
        ensure!(
            !node.is_directory() || node.children()?.is_empty(),
            DirectoryNotEmptySnafu { name: &name }
        );

        siblings.remove(&name);

        let mut removed = parent.clone();
        removed.push(name.as_str());
        if self.current.starts_with(&removed) {
            self.current = parent;
        }

        debug!("Deleted '{}'", removed);
        Ok(())
    }

    pub fn stat(&self, path: &str) -> Result<Metadata, FsError> {
        let node = self.resolve(&Segments::parse(path))?;
        Ok(Metadata {
            name: node.name().to_string(),
            kind: node.kind(),
            size: node.size(),
            children: node.children().map_or(0, |children| children.len()),
        })
    }

    /// Splits `path` into its parent segments and final name, refusing the root.
    fn split_target(path: &str, operation: &str) -> Result<(Segments, String), FsError> {
        Segments::parse(path)
            .into_parent_and_name()
            .context(InvalidOperationSnafu {
                reason: format!("cannot {} the root directory", operation),
            })
    }

    fn resolve(&self, segments: &[String]) -> Result<&Node, FsError> {
        segments
            .iter()
            .try_fold(&self.root, |node, segment| node.child(segment))
    }

    fn resolve_mut(&mut self, segments: &[String]) -> Result<&mut Node, FsError> {
        let mut node = &mut self.root;
        for segment in segments {
            node = node.child_mut(segment)?;
        }
        Ok(node)
    }

    fn detach(&mut self, parent: &[String], name: &str) -> Result<Node, FsError> {
        let siblings = self.resolve_mut(parent)?.children_mut()?;
        siblings.remove(name).context(NotFoundSnafu { name })
    }

    /// Inserts `node` under `parent`. On failure the node is handed back so the caller
    /// can put it somewhere else.
    fn attach(&mut self, parent: &[String], node: Node) -> Result<(), (FsError, Node)> {
        let siblings = match self.resolve_mut(parent).and_then(Node::children_mut) {
            Ok(siblings) => siblings,
            Err(source) => return Err((source, node)),
        };
        if siblings.contains_key(node.name()) {
            let source = AlreadyExistsSnafu { name: node.name() }.build();
            return Err((source, node));
        }
        siblings.insert(node.name().to_string(), node);
        Ok(())
    }
}
