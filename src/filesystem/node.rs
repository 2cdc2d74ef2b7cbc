use derive_more::{Display, IsVariant};
use hashlink::LinkedHashMap;
use snafu::prelude::*;

use crate::filesystem::error::{FsError, IsADirectorySnafu, NotADirectorySnafu, NotFoundSnafu};

pub const ROOT_NAME: &str = "/";

/// Kind flag passed to `create` and reported by listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NodeKind {
    #[display("file")]
    File,
    #[display("directory")]
    Directory,
}

/// A file or directory record, owned by exactly one parent directory (or by the tree,
/// for the root).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    data: NodeData,
}

#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum NodeData {
    /// `size` is the byte length of all chunks in `content`.
    File { size: u64, content: Vec<String> },
    /// Children keep their insertion order.
    Directory {
        children: LinkedHashMap<String, Node>,
    },
}

impl Node {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        let data = match kind {
            NodeKind::File => NodeData::File {
                size: 0,
                content: Vec::new(),
            },
            NodeKind::Directory => NodeData::Directory {
                children: LinkedHashMap::new(),
            },
        };
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn root() -> Self {
        Self::new(ROOT_NAME, NodeKind::Directory)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::File { .. } => NodeKind::File,
            NodeData::Directory { .. } => NodeKind::Directory,
        }
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }

    pub fn is_directory(&self) -> bool {
        self.data.is_directory()
    }

    /// Byte length of the stored content; always 0 for directories.
    pub fn size(&self) -> u64 {
        match self.data {
            NodeData::File { size, .. } => size,
            NodeData::Directory { .. } => 0,
        }
    }

    pub fn children(&self) -> Result<&LinkedHashMap<String, Node>, FsError> {
        match &self.data {
            NodeData::Directory { children } => Ok(children),
            NodeData::File { .. } => NotADirectorySnafu { name: &self.name }.fail(),
        }
    }

    pub fn children_mut(&mut self) -> Result<&mut LinkedHashMap<String, Node>, FsError> {
        match &mut self.data {
            NodeData::Directory { children } => Ok(children),
            NodeData::File { .. } => NotADirectorySnafu { name: &self.name }.fail(),
        }
    }

    pub fn child(&self, name: &str) -> Result<&Node, FsError> {
        self.children()?.get(name).context(NotFoundSnafu { name })
    }

    pub fn child_mut(&mut self, name: &str) -> Result<&mut Node, FsError> {
        self.children_mut()?
            .get_mut(name)
            .context(NotFoundSnafu { name })
    }

    /// Appends one chunk of content to a file.
    pub fn append(&mut self, chunk: &str) -> Result<(), FsError> {
        match &mut self.data {
            NodeData::File { size, content } => {
                *size += chunk.len() as u64;
                content.push(chunk.to_string());
                Ok(())
            }
            NodeData::Directory { .. } => IsADirectorySnafu { name: &self.name }.fail(),
        }
    }

    /// Concatenates every chunk in append order.
    pub fn read(&self) -> Result<String, FsError> {
        match &self.data {
            NodeData::File { content, .. } => Ok(content.concat()),
            NodeData::Directory { .. } => IsADirectorySnafu { name: &self.name }.fail(),
        }
    }
}
