//! In-memory filesystem tree.
//!
//! Nodes are either directories (owning their children in an insertion-ordered map) or
//! files (holding appended chunks of text). `FileSystem` owns the root and the current
//! directory of one session.

mod error;
mod node;
mod path;
mod tree;

pub use error::FsError;
pub use node::{Node, NodeData, NodeKind, ROOT_NAME};
pub use path::Segments;
pub use tree::{ChangeDir, DirEntry, FileSystem, Metadata};
