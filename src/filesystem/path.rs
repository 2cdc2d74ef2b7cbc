use std::fmt;

use derive_more::{Deref, From};

/// Ordered names obtained by splitting a path on `/`.
///
/// Empty segments produced by leading, trailing or repeated separators are dropped, so
/// `"/a//b/"` and `"a/b"` both yield `["a", "b"]`. No other normalization happens: `.`
/// and `..` are kept as ordinary names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deref, From)]
pub struct Segments(Vec<String>);

impl Segments {
    pub fn parse(path: &str) -> Self {
        Self(
            path.split('/')
                .filter(|segment| !segment.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    /// Splits off the final segment, leaving the segments of its parent directory.
    /// Returns `None` for the root, which has no name of its own.
    pub fn into_parent_and_name(mut self) -> Option<(Segments, String)> {
        let name = self.0.pop()?;
        Some((self, name))
    }

    pub fn starts_with(&self, prefix: &[String]) -> bool {
        self.0.starts_with(prefix)
    }

    /// Replaces the leading `from` segments with `to`, if `from` is a prefix.
    pub fn rebase(&mut self, from: &[String], to: &[String]) -> bool {
        if !self.starts_with(from) {
            return false;
        }
        let rest = self.0.split_off(from.len());
        self.0 = to.iter().cloned().chain(rest).collect();
        true
    }

    pub fn to_path_string(&self) -> String {
        format!("/{}", self.0.join("/"))
    }
}

impl From<&str> for Segments {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl fmt::Display for Segments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_string())
    }
}
