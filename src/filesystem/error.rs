use snafu::Snafu;

/// Every way a tree operation can be refused.
///
/// All variants are recoverable: the tree is left exactly as it was before the failing
/// call.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum FsError {
    #[snafu(display("'{}' not found", name))]
    NotFound { name: String },
    #[snafu(display("'{}' is not a directory", name))]
    NotADirectory { name: String },
    #[snafu(display("'{}' is a directory", name))]
    IsADirectory { name: String },
    #[snafu(display("'{}' already exists", name))]
    AlreadyExists { name: String },
    #[snafu(display("'{}' is not empty", name))]
    DirectoryNotEmpty { name: String },
    #[snafu(display("Invalid operation: {}", reason))]
    InvalidOperation { reason: String },
}
