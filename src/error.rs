use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which side of the read-modify-write cycle failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Read,
    Write,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOp::Read => write!(f, "read"),
            FileOp::Write => write!(f, "write"),
        }
    }
}

/// Main error type for drive-patch
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Failed to {op} file {}: {source}", .path.display())]
    FileAccess {
        op: FileOp,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error(
        "Expected {expected} replacement(s) in {} but found {found}",
        .path.display()
    )]
    UnexpectedCount {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("Failed to write confirmation: {source}")]
    Report { source: std::io::Error },
}

impl PatchError {
    /// Create a new file access error for the given operation
    pub fn file_access(op: FileOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            op,
            path: path.into(),
            source,
        }
    }

    /// Create a new config error
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// True for errors caused by the target file being missing or inaccessible
    pub fn is_file_access(&self) -> bool {
        matches!(self, PatchError::FileAccess { .. })
    }
}

/// Result type alias using PatchError
pub type PatchResult<T> = Result<T, PatchError>;

/// Contextual error mapping function
pub fn map_io_err(op: FileOp, path: &Path) -> impl FnOnce(std::io::Error) -> PatchError + '_ {
    move |err| PatchError::file_access(op, path, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_file_access_message_names_path_and_op() {
        let err = PatchError::file_access(
            FileOp::Read,
            "src/skills/drive/index.ts",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("src/skills/drive/index.ts"));
        assert!(err.is_file_access());
    }

    #[test]
    fn test_unexpected_count_message() {
        let err = PatchError::UnexpectedCount {
            path: PathBuf::from("index.ts"),
            expected: 2,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "Expected 2 replacement(s) in index.ts but found 1"
        );
        assert!(!err.is_file_access());
    }
}
