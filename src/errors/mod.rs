//! Error types for conversion runs.
//!
//! Only the batch driver in [`crate::commands::combine`] catches errors. The
//! extractor and renderer cannot fail: text without matches is a valid input.
//!
//! # Categories
//!
//! - `InvalidDirectory`: aborts the run before any file is read
//! - `Read`, `Decode`: isolated to one source file, the batch continues
//! - `Listing`: one directory entry could not be inspected, the batch continues
//! - `Write`: the combined output could not be persisted

pub mod collection;
pub mod reporting;

pub use collection::{BatchResults, FileFailure, OperationType};

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{} is not a valid directory", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("cannot list {}: {message}", path.display())]
    Listing { path: PathBuf, message: String },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn decode(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    pub fn listing(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Listing {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// What went wrong, without the path, including the underlying cause.
    pub fn reason(&self) -> String {
        match self {
            Self::InvalidDirectory(_) => "not a valid directory".to_string(),
            Self::Read { source, .. } => format!("cannot read file: {source}"),
            Self::Decode { source, .. } => format!("not valid UTF-8: {source}"),
            Self::Listing { message, .. } => format!("cannot list: {message}"),
            Self::Write { source, .. } => format!("cannot write file: {source}"),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::InvalidDirectory(path) => Some(path.as_path()),
            Self::Read { path, .. }
            | Self::Decode { path, .. }
            | Self::Listing { path, .. }
            | Self::Write { path, .. } => Some(path.as_path()),
        }
    }

    pub fn operation(&self) -> OperationType {
        match self {
            Self::Read { .. } => OperationType::FileRead,
            Self::Decode { .. } => OperationType::FileDecode,
            Self::Listing { .. } | Self::InvalidDirectory(_) => OperationType::DirectoryAccess,
            Self::Write { .. } => OperationType::OutputWrite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_directory_message() {
        let err = ConvertError::InvalidDirectory(PathBuf::from("/no/such/dir"));
        assert_eq!(err.to_string(), "/no/such/dir is not a valid directory");
        assert_eq!(err.operation(), OperationType::DirectoryAccess);
    }

    #[test]
    fn test_read_error_message_and_operation() {
        let err = ConvertError::read(
            "model.als",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.operation(), OperationType::FileRead);
        assert_eq!(err.to_string(), "failed to read model.als");
        assert_eq!(err.reason(), "cannot read file: denied");
    }

    #[test]
    fn test_decode_error_keeps_path() {
        let source = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = ConvertError::decode("bad.als", source);
        assert_eq!(err.path(), Some(Path::new("bad.als")));
        assert_eq!(err.to_string(), "bad.als is not valid UTF-8");
        assert!(err.reason().starts_with("not valid UTF-8: "));
        assert!(!err.reason().contains("bad.als"));
    }

    #[test]
    fn test_cause_appears_once_in_error_chain() {
        let err = ConvertError::write(
            "combined.puml",
            std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        );
        assert_eq!(err.operation(), OperationType::OutputWrite);
        assert!(!err.to_string().contains("disk full"));
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("disk full"));

        let chained = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chained.matches("disk full").count(), 1);
    }
}
