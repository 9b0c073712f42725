//! Error collection for batch conversion.
//!
//! Each source file is converted independently. Instead of stopping at the
//! first bad file, successes and failures are both kept and returned together.

use super::ConvertError;
use std::path::PathBuf;

/// Results from a batch of independent per-file operations.
#[derive(Debug, Clone)]
pub struct BatchResults<T> {
    pub successes: Vec<T>,
    pub failures: Vec<FileFailure>,
}

impl<T> Default for BatchResults<T> {
    fn default() -> Self {
        Self {
            successes: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> BatchResults<T> {
    pub fn new(successes: Vec<T>, failures: Vec<FileFailure>) -> Self {
        Self {
            successes,
            failures,
        }
    }

    pub fn success_count(&self) -> usize {
        self.successes.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn total_count(&self) -> usize {
        self.success_count() + self.failure_count()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A file that contributed nothing to the combined output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub operation: OperationType,
    pub error: String, // String for Clone, preserves error message
}

impl FileFailure {
    pub fn new(path: PathBuf, operation: OperationType, error: impl std::fmt::Display) -> Self {
        Self {
            path,
            operation,
            error: error.to_string(),
        }
    }

    /// The path is carried separately, so only the reason is kept.
    pub fn from_error(path: PathBuf, error: &ConvertError) -> Self {
        Self::new(path, error.operation(), error.reason())
    }
}

impl std::fmt::Display for FileFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error processing {}: {}", self.path.display(), self.error)
    }
}

/// Type of operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    DirectoryAccess,
    FileRead,
    FileDecode,
    OutputWrite,
}

impl OperationType {
    pub const ALL: [OperationType; 4] = [
        Self::DirectoryAccess,
        Self::FileRead,
        Self::FileDecode,
        Self::OutputWrite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DirectoryAccess => "Directory access",
            Self::FileRead => "File read",
            Self::FileDecode => "File decode",
            Self::OutputWrite => "Output write",
        }
    }
}
