//! I/O trait definitions for conversion runs.
//!
//! The batch driver only touches the file system through [`FileSystem`], so
//! the accumulation logic can be exercised against an in-memory
//! implementation in tests.

use crate::errors::ConvertError;
use std::path::{Path, PathBuf};

/// File system operations needed by a conversion run.
pub trait FileSystem {
    /// Read a file's contents as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::Read` if the file doesn't exist or permission
    /// is denied.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, ConvertError>;

    /// Write content to a file, creating or truncating it.
    fn write(&self, path: &Path, content: &str) -> Result<(), ConvertError>;

    fn is_dir(&self, path: &Path) -> bool;

    /// Files directly inside `dir` with the given extension.
    ///
    /// The outer error fails the whole listing. An inner error means one
    /// entry could not be inspected and is reported on its own.
    fn list_sources(
        &self,
        dir: &Path,
        extension: &str,
    ) -> Result<Vec<Result<PathBuf, ConvertError>>, ConvertError>;

    /// Read a file and decode it as UTF-8.
    ///
    /// Read and decode failures are kept apart so callers can report which
    /// one happened.
    fn read_source(&self, path: &Path) -> Result<String, ConvertError> {
        let bytes = self.read_bytes(path)?;
        String::from_utf8(bytes).map_err(|e| ConvertError::decode(path, e))
    }
}
