//! Production implementation of [`FileSystem`].
//!
//! ```rust,ignore
//! use alloy2puml::io::{FileSystem, RealFileSystem};
//!
//! let fs = RealFileSystem::new();
//! let content = fs.read_source(Path::new("models/library.als"))?;
//! ```

use crate::errors::ConvertError;
use crate::io::traits::FileSystem;
use crate::io::walker::find_source_files;
use std::fs;
use std::path::{Path, PathBuf};

/// Delegates directly to `std::fs` and the `glob` walker.
#[derive(Debug, Default, Clone)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, ConvertError> {
        fs::read(path).map_err(|e| ConvertError::read(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), ConvertError> {
        fs::write(path, content).map_err(|e| ConvertError::write(path, e))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_sources(
        &self,
        dir: &Path,
        extension: &str,
    ) -> Result<Vec<Result<PathBuf, ConvertError>>, ConvertError> {
        find_source_files(dir, extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_source_reports_decode_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.als");
        fs::write(&path, [0x73, 0x69, 0x67, 0xff, 0xfe]).unwrap();

        let err = RealFileSystem::new().read_source(&path).unwrap_err();
        assert!(matches!(err, ConvertError::Decode { .. }));
    }

    #[test]
    fn test_read_source_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.als");

        let err = RealFileSystem::new().read_source(&path).unwrap_err();
        assert!(matches!(err, ConvertError::Read { .. }));
        assert_eq!(err.path(), Some(path.as_path()));
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.puml");
        let fs = RealFileSystem::new();

        fs.write(&path, "@startuml\n@enduml").unwrap();
        assert_eq!(fs.read_source(&path).unwrap(), "@startuml\n@enduml");
        assert!(fs.is_dir(temp_dir.path()));
        assert!(!fs.is_dir(&path));
    }
}
