//! Run configuration.
//!
//! The converter reads no configuration files and no environment variables.
//! A [`CombineConfig`] is built from command-line arguments, falling back to
//! the fixed defaults below.

use std::path::{Path, PathBuf};

/// Extension of Alloy source files, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "als";

/// Name of the combined diagram written into the input directory.
pub const DEFAULT_OUTPUT_NAME: &str = "combined.puml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineConfig {
    pub directory: PathBuf,
    pub extension: String,
    pub output_name: String,
}

impl CombineConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            extension: default_extension(),
            output_name: default_output_name(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = normalize_extension(&extension.into());
        self
    }

    pub fn with_output_name(mut self, output_name: impl Into<String>) -> Self {
        self.output_name = output_name.into();
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.directory.join(&self.output_name)
    }

    /// Whether `path` is this run's own output file.
    pub fn is_output(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name == self.output_name.as_str())
            .unwrap_or(false)
    }
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_output_name() -> String {
    DEFAULT_OUTPUT_NAME.to_string()
}

// Pure function: accept `als` and `.als` alike
fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_string()
}
