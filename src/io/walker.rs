use crate::errors::ConvertError;
use std::path::{Path, PathBuf};

/// Non-recursive listing of `dir` for files ending in `.extension`.
///
/// Entries are returned in the order `glob` yields them. Callers must not
/// depend on any particular ordering across files. Dotfiles are skipped.
///
/// A root that is not valid UTF-8 cannot be spelled as a glob pattern, so it
/// is read directly and only the file names are matched.
pub struct SourceWalker {
    root: PathBuf,
    extension: String,
}

impl SourceWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: "als".to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn pattern(&self) -> String {
        let root = glob::Pattern::escape(&self.root.to_string_lossy());
        let file = format!("*.{}", glob::Pattern::escape(&self.extension));
        Path::new(&root).join(file).to_string_lossy().into_owned()
    }

    fn options() -> glob::MatchOptions {
        glob::MatchOptions {
            require_literal_leading_dot: true,
            ..glob::MatchOptions::new()
        }
    }

    pub fn walk(&self) -> Result<Vec<Result<PathBuf, ConvertError>>, ConvertError> {
        if self.root.to_str().is_none() {
            return self.walk_entries();
        }

        let paths = glob::glob_with(&self.pattern(), Self::options())
            .map_err(|e| ConvertError::listing(&self.root, e.to_string()))?;

        Ok(paths
            .map(|entry| match entry {
                Ok(path) => Ok(path),
                Err(e) => Err(ConvertError::listing(e.path(), e.error().to_string())),
            })
            .filter(|entry| match entry {
                Ok(path) => path.is_file(),
                Err(_) => true,
            })
            .collect())
    }

    fn walk_entries(&self) -> Result<Vec<Result<PathBuf, ConvertError>>, ConvertError> {
        let file_pattern = format!("*.{}", glob::Pattern::escape(&self.extension));
        let file_pattern = glob::Pattern::new(&file_pattern)
            .map_err(|e| ConvertError::listing(&self.root, e.to_string()))?;
        let entries = std::fs::read_dir(&self.root)
            .map_err(|e| ConvertError::listing(&self.root, e.to_string()))?;

        let mut found: Vec<_> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => {
                    let path = entry.path();
                    let name = Path::new(path.file_name()?);
                    (file_pattern.matches_path_with(name, Self::options()) && path.is_file())
                        .then_some(Ok(path))
                }
                Err(e) => Some(Err(ConvertError::listing(&self.root, e.to_string()))),
            })
            .collect();
        found.sort_by(|a, b| a.as_ref().ok().cmp(&b.as_ref().ok()));
        Ok(found)
    }
}

pub fn find_source_files(
    root: &Path,
    extension: &str,
) -> Result<Vec<Result<PathBuf, ConvertError>>, ConvertError> {
    SourceWalker::new(root.to_path_buf())
        .with_extension(extension)
        .walk()
}
