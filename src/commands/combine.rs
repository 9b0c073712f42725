use crate::config::CombineConfig;
use crate::errors::{BatchResults, ConvertError, FileFailure};
use crate::io::FileSystem;
use crate::render::Converter;
use std::path::{Path, PathBuf};

/// Outcome of a combine run.
#[derive(Debug, Clone)]
pub struct CombineReport {
    pub output_path: PathBuf,
    /// Successfully converted source files, in processing order.
    pub results: BatchResults<PathBuf>,
}

impl CombineReport {
    pub fn converted_count(&self) -> usize {
        self.results.success_count()
    }

    pub fn failures(&self) -> &[FileFailure] {
        &self.results.failures
    }
}

pub fn validate_directory<F: FileSystem>(fs: &F, directory: &Path) -> Result<(), ConvertError> {
    if fs.is_dir(directory) {
        Ok(())
    } else {
        Err(ConvertError::InvalidDirectory(directory.to_path_buf()))
    }
}

/// A combined diagram that has been assembled but not yet persisted.
#[derive(Debug, Clone)]
pub struct PreparedDiagram {
    pub output_path: PathBuf,
    pub contents: String,
    pub results: BatchResults<PathBuf>,
}

impl PreparedDiagram {
    pub fn failures(&self) -> &[FileFailure] {
        &self.results.failures
    }

    pub fn write<F: FileSystem>(self, fs: &F) -> Result<CombineReport, ConvertError> {
        fs.write(&self.output_path, &self.contents)?;
        log::info!(
            "wrote {} ({} converted, {} failed)",
            self.output_path.display(),
            self.results.success_count(),
            self.results.failure_count()
        );

        Ok(CombineReport {
            output_path: self.output_path,
            results: self.results,
        })
    }
}

/// Convert every source file in the configured directory into one diagram.
///
/// Each file's own markers are stripped and a blank line follows its body.
/// A file that cannot be listed, read or decoded is recorded as a failure
/// and contributes nothing. Only an invalid directory, an unusable listing
/// pattern or a failed output write abort the run.
pub fn combine<F: FileSystem>(
    fs: &F,
    config: &CombineConfig,
) -> Result<CombineReport, ConvertError> {
    prepare(fs, config)?.write(fs)
}

/// Everything [`combine`] does short of writing the output file.
pub fn prepare<F: FileSystem>(
    fs: &F,
    config: &CombineConfig,
) -> Result<PreparedDiagram, ConvertError> {
    validate_directory(fs, &config.directory)?;

    let entries = fs.list_sources(&config.directory, &config.extension)?;
    log::info!(
        "found {} candidate file(s) in {}",
        entries.len(),
        config.directory.display()
    );

    let sources = entries
        .into_iter()
        .filter(|entry| !matches!(entry, Ok(path) if config.is_output(path)))
        .map(|entry| match entry {
            Ok(path) => {
                log::debug!("reading {}", path.display());
                let text = fs.read_source(&path);
                (path, text)
            }
            Err(err) => (err.path().map(Path::to_path_buf).unwrap_or_default(), Err(err)),
        });

    let converter = Converter::default();
    let (body, results) = combine_sources(&converter, sources);

    Ok(PreparedDiagram {
        output_path: config.output_path(),
        contents: converter.wrap(&body),
        results,
    })
}

/// Accumulate converted bodies from already-loaded sources.
///
/// Returns the lines between the shared markers, plus which paths succeeded
/// and which failed.
pub fn combine_sources<I>(converter: &Converter, sources: I) -> (Vec<String>, BatchResults<PathBuf>)
where
    I: IntoIterator<Item = (PathBuf, Result<String, ConvertError>)>,
{
    let mut body = Vec::new();
    let mut results = BatchResults::default();

    for (path, source) in sources {
        match source {
            Ok(text) => {
                let output = converter.convert(&text);
                body.extend(converter.strip_markers(&output).into_iter().map(String::from));
                body.push(String::new());
                results.successes.push(path);
            }
            Err(err) => {
                log::debug!("skipping {}: {}", path.display(), err.reason());
                results.failures.push(FileFailure::from_error(path, &err));
            }
        }
    }

    (body, results)
}
