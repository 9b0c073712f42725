use crate::config::{CombineConfig, DEFAULT_EXTENSION, DEFAULT_OUTPUT_NAME};
use clap::error::ErrorKind;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "alloy2puml")]
#[command(
    about = "Convert Alloy signatures into a combined PlantUML class diagram",
    long_about = "Converts Alloy signatures into a PlantUML class diagram.\n\
                  Processes all *.als files in DIRECTORY and writes combined.puml next to them.\n\
                  Facts, predicates and assertions are not converted."
)]
#[command(version)]
pub struct Cli {
    /// Directory containing the Alloy sources
    pub directory: PathBuf,

    /// Source file extension
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Name of the combined diagram written into DIRECTORY
    #[arg(long = "output-name", default_value = DEFAULT_OUTPUT_NAME)]
    pub output_name: String,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    pub fn to_config(&self) -> CombineConfig {
        CombineConfig::new(&self.directory)
            .with_extension(&self.extension)
            .with_output_name(&self.output_name)
    }
}

/// What the binary should do after looking at its arguments.
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    /// `--help` or `--version`: clap prints and exits successfully.
    Informational(clap::Error),
    /// Missing, extra or malformed arguments.
    Usage(String),
}

pub fn parse_args() -> Invocation {
    parse_from(std::env::args_os())
}

pub fn parse_from<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Invocation::Run(cli),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Invocation::Informational(err),
            _ => Invocation::Usage(err.render().to_string()),
        },
    }
}

// Pure function to map -v count to a log level
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. Safe to call more than once.
pub fn init_logging(verbosity: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for_verbosity(verbosity))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
