use alloy2puml::cli::{self, Invocation};
use alloy2puml::commands::prepare;
use alloy2puml::errors::reporting::{brief_summary, failure_lines};
use alloy2puml::errors::ConvertError;
use alloy2puml::io::RealFileSystem;
use anyhow::{Context, Result};
use std::process::ExitCode;

// Main orchestrator function
fn main() -> ExitCode {
    let cli = match cli::parse_args() {
        Invocation::Run(cli) => cli,
        Invocation::Informational(err) => err.exit(),
        Invocation::Usage(message) => {
            println!("{message}");
            return ExitCode::FAILURE;
        }
    };

    cli::init_logging(cli.verbosity);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_fatal(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli) -> Result<()> {
    let config = cli.to_config();
    let fs = RealFileSystem::new();
    let prepared = prepare(&fs, &config)
        .with_context(|| format!("failed to combine {}", config.directory.display()))?;

    // Per-file failures are reported even if the output write fails below
    for line in failure_lines(&prepared.results) {
        println!("{line}");
    }
    if cli.verbosity > 0 {
        eprintln!("{}", brief_summary(&prepared.results));
    }

    let report = prepared
        .write(&fs)
        .with_context(|| format!("failed to combine {}", config.directory.display()))?;

    println!(
        "Generated combined diagram: {}",
        report.output_path.display()
    );
    Ok(())
}

// Side effect handler: invalid-directory errors keep their plain stdout form
fn report_fatal(err: &anyhow::Error) {
    match err.downcast_ref::<ConvertError>() {
        Some(invalid @ ConvertError::InvalidDirectory(_)) => println!("Error: {invalid}"),
        _ => eprintln!("alloy2puml: {err:#}"),
    }
}
