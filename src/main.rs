/*!
 * Command-line interface for repo-snapshot
 */

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use repo_snapshot::config::{Args, Config};
use repo_snapshot::error::{Result, SnapshotError};
use repo_snapshot::scanner::Scanner;
use repo_snapshot::utils::count_files;
use repo_snapshot::writer::SnapshotWriter;

/// Environment variable holding the log filter directives for stderr
const LOG_ENV: &str = "REPO_SNAPSHOT_LOG";

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    init_tracing();

    let directory = args.directory_path.clone();
    match run(Config::from_args(args)) {
        Ok(output_path) => {
            println!("Successfully generated repository snapshot.");
            println!("Output saved to: {}", output_path.display());
            ExitCode::SUCCESS
        }
        Err(SnapshotError::RootNotFound(_)) => {
            eprintln!("Error: Directory '{}' not found.", directory);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("An unexpected error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: Config) -> Result<PathBuf> {
    // Fail before touching anything if the root is missing
    config.validate()?;

    let progress = ProgressBar::new(count_files(&config.target_dir, &config));
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim} {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress.set_prefix("Scanning");

    // Create scanner and writer
    let scanner = Scanner::new(config.clone(), Arc::new(progress.clone()));
    let writer = SnapshotWriter::new(config);

    let snapshot = scanner.scan();
    progress.finish_and_clear();

    writer.write(&snapshot?)
}
