/*!
 * Configuration handling for repo-snapshot
 */

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{Result, SnapshotError};
use crate::utils::{
    DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_FILES, DEFAULT_MAX_FILE_SIZE, DEFAULT_OUTPUT_FILE,
};

/// Command-line arguments for repo-snapshot
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "repo-snapshot",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a structured snapshot of a directory for AI consumption",
    long_about = "Walks a directory tree and writes a single text file listing its directories followed by the content of every included file."
)]
pub struct Args {
    /// The root directory to scan. Defaults to the current directory
    #[clap(default_value = ".")]
    pub directory_path: String,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to scan
    pub target_dir: PathBuf,

    /// Name of the snapshot file, written inside `target_dir`
    pub output_file: String,

    /// Path of the running program, never included in the snapshot
    pub program_path: Option<PathBuf>,

    /// Directory names pruned from the walk
    pub excluded_dirs: Vec<String>,

    /// File names skipped wherever they appear
    pub excluded_files: Vec<String>,

    /// Files larger than this many bytes are replaced by a placeholder
    pub max_file_size: u64,
}

impl Config {
    /// Create a configuration with the default exclusion lists and limits
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            program_path: None,
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            excluded_files: DEFAULT_EXCLUDED_FILES.iter().map(|s| s.to_string()).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            program_path: std::env::current_exe().ok(),
            ..Self::new(args.directory_path)
        }
    }

    /// Set the path of the running program
    pub fn with_program_path(mut self, path: impl AsRef<Path>) -> Self {
        self.program_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the snapshot file name
    pub fn with_output_file(mut self, name: impl Into<String>) -> Self {
        self.output_file = name.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.is_dir() {
            return Err(SnapshotError::RootNotFound(self.target_dir.clone()));
        }

        if self.output_file.trim().is_empty() {
            return Err(SnapshotError::Unexpected(
                "output file name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
