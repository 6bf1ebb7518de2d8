/*!
 * Utility functions and default constants for repo-snapshot
 */

use std::path::Path;

use walkdir::WalkDir;

use crate::config::Config;
use crate::filter::ExclusionFilter;

/// Directory names that are never descended into
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    "node_modules",
    "venv",
    "env",
    "dist",
    "build",
    "tmp",
    "log",
    "temp",
    "assets",
    "images",
];

/// File names that are skipped wherever they appear
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &[
    ".DS_Store",
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
];

/// Files larger than this many bytes are not read (1 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Name of the snapshot file written inside the scanned root
pub const DEFAULT_OUTPUT_FILE: &str = "repository_snapshot.txt";

/// Count the files a scan will hand to the formatter, for progress tracking
///
/// Applies the same pruning as the scanner; special paths are not
/// subtracted, so the count is an upper bound.
pub fn count_files(dir: &Path, config: &Config) -> u64 {
    let filter = ExclusionFilter::from_config(config);

    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !e.file_type().is_dir()
                || !filter.is_dir_pruned(&e.file_name().to_string_lossy())
        })
        .filter_map(Result::ok)
        .filter(|e| !e.file_type().is_dir())
        .filter(|e| !(e.path_is_symlink() && e.path().is_dir()))
        .filter(|e| !filter.is_file_excluded(&e.file_name().to_string_lossy()))
        .filter(|e| {
            e.path()
                .strip_prefix(dir)
                .map_or(true, |rel| !filter.should_exclude(rel))
        })
        .count() as u64
}

/// Format a byte count as kilobytes with two decimals, without a unit
pub fn format_kilobytes(size: u64) -> String {
    format!("{:.2}", size as f64 / 1024.0)
}
