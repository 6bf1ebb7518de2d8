/*!
 * Exclusion rules for directories and files
 *
 * Matching is exact string equality against trimmed path segments. There are
 * no wildcards and no case folding.
 */

use std::collections::HashSet;
use std::path::{Path, MAIN_SEPARATOR};

use crate::config::Config;

/// Predicate over the directory and file exclusion sets
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    dirs: HashSet<String>,
    files: HashSet<String>,
}

impl ExclusionFilter {
    /// Build a filter from explicit directory and file name lists
    pub fn new<D, F>(dirs: D, files: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a filter from the configured exclusion lists
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.excluded_dirs.iter().cloned(),
            config.excluded_files.iter().cloned(),
        )
    }

    /// Check if a single path segment is in either exclusion set
    pub fn is_part_excluded(&self, part: &str) -> bool {
        let part = part.trim();
        self.dirs.contains(part) || self.files.contains(part)
    }

    /// Check if any segment of a root-relative path is excluded
    pub fn should_exclude(&self, path: &Path) -> bool {
        path.to_string_lossy()
            .split(MAIN_SEPARATOR)
            .any(|part| self.is_part_excluded(part))
    }

    /// Check if a directory must be pruned before descending into it
    pub fn is_dir_pruned(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    /// Check if a bare file name is in the file exclusion set
    pub fn is_file_excluded(&self, name: &str) -> bool {
        self.files.contains(name.trim())
    }
}
