/*!
 * Core types and data structures for repo-snapshot
 */

use std::path::PathBuf;

/// Result of reading a single file for the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// File was read and decoded as text
    Normal(String),
    /// File exceeds the size threshold; holds its size in bytes
    Oversized(u64),
    /// File content is not valid UTF-8
    Undecodable,
    /// Sizing or reading the file failed
    ReadError(String),
}

/// Counters collected while walking the tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStatistics {
    /// Directory listing lines emitted, root included
    pub directories_listed: usize,
    /// Files whose content was emitted
    pub files_included: usize,
    /// Files skipped for size
    pub files_oversized: usize,
    /// Files that were not valid text
    pub files_undecodable: usize,
    /// Files that could not be read
    pub files_failed: usize,
    /// Files dropped by the exclusion rules or special paths
    pub files_skipped: usize,
}

impl ScanStatistics {
    /// Record the outcome of one formatted file
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Normal(_) => self.files_included += 1,
            FileOutcome::Oversized(_) => self.files_oversized += 1,
            FileOutcome::Undecodable => self.files_undecodable += 1,
            FileOutcome::ReadError(_) => self.files_failed += 1,
        }
    }

    /// Number of file blocks in the snapshot
    pub fn blocks(&self) -> usize {
        self.files_included + self.files_oversized + self.files_undecodable + self.files_failed
    }
}

/// A complete traversal of one root directory
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Absolute scan root
    pub root: PathBuf,
    /// Directory listing lines in traversal order, newline terminated
    pub directories: Vec<String>,
    /// Start marker, rendered file blocks and end marker
    pub content: String,
    /// Relative paths of every file that produced a block, in order
    pub files: Vec<PathBuf>,
    /// Walk counters
    pub statistics: ScanStatistics,
}

impl Snapshot {
    /// Render the final document: directory map, blank line, file blocks
    pub fn render(&self) -> String {
        let listing_len: usize = self.directories.iter().map(String::len).sum();
        let mut document = String::with_capacity(listing_len + 1 + self.content.len());

        for line in &self.directories {
            document.push_str(line);
        }
        document.push('\n');
        document.push_str(&self.content);

        document
    }
}
