/*!
 * repo-snapshot - Generate a structured text snapshot of a directory tree
 *
 * This library walks a directory, prunes well-known noise directories and
 * files, and renders a single text document listing the directory layout
 * followed by the content of every remaining file.
 */

pub mod config;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::Config;
pub use error::{Result, SnapshotError};
pub use filter::ExclusionFilter;
pub use formatter::{classify_file, format_file_content, render_block};
pub use scanner::{generate_snapshot, Scanner};
pub use types::{FileOutcome, ScanStatistics, Snapshot};
pub use utils::{count_files, format_kilobytes};
pub use writer::SnapshotWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
