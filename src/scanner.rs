/*!
 * Directory traversal and snapshot assembly
 */

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{Result, SnapshotError};
use crate::filter::ExclusionFilter;
use crate::formatter::format_file_content;
use crate::types::{ScanStatistics, Snapshot};

/// State accumulated during one walk
struct Traversal {
    root: PathBuf,
    special_paths: HashSet<PathBuf>,
    directories: Vec<String>,
    content: String,
    files: Vec<PathBuf>,
    statistics: ScanStatistics,
}

/// Scanner for directory contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Exclusion rules derived from the configuration
    filter: ExclusionFilter,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        let filter = ExclusionFilter::from_config(&config);
        Self {
            config,
            filter,
            progress,
        }
    }

    /// Walk the target directory and build the snapshot
    pub fn scan(&self) -> Result<Snapshot> {
        let root = self.resolve_root()?;

        let mut special_paths = HashSet::new();
        special_paths.insert(root.join(&self.config.output_file));
        if let Some(program) = &self.config.program_path {
            special_paths.insert(fs::canonicalize(program).unwrap_or_else(|_| program.clone()));
        }

        let mut state = Traversal {
            root: root.clone(),
            special_paths,
            directories: Vec::new(),
            content: String::new(),
            files: Vec::new(),
            statistics: ScanStatistics::default(),
        };

        let _ = writeln!(
            state.content,
            "========REPOSITORYSNAPSHOTSTART({})========",
            root.display()
        );
        self.scan_directory(&root, &mut state)?;
        let _ = writeln!(
            state.content,
            "========REPOSITORYSNAPSHOTEND({})========",
            root.display()
        );

        let stats = &state.statistics;
        info!(
            root = %root.display(),
            directories = stats.directories_listed,
            blocks = stats.blocks(),
            included = stats.files_included,
            oversized = stats.files_oversized,
            undecodable = stats.files_undecodable,
            failed = stats.files_failed,
            skipped = stats.files_skipped,
            "scan complete"
        );

        Ok(Snapshot {
            root,
            directories: state.directories,
            content: state.content,
            files: state.files,
            statistics: state.statistics,
        })
    }

    fn resolve_root(&self) -> Result<PathBuf> {
        self.config.validate()?;
        fs::canonicalize(&self.config.target_dir)
            .map_err(|_| SnapshotError::RootNotFound(self.config.target_dir.clone()))
    }

    /// List one directory, format its files, then descend into its children
    fn scan_directory(&self, abs_path: &Path, state: &mut Traversal) -> Result<()> {
        let entries = WalkDir::new(abs_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .collect::<std::result::Result<Vec<DirEntry>, _>>()?;

        // Symlinked directories are neither listed nor descended into
        let (dirs, files): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .filter(|e| !(e.path_is_symlink() && e.path().is_dir()))
            .partition(|e| e.file_type().is_dir());

        let dirs: Vec<DirEntry> = dirs
            .into_iter()
            .filter(|e| {
                let pruned = self.filter.is_dir_pruned(&e.file_name().to_string_lossy());
                if pruned {
                    debug!(path = %e.path().display(), "pruning excluded directory");
                }
                !pruned
            })
            .collect();

        let rel_path = relative_to(abs_path, &state.root);
        if rel_path.as_os_str().is_empty() {
            state.directories.push("---DIRECTORY:/---\n".to_string());
            state.statistics.directories_listed += 1;
        } else if !self.filter.should_exclude(&rel_path) {
            state.directories.push(format!(
                "---DIRECTORY:{}{}---\n",
                rel_path.to_string_lossy(),
                MAIN_SEPARATOR
            ));
            state.statistics.directories_listed += 1;
        }

        for entry in &files {
            self.process_file(entry.path(), state);
        }

        for entry in &dirs {
            self.scan_directory(entry.path(), state)?;
        }

        Ok(())
    }

    /// Apply the file exclusion rules and format the file if it survives
    fn process_file(&self, full_path: &Path, state: &mut Traversal) {
        let file_name = full_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        if self.filter.is_file_excluded(&file_name) {
            debug!(path = %full_path.display(), "skipping excluded file name");
            state.statistics.files_skipped += 1;
            return;
        }

        if state.special_paths.contains(full_path) {
            debug!(path = %full_path.display(), "skipping program or snapshot output");
            state.statistics.files_skipped += 1;
            return;
        }

        let rel_path = relative_to(full_path, &state.root);
        if self.filter.should_exclude(&rel_path) {
            debug!(path = %rel_path.display(), "skipping excluded path");
            state.statistics.files_skipped += 1;
            return;
        }

        self.progress.inc(1);
        // Truncate if too long to avoid display issues
        let display_name = if file_name.len() > 40 {
            let mut start = file_name.len() - 37;
            while !file_name.is_char_boundary(start) {
                start += 1;
            }
            format!("...{}", &file_name[start..])
        } else {
            file_name
        };
        self.progress
            .set_message(format!("Current file: {}", display_name));

        let outcome = format_file_content(
            full_path,
            &rel_path,
            self.config.max_file_size,
            &mut state.content,
        );
        state.statistics.record(&outcome);
        state.files.push(rel_path);
    }
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Generate the full snapshot document for `root_dir`
///
/// `program_path` and `<root_dir>/<output_filename>` are never included.
pub fn generate_snapshot(
    root_dir: impl AsRef<Path>,
    program_path: impl AsRef<Path>,
    output_filename: &str,
) -> Result<String> {
    let config = Config::new(root_dir.as_ref())
        .with_program_path(program_path)
        .with_output_file(output_filename);
    let scanner = Scanner::new(config, Arc::new(ProgressBar::hidden()));

    Ok(scanner.scan()?.render())
}
