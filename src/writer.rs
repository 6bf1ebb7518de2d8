/*!
 * Snapshot file writer
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::config::Config;
use crate::error::{Result, ResultExt};
use crate::types::Snapshot;

/// Writes a rendered snapshot inside its scan root
pub struct SnapshotWriter {
    /// Writer configuration
    config: Config,
}

impl SnapshotWriter {
    /// Create a new snapshot writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write the snapshot, overwriting any previous one, and return its path
    pub fn write(&self, snapshot: &Snapshot) -> Result<PathBuf> {
        let output_path = snapshot.root.join(&self.config.output_file);
        let document = snapshot.render();

        let file = File::create(&output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(document.as_bytes())
            .with_context(|| format!("failed to write {}", output_path.display()))?;
        writer
            .flush()
            .with_context(|| format!("failed to write {}", output_path.display()))?;

        debug!(path = %output_path.display(), bytes = document.len(), "snapshot written");
        Ok(output_path)
    }
}
