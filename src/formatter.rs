/*!
 * Per-file content classification and block rendering
 */

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::types::FileOutcome;
use crate::utils::format_kilobytes;

/// Read a file and classify it for the snapshot
///
/// The size is checked from metadata first so oversized files are never
/// opened. Errors are captured in the returned outcome.
pub fn classify_file(path: &Path, max_file_size: u64) -> FileOutcome {
    let size = match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(e) => return FileOutcome::ReadError(e.to_string()),
    };

    if size > max_file_size {
        return FileOutcome::Oversized(size);
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return FileOutcome::ReadError(e.to_string()),
    };

    match String::from_utf8(bytes) {
        Ok(content) => FileOutcome::Normal(content),
        Err(_) => FileOutcome::Undecodable,
    }
}

/// Append the delimited block for one file to `out`
pub fn render_block(relative_path: &Path, outcome: &FileOutcome, out: &mut String) {
    let rel = relative_path.to_string_lossy();

    // Writing into a String cannot fail
    let _ = writeln!(out, "---FILESTART:{}---", rel);
    match outcome {
        FileOutcome::Oversized(size) => {
            let _ = writeln!(
                out,
                "[File toolarge({}KB) or binary-Content Skipped]",
                format_kilobytes(*size)
            );
        }
        FileOutcome::Undecodable => {
            out.push_str("[Binary file or non-UTF-8 encoding - Content Skipped]\n");
        }
        FileOutcome::ReadError(message) => {
            let _ = writeln!(out, "[Error reading file: {}]", message);
        }
        FileOutcome::Normal(content) => {
            let trimmed = content.trim();
            if !trimmed.is_empty() {
                out.push_str(trimmed);
            }
            out.push('\n');
        }
    }
    let _ = writeln!(out, "---FILEEND:{}---", rel);
    out.push('\n');
}

/// Classify a file and append its block to `out`, returning the outcome
pub fn format_file_content(
    full_path: &Path,
    relative_path: &Path,
    max_file_size: u64,
    out: &mut String,
) -> FileOutcome {
    let outcome = classify_file(full_path, max_file_size);

    match &outcome {
        FileOutcome::Oversized(size) => {
            warn!(path = %relative_path.display(), size, "file too large, content skipped")
        }
        FileOutcome::Undecodable => {
            warn!(path = %relative_path.display(), "file is not valid UTF-8, content skipped")
        }
        FileOutcome::ReadError(message) => {
            warn!(path = %relative_path.display(), error = %message, "failed to read file")
        }
        FileOutcome::Normal(_) => {}
    }

    render_block(relative_path, &outcome, out);
    outcome
}
