//! Raw line acquisition from a file or a directory of log files.
//!
//! Every source is read in one scoped pass and released before parsing.

use std::path::{Path, PathBuf};

use logstats_core::error::{LogStatsError, Result};
use tracing::{debug, warn};

/// File extensions picked up when the source is a directory.
const LOG_EXTENSIONS: [&str; 2] = ["log", "txt"];

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all log files recursively under `dir`, sorted by path.
pub fn find_log_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| LOG_EXTENSIONS.contains(&ext))
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Read every line of a single file.
///
/// Bytes are decoded lossily so an invalid UTF-8 sequence only spoils the
/// line it appears on.
pub fn read_file_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|source| {
        warn!("Failed to read log source {}: {}", path.display(), source);
        LogStatsError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let lines: Vec<String> = String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_owned)
        .collect();

    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Read all raw lines from `path`.
///
/// A file is read directly. A directory contributes the lines of every log
/// file under it, concatenated in path order; a directory without log files
/// is reported as [`LogStatsError::NoLogFiles`].
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    if !path.is_dir() {
        return read_file_lines(path);
    }

    let files = find_log_files(path);
    if files.is_empty() {
        warn!("No log files found in {}", path.display());
        return Err(LogStatsError::NoLogFiles(path.to_path_buf()));
    }

    let mut all_lines = Vec::new();
    for file in &files {
        all_lines.extend(read_file_lines(file)?);
    }

    debug!(
        "Read {} lines from {} files under {}",
        all_lines.len(),
        files.len(),
        path.display()
    );
    Ok(all_lines)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
