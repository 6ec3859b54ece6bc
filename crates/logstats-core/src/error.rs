use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by logstats.
///
/// Malformed input lines and empty batches are not represented here: the
/// parser counts the former and the aggregator reports the latter as a
/// no-data summary.
#[derive(Error, Debug)]
pub enum LogStatsError {
    /// The raw line source could not be opened or read.
    #[error("Log source unavailable {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory source contained no log files.
    #[error("No log files found in {0}")]
    NoLogFiles(PathBuf),

    /// A report could not be serialised to JSON.
    #[error("Failed to serialise JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl LogStatsError {
    /// `true` for errors meaning the input could not be acquired at all.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(
            self,
            LogStatsError::SourceUnavailable { .. } | LogStatsError::NoLogFiles(_)
        )
    }
}

/// Convenience alias used throughout the logstats crates.
pub type Result<T> = std::result::Result<T, LogStatsError>;
