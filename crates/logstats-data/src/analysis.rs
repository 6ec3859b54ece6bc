//! End-to-end pipeline: raw lines → parsed events → summary.
//!
//! Returns an [`AnalysisResult`] for the reporting layer. Nothing here
//! prints; the only I/O is the initial read in [`analyze_source`].

use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use logstats_core::error::Result;
use logstats_core::models::LogEvent;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::aggregator::{EventAggregator, Summary};
use crate::parser::{parse_lines, DiscardCounts};
use crate::reader::read_lines;

/// Number of leading events kept as a preview of the parsed data.
pub const PREVIEW_LEN: usize = 5;

// ── Public types ──────────────────────────────────────────────────────────────

/// Diagnostics produced alongside the summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    /// RFC 3339 timestamp when this result was generated.
    pub generated_at: String,
    /// Display form of the source path, when read from disk.
    pub source: Option<String>,
    /// Raw lines handed to the parser.
    pub lines_read: usize,
    /// Events that survived parsing.
    pub events_parsed: usize,
    /// Whitespace-only lines that were skipped.
    pub blank_lines: usize,
    /// Malformed lines by reason.
    pub lines_discarded: DiscardCounts,
    pub load_time_seconds: f64,
    pub parse_time_seconds: f64,
    pub aggregate_time_seconds: f64,
}

/// The complete output of one pipeline run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: Summary,
    /// First [`PREVIEW_LEN`] events in timestamp order.
    pub preview: Vec<LogEvent>,
    pub metadata: AnalysisMetadata,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the pipeline over an in-memory batch of lines.
pub fn analyze_lines<I, S>(lines: I) -> AnalysisResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    run(lines, None, 0.0)
}

/// Read `path` (file or directory) and run the pipeline over its lines.
///
/// Fails only when the source cannot be read at all. A readable source
/// without valid events yields [`Summary::NoData`].
pub fn analyze_source(path: &Path) -> Result<AnalysisResult> {
    let load_start = Instant::now();
    let lines = read_lines(path)?;
    let load_time = load_start.elapsed().as_secs_f64();

    Ok(run(lines, Some(path.display().to_string()), load_time))
}

// ── Private helpers ───────────────────────────────────────────────────────────

fn run<I, S>(lines: I, source: Option<String>, load_time: f64) -> AnalysisResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parse_start = Instant::now();
    let parsed = parse_lines(lines);
    let parse_time = parse_start.elapsed().as_secs_f64();

    if parsed.discarded.total() > 0 {
        info!(
            "Discarded {} malformed lines ({} missing fields, {} bad timestamps, {} bad user fields)",
            parsed.discarded.total(),
            parsed.discarded.missing_fields,
            parsed.discarded.invalid_timestamp,
            parsed.discarded.invalid_actor,
        );
    }

    let aggregate_start = Instant::now();
    let summary = EventAggregator::summarize(&parsed.events);
    let aggregate_time = aggregate_start.elapsed().as_secs_f64();

    match &summary {
        Summary::NoData => warn!("No valid events found after parsing"),
        Summary::Report(stats) => {
            let levels = stats.unrecognized_levels();
            if !levels.is_empty() {
                warn!("Unrecognised log levels: {}", levels.join(", "));
            }
            let actions = stats.unrecognized_actions();
            if !actions.is_empty() {
                warn!("Unrecognised actions: {}", actions.join(", "));
            }
        }
    }

    let preview: Vec<LogEvent> = parsed.events.iter().take(PREVIEW_LEN).cloned().collect();

    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        source,
        lines_read: parsed.lines_seen(),
        events_parsed: parsed.events.len(),
        blank_lines: parsed.blank_lines,
        lines_discarded: parsed.discarded,
        load_time_seconds: load_time,
        parse_time_seconds: parse_time,
        aggregate_time_seconds: aggregate_time,
    };

    debug!(
        "Analysis complete: {} lines, {} events",
        metadata.lines_read, metadata.events_parsed
    );

    AnalysisResult {
        summary,
        preview,
        metadata,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
