//! Console and JSON rendering of an [`AnalysisResult`].

use std::fmt::Write as _;

use logstats_core::error::Result;
use logstats_core::formatting::{format_count, format_decimal, format_share};
use logstats_core::time_utils::{format_day, format_timestamp};
use logstats_data::aggregator::{Summary, SummaryStatistics};
use logstats_data::analysis::AnalysisResult;

/// Message printed when the batch held no valid events.
pub const NO_DATA_MESSAGE: &str = "No data available for analysis.";

/// Render the human-readable report.
///
/// `top` limits the level and action tables to their N most frequent rows;
/// 0 shows every row.
pub fn render_text(result: &AnalysisResult, top: usize) -> String {
    let mut out = String::new();
    let meta = &result.metadata;

    if let Some(source) = &meta.source {
        let _ = writeln!(out, "Source: {}", source);
    }
    let _ = writeln!(
        out,
        "Lines read: {} ({} discarded, {} blank)",
        format_count(meta.lines_read),
        format_count(meta.lines_discarded.total()),
        format_count(meta.blank_lines),
    );

    let stats = match &result.summary {
        Summary::NoData => {
            let _ = writeln!(out, "\n{}", NO_DATA_MESSAGE);
            return out;
        }
        Summary::Report(stats) => stats,
    };

    let _ = writeln!(out, "\nFirst events:");
    for event in &result.preview {
        let _ = writeln!(
            out,
            "  {} - {} - {} - User: {}",
            format_timestamp(event.timestamp()),
            event.level(),
            event.action(),
            event.actor()
        );
    }

    write_table(&mut out, "Log Level Counts", &stats.ranked_levels(), stats.total_count, top);
    write_table(&mut out, "Action Counts", &stats.ranked_actions(), stats.total_count, top);
    write_totals(&mut out, stats);

    let _ = writeln!(out, "\nLogs per Day:");
    for entry in &stats.daily_volume {
        let _ = writeln!(out, "  {}  {:>6}", format_day(entry.day), format_count(entry.count));
    }

    out
}

/// Render the whole result as pretty-printed JSON for charting consumers.
pub fn render_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

fn write_table(out: &mut String, title: &str, rows: &[(&str, usize)], total: usize, top: usize) {
    let limit = if top == 0 { rows.len() } else { top.min(rows.len()) };
    // `{:<width$}` pads by char count, so measure keys the same way.
    let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);

    let _ = writeln!(out, "\n{}:", title);
    for (key, count) in &rows[..limit] {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>6}  {:>6}",
            key,
            format_count(*count),
            format_share(*count, total),
            width = width
        );
    }
    if limit < rows.len() {
        let _ = writeln!(out, "  ... {} more", rows.len() - limit);
    }
}

fn write_totals(out: &mut String, stats: &SummaryStatistics) {
    let _ = writeln!(out, "\nTotal Number of Logs: {}", format_count(stats.total_count));
    let _ = writeln!(
        out,
        "Number of Unique Users: {}",
        format_count(stats.unique_actor_count)
    );
    let _ = writeln!(
        out,
        "Average Logs per Day: {}",
        format_decimal(stats.average_daily_volume, 2)
    );
    let _ = writeln!(
        out,
        "Maximum Logs per Day: {} ({})",
        format_count(stats.max_daily_volume),
        format_day(stats.peak_day)
    );
    let _ = writeln!(
        out,
        "Time Span: {} to {}",
        format_timestamp(stats.first_event),
        format_timestamp(stats.last_event)
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
