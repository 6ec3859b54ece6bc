//! Record parser: raw text lines into an ordered [`EventCollection`].
//!
//! Expected line layout:
//!
//! ```text
//! YYYY-MM-DD HH:MM:SS - LEVEL - ACTION - User: TOKEN
//! ```
//!
//! Lines that do not fit are dropped and counted by [`DiscardReason`]; they
//! never abort the parse.

use std::sync::OnceLock;

use logstats_core::models::{EventCollection, LogEvent};
use logstats_core::time_utils::parse_timestamp;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Separator between the four fields of a line.
pub const FIELD_SEPARATOR: &str = " - ";

fn actor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^User: (\S+)$").expect("static regex is valid"))
}

// ── Discard bookkeeping ───────────────────────────────────────────────────────

/// Why a single line was dropped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// Fewer than four fields, or an empty level/action field.
    #[error("expected 4 fields separated by \" - \"")]
    MissingFields,

    /// Timestamp field is not `YYYY-MM-DD HH:MM:SS`.
    #[error("timestamp is not YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp,

    /// Fourth field is not `User: <token>`.
    #[error("last field is not \"User: <token>\"")]
    InvalidActor,
}

/// Per-reason tally of dropped lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscardCounts {
    pub missing_fields: usize,
    pub invalid_timestamp: usize,
    pub invalid_actor: usize,
}

impl DiscardCounts {
    pub fn record(&mut self, reason: DiscardReason) {
        match reason {
            DiscardReason::MissingFields => self.missing_fields += 1,
            DiscardReason::InvalidTimestamp => self.invalid_timestamp += 1,
            DiscardReason::InvalidActor => self.invalid_actor += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.missing_fields + self.invalid_timestamp + self.invalid_actor
    }
}

// ── ParseOutput ───────────────────────────────────────────────────────────────

/// Result of one parse pass.
#[derive(Debug, Clone, Default)]
pub struct ParseOutput {
    /// Successfully parsed events in timestamp order.
    pub events: EventCollection,
    /// Dropped lines by reason.
    pub discarded: DiscardCounts,
    /// Whitespace-only lines, skipped without counting as malformed.
    pub blank_lines: usize,
}

impl ParseOutput {
    /// Lines seen by the parser, including blank and dropped ones.
    pub fn lines_seen(&self) -> usize {
        self.events.len() + self.discarded.total() + self.blank_lines
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse one line into a [`LogEvent`].
///
/// Level and action are stored exactly as written; only the timestamp is
/// trimmed before parsing.
pub fn parse_line(line: &str) -> Result<LogEvent, DiscardReason> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut fields = line.splitn(4, FIELD_SEPARATOR);

    let (Some(ts_field), Some(level), Some(action), Some(user_field)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(DiscardReason::MissingFields);
    };
    if level.is_empty() || action.is_empty() {
        return Err(DiscardReason::MissingFields);
    }

    let timestamp = parse_timestamp(ts_field).ok_or(DiscardReason::InvalidTimestamp)?;

    let actor = actor_pattern()
        .captures(user_field.trim_end())
        .and_then(|caps| caps.get(1))
        .ok_or(DiscardReason::InvalidActor)?
        .as_str();

    Ok(LogEvent::new(timestamp, level, action, actor))
}

/// Parse a batch of lines into a sorted [`EventCollection`] plus discard
/// diagnostics.
pub fn parse_lines<I, S>(lines: I) -> ParseOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut events = Vec::new();
    let mut discarded = DiscardCounts::default();
    let mut blank_lines = 0usize;

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            blank_lines += 1;
            continue;
        }
        match parse_line(line) {
            Ok(event) => events.push(event),
            Err(reason) => {
                debug!("Discarding line {}: {}", idx + 1, reason);
                discarded.record(reason);
            }
        }
    }

    debug!(
        "Parsed {} events, discarded {} lines, skipped {} blank lines",
        events.len(),
        discarded.total(),
        blank_lines
    );

    ParseOutput {
        events: EventCollection::from_events(events),
        discarded,
        blank_lines,
    }
}

/// Parse a batch of lines, keeping only the resulting [`EventCollection`].
pub fn parse<I, S>(lines: I) -> EventCollection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_lines(lines).events
}

// ── Tests ─────────────────────────────────────────────────────────────────────
