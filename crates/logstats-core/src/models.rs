use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Log levels emitted by the reference log producer.
pub const REFERENCE_LEVELS: [&str; 4] = ["INFO", "DEBUG", "ERROR", "WARNING"];

/// Actions emitted by the reference log producer, in their wire spelling.
pub const REFERENCE_ACTIONS: [&str; 6] = [
    "Login",
    "Logout",
    "Data Request",
    "File Upload",
    "Download",
    "Error",
];

/// Whether `level` belongs to the reference level set.
pub fn is_reference_level(level: &str) -> bool {
    REFERENCE_LEVELS.contains(&level)
}

/// Whether `action` belongs to the reference action set.
pub fn is_reference_action(action: &str) -> bool {
    REFERENCE_ACTIONS.contains(&action)
}

// ── LogEvent ──────────────────────────────────────────────────────────────────

/// One successfully parsed log record.
///
/// Level and action are kept as the raw strings found on the line so that
/// categories outside the reference sets remain observable downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    timestamp: NaiveDateTime,
    level: String,
    action: String,
    actor: String,
}

impl LogEvent {
    pub fn new(
        timestamp: NaiveDateTime,
        level: impl Into<String>,
        action: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            level: level.into(),
            action: action.into(),
            actor: actor.into(),
        }
    }

    /// Timezone-naive timestamp at second resolution.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Calendar day the event falls on.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Opaque user token from the `User: <token>` field.
    pub fn actor(&self) -> &str {
        &self.actor
    }
}

// ── EventCollection ───────────────────────────────────────────────────────────

/// Events from one parse pass, sorted ascending by timestamp.
///
/// Events sharing a timestamp keep the order in which they were supplied.
/// The collection is read-only once built; an empty collection is a valid
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventCollection {
    events: Vec<LogEvent>,
}

impl EventCollection {
    /// An explicitly empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a collection from events in arbitrary order.
    pub fn from_events(mut events: Vec<LogEvent>) -> Self {
        // `sort_by_key` is stable, which preserves input order on ties.
        events.sort_by_key(|e| e.timestamp);
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEvent> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[LogEvent] {
        &self.events
    }

    /// Earliest event, if any.
    pub fn first(&self) -> Option<&LogEvent> {
        self.events.first()
    }

    /// Latest event, if any.
    pub fn last(&self) -> Option<&LogEvent> {
        self.events.last()
    }
}

impl<'a> IntoIterator for &'a EventCollection {
    type Item = &'a LogEvent;
    type IntoIter = std::slice::Iter<'a, LogEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
