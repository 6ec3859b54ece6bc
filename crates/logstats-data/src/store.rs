//! Read-only time-series view over an [`EventCollection`].

use chrono::NaiveDate;
use logstats_core::models::{EventCollection, LogEvent};
use logstats_core::time_utils::{days_inclusive, span_in_days};
use serde::Serialize;

// ── DailyCount ────────────────────────────────────────────────────────────────

/// Number of events on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub day: NaiveDate,
    pub count: usize,
}

// ── TimeSeriesStore ───────────────────────────────────────────────────────────

/// Borrowing view that answers day-windowed and day-grouped queries.
///
/// Relies on the collection being sorted by timestamp, so windows are
/// contiguous slices found by binary search.
#[derive(Debug, Clone, Copy)]
pub struct TimeSeriesStore<'a> {
    events: &'a [LogEvent],
}

impl<'a> TimeSeriesStore<'a> {
    pub fn new(collection: &'a EventCollection) -> Self {
        Self {
            events: collection.as_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// First and last calendar day covered, or `None` for an empty store.
    pub fn day_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.events.first()?.day(), self.events.last()?.day()))
    }

    /// Events whose timestamp falls on `day`, in collection order.
    pub fn window_by(&self, day: NaiveDate) -> &'a [LogEvent] {
        let start = self.events.partition_point(|e| e.day() < day);
        let end = self.events.partition_point(|e| e.day() <= day);
        &self.events[start..end]
    }

    /// One entry per calendar day from the first to the last event,
    /// inclusive, with zero counts for days without events.
    ///
    /// Empty when the store is empty.
    pub fn daily_counts(&self) -> Vec<DailyCount> {
        let Some((first, last)) = self.day_span() else {
            return Vec::new();
        };

        let mut counts = Vec::with_capacity(span_in_days(first, last));
        let mut rest = self.events;
        for day in days_inclusive(first, last) {
            let n = rest.partition_point(|e| e.day() <= day);
            counts.push(DailyCount { day, count: n });
            rest = &rest[n..];
        }
        counts
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
