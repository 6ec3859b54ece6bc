//! Summary statistics over an [`EventCollection`].

use std::collections::{BTreeMap, HashSet};

use chrono::{NaiveDate, NaiveDateTime};
use logstats_core::models::{is_reference_action, is_reference_level, EventCollection, LogEvent};
use serde::Serialize;

use crate::store::{DailyCount, TimeSeriesStore};

// ── SummaryStatistics ─────────────────────────────────────────────────────────

/// Aggregates derived from one non-empty [`EventCollection`].
///
/// Level and action maps only contain keys that occur in the data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    pub counts_by_level: BTreeMap<String, usize>,
    pub counts_by_action: BTreeMap<String, usize>,
    pub total_count: usize,
    pub unique_actor_count: usize,
    /// Zero-filled per-day volume from the first to the last event day.
    pub daily_volume: Vec<DailyCount>,
    /// Mean over `daily_volume`, zero days included. Not rounded.
    pub average_daily_volume: f64,
    pub max_daily_volume: usize,
    /// Earliest day reaching `max_daily_volume`.
    pub peak_day: NaiveDate,
    pub first_event: NaiveDateTime,
    pub last_event: NaiveDateTime,
}

impl SummaryStatistics {
    /// Levels by descending count, ties by name.
    pub fn ranked_levels(&self) -> Vec<(&str, usize)> {
        rank(&self.counts_by_level)
    }

    /// Actions by descending count, ties by name.
    pub fn ranked_actions(&self) -> Vec<(&str, usize)> {
        rank(&self.counts_by_action)
    }

    /// Observed levels outside the reference set.
    pub fn unrecognized_levels(&self) -> Vec<&str> {
        self.counts_by_level
            .keys()
            .map(String::as_str)
            .filter(|level| !is_reference_level(level))
            .collect()
    }

    /// Observed actions outside the reference set.
    pub fn unrecognized_actions(&self) -> Vec<&str> {
        self.counts_by_action
            .keys()
            .map(String::as_str)
            .filter(|action| !is_reference_action(action))
            .collect()
    }
}

fn rank(counts: &BTreeMap<String, usize>) -> Vec<(&str, usize)> {
    let mut ranked: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    // BTreeMap order is already by key, so a stable sort on count keeps ties by name.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

// ── Summary ───────────────────────────────────────────────────────────────────

/// Outcome of [`EventAggregator::summarize`].
///
/// `NoData` means the collection was empty, which is distinct from a report
/// in which some bucket happens to be zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Summary {
    NoData,
    Report(SummaryStatistics),
}

impl Summary {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Summary::NoData)
    }

    pub fn statistics(&self) -> Option<&SummaryStatistics> {
        match self {
            Summary::NoData => None,
            Summary::Report(stats) => Some(stats),
        }
    }
}

// ── EventAggregator ───────────────────────────────────────────────────────────

/// Stateless helper computing summary statistics.
pub struct EventAggregator;

impl EventAggregator {
    /// Summarise `collection`, or return [`Summary::NoData`] when it is empty.
    pub fn summarize(collection: &EventCollection) -> Summary {
        let (Some(first), Some(last)) = (collection.first(), collection.last()) else {
            return Summary::NoData;
        };

        let daily_volume = TimeSeriesStore::new(collection).daily_counts();

        let mut max_daily_volume = 0usize;
        let mut peak_day = first.day();
        for entry in &daily_volume {
            if entry.count > max_daily_volume {
                max_daily_volume = entry.count;
                peak_day = entry.day;
            }
        }

        let volume_sum: usize = daily_volume.iter().map(|d| d.count).sum();
        let average_daily_volume = volume_sum as f64 / daily_volume.len().max(1) as f64;

        Summary::Report(SummaryStatistics {
            counts_by_level: Self::count_by(collection, LogEvent::level),
            counts_by_action: Self::count_by(collection, LogEvent::action),
            total_count: collection.len(),
            unique_actor_count: Self::unique_actors(collection),
            daily_volume,
            average_daily_volume,
            max_daily_volume,
            peak_day,
            first_event: first.timestamp(),
            last_event: last.timestamp(),
        })
    }

    /// Frequency of each distinct value produced by `key_fn`.
    pub fn count_by(
        collection: &EventCollection,
        key_fn: impl Fn(&LogEvent) -> &str,
    ) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for event in collection {
            let key = key_fn(event);
            match counts.get_mut(key) {
                Some(n) => *n += 1,
                None => {
                    counts.insert(key.to_string(), 1);
                }
            }
        }
        counts
    }

    /// Number of distinct actor tokens.
    pub fn unique_actors(collection: &EventCollection) -> usize {
        collection
            .iter()
            .map(LogEvent::actor)
            .collect::<HashSet<_>>()
            .len()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use logstats_core::time_utils::parse_timestamp;

    fn event(ts: &str, level: &str, action: &str, actor: &str) -> LogEvent {
        LogEvent::new(parse_timestamp(ts).unwrap(), level, action, actor)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn report(collection: &EventCollection) -> SummaryStatistics {
        match EventAggregator::summarize(collection) {
            Summary::Report(stats) => stats,
            Summary::NoData => panic!("expected a report"),
        }
    }

    // ── summarize ─────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_collection_is_no_data() {
        let summary = EventAggregator::summarize(&EventCollection::empty());
        assert!(summary.is_no_data());
        assert!(summary.statistics().is_none());
        assert_eq!(summary, Summary::NoData);
    }

    #[test]
    fn test_counts_and_conservation() {
        let collection = EventCollection::from_events(vec![
            event("2024-01-01 10:00:00", "INFO", "Login", "A"),
            event("2024-01-01 11:00:00", "INFO", "Logout", "A"),
            event("2024-01-01 12:00:00", "ERROR", "Error", "B"),
            event("2024-01-02 09:00:00", "DEBUG", "Login", "C"),
        ]);
        let stats = report(&collection);

        assert_eq!(stats.total_count, collection.len());
        assert_eq!(stats.counts_by_level.values().sum::<usize>(), stats.total_count);
        assert_eq!(stats.counts_by_action.values().sum::<usize>(), stats.total_count);
        assert_eq!(stats.counts_by_level.get("INFO"), Some(&2));
        assert_eq!(stats.counts_by_level.get("WARNING"), None);
        assert_eq!(stats.counts_by_action.get("Login"), Some(&2));
        assert_eq!(stats.unique_actor_count, 3);
    }

    #[test]
    fn test_dynamic_categories_are_separate_buckets() {
        let collection = EventCollection::from_events(vec![
            event("2024-01-01 10:00:00", "INFO", "Login", "A"),
            event("2024-01-01 10:00:01", "TRACE", "Purge", "A"),
            event("2024-01-01 10:00:02", "info", "Login", "A"),
        ]);
        let stats = report(&collection);

        assert_eq!(stats.counts_by_level.len(), 3);
        assert_eq!(stats.counts_by_level.get("TRACE"), Some(&1));
        assert_eq!(stats.unrecognized_levels(), vec!["TRACE", "info"]);
        assert_eq!(stats.unrecognized_actions(), vec!["Purge"]);
    }

    #[test]
    fn test_daily_volume_zero_fill_drives_average() {
        let collection = EventCollection::from_events(vec![
            event("2024-01-03 10:00:00", "INFO", "Login", "B"),
            event("2024-01-01 10:00:00", "INFO", "Login", "A"),
        ]);
        let stats = report(&collection);

        let series: Vec<(NaiveDate, usize)> =
            stats.daily_volume.iter().map(|d| (d.day, d.count)).collect();
        assert_eq!(
            series,
            vec![
                (day(2024, 1, 1), 1),
                (day(2024, 1, 2), 0),
                (day(2024, 1, 3), 1)
            ]
        );
        assert!((stats.average_daily_volume - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(stats.max_daily_volume, 1);
        assert_eq!(stats.peak_day, day(2024, 1, 1));
    }

    #[test]
    fn test_peak_day_and_span() {
        let collection = EventCollection::from_events(vec![
            event("2024-06-01 10:00:00", "INFO", "Login", "A"),
            event("2024-06-02 10:00:00", "INFO", "Login", "A"),
            event("2024-06-02 11:00:00", "INFO", "Login", "B"),
            event("2024-06-03 23:59:59", "INFO", "Login", "C"),
        ]);
        let stats = report(&collection);

        assert_eq!(stats.max_daily_volume, 2);
        assert_eq!(stats.peak_day, day(2024, 6, 2));
        assert_eq!(stats.first_event, parse_timestamp("2024-06-01 10:00:00").unwrap());
        assert_eq!(stats.last_event, parse_timestamp("2024-06-03 23:59:59").unwrap());
        assert!((stats.average_daily_volume - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_summarize_is_repeatable() {
        let collection = EventCollection::from_events(vec![
            event("2024-01-05 10:00:00", "WARNING", "Download", "X"),
            event("2024-01-01 10:00:00", "INFO", "Login", "Y"),
        ]);
        assert_eq!(
            EventAggregator::summarize(&collection),
            EventAggregator::summarize(&collection)
        );
    }

    // ── ranking ───────────────────────────────────────────────────────────────

    #[test]
    fn test_ranked_levels_by_count_then_name() {
        let collection = EventCollection::from_events(vec![
            event("2024-01-01 10:00:00", "WARNING", "Login", "A"),
            event("2024-01-01 10:00:01", "ERROR", "Login", "A"),
            event("2024-01-01 10:00:02", "INFO", "Login", "A"),
            event("2024-01-01 10:00:03", "INFO", "Login", "A"),
        ]);
        let stats = report(&collection);

        assert_eq!(
            stats.ranked_levels(),
            vec![("INFO", 2), ("ERROR", 1), ("WARNING", 1)]
        );
        assert_eq!(stats.ranked_actions(), vec![("Login", 4)]);
    }

    // ── serialisation ─────────────────────────────────────────────────────────

    #[test]
    fn test_summary_json_shape() {
        let collection = EventCollection::from_events(vec![event(
            "2024-01-01 10:00:00",
            "INFO",
            "Login",
            "A",
        )]);
        let value = serde_json::to_value(EventAggregator::summarize(&collection)).unwrap();

        assert_eq!(value["status"], "report");
        assert_eq!(value["totalCount"], 1);
        assert_eq!(value["countsByLevel"]["INFO"], 1);
        assert_eq!(value["dailyVolume"][0]["day"], "2024-01-01");
        assert_eq!(value["dailyVolume"][0]["count"], 1);

        let none = serde_json::to_value(Summary::NoData).unwrap();
        assert_eq!(none["status"], "noData");
    }
}
