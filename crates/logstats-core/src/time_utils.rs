use chrono::{NaiveDate, NaiveDateTime};

/// The only accepted timestamp layout, e.g. `2024-03-02 14:05:09`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Layout used for calendar-day keys, e.g. `2024-03-02`.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Byte shape of a timestamp rendered with [`TIMESTAMP_FORMAT`]; `d` is any
/// ASCII digit, every other byte must match literally.
const TIMESTAMP_SHAPE: &[u8; 19] = b"dddd-dd-dd dd:dd:dd";

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse a `YYYY-MM-DD HH:MM:SS` timestamp, ignoring surrounding whitespace.
///
/// No fallback layouts are tried. chrono alone accepts unpadded numbers, a
/// leading sign and any run of whitespace for the space, so the field is
/// checked against [`TIMESTAMP_SHAPE`] byte by byte first.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let trimmed = s.trim();
    if !has_timestamp_shape(trimmed.as_bytes()) {
        return None;
    }
    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT).ok()
}

fn has_timestamp_shape(bytes: &[u8]) -> bool {
    bytes.len() == TIMESTAMP_SHAPE.len()
        && bytes
            .iter()
            .zip(TIMESTAMP_SHAPE)
            .all(|(&b, &expected)| match expected {
                b'd' => b.is_ascii_digit(),
                literal => b == literal,
            })
}

// ── Formatting ────────────────────────────────────────────────────────────────

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

// ── Calendar ranges ───────────────────────────────────────────────────────────

/// Every calendar day from `start` to `end`, both inclusive.
///
/// Yields nothing when `start > end`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Number of calendar days in `[start, end]`, or 0 when `start > end`.
pub fn span_in_days(start: NaiveDate, end: NaiveDate) -> usize {
    if start > end {
        return 0;
    }
    (end - start).num_days() as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_timestamp_valid() {
        let ts = parse_timestamp("2024-03-02 14:05:09").unwrap();
        assert_eq!(format_timestamp(ts), "2024-03-02 14:05:09");
    }

    #[test]
    fn test_parse_timestamp_trims_whitespace() {
        assert!(parse_timestamp("  2024-03-02 14:05:09\t").is_some());
    }

    #[test]
    fn test_parse_timestamp_rejects_other_layouts() {
        assert!(parse_timestamp("2024-03-02T14:05:09").is_none());
        assert!(parse_timestamp("2024-03-02 14:05").is_none());
        assert!(parse_timestamp("2024-3-2 14:05:09").is_none());
        assert!(parse_timestamp("2024-03-02 14:05:09.123").is_none());
        assert!(parse_timestamp("02/03/2024 14:05:09").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_parse_timestamp_rejects_misshapen_fields_of_full_length() {
        // Each of these is 19 bytes long and chrono would accept it.
        assert!(parse_timestamp("2024-03-02  4:05:09").is_none());
        assert!(parse_timestamp("2024-3-02  14:05:09").is_none());
        assert!(parse_timestamp("2024-03-02 14:05: 9").is_none());
        assert!(parse_timestamp("+2024-03-0214:05:09").is_none());
        assert!(parse_timestamp("2024-03-02\t14:05:09").is_none());
        assert!(parse_timestamp("2024/03/02 14:05:09").is_none());
    }

    #[test]
    fn test_parse_timestamp_rejects_impossible_dates() {
        assert!(parse_timestamp("2024-02-30 10:00:00").is_none());
        assert!(parse_timestamp("2024-01-01 24:00:00").is_none());
        assert!(parse_timestamp("2023-02-29 10:00:00").is_none());
    }

    #[test]
    fn test_days_inclusive_spans_month_boundary() {
        let days: Vec<String> = days_inclusive(day(2024, 2, 28), day(2024, 3, 1))
            .map(format_day)
            .collect();
        assert_eq!(days, vec!["2024-02-28", "2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn test_days_inclusive_single_and_reversed() {
        assert_eq!(days_inclusive(day(2024, 1, 1), day(2024, 1, 1)).count(), 1);
        assert_eq!(days_inclusive(day(2024, 1, 2), day(2024, 1, 1)).count(), 0);
    }

    #[test]
    fn test_span_in_days() {
        assert_eq!(span_in_days(day(2024, 1, 1), day(2024, 1, 3)), 3);
        assert_eq!(span_in_days(day(2024, 1, 1), day(2024, 1, 1)), 1);
        assert_eq!(span_in_days(day(2024, 1, 3), day(2024, 1, 1)), 0);
        assert_eq!(span_in_days(day(2023, 12, 31), day(2024, 12, 31)), 367);
    }
}
