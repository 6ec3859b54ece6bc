/// Insert thousands separators into a string of ASCII digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an event count with thousands separators.
///
/// # Examples
///
/// ```
/// use logstats_core::formatting::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1234567), "1,234,567");
/// ```
pub fn format_count(value: usize) -> String {
    group_thousands(&value.to_string())
}

/// Format a non-negative rate with thousands separators and a fixed number of
/// decimal places.
///
/// # Examples
///
/// ```
/// use logstats_core::formatting::format_decimal;
///
/// assert_eq!(format_decimal(2.0 / 3.0, 2), "0.67");
/// assert_eq!(format_decimal(1234.5, 1), "1,234.5");
/// ```
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.prec$}", value.abs(), prec = decimals);
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };
    let mut out = String::new();
    if value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Share of `part` in `total` as a percentage string with one decimal.
///
/// Returns `"0.0%"` when `total` is zero.
pub fn format_share(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / total as f64)
}
