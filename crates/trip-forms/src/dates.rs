//! Date Range Rules
//!
//! ISO (`YYYY-MM-DD`) date helpers behind the start/end date inputs.

use chrono::NaiveDate;

const ISO_FORMAT: &str = "%Y-%m-%d";

pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), ISO_FORMAT).ok()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Earliest allowed end date for a given start date (the day after)
pub fn min_end_date(start: NaiveDate) -> Option<NaiveDate> {
    start.succ_opt()
}

/// What the end-date input should look like after the start date changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndDateAdjustment {
    /// New `min` attribute for the end-date input
    pub min: String,
    /// Replacement end value when the current one no longer fits
    pub replace_value: Option<String>,
}

/// Recompute end-date constraints after the start date changed.
///
/// Returns `None` when the start value is not a date. An end date on or before
/// the start is pushed to the day after the start.
pub fn adjust_end_date(start_raw: &str, end_raw: &str) -> Option<EndDateAdjustment> {
    let start = parse_iso_date(start_raw)?;
    let min = min_end_date(start)?;
    let replace_value = match parse_iso_date(end_raw) {
        Some(end) if end <= start => Some(format_iso_date(min)),
        _ => None,
    };
    Some(EndDateAdjustment {
        min: format_iso_date(min),
        replace_value,
    })
}

/// Whether a freshly chosen end date is acceptable against the start date.
///
/// Unparseable values on either side are accepted here; the submit-time
/// validation reports them.
pub fn end_date_acceptable(start_raw: &str, end_raw: &str) -> bool {
    match (parse_iso_date(start_raw), parse_iso_date(end_raw)) {
        (Some(start), Some(end)) => end > start,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_end_is_next_day_across_month_and_leap_boundaries() {
        let d = |s| parse_iso_date(s).unwrap();
        assert_eq!(min_end_date(d("2025-01-31")), Some(d("2025-02-01")));
        assert_eq!(min_end_date(d("2024-02-28")), Some(d("2024-02-29")));
        assert_eq!(min_end_date(d("2024-12-31")), Some(d("2025-01-01")));
    }

    #[test]
    fn test_adjust_pushes_stale_end_date() {
        let adj = adjust_end_date("2025-03-10", "2025-03-10").unwrap();
        assert_eq!(adj.min, "2025-03-11");
        assert_eq!(adj.replace_value.as_deref(), Some("2025-03-11"));

        let adj = adjust_end_date("2025-03-10", "2025-03-01").unwrap();
        assert_eq!(adj.replace_value.as_deref(), Some("2025-03-11"));
    }

    #[test]
    fn test_adjust_keeps_valid_or_empty_end_date() {
        let adj = adjust_end_date("2025-03-10", "2025-03-15").unwrap();
        assert_eq!(adj.replace_value, None);
        let adj = adjust_end_date("2025-03-10", "").unwrap();
        assert_eq!(adj.replace_value, None);
    }

    #[test]
    fn test_adjust_ignores_invalid_start() {
        assert_eq!(adjust_end_date("", "2025-03-15"), None);
        assert_eq!(adjust_end_date("soon", "2025-03-15"), None);
    }

    #[test]
    fn test_end_date_acceptance() {
        assert!(end_date_acceptable("2025-03-10", "2025-03-11"));
        assert!(!end_date_acceptable("2025-03-10", "2025-03-10"));
        assert!(!end_date_acceptable("2025-03-10", "2025-03-09"));
        assert!(end_date_acceptable("", "2025-03-09"));
    }
}
