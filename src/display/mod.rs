//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; the CLI decides where it goes.
//! Amounts are printed with the configured currency symbol.

pub mod activity;
pub mod budget;
pub mod country;
pub mod trip;

pub use activity::{format_activity_list, format_itinerary};
pub use budget::{
    format_budget_check, format_budget_summary, format_category_breakdown, format_high_cost,
    format_total,
};
pub use country::format_country_info;
pub use trip::{format_trip_details, format_trip_list};

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date with a user-supplied strftime pattern
///
/// An invalid pattern falls back to ISO dates instead of failing mid-print.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let pattern = if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        FALLBACK_DATE_FORMAT
    } else {
        pattern
    };
    date.format(pattern).to_string()
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        assert_eq!(format_date(date, "%Y-%m-%d"), "2026-07-01");
        assert_eq!(format_date(date, "%d/%m/%Y"), "01/07/2026");
        assert_eq!(format_date(date, "%Q"), "2026-07-01");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Zürich old town", 9), "Zürich...");
        assert_eq!(truncate("abcdef", 2), "..");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(3), "───");
    }
}
