//! Operator input parsing
//!
//! Raw command-line strings are turned into validated values here, so the
//! engines below never see malformed input. Every failure is a
//! [`TripError::Validation`].

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{TripError, TripResult};
use crate::models::{ActivityCategory, Money};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> TripResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        TripError::Validation(format!(
            "Invalid date '{}'. Use YYYY-MM-DD (e.g., 2026-07-01)",
            input
        ))
    })
}

/// Parse a `YYYY-MM-DD HH:MM` timestamp (a `T` separator is accepted too)
pub fn parse_datetime(input: &str) -> TripResult<NaiveDateTime> {
    let trimmed = input.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            TripError::Validation(format!(
                "Invalid start time '{}'. Use \"YYYY-MM-DD HH:MM\" (e.g., \"2026-07-01 14:30\")",
                input
            ))
        })
}

/// Parse any monetary amount, including negative ones
pub fn parse_amount(input: &str) -> TripResult<Money> {
    Money::parse(input).map_err(|e| {
        TripError::Validation(format!(
            "{}. Use a number like '50', '49.99' or '$49.99'",
            e
        ))
    })
}

/// Parse an activity cost, which may not be negative
pub fn parse_cost(input: &str) -> TripResult<Money> {
    let cost = parse_amount(input)?;
    if cost.is_negative() {
        return Err(TripError::Validation(format!(
            "Cost cannot be negative: {}",
            input.trim()
        )));
    }
    Ok(cost)
}

/// Parse a category name, case-insensitively
pub fn parse_category(input: &str) -> TripResult<ActivityCategory> {
    input
        .parse::<ActivityCategory>()
        .map_err(|e| TripError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2026-07-01").unwrap(),
            NaiveDate::from_ymd_opt(2026, 7, 1).unwrap()
        );
        assert!(parse_date("07/01/2026").unwrap_err().is_validation());
        assert!(parse_date("2026-02-30").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_datetime() {
        let expected = NaiveDate::from_ymd_opt(2026, 7, 1)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(parse_datetime("2026-07-01 14:30").unwrap(), expected);
        assert_eq!(parse_datetime("2026-07-01T14:30").unwrap(), expected);
        assert_eq!(parse_datetime(" 2026-07-01 14:30:00 ").unwrap(), expected);
        assert!(parse_datetime("2026-07-01").unwrap_err().is_validation());
        assert!(parse_datetime("tomorrow at noon").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_cost() {
        assert_eq!(parse_cost("50").unwrap(), Money::from_units(50));
        assert_eq!(parse_cost("$12.5").unwrap(), Money::from_cents(1250));
        assert_eq!(parse_cost("0").unwrap(), Money::zero());
        assert!(parse_cost("-5").unwrap_err().is_validation());
        assert!(parse_cost("fifty").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_amount_allows_negative() {
        assert_eq!(parse_amount("-1").unwrap(), Money::from_units(-1));
        assert!(parse_amount("").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(
            parse_category("Outdoors").unwrap(),
            ActivityCategory::Outdoors
        );
        let err = parse_category("nightlife").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("nightlife"));
    }
}
