//! Trip display formatting
//!
//! Formats trips for terminal output in list and detail views.

use super::{format_country_info, format_date, separator, truncate};
use crate::models::{CountryInfo, Trip};
use crate::services::budget::total_cost;

const MAX_DESTINATION_WIDTH: usize = 28;

/// Format a list of trips as a table
pub fn format_trip_list(trips: &[Trip], symbol: &str, date_format: &str) -> String {
    if trips.is_empty() {
        return "No trips found.\n\nRun 'trip trip create <destination> --start YYYY-MM-DD' to plan one.\n"
            .to_string();
    }

    let dest_width = trips
        .iter()
        .map(|t| t.destination.chars().count())
        .max()
        .unwrap_or(11)
        .clamp(11, MAX_DESTINATION_WIDTH);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:<10}  {:>10}  {:>10}  {}\n",
        "Destination",
        "Start",
        "Activities",
        "Total",
        "ID",
        width = dest_width
    ));
    output.push_str(&format!(
        "{}  {}  {}  {}  {}\n",
        separator(dest_width),
        separator(10),
        separator(10),
        separator(10),
        separator(13)
    ));

    for trip in trips {
        output.push_str(&format!(
            "{:<width$}  {:<10}  {:>10}  {:>10}  {}\n",
            truncate(&trip.destination, dest_width),
            format_date(trip.start_date, date_format),
            trip.activities.len(),
            total_cost(trip).format_with_symbol(symbol),
            trip.id,
            width = dest_width
        ));
    }

    output
}

/// Format trip details, with country information when available
pub fn format_trip_details(
    trip: &Trip,
    country: Option<&CountryInfo>,
    symbol: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Trip: {}\n", trip.destination));
    output.push_str(&format!("  ID:         {}\n", trip.id));
    output.push_str(&format!(
        "  Starts:     {}\n",
        format_date(trip.start_date, date_format)
    ));
    output.push_str(&format!("  Activities: {}\n", trip.activities.len()));
    output.push_str(&format!(
        "  Total:      {}\n",
        total_cost(trip).format_with_symbol(symbol)
    ));

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        trip.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        trip.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    if let Some(info) = country {
        output.push('\n');
        output.push_str(&format_country_info(info));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_list() {
        let output = format_trip_list(&[], "$", "%Y-%m-%d");
        assert!(output.contains("No trips found"));
    }

    #[test]
    fn test_trip_list() {
        let trip = Trip::new("Paris", NaiveDate::from_ymd_opt(2026, 7, 1).unwrap());
        let output = format_trip_list(std::slice::from_ref(&trip), "$", "%d.%m.%Y");

        assert!(output.contains("Paris"));
        assert!(output.contains("01.07.2026"));
        assert!(output.contains("$0.00"));
        assert!(output.contains(&trip.id.to_string()));
    }

    #[test]
    fn test_trip_details_with_country() {
        let trip = Trip::new("Lisbon", NaiveDate::from_ymd_opt(2026, 4, 3).unwrap());
        let info = CountryInfo {
            name: "Portugal".into(),
            capital: "Lisbon".into(),
            currency: "Euro (€)".into(),
            flag: "https://flagcdn.com/w320/pt.png".into(),
            region: "Europe".into(),
            population: 10305564,
            languages: vec!["Portuguese".into()],
        };

        let plain = format_trip_details(&trip, None, "$", "%Y-%m-%d");
        assert!(plain.contains("Trip: Lisbon"));
        assert!(plain.contains("Starts:     2026-04-03"));
        assert!(!plain.contains("Country:"));

        let enriched = format_trip_details(&trip, Some(&info), "$", "%Y-%m-%d");
        assert!(enriched.contains("Country: Portugal"));
        assert!(enriched.contains("Flag:       https://flagcdn.com/w320/pt.png"));
    }
}
