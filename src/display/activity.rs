//! Activity display formatting

use chrono::NaiveDate;

use super::{format_date, separator, truncate};
use crate::models::Activity;

const MAX_NAME_WIDTH: usize = 32;

/// Format activities as a table, in the order given
pub fn format_activity_list(activities: &[&Activity], symbol: &str) -> String {
    if activities.is_empty() {
        return "No activities found.\n".to_string();
    }

    let name_width = activities
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(8)
        .clamp(8, MAX_NAME_WIDTH);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:<11}  {:<16}  {:>10}\n",
        "Activity",
        "Category",
        "Starts",
        "Cost",
        width = name_width
    ));
    output.push_str(&format!(
        "{}  {}  {}  {}\n",
        separator(name_width),
        separator(11),
        separator(16),
        separator(10)
    ));

    for activity in activities {
        output.push_str(&format!(
            "{:<width$}  {:<11}  {:<16}  {:>10}\n",
            truncate(&activity.name, name_width),
            activity.category.label(),
            activity.start_time.format("%Y-%m-%d %H:%M").to_string(),
            activity.cost.format_with_symbol(symbol),
            width = name_width
        ));
    }

    output
}

/// Format a day-by-day itinerary
pub fn format_itinerary(
    days: &[(NaiveDate, Vec<&Activity>)],
    symbol: &str,
    date_format: &str,
) -> String {
    if days.is_empty() {
        return "Nothing planned yet.\n".to_string();
    }

    let mut output = String::new();
    for (i, (day, activities)) in days.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!(
            "{} ({})\n",
            format_date(*day, date_format),
            day.format("%A")
        ));

        for (j, activity) in activities.iter().enumerate() {
            let prefix = if j == activities.len() - 1 { "└── " } else { "├── " };
            output.push_str(&format!(
                "  {}{} {} [{}] {}\n",
                prefix,
                activity.start_time.format("%H:%M"),
                activity.name,
                activity.category,
                activity.cost.format_with_symbol(symbol)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityCategory, Money};
    use chrono::NaiveDateTime;

    fn activity(name: &str, units: i64, at: &str) -> Activity {
        Activity::new(
            name,
            Money::from_units(units),
            ActivityCategory::Sightseeing,
            NaiveDateTime::parse_from_str(at, "%Y-%m-%d %H:%M").unwrap(),
        )
    }

    #[test]
    fn test_empty_list() {
        assert!(format_activity_list(&[], "$").contains("No activities found"));
    }

    #[test]
    fn test_activity_list() {
        let eiffel = activity("Eiffel Tower", 50, "2026-07-01 10:00");
        let output = format_activity_list(&[&eiffel], "€");

        assert!(output.contains("Eiffel Tower"));
        assert!(output.contains("Sightseeing"));
        assert!(output.contains("2026-07-01 10:00"));
        assert!(output.contains("€50.00"));
    }

    #[test]
    fn test_itinerary_groups_days() {
        let first = activity("Eiffel Tower", 50, "2026-07-01 10:00");
        let second = activity("Seine cruise", 20, "2026-07-01 18:30");
        let third = activity("Versailles", 25, "2026-07-02 09:00");
        let days = vec![
            (first.start_date(), vec![&first, &second]),
            (third.start_date(), vec![&third]),
        ];

        let output = format_itinerary(&days, "$", "%Y-%m-%d");
        assert!(output.contains("2026-07-01 (Wednesday)"));
        assert!(output.contains("├── 10:00 Eiffel Tower [sightseeing] $50.00"));
        assert!(output.contains("└── 18:30 Seine cruise"));
        assert!(output.contains("2026-07-02 (Thursday)"));
    }
}
