//! Activity CLI commands
//!
//! Adding activities to a trip and viewing them filtered, sorted or laid
//! out day by day.

use std::io::Write;

use clap::Subcommand;

use super::parse::{parse_category, parse_cost, parse_date, parse_datetime};
use super::CliContext;
use crate::display::{format_activity_list, format_itinerary};
use crate::error::TripResult;
use crate::services::itinerary;
use crate::services::NewActivity;

/// Activity subcommands
#[derive(Subcommand)]
pub enum ActivityCommands {
    /// Add an activity to a trip
    Add {
        /// Trip destination or ID
        trip: String,
        /// Activity name
        name: String,
        /// Cost (e.g., "50" or "49.99")
        #[arg(short, long, allow_negative_numbers = true)]
        cost: String,
        /// Category (outdoors, culinary, sightseeing)
        #[arg(short = 'g', long)]
        category: String,
        /// Start time ("YYYY-MM-DD HH:MM")
        #[arg(short, long)]
        at: String,
    },
    /// List a trip's activities
    List {
        /// Trip destination or ID
        trip: String,
        /// Only activities in this category
        #[arg(short = 'g', long, conflicts_with_all = ["date", "sorted"])]
        category: Option<String>,
        /// Only activities starting on this day (YYYY-MM-DD)
        #[arg(short, long, conflicts_with = "sorted")]
        date: Option<String>,
        /// Order by start time
        #[arg(short, long)]
        sorted: bool,
    },
    /// Show the trip's activities grouped by day
    Itinerary {
        /// Trip destination or ID
        trip: String,
    },
}

/// Handle an activity command
pub fn handle_activity_command(
    ctx: &CliContext<'_>,
    cmd: ActivityCommands,
    out: &mut dyn Write,
) -> TripResult<()> {
    match cmd {
        ActivityCommands::Add {
            trip,
            name,
            cost,
            category,
            at,
        } => {
            // Validate everything before touching storage
            let input = NewActivity {
                name,
                cost: parse_cost(&cost)?,
                category: parse_category(&category)?,
                start_time: parse_datetime(&at)?,
            };

            let service = ctx.trip_service();
            let trip = service.find_trip(&trip)?;
            let activity = service.add_activity(trip.id, input)?;

            writeln!(out, "Added activity to {}: {}", trip.destination, activity.name)?;
            writeln!(out, "  Category: {}", activity.category.label())?;
            writeln!(
                out,
                "  Cost: {}",
                activity.cost.format_with_symbol(ctx.symbol())
            )?;
            writeln!(
                out,
                "  Starts: {}",
                activity.start_time.format("%Y-%m-%d %H:%M")
            )?;
            writeln!(out, "  ID: {}", activity.id)?;
        }

        ActivityCommands::List {
            trip,
            category,
            date,
            sorted,
        } => {
            let category = category.as_deref().map(parse_category).transpose()?;
            let date = date.as_deref().map(parse_date).transpose()?;
            let trip = ctx.find_trip(&trip)?;

            let activities = match (category, date) {
                (Some(category), _) => itinerary::filter_by_category(&trip, category),
                (None, Some(date)) => itinerary::filter_by_date(&trip, date),
                (None, None) if sorted => itinerary::sorted_by_start_time(&trip),
                (None, None) => trip.activities.iter().collect(),
            };

            write!(out, "{}", format_activity_list(&activities, ctx.symbol()))?;
        }

        ActivityCommands::Itinerary { trip } => {
            let trip = ctx.find_trip(&trip)?;
            let days = itinerary::group_by_day(&trip);

            writeln!(out, "Itinerary for {}", trip.destination)?;
            writeln!(out)?;
            let itinerary = format_itinerary(&days, ctx.symbol(), &ctx.settings.date_format);
            write!(out, "{}", itinerary)?;
        }
    }

    Ok(())
}
