//! Trip CLI commands
//!
//! Implements CLI commands for creating and inspecting trips.

use std::io::Write;

use clap::Subcommand;
use tracing::warn;

use super::parse::parse_date;
use super::CliContext;
use crate::display::{format_date, format_trip_details, format_trip_list};
use crate::enrichment::{enrich, RestCountriesClient};
use crate::error::TripResult;

/// Trip subcommands
#[derive(Subcommand)]
pub enum TripCommands {
    /// Create a new trip
    Create {
        /// Destination (e.g., "Paris")
        destination: String,
        /// First day of the trip (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,
    },
    /// List all trips
    List,
    /// Show trip details
    Show {
        /// Trip destination or ID
        trip: String,
        /// Also look up the destination country
        #[arg(short, long)]
        enrich: bool,
    },
}

/// Handle a trip command
pub async fn handle_trip_command(
    ctx: &CliContext<'_>,
    cmd: TripCommands,
    out: &mut dyn Write,
) -> TripResult<()> {
    let service = ctx.trip_service();
    let date_format = &ctx.settings.date_format;

    match cmd {
        TripCommands::Create { destination, start } => {
            let start_date = parse_date(&start)?;
            let trip = service.create_trip(&destination, start_date)?;

            writeln!(out, "Created trip: {}", trip.destination)?;
            writeln!(out, "  Starts: {}", format_date(trip.start_date, date_format))?;
            writeln!(out, "  ID: {}", trip.id)?;
        }

        TripCommands::List => {
            let trips = service.list_trips()?;
            write!(out, "{}", format_trip_list(&trips, ctx.symbol(), date_format))?;
        }

        TripCommands::Show { trip, enrich: with_country } => {
            let trip = service.find_trip(&trip)?;

            let country = if with_country {
                match RestCountriesClient::new(&ctx.settings.country_api_url) {
                    Ok(client) => enrich(&client, &trip.destination).await,
                    Err(err) => {
                        warn!(error = %err, "country lookup disabled");
                        None
                    }
                }
            } else {
                None
            };

            let details = format_trip_details(&trip, country.as_ref(), ctx.symbol(), date_format);
            write!(out, "{}", details)?;
            if with_country && country.is_none() {
                writeln!(
                    out,
                    "\n  (no country information available for '{}')",
                    trip.destination
                )?;
            }
        }
    }

    Ok(())
}
