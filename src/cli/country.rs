//! Country lookup command

use std::io::Write;

use super::CliContext;
use crate::display::format_country_info;
use crate::enrichment::{CountryLookup, LookupError, RestCountriesClient};
use crate::error::TripResult;

/// Look a country up and print it
///
/// An unknown country and a failed fetch are reported differently, but
/// neither fails the command.
pub async fn handle_country_command(
    ctx: &CliContext<'_>,
    name: &str,
    out: &mut dyn Write,
) -> TripResult<()> {
    let client = RestCountriesClient::new(&ctx.settings.country_api_url)?;

    match client.lookup(name).await {
        Ok(info) => write!(out, "{}", format_country_info(&info))?,
        Err(LookupError::NotFound(_)) => {
            writeln!(out, "No country information found for '{}'.", name.trim())?
        }
        Err(LookupError::Fetch(reason)) => {
            writeln!(out, "Country information is unavailable right now ({}).", reason)?
        }
    }

    Ok(())
}
