//! Budget CLI commands
//!
//! Read-only cost reports over a single trip.

use std::io::Write;

use clap::Subcommand;

use super::parse::parse_amount;
use super::CliContext;
use crate::display::{
    format_budget_check, format_budget_summary, format_category_breakdown, format_high_cost,
    format_total,
};
use crate::error::TripResult;
use crate::services::budget;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Total cost of all activities
    Total {
        /// Trip destination or ID
        trip: String,
    },
    /// Cost per activity category
    ByCategory {
        /// Trip destination or ID
        trip: String,
    },
    /// Activities costing more than a threshold
    HighCost {
        /// Trip destination or ID
        trip: String,
        /// Threshold amount (exclusive)
        #[arg(allow_negative_numbers = true)]
        threshold: String,
    },
    /// Check the total against a spending limit
    Check {
        /// Trip destination or ID
        trip: String,
        /// Spending limit
        #[arg(allow_negative_numbers = true)]
        limit: String,
    },
    /// Totals, category breakdown and optional limit status
    Summary {
        /// Trip destination or ID
        trip: String,
        /// Spending limit to compare against
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    ctx: &CliContext<'_>,
    cmd: BudgetCommands,
    out: &mut dyn Write,
) -> TripResult<()> {
    let symbol = ctx.symbol();

    match cmd {
        BudgetCommands::Total { trip } => {
            let trip = ctx.find_trip(&trip)?;
            let total = budget::total_cost(&trip);
            write!(out, "{}", format_total(&trip.destination, total, symbol))?;
        }

        BudgetCommands::ByCategory { trip } => {
            let trip = ctx.find_trip(&trip)?;
            let by_category = budget::cost_by_category(&trip);
            writeln!(out, "Spending by category for {}:", trip.destination)?;
            write!(out, "{}", format_category_breakdown(&by_category, symbol))?;
        }

        BudgetCommands::HighCost { trip, threshold } => {
            let threshold = parse_amount(&threshold)?;
            let trip = ctx.find_trip(&trip)?;
            let activities = budget::high_cost_activities(&trip, threshold);
            write!(out, "{}", format_high_cost(&activities, threshold, symbol))?;
        }

        BudgetCommands::Check { trip, limit } => {
            let limit = parse_amount(&limit)?;
            let trip = ctx.find_trip(&trip)?;
            let status = budget::check_limit(&trip, limit);
            let total = budget::total_cost(&trip);
            write!(out, "{}", format_budget_check(total, &status, symbol))?;
        }

        BudgetCommands::Summary { trip, limit } => {
            let limit = limit.as_deref().map(parse_amount).transpose()?;
            let trip = ctx.find_trip(&trip)?;
            let summary = budget::summarize(&trip, limit);
            write!(out, "{}", format_budget_summary(&trip.destination, &summary, symbol))?;
        }
    }

    Ok(())
}
