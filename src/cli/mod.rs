//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod activity;
pub mod budget;
pub mod country;
pub mod history;
pub mod parse;
pub mod shell;
pub mod trip;

pub use activity::{handle_activity_command, ActivityCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use country::handle_country_command;
pub use history::handle_history_command;
pub use shell::run_shell;
pub use trip::{handle_trip_command, TripCommands};

use std::io::Write;

use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::error::TripResult;
use crate::models::Trip;
use crate::services::TripService;
use crate::storage::TripStore;

/// Everything a command handler needs
pub struct CliContext<'a> {
    pub store: &'a dyn TripStore,
    pub settings: &'a Settings,
    pub audit: &'a AuditLogger,
}

impl<'a> CliContext<'a> {
    pub fn new(store: &'a dyn TripStore, settings: &'a Settings, audit: &'a AuditLogger) -> Self {
        Self {
            store,
            settings,
            audit,
        }
    }

    /// Trip service wired to the audit log when auditing is enabled
    pub fn trip_service(&self) -> TripService<'a> {
        let service = TripService::new(self.store);
        if self.settings.audit_enabled {
            service.with_audit(self.audit)
        } else {
            service
        }
    }

    /// Resolve a trip reference given on the command line
    pub fn find_trip(&self, reference: &str) -> TripResult<Trip> {
        self.trip_service().find_trip(reference)
    }

    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }
}

/// Commands available both as one-shot subcommands and inside the shell
#[derive(Subcommand)]
pub enum PlannerCommand {
    /// Trip management commands
    #[command(subcommand)]
    Trip(TripCommands),

    /// Activity commands
    #[command(subcommand, alias = "act")]
    Activity(ActivityCommands),

    /// Budget calculations for a trip
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Look up country information
    Country {
        /// Country name (e.g., "France")
        name: String,
    },

    /// Show recently recorded changes
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Run a single planner command
///
/// Command output goes to `out`; diagnostics go through `tracing`.
pub async fn dispatch(
    ctx: &CliContext<'_>,
    cmd: PlannerCommand,
    out: &mut dyn Write,
) -> TripResult<()> {
    match cmd {
        PlannerCommand::Trip(cmd) => handle_trip_command(ctx, cmd, out).await,
        PlannerCommand::Activity(cmd) => handle_activity_command(ctx, cmd, out),
        PlannerCommand::Budget(cmd) => handle_budget_command(ctx, cmd, out),
        PlannerCommand::Country { name } => handle_country_command(ctx, &name, out).await,
        PlannerCommand::History { limit } => handle_history_command(ctx.audit, limit, out),
    }
}
