use anyhow::Result;
use clap::{Parser, Subcommand};

use trip_planner::audit::AuditLogger;
use trip_planner::cli::{dispatch, run_shell, CliContext, PlannerCommand};
use trip_planner::config::{paths::TripPaths, settings::Settings};
use trip_planner::storage::{init, JsonFileStore};

#[derive(Parser)]
#[command(
    name = "trip",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based trip planner",
    long_about = "Plan trips as a list of timed activities, keep an eye on what \
                  they cost, and look up the country you are heading to."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Start an interactive shell
    #[command(alias = "repl")]
    Shell,

    #[command(flatten)]
    Planner(PlannerCommand),
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TripPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Trip Planner - plan activities and budgets for your trips");
        println!();
        println!("Run 'trip --help' for usage information.");
        println!("Run 'trip shell' to start the interactive shell.");
        return Ok(());
    };

    match command {
        Commands::Init => {
            println!("Initializing trip planner at: {}", paths.base_dir().display());
            init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'trip trip create <destination> --start YYYY-MM-DD' to plan a trip.");
        }
        Commands::Config => {
            println!("Trip Planner Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Trips file:     {}", paths.trips_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!(
                "Initialized:    {}",
                if init::needs_initialization(&paths) { "No" } else { "Yes" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Country API:     {}", settings.country_api_url);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        Commands::Shell => {
            paths.ensure_directories()?;
            let store = JsonFileStore::new(paths.trips_file());
            let audit = AuditLogger::new(paths.audit_log());
            let ctx = CliContext::new(&store, &settings, &audit);

            let stdin = std::io::stdin();
            run_shell(&ctx, stdin.lock(), std::io::stdout()).await?;
        }
        Commands::Planner(cmd) => {
            paths.ensure_directories()?;
            let store = JsonFileStore::new(paths.trips_file());
            let audit = AuditLogger::new(paths.audit_log());
            let ctx = CliContext::new(&store, &settings, &audit);

            let mut stdout = std::io::stdout();
            dispatch(&ctx, cmd, &mut stdout).await?;
        }
    }

    Ok(())
}
