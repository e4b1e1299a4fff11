use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use trip_budget::cli::{
    handle_categories_command, handle_compare_command, handle_destination_command,
    handle_destinations_command, handle_history_command, handle_report_command,
    load_reference_store, ReportArgs,
};
use trip_budget::config::{paths::TripPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "trip-budget",
    version,
    about = "Travel budget planning, expense tracking and peer cost comparison",
    long_about = "trip-budget reconciles a trip's budget, per-category plan and logged \
                  expenses, and measures them against what other travelers spent \
                  at the same destination."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the expense categories
    Categories,

    /// List reference destinations
    Destinations,

    /// Show peer statistics, reviews and courses for a destination
    Destination {
        /// Destination key (e.g. "tokyo")
        key: String,
    },

    /// Compare the average costs of two destinations
    Compare {
        /// First destination key
        left: String,
        /// Second destination key; percentages are relative to it
        right: String,
        /// "About the same" threshold in percent
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Reconcile a session file and print or export the overview
    Report(ReportArgs),

    /// List past trips recorded in a session file
    History {
        /// Session file (JSON, or YAML with a .yaml/.yml extension)
        session: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    trip_budget::init_tracing();

    let cli = Cli::parse();

    let paths = TripPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Categories) => handle_categories_command()?,
        Some(Commands::Destinations) => {
            let store = load_reference_store(&paths, &settings)?;
            handle_destinations_command(&store, &settings)?;
        }
        Some(Commands::Destination { key }) => {
            let store = load_reference_store(&paths, &settings)?;
            handle_destination_command(&store, &settings, &key)?;
        }
        Some(Commands::Compare {
            left,
            right,
            threshold,
        }) => {
            let store = load_reference_store(&paths, &settings)?;
            handle_compare_command(&store, &settings, &left, &right, threshold)?;
        }
        Some(Commands::Report(args)) => {
            let store = load_reference_store(&paths, &settings)?;
            handle_report_command(&store, &settings, args)?;
        }
        Some(Commands::History { session }) => handle_history_command(&settings, &session)?,
        Some(Commands::Config) => {
            println!("trip-budget Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            if paths.is_initialized() {
                println!("Settings file:    {}", paths.settings_file().display());
            } else {
                println!(
                    "Settings file:    {} (not created, using defaults)",
                    paths.settings_file().display()
                );
            }
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Symbol after amount:  {}", settings.currency_suffix);
            println!(
                "  Default destination:  {}",
                settings.default_destination.as_deref().unwrap_or("(none)")
            );
            match &settings.reference_data {
                Some(path) => println!("  Reference data:       {}", path.display()),
                None if paths.reference_file().exists() => println!(
                    "  Reference data:       {}",
                    paths.reference_file().display()
                ),
                None => println!("  Reference data:       (built-in)"),
            }
            println!("  Allow date edits:     {}", settings.allow_date_edits);
            println!(
                "  Same threshold:       {}%",
                settings.same_threshold_percent
            );
        }
        None => {
            println!("trip-budget - Travel budget planning");
            println!();
            println!("Run 'trip-budget --help' for usage information.");
        }
    }

    Ok(())
}
