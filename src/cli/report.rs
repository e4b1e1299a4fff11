//! CLI command for session reports
//!
//! Loads a session file, reconciles it against the reference data and
//! renders the overview to the terminal or exports it.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{TripError, TripResult};
use crate::export::{export_overview_csv, export_overview_json, export_overview_yaml};
use crate::reference::ReferenceStore;
use crate::reports::BudgetOverviewReport;
use crate::services::{SessionFile, TripSession};

/// Output format for `report`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
    Yaml,
    Csv,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Session file (JSON, or YAML with a .yaml/.yml extension)
    pub session: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Terminal)]
    pub format: ReportFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Destination key, overriding the one in the session file
    #[arg(short, long)]
    pub destination: Option<String>,
}

/// Handle the report command
pub fn handle_report_command(
    store: &ReferenceStore,
    settings: &Settings,
    args: ReportArgs,
) -> TripResult<()> {
    let mut file = SessionFile::load(&args.session)?;
    if let Some(key) = args.destination {
        file.trip.destination = Some(key);
    } else if file.trip.destination.is_none() {
        file.trip.destination = settings.default_destination.clone();
    }

    if let Some(key) = &file.trip.destination {
        store.require(key)?;
    }

    let loaded = TripSession::from_file(file, settings.allow_date_edits)?;
    if loaded.rejected_plan_rows > 0 {
        eprintln!(
            "Warning: skipped {} invalid plan row(s)",
            loaded.rejected_plan_rows
        );
    }
    if loaded.rejected_expenses > 0 {
        eprintln!(
            "Warning: skipped {} invalid expense(s)",
            loaded.rejected_expenses
        );
    }

    let report = BudgetOverviewReport::generate(&loaded.session, store);

    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                TripError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_report(&report, settings, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| TripError::Export(e.to_string()))?;
            println!("Report written to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_report(&report, settings, args.format, &mut handle)?;
        }
    }

    Ok(())
}

fn write_report<W: Write>(
    report: &BudgetOverviewReport,
    settings: &Settings,
    format: ReportFormat,
    writer: &mut W,
) -> TripResult<()> {
    match format {
        ReportFormat::Terminal => write!(writer, "{}", report.format_terminal(settings))
            .map_err(|e| TripError::Export(e.to_string())),
        ReportFormat::Json => export_overview_json(&report.trip, &report.overview, writer),
        ReportFormat::Yaml => export_overview_yaml(&report.trip, &report.overview, writer),
        ReportFormat::Csv => export_overview_csv(&report.overview, writer),
    }
}
