//! YAML Export functionality

use std::io::Write;

use crate::error::{TripError, TripResult};
use crate::export::json::OverviewExport;
use crate::models::TripContext;
use crate::services::reconciliation::BudgetOverview;

/// Write the overview as YAML with a short header comment
pub fn export_overview_yaml<W: Write>(
    trip: &TripContext,
    overview: &BudgetOverview,
    writer: &mut W,
) -> TripResult<()> {
    let export = OverviewExport::new(trip, overview);

    writeln!(writer, "# trip-budget overview export")
        .map_err(|e| TripError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| TripError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TripError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TripError::Export(e.to_string()))?;

    Ok(())
}
