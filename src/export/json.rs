//! JSON Export functionality

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{TripError, TripResult};
use crate::models::TripContext;
use crate::services::reconciliation::BudgetOverview;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Budget overview wrapped with export metadata
#[derive(Debug, Clone, Serialize)]
pub struct OverviewExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    pub trip: &'a TripContext,

    pub overview: &'a BudgetOverview,
}

impl<'a> OverviewExport<'a> {
    pub fn new(trip: &'a TripContext, overview: &'a BudgetOverview) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            trip,
            overview,
        }
    }
}

/// Write the overview as pretty-printed JSON
pub fn export_overview_json<W: Write>(
    trip: &TripContext,
    overview: &BudgetOverview,
    writer: &mut W,
) -> TripResult<()> {
    let export = OverviewExport::new(trip, overview);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TripError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TripError::Export(e.to_string()))?;
    Ok(())
}
