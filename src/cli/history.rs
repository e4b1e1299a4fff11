//! CLI command for the trip history view

use std::path::Path;

use crate::config::Settings;
use crate::error::TripResult;
use crate::reports::HistoryReport;
use crate::services::SessionFile;

/// Print the past trips recorded in a session file
pub fn handle_history_command(settings: &Settings, session: &Path) -> TripResult<()> {
    let file = SessionFile::load(session)?;
    print!(
        "{}",
        HistoryReport::generate(&file.history).format_terminal(settings)
    );
    Ok(())
}
