//! CSV Export functionality
//!
//! One row per expense in ledger order. The baseline columns are blank
//! when the expense had nothing to be compared with.

use std::io::Write;

use crate::error::{TripError, TripResult};
use crate::services::reconciliation::{BudgetOverview, Variance};

const HEADER: [&str; 10] = [
    "id",
    "date",
    "category",
    "description",
    "amount",
    "baseline",
    "baseline_amount",
    "difference",
    "percentage",
    "exceeds",
];

/// Export every expense with its variance
pub fn export_overview_csv<W: Write>(overview: &BudgetOverview, writer: W) -> TripResult<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(HEADER).map_err(export_error)?;

    for row in &overview.expenses {
        let (baseline, baseline_amount, percentage) = match &row.variance {
            Some(Variance::Plan(p)) => ("plan", p.planned.amount().to_string(), String::new()),
            Some(Variance::Average(a)) => (
                "average",
                a.average.amount().to_string(),
                a.percentage.map(|p| format!("{:.1}", p)).unwrap_or_default(),
            ),
            None => ("", String::new(), String::new()),
        };
        let difference = row
            .variance
            .map(|v| v.difference().amount().to_string())
            .unwrap_or_default();
        let exceeds = row
            .variance
            .map(|v| v.exceeds().to_string())
            .unwrap_or_default();

        wtr.write_record([
            row.id.as_uuid().to_string(),
            row.date.to_string(),
            row.category.key().to_string(),
            row.description.clone(),
            row.amount.amount().to_string(),
            baseline.to_string(),
            baseline_amount,
            difference,
            percentage,
            exceeds,
        ])
        .map_err(export_error)?;
    }

    wtr.flush().map_err(|e| TripError::Export(e.to_string()))?;
    Ok(())
}

fn export_error(err: ::csv::Error) -> TripError {
    TripError::Export(err.to_string())
}
