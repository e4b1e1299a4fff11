//! Destination comparison report

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::error::TripResult;
use crate::reference::ReferenceStore;
use crate::services::comparison::{ComparisonService, CostDifference, DestinationComparison};

#[derive(Tabled)]
struct DifferenceRow {
    #[tabled(rename = "Category")]
    subject: String,
    #[tabled(rename = "Left")]
    left: String,
    #[tabled(rename = "Right")]
    right: String,
    #[tabled(rename = "Diff %")]
    percent: String,
    #[tabled(rename = "Result")]
    standing: String,
}

/// Side-by-side comparison of two destinations
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub left_name: String,
    pub right_name: String,
    pub comparison: DestinationComparison,
}

impl ComparisonReport {
    /// Compare two destinations by key
    pub fn generate(
        store: &ReferenceStore,
        service: &ComparisonService,
        left: &str,
        right: &str,
    ) -> TripResult<Self> {
        let a = store.require(left)?;
        let b = store.require(right)?;
        Ok(Self {
            left_name: a.to_string(),
            right_name: b.to_string(),
            comparison: service.compare(a, b),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let row = |d: &CostDifference| DifferenceRow {
            subject: d.subject.to_string(),
            left: settings.format_money(d.left),
            right: settings.format_money(d.right),
            percent: d
                .percent_difference
                .map(|p| format!("{:.1}%", p))
                .unwrap_or_else(|| "n/a".to_string()),
            standing: d.standing.to_string(),
        };

        let rows: Vec<DifferenceRow> = self
            .comparison
            .categories
            .iter()
            .chain(std::iter::once(&self.comparison.total))
            .map(row)
            .collect();

        let mut output = format!(
            "{} vs {}\n(percentages relative to {})\n\n",
            self.left_name, self.right_name, self.right_name
        );
        output.push_str(&Table::new(rows).with(Style::modern()).to_string());
        output.push('\n');
        output
    }
}
