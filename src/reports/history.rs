//! Trip history report
//!
//! Past trips with their budget outcome, most recent first.

use crate::config::Settings;
use crate::models::TripRecord;

#[derive(Debug, Clone)]
pub struct HistoryReport {
    pub records: Vec<TripRecord>,
}

impl HistoryReport {
    pub fn generate(records: &[TripRecord]) -> Self {
        let mut records = records.to_vec();
        records.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Self { records }
    }

    /// Mean savings rate over trips with a non-zero budget
    pub fn average_savings_rate(&self) -> Option<f64> {
        let rates: Vec<f64> = self.records.iter().filter_map(|r| r.savings_rate()).collect();
        if rates.is_empty() {
            return None;
        }
        Some(rates.iter().sum::<f64>() / rates.len() as f64)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        if self.records.is_empty() {
            return "No past trips recorded.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{:<24} {:<23} {:>7} {:>14} {:>14} {:>8}\n",
            "Destination", "Dates", "Length", "Budget", "Spent", "Saved"
        ));
        output.push_str(&"-".repeat(95));
        output.push('\n');

        for record in &self.records {
            let (nights, days) = record.nights_and_days();
            let saved = match record.savings_rate() {
                Some(rate) => format!("{:.1}%", rate),
                None => "n/a".to_string(),
            };
            let mark = if record.is_over_budget() { " *" } else { "" };
            output.push_str(&format!(
                "{:<24} {} ~ {} {:>7} {:>14} {:>14} {:>8}{}\n",
                format!("{} {}", record.flag, record.destination),
                record.start_date,
                record.end_date,
                format!("{}N{}D", nights, days),
                settings.format_money(record.total_budget),
                settings.format_money(record.total_expense),
                saved,
                mark
            ));
        }

        if let Some(avg) = self.average_savings_rate() {
            output.push_str(&format!("\nAverage saved: {:.1}%\n", avg));
        }
        output.push_str("* = over budget\n");
        output
    }
}
