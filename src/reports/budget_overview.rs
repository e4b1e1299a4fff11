//! Budget Overview Report
//!
//! Renders a reconciled [`BudgetOverview`]: headline totals, the plan table
//! against peer averages, every expense with its variance, and daily and
//! per-category breakdowns.

use crate::config::Settings;
use crate::models::TripContext;
use crate::reference::ReferenceStore;
use crate::services::reconciliation::{BudgetOverview, Variance};
use crate::services::session::TripSession;

/// Budget overview for one session
#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    pub trip: TripContext,
    pub overview: BudgetOverview,
    /// Display name of the matched destination
    pub destination_name: Option<String>,
}

impl BudgetOverviewReport {
    /// Reconcile the session and keep the result for rendering
    pub fn generate(session: &TripSession, store: &ReferenceStore) -> Self {
        let overview = session.reconcile(store);
        let destination_name = overview
            .destination
            .as_deref()
            .and_then(|key| store.get(key))
            .map(|d| d.to_string());

        Self {
            trip: session.trip.clone(),
            overview,
            destination_name,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let o = &self.overview;
        let money = |m| settings.format_money(m);
        let mut output = String::new();

        let title = self
            .destination_name
            .clone()
            .unwrap_or_else(|| "Trip".to_string());
        match self.trip.duration_label() {
            Some(label) => output.push_str(&format!("Budget Overview - {} ({})\n", title, label)),
            None => output.push_str(&format!("Budget Overview - {}\n", title)),
        }
        output.push_str(&"=".repeat(80));
        output.push('\n');

        if let (Some(first), Some(last)) = (o.trip_dates.first(), o.trip_dates.last()) {
            output.push_str(&format!("Dates:           {} to {}\n", first, last));
        }
        output.push_str(&format!("Total Budget:    {}\n", money(o.total_budget)));
        output.push_str(&format!(
            "Planned:         {} ({:.1}%)\n",
            money(o.total_planned),
            o.planned_percent
        ));
        output.push_str(&format!(
            "Spent:           {} ({:.1}%)\n",
            money(o.total_spent),
            o.spent_percent
        ));
        let remaining = if o.is_over_budget {
            format!("{} OVER BUDGET", money(o.remaining_budget))
        } else {
            money(o.remaining_budget)
        };
        output.push_str(&format!("Remaining:       {}\n", remaining));
        output.push_str(&format!("Unplanned:       {}\n", money(o.unplanned_budget)));
        if let Some(daily) = o.average_daily_budget {
            output.push_str(&format!("Per Day:         {}\n", money(daily)));
        }
        if let Some(allowance) = o.daily_allowance {
            output.push_str(&format!("Left Per Day:    {}\n", money(allowance)));
        }

        if !o.plan.is_empty() {
            output.push_str(&format!(
                "\n{:<26} {:>14} {:>14} {:>14} {:>8}\n",
                "Plan", "Planned", "Spent", "vs Average", "%"
            ));
            output.push_str(&"-".repeat(80));
            output.push('\n');
            for row in &o.plan {
                let (diff, pct) = match &row.average {
                    Some(avg) => (money(avg.difference), format_percentage(avg.percentage)),
                    None => ("-".to_string(), "-".to_string()),
                };
                output.push_str(&format!(
                    "{:<26} {:>14} {:>14} {:>14} {:>8}\n",
                    row.category.label(),
                    money(row.planned),
                    money(row.spent),
                    diff,
                    pct
                ));
            }
        }

        output.push_str(&format!(
            "\n{:<10} {:<24} {:<24} {:>12} {:>10}\n",
            "Date", "Category", "Description", "Amount", "Variance"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');
        if o.expenses.is_empty() {
            output.push_str("No expenses recorded.\n");
        }
        for row in &o.expenses {
            output.push_str(&format!(
                "{:<10} {:<24} {:<24} {:>12} {:>10}\n",
                row.date,
                row.category.label(),
                truncate(&row.description, 24),
                money(row.amount),
                format_variance(row.variance.as_ref())
            ));
        }

        if !o.by_date.is_empty() {
            output.push_str("\nBy Date\n");
            for day in &o.by_date {
                output.push_str(&format!(
                    "  {:<12} {:>14}  ({} item{})\n",
                    day.date,
                    money(day.total),
                    day.count,
                    if day.count == 1 { "" } else { "s" }
                ));
            }
        }

        if !o.by_category.is_empty() {
            output.push_str("\nBy Category\n");
            for bucket in &o.by_category {
                output.push_str(&format!(
                    "  {} {:<24} {:>14} {:>6.1}%\n",
                    bucket.category.icon(),
                    bucket.category.label(),
                    money(bucket.total),
                    bucket.total.percent_of(o.total_spent)
                ));
            }
        }

        output.push_str("\n+ = above plan or peer average\n");
        output
    }
}

fn format_percentage(pct: Option<f64>) -> String {
    match pct {
        Some(p) => format!("{:+.1}%", p),
        None => "n/a".to_string(),
    }
}

fn format_variance(variance: Option<&Variance>) -> String {
    match variance {
        None => "-".to_string(),
        Some(Variance::Plan(p)) => {
            let mark = if p.is_over { "+" } else { "" };
            format!("{}{} plan", mark, p.difference)
        }
        Some(Variance::Average(a)) => match a.percentage {
            Some(_) => format!("{} avg", format_percentage(a.percentage)),
            None => format!("+{} avg", a.difference.abs()),
        },
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
