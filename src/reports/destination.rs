//! Destination profile and listing reports

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::error::TripResult;
use crate::models::ReferenceDestination;
use crate::reference::ReferenceStore;
use crate::services::comparison::{CategoryShare, ComparisonService};

#[derive(Tabled)]
struct DestinationRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Destination")]
    name: String,
    #[tabled(rename = "Travelers")]
    travelers: u32,
    #[tabled(rename = "Avg Days")]
    days: u32,
    #[tabled(rename = "Avg Total")]
    total: String,
    #[tabled(rename = "Season")]
    season: String,
}

/// All known destinations in one table
#[derive(Debug, Clone)]
pub struct DestinationListReport {
    pub destinations: Vec<ReferenceDestination>,
}

impl DestinationListReport {
    pub fn generate(store: &ReferenceStore) -> Self {
        Self {
            destinations: store.iter().cloned().collect(),
        }
    }

    pub fn format_terminal(&self, settings: &Settings) -> String {
        if self.destinations.is_empty() {
            return "No destinations available.\n".to_string();
        }
        let rows = self.destinations.iter().map(|d| DestinationRow {
            key: d.key.clone(),
            name: d.to_string(),
            travelers: d.total_travelers,
            days: d.average_days,
            total: settings.format_money(d.average_total_cost),
            season: d.popular_season.clone(),
        });
        let mut output = Table::new(rows).with(Style::modern()).to_string();
        output.push('\n');
        output
    }
}

/// Peer statistics, cost breakdown, reviews and courses for one destination
#[derive(Debug, Clone)]
pub struct DestinationReport {
    pub destination: ReferenceDestination,
    pub breakdown: Vec<CategoryShare>,
}

impl DestinationReport {
    pub fn generate(store: &ReferenceStore, key: &str) -> TripResult<Self> {
        let destination = store.require(key)?.clone();
        let breakdown = ComparisonService::breakdown(&destination);
        Ok(Self {
            destination,
            breakdown,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let d = &self.destination;
        let mut output = String::new();

        output.push_str(&format!("{}\n", d));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{} travelers, {} days on average, best in {}\n",
            d.total_travelers, d.average_days, d.popular_season
        ));
        output.push_str(&format!(
            "Average total: {}\n\n",
            settings.format_money(d.average_total_cost)
        ));

        output.push_str("Average Cost Breakdown\n");
        for share in &self.breakdown {
            let bar = "#".repeat((share.share / 5.0).round() as usize);
            output.push_str(&format!(
                "  {} {:<24} {:>14} {:>5.1}% {}\n",
                share.category.icon(),
                share.category.label(),
                settings.format_money(share.cost),
                share.share,
                bar
            ));
        }

        if !d.recent_reviews.is_empty() {
            output.push_str("\nRecent Reviews\n");
            for review in &d.recent_reviews {
                output.push_str(&format!(
                    "  {} ({}, {}) {}\n    {}\n",
                    review.traveler,
                    review.date,
                    review.duration,
                    settings.format_money(review.total_cost),
                    review.comment
                ));
            }
        }

        if !d.recommended_courses.is_empty() {
            output.push_str("\nRecommended Courses\n");
            for course in &d.recommended_courses {
                output.push_str(&format!(
                    "  {} [{}] {} ({:.1}/5)\n",
                    course.title,
                    course.duration,
                    settings.format_money(course.estimated_cost),
                    course.rating
                ));
                for stop in &course.itinerary {
                    output.push_str(&format!(
                        "    Day {}: {} - {} ({})\n",
                        stop.day,
                        stop.location,
                        stop.activity,
                        settings.format_money(stop.cost)
                    ));
                }
                output.push_str(&format!(
                    "    Itinerary cost: {}\n",
                    settings.format_money(course.itinerary_cost())
                ));
            }
        }

        output
    }
}
