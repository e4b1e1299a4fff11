//! Reference destination data
//!
//! Static peer statistics for a travel location. Records are validated once
//! when a dataset is loaded and are immutable afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CanonicalCategory;
use super::money::Money;

/// Average spend per category reported by previous travelers
///
/// There is deliberately no slot for [`CanonicalCategory::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AverageCosts {
    pub flight: Money,
    pub accommodation: Money,
    pub food: Money,
    pub transport: Money,
    pub attraction: Money,
    pub shopping: Money,
}

impl AverageCosts {
    /// Average for a category, or `None` for `other`
    pub fn get(&self, category: CanonicalCategory) -> Option<Money> {
        match category {
            CanonicalCategory::Flight => Some(self.flight),
            CanonicalCategory::Accommodation => Some(self.accommodation),
            CanonicalCategory::Food => Some(self.food),
            CanonicalCategory::Transport => Some(self.transport),
            CanonicalCategory::Attraction => Some(self.attraction),
            CanonicalCategory::Shopping => Some(self.shopping),
            CanonicalCategory::Other => None,
        }
    }

    /// Iterate categories in display order
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalCategory, Money)> + '_ {
        CanonicalCategory::averaged()
            .iter()
            .filter_map(move |c| self.get(*c).map(|cost| (*c, cost)))
    }

    /// Sum of the per-category averages
    ///
    /// This is not guaranteed to match a destination's `average_total_cost`.
    pub fn sum(&self) -> Money {
        self.iter().map(|(_, cost)| cost).sum()
    }
}

/// A past traveler's trip summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerReview {
    pub traveler: String,
    pub date: String,
    /// Free-form duration label such as "4 nights / 5 days"
    pub duration: String,
    pub total_cost: Money,
    pub comment: String,
}

/// One day of a recommended itinerary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryStop {
    pub day: u32,
    pub location: String,
    pub activity: String,
    pub description: String,
    pub cost: Money,
}

/// A recommended course through a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub estimated_cost: Money,
    pub rating: f32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryStop>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl Course {
    /// Total of the per-stop costs
    pub fn itinerary_cost(&self) -> Money {
        self.itinerary.iter().map(|stop| stop.cost).sum()
    }
}

/// Peer statistics for one destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDestination {
    /// Lookup key, e.g. "tokyo"
    pub key: String,
    pub name: String,
    pub flag: String,
    pub total_travelers: u32,
    pub average_days: u32,
    pub average_total_cost: Money,
    pub popular_season: String,
    pub average_costs: AverageCosts,
    #[serde(default)]
    pub recent_reviews: Vec<PeerReview>,
    #[serde(default)]
    pub recommended_courses: Vec<Course>,
}

impl ReferenceDestination {
    /// Average cost for a category, `None` when the category has no average
    pub fn average_for(&self, category: CanonicalCategory) -> Option<Money> {
        self.average_costs.get(category)
    }

    /// Check the record's invariants
    pub fn validate(&self) -> Result<(), ReferenceValidationError> {
        if self.key.trim().is_empty() {
            return Err(ReferenceValidationError::EmptyKey);
        }
        if self.name.trim().is_empty() {
            return Err(ReferenceValidationError::EmptyName(self.key.clone()));
        }
        if self.average_total_cost.is_negative() {
            return Err(ReferenceValidationError::NegativeTotal(self.key.clone()));
        }
        if let Some((category, _)) = self.average_costs.iter().find(|(_, c)| c.is_negative()) {
            return Err(ReferenceValidationError::NegativeAverage {
                destination: self.key.clone(),
                category,
            });
        }
        for course in &self.recommended_courses {
            if !(0.0..=5.0).contains(&course.rating) {
                return Err(ReferenceValidationError::InvalidRating {
                    destination: self.key.clone(),
                    course: course.title.clone(),
                });
            }
            if course.estimated_cost.is_negative()
                || course.itinerary.iter().any(|s| s.cost.is_negative())
            {
                return Err(ReferenceValidationError::NegativeCourseCost {
                    destination: self.key.clone(),
                    course: course.title.clone(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for ReferenceDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.flag, self.name)
    }
}

/// Reasons a reference record is refused at load time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceValidationError {
    EmptyKey,
    EmptyName(String),
    DuplicateKey(String),
    NegativeTotal(String),
    NegativeAverage {
        destination: String,
        category: CanonicalCategory,
    },
    InvalidRating {
        destination: String,
        course: String,
    },
    NegativeCourseCost {
        destination: String,
        course: String,
    },
}

impl fmt::Display for ReferenceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "Destination key cannot be empty"),
            Self::EmptyName(key) => write!(f, "Destination '{}' has no name", key),
            Self::DuplicateKey(key) => write!(f, "Destination '{}' is defined twice", key),
            Self::NegativeTotal(key) => {
                write!(f, "Destination '{}' has a negative average total", key)
            }
            Self::NegativeAverage {
                destination,
                category,
            } => write!(
                f,
                "Destination '{}' has a negative average for {}",
                destination,
                category.key()
            ),
            Self::InvalidRating {
                destination,
                course,
            } => write!(
                f,
                "Course '{}' in '{}' has a rating outside 0-5",
                course, destination
            ),
            Self::NegativeCourseCost {
                destination,
                course,
            } => write!(
                f,
                "Course '{}' in '{}' has a negative cost",
                course, destination
            ),
        }
    }
}

impl std::error::Error for ReferenceValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn costs() -> AverageCosts {
        AverageCosts {
            flight: Money::new(350_000),
            accommodation: Money::new(480_000),
            food: Money::new(380_000),
            transport: Money::new(120_000),
            attraction: Money::new(200_000),
            shopping: Money::new(150_000),
        }
    }

    fn destination() -> ReferenceDestination {
        ReferenceDestination {
            key: "tokyo".into(),
            name: "Tokyo, Japan".into(),
            flag: "🇯🇵".into(),
            total_travelers: 1247,
            average_days: 5,
            average_total_cost: Money::new(1_580_000),
            popular_season: "Spring/Autumn".into(),
            average_costs: costs(),
            recent_reviews: Vec::new(),
            recommended_courses: Vec::new(),
        }
    }

    #[test]
    fn test_average_lookup() {
        let c = costs();
        assert_eq!(c.get(CanonicalCategory::Flight), Some(Money::new(350_000)));
        assert_eq!(c.get(CanonicalCategory::Other), None);
        assert_eq!(c.iter().count(), 6);
    }

    #[test]
    fn test_average_sum_is_independent_of_total() {
        let d = destination();
        assert_eq!(d.average_costs.sum(), Money::new(1_680_000));
        assert_ne!(d.average_costs.sum(), d.average_total_cost);
    }

    #[test]
    fn test_validate_ok() {
        assert!(destination().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_average() {
        let mut d = destination();
        d.average_costs.food = Money::new(-1);
        assert_eq!(
            d.validate(),
            Err(ReferenceValidationError::NegativeAverage {
                destination: "tokyo".into(),
                category: CanonicalCategory::Food,
            })
        );
    }

    #[test]
    fn test_validate_rejects_bad_rating() {
        let mut d = destination();
        d.recommended_courses.push(Course {
            title: "Too good".into(),
            description: String::new(),
            duration: String::new(),
            estimated_cost: Money::new(1),
            rating: 7.5,
            tags: Vec::new(),
            itinerary: Vec::new(),
            tips: Vec::new(),
        });
        assert!(matches!(
            d.validate(),
            Err(ReferenceValidationError::InvalidRating { .. })
        ));
    }

    #[test]
    fn test_unknown_average_category_is_refused() {
        let json = r#"{"flight":1,"accommodation":1,"food":1,"transport":1,
            "attraction":1,"shopping":1,"other":1}"#;
        assert!(serde_json::from_str::<AverageCosts>(json).is_err());
    }

    #[test]
    fn test_itinerary_cost() {
        let course = Course {
            title: "Classic".into(),
            description: String::new(),
            duration: "4 nights / 5 days".into(),
            estimated_cost: Money::new(1_450_000),
            rating: 4.8,
            tags: vec!["first visit".into()],
            itinerary: vec![
                ItineraryStop {
                    day: 1,
                    location: "Asakusa".into(),
                    activity: "Culture".into(),
                    description: String::new(),
                    cost: Money::new(25_000),
                },
                ItineraryStop {
                    day: 2,
                    location: "Shibuya".into(),
                    activity: "Shopping".into(),
                    description: String::new(),
                    cost: Money::new(80_000),
                },
            ],
            tips: Vec::new(),
        };
        assert_eq!(course.itinerary_cost(), Money::new(105_000));
    }
}
