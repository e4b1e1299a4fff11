//! Canonical expense categories and the category normalizer
//!
//! Every expense, plan row and reference average is keyed by a
//! [`CanonicalCategory`]. Display labels exist for presentation only and
//! are never used as a join key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of expense categories
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalCategory {
    Flight,
    Accommodation,
    Food,
    Transport,
    Attraction,
    Shopping,
    #[default]
    Other,
}

impl CanonicalCategory {
    /// All categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Flight,
            Self::Accommodation,
            Self::Food,
            Self::Transport,
            Self::Attraction,
            Self::Shopping,
            Self::Other,
        ]
    }

    /// Categories that carry a peer average in reference data
    pub fn averaged() -> &'static [Self] {
        &Self::all()[..6]
    }

    /// The selection value used by input forms
    pub fn key(&self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::Accommodation => "accommodation",
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Attraction => "attraction",
            Self::Shopping => "shopping",
            Self::Other => "other",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Flight => "Flights",
            Self::Accommodation => "Accommodation",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Attraction => "Sightseeing/Activities",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Flight => "✈️",
            Self::Accommodation => "🏨",
            Self::Food => "🍽️",
            Self::Transport => "🚇",
            Self::Attraction => "🎭",
            Self::Shopping => "🛍️",
            Self::Other => "💰",
        }
    }

    /// Resolve a selection value or label to a category
    ///
    /// Matching is case-insensitive against both keys and labels. Anything
    /// unrecognized lands in [`CanonicalCategory::Other`].
    pub fn from_selection(input: &str) -> Self {
        Self::lookup(input).unwrap_or(Self::Other)
    }

    /// Strict lookup that reports a miss instead of defaulting
    pub fn lookup(input: &str) -> Option<Self> {
        let needle = input.trim();
        if needle.is_empty() {
            return None;
        }
        Self::all().iter().copied().find(|c| {
            c.key().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle)
        })
    }

    /// Selection value -> display label
    pub fn resolve_label(selection_value: &str) -> &'static str {
        Self::from_selection(selection_value).label()
    }

    /// Display label -> selection value, falling back to `other`
    pub fn resolve_value(label: &str) -> &'static str {
        Self::from_selection(label).key()
    }
}

impl fmt::Display for CanonicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CanonicalCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selection(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_value_round_trip() {
        for category in CanonicalCategory::all() {
            let label = CanonicalCategory::resolve_label(category.key());
            assert_eq!(label, category.label());
            assert_eq!(CanonicalCategory::resolve_value(label), category.key());
        }
    }

    #[test]
    fn test_unknown_input_falls_back_to_other() {
        assert_eq!(CanonicalCategory::resolve_value("Souvenirs"), "other");
        assert_eq!(CanonicalCategory::resolve_label("snacks"), "Other");
        assert_eq!(CanonicalCategory::from_selection(""), CanonicalCategory::Other);
        assert_eq!(CanonicalCategory::lookup("souvenirs"), None);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            CanonicalCategory::from_selection("  FLIGHT "),
            CanonicalCategory::Flight
        );
        assert_eq!(
            CanonicalCategory::from_selection("sightseeing/activities"),
            CanonicalCategory::Attraction
        );
    }

    #[test]
    fn test_averaged_excludes_other() {
        assert_eq!(CanonicalCategory::averaged().len(), 6);
        assert!(!CanonicalCategory::averaged().contains(&CanonicalCategory::Other));
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&CanonicalCategory::Attraction).unwrap();
        assert_eq!(json, "\"attraction\"");
        let back: CanonicalCategory = serde_json::from_str("\"shopping\"").unwrap();
        assert_eq!(back, CanonicalCategory::Shopping);
    }
}
