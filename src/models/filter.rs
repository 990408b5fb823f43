//! Filter state for the browse session.
//!
//! Wildcard-able fields are tagged variants rather than sentinel strings;
//! the sentinel labels below exist only for filter-control binding and as
//! the first entry of each derived facet vocabulary.

use serde::{Deserialize, Serialize};

use super::listing::Condition;

/// Control label meaning "no category filter"
pub const ALL_CATEGORIES: &str = "All Categories";
/// Control label meaning "no location filter"
pub const ALL_LOCATIONS: &str = "All Locations";
/// Control label meaning "no condition filter"
pub const ALL_CONDITIONS: &str = "All Conditions";
/// Control label meaning "no availability filter"
pub const ALL_TIMES: &str = "All Times";

/// Default inclusive price ceiling, currency units per day
pub const DEFAULT_MAX_PRICE: f64 = 100.0;

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// A wildcard-able filter selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    Any,
    Specific(String),
}

impl Selection {
    /// Parse a control value against the field's "all" label
    pub fn from_control(value: &str, all_label: &str) -> Self {
        if value == all_label {
            Selection::Any
        } else {
            Selection::Specific(value.to_string())
        }
    }

    /// Control label for the current selection
    pub fn control_label<'a>(&'a self, all_label: &'a str) -> &'a str {
        match self {
            Selection::Any => all_label,
            Selection::Specific(value) => value,
        }
    }
}

// ---------------------------------------------------------------------------
// ConditionFilter
// ---------------------------------------------------------------------------

/// Condition filter: any condition, or one value of the closed enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionFilter {
    Any,
    Is(Condition),
}

impl std::str::FromStr for ConditionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CONDITIONS {
            Ok(ConditionFilter::Any)
        } else {
            s.parse::<Condition>().map(ConditionFilter::Is)
        }
    }
}

impl std::fmt::Display for ConditionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConditionFilter::Any => write!(f, "{}", ALL_CONDITIONS),
            ConditionFilter::Is(condition) => write!(f, "{}", condition),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterOptions
// ---------------------------------------------------------------------------

/// Structured filter fields, mutated one field at a time or reset in bulk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub category: Selection,
    pub location: Selection,
    /// Inclusive upper bound on the daily price
    pub max_price: f64,
    pub condition: ConditionFilter,
    /// Reserved; never consulted by the filter engine
    pub availability: Selection,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            category: Selection::Any,
            location: Selection::Any,
            max_price: DEFAULT_MAX_PRICE,
            condition: ConditionFilter::Any,
            availability: Selection::Any,
        }
    }
}

/// Single-field filter update
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Category(Selection),
    Location(Selection),
    MaxPrice(f64),
    Condition(ConditionFilter),
    Availability(Selection),
}

impl FilterOptions {
    /// Apply one field change, leaving every other field untouched
    pub fn apply(&mut self, change: FilterChange) {
        match change {
            FilterChange::Category(value) => self.category = value,
            FilterChange::Location(value) => self.location = value,
            FilterChange::MaxPrice(value) => self.max_price = value,
            FilterChange::Condition(value) => self.condition = value,
            FilterChange::Availability(value) => self.availability = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FilterOptions::default();
        assert_eq!(options.category, Selection::Any);
        assert_eq!(options.location, Selection::Any);
        assert_eq!(options.max_price, DEFAULT_MAX_PRICE);
        assert_eq!(options.condition, ConditionFilter::Any);
        assert_eq!(options.availability, Selection::Any);
        assert_eq!(options.availability.control_label(ALL_TIMES), ALL_TIMES);
    }

    #[test]
    fn test_apply_touches_one_field() {
        let mut options = FilterOptions::default();
        options.apply(FilterChange::Category(Selection::Specific(
            "Power Tools".to_string(),
        )));

        assert_eq!(
            options.category,
            Selection::Specific("Power Tools".to_string())
        );
        assert_eq!(options.location, Selection::Any);
        assert_eq!(options.max_price, DEFAULT_MAX_PRICE);
        assert_eq!(options.condition, ConditionFilter::Any);
    }

    #[test]
    fn test_selection_control_binding() {
        let any = Selection::from_control(ALL_CATEGORIES, ALL_CATEGORIES);
        assert_eq!(any, Selection::Any);
        assert_eq!(any.control_label(ALL_CATEGORIES), ALL_CATEGORIES);

        let picked = Selection::from_control("Garden Tools", ALL_CATEGORIES);
        assert_eq!(picked, Selection::Specific("Garden Tools".to_string()));
        assert_eq!(picked.control_label(ALL_CATEGORIES), "Garden Tools");
    }

    #[test]
    fn test_condition_filter_parse() {
        assert_eq!(ALL_CONDITIONS.parse(), Ok(ConditionFilter::Any));
        assert_eq!(
            "Excellent".parse(),
            Ok(ConditionFilter::Is(Condition::Excellent))
        );
        assert!("mint".parse::<ConditionFilter>().is_err());
    }
}
