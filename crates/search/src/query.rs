//! Search query snapshot.

use serde::{Deserialize, Serialize};

/// The four user-entered search criteria.
///
/// Empty text fields and a zero minimum salary are wildcards. A `Query` is a
/// snapshot: the input layer rebuilds or updates it on every change and the
/// engine never keeps one between invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    /// Free-text title query, also tried against tags
    pub title: String,
    /// Free-text location query
    pub location: String,
    /// Selected category, empty for any
    pub category: String,
    /// Minimum salary, inclusive
    pub min_salary: i64,
}

impl Query {
    /// The match-all query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title query.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the location query.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the selected category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the minimum salary.
    #[must_use]
    pub fn with_min_salary(mut self, min_salary: i64) -> Self {
        self.min_salary = min_salary;
        self
    }

    /// True when no field restricts the result.
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty()
            && self.location.trim().is_empty()
            && self.category.is_empty()
            && self.min_salary <= 0
    }
}
