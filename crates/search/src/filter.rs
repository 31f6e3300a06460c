//! Multi-field job filtering.
//!
//! A record is kept when the title (or any tag), location, category and
//! salary criteria all pass. Output order is always input order.

use crate::record::{JobRecord, FRESHER};
use crate::{Query, SmartMatcher};
use std::sync::Arc;
use tracing::debug;

/// Title query against the title, falling back to each tag.
#[inline]
fn title_matches(matcher: &SmartMatcher, record: &JobRecord, query: &str) -> bool {
    matcher.is_match(&record.title, query)
        || record.tags.iter().any(|tag| matcher.is_match(tag, query))
}

/// Exact category selection. Selecting "Fresher" filters on the experience
/// level instead, since fresher postings are not reliably tagged with that
/// category.
#[inline]
fn category_matches(record: &JobRecord, selected: &str) -> bool {
    if selected.is_empty() {
        true
    } else if selected == FRESHER {
        record.is_fresher()
    } else {
        record.category == selected
    }
}

/// Check a single record against a query.
pub fn record_matches(matcher: &SmartMatcher, record: &JobRecord, query: &Query) -> bool {
    title_matches(matcher, record, &query.title)
        && matcher.is_match(&record.location, &query.location)
        && category_matches(record, &query.category)
        && record.salary_amount() >= query.min_salary
}

/// Filter records with a specific matcher, preserving input order.
pub fn filter_jobs_with<'a>(
    matcher: &SmartMatcher,
    records: &'a [JobRecord],
    query: &Query,
) -> Vec<&'a JobRecord> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        records
            .par_iter()
            .filter(|record| record_matches(matcher, record, query))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        records
            .iter()
            .filter(|record| record_matches(matcher, record, query))
            .collect()
    }
}

/// Filter records with the default matcher.
///
/// # Example
/// ```
/// use jobboard_search::{filter_jobs, JobRecord, Query};
///
/// let mut bangalore = JobRecord::new("Software Engineer");
/// bangalore.location = "Bangalore".into();
/// let mut pune = JobRecord::new("Data Analyst");
/// pune.location = "Pune".into();
/// let jobs = vec![bangalore, pune];
///
/// let hits = filter_jobs(&jobs, &Query::new().with_location("lore"));
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].title, "Software Engineer");
/// ```
pub fn filter_jobs<'a>(records: &'a [JobRecord], query: &Query) -> Vec<&'a JobRecord> {
    filter_jobs_with(&SmartMatcher::default(), records, query)
}

/// Search engine over an immutable job collection.
///
/// Built once after the data source has loaded, then queried on every input
/// change. Clones share the same collection.
#[derive(Debug, Clone)]
pub struct JobSearch {
    records: Arc<[JobRecord]>,
    matcher: SmartMatcher,
}

impl JobSearch {
    /// Create an engine owning `records`.
    pub fn new(records: Vec<JobRecord>) -> Self {
        Self {
            records: records.into(),
            matcher: SmartMatcher::default(),
        }
    }

    /// Use a tuned matcher instead of the default one.
    #[must_use]
    pub fn with_matcher(mut self, matcher: SmartMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// The matcher in use.
    pub fn matcher(&self) -> &SmartMatcher {
        &self.matcher
    }

    /// All records in source order.
    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the collection has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Run a full filter pass.
    pub fn filter(&self, query: &Query) -> Vec<&JobRecord> {
        let matches = filter_jobs_with(&self.matcher, &self.records, query);
        debug!(
            records = self.records.len(),
            matches = matches.len(),
            title = %query.title,
            location = %query.location,
            category = %query.category,
            min_salary = query.min_salary,
            "Filter pass complete"
        );
        matches
    }

    /// Distinct non-empty categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in self.records.iter() {
            let category = record.category.as_str();
            if !category.is_empty() && !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}

impl From<Vec<JobRecord>> for JobSearch {
    fn from(records: Vec<JobRecord>) -> Self {
        Self::new(records)
    }
}
