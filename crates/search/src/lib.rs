//! Tolerant job posting search.
//!
//! This crate provides:
//! - Smart matching: substring containment, then Levenshtein similarity
//! - Multi-field job filtering (title/tags, location, category, salary)
//! - JSON catalog loading
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use jobboard_search::{JobCatalog, Query};
//!
//! let catalog = JobCatalog::from_json_str(r#"[
//!     {"title": "Software Engineer", "location": "Bangalore", "salary": "12", "tags": ["Java"]},
//!     {"title": "Data Analyst", "location": "Pune", "salary": "4", "tags": ["SQL"]}
//! ]"#).unwrap();
//! let search = catalog.into_search();
//!
//! let results = search.filter(&Query::new().with_title("jva").with_min_salary(10));
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].location, "Bangalore");
//! ```

mod catalog;
mod error;
pub mod filter;
mod query;
pub mod record;
mod similarity;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::JobCatalog;
pub use error::{Result, SearchError, SearchErrorCode};
pub use filter::{filter_jobs, filter_jobs_with, JobSearch};
pub use query::Query;
pub use record::{JobId, JobRecord, Salary, FRESHER};
pub use similarity::{
    is_smart_match, levenshtein_distance, similarity_ratio, SmartMatcher, SMART_MATCH_THRESHOLD,
    SUBSTRING_FAST_PATH,
};
