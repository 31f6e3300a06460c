//! WASM bindings for the search crate.
//!
//! These bindings let the job board page run the same matcher and filter
//! in the browser.

use crate::{
    filter_jobs, is_smart_match, levenshtein_distance, similarity_ratio, JobRecord, Query,
    SearchError,
};
use wasm_bindgen::prelude::*;

/// Check whether `query` smart matches `source`.
#[wasm_bindgen]
pub fn smart_match(source: &str, query: &str) -> bool {
    is_smart_match(source, query)
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein_distance(a, b)
}

/// Similarity ratio in `[0, 1]` between two strings.
#[wasm_bindgen]
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_ratio(a, b)
}

/// Filter a JSON array of job records.
///
/// # Arguments
/// * `jobs_json` - JSON array of job records
/// * `title` - Title query (empty for any)
/// * `location` - Location query (empty for any)
/// * `category` - Selected category (empty for any)
/// * `min_salary` - Minimum salary (0 for any)
///
/// # Returns
/// JSON array of the matching records in source order
#[wasm_bindgen]
pub fn filter_jobs_json(
    jobs_json: &str,
    title: &str,
    location: &str,
    category: &str,
    min_salary: i32,
) -> Result<String, JsValue> {
    let query = Query::new()
        .with_title(title)
        .with_location(location)
        .with_category(category)
        .with_min_salary(i64::from(min_salary));

    filter_json(jobs_json, &query)
        .map_err(|e| JsValue::from_str(&format!("E{} {}", e.code() as u32, e)))
}

fn filter_json(jobs_json: &str, query: &Query) -> crate::Result<String> {
    let jobs: Vec<JobRecord> = serde_json::from_str(jobs_json)?;
    let results = filter_jobs(&jobs, query);
    serde_json::to_string(&results).map_err(SearchError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchErrorCode;

    const JOBS: &str = r#"[
        {"id": 1, "title": "Software Engineer", "location": "Bangalore", "salary": 12, "tags": ["Java"]},
        {"id": 2, "title": "Data Analyst", "location": "Pune", "experience": "Fresher", "salary": "4"},
        {"id": 3, "title": "Java Developer", "location": "Bengaluru", "salary": 10}
    ]"#;

    #[test]
    fn test_filter_jobs_json_keeps_order_and_values() {
        let out = filter_jobs_json(JOBS, "java", "", "", 10).unwrap();
        let hits: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();

        let ids: Vec<i64> = hits.iter().map(|h| h["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(out.contains(r#""salary":12"#));
        assert!(!out.contains("12.0"));
    }

    #[test]
    fn test_filter_jobs_json_fresher() {
        let out = filter_jobs_json(JOBS, "", "", "Fresher", 0).unwrap();
        assert!(out.contains("Data Analyst"));
        assert!(!out.contains("Software Engineer"));
    }

    #[test]
    fn test_filter_json_rejects_malformed_input() {
        let err = filter_json(r#"{"title": "not a list"}"#, &Query::new()).unwrap_err();
        assert_eq!(err.code(), SearchErrorCode::CatalogParse);
    }

    #[test]
    fn test_scalar_bindings() {
        assert!(smart_match("Bangalore", "lore"));
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(similarity("", ""), 1.0);
    }
}
