//! Loading the job collection from the data source.

use crate::{JobRecord, JobSearch, Result};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// A loaded, not yet searchable, job collection.
///
/// The catalog only exists when loading succeeded, so an engine is never
/// built from a partial or failed load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobCatalog {
    jobs: Vec<JobRecord>,
}

impl JobCatalog {
    /// Parse a JSON array of job records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let jobs: Vec<JobRecord> = serde_json::from_str(json)?;
        Ok(Self { jobs })
    }

    /// Parse a JSON array of job records from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let jobs: Vec<JobRecord> = serde_json::from_reader(reader)?;
        Ok(Self { jobs })
    }

    /// Read and parse a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        info!(path = %path.display(), jobs = catalog.len(), "Job catalog loaded");
        Ok(catalog)
    }

    /// Loaded records in source order.
    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// True when the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Freeze the collection into a search engine.
    pub fn into_search(self) -> JobSearch {
        JobSearch::new(self.jobs)
    }
}

impl From<Vec<JobRecord>> for JobCatalog {
    fn from(jobs: Vec<JobRecord>) -> Self {
        Self { jobs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Query, SearchError, SearchErrorCode};
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"id": 1, "title": "Software Engineer", "company": "Acme", "location": "Bangalore",
         "category": "IT", "experience": "Mid", "salary": "12", "tags": ["Java"]},
        {"id": 2, "title": "Data Analyst", "company": "Numbers Inc", "location": "Pune",
         "category": "Fresher", "experience": "Fresher", "salary": "4", "tags": ["SQL"]}
    ]"#;

    #[test]
    fn test_from_json_str() {
        let catalog = JobCatalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.jobs()[1].title, "Data Analyst");
    }

    #[test]
    fn test_from_reader() {
        let catalog = JobCatalog::from_reader(SAMPLE.as_bytes()).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = JobCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = JobCatalog::from_path("/definitely/not/here/jobs.json").unwrap_err();
        assert!(matches!(err, SearchError::Io(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = JobCatalog::from_json_str(r#"{"title": "not an array"}"#).unwrap_err();
        assert_eq!(err.code(), SearchErrorCode::CatalogParse);
    }

    #[test]
    fn test_into_search() {
        let search = JobCatalog::from_json_str(SAMPLE).unwrap().into_search();
        let results = search.filter(&Query::new().with_location("lore"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].company, "Acme");
    }
}
