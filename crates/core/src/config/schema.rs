//! Configuration schema definitions

use crate::error::{Error, Result};
use jobboard_search::{SmartMatcher, SMART_MATCH_THRESHOLD, SUBSTRING_FAST_PATH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Job data source
    #[serde(default)]
    pub data: DataConfig,

    /// Matching and filter settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Result rendering
    #[serde(default)]
    pub display: DisplayConfig,
}

impl ConfigSchema {
    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        let threshold = self.search.similarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::invalid_config_value(
                "search.similarity_threshold",
                format!("{} is outside 0.0..=1.0", threshold),
            )
            .with_suggestion("Remove the setting to use the default of 0.6"));
        }

        if let Some(negative) = self.search.salary_options.iter().find(|&&s| s < 0) {
            return Err(Error::invalid_config_value(
                "search.salary_options",
                format!("{} is negative", negative),
            ));
        }

        Ok(())
    }
}

/// Job data source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the JSON job catalog
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("jobs/jobs-data.json")
}

/// Matching configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Similarity ratio a text field must strictly exceed
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Check substring containment before similarity
    #[serde(default = "default_substring_fast_path")]
    pub substring_fast_path: bool,

    /// Allowed minimum-salary choices; empty allows any value
    #[serde(default = "default_salary_options")]
    pub salary_options: Vec<i64>,
}

impl SearchConfig {
    /// Build the matcher described by this configuration
    pub fn matcher(&self) -> SmartMatcher {
        SmartMatcher::new()
            .with_threshold(self.similarity_threshold)
            .with_substring_fast_path(self.substring_fast_path)
    }

    /// Check a minimum salary against the configured choices.
    ///
    /// `0` means no minimum and is always accepted.
    pub fn check_min_salary(&self, min_salary: i64) -> Result<()> {
        if min_salary == 0
            || self.salary_options.is_empty()
            || self.salary_options.contains(&min_salary)
        {
            return Ok(());
        }

        let options: Vec<String> = self.salary_options.iter().map(i64::to_string).collect();
        Err(
            Error::invalid_input(format!("Minimum salary {} is not an offered choice", min_salary))
                .with_suggestion(format!("Use one of: {}", options.join(", "))),
        )
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            substring_fast_path: default_substring_fast_path(),
            salary_options: default_salary_options(),
        }
    }
}

fn default_similarity_threshold() -> f64 {
    SMART_MATCH_THRESHOLD
}

fn default_substring_fast_path() -> bool {
    SUBSTRING_FAST_PATH
}

fn default_salary_options() -> Vec<i64> {
    vec![0, 3, 6, 10]
}

/// How results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Coloured terminal cards
    #[default]
    Text,
    /// Escaped HTML job cards
    Html,
    /// JSON array of records
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{}', expected text, html or json", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Json => "json",
        })
    }
}

/// Result rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Prefix shown before salaries
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Suffix shown after salaries
    #[serde(default = "default_salary_suffix")]
    pub salary_suffix: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            currency_symbol: default_currency_symbol(),
            salary_suffix: default_salary_suffix(),
        }
    }
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_salary_suffix() -> String {
    "L+ PA".to_string()
}
