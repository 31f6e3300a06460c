//! Job posting records as supplied by the data source.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Experience level that the "Fresher" category selects on.
pub const FRESHER: &str = "Fresher";

/// Stable identifier of a posting. Data sources use either numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobId {
    /// Numeric id
    Number(i64),
    /// String id
    Text(String),
    /// Missing id
    #[default]
    Missing,
}

impl JobId {
    /// Whether the source record had no id.
    pub fn is_missing(&self) -> bool {
        matches!(self, JobId::Missing)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobId::Number(n) => write!(f, "{n}"),
            JobId::Text(s) => f.write_str(s),
            JobId::Missing => Ok(()),
        }
    }
}

/// Advertised salary, either a JSON number or free text such as `"12"` or `"12L+"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Salary {
    /// Whole-number salary
    Int(i64),
    /// Fractional salary
    Float(f64),
    /// Textual salary
    Text(String),
}

impl Salary {
    /// Integer value used as the lower bound comparison.
    ///
    /// Text is read like a leading-integer parse: optional whitespace and
    /// sign, then digits up to the first non-digit. No digits gives `0`.
    /// Fractional numbers are truncated toward zero.
    pub fn amount(&self) -> i64 {
        match self {
            Salary::Int(n) => *n,
            // `as` saturates and maps NaN to 0
            Salary::Float(n) => n.trunc() as i64,
            Salary::Text(s) => parse_leading_int(s),
        }
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Salary::Int(n) => write!(f, "{n}"),
            Salary::Float(n) => write!(f, "{n}"),
            Salary::Text(s) => f.write_str(s),
        }
    }
}

fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}

/// A single job posting.
///
/// Every field except `title` may be absent in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Reference id, never matched
    #[serde(default, skip_serializing_if = "JobId::is_missing")]
    pub id: JobId,
    /// Primary free-text search target
    pub title: String,
    /// Display only
    #[serde(default)]
    pub company: String,
    /// Free-text search target
    #[serde(default)]
    pub location: String,
    /// Exact-match category
    #[serde(default)]
    pub category: String,
    /// Exact-match experience level, e.g. "Fresher"
    #[serde(default)]
    pub experience: String,
    /// Lower-bound salary, absent counts as 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Salary>,
    /// Alternate search targets for the title query
    #[serde(default)]
    pub tags: Vec<String>,
}

impl JobRecord {
    /// Create a record with only a title; other fields empty.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: JobId::Missing,
            title: title.into(),
            company: String::new(),
            location: String::new(),
            category: String::new(),
            experience: String::new(),
            salary: None,
            tags: Vec::new(),
        }
    }

    /// Salary as used by the minimum-salary filter.
    #[inline]
    pub fn salary_amount(&self) -> i64 {
        self.salary.as_ref().map_or(0, Salary::amount)
    }

    /// Whether this posting is for the fresher experience level.
    #[inline]
    pub fn is_fresher(&self) -> bool {
        self.experience == FRESHER
    }
}
