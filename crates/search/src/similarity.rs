//! Tolerant string matching.
//!
//! A query "smart matches" a source string when, after case-folding and
//! trimming both, the query is a substring of the source or the two are
//! similar enough by normalized Levenshtein distance.

/// Similarity ratio a pair must strictly exceed to count as a match.
///
/// Tolerates roughly 40% character-level edit noise.
pub const SMART_MATCH_THRESHOLD: f64 = 0.6;

/// Whether substring containment is checked before the similarity ratio.
pub const SUBSTRING_FAST_PATH: bool = true;

/// Calculate Levenshtein edit distance between two strings.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
///
/// Characters are Unicode scalar values, not UTF-16 code units. For text
/// outside the Basic Multilingual Plane (emoji, for instance) distances and
/// ratios therefore differ from a UTF-16 based implementation: `"😀"` vs
/// `"x😀"` is one edit over a length of 2 here, one edit over 3 in UTF-16.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows are enough; row i only reads row i - 1
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            curr[j] = if a_chars[i - 1] == b_chars[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j].min(curr[j - 1]).min(prev[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity ratio in `[0, 1]` derived from the edit distance relative to
/// the longer string. Two empty strings are identical (`1.0`).
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}

/// Case-fold and trim. Applied fresh on every comparison.
#[inline]
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Tunable smart matcher.
///
/// `SmartMatcher::default()` uses [`SMART_MATCH_THRESHOLD`] and
/// [`SUBSTRING_FAST_PATH`], which is what [`is_smart_match`] does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmartMatcher {
    threshold: f64,
    substring_fast_path: bool,
}

impl Default for SmartMatcher {
    fn default() -> Self {
        Self {
            threshold: SMART_MATCH_THRESHOLD,
            substring_fast_path: SUBSTRING_FAST_PATH,
        }
    }
}

impl SmartMatcher {
    /// Matcher with the default threshold and substring fast path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the similarity threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enable or disable the substring check.
    #[must_use]
    pub fn with_substring_fast_path(mut self, enabled: bool) -> Self {
        self.substring_fast_path = enabled;
        self
    }

    /// The similarity threshold in use.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether the substring check runs first.
    pub fn substring_fast_path(&self) -> bool {
        self.substring_fast_path
    }

    /// Check whether `query` smart matches `source`.
    ///
    /// An empty or whitespace-only query matches everything.
    pub fn is_match(&self, source: &str, query: &str) -> bool {
        let query = normalize(query);
        if query.is_empty() {
            return true;
        }

        let source = normalize(source);
        if self.substring_fast_path && source.contains(&query) {
            return true;
        }

        similarity_ratio(&source, &query) > self.threshold
    }
}

/// Check whether `query` smart matches `source` using the default matcher.
///
/// # Example
/// ```
/// use jobboard_search::is_smart_match;
///
/// assert!(is_smart_match("Bangalore", "lore"));
/// assert!(is_smart_match("Bangalore", "banglore"));
/// assert!(!is_smart_match("Bangalore", "xyz"));
/// ```
pub fn is_smart_match(source: &str, query: &str) -> bool {
    SmartMatcher::default().is_match(source, query)
}
