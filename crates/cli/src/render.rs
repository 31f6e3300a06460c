//! Rendering filtered jobs.
//!
//! The filter engine hands its result here in source order. Every renderer
//! has an explicit "no results" state for an empty result.

use handlebars::Handlebars;
use jobboard_core::config::{DisplayConfig, OutputFormat};
use jobboard_core::{Error, ErrorCode, Result};
use jobboard_search::JobRecord;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use crate::output::format_count;

/// Shown instead of cards when nothing matched.
pub const NO_RESULTS_MESSAGE: &str = "No jobs found. Try searching with different keywords!";

/// Badge shown for postings without a category.
pub const DEFAULT_CATEGORY_LABEL: &str = "IT Job";

const JOB_LIST_TEMPLATE: &str = r#"<div id="job-container">
{{#each jobs}}
<div class="job-card">
    <div class="card-header">
        <span class="category-tag">{{category}}</span>
    </div>
    <h3>{{title}}</h3>
    <p class="company">{{company}}</p>
    <div class="job-meta">
        <span>📍 {{location}}</span>
        {{#if salary}}<span>💰 {{salary}}</span>{{/if}}
    </div>
    <div class="tags">{{#each tags}}<span class="tag">{{this}}</span>{{/each}}</div>
    <a class="apply-btn" href="{{{detail_url}}}">View Details</a>
</div>
{{else}}
<div class="no-results">
    <p>{{@root.no_results}}</p>
</div>
{{/each}}
</div>"#;

/// Receives each filter result.
pub trait ResultSink {
    /// Present `jobs`, which may be empty.
    fn render(&mut self, jobs: &[&JobRecord]) -> Result<()>;
}

/// Display-ready view of one job.
#[derive(Debug, Serialize)]
struct JobCard<'a> {
    category: &'a str,
    title: &'a str,
    company: &'a str,
    location: &'a str,
    salary: Option<String>,
    tags: &'a [String],
    detail_url: String,
}

impl<'a> JobCard<'a> {
    fn new(job: &'a JobRecord, display: &DisplayConfig) -> Self {
        Self {
            category: if job.category.is_empty() {
                DEFAULT_CATEGORY_LABEL
            } else {
                &job.category
            },
            title: &job.title,
            company: &job.company,
            location: &job.location,
            salary: job.salary.as_ref().map(|salary| {
                format!("{}{}{}", display.currency_symbol, salary, display.salary_suffix)
            }),
            tags: &job.tags,
            detail_url: format!("job-details.html?id={}", urlencoding::encode(&job.id.to_string())),
        }
    }
}

/// Render jobs as coloured terminal cards.
pub fn render_text(jobs: &[&JobRecord], display: &DisplayConfig) -> String {
    if jobs.is_empty() {
        return NO_RESULTS_MESSAGE.yellow().to_string();
    }

    let mut out = String::new();
    for job in jobs {
        let card = JobCard::new(job, display);
        out.push_str(&format!(
            "{} {}\n",
            format!("[{}]", card.category).cyan(),
            card.title.bold()
        ));

        let mut meta = vec![card.company.to_string(), card.location.to_string()];
        if let Some(salary) = card.salary {
            meta.push(salary);
        }
        meta.retain(|part| !part.is_empty());
        if !meta.is_empty() {
            out.push_str(&format!("  {}\n", meta.join(" · ")));
        }

        if !card.tags.is_empty() {
            let tags: Vec<String> = card.tags.iter().map(|t| format!("#{}", t)).collect();
            out.push_str(&format!("  {}\n", tags.join(" ").dimmed()));
        }
        out.push('\n');
    }

    out.push_str(&format_count(jobs.len(), "job", "jobs").dimmed().to_string());
    out
}

/// Template registry for HTML job cards. All fields are HTML-escaped.
pub fn html_templates() -> Result<Handlebars<'static>> {
    let mut registry = Handlebars::new();
    registry
        .register_template_string("job_list", JOB_LIST_TEMPLATE)
        .map_err(|e| Error::new(ErrorCode::Internal, "Invalid job card template").with_source(e))?;
    Ok(registry)
}

/// Render jobs as HTML job cards.
pub fn render_html(
    templates: &Handlebars<'_>,
    jobs: &[&JobRecord],
    display: &DisplayConfig,
) -> Result<String> {
    let cards: Vec<JobCard<'_>> = jobs.iter().map(|job| JobCard::new(job, display)).collect();
    let data = serde_json::json!({
        "jobs": cards,
        "no_results": NO_RESULTS_MESSAGE,
    });

    templates
        .render("job_list", &data)
        .map_err(|e| Error::new(ErrorCode::Internal, "Failed to render job cards").with_source(e))
}

/// Render jobs as a pretty-printed JSON array.
pub fn render_json(jobs: &[&JobRecord]) -> Result<String> {
    serde_json::to_string_pretty(jobs)
        .map_err(|e| Error::new(ErrorCode::Internal, "Failed to serialize jobs").with_source(e))
}

/// Writes each result to `out` in the configured format.
pub struct Renderer<W> {
    format: OutputFormat,
    display: DisplayConfig,
    templates: Handlebars<'static>,
    out: W,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer writing to `out`.
    pub fn new(format: OutputFormat, display: DisplayConfig, out: W) -> Result<Self> {
        Ok(Self {
            format,
            display,
            templates: html_templates()?,
            out,
        })
    }

    /// The output format in use.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultSink for Renderer<W> {
    fn render(&mut self, jobs: &[&JobRecord]) -> Result<()> {
        let body = match self.format {
            OutputFormat::Text => render_text(jobs, &self.display),
            OutputFormat::Html => render_html(&self.templates, jobs, &self.display)?,
            OutputFormat::Json => render_json(jobs)?,
        };
        writeln!(self.out, "{}", body)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_search::{JobId, Salary};

    fn sample_job() -> JobRecord {
        JobRecord {
            id: JobId::Number(7),
            company: "Acme".to_string(),
            location: "Bangalore".to_string(),
            category: "IT".to_string(),
            salary: Some(Salary::Text("12".to_string())),
            tags: vec!["Java".to_string(), "Spring".to_string()],
            ..JobRecord::new("Software Engineer")
        }
    }

    #[test]
    fn test_text_card() {
        let job = sample_job();
        let text = render_text(&[&job], &DisplayConfig::default());

        assert!(text.contains("Software Engineer"));
        assert!(text.contains("Acme · Bangalore · ₹12L+ PA"));
        assert!(text.contains("#Java #Spring"));
        assert!(text.contains("1 job"));
    }

    #[test]
    fn test_text_no_results() {
        let text = render_text(&[], &DisplayConfig::default());
        assert!(text.contains(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_html_card() {
        let job = sample_job();
        let templates = html_templates().unwrap();
        let html = render_html(&templates, &[&job], &DisplayConfig::default()).unwrap();

        assert!(html.contains("<h3>Software Engineer</h3>"));
        assert!(html.contains(r#"<span class="category-tag">IT</span>"#));
        assert!(html.contains("💰 ₹12L+ PA"));
        assert!(html.contains(r#"<span class="tag">Spring</span>"#));
        assert!(html.contains(r#"href="job-details.html?id=7""#));
        assert!(!html.contains(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_html_escapes_record_fields() {
        let mut job = JobRecord::new("<script>alert(1)</script>");
        job.company = r#""><img src=x onerror=alert(1)>"#.to_string();
        job.tags = vec!["<b>".to_string()];
        job.id = JobId::Text("1&admin=true".to_string());

        let templates = html_templates().unwrap();
        let html = render_html(&templates, &[&job], &DisplayConfig::default()).unwrap();

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("job-details.html?id=1%26admin%3Dtrue"));
    }

    #[test]
    fn test_html_default_category_and_missing_salary() {
        let job = JobRecord::new("Tester");
        let templates = html_templates().unwrap();
        let html = render_html(&templates, &[&job], &DisplayConfig::default()).unwrap();

        assert!(html.contains(DEFAULT_CATEGORY_LABEL));
        assert!(!html.contains("💰"));
    }

    #[test]
    fn test_html_no_results() {
        let templates = html_templates().unwrap();
        let html = render_html(&templates, &[], &DisplayConfig::default()).unwrap();
        assert!(html.contains(NO_RESULTS_MESSAGE));
        assert!(!html.contains("job-card"));
    }

    #[test]
    fn test_json_preserves_order() {
        let first = JobRecord::new("First");
        let second = JobRecord::new("Second");
        let json = render_json(&[&first, &second]).unwrap();

        let parsed: Vec<JobRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].title, "First");
        assert_eq!(parsed[1].title, "Second");
    }

    #[test]
    fn test_renderer_writes_each_result() {
        let job = sample_job();
        let mut renderer =
            Renderer::new(OutputFormat::Json, DisplayConfig::default(), Vec::new()).unwrap();

        renderer.render(&[&job]).unwrap();
        renderer.render(&[]).unwrap();

        let written = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(written.contains("Software Engineer"));
        assert!(written.trim_end().ends_with("[]"));
    }

    #[test]
    fn test_detail_url_encodes_id() {
        let mut job = JobRecord::new("Tester");
        job.id = JobId::Text("a b/c".to_string());
        let card = JobCard::new(&job, &DisplayConfig::default());
        assert_eq!(card.detail_url, "job-details.html?id=a%20b%2Fc");

        job.id = JobId::Text("abc-123".to_string());
        let card = JobCard::new(&job, &DisplayConfig::default());
        assert_eq!(card.detail_url, "job-details.html?id=abc-123");
    }

    #[test]
    fn test_json_keeps_integer_salary() {
        let job: JobRecord =
            serde_json::from_str(r#"{"id": 3, "title": "Trainee", "salary": 3}"#).unwrap();
        let json = render_json(&[&job]).unwrap();
        assert!(json.contains(r#""salary": 3,"#));
        assert!(!json.contains("3.0"));
    }
}
