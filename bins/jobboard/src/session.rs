//! Query session: the boundary between the input layer and the engine.
//!
//! Every change to a query field re-runs the filter against the loaded
//! collection and hands the result to the sink.

use jobboard_cli::render::ResultSink;
use jobboard_core::{Error, Result};
use jobboard_search::{JobSearch, Query};

/// One edit to the current query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryChange {
    /// Replace the title query
    Title(String),
    /// Replace the location query
    Location(String),
    /// Replace the selected category
    Category(String),
    /// Replace the minimum salary
    MinSalary(i64),
    /// Reset every field
    Clear,
}

/// A line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Edit the query and re-filter
    Change(QueryChange),
    /// Re-render the current result
    Show,
    /// Print usage
    Help,
    /// Leave the shell
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, value) = match line.split_once(char::is_whitespace) {
            Some((keyword, value)) => (keyword, value.trim()),
            None => (line, ""),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "title" | "t" => Self::Change(QueryChange::Title(value.to_string())),
            "location" | "l" => Self::Change(QueryChange::Location(value.to_string())),
            "category" | "c" => Self::Change(QueryChange::Category(value.to_string())),
            "salary" | "s" => {
                let min_salary = if value.is_empty() {
                    0
                } else {
                    value.parse().map_err(|_| {
                        Error::invalid_input(format!("'{}' is not a whole number", value))
                            .with_suggestion("Use e.g. `salary 10`")
                    })?
                };
                Self::Change(QueryChange::MinSalary(min_salary))
            }
            "clear" => Self::Change(QueryChange::Clear),
            "show" | "ls" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => {
                return Err(Error::invalid_input(format!("Unknown command '{}'", other))
                    .with_suggestion("Type `help` to list commands"));
            }
        };

        Ok(Some(command))
    }
}

/// Holds the current query and re-filters on every change.
pub struct QuerySession<'e, S> {
    engine: &'e JobSearch,
    query: Query,
    sink: S,
}

impl<'e, S: ResultSink> QuerySession<'e, S> {
    /// Start with the match-all query.
    pub fn new(engine: &'e JobSearch, sink: S) -> Self {
        Self {
            engine,
            query: Query::new(),
            sink,
        }
    }

    /// Start from an existing query.
    #[must_use]
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// The current query.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Filter with the current query and render. Returns the match count.
    pub fn refresh(&mut self) -> Result<usize> {
        let engine = self.engine;
        let query = &self.query;
        let matches = jobboard_telemetry::timed("filter", || engine.filter(query));
        self.sink.render(&matches)?;
        Ok(matches.len())
    }

    /// Apply one change, then filter and render.
    pub fn apply(&mut self, change: QueryChange) -> Result<usize> {
        match change {
            QueryChange::Title(title) => self.query.title = title,
            QueryChange::Location(location) => self.query.location = location,
            QueryChange::Category(category) => self.query.category = category,
            QueryChange::MinSalary(min_salary) => self.query.min_salary = min_salary,
            QueryChange::Clear => self.query = Query::new(),
        }
        self.refresh()
    }

    /// Recover the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
