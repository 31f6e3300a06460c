//! Interactive search shell.

use crate::session::{QueryChange, QuerySession, ShellCommand};
use jobboard_cli::output::Status;
use jobboard_cli::render::ResultSink;
use jobboard_core::config::SearchConfig;
use jobboard_core::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  title <text>       filter by title or tag (empty clears)
  location <text>    filter by location (empty clears)
  category <name>    exact category, `Fresher` selects fresher postings (empty clears)
  salary <n>         minimum salary (empty clears)
  clear              reset all filters
  show               show the current results again
  help               show this help
  quit               leave the shell";

/// Read commands from `input` until it ends or `quit`.
///
/// Results go to the session's sink; prompts, help and input errors go to
/// stderr so they never mix with rendered results.
pub fn run<R: BufRead, S: ResultSink>(
    session: &mut QuerySession<'_, S>,
    search: &SearchConfig,
    input: R,
    prompt: bool,
) -> Result<()> {
    session.refresh()?;

    let mut lines = input.lines();
    loop {
        if prompt {
            eprint!("jobs> ");
            std::io::stderr().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                Status::report(&e);
                continue;
            }
        };
        debug!(?command, "Shell command");

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => eprintln!("{}", HELP),
            ShellCommand::Show => {
                session.refresh()?;
            }
            ShellCommand::Change(QueryChange::MinSalary(min_salary)) => {
                if let Err(e) = search.check_min_salary(min_salary) {
                    Status::report(&e);
                    continue;
                }
                session.apply(QueryChange::MinSalary(min_salary))?;
            }
            ShellCommand::Change(change) => {
                session.apply(change)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_search::{JobRecord, JobSearch, Salary};

    #[derive(Default)]
    struct CountingSink {
        counts: Vec<usize>,
    }

    impl ResultSink for CountingSink {
        fn render(&mut self, jobs: &[&JobRecord]) -> Result<()> {
            self.counts.push(jobs.len());
            Ok(())
        }
    }

    fn engine() -> JobSearch {
        let mut pune = JobRecord::new("Data Analyst");
        pune.location = "Pune".to_string();
        pune.salary = Some(Salary::Text("4".to_string()));

        let mut bangalore = JobRecord::new("Software Engineer");
        bangalore.location = "Bangalore".to_string();
        bangalore.salary = Some(Salary::Text("12".to_string()));

        JobSearch::new(vec![pune, bangalore])
    }

    #[test]
    fn test_shell_renders_on_each_change() {
        let engine = engine();
        let mut session = QuerySession::new(&engine, CountingSink::default());
        let input = "location lore\n\nsalary 10\nshow\nclear\nquit\nlocation pune\n";

        run(&mut session, &SearchConfig::default(), input.as_bytes(), false).unwrap();

        // initial, location, salary, show, clear; nothing after quit
        assert_eq!(session.into_sink().counts, vec![2, 1, 1, 1, 2]);
    }

    #[test]
    fn test_shell_skips_invalid_input() {
        let engine = engine();
        let mut session = QuerySession::new(&engine, CountingSink::default());
        // 7 is not an offered salary choice by default
        let input = "bogus\nsalary 7\nsalary x\ntitle analyst\n";

        run(&mut session, &SearchConfig::default(), input.as_bytes(), false).unwrap();

        assert_eq!(session.query().min_salary, 0);
        assert_eq!(session.into_sink().counts, vec![2, 1]);
    }

    #[test]
    fn test_shell_bare_salary_clears_minimum() {
        let engine = engine();
        let mut session = QuerySession::new(&engine, CountingSink::default());
        let search = SearchConfig {
            salary_options: vec![3, 6, 10],
            ..SearchConfig::default()
        };

        run(&mut session, &search, "salary 10\nsalary\n".as_bytes(), false).unwrap();

        assert_eq!(session.query().min_salary, 0);
        assert_eq!(session.into_sink().counts, vec![2, 1, 2]);
    }
}
