//! jobboard: search job postings with typo-tolerant matching.

use clap::{Parser, Subcommand};
use jobboard_cli::output::Status;
use jobboard_cli::render::Renderer;
use jobboard_core::config::{Config, OutputFormat};
use jobboard_core::{Error, Result, ResultExt};
use jobboard_search::{JobCatalog, JobSearch, Query};
use jobboard_telemetry::TelemetryConfig;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

mod session;
mod shell;

use session::QuerySession;

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(author, version, about = "Search job postings with typo-tolerant matching", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to .jobboard.toml when present)
    #[arg(short, long, global = true, env = "JOBBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Job data JSON file (overrides [data] path)
    #[arg(short, long, global = true, env = "JOBBOARD_DATA")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter jobs once and print the result
    Search {
        /// Title or tag query
        #[arg(short, long, default_value = "")]
        title: String,

        /// Location query
        #[arg(short, long, default_value = "")]
        location: String,

        /// Exact category; "Fresher" selects fresher-level postings
        #[arg(long, default_value = "")]
        category: String,

        /// Minimum salary
        #[arg(short = 's', long, default_value_t = 0)]
        min_salary: i64,

        /// Output format (text, html, json)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Refine a search interactively, re-filtering on every change
    Shell {
        /// Output format (text, html, json)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// List the categories present in the job data
    Categories,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let telemetry = if cli.verbose {
        TelemetryConfig::verbose()
    } else {
        TelemetryConfig::default()
    };
    if let Err(e) = jobboard_telemetry::init_with_config(telemetry) {
        Status::warning(&e.to_string());
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Status::report(&e);
            ExitCode::from(e.code.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).context("While loading configuration")?;
    let data_path = cli
        .data
        .unwrap_or_else(|| config.schema.data.path.clone());
    debug!(config = ?config.path, data = %data_path.display(), "Resolved inputs");
    let engine = load_engine(&data_path, &config)?;

    match cli.command {
        Commands::Search {
            title,
            location,
            category,
            min_salary,
            format,
        } => {
            config.schema.search.check_min_salary(min_salary)?;

            let query = Query::new()
                .with_title(title)
                .with_location(location)
                .with_category(category)
                .with_min_salary(min_salary);
            let format = format.unwrap_or(config.schema.display.format);
            let renderer = Renderer::new(format, config.schema.display.clone(), std::io::stdout().lock())?;

            let matches = QuerySession::new(&engine, renderer)
                .with_query(query)
                .refresh()?;
            info!(matches, "Search complete");
        }

        Commands::Shell { format } => {
            let format = format.unwrap_or(config.schema.display.format);
            let renderer = Renderer::new(format, config.schema.display.clone(), std::io::stdout())?;
            let mut session = QuerySession::new(&engine, renderer);

            let stdin = std::io::stdin();
            let prompt = stdin.is_terminal();
            if prompt {
                Status::info("Type `help` for commands, `quit` to leave.");
            }
            shell::run(&mut session, &config.schema.search, stdin.lock(), prompt)?;
        }

        Commands::Categories => {
            let categories = engine.categories();
            if categories.is_empty() {
                Status::info("No categories in the job data");
            }
            for category in categories {
                println!("{}", category);
            }
        }
    }

    Ok(())
}

/// Load the catalog and build the engine. A failed load never yields an engine.
fn load_engine(path: &Path, config: &Config) -> Result<JobSearch> {
    let catalog = JobCatalog::from_path(path).map_err(|e| Error::catalog(e, path))?;

    if catalog.is_empty() {
        Status::warning(&format!("{} contains no jobs", path.display()));
    }

    Ok(catalog
        .into_search()
        .with_matcher(config.schema.search.matcher()))
}
