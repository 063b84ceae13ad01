//! `degrees`: find the degrees of separation between two actors.
//!
//! Usage: `degrees [DIRECTORY] [-q] [--json] [--frontier queue|stack]
//! [--allow-revisits] [--max-expansions N]`
//!
//! Logs go to stderr and are controlled by `RUST_LOG` (default `warn`).

#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use degrees_harness::session::{run_session, SessionError, SessionOptions};
use degrees_kernel::load::load_dir;
use degrees_search::{FrontierKind, RevisitPolicy, SearchPolicy};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FrontierArg {
    /// Breadth-first; always finds a shortest path.
    Queue,
    /// Depth-first; finds some path.
    Stack,
}

impl From<FrontierArg> for FrontierKind {
    fn from(arg: FrontierArg) -> Self {
        match arg {
            FrontierArg::Queue => Self::Queue,
            FrontierArg::Stack => Self::Stack,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "degrees", about = "Find degrees of separation between two actors")]
struct Args {
    /// Directory holding people.csv, movies.csv and stars.csv.
    #[arg(default_value = "small")]
    directory: PathBuf,

    /// Disable prompts and other extra output.
    #[arg(short, long)]
    quiet: bool,

    /// Print one JSON report per query.
    #[arg(long)]
    json: bool,

    #[arg(long, value_enum, default_value_t = FrontierArg::Queue)]
    frontier: FrontierArg,

    /// Queue people again even if they were already seen. Needs a budget.
    #[arg(long, requires = "max_expansions")]
    allow_revisits: bool,

    /// Give up after this many node expansions.
    #[arg(long)]
    max_expansions: Option<u64>,
}

impl Args {
    fn policy(&self) -> SearchPolicy {
        SearchPolicy {
            frontier: self.frontier.into(),
            revisit: if self.allow_revisits {
                RevisitPolicy::AllowRevisits
            } else {
                RevisitPolicy::SkipSeen
            },
            max_expansions: self.max_expansions,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let policy = args.policy();
    policy.validate()?;

    if !args.quiet {
        println!("Loading data from '{}' ...", args.directory.display());
    }
    let (store, summary) = load_dir(&args.directory)
        .with_context(|| format!("loading dataset from {}", args.directory.display()))?;
    tracing::debug!(
        people = summary.people,
        movies = summary.movies,
        skipped = summary.skipped_appearances,
        "dataset ready"
    );
    if !args.quiet {
        println!("Data loaded.");
    }

    let options = SessionOptions {
        quiet: args.quiet,
        json: args.json,
        policy,
    };
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match run_session(&store, &mut stdin.lock(), &mut stdout.lock(), &options) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err @ SessionError::PersonNotFound { .. }) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
