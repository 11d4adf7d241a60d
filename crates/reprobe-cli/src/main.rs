//! reprobe: run one regular expression match and report the outcome.
//!
//! # Usage
//!
//! ```bash
//! # Match with the default (linear-time) engine
//! reprobe query.json
//!
//! # Match with the backtracking engine, reading the query from stdin
//! echo '{"pattern": "(a|aa)+$", "input": "aaaaaaaaab"}' | reprobe --engine backtracking -
//! ```
//!
//! One match per process. The caller owns the deadline: if the match runs
//! too long, kill the process. Until the match finishes nothing is written
//! to stdout, so a killed process leaves no output.

#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use reprobe_core::exit_code;
use reprobe_core::{Engine, MatchOracle, ProbeConfig, QueryLoader, ResultWriter};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "reprobe",
    version,
    about = "Run one regex match from a JSON query and print the result as JSON"
)]
struct Cli {
    /// Query file with "pattern" and "input" keys ("-" reads stdin)
    #[arg(value_name = "QUERY_FILE")]
    query_file: PathBuf,

    /// Regex engine: linear (regex crate), backtracking (regress, ECMAScript
    /// syntax) or hybrid (fancy-regex, backtracks only for look-around and
    /// backreferences)
    #[arg(long, env = "REPROBE_ENGINE", default_value = "linear")]
    engine: Engine,

    /// Log level for stderr diagnostics (overrides --verbose/--quiet)
    #[arg(long, env = "REPROBE_LOG_LEVEL")]
    log_level: Option<Level>,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Warnings and errors only
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        match self.log_level {
            Some(level) => level,
            None if self.verbose => Level::DEBUG,
            None if self.quiet => Level::WARN,
            None => Level::INFO,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to set tracing subscriber: {}", e);
    }

    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let config = ProbeConfig { engine: cli.engine };
    debug!(engine = %config.engine, query = %cli.query_file.display(), "starting");

    match answer_query(&cli.query_file, &config) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

/// Load, match once, emit. Each step's failure ends the invocation.
fn answer_query(query_file: &Path, config: &ProbeConfig) -> reprobe_core::Result<()> {
    let request = QueryLoader::load_path(query_file)?;
    let result = MatchOracle::new(config).execute(request)?;
    ResultWriter::emit_stdout(&result)
}
