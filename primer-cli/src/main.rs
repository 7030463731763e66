//! Primer exercises binary.
//!
//! # Quick Start
//!
//! ```bash
//! # Per-book totals from grouped transactions
//! printf '0-201-78345-X 3 20.00\n0-201-78345-X 2 25.00\n' | primer bookstore
//!
//! # Same report as JSON lines with four decimal places
//! primer --format json --precision 4 bookstore < transactions.txt
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use primer_core::{counter::count_calls, Config, OutputFormat, Report, TokenReader};
use primer_cli::{commands, logging, Outcome};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Small exercises over standard input.
#[derive(Parser)]
#[command(name = "primer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// TOML configuration file (defaults to $PRIMER_CONFIG).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Report format for sales totals (text or json).
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Decimal places for revenue and average price.
    #[arg(long, global = true)]
    precision: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count how many consecutive times each integer appears.
    Runs,

    /// Sum two transactions that share an ISBN.
    SumPair,

    /// Count transactions per ISBN (input grouped by ISBN).
    CountIsbn,

    /// Units, revenue and average price per ISBN (input grouped by ISBN).
    Bookstore,

    /// Show writes through one alias seen through another.
    Aliasing,

    /// Compare two lines lexicographically.
    Compare,

    /// Find a character (read from stdin) in TEXT.
    FindChar {
        /// String to search.
        text: String,
    },

    /// Print successive values of a counter that keeps its state.
    CountCalls {
        /// Number of integers to prompt for.
        #[arg(short, long, default_value_t = commands::count_calls::DEFAULT_ROUNDS)]
        rounds: u32,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(format) = cli.format {
        config.report.format = format;
    }
    if let Some(precision) = cli.precision {
        config.report.price_precision = precision;
    }
    config.validate()?;

    logging::init(&config.logging.filter)?;
    tracing::debug!(?config, "configuration loaded");

    let report = Report::from_config(&config.report);
    let mut input = TokenReader::new(io::stdin().lock());
    let mut out = io::stdout().lock();
    let mut err = io::stderr();

    let outcome = match cli.command {
        Commands::Runs => commands::runs::run(&mut input, &mut out, &mut err)?,
        Commands::SumPair => commands::sum_pair::run(&mut input, &mut out, &mut err, &report)?,
        Commands::CountIsbn => commands::count_isbn::run(&mut input, &mut out, &mut err)?,
        Commands::Bookstore => {
            commands::bookstore::run(&mut input, &mut out, &mut err, &report, &config.input)?
        }
        Commands::Aliasing => commands::aliasing::run(&mut out)?,
        Commands::Compare => commands::compare::run(&mut input, &mut out)?,
        Commands::FindChar { text } => {
            commands::find_char::run(&text, &mut input, &mut out, &mut err)?
        }
        Commands::CountCalls { rounds } => {
            commands::count_calls::run(rounds, count_calls, &mut input, &mut out, &mut err)?
        }
    };

    if outcome == Outcome::Failure {
        tracing::debug!("command rejected its input");
    }
    Ok(outcome.exit_code())
}
