//! Replay an event file and print the resulting depth of every symbol.
//!
//! Usage:
//!   depthbook <INPUT> [--config FILE] [--strict] [--format text|json] [-v]
//!
//! Rejected lines go to stderr through the logger; depth goes to stdout.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use depthbook::{render, Config, Driver, OutputFormat, RunError};

#[derive(Parser)]
#[command(name = "depthbook")]
#[command(about = "Aggregate add/delete order events into per-symbol price-level depth")]
#[command(version)]
struct Cli {
    /// Event file, one `SYMBOL|A|SIDE|ID|SIZE|PRICE` or `SYMBOL|D|ID` per line
    input: PathBuf,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Abort on the first internal inconsistency
    #[arg(long)]
    strict: bool,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let mut config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };
    if cli.strict {
        config.strict = true;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    init_logging(&config, cli.verbose);

    let file = match File::open(&cli.input) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Can't open {} for input: {e}", cli.input.display());
            process::exit(1);
        }
    };

    if let Err(e) = run(file, &config) {
        match e.downcast_ref::<RunError>() {
            Some(RunError::Strict { .. }) => {
                eprintln!("Aborted: {e:#}");
                process::exit(2);
            }
            _ => {
                eprintln!("Error: {e:#}");
                process::exit(1);
            }
        }
    }
}

fn run(file: File, config: &Config) -> anyhow::Result<()> {
    let mut driver = Driver::new(config);
    driver.run(BufReader::new(file))?;

    let stdout = io::stdout();
    render(driver.books(), config.format, &mut stdout.lock()).context("failed to write depth")?;
    Ok(())
}

fn init_logging(config: &Config, verbose: u8) {
    let base = config.level_filter().unwrap_or(LevelFilter::Warn);
    let level = match verbose {
        0 => base,
        1 => base.max(LevelFilter::Info),
        _ => base.max(LevelFilter::Debug),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.to_string()))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
