//! qsim: run the checkout simulator from the command line.
//!
//! Reads the ten-token parameter line from stdin
//!
//! ```text
//! seed humans self_checkouts queue_capacity customers λ μ ρ Pr Pg
//! ```
//!
//! or a JSON `SimConfig` with `--config`, runs the simulation, and prints the
//! trace followed by the statistics line to stdout.  Logging goes to stderr
//! so the trace stays exact.

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::{Builder, Target};
use log::{LevelFilter, info};

use qs_core::SimConfig;
use qs_output::{CsvWriter, SimOutputObserver, TraceWriter};
use qs_sim::SimBuilder;

/// Log targets raised by `--verbose`.
const LOG_TARGETS: [&str; 5] = ["qs_model", "qs_event", "qs_sim", "qs_output", "qsim"];

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Discrete-event simulator of a checkout with human servers and self-checkouts
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// JSON configuration file (otherwise the parameter line is read from stdin)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Override the configured seed
    #[arg(long, short)]
    seed: Option<u64>,

    /// Also write events.csv and summary.csv into this directory
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Log to stderr: -v for run summaries and events, -vv for every effect
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });

    let config = load_config(&args)?;
    info!("configuration: {config:?}");
    let mut sim = SimBuilder::seeded(config)?.build()?;

    let stdout = io::stdout();
    let trace = TraceWriter::new(BufWriter::new(stdout.lock()));
    let csv = match &args.csv {
        Some(dir) => {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            Some(CsvWriter::new(dir)?)
        }
        None => None,
    };

    let mut obs = SimOutputObserver::new((trace, csv));
    let report = sim.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing simulation output");
    }

    info!(
        "{} visible event(s), last at {}, stats {}",
        report.events, report.final_time, report.stats,
    );
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config: SimConfig = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("reading parameters from stdin")?;
            SimConfig::from_tokens(&input)?
        }
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

fn init_logger(level: LevelFilter) {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Warn);
    for target in LOG_TARGETS {
        builder.filter(Some(target), level);
    }
    builder
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args()))
        .init();
}
