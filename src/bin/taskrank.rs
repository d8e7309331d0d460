//! taskrank - rank tasks from a YAML document and split a budget of parts.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use u_taskrank::allocation::{AllocationConfig, Rounding, DEFAULT_BUDGET, MAX_BUDGET};
use u_taskrank::criteria::Criterion;
use u_taskrank::extract;
use u_taskrank::pipeline::Prioritizer;
use u_taskrank::report;
use u_taskrank::scoring::{
    NoopObserver, ScoreObserver, TracingObserver, UrgencyCurve, WeightConfig,
};

#[derive(Parser)]
#[command(name = "taskrank")]
#[command(
    about = "Rank tasks by weighted score and split a budget of parts across them",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Task document (YAML)
    file: PathBuf,

    /// Criterion weight as key=value, e.g. dueInDays=3.5 (repeatable)
    #[arg(short, long = "weight", value_parser = parse_weight)]
    weights: Vec<(String, f64)>,

    /// YAML file with criterion weights; --weight entries override it
    #[arg(long)]
    weights_file: Option<PathBuf>,

    /// Number of parts to distribute
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_BUDGET,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_BUDGET))
    )]
    budget: u32,

    /// Rounding applied to each task's share
    #[arg(long, value_enum, default_value_t = RoundArg::HalfEven)]
    round: RoundArg,

    /// Log every sub-score at debug level
    #[arg(long)]
    explain: bool,

    /// Skip the per-task criteria summary
    #[arg(long)]
    no_summary: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoundArg {
    HalfEven,
    HalfAway,
}

impl From<RoundArg> for Rounding {
    fn from(arg: RoundArg) -> Self {
        match arg {
            RoundArg::HalfEven => Rounding::HalfToEven,
            RoundArg::HalfAway => Rounding::HalfAwayFromZero,
        }
    }
}

fn parse_weight(raw: &str) -> Result<(String, f64), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid weight '{value}': {e}"))?;
    Ok((key.trim().to_string(), value))
}

fn build_weights(cli: &Cli) -> u_taskrank::Result<WeightConfig> {
    let mut weights = match &cli.weights_file {
        Some(path) => extract::load_weights(path)?,
        None => WeightConfig::default(),
    };
    for (key, value) in &cli.weights {
        match Criterion::from_key(key) {
            Some(criterion) => weights.set(criterion, *value),
            None => tracing::warn!(key = %key, "ignoring unknown weight key"),
        }
    }
    Ok(weights)
}

fn run(cli: &Cli) -> u_taskrank::Result<()> {
    let tasks = extract::load_tasks(&cli.file)?;
    if tasks.is_empty() {
        println!("No tasks found in {}", cli.file.display());
        return Ok(());
    }

    let weights = build_weights(cli)?;
    let allocation = AllocationConfig::default()
        .with_budget(cli.budget)
        .with_rounding(cli.round.into());
    let prioritizer = Prioritizer::try_new(weights, UrgencyCurve::default(), allocation)?;

    let observer: &dyn ScoreObserver = if cli.explain {
        &TracingObserver
    } else {
        &NoopObserver
    };
    let result = prioritizer.run_observed(&tasks, observer);

    println!("Parsed {} tasks from {}", tasks.len(), cli.file.display());
    if !cli.no_summary {
        print!("{}", report::task_summary(&tasks));
    }
    print!("{}", report::ranking(&tasks, &weights, &result.ranking));
    print!("{}", report::distribution(&result.distribution));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.explain { "u_taskrank=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
