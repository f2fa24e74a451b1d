//! fj-bench CLI
//!
//! Runs the correctness checks, sweeps fork-join thresholds, or performs a
//! single sequential-vs-parallel run with a live progress bar.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fj_bench::config::{BenchConfig, DEFAULT_SIZES, DEFAULT_THRESHOLDS, RUN_SIZES};
use fj_bench::{run_checks, run_single, seeded_rng, tune_thresholds, Sampling};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

const PROGRESS_TEMPLATE: &str = "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} rows {msg}";

#[derive(Parser)]
#[command(name = "fj-bench")]
#[command(author, version, about = "Fork-join matrix multiplication checks and benchmarks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct Common {
    /// Seed for the random input matrices (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads (defaults to available parallelism)
    #[arg(short = 'j', long)]
    threads: Option<usize>,
}

#[derive(Args, Clone)]
struct TuneArgs {
    /// Square matrix sizes to benchmark
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_SIZES.to_vec())]
    sizes: Vec<usize>,

    /// Thresholds to try for each size
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_THRESHOLDS.to_vec())]
    thresholds: Vec<usize>,

    /// Untimed runs before each measurement
    #[arg(long, default_value_t = 0)]
    warmup: usize,

    /// Timed runs averaged into each measurement
    #[arg(long, default_value_t = 1)]
    iterations: usize,

    #[command(flatten)]
    common: Common,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify the parallel multiplier against the sequential one
    Check {
        #[command(flatten)]
        common: Common,
    },

    /// Sweep thresholds for each size and report the fastest
    Tune(TuneArgs),

    /// Compare sequential and parallel once, with live progress
    Run {
        /// Square matrix size
        #[arg(short, long, default_value_t = 512, value_parser = parse_run_size)]
        size: usize,

        /// Fork-join threshold (rows)
        #[arg(short, long, default_value_t = 64)]
        threshold: usize,

        #[command(flatten)]
        common: Common,
    },

    /// Run the checks, then the threshold sweep
    All(TuneArgs),
}

fn parse_run_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("{}", e))?;
    if RUN_SIZES.contains(&size) {
        Ok(size)
    } else {
        Err(format!("size must be one of {:?}", RUN_SIZES))
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match dispatch(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns `Ok(false)` when the command ran but a check failed.
fn dispatch(command: Commands) -> Result<bool> {
    match command {
        Commands::Check { common } => check(&common),
        Commands::Tune(args) => {
            tune(args)?;
            Ok(true)
        }
        Commands::Run {
            size,
            threshold,
            common,
        } => {
            run(size, threshold, &common)?;
            Ok(true)
        }
        Commands::All(args) => {
            println!("\n[STEP 1/2] Running Correctness Tests...\n");
            if !check(&args.common)? {
                return Ok(false);
            }
            println!("\n[STEP 2/2] Running Performance Benchmarks...\n");
            tune(args)?;
            Ok(true)
        }
    }
}

fn check(common: &Common) -> Result<bool> {
    let report = run_checks(common.seed, common.threads)
        .context("correctness checks failed to run")?;
    println!("{}", report);
    Ok(report.all_passed())
}

impl From<TuneArgs> for BenchConfig {
    fn from(args: TuneArgs) -> Self {
        BenchConfig {
            sizes: args.sizes,
            thresholds: args.thresholds,
            seed: args.common.seed,
            num_threads: args.common.threads,
            sampling: Sampling {
                warmup: args.warmup,
                iterations: args.iterations,
            },
        }
    }
}

fn tune(args: TuneArgs) -> Result<()> {
    let config = BenchConfig::from(args);
    config.validate().context("invalid benchmark configuration")?;

    let mut rng = seeded_rng(config.seed);
    for &size in &config.sizes {
        info!(size, thresholds = ?config.thresholds, "tuning");
        let report = tune_thresholds(
            size,
            &config.thresholds,
            config.sampling,
            &mut rng,
            config.num_threads,
        )
        .with_context(|| format!("threshold tuning failed for {}x{}", size, size))?;
        println!("\n{}\n", report);
    }
    Ok(())
}

fn run(size: usize, threshold: usize, common: &Common) -> Result<()> {
    let bar = ProgressBar::new(size as u64);
    let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
        .context("invalid progress template")?;
    bar.set_style(style);

    let mut rng = seeded_rng(common.seed);
    let report = run_single(size, threshold, &mut rng, common.threads, |p| {
        bar.inc(1);
        bar.set_message(format!("{:.0} ms", p.elapsed.as_secs_f64() * 1000.0));
    })
    .with_context(|| {
        format!(
            "benchmark run failed for {}x{} (threshold {})",
            size, size, threshold
        )
    })?;
    bar.finish_and_clear();

    println!("{}", report);
    if report.max_diff > fj_bench::check::TOLERANCE {
        anyhow::bail!(
            "parallel result diverged from sequential by {:e}",
            report.max_diff
        );
    }
    Ok(())
}
