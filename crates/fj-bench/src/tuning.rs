//! Threshold sweep: times the fork-join multiplier at several thresholds
//! against a sequential baseline and picks the fastest.

use std::fmt;
use std::time::Duration;

use fj_matrix::{ForkJoinConfig, ForkJoinMultiplier, MatrixMultiplier, SequentialMultiplier};
use rand::Rng;
use tracing::{debug, info};

use crate::error::{BenchError, Result};
use crate::random::random_matrix;
use crate::timing::{as_millis_f64, measure_avg, Sampling};

/// Timing of one threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdRun {
    pub threshold: usize,
    /// Mean of the timed runs.
    pub time: Duration,
    /// Sequential time divided by this run's time.
    pub speedup: f64,
}

#[derive(Debug, Clone)]
pub struct TuningReport {
    pub size: usize,
    /// Repetitions behind every time in the report.
    pub sampling: Sampling,
    pub sequential: Duration,
    pub runs: Vec<ThresholdRun>,
}

impl TuningReport {
    /// The fastest run; the earliest threshold wins ties.
    pub fn best(&self) -> Option<&ThresholdRun> {
        self.runs
            .iter()
            .reduce(|best, run| if run.time < best.time { run } else { best })
    }
}

/// `sequential / parallel`, with a zero parallel time clamped to one
/// nanosecond so the ratio stays finite.
pub fn speedup(sequential: Duration, parallel: Duration) -> f64 {
    let parallel = parallel.max(Duration::from_nanos(1));
    sequential.as_secs_f64() / parallel.as_secs_f64()
}

/// Multiplies two random `size x size` matrices sequentially, then with each
/// threshold in turn. Every time is the mean over `sampling.iterations` timed
/// runs after `sampling.warmup` untimed ones.
pub fn tune_thresholds<R: Rng + ?Sized>(
    size: usize,
    thresholds: &[usize],
    sampling: Sampling,
    rng: &mut R,
    num_threads: Option<usize>,
) -> Result<TuningReport> {
    if thresholds.is_empty() {
        return Err(BenchError::InvalidArgument(
            "at least one threshold is required".to_string(),
        ));
    }

    let a = random_matrix(size, size, rng)?;
    let b = random_matrix(size, size, rng)?;

    let baseline = SequentialMultiplier::new();
    let sequential = measure_avg(sampling.warmup, sampling.iterations, || {
        baseline.multiply(&a, &b)
    })?;
    info!(
        size,
        sequential_ms = as_millis_f64(sequential),
        "sequential baseline"
    );

    let mut runs = Vec::with_capacity(thresholds.len());
    for &threshold in thresholds {
        let multiplier = ForkJoinMultiplier::with_config(ForkJoinConfig {
            threshold,
            num_threads,
        })?;
        let time = measure_avg(sampling.warmup, sampling.iterations, || {
            multiplier.multiply(&a, &b)
        })?;
        let run = ThresholdRun {
            threshold,
            time,
            speedup: speedup(sequential, time),
        };
        debug!(
            size,
            threshold,
            time_ms = as_millis_f64(time),
            speedup = run.speedup,
            "threshold run"
        );
        runs.push(run);
    }

    Ok(TuningReport {
        size,
        sampling,
        sequential,
        runs,
    })
}

impl fmt::Display for TuningReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Threshold Tuning for Matrix {}x{} ===",
            self.size, self.size
        )?;
        writeln!(
            f,
            "Timing: {} warm-up, {} timed run(s) per measurement",
            self.sampling.warmup, self.sampling.iterations
        )?;
        writeln!(
            f,
            "Sequential baseline: {:.3} ms",
            as_millis_f64(self.sequential)
        )?;
        writeln!(
            f,
            "{:<10} {:<18} {:<10}",
            "Threshold", "Parallel Time(ms)", "Speedup"
        )?;
        for run in &self.runs {
            writeln!(
                f,
                "{:<10} {:<18.3} {:<10.2}",
                run.threshold,
                as_millis_f64(run.time),
                run.speedup
            )?;
        }
        if let Some(best) = self.best() {
            writeln!(f)?;
            writeln!(
                f,
                ">>> Best Threshold for {}x{} matrix:",
                self.size, self.size
            )?;
            writeln!(f, "    Threshold = {}", best.threshold)?;
            writeln!(f, "    Time      = {:.3} ms", as_millis_f64(best.time))?;
            writeln!(f, "    Speedup   = {:.2}", best.speedup)?;
        }
        write!(f, "=== End of Threshold Tuning ===")
    }
}
