//! One sequential-vs-parallel comparison at a fixed size and threshold, with
//! live progress from the parallel run.

use std::fmt;
use std::time::{Duration, Instant};

use fj_matrix::{
    ForkJoinConfig, ForkJoinMultiplier, MatrixMultiplier, ProgressFn, SequentialMultiplier,
};
use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::random::random_matrix;
use crate::timing::{as_millis_f64, measure};

/// Snapshot passed to the caller's progress sink during the parallel run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunProgress {
    /// Rows completed so far.
    pub completed: usize,
    /// Total rows in the output.
    pub total: usize,
    /// Time since the parallel run started.
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub size: usize,
    pub threshold: usize,
    pub threads: usize,
    pub sequential: Duration,
    pub parallel: Duration,
    /// Largest element-wise difference between the two results.
    pub max_diff: f64,
}

impl RunReport {
    /// `sequential / parallel`, or `None` when the parallel time rounds to
    /// zero.
    pub fn speedup(&self) -> Option<f64> {
        if self.parallel.is_zero() {
            None
        } else {
            Some(self.sequential.as_secs_f64() / self.parallel.as_secs_f64())
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let speedup = match self.speedup() {
            Some(s) => format!("{:.2}x", s),
            None => "N/A".to_string(),
        };
        writeln!(
            f,
            "{:<12} {:<10} {:<8} {:<12} {:<12} {:<8}",
            "Size", "Threshold", "Threads", "Seq(ms)", "Par(ms)", "Speedup"
        )?;
        write!(
            f,
            "{:<12} {:<10} {:<8} {:<12.3} {:<12.3} {:<8}",
            format!("{}x{}", self.size, self.size),
            self.threshold,
            self.threads,
            as_millis_f64(self.sequential),
            as_millis_f64(self.parallel),
            speedup
        )
    }
}

/// Times the sequential multiplier on two random `size x size` matrices,
/// then the fork-join multiplier with `threshold`, forwarding each completed
/// row to `on_progress`.
pub fn run_single<R, P>(
    size: usize,
    threshold: usize,
    rng: &mut R,
    num_threads: Option<usize>,
    on_progress: P,
) -> Result<RunReport>
where
    R: Rng + ?Sized,
    P: Fn(RunProgress) + Send + Sync,
{
    let multiplier = ForkJoinMultiplier::with_config(ForkJoinConfig {
        threshold,
        num_threads,
    })?;
    let a = random_matrix(size, size, rng)?;
    let b = random_matrix(size, size, rng)?;

    let (expected, sequential) = measure(|| SequentialMultiplier::new().multiply(&a, &b));
    let expected = expected?;
    info!(size, sequential_ms = as_millis_f64(sequential), "sequential run finished");

    let start = Instant::now();
    let forward: &ProgressFn<'_> = &|completed| {
        on_progress(RunProgress {
            completed,
            total: size,
            elapsed: start.elapsed(),
        })
    };
    let actual = multiplier.multiply_with_progress(&a, &b, Some(forward))?;
    let parallel = start.elapsed();

    Ok(RunReport {
        size,
        threshold,
        threads: multiplier.num_threads(),
        sequential,
        parallel,
        max_diff: actual.max_abs_diff(&expected).unwrap_or(f64::INFINITY),
    })
}
