//! Correctness self-check run before benchmarking.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use fj_matrix::{
    ForkJoinConfig, ForkJoinMultiplier, Matrix, MatrixError, MatrixMultiplier, ProgressFn,
    SequentialMultiplier,
};
use tracing::warn;

use crate::error::Result;
use crate::random::{random_matrix, seeded_rng};

/// Element-wise tolerance when comparing the two multipliers.
pub const TOLERANCE: f64 = 1e-9;

/// Result of a single named check.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl CheckOutcome {
    fn new(name: &'static str, passed: bool, detail: impl Into<String>) -> Self {
        CheckOutcome {
            name,
            passed,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f, "{}", rule)?;
        writeln!(f, "MATRIX MULTIPLICATION TESTS")?;
        writeln!(f, "{}", rule)?;
        for (i, o) in self.outcomes.iter().enumerate() {
            let status = if o.passed { "PASS" } else { "FAIL" };
            writeln!(f, "Test {} - {}... {} ({})", i + 1, o.name, status, o.detail)?;
        }
        writeln!(f, "{}", rule)?;
        writeln!(f, "RESULT: {}/{} tests passed", self.passed(), self.total())?;
        if self.all_passed() {
            writeln!(f, "STATUS: ALL TESTS PASSED - Ready for benchmarking")?;
        } else {
            writeln!(f, "STATUS: SOME TESTS FAILED - Fix before benchmarking")?;
        }
        write!(f, "{}", rule)
    }
}

/// Runs every check and collects the outcomes. Individual check failures are
/// recorded in the report; only setup errors (e.g. the pool failing to
/// start) are returned as `Err`.
pub fn run_checks(seed: Option<u64>, num_threads: Option<usize>) -> Result<CheckReport> {
    let outcomes = vec![
        sequential_vs_parallel(seed, num_threads)?,
        row_times_column(num_threads)?,
        dimension_validation(num_threads)?,
        progress_completeness(seed, num_threads)?,
    ];
    for o in outcomes.iter().filter(|o| !o.passed) {
        warn!(check = o.name, detail = %o.detail, "check failed");
    }
    Ok(CheckReport { outcomes })
}

fn fork_join(threshold: usize, num_threads: Option<usize>) -> Result<ForkJoinMultiplier> {
    Ok(ForkJoinMultiplier::with_config(ForkJoinConfig {
        threshold,
        num_threads,
    })?)
}

fn sequential_vs_parallel(seed: Option<u64>, num_threads: Option<usize>) -> Result<CheckOutcome> {
    const NAME: &str = "Sequential vs Parallel (100x100)";
    let mut rng = seeded_rng(seed);
    let a = random_matrix(100, 100, &mut rng)?;
    let b = random_matrix(100, 100, &mut rng)?;
    let seq = SequentialMultiplier::new().multiply(&a, &b)?;
    let par = fork_join(32, num_threads)?.multiply(&a, &b)?;
    Ok(match seq.max_abs_diff(&par) {
        Some(diff) if diff <= TOLERANCE => {
            CheckOutcome::new(NAME, true, format!("max diff {:e}", diff))
        }
        Some(diff) => CheckOutcome::new(NAME, false, format!("max diff {:e}", diff)),
        None => CheckOutcome::new(
            NAME,
            false,
            format!("shape {} != {}", par.shape(), seq.shape()),
        ),
    })
}

fn row_times_column(num_threads: Option<usize>) -> Result<CheckOutcome> {
    const NAME: &str = "Edge case: Row x Column";
    let row = Matrix::new(&[vec![1.0, 2.0, 3.0]])?;
    let col = Matrix::new(&[vec![4.0], vec![5.0], vec![6.0]])?;
    // 1*4 + 2*5 + 3*6
    let value = fork_join(1, num_threads)?.multiply(&row, &col)?.get(0, 0)?;
    Ok(CheckOutcome::new(
        NAME,
        (value - 32.0).abs() < TOLERANCE,
        format!("got {}", value),
    ))
}

fn dimension_validation(num_threads: Option<usize>) -> Result<CheckOutcome> {
    const NAME: &str = "Dimension validation";
    let row = Matrix::new(&[vec![1.0, 2.0, 3.0]])?;
    let incompatible = Matrix::new(&[vec![1.0, 2.0]])?;
    let multipliers: [Box<dyn MatrixMultiplier>; 2] = [
        Box::new(SequentialMultiplier::new()),
        Box::new(fork_join(1, num_threads)?),
    ];
    for mm in &multipliers {
        match mm.multiply(&row, &incompatible) {
            Err(MatrixError::DimensionMismatch { .. }) => {}
            Err(other) => {
                return Ok(CheckOutcome::new(
                    NAME,
                    false,
                    format!("{}: unexpected error {}", mm.name(), other),
                ))
            }
            Ok(_) => {
                return Ok(CheckOutcome::new(
                    NAME,
                    false,
                    format!("{}: no error raised", mm.name()),
                ))
            }
        }
    }
    Ok(CheckOutcome::new(NAME, true, "mismatch rejected"))
}

fn progress_completeness(seed: Option<u64>, num_threads: Option<usize>) -> Result<CheckOutcome> {
    const NAME: &str = "Progress completeness";
    let mut rng = seeded_rng(seed);
    let a = random_matrix(64, 16, &mut rng)?;
    let b = random_matrix(16, 16, &mut rng)?;
    let calls = AtomicUsize::new(0);
    let last = AtomicUsize::new(0);
    let cb: &ProgressFn<'_> = &|n| {
        calls.fetch_add(1, Ordering::Relaxed);
        last.fetch_max(n, Ordering::Relaxed);
    };
    fork_join(4, num_threads)?.multiply_with_progress(&a, &b, Some(cb))?;
    let calls = calls.load(Ordering::Relaxed);
    let last = last.load(Ordering::Relaxed);
    Ok(CheckOutcome::new(
        NAME,
        calls == a.rows() && last == a.rows(),
        format!("{} callbacks, final count {}", calls, last),
    ))
}
