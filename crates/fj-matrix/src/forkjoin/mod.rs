pub mod config;
mod task;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::multiplier::MatrixMultiplier;
use crate::progress::{Progress, ProgressFn};
use crate::validate::validate_dimensions;

pub use config::ForkJoinConfig;
use task::RowTask;

/// Divide-and-conquer parallel multiplier.
///
/// The output rows are split recursively in half until a range holds at most
/// `threshold` rows; such leaf ranges are computed directly with the same
/// loop nest as [`crate::SequentialMultiplier`]. Tasks run on a work-stealing
/// pool owned by the multiplier, so the result matches the sequential one
/// exactly regardless of threshold or thread count.
#[derive(Debug)]
pub struct ForkJoinMultiplier {
    threshold: usize,
    pool: ThreadPool,
}

impl ForkJoinMultiplier {
    /// Create a multiplier with the given split threshold and a pool sized to
    /// the available hardware parallelism.
    ///
    /// # Errors
    /// Returns [`crate::MatrixError::Config`] if `threshold < 1`.
    pub fn new(threshold: usize) -> Result<Self> {
        Self::with_config(ForkJoinConfig::new(threshold))
    }

    /// Create a multiplier from a full [`ForkJoinConfig`].
    pub fn with_config(config: ForkJoinConfig) -> Result<Self> {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.num_threads.unwrap_or(0))
            .thread_name(|i| format!("fj-worker-{}", i))
            .build()?;
        Ok(ForkJoinMultiplier {
            threshold: config.threshold,
            pool,
        })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Number of worker threads in the pool.
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Multiply `a @ b`, reporting each completed output row to `on_progress`.
    ///
    /// Blocks the calling thread until the whole task tree has finished. The
    /// callback may run concurrently on any worker; panics inside it are
    /// discarded.
    pub fn multiply_with_progress(
        &self,
        a: &Matrix,
        b: &Matrix,
        on_progress: Option<&ProgressFn<'_>>,
    ) -> Result<Matrix> {
        let out = validate_dimensions(a, b)?;
        debug!(
            a = %a.shape(),
            b = %b.shape(),
            threshold = self.threshold,
            threads = self.num_threads(),
            "fork-join multiply"
        );

        let mut c = vec![0.0f64; out.numel()];
        let progress = Progress::new(on_progress);
        let task = RowTask {
            a,
            b,
            threshold: self.threshold,
            progress: &progress,
        };
        self.pool.install(|| task.compute(0, out.rows, &mut c));

        debug_assert_eq!(progress.completed(), out.rows);
        Matrix::from_vec(out.rows, out.cols, c)
    }
}

impl MatrixMultiplier for ForkJoinMultiplier {
    fn name(&self) -> &str {
        "fork-join"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        self.multiply_with_progress(a, b, None)
    }
}
