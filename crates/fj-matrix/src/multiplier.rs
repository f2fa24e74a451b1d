use std::fmt::Debug;

use crate::error::Result;
use crate::matrix::Matrix;

/// Common interface for matrix multiplication strategies (sequential,
/// fork-join, ...).
///
/// Implementations validate dimensions before doing any work and return a
/// freshly allocated `a.rows() x b.cols()` matrix.
pub trait MatrixMultiplier: Send + Sync + Debug {
    /// Returns the name of this strategy (e.g., "sequential", "fork-join").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    ///
    /// # Errors
    /// Returns [`crate::MatrixError::DimensionMismatch`] when
    /// `a.cols() != b.rows()`.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;
}
