use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::shape::Shape;

/// Checks that `a @ b` is defined, i.e. `a.cols() == b.rows()`, and returns
/// the shape of the product.
///
/// Both multipliers call this before allocating or spawning anything, so a
/// mismatch never leaves partial work behind.
pub fn validate_dimensions(a: &Matrix, b: &Matrix) -> Result<Shape> {
    a.shape()
        .product(&b.shape())
        .ok_or(MatrixError::DimensionMismatch {
            a: a.shape(),
            b: b.shape(),
        })
}
