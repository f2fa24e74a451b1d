use crate::error::Result;
use crate::kernel::multiply_rows;
use crate::matrix::Matrix;
use crate::multiplier::MatrixMultiplier;
use crate::validate::validate_dimensions;

/// Single-threaded triple-loop multiplier.
///
/// Serves as the reference result the fork-join multiplier is checked
/// against, and as the baseline for speedup measurements.
#[derive(Debug, Clone, Default)]
pub struct SequentialMultiplier;

impl SequentialMultiplier {
    pub fn new() -> Self {
        SequentialMultiplier
    }
}

impl MatrixMultiplier for SequentialMultiplier {
    fn name(&self) -> &str {
        "sequential"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let out = validate_dimensions(a, b)?;

        let mut c = vec![0.0f64; out.numel()];
        multiply_rows(a, b, 0, &mut c, || {});
        Matrix::from_vec(out.rows, out.cols, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    #[test]
    fn test_multiply_2x2() {
        let a = Matrix::new(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::new(&[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let c = SequentialMultiplier::new().multiply(&a, &b).unwrap();
        assert_eq!(c.to_rows(), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
    }

    #[test]
    fn test_row_times_column() {
        let a = Matrix::new(&[vec![1.0, 2.0, 3.0]]).unwrap();
        let b = Matrix::new(&[vec![4.0], vec![5.0], vec![6.0]]).unwrap();
        let c = SequentialMultiplier::new().multiply(&a, &b).unwrap();
        assert_eq!(c.rows(), 1);
        assert_eq!(c.cols(), 1);
        assert_eq!(c.get(0, 0).unwrap(), 32.0);
    }

    #[test]
    fn test_column_times_row() {
        let a = Matrix::new(&[vec![1.0], vec![2.0]]).unwrap();
        let b = Matrix::new(&[vec![3.0, 4.0, 5.0]]).unwrap();
        let c = SequentialMultiplier::new().multiply(&a, &b).unwrap();
        assert_eq!(c.to_rows(), vec![vec![3.0, 4.0, 5.0], vec![6.0, 8.0, 10.0]]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Matrix::new(&[vec![1.0, 2.0]]).unwrap();
        let b = Matrix::new(&[vec![1.0, 2.0]]).unwrap();
        assert!(matches!(
            SequentialMultiplier::new().multiply(&a, &b),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let a = Matrix::new(&[vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]]).unwrap();
        let b = Matrix::new(&[vec![0.7], vec![0.8], vec![0.9]]).unwrap();
        let seq = SequentialMultiplier::new();
        assert_eq!(seq.multiply(&a, &b).unwrap(), seq.multiply(&a, &b).unwrap());
    }

    #[test]
    fn test_name() {
        assert_eq!(SequentialMultiplier::new().name(), "sequential");
    }
}
