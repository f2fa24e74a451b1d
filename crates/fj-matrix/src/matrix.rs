use crate::error::{MatrixError, Result};
use crate::shape::Shape;

/// An immutable, dense, row-major matrix of `f64` values.
///
/// A `Matrix` always has at least one row and one column and every row has
/// the same length. The storage is copied in at construction and never handed
/// out mutably, so a matrix can be shared freely between threads while a
/// multiplication reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    shape: Shape,
}

impl Matrix {
    /// Create a matrix from a sequence of equal-length rows.
    ///
    /// The rows are deep-copied; mutating `rows` afterwards does not affect
    /// the matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError::Shape`] if `rows` is empty, if the first row is
    /// empty, or if any row's length differs from the first row's.
    pub fn new(rows: &[Vec<f64>]) -> Result<Matrix> {
        Matrix::from_rows(rows)
    }

    /// Generic form of [`Matrix::new`] accepting anything that views as `[f64]`
    /// (arrays, slices, vectors).
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Matrix> {
        let first = rows
            .first()
            .ok_or_else(|| MatrixError::Shape("matrix must have at least one row".to_string()))?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(MatrixError::Shape(
                "matrix must have at least one column".to_string(),
            ));
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::Shape(format!(
                    "matrix must be rectangular: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(Matrix {
            data,
            shape: Shape::new(rows.len(), cols),
        })
    }

    /// Create a matrix from flat row-major data.
    ///
    /// # Errors
    /// Returns [`MatrixError::Shape`] if either dimension is zero or
    /// `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Matrix> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::Shape(format!(
                "matrix dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }
        let shape = Shape::new(rows, cols);
        if data.len() != shape.numel() {
            return Err(MatrixError::Shape(format!(
                "data length {} does not match shape {} (numel={})",
                data.len(),
                shape,
                shape.numel()
            )));
        }
        Ok(Matrix { data, shape })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Errors
    /// Returns [`MatrixError::Index`] if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        if !self.shape.contains(row, col) {
            return Err(MatrixError::Index {
                row,
                col,
                rows: self.shape.rows,
                cols: self.shape.cols,
            });
        }
        Ok(self.data[self.shape.offset(row, col)])
    }

    /// The whole matrix as a row-major slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copies the matrix out into nested row vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data
            .chunks(self.shape.cols)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Largest absolute element-wise difference between two matrices, or
    /// `None` if their shapes differ.
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f64> {
        if self.shape != other.shape {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(x, y)| (x - y).abs())
                .fold(0.0, f64::max),
        )
    }

    /// Returns true if both matrices have the same shape and every pair of
    /// elements differs by at most `tolerance`.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.max_abs_diff(other)
            .map(|d| d <= tolerance)
            .unwrap_or(false)
    }
}
