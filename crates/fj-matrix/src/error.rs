use thiserror::Error;

use crate::shape::Shape;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("invalid matrix shape: {0}")]
    Shape(String),
    #[error("invalid indices ({row}, {col}) for matrix of size {rows}x{cols}")]
    Index {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error(
        "cannot multiply matrices: A is {a} but B is {b}; A's column count ({}) must equal B's row count ({})",
        .a.cols,
        .b.rows
    )]
    DimensionMismatch { a: Shape, b: Shape },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
