use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("matrix error: {0}")]
    Matrix(#[from] fj_matrix::MatrixError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;
