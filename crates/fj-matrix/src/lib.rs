//! `fj-matrix` - Dense matrices with sequential and fork-join parallel multiplication.
//!
//! This crate provides:
//! - An immutable, shape-validated `Matrix` of `f64`
//! - A `MatrixMultiplier` trait for interchangeable multiplication strategies
//! - A reference `SequentialMultiplier`
//! - A `ForkJoinMultiplier` that recursively splits output rows across a
//!   work-stealing thread pool
//! - Optional per-row progress reporting from worker threads

pub mod error;
pub mod forkjoin;
mod kernel;
pub mod matrix;
pub mod multiplier;
pub mod progress;
pub mod sequential;
pub mod shape;
pub mod validate;

// Re-export primary types at the crate root for convenience.
pub use error::{MatrixError, Result};
pub use forkjoin::{ForkJoinConfig, ForkJoinMultiplier};
pub use matrix::Matrix;
pub use multiplier::MatrixMultiplier;
pub use progress::{Progress, ProgressFn};
pub use sequential::SequentialMultiplier;
pub use shape::Shape;
pub use validate::validate_dimensions;
