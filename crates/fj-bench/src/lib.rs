//! `fj-bench` - Correctness checks and threshold benchmarks for `fj-matrix`.

pub mod check;
pub mod config;
pub mod error;
pub mod random;
pub mod run;
pub mod timing;
pub mod tuning;

pub use check::{run_checks, CheckOutcome, CheckReport};
pub use config::BenchConfig;
pub use error::{BenchError, Result};
pub use random::{random_matrix, seeded_rng};
pub use run::{run_single, RunProgress, RunReport};
pub use timing::{measure, measure_avg, Sampling};
pub use tuning::{tune_thresholds, ThresholdRun, TuningReport};
