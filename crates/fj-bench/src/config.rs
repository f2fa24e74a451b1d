use crate::error::{BenchError, Result};
use crate::timing::Sampling;

/// Matrix sizes swept by the threshold-tuning benchmark.
pub const DEFAULT_SIZES: &[usize] = &[256, 512, 1024];

/// Thresholds tried for each size.
pub const DEFAULT_THRESHOLDS: &[usize] = &[16, 32, 64, 128, 256, 512];

/// Square sizes offered for a single interactive run.
pub const RUN_SIZES: &[usize] = &[128, 256, 512, 1024];

/// Resolved benchmark settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Square matrix sizes to benchmark.
    pub sizes: Vec<usize>,
    /// Fork-join thresholds to try for each size.
    pub thresholds: Vec<usize>,
    /// RNG seed for input matrices; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Worker pool size; `None` uses the available hardware parallelism.
    pub num_threads: Option<usize>,
    /// Warm-up and timed repetitions per measurement.
    pub sampling: Sampling,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            sizes: DEFAULT_SIZES.to_vec(),
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
            seed: None,
            num_threads: None,
            sampling: Sampling::default(),
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidArgument(
                "at least one matrix size is required".to_string(),
            ));
        }
        if self.thresholds.is_empty() {
            return Err(BenchError::InvalidArgument(
                "at least one threshold is required".to_string(),
            ));
        }
        if let Some(&size) = self.sizes.iter().find(|&&s| s == 0) {
            return Err(BenchError::InvalidArgument(format!(
                "matrix size must be positive, got {}",
                size
            )));
        }
        if self.thresholds.contains(&0) {
            return Err(BenchError::InvalidArgument(
                "threshold must be a positive integer".to_string(),
            ));
        }
        if self.num_threads == Some(0) {
            return Err(BenchError::InvalidArgument(
                "thread count must be positive".to_string(),
            ));
        }
        if self.sampling.iterations == 0 {
            return Err(BenchError::InvalidArgument(
                "at least one timed iteration is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let cfg = BenchConfig::default();
        assert_eq!(cfg.sizes, vec![256, 512, 1024]);
        assert_eq!(cfg.thresholds, vec![16, 32, 64, 128, 256, 512]);
        assert_eq!(cfg.sampling, Sampling::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_and_zero() {
        let cfg = BenchConfig {
            sizes: vec![],
            ..BenchConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = BenchConfig {
            thresholds: vec![8, 0],
            ..BenchConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = BenchConfig {
            sizes: vec![0],
            ..BenchConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = BenchConfig {
            num_threads: Some(0),
            ..BenchConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = BenchConfig {
            sampling: Sampling {
                warmup: 2,
                iterations: 0,
            },
            ..BenchConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
