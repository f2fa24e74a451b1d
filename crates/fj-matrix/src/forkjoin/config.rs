use crate::error::{MatrixError, Result};

/// Settings for a [`super::ForkJoinMultiplier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForkJoinConfig {
    /// Row count at or below which a task computes directly instead of
    /// splitting. Must be at least 1.
    pub threshold: usize,
    /// Worker thread count. `None` sizes the pool to the available hardware
    /// parallelism.
    pub num_threads: Option<usize>,
}

impl ForkJoinConfig {
    pub fn new(threshold: usize) -> Self {
        ForkJoinConfig {
            threshold,
            num_threads: None,
        }
    }

    /// Builder-style override of the worker count.
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.threshold < 1 {
            return Err(MatrixError::Config(format!(
                "threshold must be a positive integer, got {}",
                self.threshold
            )));
        }
        if self.num_threads == Some(0) {
            return Err(MatrixError::Config(
                "worker thread count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ForkJoinConfig::new(32);
        assert_eq!(cfg.threshold, 32);
        assert_eq!(cfg.num_threads, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_zero_threshold() {
        assert!(matches!(
            ForkJoinConfig::new(0).validate(),
            Err(MatrixError::Config(_))
        ));
    }

    #[test]
    fn test_zero_threads() {
        assert!(matches!(
            ForkJoinConfig::new(1).num_threads(0).validate(),
            Err(MatrixError::Config(_))
        ));
        assert!(ForkJoinConfig::new(1).num_threads(3).validate().is_ok());
    }
}
