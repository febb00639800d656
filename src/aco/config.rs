//! Search budget and runtime options.

use std::time::Duration;

/// Configuration for the ant search.
///
/// The budget is exactly `num_iterations * num_ants` route constructions.
/// There is no convergence criterion: the full budget always runs unless
/// the optional `time_limit` expires or the run is cancelled.
///
/// # Examples
///
/// ```
/// use u_hampath::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_iterations(20)
///     .with_num_ants(5)
///     .with_seed(7);
/// assert_eq!(config.budget(), 100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of iterations (batches of ants).
    pub num_iterations: usize,

    /// Number of ants per iteration.
    pub num_ants: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// Build the ants of one iteration on the rayon pool.
    ///
    /// Only takes effect with the `parallel` feature. Seeded results are
    /// identical either way.
    pub parallel: bool,

    /// Wall-clock deadline, checked between iterations.
    pub time_limit: Option<Duration>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_iterations: 50,
            num_ants: 10,
            seed: None,
            parallel: false,
            time_limit: None,
        }
    }
}

impl AcoConfig {
    pub fn with_num_iterations(mut self, n: usize) -> Self {
        self.num_iterations = n;
        self
    }

    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Total number of route constructions.
    pub fn budget(&self) -> usize {
        self.num_iterations.saturating_mul(self.num_ants)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_iterations == 0 {
            return Err("num_iterations must be > 0".into());
        }
        if self.num_ants == 0 {
            return Err("num_ants must be > 0".into());
        }
        if let Some(limit) = self.time_limit {
            if limit.is_zero() {
                return Err("time_limit must be non-zero".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert_eq!(config.num_iterations, 50);
        assert_eq!(config.num_ants, 10);
        assert_eq!(config.budget(), 500);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
        assert!(config.time_limit.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AcoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = AcoConfig::default().with_num_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_ants() {
        let config = AcoConfig::default().with_num_ants(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_time_limit() {
        let config = AcoConfig::default().with_time_limit(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
