//! Hill-climbing configuration.

/// Configuration parameters for the hill-climbing runners.
///
/// # Examples
///
/// ```
/// use u_localsearch::hill::HillConfig;
///
/// let config = HillConfig::default()
///     .with_max_steps(500)
///     .with_max_restarts(20)
///     .with_seed(7);
/// assert_eq!(config.max_steps, 500);
/// assert_eq!(config.max_restarts, 20);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillConfig {
    /// Maximum accepted-move iterations of a single climb.
    pub max_steps: usize,
    /// Maximum climbs performed by random restart.
    pub max_restarts: usize,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for HillConfig {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            max_restarts: 1000,
            seed: None,
        }
    }
}

impl HillConfig {
    /// Sets the step budget of a single climb.
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    /// Sets the number of climbs random restart may perform.
    pub fn with_max_restarts(mut self, n: usize) -> Self {
        self.max_restarts = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
