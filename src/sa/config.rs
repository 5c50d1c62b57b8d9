//! SA configuration and cooling schedules.

use crate::error::Error;

/// Cooling schedule for temperature reduction.
///
/// The schedule is applied once per temperature level, after
/// [`SaConfig::iterations_per_temperature`] iterations at that level.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    ///
    /// Most widely used. Typical `alpha`: 0.90-0.99.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high T, slow at low T.
    ///
    /// Reference: Lundy & Mees (1986)
    LundyMees {
        /// Cooling parameter, positive.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.95 }
    }
}

impl CoolingSchedule {
    /// Temperature of the next level.
    pub fn next(&self, temperature: f64) -> f64 {
        match *self {
            CoolingSchedule::Geometric { alpha } => temperature * alpha,
            CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
        }
    }
}

/// Configuration for the Simulated Annealing runners.
///
/// # Examples
///
/// ```
/// use u_localsearch::sa::{SaConfig, CoolingSchedule};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.01)
///     .with_cooling_rate(0.98)
///     .with_iterations_per_temperature(80);
/// assert_eq!(config.cooling, CoolingSchedule::Geometric { alpha: 0.98 });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Minimum temperature. The run stops once T is at or below this.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Number of iterations at each temperature level.
    pub iterations_per_temperature: usize,

    /// Number of annealing runs performed by random restart.
    pub num_restarts: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 0.01,
            cooling: CoolingSchedule::default(),
            iterations_per_temperature: 100,
            num_restarts: 10,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Shorthand for geometric cooling with factor `alpha`.
    pub fn with_cooling_rate(mut self, alpha: f64) -> Self {
        self.cooling = CoolingSchedule::Geometric { alpha };
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_num_restarts(mut self, n: usize) -> Self {
        self.num_restarts = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Temperatures and cooling parameters must be finite; an infinite
    /// temperature never cools below the floor.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !self.min_temperature.is_finite() || self.min_temperature <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "min_temperature must be positive and finite, got {}",
                self.min_temperature
            )));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(Error::InvalidConfig(
                "min_temperature must be less than initial_temperature".into(),
            ));
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
                    return Err(Error::InvalidConfig(format!(
                        "geometric alpha must be in (0, 1), got {alpha}"
                    )));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if !beta.is_finite() || beta <= 0.0 {
                    return Err(Error::InvalidConfig(format!(
                        "lundy-mees beta must be positive and finite, got {beta}"
                    )));
                }
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
        let config = SaConfig::default();
        assert!((config.initial_temperature - 100.0).abs() < 1e-10);
        assert!((config.min_temperature - 0.01).abs() < 1e-15);
        assert_eq!(config.iterations_per_temperature, 100);
        assert_eq!(config.num_restarts, 10);
        assert_eq!(config.cooling, CoolingSchedule::Geometric { alpha: 0.95 });
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
        let config = SaConfig::default().with_min_temperature(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_bad_alpha() {
        let config = SaConfig::default().with_cooling_rate(1.5);
        assert!(config.validate().is_err());
        let config = SaConfig::default().with_cooling_rate(1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_beta() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::LundyMees { beta: -1.0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_non_finite_temperature() {
        let config = SaConfig::default().with_initial_temperature(f64::INFINITY);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        let config = SaConfig::default().with_initial_temperature(f64::NAN);
        assert!(config.validate().is_err());
        let config = SaConfig::default().with_min_temperature(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_non_finite_cooling() {
        let config = SaConfig::default().with_cooling_rate(f64::NAN);
        assert!(config.validate().is_err());
        let config = SaConfig::default().with_cooling(CoolingSchedule::LundyMees { beta: f64::NAN });
        assert!(config.validate().is_err());
        let config =
            SaConfig::default().with_cooling(CoolingSchedule::LundyMees { beta: f64::INFINITY });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cooling_next() {
        let geometric = CoolingSchedule::Geometric { alpha: 0.5 };
        assert!((geometric.next(10.0) - 5.0).abs() < 1e-12);

        let lundy = CoolingSchedule::LundyMees { beta: 0.1 };
        assert!((lundy.next(10.0) - 5.0).abs() < 1e-12);
    }
}
