//! GA configuration.
//!
//! [`GaConfig`] holds every parameter that controls the evolutionary loop.
//! It is validated once when a [`GaRunner`](super::GaRunner) is built and
//! stays immutable afterwards.

use crate::error::{GaError, Result};

/// What a repeated call to [`GaRunner::evolve`](super::GaRunner::evolve)
/// starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvolveMode {
    /// Keep evolving the population left by the previous call.
    #[default]
    Continue,

    /// Replace the population with fresh random permutations before
    /// every call.
    Restart,
}

/// Configuration for the permutation genetic algorithm.
///
/// # Defaults
///
/// ```
/// use permga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.mutation_rate, 0.01);
/// assert_eq!(config.crossover_rate, 0.8);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use permga::ga::{EvolveMode, GaConfig};
///
/// let config = GaConfig::new(50, 12)
///     .with_mutation_rate(0.05)
///     .with_elite_ratio(0.2)
///     .with_evolve_mode(EvolveMode::Restart)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of chromosomes in the population.
    pub population_size: usize,

    /// Number of genes per chromosome; chromosomes are permutations of
    /// `0..chromosome_length`.
    pub chromosome_length: usize,

    /// Probability that a child receives one swap mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability of recombining two parents with ordered crossover
    /// (0.0–1.0). Otherwise the child is a copy of the first parent.
    pub crossover_rate: f64,

    /// Fraction of the population copied unchanged into the next
    /// generation (0.0–1.0). The elite count is
    /// `floor(elite_ratio * population_size)`.
    pub elite_ratio: f64,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Behaviour of repeated `evolve` calls.
    pub evolve_mode: EvolveMode,

    /// Evaluate the population on rayon's thread pool.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    /// Results are identical to sequential evaluation.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            chromosome_length: 2,
            mutation_rate: 0.01,
            crossover_rate: 0.8,
            elite_ratio: 0.1,
            seed: None,
            evolve_mode: EvolveMode::Continue,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Creates a configuration with default rates.
    pub fn new(population_size: usize, chromosome_length: usize) -> Self {
        Self {
            population_size,
            chromosome_length,
            ..Self::default()
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the chromosome length.
    pub fn with_chromosome_length(mut self, n: usize) -> Self {
        self.chromosome_length = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets what repeated `evolve` calls start from.
    pub fn with_evolve_mode(mut self, mode: EvolveMode) -> Self {
        self.evolve_mode = mode;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of individuals carried over unchanged each generation.
    pub fn elite_count(&self) -> usize {
        (self.elite_ratio * self.population_size as f64).floor() as usize
    }

    /// Validates the configuration.
    ///
    /// Builders store values as given; out-of-range rates (including NaN)
    /// are reported here as [`GaError::Configuration`].
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GaError::Configuration(
                "population_size must be at least 1".into(),
            ));
        }
        if self.chromosome_length < 2 {
            return Err(GaError::Configuration(format!(
                "chromosome_length must be at least 2, got {}",
                self.chromosome_length
            )));
        }
        check_unit("mutation_rate", self.mutation_rate)?;
        check_unit("crossover_rate", self.crossover_rate)?;
        check_unit("elite_ratio", self.elite_ratio)?;
        Ok(())
    }
}

fn check_unit(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GaError::Configuration(format!(
            "{name} must be in [0, 1], got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert!((config.mutation_rate - 0.01).abs() < 1e-12);
        assert!((config.crossover_rate - 0.8).abs() < 1e-12);
        assert!((config.elite_ratio - 0.1).abs() < 1e-12);
        assert_eq!(config.evolve_mode, EvolveMode::Continue);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::new(20, 8)
            .with_population_size(30)
            .with_chromosome_length(9)
            .with_mutation_rate(0.02)
            .with_crossover_rate(0.5)
            .with_elite_ratio(0.2)
            .with_seed(7)
            .with_evolve_mode(EvolveMode::Restart)
            .with_parallel(true);

        assert_eq!(config.population_size, 30);
        assert_eq!(config.chromosome_length, 9);
        assert!((config.mutation_rate - 0.02).abs() < 1e-12);
        assert!((config.crossover_rate - 0.5).abs() < 1e-12);
        assert!((config.elite_ratio - 0.2).abs() < 1e-12);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.evolve_mode, EvolveMode::Restart);
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::new(1, 2).validate().is_ok());
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        let err = GaConfig::new(0, 5).validate().unwrap_err();
        assert!(matches!(err, GaError::Configuration(_)));
    }

    #[test]
    fn test_validate_short_chromosome() {
        for len in [0, 1] {
            let err = GaConfig::new(10, len).validate().unwrap_err();
            assert!(matches!(err, GaError::Configuration(_)), "len {len}");
        }
    }

    #[test]
    fn test_validate_rates_out_of_range() {
        let base = GaConfig::new(10, 5);
        for config in [
            base.clone().with_mutation_rate(-0.1),
            base.clone().with_mutation_rate(1.5),
            base.clone().with_crossover_rate(2.0),
            base.clone().with_elite_ratio(-1.0),
            base.clone().with_elite_ratio(f64::NAN),
        ] {
            assert!(
                matches!(config.validate(), Err(GaError::Configuration(_))),
                "expected rejection: {config:?}"
            );
        }
    }

    #[test]
    fn test_validate_rate_bounds_inclusive() {
        let config = GaConfig::new(10, 5)
            .with_mutation_rate(1.0)
            .with_crossover_rate(0.0)
            .with_elite_ratio(1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_elite_count_floors() {
        assert_eq!(GaConfig::new(100, 4).elite_count(), 10);
        assert_eq!(GaConfig::new(25, 4).elite_count(), 2);
        assert_eq!(GaConfig::new(5, 4).with_elite_ratio(0.0).elite_count(), 0);
        assert_eq!(GaConfig::new(7, 4).with_elite_ratio(1.0).elite_count(), 7);
    }

    #[test]
    fn test_error_message_names_field() {
        let err = GaConfig::new(10, 5)
            .with_crossover_rate(1.2)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: crossover_rate must be in [0, 1], got 1.2"
        );
    }
}
