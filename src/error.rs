//! Error types.
//!
//! [`GaError`] is returned by every fallible engine operation. Fitness
//! evaluators report their own failures through
//! [`EvaluationError`](crate::ga::EvaluationError), which converts into
//! [`GaError::Evaluation`] via `?`.

use crate::ga::EvaluationError;
use thiserror::Error;

/// Errors raised by the genetic algorithm engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    /// Invalid population size, chromosome length, or rate.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A selection pool is smaller than the tournament size.
    #[error("selection pool has {available} individuals, tournament needs {required}")]
    InsufficientPopulation {
        /// Tournament size.
        required: usize,
        /// Size of the pool that was passed in.
        available: usize,
    },

    /// A chromosome handed to an engine operator is not a permutation of
    /// `0..chromosome_length`.
    #[error("invalid chromosome {chromosome:?}: expected a permutation of 0..{length}")]
    InvalidChromosome {
        /// The rejected genes.
        chromosome: Vec<usize>,
        /// Configured chromosome length.
        length: usize,
    },

    /// The fitness evaluator failed. Aborts the current `evolve` call.
    #[error("fitness evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;
