//! Core types shared by the GA engine and its operators.
//!
//! The contract between the generic engine and a problem is a single
//! trait, [`FitnessEvaluator`], that maps a permutation to a score.

use thiserror::Error;

/// A candidate solution: a permutation of `0..n`.
///
/// Chromosomes are plain values. Operators read parents by slice and
/// return owned children, so no two population slots ever alias.
pub type Chromosome = Vec<usize>;

/// Failure reported by a [`FitnessEvaluator`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// No relation is defined between two encoded items
    /// (e.g. a missing entry in a distance table).
    #[error("no relation defined between {from} and {to}")]
    UndefinedRelation {
        /// Label of the first item.
        from: String,
        /// Label of the second item.
        to: String,
    },

    /// The evaluator returned NaN or an infinity.
    #[error("fitness must be finite, got {0}")]
    NonFinite(f64),

    /// Any other evaluator-specific failure.
    #[error("{0}")]
    Other(String),
}

/// Scores a chromosome. Higher is better.
///
/// Implementations must be pure: the same permutation always yields the
/// same score, and the input is never modified. The engine may call
/// `evaluate` from several threads at once when parallel evaluation is
/// enabled, hence the `Send + Sync` bound.
///
/// Any closure `Fn(&[usize]) -> Result<f64, EvaluationError>` is an
/// evaluator:
///
/// ```
/// use permga::ga::{EvaluationError, FitnessEvaluator};
///
/// let identity_bonus = |perm: &[usize]| -> Result<f64, EvaluationError> {
///     Ok(perm.iter().enumerate().filter(|&(i, &g)| i == g).count() as f64)
/// };
/// assert_eq!(identity_bonus.evaluate(&[0, 2, 1]).unwrap(), 1.0);
/// ```
pub trait FitnessEvaluator: Send + Sync {
    /// Returns the fitness of `chromosome`.
    fn evaluate(&self, chromosome: &[usize]) -> Result<f64, EvaluationError>;
}

impl<F> FitnessEvaluator for F
where
    F: Fn(&[usize]) -> Result<f64, EvaluationError> + Send + Sync,
{
    fn evaluate(&self, chromosome: &[usize]) -> Result<f64, EvaluationError> {
        self(chromosome)
    }
}

/// A chromosome paired with the score computed for it in the current
/// generation.
///
/// Scores live only as long as the generation that computed them; the
/// chromosome itself never carries one.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    /// The candidate permutation.
    pub chromosome: Chromosome,
    /// Its fitness (higher is better).
    pub fitness: f64,
}

impl Scored {
    /// Pairs a chromosome with its fitness.
    pub fn new(chromosome: Chromosome, fitness: f64) -> Self {
        Self {
            chromosome,
            fitness,
        }
    }
}

/// Returns `true` if `perm` contains every value of `0..n` exactly once.
pub fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &gene in perm {
        if gene >= n || seen[gene] {
            return false;
        }
        seen[gene] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_permutation() {
        assert!(is_valid_permutation(&[2, 0, 1], 3));
        assert!(is_valid_permutation(&[], 0));
    }

    #[test]
    fn test_invalid_permutations() {
        assert!(!is_valid_permutation(&[0, 0, 1], 3), "duplicate");
        assert!(!is_valid_permutation(&[0, 1, 3], 3), "out of range");
        assert!(!is_valid_permutation(&[0, 1], 3), "too short");
    }

    #[test]
    fn test_closure_is_evaluator() {
        let eval = |perm: &[usize]| -> Result<f64, EvaluationError> { Ok(perm[0] as f64) };
        assert_eq!(eval.evaluate(&[4, 1]).unwrap(), 4.0);
    }

    #[test]
    fn test_closure_error_passes_through() {
        let eval = |_: &[usize]| -> Result<f64, EvaluationError> {
            Err(EvaluationError::Other("boom".into()))
        };
        assert_eq!(
            eval.evaluate(&[0, 1]),
            Err(EvaluationError::Other("boom".into()))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = EvaluationError::UndefinedRelation {
            from: "A".into(),
            to: "E".into(),
        };
        assert_eq!(err.to_string(), "no relation defined between A and E");
        assert_eq!(
            EvaluationError::NonFinite(f64::INFINITY).to_string(),
            "fitness must be finite, got inf"
        );
    }
}
