//! Tournament selection.
//!
//! Parents are chosen by drawing a small sample of distinct individuals
//! from the pool and keeping the fittest one. Larger tournaments raise
//! selection pressure; the engine uses [`TOURNAMENT_SIZE`].
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use super::types::Scored;
use crate::error::{GaError, Result};
use rand::seq::index;
use rand::Rng;

/// Number of contestants per tournament.
pub const TOURNAMENT_SIZE: usize = 3;

/// Runs a [`TOURNAMENT_SIZE`] tournament over `pool` and returns the index
/// of the winner.
///
/// See [`tournament`] for sampling and tie rules.
pub fn select_parent<R: Rng>(pool: &[Scored], rng: &mut R) -> Result<usize> {
    tournament(pool, TOURNAMENT_SIZE, rng)
}

/// Tournament selection: draw `k` distinct individuals uniformly without
/// replacement and return the index of the one with the highest fitness.
///
/// Ties go to the contestant drawn first.
///
/// # Errors
/// [`GaError::Configuration`] if `k == 0`, and
/// [`GaError::InsufficientPopulation`] if `pool.len() < k`.
///
/// # Complexity
/// O(k) per selection
pub fn tournament<R: Rng>(pool: &[Scored], k: usize, rng: &mut R) -> Result<usize> {
    tournament_by(pool, k, rng, |ind| Ok(ind.fitness))
}

/// Tournament over any pool, scoring only the drawn contestants with
/// `fitness`.
///
/// Contestants are scored in draw order; the first scoring error aborts
/// the tournament.
pub fn tournament_by<T, R, F>(pool: &[T], k: usize, rng: &mut R, mut fitness: F) -> Result<usize>
where
    R: Rng,
    F: FnMut(&T) -> Result<f64>,
{
    if k == 0 {
        return Err(GaError::Configuration("tournament size must be at least 1".into()));
    }
    if pool.len() < k {
        return Err(GaError::InsufficientPopulation {
            required: k,
            available: pool.len(),
        });
    }

    let mut best: Option<(usize, f64)> = None;
    for idx in index::sample(rng, pool.len(), k) {
        let f = fitness(&pool[idx])?;
        match best {
            Some((_, best_f)) if f <= best_f => {}
            _ => best = Some((idx, f)),
        }
    }
    best.map(|(idx, _)| idx).ok_or(GaError::InsufficientPopulation {
        required: k,
        available: pool.len(),
    })
}
