//! Permutation-preserving genetic operators.
//!
//! All operators work on `&[usize]` permutations of `0..n` and never read
//! or write anything outside the slices they are given. Children are
//! returned as new vectors, so a parent that is still referenced by the
//! population is never modified.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX): Davis (1985), preserves relative order of
//!   the second parent.
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two distinct positions, O(1).
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use super::types::Chromosome;
use rand::seq::index;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Applies ordered crossover with probability `rate`.
///
/// Returns an OX child of `parent1` and `parent2`, or a copy of `parent1`
/// when the crossover draw fails.
pub fn crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rate: f64,
    rng: &mut R,
) -> Chromosome {
    if rng.random_range(0.0..1.0) < rate {
        order_crossover(parent1, parent2, rng)
    } else {
        parent1.to_vec()
    }
}

/// Order Crossover (OX) with random cut points.
///
/// # Algorithm
///
/// 1. Pick two distinct cut points `start < end` in `0..n`
/// 2. Copy `parent1[start..end]` into the child at the same positions
/// 3. Fill the remaining positions, left to right from index 0, with the
///    genes of `parent2` in `parent2`'s order, skipping genes already
///    copied in step 2
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Chromosome {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return parent1.to_vec();
    }

    let (start, end) = random_cut_points(n, rng);
    order_crossover_at(parent1, parent2, start, end)
}

/// Builds one OX child for fixed cut points.
///
/// The half-open segment `parent1[start..end]` is kept verbatim; every
/// other position is filled from `parent2` in order.
///
/// ```
/// use permga::ga::operators::order_crossover_at;
///
/// let child = order_crossover_at(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], 1, 3);
/// assert_eq!(child, vec![4, 1, 2, 3, 0]);
/// ```
///
/// # Panics
/// Panics if the parents differ in length, are not permutations of the
/// same `0..n`, or if `start > end` or `end > n`.
pub fn order_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Chromosome {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(
        start <= end && end <= n,
        "invalid segment {start}..{end} for length {n}"
    );

    let mut child = vec![usize::MAX; n];
    let mut inherited = vec![false; n];

    for i in start..end {
        child[i] = parent1[i];
        inherited[parent1[i]] = true;
    }

    let mut donor = parent2.iter().copied().filter(|&gene| !inherited[gene]);
    for slot in child.iter_mut() {
        if *slot == usize::MAX {
            *slot = donor
                .next()
                .expect("parent2 holds exactly the genes missing from the segment");
        }
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Applies [`swap_mutation`] with probability `rate`.
///
/// Returns `true` if a swap was performed.
pub fn mutate<R: Rng>(perm: &mut [usize], rate: f64, rng: &mut R) -> bool {
    if rng.random_range(0.0..1.0) < rate {
        swap_mutation(perm, rng);
        true
    } else {
        false
    }
}

/// Swap mutation: exchange the genes at two distinct random positions.
///
/// Exactly one swap is performed, so a permutation always differs from
/// its input in exactly two positions. Slices shorter than 2 are left
/// untouched.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let picks = index::sample(rng, n, 2);
    perm.swap(picks.index(0), picks.index(1));
}

// ============================================================================
// Helpers
// ============================================================================

/// Picks two distinct cut points `start < end` uniformly from `0..n`.
///
/// # Panics
/// Panics if `n < 2`.
pub fn random_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let picks = index::sample(rng, n, 2);
    let (a, b) = (picks.index(0), picks.index(1));
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
