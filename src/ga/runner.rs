//! GA evolutionary loop execution.
//!
//! [`GaRunner`] owns the population, the random source and the fitness
//! evaluator, and drives the loop:
//! evaluation → sort → elitism → selection → crossover → mutation → replace.

use super::config::{EvolveMode, GaConfig};
use super::operators;
use super::selection::{self, TOURNAMENT_SIZE};
use super::types::{is_valid_permutation, Chromosome, EvaluationError, FitnessEvaluator, Scored};
use crate::error::{GaError, Result};
use crate::random::{random_permutation, rng_from_seed};
use log::{debug, info, trace};
use rand::rngs::StdRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fitness summary of one evaluated population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Number of generations the engine had completed when this population
    /// was evaluated.
    pub generation: usize,
    /// Highest fitness in the population.
    pub best: f64,
    /// Mean fitness.
    pub mean: f64,
    /// Lowest fitness.
    pub worst: f64,
}

impl GenerationStats {
    fn from_fitness(generation: usize, fitness: &[f64]) -> Self {
        let best = fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst = fitness.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = fitness.iter().sum::<f64>() / fitness.len().max(1) as f64;
        Self {
            generation,
            best,
            mean,
            worst,
        }
    }
}

/// Result of one [`GaRunner::evolve`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// Fittest chromosome of the final population.
    pub best: Chromosome,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Number of generations run by this call.
    pub generations: usize,

    /// Population statistics: entry 0 describes the population the call
    /// started from, entry `g` the population after `g` generations.
    pub history: Vec<GenerationStats>,
}

/// Permutation GA engine.
///
/// # Usage
///
/// ```
/// use permga::ga::{EvaluationError, GaConfig, GaRunner};
///
/// // Reward permutations that keep genes in their home position.
/// let fixed_points = |perm: &[usize]| -> Result<f64, EvaluationError> {
///     Ok(perm.iter().enumerate().filter(|&(i, &g)| i == g).count() as f64)
/// };
///
/// let config = GaConfig::new(30, 6).with_seed(42);
/// let mut ga = GaRunner::new(config, fixed_points).unwrap();
/// let result = ga.evolve(100).unwrap();
/// assert_eq!(result.best.len(), 6);
/// ```
///
/// # Repeated calls
///
/// With [`EvolveMode::Continue`] (the default) each `evolve` call picks up
/// the population left by the previous one. With [`EvolveMode::Restart`]
/// every call starts from fresh random permutations drawn from the same
/// RNG stream.
///
/// In `Continue` mode the first call works on the population built by
/// [`new`](Self::new), so `evolve(0)` returns the best member of that
/// initial population. In `Restart` mode that population is discarded
/// before the first generation, and `evolve(0)` returns the best of a newly
/// drawn one.
pub struct GaRunner<E> {
    config: GaConfig,
    evaluator: E,
    rng: StdRng,
    population: Vec<Chromosome>,
    generation: usize,
}

impl<E: FitnessEvaluator> GaRunner<E> {
    /// Validates `config` and builds a random initial population.
    ///
    /// The RNG is seeded from `config.seed`, or from OS entropy when no seed
    /// is set.
    pub fn new(config: GaConfig, evaluator: E) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(config, evaluator, rng)
    }

    /// Like [`new`](Self::new) but uses the given RNG and ignores
    /// `config.seed`.
    pub fn with_rng(config: GaConfig, evaluator: E, mut rng: StdRng) -> Result<Self> {
        config.validate()?;
        let population = random_population(&config, &mut rng);
        trace!(
            "initialized population: {} chromosomes of length {}",
            config.population_size,
            config.chromosome_length
        );
        Ok(Self {
            config,
            evaluator,
            rng,
            population,
            generation: 0,
        })
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The fitness evaluator.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// The current population, in slot order.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Total number of generations run across all `evolve` calls since the
    /// population was last created.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Scores one chromosome with the evaluator.
    ///
    /// # Errors
    /// [`GaError::Evaluation`](crate::error::GaError::Evaluation) if the
    /// evaluator fails or returns a non-finite value.
    pub fn evaluate(&self, chromosome: &[usize]) -> Result<f64> {
        score(&self.evaluator, chromosome)
    }

    /// Tournament selection over unscored chromosomes.
    ///
    /// Draws [`TOURNAMENT_SIZE`] distinct members of `pool`, evaluates them
    /// and returns the fittest. Ties go to the first drawn.
    ///
    /// # Errors
    /// [`GaError::InsufficientPopulation`](crate::error::GaError::InsufficientPopulation)
    /// if `pool` has fewer than [`TOURNAMENT_SIZE`] members, or an
    /// evaluation error.
    pub fn select_parent<'a>(&mut self, pool: &'a [Chromosome]) -> Result<&'a Chromosome> {
        let evaluator = &self.evaluator;
        let idx = selection::tournament_by(pool, TOURNAMENT_SIZE, &mut self.rng, |c| {
            score(evaluator, c)
        })?;
        Ok(&pool[idx])
    }

    /// Ordered crossover with probability `crossover_rate`; otherwise a
    /// copy of `parent1`.
    ///
    /// # Errors
    /// [`GaError::InvalidChromosome`] if either parent is not a permutation
    /// of `0..chromosome_length`. The RNG is not advanced in that case.
    pub fn crossover(&mut self, parent1: &[usize], parent2: &[usize]) -> Result<Chromosome> {
        self.check_chromosome(parent1)?;
        self.check_chromosome(parent2)?;
        Ok(operators::crossover(
            parent1,
            parent2,
            self.config.crossover_rate,
            &mut self.rng,
        ))
    }

    /// Swap mutation with probability `mutation_rate`. Returns `true` if
    /// two genes were swapped.
    ///
    /// # Errors
    /// [`GaError::InvalidChromosome`] if `chromosome` is not a permutation
    /// of `0..chromosome_length`; it is left untouched.
    pub fn mutate(&mut self, chromosome: &mut [usize]) -> Result<bool> {
        self.check_chromosome(chromosome)?;
        Ok(operators::mutate(
            chromosome,
            self.config.mutation_rate,
            &mut self.rng,
        ))
    }

    fn check_chromosome(&self, chromosome: &[usize]) -> Result<()> {
        let length = self.config.chromosome_length;
        if is_valid_permutation(chromosome, length) {
            Ok(())
        } else {
            Err(GaError::InvalidChromosome {
                chromosome: chromosome.to_vec(),
                length,
            })
        }
    }

    /// Runs `generations` generations and returns the fittest chromosome of
    /// the final population.
    ///
    /// Each generation scores the whole population, sorts it by fitness
    /// (descending, stable, so equal scores keep slot order), copies the
    /// elite unchanged and fills the remaining slots with mutated crossover
    /// children of tournament-selected parents. Parents are drawn from the
    /// full sorted population.
    ///
    /// # Errors
    /// Any evaluation or selection error aborts the call. The population is
    /// left as it was at the start of the failing generation.
    pub fn evolve(&mut self, generations: usize) -> Result<GaResult> {
        if self.config.evolve_mode == EvolveMode::Restart {
            self.population = random_population(&self.config, &mut self.rng);
            self.generation = 0;
        }

        let mut history = Vec::with_capacity(generations + 1);

        for _ in 0..generations {
            let fitness = self.evaluate_population()?;
            let stats = GenerationStats::from_fitness(self.generation, &fitness);

            let mut ranked: Vec<Scored> = self
                .population
                .iter()
                .zip(&fitness)
                .map(|(c, &f)| Scored::new(c.clone(), f))
                .collect();
            ranked.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));

            let next = self.breed(&ranked)?;
            self.population = next;
            self.generation += 1;

            debug!(
                "generation {}: best={:.6} mean={:.6} worst={:.6}",
                stats.generation, stats.best, stats.mean, stats.worst
            );
            history.push(stats);
        }

        let fitness = self.evaluate_population()?;
        history.push(GenerationStats::from_fitness(self.generation, &fitness));

        let best_idx = best_index(&fitness);
        let result = GaResult {
            best: self.population[best_idx].clone(),
            best_fitness: fitness[best_idx],
            generations,
            history,
        };

        info!(
            "evolved {} generations (total {}): best fitness {:.6}",
            generations, self.generation, result.best_fitness
        );
        Ok(result)
    }

    /// Builds the next generation from a population sorted best-first.
    fn breed(&mut self, ranked: &[Scored]) -> Result<Vec<Chromosome>> {
        let size = self.config.population_size;
        let elite_count = self.config.elite_count().min(size);

        let mut next: Vec<Chromosome> = Vec::with_capacity(size);
        next.extend(ranked[..elite_count].iter().map(|s| s.chromosome.clone()));

        while next.len() < size {
            let p1 = selection::select_parent(ranked, &mut self.rng)?;
            let p2 = selection::select_parent(ranked, &mut self.rng)?;
            let mut child = self.crossover(&ranked[p1].chromosome, &ranked[p2].chromosome)?;
            self.mutate(&mut child)?;
            next.push(child);
        }

        Ok(next)
    }

    /// Scores every individual, in slot order.
    ///
    /// With the `parallel` feature and `config.parallel` set, scoring runs
    /// on rayon's pool; the RNG is not touched here, so results match the
    /// sequential path.
    fn evaluate_population(&self) -> Result<Vec<f64>> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return self
                .population
                .par_iter()
                .map(|c| score(&self.evaluator, c))
                .collect();
        }

        self.population
            .iter()
            .map(|c| score(&self.evaluator, c))
            .collect()
    }
}

/// Evaluates `chromosome`, rejecting non-finite scores.
fn score<E: FitnessEvaluator>(evaluator: &E, chromosome: &[usize]) -> Result<f64> {
    let fitness = evaluator.evaluate(chromosome)?;
    if fitness.is_finite() {
        Ok(fitness)
    } else {
        Err(EvaluationError::NonFinite(fitness).into())
    }
}

fn random_population(config: &GaConfig, rng: &mut StdRng) -> Vec<Chromosome> {
    (0..config.population_size)
        .map(|_| random_permutation(config.chromosome_length, rng))
        .collect()
}

/// Index of the first maximal score.
fn best_index(fitness: &[f64]) -> usize {
    (1..fitness.len()).fold(0, |best, i| {
        if fitness[i] > fitness[best] {
            i
        } else {
            best
        }
    })
}

// ============================================================================
// Tests
// ============================================================================
