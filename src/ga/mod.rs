//! Permutation Genetic Algorithm.
//!
//! A generic GA over permutation chromosomes. Callers describe their
//! problem with a [`FitnessEvaluator`] that scores a permutation of
//! `0..n` (higher is better); the engine handles everything else.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, chromosome length, operator rates
//! - [`GaRunner`]: owns the population and runs the evolutionary loop
//! - [`GaResult`]: best chromosome and per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: ordered crossover (OX) and swap mutation
//! - [`selection`]: tournament selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::{EvolveMode, GaConfig};
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use types::{is_valid_permutation, Chromosome, EvaluationError, FitnessEvaluator, Scored};
