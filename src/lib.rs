//! Permutation-based genetic algorithm.
//!
//! Evolves a population of permutations of `0..n` against a caller-supplied
//! objective using tournament selection, ordered crossover (OX), swap
//! mutation and elitism.
//!
//! - [`ga`]: the engine, its configuration and operators
//! - [`tsp`]: a traveling-salesman objective built on a labeled distance
//!   table, plus a printable route report
//! - [`random`]: seeded RNG helpers
//! - [`error`]: the crate error type
//!
//! # Example
//!
//! ```
//! use permga::ga::{GaConfig, GaRunner};
//! use permga::tsp::{DistanceTable, RouteReport};
//!
//! let table = DistanceTable::new(["A", "B", "C", "D"])
//!     .with_distance("A", "B", 10.0)
//!     .with_distance("A", "C", 15.0)
//!     .with_distance("A", "D", 20.0)
//!     .with_distance("B", "C", 35.0)
//!     .with_distance("B", "D", 25.0)
//!     .with_distance("C", "D", 30.0);
//!
//! let config = GaConfig::new(50, table.len()).with_seed(1);
//! let mut ga = GaRunner::new(config, table).unwrap();
//! let result = ga.evolve(100).unwrap();
//!
//! let report = RouteReport::new(ga.evaluator(), &result.best).unwrap();
//! assert_eq!(report.total_distance, 80.0);
//! ```
//!
//! Logging goes through the [`log`] facade; install any logger (the `tsp`
//! binary uses `env_logger`) to see per-generation progress at `debug`.

pub mod error;
pub mod ga;
pub mod random;
pub mod tsp;
