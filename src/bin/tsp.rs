//! Solves a four-city traveling-salesman instance and prints the tour.
//!
//! Usage: `tsp [seed]`. Set `RUST_LOG=debug` to watch each generation.

use log::{error, info};
use permga::ga::{GaConfig, GaRunner};
use permga::tsp::{DistanceTable, RouteReport};

fn main() {
    env_logger::init();

    let seed = match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
        None => None,
        Some(Ok(seed)) => Some(seed),
        Some(Err(e)) => {
            eprintln!("Usage: tsp [seed]");
            eprintln!("Invalid seed: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(seed) {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let table = DistanceTable::from_pairs(
        ["A", "B", "C", "D"],
        &[
            ("A", "B", 10.0),
            ("A", "C", 15.0),
            ("A", "D", 20.0),
            ("B", "C", 35.0),
            ("B", "D", 25.0),
            ("C", "D", 30.0),
        ],
    );

    let mut config = GaConfig::new(100, table.len())
        .with_mutation_rate(0.02)
        .with_crossover_rate(0.8)
        .with_elite_ratio(0.1);
    config.seed = seed;

    info!("running GA on {} cities (seed: {:?})", table.len(), seed);
    let mut ga = GaRunner::new(config, table)?;
    let result = ga.evolve(500)?;

    let report = RouteReport::new(ga.evaluator(), &result.best)?;
    print!("{report}");
    Ok(())
}
