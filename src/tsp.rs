//! Traveling-salesman objective.
//!
//! A [`DistanceTable`] names a set of locations and the symmetric distances
//! between pairs of them. A chromosome is a visiting order by index into
//! the label list; its fitness is the reciprocal of the closed tour length,
//! so shorter tours score higher.
//!
//! Missing pairs are not detected when the table is built. Looking one up
//! during evaluation fails with [`EvaluationError::UndefinedRelation`],
//! which aborts the running `evolve` call.

use crate::ga::{EvaluationError, FitnessEvaluator};
use std::collections::HashMap;
use std::fmt;

/// Labeled locations with symmetric pairwise distances.
///
/// Distances live in a dense `len() x len()` matrix indexed by location, so
/// evaluating a tour never touches the labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceTable {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    distances: Vec<Option<f64>>,
}

impl DistanceTable {
    /// Creates a table over `labels` with no distances defined yet.
    ///
    /// A repeated label names its first occurrence in lookups by label.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            index.entry(label.clone()).or_insert(i);
        }
        let n = labels.len();
        Self {
            labels,
            index,
            distances: vec![None; n * n],
        }
    }

    /// Creates a table from labels and `(from, to, distance)` triples.
    pub fn from_pairs<I, S>(labels: I, pairs: &[(&str, &str, f64)]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        pairs
            .iter()
            .fold(Self::new(labels), |table, &(a, b, d)| table.with_distance(a, b, d))
    }

    /// Defines the distance between `a` and `b` (in both directions).
    pub fn with_distance(mut self, a: &str, b: &str, distance: f64) -> Self {
        self.set_distance(a, b, distance);
        self
    }

    /// Defines or replaces the distance between `a` and `b`.
    ///
    /// A label that is not in the table yet is appended as a new location.
    pub fn set_distance(&mut self, a: &str, b: &str, distance: f64) {
        let i = self.index_or_insert(a);
        let j = self.index_or_insert(b);
        let n = self.labels.len();
        self.distances[i * n + j] = Some(distance);
        self.distances[j * n + i] = Some(distance);
    }

    fn index_or_insert(&mut self, label: &str) -> usize {
        if let Some(&i) = self.index.get(label) {
            return i;
        }

        let old = self.labels.len();
        let n = old + 1;
        let mut grown = vec![None; n * n];
        for row in 0..old {
            let src = &self.distances[row * old..(row + 1) * old];
            grown[row * n..row * n + old].copy_from_slice(src);
        }
        self.distances = grown;
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), old);
        old
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the table has no locations.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Location labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label of location `index`.
    pub fn label(&self, index: usize) -> Result<&str, EvaluationError> {
        self.labels
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| out_of_range(index, self.labels.len()))
    }

    /// Distance between two labeled locations.
    ///
    /// A location is at distance 0 from itself. An unknown label has no
    /// distances defined.
    pub fn distance_between(&self, a: &str, b: &str) -> Result<f64, EvaluationError> {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&from), Some(&to)) => self.distance(from, to),
            _ if a == b => Ok(0.0),
            _ => Err(EvaluationError::UndefinedRelation {
                from: a.to_string(),
                to: b.to_string(),
            }),
        }
    }

    /// Distance between locations `from` and `to` by index.
    pub fn distance(&self, from: usize, to: usize) -> Result<f64, EvaluationError> {
        let n = self.labels.len();
        if from >= n || to >= n {
            return Err(out_of_range(from.max(to), n));
        }
        if from == to {
            return Ok(0.0);
        }
        self.distances[from * n + to].ok_or_else(|| EvaluationError::UndefinedRelation {
            from: self.labels[from].clone(),
            to: self.labels[to].clone(),
        })
    }

    /// Length of the closed tour visiting `route` in order and returning to
    /// the first location.
    pub fn tour_length(&self, route: &[usize]) -> Result<f64, EvaluationError> {
        closed_edges(route).try_fold(0.0, |total, (from, to)| {
            Ok::<f64, EvaluationError>(total + self.distance(from, to)?)
        })
    }
}

impl FitnessEvaluator for DistanceTable {
    /// `1 / tour_length`. A zero-length tour yields an infinite score,
    /// which the engine rejects.
    fn evaluate(&self, chromosome: &[usize]) -> Result<f64, EvaluationError> {
        Ok(1.0 / self.tour_length(chromosome)?)
    }
}

fn out_of_range(index: usize, len: usize) -> EvaluationError {
    EvaluationError::Other(format!("location index {index} out of range for {len} locations"))
}

/// Consecutive pairs of `route`, including the wraparound edge back to the
/// start.
fn closed_edges(route: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let n = route.len();
    (0..n).map(move |i| (route[i], route[(i + 1) % n]))
}

/// One edge of a tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Departure label.
    pub from: String,
    /// Arrival label.
    pub to: String,
    /// Distance travelled.
    pub distance: f64,
}

/// Human-readable description of a tour.
///
/// `Display` prints the closed route, its total length and every leg.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteReport {
    /// Labels in visiting order (without the return to the start).
    pub route: Vec<String>,
    /// Length of the closed tour.
    pub total_distance: f64,
    /// Each edge of the closed tour, in order.
    pub legs: Vec<Leg>,
}

impl RouteReport {
    /// Decodes `route` against `table`.
    pub fn new(table: &DistanceTable, route: &[usize]) -> Result<Self, EvaluationError> {
        let labels = route
            .iter()
            .map(|&i| table.label(i).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;

        let legs = closed_edges(route)
            .map(|(from, to)| -> Result<Leg, EvaluationError> {
                Ok(Leg {
                    from: table.label(from)?.to_string(),
                    to: table.label(to)?.to_string(),
                    distance: table.distance(from, to)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            route: labels,
            total_distance: legs.iter().map(|leg| leg.distance).sum(),
            legs,
        })
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stops = self.route.clone();
        if let Some(first) = self.route.first() {
            stops.push(first.clone());
        }
        writeln!(f, "Best TSP Route: {}", stops.join(" -> "))?;
        writeln!(f, "Total Distance: {}", self.total_distance)?;
        writeln!(f)?;
        writeln!(f, "Distances between cities in the route:")?;
        for leg in &self.legs {
            writeln!(f, "{} -> {}: {}", leg.from, leg.to, leg.distance)?;
        }
        Ok(())
    }
}
