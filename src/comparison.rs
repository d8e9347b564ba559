use crate::graph::{normalize, Edge, HashMapGraph};
use crate::simulation::{ConnectivitySimulator, SimulationError};
use crate::trajectory::ConnectivityTrajectory;
#[cfg(feature = "log")]
use log::info;
use std::cmp::Ordering;

/// Connectivity fraction at which two attacks are compared.
pub const DEFAULT_THRESHOLD: f64 = 0.5;
/// Number of leading entries inspected when comparing two sequences.
pub const DEFAULT_PREFIX: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The candidate drops below the threshold this many removals earlier.
    Better(usize),
    Equal,
    /// The candidate needs this many more removals.
    Worse(usize),
}

impl Outcome {
    pub fn is_at_least_as_good(&self) -> bool {
        !matches!(self, Outcome::Worse(_))
    }
}

/// Where a baseline and a candidate attack first push the largest component
/// below `threshold`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrategyComparison {
    pub threshold: f64,
    pub baseline_index: usize,
    pub candidate_index: usize,
}

impl StrategyComparison {
    pub fn new(
        baseline: &ConnectivityTrajectory,
        candidate: &ConnectivityTrajectory,
        threshold: f64,
    ) -> Self {
        Self {
            threshold,
            baseline_index: baseline.first_drop_below(threshold),
            candidate_index: candidate.first_drop_below(threshold),
        }
    }

    /// Simulates both sequences on their own copy of `graph` and compares them.
    pub fn simulate(
        simulator: &ConnectivitySimulator,
        graph: &HashMapGraph,
        baseline: &[Edge],
        candidate: &[Edge],
        threshold: f64,
    ) -> Result<Self, SimulationError> {
        let baseline = simulator.simulate(graph, baseline)?;
        let candidate = simulator.simulate(graph, candidate)?;
        let comparison = Self::new(&baseline, &candidate, threshold);
        #[cfg(feature = "log")]
        info!(
            "baseline drops below {} at {}, candidate at {}",
            threshold, comparison.baseline_index, comparison.candidate_index
        );
        Ok(comparison)
    }

    pub fn outcome(&self) -> Outcome {
        match self.candidate_index.cmp(&self.baseline_index) {
            Ordering::Less => Outcome::Better(self.baseline_index - self.candidate_index),
            Ordering::Equal => Outcome::Equal,
            Ordering::Greater => Outcome::Worse(self.candidate_index - self.baseline_index),
        }
    }
}

/// Number of positions among the first `prefix` entries at which the two
/// sequences name different edges. Orientation is ignored.
pub fn strategy_difference(a: &[Edge], b: &[Edge], prefix: usize) -> usize {
    a.iter()
        .zip(b.iter())
        .take(prefix)
        .filter(|(x, y)| normalize(**x) != normalize(**y))
        .count()
}

/// True if more than half of the first [`DEFAULT_PREFIX`] entries differ.
pub fn is_distinct_strategy(a: &[Edge], b: &[Edge]) -> bool {
    strategy_difference(a, b, DEFAULT_PREFIX) > DEFAULT_PREFIX / 2
}
