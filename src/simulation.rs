//! Replays an edge attack against a graph and records how the largest
//! connected component shrinks.
//!
//! Two ways of tracking components are available. [`ComponentStrategy::Recompute`]
//! searches the whole working graph after every removal, O(V + E) per step.
//! [`ComponentStrategy::ReverseUnionFind`] validates the sequence up front and
//! then adds the removed edges back in reverse order into a disjoint-set
//! forest, which is near linear overall. Both produce identical trajectories.

use crate::datastructures::DisjointSet;
use crate::graph::{normalize, BaseGraph, Edge, HashMapGraph, MutableGraph};
use crate::trajectory::ConnectivityTrajectory;
use fxhash::FxHashSet;
#[cfg(feature = "log")]
use log::{debug, info};
use num::ToPrimitive;
use std::cmp::max;
use std::error::Error;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentStrategy {
    Recompute,
    ReverseUnionFind,
}

impl Default for ComponentStrategy {
    fn default() -> Self {
        Self::Recompute
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectivitySimulator {
    strategy: ComponentStrategy,
}

impl ConnectivitySimulator {
    impl_setter!(self, strategy, ComponentStrategy);

    /// Simulates `sequence` on a private copy of `graph`.
    ///
    /// Fails without returning a partial trajectory if the graph is empty or
    /// not labelled `0..n`, or if an entry does not name an edge that is
    /// still present when it is reached.
    pub fn simulate(
        &self,
        graph: &HashMapGraph,
        sequence: &[Edge],
    ) -> Result<ConnectivityTrajectory, SimulationError> {
        self.simulate_until(graph, sequence, interruption)
    }

    /// Like [`simulate`](Self::simulate) but removes the edges from `graph`
    /// itself.
    ///
    /// With [`ComponentStrategy::Recompute`] a failing run leaves `graph`
    /// without the edges removed before the failing entry. With
    /// [`ComponentStrategy::ReverseUnionFind`] the graph is only touched once
    /// the whole run succeeded.
    pub fn simulate_in_place(
        &self,
        graph: &mut HashMapGraph,
        sequence: &[Edge],
    ) -> Result<ConnectivityTrajectory, SimulationError> {
        self.simulate_in_place_until(graph, sequence, interruption)
    }

    fn simulate_until<F: Fn() -> Option<&'static str>>(
        &self,
        graph: &HashMapGraph,
        sequence: &[Edge],
        interrupted: F,
    ) -> Result<ConnectivityTrajectory, SimulationError> {
        check_graph(graph)?;
        #[cfg(feature = "log")]
        info!(
            "simulating {} removals on graph with {} vertices and {} edges",
            sequence.len(),
            graph.order(),
            graph.size()
        );
        match self.strategy {
            ComponentStrategy::Recompute => {
                let mut working_graph = graph.clone();
                replay(&mut working_graph, sequence, &interrupted)
            }
            ComponentStrategy::ReverseUnionFind => replay_reversed(graph, sequence, &interrupted),
        }
    }

    fn simulate_in_place_until<F: Fn() -> Option<&'static str>>(
        &self,
        graph: &mut HashMapGraph,
        sequence: &[Edge],
        interrupted: F,
    ) -> Result<ConnectivityTrajectory, SimulationError> {
        check_graph(graph)?;
        match self.strategy {
            ComponentStrategy::Recompute => replay(graph, sequence, &interrupted),
            ComponentStrategy::ReverseUnionFind => {
                let trajectory = replay_reversed(graph, sequence, &interrupted)?;
                for (u, v) in sequence.iter().copied() {
                    graph.remove_edge(u, v);
                }
                Ok(trajectory)
            }
        }
    }
}

/// Simulates `sequence` on a copy of `graph` with the default simulator.
pub fn simulate(
    graph: &HashMapGraph,
    sequence: &[Edge],
) -> Result<ConnectivityTrajectory, SimulationError> {
    ConnectivitySimulator::default().simulate(graph, sequence)
}

fn check_graph(graph: &HashMapGraph) -> Result<(), SimulationError> {
    if graph.order() == 0 {
        return Err(SimulationError::new(
            SimulationErrorKind::InvalidGraphError,
            "graph has no vertices",
        ));
    }
    if !graph.is_labelled_contiguously() {
        let msg = format!(
            "vertex ids of a graph with {} vertices must be 0..{}",
            graph.order(),
            graph.order()
        );
        return Err(SimulationError::new(
            SimulationErrorKind::InvalidGraphError,
            &msg,
        ));
    }
    Ok(())
}

fn ratio(component_size: usize, order: usize) -> f64 {
    let size = component_size.to_f64().unwrap_or(0f64);
    let order = order.to_f64().unwrap_or(f64::INFINITY);
    size / order
}

fn missing_edge(removed: &FxHashSet<Edge>, step: usize, (u, v): Edge) -> SimulationError {
    if removed.contains(&normalize((u, v))) {
        let msg = format!(
            "entry {} removes ({}, {}) which an earlier entry already removed",
            step, u, v
        );
        SimulationError::new(SimulationErrorKind::DuplicateEdgeError, &msg)
    } else {
        let msg = format!("entry {} names ({}, {}) which is not an edge", step, u, v);
        SimulationError::new(SimulationErrorKind::UnknownEdgeError, &msg)
    }
}

/// Reason to stop the run, from the Ctrl-C handler or the global timeout.
fn interruption() -> Option<&'static str> {
    #[cfg(feature = "handle-ctrlc")]
    if crate::signals::received_ctrl_c() {
        return Some("received Ctrl-C");
    }
    #[cfg(feature = "cli")]
    if crate::timeout::timeout() {
        return Some("timed out");
    }
    None
}

fn check_interrupted<F: Fn() -> Option<&'static str>>(
    interrupted: &F,
    step: usize,
) -> Result<(), SimulationError> {
    match interrupted() {
        Some(reason) => {
            let msg = format!("{} before entry {}", reason, step);
            Err(SimulationError::new(
                SimulationErrorKind::InterruptedError,
                &msg,
            ))
        }
        None => Ok(()),
    }
}

fn replay<F: Fn() -> Option<&'static str>>(
    graph: &mut HashMapGraph,
    sequence: &[Edge],
    interrupted: &F,
) -> Result<ConnectivityTrajectory, SimulationError> {
    let order = graph.order();
    let mut ratios = Vec::with_capacity(sequence.len() + 1);
    ratios.push(ratio(graph.largest_component_size(), order));

    let mut removed: FxHashSet<Edge> =
        FxHashSet::with_capacity_and_hasher(sequence.len(), Default::default());
    for (step, (u, v)) in sequence.iter().copied().enumerate() {
        check_interrupted(interrupted, step)?;
        if !graph.remove_edge(u, v) {
            return Err(missing_edge(&removed, step, (u, v)));
        }
        removed.insert(normalize((u, v)));
        let largest = graph.largest_component_size();
        #[cfg(feature = "log")]
        debug!("removed ({}, {}), largest component: {}", u, v, largest);
        ratios.push(ratio(largest, order));
    }
    Ok(ConnectivityTrajectory::new(ratios))
}

fn replay_reversed<F: Fn() -> Option<&'static str>>(
    graph: &HashMapGraph,
    sequence: &[Edge],
    interrupted: &F,
) -> Result<ConnectivityTrajectory, SimulationError> {
    let order = graph.order();

    let mut removed: FxHashSet<Edge> =
        FxHashSet::with_capacity_and_hasher(sequence.len(), Default::default());
    for (step, (u, v)) in sequence.iter().copied().enumerate() {
        check_interrupted(interrupted, step)?;
        if !graph.has_edge(u, v) || removed.contains(&normalize((u, v))) {
            return Err(missing_edge(&removed, step, (u, v)));
        }
        removed.insert(normalize((u, v)));
    }

    let mut forest = DisjointSet::new(order);
    let mut largest = 1;
    for (u, v) in graph.edges() {
        if !removed.contains(&(u, v)) {
            largest = max(largest, forest.union(u, v));
        }
    }
    #[cfg(feature = "log")]
    debug!("largest component after all removals: {}", largest);

    let mut ratios = vec![0f64; sequence.len() + 1];
    ratios[sequence.len()] = ratio(largest, order);
    for (step, (u, v)) in sequence.iter().copied().enumerate().rev() {
        largest = max(largest, forest.union(u, v));
        ratios[step] = ratio(largest, order);
    }
    Ok(ConnectivityTrajectory::new(ratios))
}

#[derive(Debug, Clone)]
pub struct SimulationError {
    kind: SimulationErrorKind,
    msg: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationErrorKind {
    InvalidGraphError,
    UnknownEdgeError,
    DuplicateEdgeError,
    InterruptedError,
}

impl fmt::Display for SimulationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::InvalidGraphError => f.write_str("InvalidGraphError"),
            Self::UnknownEdgeError => f.write_str("UnknownEdgeError"),
            Self::DuplicateEdgeError => f.write_str("DuplicateEdgeError"),
            Self::InterruptedError => f.write_str("InterruptedError"),
        }
    }
}

impl SimulationError {
    fn new(kind: SimulationErrorKind, msg: &str) -> Self {
        Self {
            kind,
            msg: String::from(msg),
        }
    }

    pub fn kind(&self) -> SimulationErrorKind {
        self.kind
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl Error for SimulationError {}
