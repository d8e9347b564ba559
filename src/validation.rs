//! Checks an attack sequence before it is simulated.

use crate::graph::{normalize, BaseGraph, Edge, HashMapGraph};
use fxhash::FxHashSet;
use num::ToPrimitive;
use std::error::Error;
use std::fmt;

/// How many entries an attack sequence must have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceLength {
    /// Exactly one entry per edge of the graph.
    Full,
    /// At most one entry per edge of the graph.
    Partial,
}

impl Default for SequenceLength {
    fn default() -> Self {
        Self::Full
    }
}

/// Checks the length of `sequence`, then that every entry is an edge of
/// `graph`, then that no edge is named twice. The first failing check is
/// reported.
pub fn validate_attack_sequence(
    graph: &HashMapGraph,
    sequence: &[Edge],
    expectation: SequenceLength,
) -> Result<(), ValidationError> {
    let expected = graph.size();
    let wrong_length = match expectation {
        SequenceLength::Full => sequence.len() != expected,
        SequenceLength::Partial => sequence.len() > expected,
    };
    if wrong_length {
        let msg = format!("expected {} edges, got {}", expected, sequence.len());
        return Err(ValidationError::new(
            ValidationErrorKind::WrongLengthError,
            &msg,
        ));
    }

    if let Some((idx, (u, v))) = sequence
        .iter()
        .copied()
        .enumerate()
        .find(|(_, (u, v))| !graph.has_edge(*u, *v))
    {
        let msg = format!("entry {} ({}, {}) is not an edge of the graph", idx, u, v);
        return Err(ValidationError::new(
            ValidationErrorKind::MissingEdgeError,
            &msg,
        ));
    }

    let mut seen: FxHashSet<Edge> =
        FxHashSet::with_capacity_and_hasher(sequence.len(), Default::default());
    for (idx, edge) in sequence.iter().copied().enumerate() {
        if !seen.insert(normalize(edge)) {
            let msg = format!(
                "entry {} ({}, {}) is a duplicate (unique: {}, total: {})",
                idx,
                edge.0,
                edge.1,
                count_unique(sequence),
                sequence.len()
            );
            return Err(ValidationError::new(
                ValidationErrorKind::DuplicateEdgeError,
                &msg,
            ));
        }
    }
    Ok(())
}

fn count_unique(sequence: &[Edge]) -> usize {
    sequence
        .iter()
        .copied()
        .map(normalize)
        .collect::<FxHashSet<_>>()
        .len()
}

/// `deg(u) * deg(v)` on `graph` for every entry of `sequence`.
pub fn degree_products(graph: &HashMapGraph, sequence: &[Edge]) -> Vec<usize> {
    sequence
        .iter()
        .map(|(u, v)| graph.degree(*u) * graph.degree(*v))
        .collect()
}

/// True if the degree products of `sequence` never increase, i.e. the
/// sequence attacks edges between high degree vertices first.
pub fn is_sorted_by_degree_product(graph: &HashMapGraph, sequence: &[Edge]) -> bool {
    degree_products(graph, sequence)
        .windows(2)
        .all(|w| w[0] >= w[1])
}

/// Number of entries among the first `prefix` with an endpoint whose degree
/// is at least `fraction` of the maximum degree of `graph`.
pub fn high_degree_hits(
    graph: &HashMapGraph,
    sequence: &[Edge],
    prefix: usize,
    fraction: f64,
) -> usize {
    let threshold = graph.max_degree().to_f64().unwrap_or(0f64) * fraction;
    let is_high = |u: usize| graph.degree(u).to_f64().map_or(false, |d| d >= threshold);
    sequence
        .iter()
        .take(prefix)
        .filter(|(u, v)| is_high(*u) || is_high(*v))
        .count()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegreeProductSummary {
    pub highest: usize,
    pub lowest: usize,
    pub average: f64,
}

impl DegreeProductSummary {
    /// `None` for an empty slice.
    pub fn of(products: &[usize]) -> Option<Self> {
        let highest = products.iter().copied().max()?;
        let lowest = products.iter().copied().min()?;
        let sum: usize = products.iter().sum();
        let average = sum.to_f64()? / products.len().to_f64()?;
        Some(Self {
            highest,
            lowest,
            average,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    msg: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    WrongLengthError,
    MissingEdgeError,
    DuplicateEdgeError,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::WrongLengthError => f.write_str("WrongLengthError"),
            Self::MissingEdgeError => f.write_str("MissingEdgeError"),
            Self::DuplicateEdgeError => f.write_str("DuplicateEdgeError"),
        }
    }
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, msg: &str) -> Self {
        Self {
            kind,
            msg: String::from(msg),
        }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl Error for ValidationError {}
