use crate::graph::Edge;
use std::fmt::Debug;

pub trait BaseGraph: Clone + Debug {
    fn degree(&self, u: usize) -> usize;
    fn order(&self) -> usize;
    fn size(&self) -> usize;
    fn has_edge(&self, u: usize, v: usize) -> bool;
    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_>;
    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_>;
    /// Every edge exactly once as `(min, max)`, sorted.
    fn edges(&self) -> Vec<Edge>;
    fn max_degree(&self) -> usize {
        self.vertices().map(|v| self.degree(v)).max().unwrap_or(0)
    }
}
