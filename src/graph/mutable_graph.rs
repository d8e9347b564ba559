use crate::graph::base_graph::BaseGraph;

pub trait MutableGraph: BaseGraph {
    fn add_vertex(&mut self, u: usize);
    /// Returns `false` if the edge was already present or is a self loop.
    fn add_edge(&mut self, u: usize, v: usize) -> bool;
    /// Returns `false` if there was no such edge.
    fn remove_edge(&mut self, u: usize, v: usize) -> bool;
    fn new() -> Self;
    fn with_capacity(capacity: usize) -> Self;
    fn add_edges(&mut self, edges: &[(usize, usize)]) {
        for (u, v) in edges.iter().copied() {
            self.add_edge(u, v);
        }
    }
}
