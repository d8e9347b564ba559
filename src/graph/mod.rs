pub use base_graph::BaseGraph;
pub use hash_map_graph::HashMapGraph;
pub use mutable_graph::MutableGraph;

mod base_graph;
mod hash_map_graph;
mod mutable_graph;

/// An undirected edge. `(u, v)` and `(v, u)` name the same edge.
pub type Edge = (usize, usize);

/// Orders the endpoints of an edge so that the smaller vertex comes first.
#[inline]
pub fn normalize((u, v): Edge) -> Edge {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}
