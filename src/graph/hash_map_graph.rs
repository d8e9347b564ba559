use crate::datastructures::BitSet;
use crate::graph::base_graph::BaseGraph;
use crate::graph::mutable_graph::MutableGraph;
use crate::graph::Edge;
use fxhash::FxHashMap;
use fxhash::FxHashSet;
use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashMapGraph {
    data: FxHashMap<usize, FxHashSet<usize>>,
}

impl HashMapGraph {
    /// Graph on the vertices `0..order` without any edges.
    pub fn with_vertices(order: usize) -> Self {
        let mut graph = Self::with_capacity(order);
        for u in 0..order {
            graph.add_vertex(u);
        }
        graph
    }

    /// Graph on the vertices `0..order` plus every endpoint named in `edges`.
    pub fn from_edges(order: usize, edges: &[Edge]) -> Self {
        let mut graph = Self::with_vertices(order);
        graph.add_edges(edges);
        graph
    }

    /// True if the vertex ids are exactly `0..order()`.
    pub fn is_labelled_contiguously(&self) -> bool {
        let order = self.data.len();
        self.data.keys().all(|u| *u < order)
    }

    fn label_bound(&self) -> usize {
        self.data.keys().max().map_or(0, |max| max + 1)
    }

    /// Sizes of all connected components, isolated vertices included as
    /// components of size one.
    pub fn component_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        let mut visited = BitSet::new(self.label_bound());
        let mut stack: Vec<usize> = Vec::with_capacity(self.data.len());
        for u in self.data.keys().copied() {
            if visited[u] {
                continue;
            }
            visited.set_bit(u);
            stack.push(u);
            let mut size = 0;
            while let Some(v) = stack.pop() {
                size += 1;
                for x in self.data.get(&v).into_iter().flatten().copied() {
                    if !visited.set_bit(x) {
                        stack.push(x);
                    }
                }
            }
            sizes.push(size);
        }
        sizes
    }

    pub fn largest_component_size(&self) -> usize {
        self.component_sizes().into_iter().max().unwrap_or(0)
    }

    /// Hop distances from `source` to every vertex reachable from it.
    pub fn bfs_distances(&self, source: usize) -> FxHashMap<usize, usize> {
        let mut distances: FxHashMap<usize, usize> =
            FxHashMap::with_capacity_and_hasher(self.data.len(), Default::default());
        if !self.data.contains_key(&source) {
            return distances;
        }
        let mut queue = VecDeque::new();
        distances.insert(source, 0);
        queue.push_back((source, 0));
        while let Some((v, distance)) = queue.pop_front() {
            for x in self.data.get(&v).into_iter().flatten().copied() {
                if distances.contains_key(&x) {
                    continue;
                }
                distances.insert(x, distance + 1);
                queue.push_back((x, distance + 1));
            }
        }
        distances
    }
}

impl MutableGraph for HashMapGraph {
    fn add_vertex(&mut self, u: usize) {
        self.data.entry(u).or_insert_with(FxHashSet::default);
    }

    fn add_edge(&mut self, u: usize, v: usize) -> bool {
        if u == v {
            return false;
        }
        let first = self.data.entry(u).or_insert_with(FxHashSet::default);
        let inserted = first.insert(v);
        let second = self.data.entry(v).or_insert_with(FxHashSet::default);
        second.insert(u);
        inserted
    }

    fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        let removed = self
            .data
            .get_mut(&u)
            .map_or(false, |neighbors| neighbors.remove(&v));
        if removed {
            if let Some(x) = self.data.get_mut(&v) {
                x.remove(&u);
            }
        }
        removed
    }

    fn new() -> Self {
        HashMapGraph {
            data: FxHashMap::default(),
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        HashMapGraph {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

impl BaseGraph for HashMapGraph {
    fn degree(&self, u: usize) -> usize {
        self.data.get(&u).map_or(0, |neighbors| neighbors.len())
    }

    fn order(&self) -> usize {
        self.data.len()
    }

    fn size(&self) -> usize {
        self.data.values().map(|neighbors| neighbors.len()).sum::<usize>() / 2
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.data
            .get(&u)
            .map_or(false, |neighbors| neighbors.contains(&v))
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        let keys = self.data.keys().copied();
        Box::new(keys)
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.data.get(&u).into_iter().flatten().copied())
    }

    fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .data
            .iter()
            .flat_map(|(u, neighbors)| {
                neighbors
                    .iter()
                    .copied()
                    .filter(move |v| u < v)
                    .map(move |v| (*u, v))
            })
            .collect();
        edges.sort_unstable();
        edges
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::base_graph::BaseGraph;
    use crate::graph::hash_map_graph::HashMapGraph;
    use crate::graph::mutable_graph::MutableGraph;

    #[test]
    fn test_order() {
        let mut graph = HashMapGraph::new();
        assert_eq!(graph.order(), 0);

        graph.add_vertex(0);
        graph.add_vertex(0);
        assert_eq!(graph.order(), 1);

        let graph = HashMapGraph::with_vertices(7);
        assert_eq!(graph.order(), 7);
        assert_eq!(graph.size(), 0);
        assert!(graph.is_labelled_contiguously());
    }

    #[test]
    fn test_degree() {
        let mut graph = HashMapGraph::new();
        assert!(graph.add_edge(0, 1));

        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 1);

        assert_eq!(graph.order(), 2);

        assert!(!graph.add_edge(1, 0));

        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.size(), 1);

        assert!(graph.remove_edge(1, 0));
        assert!(!graph.remove_edge(0, 1));

        assert_eq!(graph.degree(0), 0);
        assert_eq!(graph.degree(1), 0);
        assert_eq!(graph.order(), 2);
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn self_loops_are_ignored() {
        let mut graph = HashMapGraph::with_vertices(2);
        assert!(!graph.add_edge(1, 1));
        assert_eq!(graph.size(), 0);
        assert!(!graph.has_edge(1, 1));
    }

    #[test]
    fn unknown_vertices() {
        let graph = HashMapGraph::from_edges(3, &[(0, 1)]);
        assert!(!graph.has_edge(5, 0));
        assert_eq!(graph.degree(5), 0);
        assert_eq!(graph.neighborhood(5).count(), 0);
    }

    #[test]
    fn labelling() {
        let mut graph = HashMapGraph::new();
        graph.add_edge(0, 2);
        assert!(!graph.is_labelled_contiguously());
        graph.add_vertex(1);
        assert!(graph.is_labelled_contiguously());
    }

    #[test]
    fn edges_are_sorted_and_unique() {
        let graph = HashMapGraph::from_edges(4, &[(3, 2), (1, 0), (0, 1), (2, 0)]);
        assert_eq!(graph.edges(), vec![(0, 1), (0, 2), (2, 3)]);
        assert_eq!(graph.size(), 3);
    }

    #[test]
    fn components_include_isolated_vertices() {
        let mut graph = HashMapGraph::with_vertices(7);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(3, 4);

        let mut sizes = graph.component_sizes();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 1, 2, 3]);
        assert_eq!(graph.largest_component_size(), 3);
        assert_eq!(sizes.len(), 4);
    }

    #[test]
    fn bfs_distances() {
        let graph = HashMapGraph::from_edges(5, &[(0, 1), (1, 2), (2, 3)]);
        let distances = graph.bfs_distances(0);
        assert_eq!(distances.get(&3), Some(&3));
        assert_eq!(distances.get(&4), None);
        assert!(graph.bfs_distances(9).is_empty());
    }
}
