use crate::graph::{BaseGraph, HashMapGraph};
use num::ToPrimitive;
use std::fmt;

/// Summary statistics of a network.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkInfo {
    pub nodes: usize,
    pub edges: usize,
    pub density: f64,
    pub is_connected: bool,
    pub components: usize,
    /// `None` unless the graph is connected.
    pub diameter: Option<usize>,
    pub average_degree: f64,
}

impl NetworkInfo {
    pub fn of(graph: &HashMapGraph) -> Self {
        let nodes = graph.order();
        let edges = graph.size();
        let components = graph.component_sizes().len();
        let is_connected = components == 1;
        let diameter = if is_connected {
            Some(diameter(graph))
        } else {
            None
        };
        Self {
            nodes,
            edges,
            density: density(nodes, edges),
            is_connected,
            components,
            diameter,
            average_degree: fraction(2 * edges, nodes),
        }
    }

    /// Per-field difference `after - self`. The diameter difference is only
    /// known when both networks are connected.
    pub fn change_to(&self, after: &NetworkInfo) -> NetworkChange {
        let diameter = match (self.diameter, after.diameter) {
            (Some(before), Some(after)) => Some(change(before, after)),
            _ => None,
        };
        NetworkChange {
            nodes: change(self.nodes, after.nodes),
            edges: change(self.edges, after.edges),
            density: after.density - self.density,
            components: change(self.components, after.components),
            diameter,
            average_degree: after.average_degree - self.average_degree,
        }
    }
}

/// Difference between the summaries of two networks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetworkChange {
    pub nodes: i64,
    pub edges: i64,
    pub density: f64,
    pub components: i64,
    pub diameter: Option<i64>,
    pub average_degree: f64,
}

fn change(before: usize, after: usize) -> i64 {
    match (before.to_i64(), after.to_i64()) {
        (Some(before), Some(after)) => after - before,
        _ => 0,
    }
}

fn fraction(numerator: usize, denominator: usize) -> f64 {
    match (numerator.to_f64(), denominator.to_f64()) {
        (Some(n), Some(d)) if d > 0f64 => n / d,
        _ => 0f64,
    }
}

fn density(nodes: usize, edges: usize) -> f64 {
    if nodes < 2 {
        return 0f64;
    }
    fraction(2 * edges, nodes * (nodes - 1))
}

fn diameter(graph: &HashMapGraph) -> usize {
    graph
        .vertices()
        .filter_map(|u| graph.bfs_distances(u).values().copied().max())
        .max()
        .unwrap_or(0)
}

impl fmt::Display for NetworkInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Nodes: {}", self.nodes)?;
        writeln!(f, "Edges: {}", self.edges)?;
        writeln!(f, "Density: {:.6}", self.density)?;
        writeln!(f, "Is connected: {}", self.is_connected)?;
        writeln!(f, "Components: {}", self.components)?;
        match self.diameter {
            Some(diameter) => writeln!(f, "Diameter: {}", diameter)?,
            None => writeln!(f, "Diameter: -")?,
        }
        write!(f, "Average degree: {:.2}", self.average_degree)
    }
}

impl fmt::Display for NetworkChange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Nodes: {:+}", self.nodes)?;
        writeln!(f, "Edges: {:+}", self.edges)?;
        writeln!(f, "Density: {:+.6}", self.density)?;
        writeln!(f, "Components: {:+}", self.components)?;
        match self.diameter {
            Some(diameter) => writeln!(f, "Diameter: {:+}", diameter)?,
            None => writeln!(f, "Diameter: -")?,
        }
        write!(f, "Average degree: {:+.2}", self.average_degree)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{HashMapGraph, MutableGraph};
    use crate::simulation::ConnectivitySimulator;
    use crate::stats::NetworkInfo;

    #[test]
    fn path_graph() {
        let graph = HashMapGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        let info = NetworkInfo::of(&graph);
        assert_eq!(info.nodes, 4);
        assert_eq!(info.edges, 3);
        assert!((info.density - 0.5).abs() < 1e-12);
        assert!(info.is_connected);
        assert_eq!(info.components, 1);
        assert_eq!(info.diameter, Some(3));
        assert!((info.average_degree - 1.5).abs() < 1e-12);
    }

    #[test]
    fn disconnected_graph() {
        let graph = HashMapGraph::from_edges(5, &[(0, 1), (2, 3)]);
        let info = NetworkInfo::of(&graph);
        assert!(!info.is_connected);
        assert_eq!(info.components, 3);
        assert_eq!(info.diameter, None);
    }

    #[test]
    fn degenerate_graphs() {
        let info = NetworkInfo::of(&HashMapGraph::new());
        assert_eq!(info.nodes, 0);
        assert_eq!(info.density, 0.0);
        assert_eq!(info.average_degree, 0.0);
        assert!(!info.is_connected);

        let info = NetworkInfo::of(&HashMapGraph::with_vertices(1));
        assert!(info.is_connected);
        assert_eq!(info.diameter, Some(0));
        assert_eq!(info.density, 0.0);
    }

    #[test]
    fn display() {
        let mut graph = HashMapGraph::with_vertices(3);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(0, 2);
        let text = NetworkInfo::of(&graph).to_string();
        assert!(text.contains("Nodes: 3"));
        assert!(text.contains("Density: 1.000000"));
        assert!(text.contains("Diameter: 1"));
        assert!(text.ends_with("Average degree: 2.00"));
    }

    #[test]
    fn change_after_attack() {
        let before = HashMapGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let mut after = before.clone();
        ConnectivitySimulator::default()
            .simulate_in_place(&mut after, &[(0, 1)])
            .unwrap();

        let change = NetworkInfo::of(&before).change_to(&NetworkInfo::of(&after));
        assert_eq!(change.nodes, 0);
        assert_eq!(change.edges, -1);
        assert_eq!(change.components, 0);
        assert_eq!(change.diameter, Some(1));
        assert!((change.density + 1.0 / 6.0).abs() < 1e-12);
        assert!((change.average_degree + 0.5).abs() < 1e-12);

        let text = change.to_string();
        assert!(text.contains("Edges: -1"));
        assert!(text.contains("Diameter: +1"));
        assert!(text.ends_with("Average degree: -0.50"));
    }

    #[test]
    fn change_without_diameter() {
        let before = HashMapGraph::from_edges(3, &[(0, 1), (1, 2)]);
        let mut after = before.clone();
        after.remove_edge(1, 2);
        let change = NetworkInfo::of(&before).change_to(&NetworkInfo::of(&after));
        assert_eq!(change.components, 1);
        assert_eq!(change.diameter, None);
        assert!(change.to_string().contains("Diameter: -"));
    }
}
