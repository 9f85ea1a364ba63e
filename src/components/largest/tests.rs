use std::cell::RefCell;

use crate::components::largest::*;
use crate::components::weak::weak_components;
use crate::graph::memory::MemoryGraph;
use crate::graph::source::GraphSource;
use crate::graph::types::Directedness;

fn undirected(nodes: &[&str], edges: &[(&str, &str)]) -> MemoryGraph {
    let mut graph = MemoryGraph::new(Directedness::Undirected);
    for id in nodes {
        graph.add_node(*id).unwrap();
    }
    for (from, to) in edges {
        graph.add_edge(from, to).unwrap();
    }
    graph
}

/// Test the reference scenario: largest component of nodes 1-5 with edges
/// (1,2), (2,3), (4,5) is {1,2,3}
#[test]
fn test_scenario_largest() {
    let graph = undirected(
        &["1", "2", "3", "4", "5"],
        &[("1", "2"), ("2", "3"), ("4", "5")],
    );

    let mut largest = largest_weak_component(&graph).unwrap();
    largest.sort();
    assert_eq!(largest, vec!["1", "2", "3"]);
}

/// Test that no other component is bigger than the one returned
#[test]
fn test_largest_is_maximal() {
    let graph = undirected(
        &["a", "b", "c", "d", "e", "f", "g", "h"],
        &[("a", "b"), ("c", "d"), ("c", "e"), ("d", "e"), ("f", "g")],
    );

    let largest = largest_weak_component(&graph).unwrap();
    for component in weak_components(&graph).unwrap() {
        assert!(component.len() <= largest.len());
    }
    assert_eq!(largest.len(), 3);
}

/// Test that ties keep the component discovered first
#[test]
fn test_tie_break_first_found() {
    let graph = undirected(&["m", "n", "p", "q"], &[("m", "n"), ("p", "q")]);

    let mut largest = largest_weak_component(&graph).unwrap();
    largest.sort();
    assert_eq!(largest, vec!["m", "n"]);
}

#[test]
fn test_empty_graph_yields_empty_component() {
    let graph = MemoryGraph::new(Directedness::Undirected);
    assert!(largest_weak_component(&graph).unwrap().is_empty());
}

/// Test that a graph without edges returns the first node as a singleton
#[test]
fn test_zero_edges_returns_first_node() {
    let graph = undirected(&["z", "a", "b"], &[]);
    assert_eq!(largest_weak_component(&graph).unwrap(), vec!["z"]);
}

/// A source recording which nodes had their neighbors expanded
struct ExpansionRecorder {
    inner: MemoryGraph,
    expanded: RefCell<Vec<String>>,
}

impl GraphSource for ExpansionRecorder {
    fn node_count(&self) -> usize {
        self.inner.node_count()
    }
    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }
    fn nodes(&self) -> Vec<String> {
        self.inner.nodes()
    }
    fn neighbors(&self, id: &str) -> Vec<String> {
        self.expanded.borrow_mut().push(id.to_string());
        self.inner.neighbors(id)
    }
    fn out_neighbors(&self, id: &str) -> Vec<String> {
        self.inner.out_neighbors(id)
    }
    fn directedness(&self) -> Directedness {
        self.inner.directedness()
    }
}

/// Test that traversal halts once the remainder cannot beat the champion:
/// a 4-node component found first proves itself against 3 leftover nodes
#[test]
fn test_early_exit_skips_remainder() {
    let inner = undirected(
        &["a1", "a2", "a3", "a4", "x", "y", "z"],
        &[("a1", "a2"), ("a2", "a3"), ("a3", "a4")],
    );
    let graph = ExpansionRecorder {
        inner,
        expanded: RefCell::new(Vec::new()),
    };

    let largest = largest_weak_component(&graph).unwrap();
    assert_eq!(largest.len(), 4);

    let expanded = graph.expanded.borrow();
    for leftover in ["x", "y", "z"] {
        assert!(
            !expanded.iter().any(|id| id == leftover),
            "{} was expanded after the largest component was proven",
            leftover
        );
    }
}

/// Test that the early exit never fires prematurely: when the largest
/// component comes last it is still found
#[test]
fn test_largest_found_when_discovered_last() {
    let graph = undirected(
        &["s1", "s2", "b1", "b2", "b3"],
        &[("s1", "s2"), ("b1", "b2"), ("b2", "b3")],
    );

    let mut largest = largest_weak_component(&graph).unwrap();
    largest.sort();
    assert_eq!(largest, vec!["b1", "b2", "b3"]);
}
