use serde_json::Value;

use crate::error::{KnotworkError, Result};
use crate::graph::types::{Directedness, EdgeRecord};

/// Trait providing read-only adjacency for component traversal
///
/// Implementations must keep node identifiers stable and the enumeration
/// order of [`nodes`](GraphSource::nodes) fixed for the duration of any
/// single traversal call.
pub trait GraphSource {
    /// Number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Number of edges in the graph
    fn edge_count(&self) -> usize;

    /// All node ids in a defined, stable enumeration order
    fn nodes(&self) -> Vec<String>;

    /// Neighbors of `id` ignoring edge direction
    fn neighbors(&self, id: &str) -> Vec<String>;

    /// Neighbors reachable from `id` respecting edge direction; undirected
    /// edges are reachable from either endpoint
    fn out_neighbors(&self, id: &str) -> Vec<String>;

    /// Directionality classification of the graph
    fn directedness(&self) -> Directedness;
}

/// Trait extending [`GraphSource`] with the attribute, enumeration and
/// mutation capabilities the subgraph operations need
pub trait GraphStore: GraphSource {
    /// Attribute payload attached to a node, if any
    fn node_attributes(&self, id: &str) -> Option<Value>;

    /// Every edge of the graph in enumeration order
    fn edges(&self) -> Vec<EdgeRecord>;

    /// Create an empty graph of the same kind and conventions
    fn empty_like(&self) -> Self
    where
        Self: Sized;

    /// Insert a node carrying an attribute payload
    fn add_node(&mut self, id: &str, attributes: Value) -> Result<()>;

    /// Insert an edge between existing nodes
    fn add_edge(&mut self, edge: EdgeRecord) -> Result<()>;

    /// Delete a node; incident edges are removed as part of the deletion
    fn remove_node(&mut self, id: &str) -> Result<()>;
}

/// Check that a source honors the access contract, before any traversal
/// state is allocated
pub(crate) fn ensure_contract(source: &dyn GraphSource, nodes: &[String]) -> Result<()> {
    let reported = source.node_count();
    if nodes.len() != reported {
        return Err(KnotworkError::invalid_graph(format!(
            "node enumeration yields {} ids but node_count reports {}",
            nodes.len(),
            reported
        )));
    }
    Ok(())
}
