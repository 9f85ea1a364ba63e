//! Subgraph extraction and crop built atop component membership

use std::collections::HashSet;
use std::time::Instant;

use serde_json::Value;
use tracing::debug;

use crate::components::largest::largest_weak_component;
use crate::error::Result;
use crate::graph::GraphStore;
use crate::trace_time;

/// Build a new graph restricted to the largest weak component, copying
/// node and edge attributes verbatim
#[tracing::instrument(skip(graph), fields(order = graph.node_count(), size = graph.edge_count()))]
pub fn largest_weak_component_as_subgraph<G: GraphStore>(graph: &G) -> Result<G> {
    let start = Instant::now();
    let component = largest_weak_component(graph)?;
    let members: HashSet<&str> = component.iter().map(String::as_str).collect();

    let mut subgraph = graph.empty_like();
    for id in &component {
        let attributes = graph.node_attributes(id).unwrap_or(Value::Null);
        subgraph.add_node(id, attributes)?;
    }
    // Weak components are closed under reachability: an edge whose source
    // is a member always has a member target, so nothing dangles
    for edge in graph.edges() {
        if members.contains(edge.from.as_str()) {
            subgraph.add_edge(edge)?;
        }
    }

    trace_time!(
        start,
        "subgraph_extracted",
        nodes = subgraph.node_count(),
        edges = subgraph.edge_count()
    );
    Ok(subgraph)
}

/// Delete every node outside the largest weak component
///
/// Mutates the graph irreversibly; incident-edge cascade is the store's
/// responsibility.
#[tracing::instrument(skip(graph), fields(order = graph.node_count(), size = graph.edge_count()))]
pub fn crop_to_largest_weak_component<G: GraphStore>(graph: &mut G) -> Result<()> {
    let component = largest_weak_component(&*graph)?;
    let members: HashSet<String> = component.into_iter().collect();

    let doomed: Vec<String> = graph
        .nodes()
        .into_iter()
        .filter(|id| !members.contains(id))
        .collect();
    for id in &doomed {
        graph.remove_node(id)?;
    }

    debug!(
        removed = doomed.len(),
        kept = members.len(),
        "cropped graph to largest weak component"
    );
    Ok(())
}
