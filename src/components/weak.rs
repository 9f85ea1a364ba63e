//! Weak Component Walker
//!
//! Partitions the node set into weakly-connected components: maximal sets
//! of nodes mutually reachable ignoring edge direction. Every function
//! here is purely observational; the graph is never mutated.

use crate::components::walk;
use crate::error::Result;
use crate::graph::{source, GraphSource};

/// Invoke `visit` once per weakly-connected component
///
/// Components arrive in discovery order: the component containing the
/// first node in enumeration order comes first.
pub fn for_each_weak_component(
    graph: &dyn GraphSource,
    mut visit: impl FnMut(Vec<String>),
) -> Result<()> {
    walk::each_component(graph, |component| {
        visit(component);
        true
    })
}

/// Invoke `visit` once per component with its node count; membership lists
/// are never materialized
pub fn for_each_weak_component_size(
    graph: &dyn GraphSource,
    mut visit: impl FnMut(usize),
) -> Result<()> {
    walk::each_component_size(graph, |size| {
        visit(size);
        true
    })
}

/// Collect every weakly-connected component
#[tracing::instrument(skip(graph), fields(order = graph.node_count(), size = graph.edge_count()))]
pub fn weak_components(graph: &dyn GraphSource) -> Result<Vec<Vec<String>>> {
    // Without edges every component is a singleton; skip the traversal
    if graph.edge_count() == 0 {
        let nodes = graph.nodes();
        source::ensure_contract(graph, &nodes)?;
        return Ok(nodes.into_iter().map(|id| vec![id]).collect());
    }

    let mut components = Vec::new();
    for_each_weak_component(graph, |component| components.push(component))?;
    Ok(components)
}

/// Number of weakly-connected components
#[tracing::instrument(skip(graph), fields(order = graph.node_count(), size = graph.edge_count()))]
pub fn count_weak_components(graph: &dyn GraphSource) -> Result<usize> {
    if graph.edge_count() == 0 {
        let nodes = graph.nodes();
        source::ensure_contract(graph, &nodes)?;
        return Ok(nodes.len());
    }

    let mut count = 0usize;
    for_each_weak_component_size(graph, |_| count += 1)?;
    Ok(count)
}
