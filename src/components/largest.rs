//! Largest-Component Selector
//!
//! Walks weak components and halts as soon as the unvisited remainder
//! cannot unseat the current best, so a dominant component found early
//! ends the traversal without touching the rest of the graph.

use tracing::debug;

use crate::components::walk;
use crate::error::Result;
use crate::graph::{source, GraphSource};

/// Return the weak component with the most nodes
///
/// Ties keep the component discovered first in enumeration order. An
/// empty graph yields an empty component.
#[tracing::instrument(skip(graph), fields(order = graph.node_count(), size = graph.edge_count()))]
pub fn largest_weak_component(graph: &dyn GraphSource) -> Result<Vec<String>> {
    // Without edges every component is a singleton and the first node wins
    if graph.edge_count() == 0 {
        let nodes = graph.nodes();
        source::ensure_contract(graph, &nodes)?;
        return Ok(nodes.into_iter().next().map(|id| vec![id]).unwrap_or_default());
    }

    let total = graph.node_count();
    let mut best: Vec<String> = Vec::new();
    let mut seen = 0usize;
    walk::each_component(graph, |component| {
        seen += component.len();
        if component.len() > best.len() {
            best = component;
        }
        // Halt once the unvisited remainder cannot beat the champion,
        // even if it formed a single component
        best.len() <= total.saturating_sub(seen)
    })?;

    if seen < total {
        debug!(
            best = best.len(),
            unvisited = total - seen,
            "largest component proven before full traversal"
        );
    }
    Ok(best)
}

#[cfg(test)]
mod tests;
