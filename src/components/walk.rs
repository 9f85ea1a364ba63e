//! Shared iterative DFS over the undirected neighbor relation
//!
//! Both the weak-component surface and the largest-component selector run
//! through this walker. The emit callback returns false to stop the walk
//! early; traversal state is scoped to one call and never shared.

use std::collections::HashSet;

use crate::error::Result;
use crate::graph::source::ensure_contract;
use crate::graph::GraphSource;

/// Call-scoped working state for one weak-component walk
struct WalkState {
    visited: HashSet<String>,
    stack: Vec<String>,
}

impl WalkState {
    fn new(capacity: usize) -> Self {
        Self {
            visited: HashSet::with_capacity(capacity),
            stack: Vec::new(),
        }
    }
}

/// Visit every node weakly reachable from `root` not yet visited, using an
/// explicit stack so deep graphs cannot exhaust the call stack
fn explore(
    graph: &dyn GraphSource,
    root: &str,
    state: &mut WalkState,
    mut on_node: impl FnMut(&str),
) {
    state.stack.push(root.to_string());
    while let Some(node) = state.stack.pop() {
        if !state.visited.insert(node.clone()) {
            continue;
        }
        on_node(&node);
        for neighbor in graph.neighbors(&node) {
            if !state.visited.contains(&neighbor) {
                state.stack.push(neighbor);
            }
        }
    }
}

/// Emit every weak component with its membership materialized
pub(crate) fn each_component(
    graph: &dyn GraphSource,
    mut emit: impl FnMut(Vec<String>) -> bool,
) -> Result<()> {
    let nodes = graph.nodes();
    ensure_contract(graph, &nodes)?;

    let mut state = WalkState::new(nodes.len());
    for root in nodes {
        if state.visited.contains(&root) {
            continue;
        }
        let mut component = Vec::new();
        explore(graph, &root, &mut state, |id| component.push(id.to_string()));
        if !emit(component) {
            return Ok(());
        }
    }
    Ok(())
}

/// Emit the size of every weak component without materializing membership
pub(crate) fn each_component_size(
    graph: &dyn GraphSource,
    mut emit: impl FnMut(usize) -> bool,
) -> Result<()> {
    let nodes = graph.nodes();
    ensure_contract(graph, &nodes)?;

    let mut state = WalkState::new(nodes.len());
    for root in nodes {
        if state.visited.contains(&root) {
            continue;
        }
        let mut size = 0usize;
        explore(graph, &root, &mut state, |_| size += 1);
        if !emit(size) {
            return Ok(());
        }
    }
    Ok(())
}
