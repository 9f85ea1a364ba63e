//! Strong Component Walker
//!
//! Path-based single-pass SCC over the outbound neighbor relation: a
//! preorder counter, a path stack of nodes on the active search path, and
//! a pending stack of visited-but-unassigned nodes replace numeric
//! low-link bookkeeping. Each node is visited exactly once; components
//! emit in reverse topological order of the condensation.

use std::collections::{HashMap, HashSet};

use crate::error::{KnotworkError, Result};
use crate::graph::{source, Directedness, GraphSource};

/// One in-flight visit: a node, its outbound neighbors, and the cursor
/// into them. Explicit frames bound stack depth on deep search paths.
struct Frame {
    node: String,
    neighbors: Vec<String>,
    cursor: usize,
}

/// Call-scoped working state for one SCC walk
struct SccState {
    counter: usize,
    preorder: HashMap<String, usize>,
    assigned: HashSet<String>,
    /// Nodes on the current search path
    path: Vec<String>,
    /// Nodes visited but not yet assigned to a component
    pending: Vec<String>,
    frames: Vec<Frame>,
}

impl SccState {
    fn new(capacity: usize) -> Self {
        Self {
            counter: 0,
            preorder: HashMap::with_capacity(capacity),
            assigned: HashSet::with_capacity(capacity),
            path: Vec::new(),
            pending: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Begin visiting a node: number it and put it on both stacks
    fn open(&mut self, graph: &dyn GraphSource, node: String) {
        self.preorder.insert(node.clone(), self.counter);
        self.counter += 1;
        self.path.push(node.clone());
        self.pending.push(node.clone());
        let neighbors = graph.out_neighbors(&node);
        self.frames.push(Frame {
            node,
            neighbors,
            cursor: 0,
        });
    }
}

/// Compute all strongly-connected components of a directed graph
///
/// A graph classified as purely undirected is a usage error: mutual
/// reachability there is just the weak-component answer, and computing it
/// here would hide caller bugs.
#[tracing::instrument(skip(graph), fields(order = graph.node_count(), size = graph.edge_count()))]
pub fn strongly_connected_components(graph: &dyn GraphSource) -> Result<Vec<Vec<String>>> {
    let nodes = graph.nodes();
    source::ensure_contract(graph, &nodes)?;
    if graph.directedness() == Directedness::Undirected {
        return Err(KnotworkError::WrongDirectionality {
            kind: Directedness::Undirected,
        });
    }
    if nodes.is_empty() {
        return Ok(Vec::new());
    }
    // Nothing is mutually reachable without edges
    if graph.edge_count() == 0 {
        return Ok(nodes.into_iter().map(|id| vec![id]).collect());
    }

    let mut components = Vec::new();
    let mut state = SccState::new(nodes.len());
    for root in nodes {
        if state.preorder.contains_key(&root) {
            continue;
        }
        state.open(graph, root);
        while let Some(frame) = state.frames.last_mut() {
            if frame.cursor < frame.neighbors.len() {
                let neighbor = frame.neighbors[frame.cursor].clone();
                frame.cursor += 1;
                if !state.preorder.contains_key(&neighbor) {
                    state.open(graph, neighbor);
                } else if !state.assigned.contains(&neighbor) {
                    // A back-edge into the active path: collapse the path
                    // down to the ancestor it reaches
                    let seen = state.preorder[&neighbor];
                    while state
                        .path
                        .last()
                        .is_some_and(|top| state.preorder[top] > seen)
                    {
                        state.path.pop();
                    }
                }
            } else {
                let Some(done) = state.frames.pop() else { break };
                if state.path.last() == Some(&done.node) {
                    // No back-edge pulled the node down: it roots a
                    // finished component
                    state.path.pop();
                    let mut component = Vec::new();
                    while let Some(id) = state.pending.pop() {
                        state.assigned.insert(id.clone());
                        let closes = id == done.node;
                        component.push(id);
                        if closes {
                            break;
                        }
                    }
                    components.push(component);
                }
            }
        }
    }
    Ok(components)
}
