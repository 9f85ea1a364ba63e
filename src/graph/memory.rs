//! In-memory reference graph store
//!
//! `MemoryGraph` plays the part an external graph engine would: it owns
//! node and edge storage plus attribute payloads, while the component
//! walkers stay purely observational. Node enumeration order is insertion
//! order; removals keep the order of the remaining entries stable.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{KnotworkError, Result};
use crate::graph::source::{GraphSource, GraphStore};
use crate::graph::types::{Directedness, EdgeRecord};

/// Mutable in-memory graph with insertion-order enumeration
#[derive(Debug, Clone)]
pub struct MemoryGraph {
    kind: Directedness,
    // Tombstoned so removal keeps enumeration order stable
    nodes: Vec<Option<String>>,
    positions: HashMap<String, usize>,
    attributes: HashMap<String, Value>,
    edges: Vec<Option<EdgeRecord>>,
    // Edge slots keyed by source / target endpoint
    outbound: HashMap<String, Vec<usize>>,
    inbound: HashMap<String, Vec<usize>>,
    live_edges: usize,
}

impl MemoryGraph {
    /// Create an empty graph of the given kind
    pub fn new(kind: Directedness) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            positions: HashMap::new(),
            attributes: HashMap::new(),
            edges: Vec::new(),
            outbound: HashMap::new(),
            inbound: HashMap::new(),
            live_edges: 0,
        }
    }

    pub fn kind(&self) -> Directedness {
        self.kind
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Insert a node with no attributes
    pub fn add_node(&mut self, id: impl Into<String>) -> Result<()> {
        self.add_node_with(id, Value::Null)
    }

    /// Insert a node carrying an attribute payload
    pub fn add_node_with(&mut self, id: impl Into<String>, attributes: Value) -> Result<()> {
        let id = id.into();
        if self.positions.contains_key(&id) {
            return Err(KnotworkError::already_exists("node", &id));
        }
        self.positions.insert(id.clone(), self.nodes.len());
        if !attributes.is_null() {
            self.attributes.insert(id.clone(), attributes);
        }
        self.nodes.push(Some(id));
        Ok(())
    }

    /// Insert an edge whose directedness follows the graph kind
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<()> {
        self.add_edge_with(from, to, Value::Null)
    }

    /// Insert an edge with an attribute payload
    pub fn add_edge_with(&mut self, from: &str, to: &str, attributes: Value) -> Result<()> {
        self.insert_edge(EdgeRecord {
            from: from.to_string(),
            to: to.to_string(),
            directed: self.kind != Directedness::Undirected,
            attributes,
        })
    }

    /// Insert an explicitly undirected edge into a mixed graph
    pub fn add_undirected_edge(&mut self, from: &str, to: &str) -> Result<()> {
        self.insert_edge(EdgeRecord {
            from: from.to_string(),
            to: to.to_string(),
            directed: false,
            attributes: Value::Null,
        })
    }

    fn insert_edge(&mut self, edge: EdgeRecord) -> Result<()> {
        if edge.directed && self.kind == Directedness::Undirected {
            return Err(KnotworkError::unsupported("edge", "directed", self.kind));
        }
        if !edge.directed && self.kind == Directedness::Directed {
            return Err(KnotworkError::unsupported("edge", "undirected", self.kind));
        }
        if !self.has_node(&edge.from) {
            return Err(KnotworkError::not_found("node", &edge.from));
        }
        if !self.has_node(&edge.to) {
            return Err(KnotworkError::not_found("node", &edge.to));
        }
        let slot = self.edges.len();
        self.outbound.entry(edge.from.clone()).or_default().push(slot);
        self.inbound.entry(edge.to.clone()).or_default().push(slot);
        self.edges.push(Some(edge));
        self.live_edges += 1;
        Ok(())
    }

    /// Delete a node and every edge incident to it
    pub fn remove_node(&mut self, id: &str) -> Result<()> {
        let Some(position) = self.positions.remove(id) else {
            return Err(KnotworkError::not_found("node", id));
        };
        self.nodes[position] = None;
        self.attributes.remove(id);
        for slot in self.outbound.remove(id).unwrap_or_default() {
            self.clear_edge(slot);
        }
        for slot in self.inbound.remove(id).unwrap_or_default() {
            self.clear_edge(slot);
        }
        Ok(())
    }

    fn clear_edge(&mut self, slot: usize) {
        // Self-loops appear in both endpoint lists but clear only once
        let Some(edge) = self.edges[slot].take() else {
            return;
        };
        self.live_edges -= 1;
        if let Some(slots) = self.outbound.get_mut(&edge.from) {
            slots.retain(|&s| s != slot);
        }
        if let Some(slots) = self.inbound.get_mut(&edge.to) {
            slots.retain(|&s| s != slot);
        }
    }

    /// Node ids in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().flatten().map(String::as_str)
    }

    /// Live edges in insertion order
    pub fn edge_records(&self) -> impl Iterator<Item = &EdgeRecord> {
        self.edges.iter().flatten()
    }

    fn edge_at(&self, slot: usize) -> Option<&EdgeRecord> {
        self.edges.get(slot).and_then(Option::as_ref)
    }
}

impl GraphSource for MemoryGraph {
    fn node_count(&self) -> usize {
        self.positions.len()
    }

    fn edge_count(&self) -> usize {
        self.live_edges
    }

    fn nodes(&self) -> Vec<String> {
        self.node_ids().map(str::to_string).collect()
    }

    fn neighbors(&self, id: &str) -> Vec<String> {
        let mut neighbors = Vec::new();
        for &slot in self.outbound.get(id).into_iter().flatten() {
            if let Some(edge) = self.edge_at(slot) {
                neighbors.push(edge.to.clone());
            }
        }
        for &slot in self.inbound.get(id).into_iter().flatten() {
            if let Some(edge) = self.edge_at(slot) {
                neighbors.push(edge.from.clone());
            }
        }
        neighbors
    }

    fn out_neighbors(&self, id: &str) -> Vec<String> {
        let mut neighbors = Vec::new();
        for &slot in self.outbound.get(id).into_iter().flatten() {
            if let Some(edge) = self.edge_at(slot) {
                neighbors.push(edge.to.clone());
            }
        }
        for &slot in self.inbound.get(id).into_iter().flatten() {
            if let Some(edge) = self.edge_at(slot) {
                if !edge.directed {
                    neighbors.push(edge.from.clone());
                }
            }
        }
        neighbors
    }

    fn directedness(&self) -> Directedness {
        self.kind
    }
}

impl GraphStore for MemoryGraph {
    fn node_attributes(&self, id: &str) -> Option<Value> {
        self.attributes.get(id).cloned()
    }

    fn edges(&self) -> Vec<EdgeRecord> {
        self.edge_records().cloned().collect()
    }

    fn empty_like(&self) -> Self {
        MemoryGraph::new(self.kind)
    }

    fn add_node(&mut self, id: &str, attributes: Value) -> Result<()> {
        self.add_node_with(id, attributes)
    }

    fn add_edge(&mut self, edge: EdgeRecord) -> Result<()> {
        self.insert_edge(edge)
    }

    fn remove_node(&mut self, id: &str) -> Result<()> {
        MemoryGraph::remove_node(self, id)
    }
}
