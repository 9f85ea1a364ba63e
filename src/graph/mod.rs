//! Graph access and storage
//!
//! Provides the seam between component walkers and graph data:
//! - `GraphSource` for read-only adjacency and enumeration
//! - `GraphStore` for attribute access, enumeration and mutation
//! - `MemoryGraph`, an in-memory store implementing both

pub mod memory;
pub mod source;
pub mod types;

pub use memory::MemoryGraph;
pub use source::{GraphSource, GraphStore};
pub use types::{Directedness, EdgeRecord};
