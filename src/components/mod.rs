//! Component discovery over pluggable graph sources
//!
//! Provides the component-analysis surface:
//! - weak components via iterative DFS (callback, size, list and count forms)
//! - strongly-connected components via a path-based single-pass walk
//! - largest-component selection with early termination
//! - subgraph extraction and in-place crop

pub mod largest;
pub mod strong;
pub mod subgraph;
pub(crate) mod walk;
pub mod weak;

pub use largest::largest_weak_component;
pub use strong::strongly_connected_components;
pub use subgraph::{crop_to_largest_weak_component, largest_weak_component_as_subgraph};
pub use weak::{
    count_weak_components, for_each_weak_component, for_each_weak_component_size, weak_components,
};
