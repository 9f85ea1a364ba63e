//! Error types for knotwork
//!
//! Every error is fatal to the call that raised it: callers fix the input
//! and retry, the library never recovers or suppresses internally.

use thiserror::Error;

use crate::graph::types::Directedness;

/// Errors that can occur during knotwork operations
#[derive(Error, Debug)]
pub enum KnotworkError {
    /// The argument does not honor the graph access contract
    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    /// Strong components requested on a graph without directed edges
    #[error("strongly connected components require directed edges (graph is {kind})")]
    WrongDirectionality { kind: Directedness },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },
}

impl KnotworkError {
    /// Create an error for a graph that violates the access contract
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        KnotworkError::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        KnotworkError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        KnotworkError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        KnotworkError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }
}

/// Result type alias for knotwork operations
pub type Result<T> = std::result::Result<T, KnotworkError>;
