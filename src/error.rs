//! Error taxonomy for graph construction and SCC computation
//!
//! All variants are input errors: none of them is transient, so nothing in
//! the crate retries or substitutes a fallback result.

use thiserror::Error;

/// Errors raised while building or analysing a graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Edges were requested but there is no vertex to draw endpoints from
    #[error("cannot place {edges} edges in a graph with {nodes} nodes")]
    InvalidSize {
        /// Requested vertex count
        nodes: usize,
        /// Requested edge count
        edges: usize,
    },

    /// An edge or query referenced a vertex outside `0..num_nodes`
    #[error("vertex {vertex} out of bounds for graph with {num_nodes} nodes")]
    InvalidVertex {
        /// Offending vertex index
        vertex: usize,
        /// Vertex count of the graph
        num_nodes: usize,
    },

    /// A component list does not cover every vertex exactly once
    #[error("components do not partition the vertex set: {reason}")]
    InvalidPartition {
        /// Which property was violated
        reason: String,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GraphError::InvalidSize { nodes: 0, edges: 3 };
        assert_eq!(err.to_string(), "cannot place 3 edges in a graph with 0 nodes");

        let err = GraphError::InvalidVertex {
            vertex: 7,
            num_nodes: 4,
        };
        assert!(err.to_string().contains("out of bounds"));
    }
}
