//! Graph generators: seeded random digraphs and fixed shapes
//!
//! `random_graph` is what the comparison driver measures. The shape
//! generators give graphs with a known SCC structure for tests and
//! benchmarks (deep paths exercise traversal depth, complete graphs
//! exercise edge density).
//!
//! # Example
//!
//! ```
//! use scc_bench::random_graph;
//!
//! let a = random_graph(100, 500, 42).unwrap();
//! let b = random_graph(100, 500, 42).unwrap();
//! assert_eq!(a, b); // Same seed, same graph
//! assert_eq!(a.num_edges(), 500);
//! ```

use crate::error::{GraphError, Result};
use crate::storage::{CsrGraph, CsrGraphBuilder, NodeId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build a random directed graph with `nodes` vertices and `edges` edges
///
/// Each edge draws its source, then its target, uniformly from
/// `0..nodes`. Self-loops and parallel edges are kept. The generator is
/// `StdRng` seeded with `seed`, so the same arguments always produce the
/// same adjacency structure.
///
/// # Arguments
///
/// * `nodes` - Number of vertices, labelled `0..nodes`
/// * `edges` - Number of edges to draw
/// * `seed` - RNG seed
///
/// # Returns
///
/// A graph with exactly `nodes` vertices and `edges` edges
///
/// # Errors
///
/// Returns [`GraphError::InvalidSize`] if `nodes == 0` and `edges > 0`,
/// or if the graph does not fit `u32` indices.
pub fn random_graph(nodes: usize, edges: usize, seed: u64) -> Result<CsrGraph> {
    if nodes == 0 && edges > 0 {
        return Err(GraphError::InvalidSize { nodes, edges });
    }
    if nodes > u32::MAX as usize {
        return Err(GraphError::InvalidSize { nodes, edges });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = CsrGraphBuilder::with_capacity(nodes, edges);

    #[allow(clippy::cast_possible_truncation)] // nodes <= u32::MAX checked above
    let upper = nodes as u32;
    for _ in 0..edges {
        let src = rng.gen_range(0..upper);
        let dst = rng.gen_range(0..upper);
        builder.add_edge(NodeId(src), NodeId(dst))?;
    }

    let graph = builder.build()?;
    log::debug!(
        "generated random graph: {} nodes, {} edges, seed {}",
        graph.num_nodes(),
        graph.num_edges(),
        seed
    );
    Ok(graph)
}

/// Path `0 → 1 → … → n-1` (n singleton SCCs, traversal depth n)
///
/// # Errors
///
/// Returns [`GraphError::InvalidSize`] if `n` does not fit `u32` indices
pub fn path_graph(n: usize) -> Result<CsrGraph> {
    shape(n, n.saturating_sub(1), |builder| {
        for id in 1..n {
            builder.add_edge(node(id - 1), node(id))?;
        }
        Ok(())
    })
}

/// Cycle `0 → 1 → … → n-1 → 0` (one SCC for `n > 0`)
///
/// # Errors
///
/// Returns [`GraphError::InvalidSize`] if `n` does not fit `u32` indices
pub fn cycle_graph(n: usize) -> Result<CsrGraph> {
    shape(n, n, |builder| {
        for id in 0..n {
            builder.add_edge(node(id), node((id + 1) % n))?;
        }
        Ok(())
    })
}

/// Complete digraph: every ordered pair, self-loops included
///
/// # Errors
///
/// Returns [`GraphError::InvalidSize`] if `n * n` edges do not fit `u32` indices
pub fn complete_graph(n: usize) -> Result<CsrGraph> {
    let edges = n.checked_mul(n).ok_or(GraphError::InvalidSize {
        nodes: n,
        edges: usize::MAX,
    })?;
    shape(n, edges, |builder| {
        for src in 0..n {
            for dst in 0..n {
                builder.add_edge(node(src), node(dst))?;
            }
        }
        Ok(())
    })
}

fn shape(
    nodes: usize,
    edges: usize,
    fill: impl FnOnce(&mut CsrGraphBuilder) -> Result<()>,
) -> Result<CsrGraph> {
    if nodes > u32::MAX as usize || edges > u32::MAX as usize {
        return Err(GraphError::InvalidSize { nodes, edges });
    }
    let mut builder = CsrGraphBuilder::with_capacity(nodes, edges);
    fill(&mut builder)?;
    builder.build()
}

#[allow(clippy::cast_possible_truncation)] // callers check against u32::MAX
const fn node(id: usize) -> NodeId {
    NodeId(id as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_graph_sizes() {
        let graph = random_graph(20, 80, 7).unwrap();
        assert_eq!(graph.num_nodes(), 20);
        assert_eq!(graph.num_edges(), 80);
        assert!(graph
            .iter_edges()
            .all(|(src, dst)| src.index() < 20 && dst.index() < 20));
    }

    #[test]
    fn test_random_graph_deterministic() {
        let a = random_graph(300, 1500, 42).unwrap();
        let b = random_graph(300, 1500, 42).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.csr_components(), b.csr_components());
    }

    #[test]
    fn test_random_graph_seed_changes_graph() {
        let a = random_graph(300, 1500, 42).unwrap();
        let b = random_graph(300, 1500, 43).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_random_graph_empty() {
        let graph = random_graph(0, 0, 1).unwrap();
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_random_graph_no_vertices_with_edges() {
        assert_eq!(
            random_graph(0, 5, 1).unwrap_err(),
            GraphError::InvalidSize { nodes: 0, edges: 5 }
        );
    }

    #[test]
    fn test_random_graph_single_vertex_only_self_loops() {
        let graph = random_graph(1, 10, 3).unwrap();
        assert_eq!(graph.outgoing_neighbors(NodeId(0)).unwrap(), &[0; 10]);
    }

    #[test]
    fn test_path_graph() {
        let graph = path_graph(4).unwrap();
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.outgoing_neighbors(NodeId(2)).unwrap(), &[3]);
        assert_eq!(path_graph(0).unwrap().num_nodes(), 0);
    }

    #[test]
    fn test_cycle_graph() {
        let graph = cycle_graph(3).unwrap();
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.outgoing_neighbors(NodeId(2)).unwrap(), &[0]);

        // Single vertex cycle is a self-loop
        let single = cycle_graph(1).unwrap();
        assert_eq!(single.outgoing_neighbors(NodeId(0)).unwrap(), &[0]);
    }

    #[test]
    fn test_complete_graph() {
        let graph = complete_graph(3).unwrap();
        assert_eq!(graph.num_edges(), 9);
        assert_eq!(graph.outgoing_neighbors(NodeId(1)).unwrap(), &[0, 1, 2]);
    }
}
