//! CSR (Compressed Sparse Row) graph representation
//!
//! # CSR Format
//!
//! ```text
//! Graph: 0 → 1, 0 → 2, 1 → 2
//!
//! CSR:
//!   row_offsets: [0, 2, 3, 3]  // Node 0: edges [0..2), Node 1: [2..3), Node 2: [3..3)
//!   col_indices: [1, 2, 2]     // Edge 0 → node 1, edge 1 → node 2, edge 2 → node 2
//! ```
//!
//! Neighbour order inside a row is the order in which the edges were
//! inserted. Parallel edges and self-loops are kept as given.

use crate::error::{GraphError, Result};

/// Node identifier (zero-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Index into per-node arrays
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Immutable directed graph in CSR layout
///
/// Only the forward direction is stored. Algorithms that need incoming
/// edges build a [`transpose`](CsrGraph::transpose) themselves, so the
/// extra memory shows up in their own measurement.
///
/// # Example
///
/// ```
/// use scc_bench::{CsrGraph, NodeId};
///
/// let graph = CsrGraph::from_edge_list(3, &[
///     (NodeId(0), NodeId(1)),
///     (NodeId(0), NodeId(2)),
/// ]).unwrap();
///
/// let neighbors = graph.outgoing_neighbors(NodeId(0)).unwrap();
/// assert_eq!(neighbors, &[1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    /// Row offsets: node i's edges live in `col_indices[row_offsets[i]..row_offsets[i + 1]]`
    /// Length: `num_nodes` + 1
    row_offsets: Vec<u32>,

    /// Column indices (edge targets)
    /// Length: `num_edges`
    col_indices: Vec<u32>,

    /// Number of nodes
    num_nodes: usize,
}

impl CsrGraph {
    /// Create a graph with no nodes
    #[must_use]
    pub fn new() -> Self {
        Self {
            row_offsets: vec![0],
            col_indices: Vec::new(),
            num_nodes: 0,
        }
    }

    /// Create graph from an explicit node count and edge list
    ///
    /// Nodes without edges are still part of the graph (isolated vertices).
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidVertex`] if an endpoint is `>= num_nodes`
    /// - [`GraphError::InvalidSize`] if the node or edge count does not fit the `u32` CSR indices
    pub fn from_edge_list(num_nodes: usize, edges: &[(NodeId, NodeId)]) -> Result<Self> {
        check_size(num_nodes, edges.len())?;

        if let Some(&(src, dst)) = edges
            .iter()
            .find(|(src, dst)| src.index() >= num_nodes || dst.index() >= num_nodes)
        {
            let vertex = if src.index() >= num_nodes { src } else { dst };
            return Err(GraphError::InvalidVertex {
                vertex: vertex.index(),
                num_nodes,
            });
        }

        Ok(Self::from_checked_edges(
            num_nodes,
            edges.len(),
            edges.iter().copied(),
        ))
    }

    /// Stable counting sort of `edges` by source into CSR form.
    ///
    /// Callers guarantee every endpoint is `< num_nodes` and that the
    /// iterator yields exactly `num_edges` items, twice (it is cloned).
    fn from_checked_edges<I>(num_nodes: usize, num_edges: usize, edges: I) -> Self
    where
        I: Iterator<Item = (NodeId, NodeId)> + Clone,
    {
        let mut row_offsets = vec![0_u32; num_nodes + 1];
        for (src, _) in edges.clone() {
            row_offsets[src.index() + 1] += 1;
        }
        for i in 0..num_nodes {
            row_offsets[i + 1] += row_offsets[i];
        }

        let mut cursor: Vec<usize> = row_offsets[..num_nodes]
            .iter()
            .map(|&offset| offset as usize)
            .collect();
        let mut col_indices = vec![0_u32; num_edges];
        for (src, dst) in edges {
            let slot = &mut cursor[src.index()];
            col_indices[*slot] = dst.0;
            *slot += 1;
        }

        Self {
            row_offsets,
            col_indices,
            num_nodes,
        }
    }

    /// Get outgoing neighbors of a node, in insertion order
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] if node ID is out of bounds
    pub fn outgoing_neighbors(&self, node: NodeId) -> Result<&[u32]> {
        let idx = node.index();
        if idx >= self.num_nodes {
            return Err(GraphError::InvalidVertex {
                vertex: idx,
                num_nodes: self.num_nodes,
            });
        }

        let start = self.row_offsets[idx] as usize;
        let end = self.row_offsets[idx + 1] as usize;

        Ok(&self.col_indices[start..end])
    }

    /// Build the transpose graph (every edge `u → v` becomes `v → u`)
    ///
    /// Sources are scanned in ascending order, so each row of the transpose
    /// lists its in-neighbours in ascending source order (repeated once per
    /// parallel edge).
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_checked_edges(
            self.num_nodes,
            self.num_edges(),
            self.iter_edges().map(|(src, dst)| (dst, src)),
        )
    }

    /// Get number of nodes
    #[must_use]
    pub const fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Get number of edges (parallel edges counted separately)
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.col_indices.len()
    }

    /// Iterate over all edges as `(source, target)`, sources ascending
    pub fn iter_edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + Clone + '_ {
        self.row_offsets
            .windows(2)
            .enumerate()
            .flat_map(move |(src, bounds)| {
                #[allow(clippy::cast_possible_truncation)] // num_nodes checked against u32 at build
                let src = NodeId(src as u32);
                self.col_indices[bounds[0] as usize..bounds[1] as usize]
                    .iter()
                    .map(move |&dst| (src, NodeId(dst)))
            })
    }

    /// Get CSR components (`row_offsets`, `col_indices`)
    #[must_use]
    pub fn csr_components(&self) -> (&[u32], &[u32]) {
        (&self.row_offsets, &self.col_indices)
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Incremental construction of a [`CsrGraph`]
///
/// The node count is fixed up front; every `add_edge` is range-checked
/// against it. `build` consumes the builder, so the finished graph cannot
/// be mutated afterwards.
///
/// # Example
///
/// ```
/// use scc_bench::{CsrGraphBuilder, NodeId};
///
/// let mut builder = CsrGraphBuilder::new(3);
/// builder.add_edge(NodeId(0), NodeId(1)).unwrap();
/// builder.add_edge(NodeId(1), NodeId(2)).unwrap();
/// assert!(builder.add_edge(NodeId(2), NodeId(3)).is_err());
///
/// let graph = builder.build().unwrap();
/// assert_eq!(graph.num_edges(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsrGraphBuilder {
    num_nodes: usize,
    edges: Vec<(NodeId, NodeId)>,
}

impl CsrGraphBuilder {
    /// Start a graph with `num_nodes` vertices and no edges
    #[must_use]
    pub fn new(num_nodes: usize) -> Self {
        Self::with_capacity(num_nodes, 0)
    }

    /// Like [`new`](Self::new), reserving room for `edges` edges
    #[must_use]
    pub fn with_capacity(num_nodes: usize, edges: usize) -> Self {
        Self {
            num_nodes,
            edges: Vec::with_capacity(edges),
        }
    }

    /// Append edge `src → dst`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] if either endpoint is out of range
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId) -> Result<()> {
        for node in [src, dst] {
            if node.index() >= self.num_nodes {
                return Err(GraphError::InvalidVertex {
                    vertex: node.index(),
                    num_nodes: self.num_nodes,
                });
            }
        }
        self.edges.push((src, dst));
        Ok(())
    }

    /// Number of edges added so far
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Finish construction
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidSize`] if the graph exceeds the `u32` CSR indices
    pub fn build(self) -> Result<CsrGraph> {
        check_size(self.num_nodes, self.edges.len())?;
        Ok(CsrGraph::from_checked_edges(
            self.num_nodes,
            self.edges.len(),
            self.edges.into_iter(),
        ))
    }
}

fn check_size(nodes: usize, edges: usize) -> Result<()> {
    if nodes > u32::MAX as usize || edges > u32::MAX as usize {
        return Err(GraphError::InvalidSize { nodes, edges });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = CsrGraph::new();
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph, CsrGraph::from_edge_list(0, &[]).unwrap());
    }

    #[test]
    fn test_from_edge_list_simple() {
        let edges = vec![
            (NodeId(0), NodeId(1)),
            (NodeId(0), NodeId(2)),
            (NodeId(1), NodeId(2)),
        ];

        let graph = CsrGraph::from_edge_list(3, &edges).unwrap();

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 3);

        // Check CSR structure
        assert_eq!(graph.row_offsets, vec![0, 2, 3, 3]);
        assert_eq!(graph.col_indices, vec![1, 2, 2]);
    }

    #[test]
    fn test_isolated_nodes_are_kept() {
        let graph = CsrGraph::from_edge_list(5, &[(NodeId(1), NodeId(2))]).unwrap();
        assert_eq!(graph.num_nodes(), 5);

        let empty: &[u32] = &[];
        assert_eq!(graph.outgoing_neighbors(NodeId(4)).unwrap(), empty);
    }

    #[test]
    fn test_insertion_order_preserved() {
        // Edges of node 0 interleaved with edges of node 1
        let edges = vec![
            (NodeId(0), NodeId(3)),
            (NodeId(1), NodeId(0)),
            (NodeId(0), NodeId(1)),
            (NodeId(0), NodeId(3)), // Parallel edge
            (NodeId(1), NodeId(1)), // Self-loop
        ];
        let graph = CsrGraph::from_edge_list(4, &edges).unwrap();

        assert_eq!(graph.outgoing_neighbors(NodeId(0)).unwrap(), &[3, 1, 3]);
        assert_eq!(graph.outgoing_neighbors(NodeId(1)).unwrap(), &[0, 1]);
    }

    #[test]
    fn test_out_of_range_edge_rejected() {
        let result = CsrGraph::from_edge_list(2, &[(NodeId(0), NodeId(2))]);
        assert_eq!(
            result.unwrap_err(),
            GraphError::InvalidVertex {
                vertex: 2,
                num_nodes: 2
            }
        );
    }

    #[test]
    fn test_outgoing_neighbors_out_of_bounds() {
        let graph = CsrGraph::from_edge_list(2, &[]).unwrap();
        assert!(matches!(
            graph.outgoing_neighbors(NodeId(2)),
            Err(GraphError::InvalidVertex { vertex: 2, .. })
        ));
    }

    #[test]
    fn test_transpose_structure() {
        let edges = vec![
            (NodeId(0), NodeId(1)), // 0 → 1
            (NodeId(0), NodeId(2)), // 0 → 2
            (NodeId(1), NodeId(2)), // 1 → 2
            (NodeId(2), NodeId(2)), // 2 → 2
        ];
        let graph = CsrGraph::from_edge_list(3, &edges).unwrap();
        let rev = graph.transpose();

        assert_eq!(rev.num_nodes(), 3);
        assert_eq!(rev.num_edges(), 4);

        let empty: &[u32] = &[];
        assert_eq!(rev.outgoing_neighbors(NodeId(0)).unwrap(), empty);
        assert_eq!(rev.outgoing_neighbors(NodeId(1)).unwrap(), &[0]);
        assert_eq!(rev.outgoing_neighbors(NodeId(2)).unwrap(), &[0, 1, 2]);

        // Transposing twice gives back the edge multiset
        let mut original: Vec<_> = graph.iter_edges().collect();
        let mut twice: Vec<_> = rev.transpose().iter_edges().collect();
        original.sort_unstable();
        twice.sort_unstable();
        assert_eq!(original, twice);
    }

    #[test]
    fn test_transpose_multi_edges() {
        let edges = vec![
            (NodeId(0), NodeId(1)),
            (NodeId(0), NodeId(1)), // Duplicate edge
            (NodeId(2), NodeId(1)),
        ];
        let graph = CsrGraph::from_edge_list(3, &edges).unwrap();

        let incoming = graph.transpose();
        assert_eq!(incoming.outgoing_neighbors(NodeId(1)).unwrap(), &[0, 0, 2]);
    }

    #[test]
    fn test_builder_matches_edge_list() {
        let mut builder = CsrGraphBuilder::with_capacity(4, 3);
        builder.add_edge(NodeId(2), NodeId(3)).unwrap();
        builder.add_edge(NodeId(0), NodeId(1)).unwrap();
        builder.add_edge(NodeId(2), NodeId(0)).unwrap();
        assert_eq!(builder.num_edges(), 3);

        let built = builder.build().unwrap();
        let expected = CsrGraph::from_edge_list(
            4,
            &[
                (NodeId(2), NodeId(3)),
                (NodeId(0), NodeId(1)),
                (NodeId(2), NodeId(0)),
            ],
        )
        .unwrap();

        assert_eq!(built, expected);
    }

    #[test]
    fn test_builder_rejects_out_of_range() {
        let mut builder = CsrGraphBuilder::new(1);
        assert!(builder.add_edge(NodeId(0), NodeId(0)).is_ok());
        assert!(matches!(
            builder.add_edge(NodeId(1), NodeId(0)),
            Err(GraphError::InvalidVertex { vertex: 1, num_nodes: 1 })
        ));
        assert_eq!(builder.num_edges(), 1);
    }

    #[test]
    fn test_iter_edges_order() {
        let graph = CsrGraph::from_edge_list(
            3,
            &[(NodeId(2), NodeId(0)), (NodeId(0), NodeId(2)), (NodeId(0), NodeId(1))],
        )
        .unwrap();

        let edges: Vec<_> = graph.iter_edges().collect();
        assert_eq!(
            edges,
            vec![
                (NodeId(0), NodeId(2)),
                (NodeId(0), NodeId(1)),
                (NodeId(2), NodeId(0)),
            ]
        );
    }

    #[test]
    fn test_csr_components() {
        let edges = vec![(NodeId(0), NodeId(1)), (NodeId(0), NodeId(2))];

        let graph = CsrGraph::from_edge_list(3, &edges).unwrap();
        let (row_offsets, col_indices) = graph.csr_components();

        assert_eq!(row_offsets, &[0, 2, 2, 2]);
        assert_eq!(col_indices, &[1, 2]);
    }
}
