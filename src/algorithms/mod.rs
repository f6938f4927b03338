//! Strongly connected components and the graph checks around them
//!
//! Two interchangeable SCC algorithms behind one capability trait:
//! - [`Tarjan`]: single DFS with low-link propagation
//! - [`Kosaraju`]: forward DFS for finishing order, then DFS on the transpose
//!
//! Both must return the same partition (as a set of sets) for any graph;
//! only the enumeration order differs.

pub mod kosaraju;
pub mod structure;
pub mod tarjan;
pub mod topo;
pub mod traversal;

pub use kosaraju::{kosaraju_scc, Kosaraju};
pub use structure::{canonical_sccs, component_labels, condensation};
pub use tarjan::{tarjan_scc, Tarjan};
pub use topo::is_cyclic;
pub use traversal::bfs;

use crate::error::Result;
use crate::storage::{CsrGraph, NodeId};

/// A list of strongly connected components, each a list of vertices
pub type Sccs = Vec<Vec<NodeId>>;

/// Anything that can partition a graph into its SCCs
///
/// Implementations borrow the graph read-only and keep all traversal
/// state local to one `compute` call, so a single graph can be analysed
/// from several threads at once.
pub trait SccAlgorithm: Send + Sync {
    /// Short identifier used in measurement records
    fn name(&self) -> &'static str;

    /// Compute the SCCs of `graph`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex)
    /// if the graph references a vertex outside its range.
    fn compute(&self, graph: &CsrGraph) -> Result<Sccs>;
}

/// One level of an explicit-stack DFS: a vertex and its unexplored edges
struct Frame<'g> {
    node: usize,
    neighbors: std::slice::Iter<'g, u32>,
}

impl<'g> Frame<'g> {
    fn enter(graph: &'g CsrGraph, node: usize) -> Result<Self> {
        #[allow(clippy::cast_possible_truncation)] // CsrGraph indices are u32
        let neighbors = graph.outgoing_neighbors(NodeId(node as u32))?.iter();
        Ok(Self { node, neighbors })
    }
}
