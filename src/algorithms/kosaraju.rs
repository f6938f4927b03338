//! Kosaraju's two-pass SCC algorithm
//!
//! 1. DFS on the graph as given, recording vertices in finishing order
//! 2. Build the transpose graph
//! 3. DFS on the transpose in reverse finishing order; each tree is an SCC
//!
//! The vertex that finishes last among the unassigned ones always belongs
//! to a source component of what is left, so a transpose traversal from it
//! cannot leak into another component. Materialising the transpose costs
//! memory proportional to the edge count, which is the main resource
//! difference to [`tarjan_scc`](super::tarjan_scc).
//!
//! # Example
//!
//! ```
//! use scc_bench::{kosaraju_scc, CsrGraph, NodeId};
//!
//! // Cycle: 0 → 1 → 2 → 0
//! let graph = CsrGraph::from_edge_list(3, &[
//!     (NodeId(0), NodeId(1)),
//!     (NodeId(1), NodeId(2)),
//!     (NodeId(2), NodeId(0)),
//! ]).unwrap();
//!
//! let sccs = kosaraju_scc(&graph).unwrap();
//! // All three nodes form one SCC
//! assert_eq!(sccs.len(), 1);
//! assert_eq!(sccs[0].len(), 3);
//! ```

use super::{Frame, SccAlgorithm, Sccs};
use crate::error::Result;
use crate::storage::{CsrGraph, NodeId};

/// Kosaraju's algorithm as an [`SccAlgorithm`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Kosaraju;

impl SccAlgorithm for Kosaraju {
    fn name(&self) -> &'static str {
        "kosaraju"
    }

    fn compute(&self, graph: &CsrGraph) -> Result<Sccs> {
        kosaraju_scc(graph)
    }
}

/// Find strongly connected components using Kosaraju's algorithm
///
/// Components are returned in topological order of the condensation
/// (source components first). Members appear in the pre-order of the
/// transpose traversal that collected them.
///
/// # Arguments
///
/// * `graph` - The CSR graph to partition; its transpose is built internally
///
/// # Returns
///
/// * `Ok(Sccs)` - Every vertex in exactly one component, sources first
/// * `Err` - If the graph is malformed
///
/// # Errors
///
/// Returns [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex)
/// if the graph references a vertex outside its own range.
pub fn kosaraju_scc(graph: &CsrGraph) -> Result<Sccs> {
    let n = graph.num_nodes();
    if n == 0 {
        return Ok(Vec::new());
    }

    // Step 1: DFS to get finish order
    let finish_order = finish_order(graph)?;

    // Step 2: transpose
    let transpose = graph.transpose();

    // Step 3: DFS on transpose in reverse finish order
    let mut visited = vec![false; n];
    let mut sccs = Vec::new();

    for &node in finish_order.iter().rev() {
        if !visited[node] {
            sccs.push(collect_component(&transpose, node, &mut visited)?);
        }
    }

    Ok(sccs)
}

/// Post-order of a full DFS over `graph`, roots taken in ascending order
fn finish_order(graph: &CsrGraph) -> Result<Vec<usize>> {
    let n = graph.num_nodes();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut call_stack: Vec<Frame<'_>> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }

        visited[root] = true;
        call_stack.push(Frame::enter(graph, root)?);

        while let Some(frame) = call_stack.last_mut() {
            if let Some(&w) = frame.neighbors.next() {
                let w = w as usize;
                if !visited[w] {
                    visited[w] = true;
                    call_stack.push(Frame::enter(graph, w)?);
                }
            } else {
                order.push(frame.node);
                call_stack.pop();
            }
        }
    }

    Ok(order)
}

/// Collect every vertex reachable from `start` in `transpose` that is not
/// yet assigned, in DFS pre-order
fn collect_component(
    transpose: &CsrGraph,
    start: usize,
    visited: &mut [bool],
) -> Result<Vec<NodeId>> {
    let mut component = Vec::new();
    let mut call_stack = vec![enter(transpose, start, visited, &mut component)?];

    while let Some(frame) = call_stack.last_mut() {
        if let Some(&w) = frame.neighbors.next() {
            let w = w as usize;
            if !visited[w] {
                call_stack.push(enter(transpose, w, visited, &mut component)?);
            }
        } else {
            call_stack.pop();
        }
    }

    Ok(component)
}

fn enter<'g>(
    graph: &'g CsrGraph,
    node: usize,
    visited: &mut [bool],
    component: &mut Vec<NodeId>,
) -> Result<Frame<'g>> {
    visited[node] = true;
    #[allow(clippy::cast_possible_truncation)] // CsrGraph indices are u32
    component.push(NodeId(node as u32));
    Frame::enter(graph, node)
}
