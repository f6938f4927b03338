//! Cycle detection
//!
//! `is_cyclic` checks whether a directed graph contains a cycle. It is the
//! acyclicity check applied to SCC condensations.
//!
//! # Example
//!
//! ```
//! use scc_bench::{is_cyclic, CsrGraph, NodeId};
//!
//! // Acyclic: 0 → 1 → 2
//! let dag = CsrGraph::from_edge_list(3, &[
//!     (NodeId(0), NodeId(1)),
//!     (NodeId(1), NodeId(2)),
//! ]).unwrap();
//! assert!(!is_cyclic(&dag).unwrap());
//!
//! // Cyclic: 0 → 1 → 2 → 0
//! let cyclic = CsrGraph::from_edge_list(3, &[
//!     (NodeId(0), NodeId(1)),
//!     (NodeId(1), NodeId(2)),
//!     (NodeId(2), NodeId(0)),
//! ]).unwrap();
//! assert!(is_cyclic(&cyclic).unwrap());
//! ```

use super::Frame;
use crate::error::Result;
use crate::storage::CsrGraph;

/// Node state during DFS traversal
#[derive(Clone, Copy, PartialEq, Eq)]
enum NodeState {
    /// Not yet visited
    Unvisited,
    /// Currently on the DFS path
    InStack,
    /// Fully processed (all descendants visited)
    Finished,
}

/// Check if the graph contains any cycles (self-loops included)
///
/// Depth-first search with three-color marking; an edge into an `InStack`
/// node is a back edge and closes a cycle. Runs on the same explicit
/// `Frame` stack as the SCC traversals.
///
/// # Arguments
///
/// * `graph` - The CSR graph to check
///
/// # Returns
///
/// `Ok(true)` if the graph contains at least one cycle, `Ok(false)` otherwise
///
/// # Errors
///
/// Returns [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex)
/// if the graph references a vertex outside its own range.
pub fn is_cyclic(graph: &CsrGraph) -> Result<bool> {
    let n = graph.num_nodes();
    let mut state = vec![NodeState::Unvisited; n];
    let mut call_stack: Vec<Frame<'_>> = Vec::new();

    // Check all nodes (handles disconnected components)
    for start in 0..n {
        if state[start] != NodeState::Unvisited {
            continue;
        }

        state[start] = NodeState::InStack;
        call_stack.push(Frame::enter(graph, start)?);

        while let Some(frame) = call_stack.last_mut() {
            match frame.neighbors.next().map(|&w| w as usize) {
                Some(w) => match state[w] {
                    // Back edge found - cycle detected!
                    NodeState::InStack => return Ok(true),
                    NodeState::Unvisited => {
                        state[w] = NodeState::InStack;
                        call_stack.push(Frame::enter(graph, w)?);
                    }
                    NodeState::Finished => {}
                },
                None => {
                    state[frame.node] = NodeState::Finished;
                    call_stack.pop();
                }
            }
        }
    }

    Ok(false)
}
