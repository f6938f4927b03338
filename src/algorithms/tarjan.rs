//! Tarjan's single-pass SCC algorithm
//!
//! One depth-first traversal assigns each vertex a discovery index and a
//! low-link value. A vertex whose low-link equals its own index is the root
//! of a component; popping the active stack down to it yields that
//! component. No transpose and no second pass are needed.
//!
//! The traversal keeps an explicit frame stack on the heap instead of
//! recursing, so depth is bounded by memory, not by the thread's stack.
//! Vertices are processed in exactly the order of the recursive
//! formulation: pre-order descent, root check on post-order exit.
//!
//! # Example
//!
//! ```
//! use scc_bench::{tarjan_scc, CsrGraph, NodeId};
//!
//! // 0 → 1 → 2 → 0, plus isolated 3
//! let graph = CsrGraph::from_edge_list(4, &[
//!     (NodeId(0), NodeId(1)),
//!     (NodeId(1), NodeId(2)),
//!     (NodeId(2), NodeId(0)),
//! ]).unwrap();
//!
//! let sccs = tarjan_scc(&graph).unwrap();
//! assert_eq!(sccs, vec![
//!     vec![NodeId(2), NodeId(1), NodeId(0)],
//!     vec![NodeId(3)],
//! ]);
//! ```

use super::{Frame, SccAlgorithm, Sccs};
use crate::error::Result;
use crate::storage::{CsrGraph, NodeId};
use std::cmp::min;

/// Marker for "not yet discovered" in `indices`
const UNVISITED: usize = usize::MAX;

/// Tarjan's algorithm as an [`SccAlgorithm`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Tarjan;

impl SccAlgorithm for Tarjan {
    fn name(&self) -> &'static str {
        "tarjan"
    }

    fn compute(&self, graph: &CsrGraph) -> Result<Sccs> {
        tarjan_scc(graph)
    }
}

/// Per-invocation traversal state
struct TarjanState {
    /// Next discovery index to hand out
    index: usize,
    /// Discovery index per vertex (`UNVISITED` until reached)
    indices: Vec<usize>,
    lowlinks: Vec<usize>,
    /// Vertices discovered but not yet assigned to a component
    stack: Vec<usize>,
    on_stack: Vec<bool>,
    components: Sccs,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        Self {
            index: 0,
            indices: vec![UNVISITED; n],
            lowlinks: vec![UNVISITED; n],
            stack: Vec::new(),
            on_stack: vec![false; n],
            components: Vec::new(),
        }
    }

    fn discover(&mut self, v: usize) {
        self.indices[v] = self.index;
        self.lowlinks[v] = self.index;
        self.index += 1;
        self.stack.push(v);
        self.on_stack[v] = true;
    }

    /// Pop the active stack down to and including root `v`
    fn emit_component(&mut self, v: usize) {
        let mut component = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.on_stack[w] = false;
            #[allow(clippy::cast_possible_truncation)] // CsrGraph indices are u32
            component.push(NodeId(w as u32));
            if w == v {
                break;
            }
        }
        self.components.push(component);
    }
}

/// Find strongly connected components using Tarjan's algorithm
///
/// Components are returned in reverse topological order of the
/// condensation (sink components first). Members of a component appear in
/// the order they were popped from the active stack, root last.
///
/// # Arguments
///
/// * `graph` - The CSR graph to partition
///
/// # Returns
///
/// * `Ok(Sccs)` - Every vertex in exactly one component, sinks first
/// * `Err` - If the graph is malformed
///
/// # Errors
///
/// Returns [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex)
/// if the graph references a vertex outside its own range.
pub fn tarjan_scc(graph: &CsrGraph) -> Result<Sccs> {
    let n = graph.num_nodes();
    let mut s = TarjanState::new(n);
    let mut call_stack: Vec<Frame<'_>> = Vec::new();

    for root in 0..n {
        if s.indices[root] != UNVISITED {
            continue;
        }

        s.discover(root);
        call_stack.push(Frame::enter(graph, root)?);

        while let Some(frame) = call_stack.last_mut() {
            let v = frame.node;

            if let Some(&w) = frame.neighbors.next() {
                let w = w as usize;
                if s.indices[w] == UNVISITED {
                    // Tree edge: descend, lowlink[v] is updated when w returns
                    s.discover(w);
                    call_stack.push(Frame::enter(graph, w)?);
                } else if s.on_stack[w] {
                    s.lowlinks[v] = min(s.lowlinks[v], s.indices[w]);
                }
            } else {
                call_stack.pop();

                if s.lowlinks[v] == s.indices[v] {
                    s.emit_component(v);
                }

                if let Some(parent) = call_stack.last() {
                    let p = parent.node;
                    s.lowlinks[p] = min(s.lowlinks[p], s.lowlinks[v]);
                }
            }
        }
    }

    Ok(s.components)
}
