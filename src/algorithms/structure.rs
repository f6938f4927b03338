//! Partition utilities: component labels, canonical form, condensation
//!
//! These turn an SCC list into something checkable:
//! - `component_labels`: vertex → component index, validating the partition
//! - `canonical_sccs`: order-independent form for comparing two results
//! - `condensation`: collapse each component to one node
//!
//! # Example
//!
//! ```
//! use scc_bench::{condensation, is_cyclic, tarjan_scc, CsrGraph, NodeId};
//!
//! // SCC1: 0 ↔ 1, SCC2: 2, bridge 1 → 2
//! let graph = CsrGraph::from_edge_list(3, &[
//!     (NodeId(0), NodeId(1)),
//!     (NodeId(1), NodeId(0)),
//!     (NodeId(1), NodeId(2)),
//! ]).unwrap();
//!
//! let sccs = tarjan_scc(&graph).unwrap();
//! let dag = condensation(&graph, &sccs).unwrap();
//! assert_eq!(dag.num_nodes(), 2);
//! assert_eq!(dag.num_edges(), 1);
//! assert!(!is_cyclic(&dag).unwrap());
//! ```

use super::Sccs;
use crate::error::{GraphError, Result};
use crate::storage::{CsrGraph, CsrGraphBuilder, NodeId};
use std::collections::HashSet;

/// Map every vertex to the index of its component in `sccs`
///
/// # Errors
///
/// Returns [`GraphError::InvalidPartition`] if a vertex is out of range,
/// appears twice, or is missing from every component.
pub fn component_labels(num_nodes: usize, sccs: &[Vec<NodeId>]) -> Result<Vec<usize>> {
    const UNASSIGNED: usize = usize::MAX;
    let mut labels = vec![UNASSIGNED; num_nodes];

    for (label, component) in sccs.iter().enumerate() {
        if component.is_empty() {
            return Err(GraphError::InvalidPartition {
                reason: format!("component {label} is empty"),
            });
        }
        for &node in component {
            match labels.get_mut(node.index()) {
                None => {
                    return Err(GraphError::InvalidPartition {
                        reason: format!("vertex {} out of range", node.0),
                    })
                }
                Some(slot) if *slot != UNASSIGNED => {
                    return Err(GraphError::InvalidPartition {
                        reason: format!("vertex {} appears more than once", node.0),
                    })
                }
                Some(slot) => *slot = label,
            }
        }
    }

    if let Some(missing) = labels.iter().position(|&label| label == UNASSIGNED) {
        return Err(GraphError::InvalidPartition {
            reason: format!("vertex {missing} is in no component"),
        });
    }

    Ok(labels)
}

/// Sort members within each component, then sort the components
///
/// Two algorithms agree on a graph iff their canonical forms are equal.
#[must_use]
pub fn canonical_sccs(sccs: &[Vec<NodeId>]) -> Sccs {
    let mut canonical: Sccs = sccs
        .iter()
        .map(|component| {
            let mut component = component.clone();
            component.sort_unstable();
            component
        })
        .collect();
    canonical.sort_unstable();
    canonical
}

/// Collapse each component of `sccs` into a single node
///
/// Node `i` of the result stands for `sccs[i]`. Only distinct edges
/// between different components are kept, in order of first appearance.
///
/// # Errors
///
/// Returns [`GraphError::InvalidPartition`] if `sccs` is not a partition
/// of the vertices of `graph`.
pub fn condensation(graph: &CsrGraph, sccs: &[Vec<NodeId>]) -> Result<CsrGraph> {
    let labels = component_labels(graph.num_nodes(), sccs)?;

    let mut seen = HashSet::new();
    let mut builder = CsrGraphBuilder::new(sccs.len());

    for (src, dst) in graph.iter_edges() {
        let (from, to) = (labels[src.index()], labels[dst.index()]);
        if from != to && seen.insert((from, to)) {
            #[allow(clippy::cast_possible_truncation)] // at most num_nodes components
            builder.add_edge(NodeId(from as u32), NodeId(to as u32))?;
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId).collect()
    }

    #[test]
    fn test_component_labels() {
        let sccs = vec![ids(&[2]), ids(&[0, 1])];
        assert_eq!(component_labels(3, &sccs).unwrap(), vec![1, 1, 0]);
    }

    #[test]
    fn test_component_labels_empty() {
        assert!(component_labels(0, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_component_labels_rejects_missing() {
        let err = component_labels(3, &[ids(&[0, 1])]).unwrap_err();
        assert!(err.to_string().contains("vertex 2 is in no component"));
    }

    #[test]
    fn test_component_labels_rejects_duplicate() {
        let err = component_labels(2, &[ids(&[0, 1]), ids(&[1])]).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_component_labels_rejects_out_of_range() {
        let err = component_labels(1, &[ids(&[0, 5])]).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_canonical_sccs_order_independent() {
        let a = vec![ids(&[4]), ids(&[3, 2, 1]), ids(&[0])];
        let b = vec![ids(&[0]), ids(&[1, 3, 2]), ids(&[4])];
        assert_eq!(canonical_sccs(&a), canonical_sccs(&b));
        assert_eq!(canonical_sccs(&a), vec![ids(&[0]), ids(&[1, 2, 3]), ids(&[4])]);
    }

    #[test]
    fn test_condensation_merges_parallel_edges() {
        // {0, 1} → {2} through two different edges, plus an internal cycle
        let graph = CsrGraph::from_edge_list(
            3,
            &[
                (NodeId(0), NodeId(1)),
                (NodeId(1), NodeId(0)),
                (NodeId(0), NodeId(2)),
                (NodeId(1), NodeId(2)),
            ],
        )
        .unwrap();
        let sccs = vec![ids(&[2]), ids(&[1, 0])];

        let dag = condensation(&graph, &sccs).unwrap();
        assert_eq!(dag.num_nodes(), 2);
        assert_eq!(dag.outgoing_neighbors(NodeId(1)).unwrap(), &[0]);
        assert_eq!(dag.num_edges(), 1);
    }

    #[test]
    fn test_condensation_drops_self_loops() {
        let graph = CsrGraph::from_edge_list(1, &[(NodeId(0), NodeId(0))]).unwrap();
        let dag = condensation(&graph, &[ids(&[0])]).unwrap();
        assert_eq!(dag.num_nodes(), 1);
        assert_eq!(dag.num_edges(), 0);
    }

    #[test]
    fn test_condensation_rejects_bad_partition() {
        let graph = CsrGraph::from_edge_list(2, &[]).unwrap();
        assert!(matches!(
            condensation(&graph, &[ids(&[0])]),
            Err(GraphError::InvalidPartition { .. })
        ));
    }
}
