//! Reachability via breadth-first search

use crate::error::Result;
use crate::storage::{CsrGraph, NodeId};
use std::collections::VecDeque;

/// Breadth-First Search from source node
///
/// Returns every node reachable from `source` (including `source`) in BFS
/// visiting order.
///
/// # Errors
///
/// Returns [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex)
/// if `source` is out of bounds.
///
/// # Example
///
/// ```
/// use scc_bench::{bfs, CsrGraph, NodeId};
///
/// let graph = CsrGraph::from_edge_list(4, &[
///     (NodeId(0), NodeId(1)),
///     (NodeId(1), NodeId(2)),
/// ]).unwrap();
///
/// let reachable = bfs(&graph, NodeId(0)).unwrap();
/// assert_eq!(reachable, vec![0, 1, 2]); // 3 is isolated
/// ```
pub fn bfs(graph: &CsrGraph, source: NodeId) -> Result<Vec<u32>> {
    // Validates source before touching `visited`
    graph.outgoing_neighbors(source)?;

    let mut visited = vec![false; graph.num_nodes()];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    queue.push_back(source.0);
    visited[source.index()] = true;

    while let Some(current) = queue.pop_front() {
        order.push(current);

        for &neighbor in graph.outgoing_neighbors(NodeId(current))? {
            if !visited[neighbor as usize] {
                visited[neighbor as usize] = true;
                queue.push_back(neighbor);
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bfs_simple() {
        let edges = vec![(NodeId(0), NodeId(1)), (NodeId(1), NodeId(2))];
        let graph = CsrGraph::from_edge_list(3, &edges).unwrap();

        let reachable = bfs(&graph, NodeId(0)).unwrap();
        assert_eq!(reachable, vec![0, 1, 2]);
    }

    #[test]
    fn test_bfs_disconnected() {
        let edges = vec![
            (NodeId(0), NodeId(1)),
            (NodeId(2), NodeId(3)), // Disconnected component
        ];
        let graph = CsrGraph::from_edge_list(4, &edges).unwrap();

        let reachable = bfs(&graph, NodeId(0)).unwrap();
        assert_eq!(reachable.len(), 2); // Only nodes 0 and 1
        assert!(!reachable.contains(&2)); // Not reachable
    }

    #[test]
    fn test_bfs_direction_matters() {
        let graph = CsrGraph::from_edge_list(2, &[(NodeId(0), NodeId(1))]).unwrap();
        assert_eq!(bfs(&graph, NodeId(1)).unwrap(), vec![1]);
    }

    #[test]
    fn test_bfs_invalid_source() {
        let graph = CsrGraph::from_edge_list(2, &[]).unwrap();
        assert!(bfs(&graph, NodeId(9)).is_err());
    }
}
