//! scc-bench: strongly connected components, two ways, measured
//!
//! # Overview
//!
//! Computes the strongly connected components of a directed graph with
//! Tarjan's single-pass low-link algorithm and Kosaraju's two-pass
//! transpose algorithm, and measures the wall-clock time and peak memory of
//! each run so the two can be compared across graph sizes.
//!
//! # Quick Start
//!
//! ```
//! use scc_bench::{canonical_sccs, measure, random_graph, Kosaraju, Tarjan};
//!
//! // Seeded random digraph: 1000 nodes, 5000 edges
//! let graph = random_graph(1_000, 5_000, 42)?;
//!
//! let tarjan = measure(&Tarjan, &graph)?;
//! let kosaraju = measure(&Kosaraju, &graph)?;
//!
//! // Same partition, possibly enumerated in a different order
//! assert_eq!(canonical_sccs(&tarjan.sccs), canonical_sccs(&kosaraju.sccs));
//! println!("tarjan {:.3} ms, kosaraju {:.3} ms", tarjan.duration_ms(), kosaraju.duration_ms());
//! # Ok::<(), scc_bench::GraphError>(())
//! ```
//!
//! # Architecture
//!
//! - **Storage**: immutable CSR (Compressed Sparse Row) graph
//! - **Generators**: seeded random digraphs plus path/cycle/complete shapes
//! - **Algorithms**: Tarjan and Kosaraju behind [`SccAlgorithm`], both on
//!   explicit heap stacks (no recursion depth limit)
//! - **Measurement**: per-thread counting allocator + wall clock. The
//!   allocator is exported, not installed: register [`TrackingAllocator`]
//!   with `#[global_allocator]` in the binary to get peak-memory figures
//! - **Compare**: size tiers and CSV rows for the `scc-compare` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod compare;
pub mod error;
pub mod generate;
pub mod measure;
pub mod storage;

// Re-export core types
pub use algorithms::{
    bfs, canonical_sccs, component_labels, condensation, is_cyclic, kosaraju_scc, tarjan_scc,
    Kosaraju, SccAlgorithm, Sccs, Tarjan,
};
pub use compare::{CompareConfig, ComparisonRow, RowSpec, SizeTier, CSV_HEADER};
pub use error::{GraphError, Result};
pub use generate::{complete_graph, cycle_graph, path_graph, random_graph};
pub use measure::{measure, Measurement, PeakProbe, TrackingAllocator};
pub use storage::{CsrGraph, CsrGraphBuilder, NodeId};

// Unit tests measure memory; the library itself leaves the allocator choice
// to the final binary.
#[cfg(test)]
#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;
