//! Tarjan vs Kosaraju comparison over size tiers
//!
//! A [`CompareConfig`] expands into one [`RowSpec`] per graph size. Each
//! row builds a seeded random graph, measures both algorithms on it and
//! yields a [`ComparisonRow`] that formats as one CSV line.
//!
//! The default tiers are small (10, 15, 20 nodes, 4 edges per node),
//! medium (100, 200, 300 nodes) and large (5000, 10000, 20000 nodes), the
//! last two with 5 edges per node.

use crate::algorithms::{canonical_sccs, Kosaraju, Tarjan};
use crate::error::Result;
use crate::generate::random_graph;
use crate::measure::{measure, Measurement};

/// CSV header matching [`ComparisonRow::to_csv`]
pub const CSV_HEADER: &str = "category,nodes,edges,tarjan_time_ms,tarjan_mem_kb,\
kosaraju_time_ms,kosaraju_mem_kb,tarjan_scc,kosaraju_scc";

/// Default base seed
pub const DEFAULT_SEED: u64 = 42;

/// A named group of graph sizes sharing one edge density
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeTier {
    /// Category written to the first CSV column
    pub label: &'static str,
    /// Vertex counts, one row each
    pub nodes: Vec<usize>,
    /// Edges per vertex (`edges = edge_factor * nodes`)
    pub edge_factor: usize,
}

impl SizeTier {
    /// 10, 15, 20 nodes with 4n edges
    #[must_use]
    pub fn small() -> Self {
        Self {
            label: "small",
            nodes: vec![10, 15, 20],
            edge_factor: 4,
        }
    }

    /// 100, 200, 300 nodes with 5n edges
    #[must_use]
    pub fn medium() -> Self {
        Self {
            label: "medium",
            nodes: vec![100, 200, 300],
            edge_factor: 5,
        }
    }

    /// 5000, 10000, 20000 nodes with 5n edges
    #[must_use]
    pub fn large() -> Self {
        Self {
            label: "large",
            nodes: vec![5_000, 10_000, 20_000],
            edge_factor: 5,
        }
    }
}

/// Which tiers to run and how to seed them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    /// Tiers in output order
    pub tiers: Vec<SizeTier>,
    /// Row `i` (counting across all tiers) uses `seed + i`
    pub seed: u64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            tiers: vec![SizeTier::small(), SizeTier::medium(), SizeTier::large()],
            seed: DEFAULT_SEED,
        }
    }
}

impl CompareConfig {
    /// Expand the tiers into one spec per row, in output order
    #[must_use]
    pub fn rows(&self) -> Vec<RowSpec> {
        self.tiers
            .iter()
            .flat_map(|tier| {
                tier.nodes.iter().map(move |&nodes| (tier, nodes))
            })
            .zip(0_u64..)
            .map(|((tier, nodes), i)| RowSpec {
                category: tier.label,
                nodes,
                edges: tier.edge_factor * nodes,
                seed: self.seed.wrapping_add(i),
            })
            .collect()
    }
}

/// Parameters of one comparison row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpec {
    /// Tier label
    pub category: &'static str,
    /// Vertex count
    pub nodes: usize,
    /// Edge count
    pub edges: usize,
    /// Generator seed
    pub seed: u64,
}

impl RowSpec {
    /// Generate the graph and measure both algorithms on it
    ///
    /// Graph generation is outside both measurement windows.
    ///
    /// # Errors
    ///
    /// Propagates generator and algorithm errors.
    pub fn run(&self) -> Result<ComparisonRow> {
        let graph = random_graph(self.nodes, self.edges, self.seed)?;
        let tarjan = measure(&Tarjan, &graph)?;
        let kosaraju = measure(&Kosaraju, &graph)?;

        Ok(ComparisonRow {
            category: self.category,
            nodes: self.nodes,
            edges: self.edges,
            tarjan,
            kosaraju,
        })
    }
}

/// Both measurements for one graph
#[derive(Debug, Clone)]
pub struct ComparisonRow {
    /// Tier label
    pub category: &'static str,
    /// Vertex count
    pub nodes: usize,
    /// Edge count
    pub edges: usize,
    /// Tarjan measurement
    pub tarjan: Measurement,
    /// Kosaraju measurement
    pub kosaraju: Measurement,
}

impl ComparisonRow {
    /// Whether both algorithms produced the same partition
    #[must_use]
    pub fn partitions_agree(&self) -> bool {
        canonical_sccs(&self.tarjan.sccs) == canonical_sccs(&self.kosaraju.sccs)
    }

    /// Format as one CSV line (no trailing newline), columns as in [`CSV_HEADER`]
    #[must_use]
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{:.3},{:.2},{:.3},{:.2},{},{}",
            self.category,
            self.nodes,
            self.edges,
            self.tarjan.duration_ms(),
            self.tarjan.peak_memory_kib(),
            self.kosaraju.duration_ms(),
            self.kosaraju.peak_memory_kib(),
            self.tarjan.scc_count,
            self.kosaraju.scc_count,
        )
    }
}
