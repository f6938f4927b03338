//! Measurement harness: wall-clock time and peak memory of one SCC run
//!
//! Only the `compute` call is inside the measured window; building the
//! graph and packaging the record are not. Peak memory comes from the
//! per-thread counters of [`TrackingAllocator`], so measurements running
//! on other threads do not disturb each other.
//!
//! The library does not install that allocator. The consuming binary
//! registers it:
//!
//! ```ignore
//! #[global_allocator]
//! static GLOBAL: scc_bench::TrackingAllocator = scc_bench::TrackingAllocator;
//! ```
//!
//! Without it every [`Measurement`] has `memory_tracked == false` and a
//! zero `peak_memory`; timing and results are unaffected.
//!
//! # Example
//!
//! ```
//! use scc_bench::{measure, random_graph, Kosaraju, Tarjan};
//!
//! let graph = random_graph(1_000, 5_000, 42).unwrap();
//!
//! let tarjan = measure(&Tarjan, &graph).unwrap();
//! let kosaraju = measure(&Kosaraju, &graph).unwrap();
//!
//! assert_eq!(tarjan.algorithm, "tarjan");
//! assert_eq!(tarjan.scc_count, kosaraju.scc_count);
//! ```

pub mod alloc;

pub use alloc::{is_tracking, PeakProbe, TrackingAllocator};

use crate::algorithms::{SccAlgorithm, Sccs};
use crate::error::Result;
use crate::storage::CsrGraph;
use std::time::{Duration, Instant};

/// Outcome of one measured algorithm invocation
#[derive(Debug, Clone)]
pub struct Measurement {
    /// [`SccAlgorithm::name`] of the measured algorithm
    pub algorithm: &'static str,

    /// Wall-clock time of the `compute` call
    pub duration: Duration,

    /// Peak net bytes allocated by the calling thread during the call
    ///
    /// An upper bound, not an exact figure (see [`alloc`]). Zero when
    /// `memory_tracked` is false.
    pub peak_memory: usize,

    /// Whether the tracking allocator was active for this measurement
    pub memory_tracked: bool,

    /// Number of components found
    pub scc_count: usize,

    /// The components themselves, in the algorithm's emission order
    pub sccs: Sccs,
}

impl Measurement {
    /// Duration in milliseconds
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }

    /// Peak memory in KiB
    #[allow(clippy::cast_precision_loss)] // Sub-byte precision is irrelevant here
    #[must_use]
    pub fn peak_memory_kib(&self) -> f64 {
        self.peak_memory as f64 / 1024.0
    }
}

/// Run `algorithm` on `graph`, timing it and tracking its peak memory
///
/// Each call starts from fresh traversal state; the graph is only read.
///
/// # Arguments
///
/// * `algorithm` - Any [`SccAlgorithm`], including trait objects
/// * `graph` - The graph to analyse, shared read-only
///
/// # Returns
///
/// A [`Measurement`] holding the components, their count, the wall-clock
/// time and the peak memory (zero unless [`TrackingAllocator`] is the
/// global allocator)
///
/// # Errors
///
/// Propagates the algorithm's error unchanged; no partial record is built.
pub fn measure<A>(algorithm: &A, graph: &CsrGraph) -> Result<Measurement>
where
    A: SccAlgorithm + ?Sized,
{
    let probe = PeakProbe::start();
    let start = Instant::now();

    let sccs = algorithm.compute(graph)?;

    let duration = start.elapsed();
    let peak_memory = probe.peak_bytes();
    drop(probe);

    let memory_tracked = is_tracking();
    let measurement = Measurement {
        algorithm: algorithm.name(),
        duration,
        peak_memory: if memory_tracked { peak_memory } else { 0 },
        memory_tracked,
        scc_count: sccs.len(),
        sccs,
    };

    log::debug!(
        "{}: {} nodes, {} edges -> {} sccs in {:.3} ms, peak {:.2} KiB",
        measurement.algorithm,
        graph.num_nodes(),
        graph.num_edges(),
        measurement.scc_count,
        measurement.duration_ms(),
        measurement.peak_memory_kib()
    );

    Ok(measurement)
}
