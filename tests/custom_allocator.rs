//! Consumer with its own global allocator
//!
//! Linking scc-bench must leave the allocator choice to this crate. With
//! `System` installed the engine still works and reports memory as
//! untracked.

use scc_bench::measure::is_tracking;
use scc_bench::{canonical_sccs, measure, random_graph, Kosaraju, Tarjan};
use std::alloc::System;

#[global_allocator]
static GLOBAL: System = System;

#[test]
fn test_own_allocator_leaves_tracking_off() {
    let graph = random_graph(1_000, 5_000, 42).unwrap();
    let t = measure(&Tarjan, &graph).unwrap();
    let k = measure(&Kosaraju, &graph).unwrap();

    assert!(!is_tracking());
    assert!(!t.memory_tracked);
    assert_eq!(t.peak_memory, 0);
    assert_eq!(k.peak_memory, 0);
    assert_eq!(canonical_sccs(&t.sccs), canonical_sccs(&k.sccs));
}
