//! Graph storage layer
//!
//! Provides the immutable CSR (Compressed Sparse Row) graph and its builder.

pub mod csr;

pub use csr::{CsrGraph, CsrGraphBuilder, NodeId};
