//! Graph construction and export
//!
//! This module accumulates token frequencies and sentence-bounded
//! co-occurrence counts, and turns them into a node-link graph.

pub mod builder;
pub mod export;
