//! Core clustering logic for delimited numeric datasets
//!
//! This crate provides the fundamental data structures and algorithms
//! for grouping records that share field values at the same column.

pub mod cluster;
pub mod dedup;
pub mod dsu;
pub mod report;
pub mod validate;

pub use cluster::{ClusterEngine, ClusterStats};
pub use dedup::{DedupStats, Deduplicator};
pub use dsu::DisjointSet;
pub use report::{Group, GroupReport};
pub use validate::{is_valid_line, normalize_field, DELIMITER};
