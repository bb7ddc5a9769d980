//! # murmur-consolidation
//!
//! Batch pipeline: id dedup → filters → exact dedup → UPGMA near-duplicate
//! grouping → burst aggregation.
//! Pure and synchronous; one call per fetch cycle.

pub mod burst;
pub mod dedup;
pub mod engine;
pub mod filters;
pub mod normalize;
pub mod stats;

pub use engine::ConsolidationEngine;
pub use stats::{ConsolidationOutcome, ConsolidationStats};
