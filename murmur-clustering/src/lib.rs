//! # murmur-clustering
//!
//! Generic hierarchical clustering primitives, independent of posts:
//! Levenshtein edit distance, a validated symmetric distance matrix, and the
//! UPGMA single merge step.

pub mod edit_distance;
pub mod matrix;
pub mod upgma;

pub use edit_distance::{levenshtein, normalized_distance};
pub use matrix::{ClosestPair, DistanceMatrix};
pub use upgma::{merge_step, MergeStep};
