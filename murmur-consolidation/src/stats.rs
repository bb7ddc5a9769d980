//! Per-run counters: how many posts each pipeline stage removed.

use murmur_core::Post;
use serde::Serialize;

/// Removal counts for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsolidationStats {
    /// Posts received.
    pub input: usize,
    /// Repeated ids (same post reached via two routes).
    pub duplicate_ids: usize,
    /// Matched a drop pattern.
    pub dropped: usize,
    pub retweets: usize,
    pub replies: usize,
    /// Nothing left after canonicalization.
    pub noise: usize,
    /// Language outside the allow-list.
    pub wrong_language: usize,
    /// Identical canonical text to an earlier post.
    pub exact_duplicates: usize,
    /// Merged into an earlier post by UPGMA grouping.
    pub near_duplicates: usize,
    /// Posts folded into a burst composite.
    pub burst_merged: usize,
    /// Posts returned.
    pub output: usize,
}

impl ConsolidationStats {
    /// Total posts removed across all stages.
    pub fn removed(&self) -> usize {
        self.input - self.output
    }

    /// Output size over input size; `1.0` for an empty batch.
    pub fn retention_ratio(&self) -> f64 {
        if self.input == 0 {
            1.0
        } else {
            self.output as f64 / self.input as f64
        }
    }
}

/// The consolidated batch plus the counters that produced it.
#[derive(Debug, Clone)]
pub struct ConsolidationOutcome {
    pub posts: Vec<Post>,
    pub stats: ConsolidationStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_retains_everything() {
        let stats = ConsolidationStats::default();
        assert_eq!(stats.removed(), 0);
        assert_eq!(stats.retention_ratio(), 1.0);
    }

    #[test]
    fn retention_ratio_is_output_over_input() {
        let stats = ConsolidationStats {
            input: 6,
            output: 3,
            ..Default::default()
        };
        assert_eq!(stats.removed(), 3);
        assert!((stats.retention_ratio() - 0.5).abs() < f64::EPSILON);
    }
}
