//! ConsolidationEngine: filters, dedup, and burst aggregation in a fixed order.

use murmur_core::errors::MurmurResult;
use murmur_core::traits::IPostConsolidator;
use murmur_core::{MurmurConfig, Post};
use tracing::info;

use crate::burst;
use crate::dedup;
use crate::filters::PostFilter;
use crate::stats::{ConsolidationOutcome, ConsolidationStats};

/// The post consolidation pipeline.
///
/// Stage order is fixed: id dedup → drop patterns → retweets → replies →
/// noise → languages → exact/near dedup → bursts. Dedup must precede burst
/// aggregation, or duplicates would be folded into composites twice.
#[derive(Debug, Clone)]
pub struct ConsolidationEngine {
    config: MurmurConfig,
    filter: PostFilter,
}

impl ConsolidationEngine {
    /// Validate the configuration and compile its drop patterns.
    pub fn new(config: MurmurConfig) -> MurmurResult<Self> {
        MurmurConfig::validate(&config)?;
        let filter = PostFilter::new(&config.filters)?;
        Ok(Self { config, filter })
    }

    pub fn config(&self) -> &MurmurConfig {
        &self.config
    }

    /// Run the full pipeline over one batch.
    ///
    /// Output is sorted chronologically (stable for equal timestamps).
    pub fn run(&self, posts: Vec<Post>) -> MurmurResult<ConsolidationOutcome> {
        let mut stats = ConsolidationStats {
            input: posts.len(),
            ..Default::default()
        };

        let posts = self.filter.apply(posts, &mut stats);

        let consolidation = &self.config.consolidation;
        let (posts, counts) = dedup::consolidate_duplicates(posts, consolidation)?;
        stats.exact_duplicates = counts.exact;
        stats.near_duplicates = counts.near;

        let before = posts.len();
        let mut posts = burst::consolidate_bursts(
            posts,
            consolidation.burst_window_ms,
            consolidation.burst_display_offset(),
        );
        stats.burst_merged = before - posts.len();

        posts.sort_by_key(|p| p.created_at);
        stats.output = posts.len();

        info!(
            input = stats.input,
            filtered = stats.duplicate_ids
                + stats.dropped
                + stats.retweets
                + stats.replies
                + stats.noise
                + stats.wrong_language,
            exact_duplicates = stats.exact_duplicates,
            near_duplicates = stats.near_duplicates,
            burst_merged = stats.burst_merged,
            output = stats.output,
            "consolidation complete"
        );

        Ok(ConsolidationOutcome { posts, stats })
    }
}

impl IPostConsolidator for ConsolidationEngine {
    fn consolidate(&self, posts: Vec<Post>) -> MurmurResult<Vec<Post>> {
        Ok(self.run(posts)?.posts)
    }
}
