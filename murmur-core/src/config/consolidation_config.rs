use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use super::defaults;

/// Duplicate and burst consolidation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidationConfig {
    /// Run UPGMA near-duplicate grouping after exact dedup.
    pub dedupe_near_duplicates: bool,
    /// Maximum normalized edit distance for two posts to be near-duplicates.
    /// `0.0` disables near-duplicate merging.
    pub near_duplicate_tolerance: f64,
    /// Maximum gap between consecutive same-author posts in one burst.
    pub burst_window_ms: u64,
    /// Batches larger than this skip near-duplicate grouping (O(n³)).
    pub max_near_duplicate_batch: usize,
    /// Offset used for `HH:MM` burst fragments. `None` uses each post's own offset.
    pub burst_display_offset_minutes: Option<i32>,
}

impl ConsolidationConfig {
    /// The configured display offset, if set and in range.
    pub fn burst_display_offset(&self) -> Option<FixedOffset> {
        self.burst_display_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes.checked_mul(60)?))
    }
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            dedupe_near_duplicates: defaults::DEFAULT_DEDUPE_NEAR_DUPLICATES,
            near_duplicate_tolerance: defaults::DEFAULT_NEAR_DUPLICATE_TOLERANCE,
            burst_window_ms: defaults::DEFAULT_BURST_WINDOW_MS,
            max_near_duplicate_batch: defaults::DEFAULT_MAX_NEAR_DUPLICATE_BATCH,
            burst_display_offset_minutes: None,
        }
    }
}
