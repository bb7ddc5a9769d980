// Single source of truth for all default values.

// --- Filters ---
pub const DEFAULT_ALLOW_RETWEETS: bool = false;
pub const DEFAULT_ALLOW_REPLIES: bool = false;
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_DROP_NOISE: bool = false;

// --- Consolidation ---
pub const DEFAULT_DEDUPE_NEAR_DUPLICATES: bool = true;
pub const DEFAULT_NEAR_DUPLICATE_TOLERANCE: f64 = 0.3;
pub const DEFAULT_BURST_WINDOW_MS: u64 = 300_000; // 5 minutes
pub const DEFAULT_MAX_NEAR_DUPLICATE_BATCH: usize = 500;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
