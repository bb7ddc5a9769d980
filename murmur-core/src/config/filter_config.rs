use serde::{Deserialize, Serialize};

use super::defaults;

/// Pre-consolidation filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Regular expressions; a post matching any of them on text, display
    /// name, or handle is dropped. Matched case-insensitively.
    pub drops: Vec<String>,
    /// Keep retweets.
    pub allow_retweets: bool,
    /// Keep replies.
    pub allow_replies: bool,
    /// Allowed language codes. Empty means any language.
    pub languages: Vec<String>,
    /// Drop posts that are nothing but links, hashtags, and punctuation.
    pub drop_noise: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            drops: Vec::new(),
            allow_retweets: defaults::DEFAULT_ALLOW_RETWEETS,
            allow_replies: defaults::DEFAULT_ALLOW_REPLIES,
            languages: vec![defaults::DEFAULT_LANGUAGE.to_string()],
            drop_noise: defaults::DEFAULT_DROP_NOISE,
        }
    }
}
