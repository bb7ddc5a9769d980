//! Pre-consolidation filters: repeated ids, drop patterns, retweets, replies,
//! noise, and languages.

use std::collections::HashSet;
use std::sync::LazyLock;

use murmur_core::config::FilterConfig;
use murmur_core::errors::ConfigError;
use murmur_core::Post;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::normalize;
use crate::stats::ConsolidationStats;

// A handle is everything after `@` up to the next whitespace, so federated
// handles such as `@bob@mastodon.social` count as one.
static RE_RETWEET: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?i:rt) @\S+").ok());

static RE_REPLY: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^@\S+\s").ok());

/// Retweet by metadata, or text starting with `RT @handle`.
pub fn is_retweet(post: &Post) -> bool {
    post.is_retweet || RE_RETWEET.as_ref().is_some_and(|re| re.is_match(&post.text))
}

/// Reply by metadata, or text starting with `@handle `.
pub fn is_reply(post: &Post) -> bool {
    post.is_reply || RE_REPLY.as_ref().is_some_and(|re| re.is_match(&post.text))
}

/// Keep the first post seen for each id.
pub fn dedupe_by_id(posts: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::new();
    posts
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect()
}

/// Filter stage with drop patterns compiled once per configuration.
#[derive(Debug, Clone)]
pub struct PostFilter {
    drops: Vec<Regex>,
    config: FilterConfig,
}

impl PostFilter {
    /// Compile the configured drop patterns (case-insensitive).
    pub fn new(config: &FilterConfig) -> Result<Self, ConfigError> {
        let drops = config
            .drops
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| ConfigError::InvalidPattern {
                        pattern: pattern.clone(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            drops,
            config: config.clone(),
        })
    }

    /// True when any drop pattern matches the text, display name, or handle.
    pub fn is_dropped(&self, post: &Post) -> bool {
        self.drops.iter().any(|re| {
            re.is_match(&post.text) || re.is_match(&post.author_name) || re.is_match(&post.author)
        })
    }

    /// True when the language allow-list admits the post. Empty list admits all.
    pub fn is_allowed_language(&self, post: &Post) -> bool {
        self.config.languages.is_empty()
            || self
                .config
                .languages
                .iter()
                .any(|l| l.eq_ignore_ascii_case(&post.language))
    }

    /// Apply every filter in order, recording removals in `stats`.
    pub fn apply(&self, posts: Vec<Post>, stats: &mut ConsolidationStats) -> Vec<Post> {
        let before = posts.len();
        let mut posts = dedupe_by_id(posts);
        stats.duplicate_ids = before - posts.len();

        stats.dropped = retain_counting(&mut posts, |p| !self.is_dropped(p));
        if !self.config.allow_retweets {
            stats.retweets = retain_counting(&mut posts, |p| !is_retweet(p));
        }
        if !self.config.allow_replies {
            stats.replies = retain_counting(&mut posts, |p| !is_reply(p));
        }
        if self.config.drop_noise {
            stats.noise = retain_counting(&mut posts, |p| !normalize::is_noise(&p.text));
        }
        stats.wrong_language = retain_counting(&mut posts, |p| self.is_allowed_language(p));

        debug!(
            duplicate_ids = stats.duplicate_ids,
            dropped = stats.dropped,
            retweets = stats.retweets,
            replies = stats.replies,
            noise = stats.noise,
            wrong_language = stats.wrong_language,
            remaining = posts.len(),
            "filters applied"
        );
        posts
    }
}

/// `Vec::retain`, returning how many posts were removed.
fn retain_counting<F>(posts: &mut Vec<Post>, keep: F) -> usize
where
    F: Fn(&Post) -> bool,
{
    let before = posts.len();
    posts.retain(|p| keep(p));
    before - posts.len()
}
