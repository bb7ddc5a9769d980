//! Burst consolidation: rapid same-author posts folded into one composite post.

use std::collections::HashMap;

use chrono::{Duration, FixedOffset};
use murmur_core::Post;

/// Separator between the fragments of a composite post.
pub const FRAGMENT_SEPARATOR: &str = "\n";

/// Fold each author's bursts into single posts.
///
/// Posts are grouped by author and sorted chronologically. A post joins the
/// current bucket when it follows the *previous* post by at most `window_ms`;
/// otherwise it starts a new bucket. A bucket of several posts becomes the
/// first post with each later one appended as `"\nHH:MM - text"`. The time is
/// shown in `display_offset` when given, else in the post's own offset.
pub fn consolidate_bursts(
    posts: Vec<Post>,
    window_ms: u64,
    display_offset: Option<FixedOffset>,
) -> Vec<Post> {
    split_by_author(posts)
        .into_iter()
        .flat_map(|author_posts| bucket_by_time(author_posts, window_ms))
        .filter_map(|bucket| aggregate(bucket, display_offset))
        .collect()
}

/// Group posts by author, authors in order of first appearance.
fn split_by_author(posts: Vec<Post>) -> Vec<Vec<Post>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<Post>> = Vec::new();
    for post in posts {
        let slot = *index.entry(post.author.clone()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(post);
    }
    groups
}

/// Greedy left-to-right partition of one author's posts into buckets of
/// consecutive posts no more than `window_ms` apart.
fn bucket_by_time(mut posts: Vec<Post>, window_ms: u64) -> Vec<Vec<Post>> {
    posts.sort_by_key(|p| p.created_at);
    let window = window_duration(window_ms);

    let mut buckets: Vec<Vec<Post>> = Vec::new();
    let mut current: Vec<Post> = Vec::new();
    for post in posts {
        let within_window = current
            .last()
            .is_some_and(|prev| post.created_at - prev.created_at <= window);
        if !current.is_empty() && !within_window {
            buckets.push(std::mem::take(&mut current));
        }
        current.push(post);
    }
    if !current.is_empty() {
        buckets.push(current);
    }
    buckets
}

/// `window_ms` as a full-precision duration, saturating at `Duration::MAX`.
fn window_duration(window_ms: u64) -> Duration {
    i64::try_from(window_ms)
        .ok()
        .and_then(Duration::try_milliseconds)
        .unwrap_or(Duration::MAX)
}

/// The first post of the bucket, with every later post appended as a
/// timestamped fragment. `None` only for an empty bucket.
fn aggregate(bucket: Vec<Post>, display_offset: Option<FixedOffset>) -> Option<Post> {
    let mut posts = bucket.into_iter();
    let mut composite = posts.next()?;
    for post in posts {
        let at = match display_offset {
            Some(offset) => post.created_at.with_timezone(&offset),
            None => post.created_at,
        };
        composite.text.push_str(FRAGMENT_SEPARATOR);
        composite
            .text
            .push_str(&format!("{} - {}", at.format("%H:%M"), post.text));
    }
    Some(composite)
}
