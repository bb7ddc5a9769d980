//! Canonical comparison text: URLs, hashtags, and punctuation stripped.

use regex::Regex;
use std::sync::LazyLock;

// http/https/ftp, optional www., host with a 2-6 letter TLD, optional path/query.
static RE_URL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:https?|ftp)://(?:www\.)?[-a-z0-9@:%._+~#=]{1,256}\.[a-z]{2,6}\b[-a-z0-9@:%_+.~#?&/=]*",
    )
    .ok()
});

static RE_HASHTAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"#[\w-]+").ok());

/// Canonical form of a post's text.
///
/// Removes URLs, then hashtags, then every character that is neither
/// alphanumeric nor whitespace, and collapses whitespace runs to one space.
/// The result is identical for texts that differ only by which links or
/// hashtags they carry.
pub fn canonicalize(text: &str) -> String {
    let mut cleaned = text.to_string();
    for re in [&*RE_URL, &*RE_HASHTAG].into_iter().flatten() {
        cleaned = re.replace_all(&cleaned, " ").into_owned();
    }
    let kept: String = cleaned
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when nothing survives canonicalization (links, tags, and punctuation only).
pub fn is_noise(text: &str) -> bool {
    canonicalize(text).is_empty()
}
