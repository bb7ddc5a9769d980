use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One social-media item flowing through the consolidation pipeline.
///
/// `id` is only unique within a single fetch source: the same post reached
/// through two searches arrives twice with the same id, and reposts of the
/// same text arrive with different ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Opaque identifier, stable across fetches of the same post.
    pub id: String,
    /// Handle / screen name.
    pub author: String,
    /// Display name of the author.
    #[serde(default)]
    pub author_name: String,
    /// Raw display text.
    pub text: String,
    /// Publication time. The offset is the author's local offset.
    pub created_at: DateTime<FixedOffset>,
    /// ISO 639-1 language code.
    pub language: String,
    #[serde(default)]
    pub is_retweet: bool,
    #[serde(default)]
    pub is_reply: bool,
}

impl Post {
    /// Create a post with empty display name and no retweet/reply flags.
    pub fn new(
        id: impl Into<String>,
        author: impl Into<String>,
        text: impl Into<String>,
        created_at: DateTime<FixedOffset>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            author_name: String::new(),
            text: text.into(),
            created_at,
            language: language.into(),
            is_retweet: false,
            is_reply: false,
        }
    }

    /// Set the author's display name.
    pub fn with_author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = name.into();
        self
    }

    /// Mark the post as a retweet in its metadata.
    pub fn as_retweet(mut self) -> Self {
        self.is_retweet = true;
        self
    }

    /// Mark the post as a reply in its metadata.
    pub fn as_reply(mut self) -> Self {
        self.is_reply = true;
        self
    }
}
