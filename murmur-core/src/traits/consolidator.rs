use crate::errors::MurmurResult;
use crate::post::Post;

/// Turns one fetched batch of posts into the batch handed to the feed renderer.
///
/// Implementations are pure: no I/O, no state carried between calls.
pub trait IPostConsolidator {
    fn consolidate(&self, posts: Vec<Post>) -> MurmurResult<Vec<Post>>;
}
