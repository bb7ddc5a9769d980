//! # murmur-core
//!
//! Foundation crate for the murmur post consolidation engine.
//! Defines the post model, traits, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod post;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MurmurConfig;
pub use errors::{MurmurError, MurmurResult};
pub use post::Post;
