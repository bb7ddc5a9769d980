//! Error handling for murmur.
//! One error enum per subsystem, `thiserror` only.

pub mod clustering_error;
pub mod config_error;

pub use clustering_error::ClusteringError;
pub use config_error::ConfigError;

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum MurmurError {
    #[error("clustering error: {0}")]
    Clustering(#[from] ClusteringError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type MurmurResult<T> = Result<T, MurmurError>;
