//! Configuration system for murmur.
//! TOML-based, with environment overrides applied on load.

pub mod consolidation_config;
pub mod defaults;
pub mod filter_config;
pub mod murmur_config;
pub mod observability_config;

pub use consolidation_config::ConsolidationConfig;
pub use filter_config::FilterConfig;
pub use murmur_config::MurmurConfig;
pub use observability_config::ObservabilityConfig;
