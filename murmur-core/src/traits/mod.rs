pub mod consolidator;

pub use consolidator::IPostConsolidator;
