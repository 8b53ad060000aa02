//! Domain Services
//!
//! Stateless, pure functions that make up the check pipeline:
//! normalize → deduplicate → classify → aggregate.

pub mod aggregator;
pub mod classifier;
pub mod deduplicator;
pub mod normalizer;

pub use aggregator::aggregate;
pub use classifier::classify;
pub use deduplicator::deduplicate;
pub use normalizer::{normalize, normalize_check, UNNAMED_CHECK};
