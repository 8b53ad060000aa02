//! Domain Layer
//!
//! The core of prchecks - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Pull request, normalized check records, reports
//! - `value_objects/` - Classification, outcome, summary, selectors, durations
//! - `services/` - Normalizer, deduplicator, classifier, aggregator
//! - `ports/` - Interface definitions for infrastructure and UI
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the terminal, network or processes
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
