//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure, UI and Domain
//!
//! ## Use Cases
//!
//! - `ChecksUseCase` - Fetch, evaluate, render and resolve (single-shot or watch)
//! - `open_in_browser` - Web mode

pub mod checks;

pub use checks::{
    evaluate, open_in_browser, resolve, ChecksOptions, ChecksUseCase, WatchSession,
    DEFAULT_INTERVAL,
};
