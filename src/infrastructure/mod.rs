//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `github/` - Pull request fetchers (`gh` CLI, JSON document input)
//! - `browser` - System browser launcher

pub mod browser;
pub mod github;

// Re-export for convenience
pub use browser::SystemBrowser;
pub use github::{parse_document, GhCliFetcher, JsonInputFetcher, PullRequestDocument};
