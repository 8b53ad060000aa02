//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure and UI layers provide concrete implementations.

pub mod browser;
pub mod check_display;
pub mod pull_request_fetcher;

pub use browser::Browser;
pub use check_display::CheckDisplay;
pub use pull_request_fetcher::PullRequestFetcher;
