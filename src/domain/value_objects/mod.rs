//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod classification;
mod elapsed;
mod outcome;
mod repo;
mod selector;
mod summary;

pub use classification::Classification;
pub use elapsed::Elapsed;
pub use outcome::Outcome;
pub use repo::RepoRef;
pub use selector::PullRequestSelector;
pub use summary::AggregateSummary;
