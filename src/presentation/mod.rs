//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use case inputs and adapters from flags and config
//!
//! ## Structure
//!
//! - `cli` - The clap definition
//! - `factory` - Options and adapter construction (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::{checks_options, create_fetcher, repo_override};
