//! Checks Use Case
//!
//! Reports the CI status of a pull request's head commit:
//! - `ChecksOptions` - validated user options (`--watch`, `--interval`)
//! - `evaluate` - normalize → deduplicate → classify/aggregate
//! - `resolve` - map the aggregate outcome to a command result
//! - `WatchSession` - bounded polling with alternate-screen repaint
//! - `open_in_browser` - web mode, bypasses the pipeline entirely
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = ChecksUseCase::new(fetcher, options)?;
//! use_case.run(&mut display, &running)?;
//! ```

mod options;
mod outcome;
mod pipeline;
mod use_case;
mod watch;
mod web;


pub use options::{ChecksOptions, DEFAULT_INTERVAL};
pub use outcome::resolve;
pub use pipeline::evaluate;
pub use use_case::ChecksUseCase;
pub use watch::{WatchSession, CANCEL_POLL_MS};
pub use web::open_in_browser;
