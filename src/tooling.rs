//! Tooling & Integration Layer
//!
//! Command-line surface for the extractor and human/JSON rendering of its results.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext};
