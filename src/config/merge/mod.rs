//! Source composition for configuration.

pub mod service;
