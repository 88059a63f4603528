//! Ember Core - Foundational types for the Ember asset system
//!
//! This crate provides the types that all other Ember crates depend on:
//! - `EmberError` and the `Result` alias
//! - `LoadOptions` - type-specific decode options passed through resolution

mod error;
mod options;

pub use error::{EmberError, Result};
pub use options::LoadOptions;
