//! Ember Config - Configuration profiles for asset search
//!
//! A profile names a base directory and an ordered list of search
//! directories per asset type. The registry holds every declared profile
//! and resolves which one is active for the process.

mod profile;
mod registry;

pub use profile::ConfigProfile;
pub use registry::{ConfigRegistry, ACTIVE_PROFILE_VAR, DEFAULT_PROFILE};
