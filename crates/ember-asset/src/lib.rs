//! Ember Asset - Loader registry and asset resolution
//!
//! This crate maps asset-type names to decode functions and resolves a
//! filename against the active profile's ordered search directories:
//! - `Resolver` and the shared resolution algorithm
//! - `LoaderRegistry` - the live table of registered resolvers
//! - `AssetContext` - registry + configuration, the main entry point
//! - built-in loaders for text, bytes, TOML, images, and sounds

mod builtin;
mod context;
mod registry;
mod resolver;

pub use builtin::register_builtin_loaders;
pub use context::AssetContext;
pub use registry::LoaderRegistry;
pub use resolver::{resolve_asset, Asset, DecodeFn, PostprocessFn, Resolver};
