//! The live table of registered resolvers

use crate::Resolver;
use ember_core::{EmberError, Result};
use std::collections::HashMap;

/// Maps asset-type names to resolvers
///
/// Inserting under an existing name silently replaces the previous resolver;
/// that is how user code overrides a built-in loader. Lookups always reflect
/// the current table, never a snapshot.
#[derive(Debug, Default)]
pub struct LoaderRegistry {
    resolvers: HashMap<String, Resolver>,
}

impl LoaderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a resolver under its asset type, replacing any existing entry
    pub fn insert(&mut self, resolver: Resolver) {
        self.resolvers
            .insert(resolver.asset_type().to_string(), resolver);
    }

    /// Remove and return the resolver for an asset type
    pub fn remove(&mut self, asset_type: &str) -> Result<Resolver> {
        self.resolvers
            .remove(asset_type)
            .ok_or_else(|| EmberError::LoaderNotFound(asset_type.to_string()))
    }

    /// Get the resolver for an asset type
    pub fn get(&self, asset_type: &str) -> Result<&Resolver> {
        self.resolvers
            .get(asset_type)
            .ok_or_else(|| EmberError::LoaderNotFound(asset_type.to_string()))
    }

    /// Whether a resolver is registered for this asset type
    pub fn contains(&self, asset_type: &str) -> bool {
        self.resolvers.contains_key(asset_type)
    }

    /// Names of all registered asset types
    pub fn names(&self) -> Vec<&str> {
        self.resolvers.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}
