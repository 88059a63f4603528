//! Decode options passed through asset resolution
//!
//! Loaders are stored type-erased, so per-call options travel as a small
//! bag of TOML values with typed accessors rather than as generics.

use crate::{EmberError, Result};
use std::collections::HashMap;

/// Options forwarded to a decode function, e.g. `volume` for sounds
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    values: HashMap<String, toml::Value>,
}

impl LoadOptions {
    /// Create an empty option bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: impl Into<toml::Value>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    /// Get a raw option value
    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        self.values.get(key)
    }

    /// Get a boolean option; errors if present but not a boolean
    pub fn bool_opt(&self, key: &str) -> Result<Option<bool>> {
        self.typed(key, "boolean", toml::Value::as_bool)
    }

    /// Get an integer option; errors if present but not an integer
    pub fn int_opt(&self, key: &str) -> Result<Option<i64>> {
        self.typed(key, "integer", toml::Value::as_integer)
    }

    /// Get a float option; errors if present but not a float
    pub fn float_opt(&self, key: &str) -> Result<Option<f64>> {
        self.typed(key, "float", toml::Value::as_float)
    }

    /// Get a string option; errors if present but not a string
    pub fn str_opt(&self, key: &str) -> Result<Option<&str>> {
        self.typed(key, "string", toml::Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn typed<'a, T>(
        &'a self,
        key: &str,
        expected: &'static str,
        as_type: impl Fn(&'a toml::Value) -> Option<T>,
    ) -> Result<Option<T>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(value) => {
                as_type(value)
                    .map(Some)
                    .ok_or_else(|| EmberError::InvalidOption {
                        key: key.to_string(),
                        expected,
                    })
            }
        }
    }
}
