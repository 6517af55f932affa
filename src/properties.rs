//! In-memory property store
//!
//! Production embedders implement [`PropertyStore`] over whatever
//! configuration mechanism the platform provides. This module supplies the
//! in-memory implementation used by tests, tooling and static deployments,
//! with JSON load/save for file-backed property maps.

use crate::error::DecodeError;
use crate::selector::PropertyStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A flat key/value property map
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticProperties {
    #[serde(flatten)]
    entries: HashMap<String, String>,
}

impl StaticProperties {
    /// Create an empty property map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property value, replacing any previous one
    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    /// Load a property map from a JSON object of string values
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the property map to JSON
    pub fn to_json(&self) -> Result<String, DecodeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl PropertyStore for StaticProperties {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
