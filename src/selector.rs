//! Transform strategy selection
//!
//! Some hardware variants route sensor values through a dedicated hub
//! coprocessor instead of the generic scan-buffer path. Which semantics a
//! sensor instance uses is decided once, at configuration time, from an
//! external property store keyed by the sensor's catalog tag.

use crate::types::CatalogEntry;
use serde::{Deserialize, Serialize};

/// Property namespace under which per-sensor overrides are published
pub const PROP_PREFIX: &str = "ro.iio";

/// Property suffix selecting the transform variant
pub const PROP_TRANSFORM_SUFFIX: &str = "transform";

/// Recognized property value selecting the sensor-hub variant
pub const HUB_VARIANT_TOKEN: &str = "ISH";

/// The decode/finalize semantics bound to one sensor instance
///
/// A closed enumeration rather than a mutable function table: selection maps
/// configuration to a tag, and every call site matches exhaustively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformVariant {
    /// Generic path: decode the scan buffer, calibrate, apply per-type
    /// finalization corrections
    #[default]
    Default,
    /// Sensor-hub path: values arrive through a different upstream channel,
    /// so the transform yields zero and finalization is a no-op
    Hub,
}

/// Narrow capability over the external stringly-typed property store
pub trait PropertyStore {
    /// Look up a property value by its full key
    fn get(&self, key: &str) -> Option<String>;
}

impl PropertyStore for std::collections::HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        std::collections::HashMap::get(self, key).cloned()
    }
}

/// Full property key carrying a sensor's transform override
///
/// Follows the fixed `<prefix>.<tag>.<suffix>` naming convention, e.g.
/// `ro.iio.accel.transform`.
pub fn transform_property_key(entry: &CatalogEntry) -> String {
    format!("{PROP_PREFIX}.{}.{PROP_TRANSFORM_SUFFIX}", entry.tag)
}

/// Resolve the transform variant for one sensor instance
///
/// Only an exact match on the hub token selects hub semantics; an absent,
/// empty or unrecognized value falls back to the default pair. Idempotent
/// and side-effect-free, so configuration can be re-resolved at any time.
pub fn select_variant(entry: &CatalogEntry, properties: &dyn PropertyStore) -> TransformVariant {
    match properties.get(&transform_property_key(entry)) {
        Some(value) if value == HUB_VARIANT_TOKEN => {
            log::info!("using sensor-hub semantics on {}", entry.friendly_name);
            TransformVariant::Hub
        }
        _ => TransformVariant::Default,
    }
}
