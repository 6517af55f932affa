//! Core types for the iio-sense decode pipeline
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: channel format descriptors, calibration records, the sensor
//! catalog, and the assembled sensor event.

use serde::{Deserialize, Serialize};

/// Number of axes an event can carry (x, y, z)
pub const AXIS_COUNT: usize = 3;

/// Whether a stored sample sign-extends when widened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Signed,
    Unsigned,
}

/// Byte order of a stored sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    Big,
    Little,
}

/// Binary layout of one scan channel, as described by the kernel's
/// scan-element metadata
///
/// `storage_bits` is the number of bits the sample physically occupies in
/// the scan buffer; only 16, 32 and 64 are valid. `shift` is the number of
/// low bits discarded after masking (a 12-bit sample stored in 16 bits with
/// the data in the high bits has `shift = 4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelFormat {
    pub storage_bits: u16,
    pub shift: u32,
    pub sign: Sign,
    pub endianness: Endianness,
}

impl ChannelFormat {
    /// Bytes this channel occupies in the scan buffer
    pub fn storage_bytes(&self) -> usize {
        usize::from(self.storage_bits / 8)
    }
}

/// Per-sensor calibration applied uniformly to every channel
///
/// The physical reading for a decoded integer `v` is `(offset + v) * scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Additive bias, in raw units before scaling
    pub offset: f64,
    /// Multiplicative factor converting to physical units
    pub scale: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            offset: 0.0,
            scale: 1.0,
        }
    }
}

/// Sensor types recognized by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    Accelerometer,
    Gyroscope,
    Magnetometer,
    Light,
    Proximity,
    Temperature,
}

impl SensorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorType::Accelerometer => "accelerometer",
            SensorType::Gyroscope => "gyroscope",
            SensorType::Magnetometer => "magnetometer",
            SensorType::Light => "light",
            SensorType::Proximity => "proximity",
            SensorType::Temperature => "temperature",
        }
    }
}

/// Static catalog entry identifying a sensor model
///
/// Shared by every instance of the same physical sensor. `tag` is the short
/// token used to build property-lookup keys (e.g. `accel`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub sensor_type: SensorType,
    pub friendly_name: String,
    pub tag: String,
}

impl CatalogEntry {
    /// Create a catalog entry
    pub fn new(sensor_type: SensorType, friendly_name: &str, tag: &str) -> Self {
        Self {
            sensor_type,
            friendly_name: friendly_name.to_string(),
            tag: tag.to_string(),
        }
    }
}

/// One fully assembled sensor reading, scoped to a single sample tick
///
/// Populated axis by axis by the bound transform, then corrected in place by
/// the bound finalizer. Single-axis sensors use `values[0]` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorEvent {
    pub sensor_type: SensorType,
    pub values: [f64; AXIS_COUNT],
    /// Monotonic timestamp in nanoseconds, stamped by the caller
    pub timestamp_ns: i64,
}

impl SensorEvent {
    /// Create an empty event with all axes zeroed
    pub fn new(sensor_type: SensorType) -> Self {
        Self {
            sensor_type,
            values: [0.0; AXIS_COUNT],
            timestamp_ns: 0,
        }
    }
}
