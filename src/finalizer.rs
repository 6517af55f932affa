//! Per-sensor-type event finalization
//!
//! After every axis of an event has been transformed, type-specific
//! corrections run in place: accelerometers flip one axis to match the
//! consuming event model's coordinate convention, gyroscopes suppress drift
//! near standstill. Every other sensor type passes through unchanged.

use crate::types::{SensorEvent, SensorType};
use serde::{Deserialize, Serialize};

/// Hardware-convention constants used by the default finalizer
///
/// Both values vary across hardware variants and coordinate conventions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalizerConfig {
    /// Accelerometer axis whose decoded polarity is opposite to the
    /// consumer's convention (must be below [`crate::types::AXIS_COUNT`])
    pub inverted_accel_axis: usize,
    /// Gyroscope readings with every axis magnitude strictly below this
    /// threshold (rad/s) are treated as stationary drift and zeroed
    pub gyro_drift_threshold: f64,
}

impl Default for FinalizerConfig {
    fn default() -> Self {
        Self {
            inverted_accel_axis: 0,
            gyro_drift_threshold: 0.05,
        }
    }
}

/// Apply type-specific corrections to a fully assembled event, in place
///
/// Total: sensor types without a correction rule pass through unchanged.
pub fn finalize_event(event: &mut SensorEvent, config: &FinalizerConfig) {
    match event.sensor_type {
        SensorType::Accelerometer => {
            if let Some(value) = event.values.get_mut(config.inverted_accel_axis) {
                *value = -*value;
            }
        }
        SensorType::Gyroscope => {
            let stationary = event
                .values
                .iter()
                .all(|value| value.abs() < config.gyro_drift_threshold);
            if stationary {
                event.values = [0.0; crate::types::AXIS_COUNT];
            }
        }
        _ => {}
    }
}
