//! Per-sensor pipeline orchestration
//!
//! [`SensorInstance`] ties one logical sensor together: its catalog entry,
//! calibration, per-axis channel formats and the bound transform variant.
//! The outer event pipeline calls [`SensorInstance::transform_channel`] for
//! each axis of a sample tick and [`SensorInstance::finalize`] once the event
//! is fully populated; [`SensorInstance::process_sample`] composes both for
//! callers that hold all channel buffers at once.

use crate::error::DecodeError;
use crate::finalizer::{finalize_event, FinalizerConfig};
use crate::selector::{select_variant, PropertyStore, TransformVariant};
use crate::transform::transform_sample;
use crate::types::{Calibration, CatalogEntry, ChannelFormat, SensorEvent};

/// One configured logical sensor
///
/// The bound variant is written only by [`SensorInstance::select_transform`]
/// and read everywhere else; concurrent selection must be serialized by the
/// caller.
#[derive(Debug, Clone)]
pub struct SensorInstance {
    entry: CatalogEntry,
    calibration: Calibration,
    channels: Vec<ChannelFormat>,
    finalizer: FinalizerConfig,
    variant: TransformVariant,
}

impl SensorInstance {
    /// Create an instance bound to the default transform pair
    pub fn new(
        entry: CatalogEntry,
        calibration: Calibration,
        channels: Vec<ChannelFormat>,
    ) -> Self {
        Self {
            entry,
            calibration,
            channels,
            finalizer: FinalizerConfig::default(),
            variant: TransformVariant::default(),
        }
    }

    /// Override the finalizer's hardware-convention constants
    pub fn with_finalizer_config(mut self, config: FinalizerConfig) -> Self {
        self.finalizer = config;
        self
    }

    /// Catalog entry this instance was built from
    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    /// Channel formats, one per axis in scan order
    pub fn channels(&self) -> &[ChannelFormat] {
        &self.channels
    }

    /// Currently bound transform variant
    pub fn variant(&self) -> TransformVariant {
        self.variant
    }

    /// Re-resolve and bind the transform variant from the property store
    ///
    /// Safe to re-run whenever configuration is reloaded.
    pub fn select_transform(&mut self, properties: &dyn PropertyStore) {
        self.variant = select_variant(&self.entry, properties);
    }

    /// Transform one channel's raw sample into a physical reading
    ///
    /// This is the bound transform and is total: a malformed descriptor or
    /// undersized buffer yields the 0.0 sentinel with an error-level
    /// diagnostic.
    pub fn transform_channel(&self, channel: usize, raw: &[u8]) -> f64 {
        match self.variant {
            TransformVariant::Default => {
                let format = match self.channels.get(channel) {
                    Some(format) => format,
                    None => {
                        log::error!(
                            "{}: no channel {} in descriptor table",
                            self.entry.friendly_name,
                            channel
                        );
                        return 0.0;
                    }
                };
                match transform_sample(raw, format, &self.calibration) {
                    Ok(value) => value,
                    Err(e) => {
                        log::error!(
                            "{}: channel {}: {}",
                            self.entry.friendly_name,
                            channel,
                            e
                        );
                        0.0
                    }
                }
            }
            TransformVariant::Hub => 0.0,
        }
    }

    /// Apply the bound finalizer to a fully assembled event, in place
    pub fn finalize(&self, event: &mut SensorEvent) {
        match self.variant {
            TransformVariant::Default => finalize_event(event, &self.finalizer),
            TransformVariant::Hub => {}
        }
    }

    /// Decode one full sample tick: transform every axis, then finalize
    ///
    /// `samples` holds one raw buffer per channel, in scan order.
    pub fn process_sample(
        &self,
        samples: &[&[u8]],
        timestamp_ns: i64,
    ) -> Result<SensorEvent, DecodeError> {
        if samples.len() != self.channels.len() {
            return Err(DecodeError::ChannelCountMismatch {
                expected: self.channels.len(),
                got: samples.len(),
            });
        }

        let mut event = SensorEvent::new(self.entry.sensor_type);
        event.timestamp_ns = timestamp_ns;
        for (axis, raw) in samples.iter().enumerate().take(event.values.len()) {
            event.values[axis] = self.transform_channel(axis, raw);
        }

        self.finalize(&mut event);
        Ok(event)
    }
}
