//! iio-sense - On-device decode and calibration engine for industrial-I/O
//! sensor channels
//!
//! iio-sense turns raw, packed scan-buffer samples into calibrated physical
//! readings through a deterministic pipeline: integer decoding → calibration
//! → per-type event finalization, with the decode/finalize pair selected per
//! sensor instance from an external property store.
//!
//! ## Modules
//!
//! - **decoder**: Generic integer decoding driven by a channel's binary
//!   format descriptor (storage width, shift, sign, byte order)
//! - **transform**: Calibration of decoded integers into physical units
//! - **finalizer**: Per-sensor-type corrections applied to assembled events
//! - **selector**: Configuration-time binding of the transform variant
//! - **pipeline**: Per-sensor orchestration of the above

pub mod decoder;
pub mod error;
pub mod finalizer;
pub mod pipeline;
pub mod properties;
pub mod selector;
pub mod transform;
pub mod types;

pub use error::DecodeError;
pub use finalizer::{finalize_event, FinalizerConfig};
pub use pipeline::SensorInstance;
pub use properties::StaticProperties;
pub use selector::{select_variant, PropertyStore, TransformVariant};
pub use types::{
    Calibration, CatalogEntry, ChannelFormat, Endianness, SensorEvent, SensorType, Sign,
};

/// Crate version reported by tooling
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");
