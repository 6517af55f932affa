//! iiodec - Command-line sample decoder for iio-sense
//!
//! Commands:
//! - decode: Decode one hex-encoded channel sample into a physical reading
//! - variant: Resolve the bound transform variant for a sensor tag

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use iio_sense::decoder::sample_as_i64;
use iio_sense::selector::transform_property_key;
use iio_sense::transform::scaled_value;
use iio_sense::{
    select_variant, Calibration, CatalogEntry, ChannelFormat, Endianness, SensorType, Sign,
    StaticProperties, TransformVariant, CORE_VERSION,
};

/// iiodec - Decode industrial-I/O channel samples from the command line
#[derive(Parser)]
#[command(name = "iiodec")]
#[command(version = CORE_VERSION)]
#[command(about = "Decode IIO channel samples into physical readings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one hex-encoded channel sample
    Decode {
        /// Sample bytes as hex, in scan-buffer order (e.g. "9cff")
        sample: String,

        /// Storage width in bits (16, 32 or 64)
        #[arg(long, default_value = "16")]
        bits: u16,

        /// Low bits discarded after masking
        #[arg(long, default_value = "0")]
        shift: u32,

        /// Sign-extension rule
        #[arg(long, value_enum, default_value = "signed")]
        sign: SignArg,

        /// Byte order of the stored value
        #[arg(long, value_enum, default_value = "little")]
        endian: EndianArg,

        /// Calibration offset, applied before scaling
        #[arg(long, default_value = "0.0")]
        offset: f64,

        /// Calibration scale factor
        #[arg(long, default_value = "1.0")]
        scale: f64,
    },

    /// Resolve the transform variant bound to a sensor tag
    Variant {
        /// Catalog tag used in the property key (e.g. "accel")
        tag: String,

        /// Sensor type of the catalog entry
        #[arg(long, value_enum, default_value = "accelerometer")]
        sensor_type: SensorTypeArg,

        /// JSON file holding the property map
        #[arg(short, long)]
        properties: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SignArg {
    Signed,
    Unsigned,
}

impl From<SignArg> for Sign {
    fn from(arg: SignArg) -> Self {
        match arg {
            SignArg::Signed => Sign::Signed,
            SignArg::Unsigned => Sign::Unsigned,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum EndianArg {
    Big,
    Little,
}

impl From<EndianArg> for Endianness {
    fn from(arg: EndianArg) -> Self {
        match arg {
            EndianArg::Big => Endianness::Big,
            EndianArg::Little => Endianness::Little,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SensorTypeArg {
    Accelerometer,
    Gyroscope,
    Magnetometer,
    Light,
    Proximity,
    Temperature,
}

impl From<SensorTypeArg> for SensorType {
    fn from(arg: SensorTypeArg) -> Self {
        match arg {
            SensorTypeArg::Accelerometer => SensorType::Accelerometer,
            SensorTypeArg::Gyroscope => SensorType::Gyroscope,
            SensorTypeArg::Magnetometer => SensorType::Magnetometer,
            SensorTypeArg::Light => SensorType::Light,
            SensorTypeArg::Proximity => SensorType::Proximity,
            SensorTypeArg::Temperature => SensorType::Temperature,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("iiodec: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), IiodecError> {
    match cli.command {
        Commands::Decode {
            sample,
            bits,
            shift,
            sign,
            endian,
            offset,
            scale,
        } => {
            let raw = parse_hex(&sample)?;
            let format = ChannelFormat {
                storage_bits: bits,
                shift,
                sign: sign.into(),
                endianness: endian.into(),
            };
            let calibration = Calibration { offset, scale };

            let decoded = sample_as_i64(&raw, &format)?;
            print_json(&DecodeReport {
                raw: decoded,
                value: scaled_value(decoded, &calibration),
            })
        }

        Commands::Variant {
            tag,
            sensor_type,
            properties,
        } => {
            let store = match properties {
                Some(path) => StaticProperties::from_json(&fs::read_to_string(path)?)?,
                None => StaticProperties::new(),
            };
            let entry = CatalogEntry::new(sensor_type.into(), &tag, &tag);

            print_json(&VariantReport {
                key: transform_property_key(&entry),
                variant: select_variant(&entry, &store),
            })
        }
    }
}

/// Parse hex bytes, tolerating whitespace and ':' separators
fn parse_hex(sample: &str) -> Result<Vec<u8>, IiodecError> {
    let digits: String = sample
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();

    if digits.len() % 2 != 0 {
        return Err(IiodecError::BadHex(sample.to_string()));
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| IiodecError::BadHex(sample.to_string()))
        })
        .collect()
}

fn print_json<T: Serialize>(report: &T) -> Result<(), IiodecError> {
    let json = if atty::is(atty::Stream::Stdout) {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    println!("{json}");
    Ok(())
}

#[derive(Serialize)]
struct DecodeReport {
    raw: i64,
    value: f64,
}

#[derive(Serialize)]
struct VariantReport {
    key: String,
    variant: TransformVariant,
}

#[derive(Debug, thiserror::Error)]
enum IiodecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] iio_sense::DecodeError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid hex sample: {0}")]
    BadHex(String),
}
