//! Core library for converting `.covi` measurement recordings.
//!
//! A `.covi` file is an undocumented big-endian binary record written by a
//! pressure/force measurement device. This crate decodes the two record kinds
//! used in practice and exports them as tabular text:
//! - pressure images: a `height` x `width` grid of doubles at fixed offsets,
//!   scaled to N/cm²;
//! - force time series: 5000 doubles following a fixed 10-byte marker,
//!   truncated to integer device counts.
//!
//! Decoding is byte-oriented and side-effect free (`records`). File discovery
//! and loading live in `source`, text encoders in `export`, and `convert`
//! drives whole batches: decode everything first, then write, and remove any
//! partial output on failure.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use covi_core::{ConvertOptions, Mode, convert};
//!
//! let summary = convert(Mode::Pressure, Path::new("recordings"), "out", &ConvertOptions::default())?;
//! println!("wrote {} files", summary.outputs.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Decoding a single record:
//! ```
//! use covi_core::decode_pressure;
//!
//! let mut record = vec![0u8; 82];
//! record[76..78].copy_from_slice(&1i16.to_be_bytes());
//! record[80..82].copy_from_slice(&1i16.to_be_bytes());
//! record.extend_from_slice(&25000.0f64.to_be_bytes());
//!
//! let frame = decode_pressure(&record)?;
//! assert_eq!(frame.rows, vec![vec![2.5]]);
//! # Ok::<(), covi_core::DecodeError>(())
//! ```

pub mod convert;
pub mod export;
pub mod records;
pub mod source;

pub use convert::{
    ConversionSummary, ConvertError, ConvertOptions, InputInfo, Mode, PressureFormat, convert,
    force_pressure_to_files, force_to_csv, pressure_to_files,
};
pub use export::{DEFAULT_DIGITS, ExportError};
pub use records::{DecodeError, ForceSeries, PressureFrame, decode_force, decode_pressure};
pub use source::{RawRecord, SourceError};
