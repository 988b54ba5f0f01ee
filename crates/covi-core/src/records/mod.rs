//! `.covi` record decoding.
//!
//! Each record kind follows a layered structure:
//! - `layout`: byte offsets and protocol constants (source of truth)
//! - `reader`: shared bounds-checked big-endian field access
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: the decode error taxonomy shared by both kinds
//!
//! Decoders are pure and contain no I/O; `source` loads records and `convert`
//! drives whole batches.

pub mod error;
pub mod force;
pub mod pressure;
pub(crate) mod reader;

pub use error::DecodeError;
pub use force::{ForceSeries, decode_force};
pub use pressure::{PressureFrame, decode_pressure};
