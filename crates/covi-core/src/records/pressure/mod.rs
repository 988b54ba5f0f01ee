//! Pressure image records.
//!
//! A pressure record carries a `height` x `width` grid of big-endian doubles
//! after a fixed header. Dimensions are signed 16-bit fields at fixed offsets;
//! values are scaled down by `layout::PRESSURE_SCALE` to N/cm².

pub mod layout;
pub mod parser;

pub use parser::{PressureFrame, decode_pressure};
