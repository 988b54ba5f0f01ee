//! Force time-series records.
//!
//! The force channel has no length or offset field. Its payload starts right
//! after the first occurrence of `layout::FORCE_MARKER` and holds exactly
//! `layout::FORCE_SAMPLE_COUNT` big-endian doubles, each truncated toward zero.

pub mod layout;
pub mod parser;

pub use parser::{ForceSeries, decode_force};
