//! Tabular text export of decoded records.
//!
//! Encoders write to any `std::io::Write`; choosing file names and creating
//! files is left to `convert`. CSV output is semicolon-delimited with `"` as
//! the quote character and minimal quoting.

mod table;
mod txt;

pub use table::{FORCE_HEADER, PRESSURE_HEADER, write_force_csv, write_pressure_csv};
pub use txt::write_pressure_txt;

use thiserror::Error;

/// Decimal digits used for pressure values unless configured otherwise.
pub const DEFAULT_DIGITS: usize = 2;
/// Decimal digits used for force sample times.
pub const TIME_DIGITS: usize = 3;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub(crate) fn format_fixed(value: f64, digits: usize) -> String {
    format!("{value:.digits$}")
}
