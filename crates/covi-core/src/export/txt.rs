use std::io::Write;

use super::{ExportError, format_fixed};
use crate::records::pressure::PressureFrame;

/// Grid rows as space-terminated fixed-decimal values, one line per row.
///
/// Writes straight to `out`; buffering is up to the caller.
pub fn write_pressure_txt<W: Write>(
    frame: &PressureFrame,
    digits: usize,
    mut out: W,
) -> Result<(), ExportError> {
    for row in &frame.rows {
        for value in row {
            write!(out, "{} ", format_fixed(*value, digits))?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
