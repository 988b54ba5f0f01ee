/// Grid height (rows), big-endian `i16`.
pub const HEIGHT_OFFSET: usize = 76;
/// Grid width (columns), big-endian `i16`.
pub const WIDTH_OFFSET: usize = 80;
/// Start of the row-major `f64` payload; runs to the end of the record.
pub const VALUES_OFFSET: usize = 82;

pub const VALUE_WIDTH: usize = 8;

/// Raw payload units per N/cm².
pub const PRESSURE_SCALE: f64 = 10_000.0;
