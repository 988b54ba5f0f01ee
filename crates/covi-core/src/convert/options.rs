use serde::{Deserialize, Serialize};

use crate::export::DEFAULT_DIGITS;

/// Which measurement kinds a conversion reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Force,
    Pressure,
    ForcePressure,
}

impl Mode {
    /// Numeric selector used on the command line: `0` force, `1` pressure,
    /// anything else combined.
    pub fn from_selector(selector: i64) -> Self {
        match selector {
            0 => Mode::Force,
            1 => Mode::Pressure,
            _ => Mode::ForcePressure,
        }
    }
}

/// Output format for pressure grids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureFormat {
    /// A single `<prefix>_pressure.csv` with one column per file.
    #[default]
    Csv,
    /// One `<prefix>_<n>_pressure.txt` per file.
    Txt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Decimal digits for pressure values.
    pub digits: usize,
    pub pressure_format: PressureFormat,
    /// Explicit ranking of the matched files, in glob listing order.
    pub order: Option<Vec<i64>>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            pressure_format: PressureFormat::default(),
            order: None,
        }
    }
}
