use serde::{Deserialize, Serialize};

use super::options::Mode;

/// Record of a finished conversion, in input and output order.
///
/// # Examples
/// ```
/// use covi_core::{ConversionSummary, Mode};
///
/// let summary = ConversionSummary::new(Mode::Force);
/// let json = summary.to_json(false).unwrap();
/// assert!(json.contains("\"mode\":\"force\""));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub mode: Mode,
    /// Decoded inputs, relative to the conversion folder.
    pub inputs: Vec<InputInfo>,
    /// Written output paths.
    pub outputs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputInfo {
    pub name: String,
    pub bytes: u64,
}

impl ConversionSummary {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
