use log::debug;

use super::layout;
use crate::records::error::DecodeError;
use crate::records::reader::FieldReader;

/// Calibrated pressure grid (N/cm²), row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureFrame {
    pub height: i16,
    pub width: i16,
    pub rows: Vec<Vec<f64>>,
}

impl PressureFrame {
    /// Number of values when the grid is flattened row-major.
    pub fn flat_len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Value at row-major index `k`, i.e. `(k / width, k % width)`.
    pub fn flat_value(&self, k: usize) -> Option<f64> {
        let width = usize::try_from(self.width).ok().filter(|w| *w > 0)?;
        self.rows.get(k / width)?.get(k % width).copied()
    }
}

pub fn decode_pressure(record: &[u8]) -> Result<PressureFrame, DecodeError> {
    let reader = FieldReader::new(record);
    let height = reader.read_i16_be(layout::HEIGHT_OFFSET)?;
    let width = reader.read_i16_be(layout::WIDTH_OFFSET)?;

    // Negative dimensions extract nothing but are reported as decoded.
    let rows_n = usize::try_from(height).unwrap_or(0);
    let cols_n = usize::try_from(width).unwrap_or(0);
    let needed = rows_n * cols_n * layout::VALUE_WIDTH;
    reader.require_payload(layout::VALUES_OFFSET, needed)?;

    let mut rows = Vec::with_capacity(rows_n);
    for i in 0..rows_n {
        let mut row = Vec::with_capacity(cols_n);
        for j in 0..cols_n {
            let offset = layout::VALUES_OFFSET + (j + i * cols_n) * layout::VALUE_WIDTH;
            row.push(reader.read_f64_be(offset)? / layout::PRESSURE_SCALE);
        }
        rows.push(row);
    }
    debug!("decoded pressure frame {height} x {width}");

    Ok(PressureFrame {
        height,
        width,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::decode_pressure;
    use crate::records::error::DecodeError;
    use crate::records::pressure::layout;

    fn record(height: i16, width: i16, values: &[f64]) -> Vec<u8> {
        let mut bytes = vec![0u8; layout::VALUES_OFFSET];
        bytes[layout::HEIGHT_OFFSET..layout::HEIGHT_OFFSET + 2]
            .copy_from_slice(&height.to_be_bytes());
        bytes[layout::WIDTH_OFFSET..layout::WIDTH_OFFSET + 2]
            .copy_from_slice(&width.to_be_bytes());
        for value in values {
            bytes.extend_from_slice(&value.to_be_bytes());
        }
        bytes
    }

    #[test]
    fn decode_two_by_two() {
        let bytes = record(2, 2, &[10000.0, 20000.0, 30000.0, 40000.0]);
        let frame = decode_pressure(&bytes).unwrap();
        assert_eq!(frame.height, 2);
        assert_eq!(frame.width, 2);
        assert_eq!(frame.rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn decode_row_major_layout() {
        let values: Vec<f64> = (0..6).map(|v| v as f64).collect();
        let frame = decode_pressure(&record(2, 3, &values)).unwrap();
        assert_eq!(frame.rows.len(), 2);
        assert!(frame.rows.iter().all(|row| row.len() == 3));
        assert_eq!(frame.rows[1][0], 3.0 / layout::PRESSURE_SCALE);
        assert_eq!(frame.flat_len(), 6);
        assert_eq!(frame.flat_value(4), Some(4.0 / layout::PRESSURE_SCALE));
        assert_eq!(frame.flat_value(6), None);
    }

    #[test]
    fn scale_is_exact_division() {
        let raw = 12345.678_9;
        let frame = decode_pressure(&record(1, 1, &[raw])).unwrap();
        assert_eq!(frame.rows[0][0], raw / 10000.0);
    }

    #[test]
    fn header_fields_are_signed() {
        let frame = decode_pressure(&record(-1, 3, &[])).unwrap();
        assert_eq!(frame.height, -1);
        assert_eq!(frame.width, 3);
        assert!(frame.rows.is_empty());
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let frame = decode_pressure(&record(1, 2, &[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(frame.rows, vec![vec![1.0 / 10000.0, 2.0 / 10000.0]]);
    }

    #[test]
    fn short_payload_is_malformed() {
        let bytes = record(2, 2, &[1.0, 2.0, 3.0]);
        let err = decode_pressure(&bytes).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedRecord {
                needed: 32,
                actual: 24
            }
        );
    }

    #[test]
    fn truncated_header_is_out_of_range() {
        let bytes = vec![0u8; layout::WIDTH_OFFSET + 1];
        let err = decode_pressure(&bytes).unwrap_err();
        assert!(matches!(err, DecodeError::OutOfRange { offset: 80, .. }));
    }
}
