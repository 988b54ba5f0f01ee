use log::debug;

use super::layout;
use crate::records::error::DecodeError;
use crate::records::reader::FieldReader;

/// Force samples in raw device counts, one per `1 / FORCE_SAMPLE_RATE_HZ` s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForceSeries {
    pub samples: Vec<i64>,
}

impl ForceSeries {
    /// Elapsed time in seconds for sample `index`.
    pub fn time_at(index: usize) -> f64 {
        index as f64 / f64::from(layout::FORCE_SAMPLE_RATE_HZ)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

pub fn decode_force(record: &[u8]) -> Result<ForceSeries, DecodeError> {
    let reader = FieldReader::new(record);
    let marker_at = reader
        .find(&layout::FORCE_MARKER)
        .ok_or(DecodeError::MarkerNotFound)?;
    let start = marker_at + layout::FORCE_MARKER.len();
    reader.require_payload(start, layout::PAYLOAD_LEN)?;
    debug!("force marker at byte {marker_at}");

    let samples = (0..layout::FORCE_SAMPLE_COUNT)
        .map(|i| {
            let value = reader.read_f64_be(start + i * layout::SAMPLE_WIDTH)?;
            // `as` truncates toward zero (saturating, NaN -> 0).
            Ok(value as i64)
        })
        .collect::<Result<Vec<_>, DecodeError>>()?;

    Ok(ForceSeries { samples })
}

#[cfg(test)]
mod tests {
    use super::{ForceSeries, decode_force};
    use crate::records::error::DecodeError;
    use crate::records::force::layout;

    fn payload(first: &[f64]) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(layout::PAYLOAD_LEN);
        for i in 0..layout::FORCE_SAMPLE_COUNT {
            let value = first.get(i).copied().unwrap_or(i as f64);
            bytes.extend_from_slice(&value.to_be_bytes());
        }
        bytes
    }

    fn record(prefix: &[u8], payload: &[u8]) -> Vec<u8> {
        let mut bytes = prefix.to_vec();
        bytes.extend_from_slice(&layout::FORCE_MARKER);
        bytes.extend_from_slice(payload);
        bytes
    }

    #[test]
    fn decode_after_marker() {
        let bytes = record(&[0u8; 37], &payload(&[12.0, 7.5]));
        let series = decode_force(&bytes).unwrap();
        assert_eq!(series.len(), layout::FORCE_SAMPLE_COUNT);
        assert_eq!(series.samples[0], 12);
        assert_eq!(series.samples[1], 7);
        assert_eq!(series.samples[4999], 4999);
    }

    #[test]
    fn truncates_toward_zero() {
        let bytes = record(&[], &payload(&[3.9, -3.9, -0.5]));
        let series = decode_force(&bytes).unwrap();
        assert_eq!(&series.samples[..3], &[3, -3, 0]);
    }

    #[test]
    fn partial_marker_in_prefix_is_skipped() {
        let mut prefix = layout::FORCE_MARKER[..9].to_vec();
        prefix.extend_from_slice(&[0x00, 0xfe, 0xf9, 0xdb]);
        let bytes = record(&prefix, &payload(&[42.0]));
        let series = decode_force(&bytes).unwrap();
        assert_eq!(series.samples[0], 42);
    }

    #[test]
    fn first_marker_wins() {
        let second = record(&[], &payload(&[]));
        let mut inner = payload(&[1.0]);
        inner.extend_from_slice(&second);
        let bytes = record(&[], &inner);
        let series = decode_force(&bytes).unwrap();
        assert_eq!(series.samples[0], 1);
    }

    #[test]
    fn missing_marker() {
        let bytes = payload(&[]);
        assert_eq!(decode_force(&bytes).unwrap_err(), DecodeError::MarkerNotFound);
    }

    #[test]
    fn short_payload_is_malformed() {
        let mut body = payload(&[]);
        body.truncate(layout::PAYLOAD_LEN - 1);
        let err = decode_force(&record(&[1, 2, 3], &body)).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedRecord {
                needed: layout::PAYLOAD_LEN,
                actual: layout::PAYLOAD_LEN - 1
            }
        );
    }

    #[test]
    fn sample_time_is_millisecond_steps() {
        assert_eq!(ForceSeries::time_at(0), 0.0);
        assert_eq!(ForceSeries::time_at(1500), 1.5);
    }
}
