use thiserror::Error;

/// Errors returned while decoding a `.covi` record.
///
/// Every variant is fatal for the record being decoded; callers attach the
/// file name when reporting.
///
/// # Examples
/// ```
/// use covi_core::DecodeError;
///
/// let err = DecodeError::MarkerNotFound;
/// assert!(err.to_string().contains("marker not found"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("field out of range: {width} bytes at offset {offset}, record is {len} bytes")]
    OutOfRange {
        offset: usize,
        width: usize,
        len: usize,
    },
    #[error("malformed record: payload needs {needed} bytes, got {actual}")]
    MalformedRecord { needed: usize, actual: usize },
    #[error("force payload marker not found")]
    MarkerNotFound,
}
