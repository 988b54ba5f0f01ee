use super::error::DecodeError;

/// Bounds-checked big-endian field access over an immutable record.
///
/// Offsets are absolute byte offsets from the start of the record. Reads never
/// panic; anything past the end of the buffer is reported as
/// [`DecodeError::OutOfRange`].
pub struct FieldReader<'a> {
    bytes: &'a [u8],
}

impl<'a> FieldReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn read_i16_be(&self, offset: usize) -> Result<i16, DecodeError> {
        let bytes = self.read_array::<2>(offset)?;
        Ok(i16::from_be_bytes(bytes))
    }

    pub fn read_f64_be(&self, offset: usize) -> Result<f64, DecodeError> {
        let bytes = self.read_array::<8>(offset)?;
        Ok(f64::from_be_bytes(bytes))
    }

    pub fn read_slice(&self, offset: usize, width: usize) -> Result<&'a [u8], DecodeError> {
        let out_of_range = DecodeError::OutOfRange {
            offset,
            width,
            len: self.bytes.len(),
        };
        let end = offset.checked_add(width).ok_or(out_of_range.clone())?;
        self.bytes.get(offset..end).ok_or(out_of_range)
    }

    /// Number of bytes from `offset` to the end of the record (0 past the end).
    pub fn remaining_from(&self, offset: usize) -> usize {
        self.bytes.len().saturating_sub(offset)
    }

    /// Fail with `MalformedRecord` unless `needed` bytes are available from `offset`.
    pub fn require_payload(&self, offset: usize, needed: usize) -> Result<(), DecodeError> {
        let actual = self.remaining_from(offset);
        if actual < needed {
            return Err(DecodeError::MalformedRecord { needed, actual });
        }
        Ok(())
    }

    /// Offset of the first occurrence of `pattern`, if any.
    pub fn find(&self, pattern: &[u8]) -> Option<usize> {
        let last = self.bytes.len().checked_sub(pattern.len())?;
        (0..=last).find(|&offset| {
            self.bytes
                .get(offset..)
                .is_some_and(|rest| rest.starts_with(pattern))
        })
    }

    fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N], DecodeError> {
        let slice = self.read_slice(offset, N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }
}
