use super::error::DecodeError;

pub struct FrameReader<'a> {
    payload: &'a [u8],
}

impl<'a> FrameReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        if self.payload.len() < needed {
            return Err(DecodeError::InsufficientLength {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(DecodeError::InsufficientLength {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_u32_be(&self, range: std::ops::Range<usize>) -> Result<u32, DecodeError> {
        let bytes = self
            .payload
            .get(range.clone())
            .ok_or(DecodeError::InsufficientLength {
                needed: range.end,
                actual: self.payload.len(),
            })?;
        if bytes.len() != 4 {
            return Err(DecodeError::InsufficientLength {
                needed: 4,
                actual: bytes.len(),
            });
        }
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads one bit flag of the byte at `offset`; bit 0 is the LSB.
    pub fn read_flag(&self, offset: usize, bit: u8) -> Result<bool, DecodeError> {
        let byte = self.read_u8(offset)?;
        Ok(byte & (1 << bit) != 0)
    }
}
