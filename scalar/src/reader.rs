//! Byte-aligned reader for decoding big-endian wire data.

use crate::error::{ScalarError, ScalarResult};

/// A byte-aligned reader decoding scalars from a borrowed buffer.
///
/// All multi-byte values are read in network (big-endian) byte order and
/// converted to the host representation on every call.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Creates a reader over the provided buffer, starting at offset zero.
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the number of bytes consumed so far.
    #[must_use]
    pub const fn bytes_read(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes left to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns `true` if no bytes are left to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take<const N: usize>(&mut self) -> ScalarResult<[u8; N]> {
        let end = self.pos + N;
        if end > self.buf.len() {
            return Err(ScalarError::EndOfBuffer {
                requested: N,
                available: self.buf.len() - self.pos,
            });
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[self.pos..end]);
        self.pos = end;
        Ok(out)
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> ScalarResult<u8> {
        Ok(self.take::<1>()?[0])
    }

    /// Reads an unsigned 16-bit integer from wire byte order.
    pub fn read_u16(&mut self) -> ScalarResult<u16> {
        Ok(u16::from_be_bytes(self.take()?))
    }

    /// Reads an unsigned 32-bit integer from wire byte order.
    pub fn read_u32(&mut self) -> ScalarResult<u32> {
        Ok(u32::from_be_bytes(self.take()?))
    }

    /// Reads an IEEE float32 from wire byte order.
    pub fn read_f32(&mut self) -> ScalarResult<f32> {
        Ok(f32::from_be_bytes(self.take()?))
    }

    /// Reads an IEEE float64 from wire byte order.
    pub fn read_f64(&mut self) -> ScalarResult<f64> {
        Ok(f64::from_be_bytes(self.take()?))
    }

    /// Reads `count` raw bytes with no byte-order conversion.
    pub fn read_bytes(&mut self, count: usize) -> ScalarResult<&'a [u8]> {
        let end = self.pos + count;
        if end > self.buf.len() {
            return Err(ScalarError::EndOfBuffer {
                requested: count,
                available: self.buf.len() - self.pos,
            });
        }
        let out = &self.buf[self.pos..end];
        self.pos = end;
        Ok(out)
    }

    /// Skips `count` bytes.
    pub fn skip(&mut self, count: usize) -> ScalarResult<()> {
        self.read_bytes(count).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_u16_big_endian() {
        let mut reader = WireReader::new(&[1, 2]);
        assert_eq!(reader.read_u16().unwrap(), 0x0102);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_f32_big_endian() {
        let bytes = 1.5f32.to_be_bytes();
        let mut reader = WireReader::new(&bytes);
        assert_eq!(reader.read_f32().unwrap(), 1.5);
    }

    #[test]
    fn read_past_end_fails() {
        let mut reader = WireReader::new(&[1, 2, 3]);
        let err = reader.read_u32().unwrap_err();
        assert_eq!(
            err,
            ScalarError::EndOfBuffer {
                requested: 4,
                available: 3,
            }
        );
    }

    #[test]
    fn failed_read_does_not_advance() {
        let mut reader = WireReader::new(&[1, 2, 3]);
        reader.read_u16().unwrap();
        assert!(reader.read_u16().is_err());
        assert_eq!(reader.bytes_read(), 2);
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn read_bytes_borrows() {
        let buf = [b'a', b'b', b'c', b'd'];
        let mut reader = WireReader::new(&buf);
        assert_eq!(reader.read_bytes(3).unwrap(), b"abc");
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn skip_advances() {
        let mut reader = WireReader::new(&[0, 0, 0, 9]);
        reader.skip(3).unwrap();
        assert_eq!(reader.read_u8().unwrap(), 9);
    }
}
