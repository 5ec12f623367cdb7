//! Byte-aligned writer for encoding big-endian wire data.

use crate::error::{ScalarError, ScalarResult};

/// A byte-aligned writer encoding scalars into a caller-provided buffer.
///
/// All multi-byte values are written in network (big-endian) byte order
/// regardless of the host. Call [`finish`](Self::finish) to get the number
/// of bytes written.
#[derive(Debug)]
pub struct WireWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> WireWriter<'a> {
    /// Creates a writer over the provided buffer, starting at offset zero.
    #[must_use]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn bytes_written(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes still available.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn put(&mut self, bytes: &[u8]) -> ScalarResult<()> {
        let end = self.pos + bytes.len();
        if end > self.buf.len() {
            return Err(ScalarError::EndOfBuffer {
                requested: bytes.len(),
                available: self.buf.len() - self.pos,
            });
        }
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    /// Writes a single byte.
    pub fn write_u8(&mut self, value: u8) -> ScalarResult<()> {
        self.put(&[value])
    }

    /// Writes an unsigned 16-bit integer in wire byte order.
    pub fn write_u16(&mut self, value: u16) -> ScalarResult<()> {
        self.put(&value.to_be_bytes())
    }

    /// Writes an unsigned 32-bit integer in wire byte order.
    pub fn write_u32(&mut self, value: u32) -> ScalarResult<()> {
        self.put(&value.to_be_bytes())
    }

    /// Writes an IEEE float32 in wire byte order.
    pub fn write_f32(&mut self, value: f32) -> ScalarResult<()> {
        self.put(&value.to_be_bytes())
    }

    /// Writes an IEEE float64 in wire byte order.
    pub fn write_f64(&mut self, value: f64) -> ScalarResult<()> {
        self.put(&value.to_be_bytes())
    }

    /// Writes raw bytes with no byte-order conversion.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> ScalarResult<()> {
        self.put(bytes)
    }

    /// Writes `count` zero bytes.
    pub fn write_zeros(&mut self, count: usize) -> ScalarResult<()> {
        let end = self.pos + count;
        if end > self.buf.len() {
            return Err(ScalarError::EndOfBuffer {
                requested: count,
                available: self.buf.len() - self.pos,
            });
        }
        self.buf[self.pos..end].fill(0);
        self.pos = end;
        Ok(())
    }

    /// Finishes writing and returns the number of bytes written.
    #[must_use]
    pub fn finish(self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_u8_advances_one() {
        let mut buf = [0u8; 2];
        let mut writer = WireWriter::new(&mut buf);
        writer.write_u8(0xAA).unwrap();
        assert_eq!(writer.bytes_written(), 1);
        assert_eq!(writer.remaining(), 1);
        assert_eq!(writer.finish(), 1);
        assert_eq!(buf, [0xAA, 0]);
    }

    #[test]
    fn write_u16_big_endian() {
        let mut buf = [0u8; 2];
        let mut writer = WireWriter::new(&mut buf);
        writer.write_u16(0x0102).unwrap();
        assert_eq!(writer.finish(), 2);
        assert_eq!(buf, [1, 2]);
    }

    #[test]
    fn write_f64_big_endian() {
        let mut buf = [0u8; 8];
        let mut writer = WireWriter::new(&mut buf);
        writer.write_f64(1.0).unwrap();
        assert_eq!(writer.finish(), 8);
        assert_eq!(buf, 1.0f64.to_be_bytes());
    }

    #[test]
    fn write_past_end_fails() {
        let mut buf = [0u8; 3];
        let mut writer = WireWriter::new(&mut buf);
        let err = writer.write_u32(1).unwrap_err();
        assert_eq!(
            err,
            ScalarError::EndOfBuffer {
                requested: 4,
                available: 3,
            }
        );
    }

    #[test]
    fn failed_write_does_not_advance() {
        let mut buf = [0u8; 3];
        let mut writer = WireWriter::new(&mut buf);
        writer.write_u16(7).unwrap();
        assert!(writer.write_u16(8).is_err());
        assert_eq!(writer.bytes_written(), 2);
    }

    #[test]
    fn write_zeros_fills() {
        let mut buf = [0xFFu8; 4];
        let mut writer = WireWriter::new(&mut buf);
        writer.write_u8(1).unwrap();
        writer.write_zeros(3).unwrap();
        assert_eq!(writer.finish(), 4);
        assert_eq!(buf, [1, 0, 0, 0]);
    }

    #[test]
    fn write_bytes_raw() {
        let mut buf = [0u8; 3];
        let mut writer = WireWriter::new(&mut buf);
        writer.write_bytes(b"abc").unwrap();
        assert_eq!(writer.finish(), 3);
        assert_eq!(&buf, b"abc");
    }
}
