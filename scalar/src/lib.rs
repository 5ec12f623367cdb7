//! Fixed-width big-endian wire primitives for the fomtr codec.
//!
//! This crate provides [`WireWriter`] and [`WireReader`] for byte-aligned
//! encoding and decoding of the scalar types used by the federation wire
//! format: unsigned 8/16/32-bit integers, IEEE float32, and IEEE float64.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads/writes are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about attributes,
//!   entities, or coordinate frames.
//! - **Byte order on every call** - The wire is big-endian; conversion from
//!   host order happens inside each accessor, never cached.
//!
//! # Example
//!
//! ```
//! use scalar::{WireReader, WireWriter};
//!
//! let mut buf = [0u8; 6];
//! let mut writer = WireWriter::new(&mut buf);
//! writer.write_u16(0xABCD).unwrap();
//! writer.write_u32(42).unwrap();
//! assert_eq!(writer.finish(), 6);
//!
//! let mut reader = WireReader::new(&buf);
//! assert_eq!(reader.read_u16().unwrap(), 0xABCD);
//! assert_eq!(reader.read_u32().unwrap(), 42);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{ScalarError, ScalarResult};
pub use reader::WireReader;
pub use writer::WireWriter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roundtrip() {
        let mut buf = [0u8; 0];
        let writer = WireWriter::new(&mut buf);
        assert_eq!(writer.finish(), 0);

        let reader = WireReader::new(&buf);
        assert!(reader.is_empty());
    }

    #[test]
    fn mixed_roundtrip() {
        let mut buf = [0u8; 19];
        let mut writer = WireWriter::new(&mut buf);
        writer.write_u8(9).unwrap();
        writer.write_u16(512).unwrap();
        writer.write_u32(70_000).unwrap();
        writer.write_f32(1.5).unwrap();
        writer.write_f64(-2.25).unwrap();
        assert_eq!(writer.finish(), 19);

        let mut reader = WireReader::new(&buf);
        assert_eq!(reader.read_u8().unwrap(), 9);
        assert_eq!(reader.read_u16().unwrap(), 512);
        assert_eq!(reader.read_u32().unwrap(), 70_000);
        assert_eq!(reader.read_f32().unwrap(), 1.5);
        assert_eq!(reader.read_f64().unwrap(), -2.25);
        assert!(reader.is_empty());
    }

    #[test]
    fn wire_is_big_endian() {
        let mut buf = [0u8; 4];
        let mut writer = WireWriter::new(&mut buf);
        writer.write_u32(0x0102_0304).unwrap();
        writer.finish();
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn doctest_example() {
        let mut buf = [0u8; 6];
        let mut writer = WireWriter::new(&mut buf);
        writer.write_u16(0xABCD).unwrap();
        writer.write_u32(42).unwrap();
        assert_eq!(writer.finish(), 6);

        let mut reader = WireReader::new(&buf);
        assert_eq!(reader.read_u16().unwrap(), 0xABCD);
        assert_eq!(reader.read_u32().unwrap(), 42);
    }
}
