//! Articulated and attached part records.
//!
//! An articulation attribute is a variable-length array of fixed 20-byte
//! records. Each record carries a change code, a parent link (array index
//! of the part this one is attached to), and a discriminated payload that
//! is either a moving articulated part (class/metric/value) or a mounted
//! attached part (station/store type).

use scalar::{WireReader, WireWriter};

use crate::entity::EntityType;
use crate::error::RecordResult;

/// Payload discriminant for an articulated part.
const ARTICULATED_PART: u32 = 0;

/// Moving sub-part state: a metric of a named part class.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArticulatedParts {
    /// Numeric part class from the enumeration table.
    pub class: u32,
    /// Which metric the value describes (1..=16: position, rates, angles).
    pub type_metric: u32,
    /// Metric value.
    pub value: f32,
}

impl ArticulatedParts {
    /// Encoded length in bytes.
    pub const ENCODED_LENGTH: usize = 12;

    /// Creates an articulated-parts payload.
    #[must_use]
    pub const fn new(class: u32, type_metric: u32, value: f32) -> Self {
        Self {
            class,
            type_metric,
            value,
        }
    }

    fn encode_into(&self, writer: &mut WireWriter<'_>) -> RecordResult<()> {
        writer.write_u32(self.class)?;
        writer.write_u32(self.type_metric)?;
        writer.write_f32(self.value)?;
        Ok(())
    }

    fn decode_from(reader: &mut WireReader<'_>) -> RecordResult<Self> {
        Ok(Self {
            class: reader.read_u32()?,
            type_metric: reader.read_u32()?,
            value: reader.read_f32()?,
        })
    }
}

/// Mounted sub-part state: a store attached at a numbered station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttachedParts {
    /// Station number the store is mounted at.
    pub station: u32,
    /// Classification of the attached store.
    pub store_type: EntityType,
}

impl AttachedParts {
    /// Encoded length in bytes.
    pub const ENCODED_LENGTH: usize = 12;

    /// Creates an attached-parts payload.
    #[must_use]
    pub const fn new(station: u32, store_type: EntityType) -> Self {
        Self {
            station,
            store_type,
        }
    }

    fn encode_into(&self, writer: &mut WireWriter<'_>) -> RecordResult<()> {
        writer.write_u32(self.station)?;
        let mut tail = [0u8; EntityType::ENCODED_LENGTH];
        self.store_type.encode(&mut tail)?;
        writer.write_bytes(&tail)?;
        Ok(())
    }

    fn decode_from(reader: &mut WireReader<'_>) -> RecordResult<Self> {
        let station = reader.read_u32()?;
        let store_type = EntityType::decode(reader.read_bytes(EntityType::ENCODED_LENGTH)?)?;
        Ok(Self {
            station,
            store_type,
        })
    }
}

/// The discriminated payload of an articulation record (16 bytes).
///
/// Wire form: discriminant u32 (0 = articulated, anything else decodes as
/// attached, matching the tolerant behavior of the FOM), then 12 payload
/// bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartPayload {
    /// A moving articulated part.
    Articulated(ArticulatedParts),
    /// A mounted attached part.
    Attached(AttachedParts),
}

impl PartPayload {
    /// Encoded length in bytes.
    pub const ENCODED_LENGTH: usize = 16;

    fn encode_into(&self, writer: &mut WireWriter<'_>) -> RecordResult<()> {
        match self {
            Self::Articulated(parts) => {
                writer.write_u32(ARTICULATED_PART)?;
                parts.encode_into(writer)
            }
            Self::Attached(parts) => {
                writer.write_u32(1)?;
                parts.encode_into(writer)
            }
        }
    }

    fn decode_from(reader: &mut WireReader<'_>) -> RecordResult<Self> {
        let discriminant = reader.read_u32()?;
        if discriminant == ARTICULATED_PART {
            Ok(Self::Articulated(ArticulatedParts::decode_from(reader)?))
        } else {
            Ok(Self::Attached(AttachedParts::decode_from(reader)?))
        }
    }

    /// Returns `true` for an articulated-part payload.
    #[must_use]
    pub const fn is_articulated(&self) -> bool {
        matches!(self, Self::Articulated(_))
    }
}

impl Default for PartPayload {
    fn default() -> Self {
        Self::Articulated(ArticulatedParts::default())
    }
}

/// One articulation record (20 bytes).
///
/// Layout: change code u8, one pad byte, part-attached-to u16, payload.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArticulatedRecord {
    /// Change counter incremented when the part state changes.
    pub change: u8,
    /// Array index of the record this part is attached to.
    pub part_attached_to: u16,
    /// The part state itself.
    pub payload: PartPayload,
}

impl ArticulatedRecord {
    /// Encoded length in bytes.
    pub const ENCODED_LENGTH: usize = 20;

    /// Creates a record from its fields.
    #[must_use]
    pub const fn new(change: u8, part_attached_to: u16, payload: PartPayload) -> Self {
        Self {
            change,
            part_attached_to,
            payload,
        }
    }

    /// Encodes this record into the provided buffer.
    pub fn encode(&self, out: &mut [u8]) -> RecordResult<usize> {
        let mut writer = WireWriter::new(out);
        writer.write_u8(self.change)?;
        writer.write_zeros(1)?;
        writer.write_u16(self.part_attached_to)?;
        self.payload.encode_into(&mut writer)?;
        Ok(writer.finish())
    }

    /// Decodes a record from the provided buffer.
    pub fn decode(bytes: &[u8]) -> RecordResult<Self> {
        let mut reader = WireReader::new(bytes);
        let change = reader.read_u8()?;
        reader.skip(1)?;
        let part_attached_to = reader.read_u16()?;
        let payload = PartPayload::decode_from(&mut reader)?;
        Ok(Self {
            change,
            part_attached_to,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn articulated_record_roundtrip() {
        let record = ArticulatedRecord::new(
            11,
            1,
            PartPayload::Articulated(ArticulatedParts::new(99, 11, 987.654)),
        );
        let mut buf = [0u8; ArticulatedRecord::ENCODED_LENGTH];
        assert_eq!(record.encode(&mut buf).unwrap(), 20);
        assert_eq!(ArticulatedRecord::decode(&buf).unwrap(), record);
    }

    #[test]
    fn attached_record_roundtrip() {
        let record = ArticulatedRecord::new(
            123,
            2,
            PartPayload::Attached(AttachedParts::new(
                246,
                EntityType::new(5, 10, 15, 20, 25, 30, 35),
            )),
        );
        let mut buf = [0u8; ArticulatedRecord::ENCODED_LENGTH];
        assert_eq!(record.encode(&mut buf).unwrap(), 20);
        assert_eq!(ArticulatedRecord::decode(&buf).unwrap(), record);
    }

    #[test]
    fn record_layout() {
        let record = ArticulatedRecord::new(
            7,
            0x0102,
            PartPayload::Articulated(ArticulatedParts::new(0x0A0B_0C0D, 11, 1.0)),
        );
        let mut buf = [0u8; 20];
        record.encode(&mut buf).unwrap();

        assert_eq!(buf[0], 7);
        assert_eq!(buf[1], 0, "pad byte must be zero");
        assert_eq!(&buf[2..4], &[1, 2]);
        assert_eq!(&buf[4..8], &[0, 0, 0, 0], "articulated discriminant");
        assert_eq!(&buf[8..12], &[0x0A, 0x0B, 0x0C, 0x0D]);
        assert_eq!(&buf[12..16], &11u32.to_be_bytes());
        assert_eq!(&buf[16..20], &1.0f32.to_be_bytes());
    }

    #[test]
    fn nonzero_discriminant_decodes_as_attached() {
        let record = ArticulatedRecord::new(
            0,
            0,
            PartPayload::Attached(AttachedParts::new(1, EntityType::default())),
        );
        let mut buf = [0u8; 20];
        record.encode(&mut buf).unwrap();
        // Any nonzero discriminant still reads as an attached part.
        buf[7] = 9;
        let decoded = ArticulatedRecord::decode(&buf).unwrap();
        assert!(!decoded.payload.is_articulated());
    }

    #[test]
    fn short_buffer_fails() {
        assert!(ArticulatedRecord::decode(&[0u8; 19]).is_err());
    }
}
