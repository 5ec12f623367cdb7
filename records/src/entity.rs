//! Entity classification and identity tuples.

use std::fmt;

use scalar::{WireReader, WireWriter};

use crate::error::RecordResult;

/// A DIS entity classification 7-tuple, packed into 8 bytes.
///
/// Layout: kind (u8), domain (u8), country (u16), category (u8),
/// subcategory (u8), specific (u8), extra (u8).
///
/// The tuple also has a canonical textual form used as an
/// enumeration-table key: the seven fields space-separated in layout
/// order, e.g. `"2 2 225 2 2 0 0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EntityType {
    pub kind: u8,
    pub domain: u8,
    pub country: u16,
    pub category: u8,
    pub subcategory: u8,
    pub specific: u8,
    pub extra: u8,
}

impl EntityType {
    /// Encoded length in bytes.
    pub const ENCODED_LENGTH: usize = 8;

    /// Creates an entity type from its seven fields.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        kind: u8,
        domain: u8,
        country: u16,
        category: u8,
        subcategory: u8,
        specific: u8,
        extra: u8,
    ) -> Self {
        Self {
            kind,
            domain,
            country,
            category,
            subcategory,
            specific,
            extra,
        }
    }

    /// Parses the canonical textual form.
    ///
    /// Parsing is tolerant: missing or malformed fields are left zero, so a
    /// short tuple like `"2 2 225"` yields `2 2 225 0 0 0 0`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut fields = text.split_whitespace();
        let mut next = || fields.next().and_then(|t| t.parse::<u16>().ok()).unwrap_or(0);
        let kind = next();
        let domain = next();
        let country = next();
        let category = next();
        let subcategory = next();
        let specific = next();
        let extra = next();
        Self {
            kind: kind as u8,
            domain: domain as u8,
            country,
            category: category as u8,
            subcategory: subcategory as u8,
            specific: specific as u8,
            extra: extra as u8,
        }
    }

    /// Encodes this tuple into the provided buffer.
    pub fn encode(&self, out: &mut [u8]) -> RecordResult<usize> {
        let mut writer = WireWriter::new(out);
        writer.write_u8(self.kind)?;
        writer.write_u8(self.domain)?;
        writer.write_u16(self.country)?;
        writer.write_u8(self.category)?;
        writer.write_u8(self.subcategory)?;
        writer.write_u8(self.specific)?;
        writer.write_u8(self.extra)?;
        Ok(writer.finish())
    }

    /// Decodes a tuple from the provided buffer.
    pub fn decode(bytes: &[u8]) -> RecordResult<Self> {
        let mut reader = WireReader::new(bytes);
        Ok(Self {
            kind: reader.read_u8()?,
            domain: reader.read_u8()?,
            country: reader.read_u16()?,
            category: reader.read_u8()?,
            subcategory: reader.read_u8()?,
            specific: reader.read_u8()?,
            extra: reader.read_u8()?,
        })
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.kind,
            self.domain,
            self.country,
            self.category,
            self.subcategory,
            self.specific,
            self.extra
        )
    }
}

/// Federation-wide entity identity (site/application/entity, 6 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EntityIdentifier {
    pub site: u16,
    pub application: u16,
    pub entity: u16,
}

impl EntityIdentifier {
    /// Encoded length in bytes.
    pub const ENCODED_LENGTH: usize = 6;

    /// Creates an identifier from its three fields.
    #[must_use]
    pub const fn new(site: u16, application: u16, entity: u16) -> Self {
        Self {
            site,
            application,
            entity,
        }
    }

    /// Encodes this identifier into the provided buffer.
    pub fn encode(&self, out: &mut [u8]) -> RecordResult<usize> {
        let mut writer = WireWriter::new(out);
        writer.write_u16(self.site)?;
        writer.write_u16(self.application)?;
        writer.write_u16(self.entity)?;
        Ok(writer.finish())
    }

    /// Decodes an identifier from the provided buffer.
    pub fn decode(bytes: &[u8]) -> RecordResult<Self> {
        let mut reader = WireReader::new(bytes);
        Ok(Self {
            site: reader.read_u16()?,
            application: reader.read_u16()?,
            entity: reader.read_u16()?,
        })
    }
}

/// Federation-wide identity for a discrete event (5 bytes).
///
/// The event number occupies the first two bytes; the remaining three are
/// zero padding in this FOM revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EventIdentifier {
    pub event: u16,
}

impl EventIdentifier {
    /// Encoded length in bytes.
    pub const ENCODED_LENGTH: usize = 5;

    /// Creates an event identifier.
    #[must_use]
    pub const fn new(event: u16) -> Self {
        Self { event }
    }

    /// Encodes this identifier into the provided buffer.
    pub fn encode(&self, out: &mut [u8]) -> RecordResult<usize> {
        let mut writer = WireWriter::new(out);
        writer.write_u16(self.event)?;
        writer.write_zeros(3)?;
        Ok(writer.finish())
    }

    /// Decodes an identifier from the provided buffer.
    pub fn decode(bytes: &[u8]) -> RecordResult<Self> {
        let mut reader = WireReader::new(bytes);
        let event = reader.read_u16()?;
        Ok(Self { event })
    }
}
