//! Fixed binary record layouts for the fomtr codec.
//!
//! This crate defines the wire structs exchanged through federation
//! attribute updates: world coordinates, orientation angles, velocity
//! vectors, entity classification and identity tuples, articulated-part
//! records, and the composite spatial (motion state) record.
//!
//! Each record knows only its own byte layout. Semantic translation
//! (coordinate frames, enumeration tables, identifier resolution) is
//! layered on top by the translator crate.
//!
//! # Design Principles
//!
//! - **Bit-exact layouts** - Offsets and widths match the federation
//!   object model; all multi-byte fields are big-endian.
//! - **Pure value types** - Records are stack-scoped, constructed per
//!   call, and carry no references.
//! - **Explicit errors** - Encoding into a short buffer returns an error,
//!   never panics or truncates silently.

mod articulation;
mod entity;
mod error;
mod spatial;
mod vectors;

pub use articulation::{ArticulatedParts, ArticulatedRecord, AttachedParts, PartPayload};
pub use entity::{EntityIdentifier, EntityType, EventIdentifier};
pub use error::{RecordError, RecordResult};
pub use spatial::Spatial;
pub use vectors::{EulerAngles, VelocityVector, WorldCoordinate};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = WorldCoordinate::new(0.0, 0.0, 0.0);
        let _ = EulerAngles::new(0.0, 0.0, 0.0);
        let _ = VelocityVector::new(0.0, 0.0, 0.0);
        let _ = EntityType::new(0, 0, 0, 0, 0, 0, 0);
        let _ = EntityIdentifier::new(0, 0, 0);
        let _ = EventIdentifier::new(0);
        let _ = Spatial::default();
        let _: RecordResult<()> = Ok(());
    }

    #[test]
    fn encoded_lengths_match_wire_contract() {
        assert_eq!(WorldCoordinate::ENCODED_LENGTH, 24);
        assert_eq!(EulerAngles::ENCODED_LENGTH, 12);
        assert_eq!(VelocityVector::ENCODED_LENGTH, 12);
        assert_eq!(EntityType::ENCODED_LENGTH, 8);
        assert_eq!(EntityIdentifier::ENCODED_LENGTH, 6);
        assert_eq!(EventIdentifier::ENCODED_LENGTH, 5);
        assert_eq!(ArticulatedRecord::ENCODED_LENGTH, 20);
        assert_eq!(Spatial::MAX_ENCODED_LENGTH, 84);
    }
}
