//! Attribute translation between application parameters and federation
//! wire encodings.
//!
//! This is the main crate of the fomtr codec. It ties the record layouts
//! and the attribute registry together with the semantic layer: coordinate
//! frame conversion, enumeration value translation, runtime identifier
//! resolution, and the per-attribute dispatch that drives them.
//!
//! An external caller performs one [`Translator::encode_attribute`] call
//! per outgoing attribute update and one
//! [`Translator::decode_attribute`] call per incoming one, against
//! caller-owned buffers sized via [`attribute_buffer`].
//!
//! # Design Principles
//!
//! - **Degrade, never abort** - A failed field or record yields a logged,
//!   empty result for that attribute alone; sibling attributes still
//!   translate. Nothing panics or propagates errors across the public
//!   boundary.
//! - **Collaborators are injected** - Coordinate conversion and identifier
//!   resolution happen behind traits owned by the surrounding system.
//! - **Stateless translation** - Every call is independent; concurrent use
//!   is safe when the collaborators tolerate concurrent reads.

mod articulation;
mod convert;
mod error;
mod facade;
mod numeric;
mod runtime;
mod spatial;
mod strings;
mod value;

pub use convert::{CoordinateConverter, IdentityConverter};
pub use error::{TranslateError, TranslateResult};
pub use facade::{
    attribute_buffer, attribute_type_for_name, is_attribute_type_supported, Translator,
};
pub use runtime::{MemoryIdMap, RuntimeIdMap};
pub use value::{ActorId, GroupValue, ParameterValue};

#[cfg(test)]
mod tests {
    use super::*;
    use schema::AttributeType;

    #[test]
    fn public_api_exports() {
        let converter = IdentityConverter;
        let runtime = MemoryIdMap::new();
        let _ = Translator::new(&converter, &runtime);
        let _ = attribute_buffer(AttributeType::Marking);
        let _ = attribute_type_for_name("MARKING_TYPE");
        let _ = is_attribute_type_supported(AttributeType::Marking);
        let _ = ParameterValue::Boolean(true);
        let _: TranslateResult<()> = Ok(());
    }

    #[test]
    fn translator_is_send_and_sync_with_sync_collaborators() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Translator<'_, IdentityConverter, MemoryIdMap>>();
    }
}
