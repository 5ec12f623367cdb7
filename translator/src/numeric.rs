//! Integer extraction and injection across parameter kinds.
//!
//! All integer-carrying attribute types funnel through a `u32`, with the
//! enumeration table bridging string-valued parameters to federation
//! numeric codes.

use tracing::error;

use schema::{AppDataType, ParameterDefinition};

use crate::value::ParameterValue;

/// Extracts an integer from a parameter value.
///
/// String-like values go through the definition's enumeration table and the
/// resulting federation value is parsed as decimal. Unconvertible kinds log
/// an error and yield zero.
pub(crate) fn integer_value(value: &ParameterValue, definition: &ParameterDefinition) -> u32 {
    match value {
        ParameterValue::UnsignedInt(v) => *v,
        ParameterValue::UnsignedLong(v) => *v as u32,
        ParameterValue::UnsignedShort(v) => u32::from(*v),
        ParameterValue::UnsignedChar(v) => u32::from(*v),
        ParameterValue::Int(v) => *v as u32,
        ParameterValue::Long(v) => *v as u32,
        ParameterValue::Short(v) => *v as u32,
        ParameterValue::Boolean(v) => u32::from(*v),
        ParameterValue::Enumeration(s) | ParameterValue::String(s) => definition
            .federation_value_for(s)
            .and_then(|mapped| mapped.parse().ok())
            .unwrap_or(0),
        other => {
            error!(
                parameter = %definition.game_name,
                kind = %other.data_type(),
                "unhandled conversion to an integer value"
            );
            0
        }
    }
}

/// Builds a parameter value of the declared type from an integer.
///
/// Enumeration and string slots receive the application value mapped from
/// the integer's decimal form. Types with no integer form log an error and
/// yield `None`.
pub(crate) fn integer_parameter(
    value: u32,
    definition: &ParameterDefinition,
) -> Option<ParameterValue> {
    match definition.game_type {
        AppDataType::UnsignedInt => Some(ParameterValue::UnsignedInt(value)),
        AppDataType::UnsignedLong => Some(ParameterValue::UnsignedLong(u64::from(value))),
        AppDataType::UnsignedShort => Some(ParameterValue::UnsignedShort(value as u16)),
        AppDataType::UnsignedChar => Some(ParameterValue::UnsignedChar(value as u8)),
        AppDataType::Int => Some(ParameterValue::Int(value as i32)),
        AppDataType::Long => Some(ParameterValue::Long(i64::from(value))),
        AppDataType::Short => Some(ParameterValue::Short(value as i16)),
        AppDataType::Boolean => Some(ParameterValue::Boolean(value != 0)),
        AppDataType::Enumeration | AppDataType::String => {
            let mapped = definition.application_value_for(&value.to_string());
            ParameterValue::from_text(definition.game_type, &mapped)
        }
        other => {
            error!(
                parameter = %definition.game_name,
                kind = %other,
                "unhandled conversion from an integer value"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::AppDataType;

    fn plain_definition(game_type: AppDataType) -> ParameterDefinition {
        ParameterDefinition::new("test", game_type)
    }

    fn enum_definition() -> ParameterDefinition {
        ParameterDefinition::new("test", AppDataType::Enumeration)
            .with_default("hello")
            .with_enumeration("1", "hello")
            .with_enumeration("33", "correct")
    }

    #[test]
    fn extracts_plain_integers() {
        let pd = plain_definition(AppDataType::UnsignedInt);
        assert_eq!(integer_value(&ParameterValue::UnsignedInt(44), &pd), 44);
        assert_eq!(integer_value(&ParameterValue::UnsignedShort(3), &pd), 3);
        assert_eq!(integer_value(&ParameterValue::UnsignedChar(9), &pd), 9);
        assert_eq!(integer_value(&ParameterValue::Boolean(true), &pd), 1);
        assert_eq!(integer_value(&ParameterValue::Int(-1), &pd), u32::MAX);
    }

    #[test]
    fn extracts_through_enumeration_table() {
        let pd = enum_definition();
        assert_eq!(
            integer_value(&ParameterValue::Enumeration("correct".into()), &pd),
            33
        );
    }

    #[test]
    fn extraction_falls_back_to_default_mapping() {
        let pd = enum_definition();
        assert_eq!(
            integer_value(&ParameterValue::Enumeration("unmapped".into()), &pd),
            1
        );
    }

    #[test]
    fn extraction_of_vector_is_zero() {
        let pd = plain_definition(AppDataType::UnsignedInt);
        assert_eq!(integer_value(&ParameterValue::Vec3f([1.0; 3]), &pd), 0);
    }

    #[test]
    fn injects_into_declared_integer_types() {
        assert_eq!(
            integer_parameter(44, &plain_definition(AppDataType::UnsignedInt)),
            Some(ParameterValue::UnsignedInt(44))
        );
        assert_eq!(
            integer_parameter(44, &plain_definition(AppDataType::Short)),
            Some(ParameterValue::Short(44))
        );
        assert_eq!(
            integer_parameter(1, &plain_definition(AppDataType::Boolean)),
            Some(ParameterValue::Boolean(true))
        );
        assert_eq!(
            integer_parameter(0, &plain_definition(AppDataType::Boolean)),
            Some(ParameterValue::Boolean(false))
        );
    }

    #[test]
    fn injects_through_enumeration_table() {
        assert_eq!(
            integer_parameter(33, &enum_definition()),
            Some(ParameterValue::Enumeration("correct".into()))
        );
    }

    #[test]
    fn injection_miss_uses_default() {
        assert_eq!(
            integer_parameter(800, &enum_definition()),
            Some(ParameterValue::Enumeration("hello".into()))
        );
    }

    #[test]
    fn injection_into_group_is_none() {
        assert_eq!(integer_parameter(1, &plain_definition(AppDataType::Group)), None);
    }
}
