//! Mapping definitions between federation attributes and application
//! parameters.
//!
//! These types are owned by the caller's mapping configuration: loaded once
//! per federation session and read many times by the translator.

use tracing::{debug, error};

use crate::app_type::AppDataType;
use crate::attribute_type::AttributeType;

/// One entry of a bidirectional enumeration mapping table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumerationEntry {
    /// Federation-side value (often a numeric code in decimal form, or an
    /// entity-type 7-tuple string).
    pub federation: String,
    /// Application-side value.
    pub application: String,
}

/// Definition of one application-side parameter within a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterDefinition {
    /// Application-side parameter name.
    pub game_name: String,
    /// Declared application-side type.
    pub game_type: AppDataType,
    /// Default application value used when an enumeration lookup misses.
    pub default_value: String,
    /// Explicit enumeration value mappings, consulted in order.
    pub enumerations: Vec<EnumerationEntry>,
}

impl ParameterDefinition {
    /// Creates a definition with no enumeration mappings and an empty
    /// default.
    #[must_use]
    pub fn new(game_name: impl Into<String>, game_type: AppDataType) -> Self {
        Self {
            game_name: game_name.into(),
            game_type,
            default_value: String::new(),
            enumerations: Vec::new(),
        }
    }

    /// Sets the default application value.
    #[must_use]
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }

    /// Adds an enumeration mapping entry.
    #[must_use]
    pub fn with_enumeration(
        mut self,
        federation: impl Into<String>,
        application: impl Into<String>,
    ) -> Self {
        self.enumerations.push(EnumerationEntry {
            federation: federation.into(),
            application: application.into(),
        });
        self
    }

    /// Removes all enumeration mapping entries.
    pub fn clear_enumerations(&mut self) {
        self.enumerations.clear();
    }

    fn lookup_federation(&self, application_value: &str) -> Option<&str> {
        self.enumerations
            .iter()
            .find(|e| e.application == application_value)
            .map(|e| e.federation.as_str())
    }

    /// Translates an application value to its federation value.
    ///
    /// A miss falls back to the mapping of the declared default value. When
    /// even the default has no federation-side mapping, the lookup fails
    /// with an error log and the caller produces an empty encoding.
    #[must_use]
    pub fn federation_value_for(&self, application_value: &str) -> Option<String> {
        if let Some(found) = self.lookup_federation(application_value) {
            return Some(found.to_owned());
        }

        debug!(
            parameter = %self.game_name,
            value = %application_value,
            default = %self.default_value,
            "no enumeration mapping for value, using the default"
        );

        if let Some(found) = self.lookup_federation(&self.default_value) {
            return Some(found.to_owned());
        }

        error!(
            parameter = %self.game_name,
            default = %self.default_value,
            "no federation value is mapped to the default application value"
        );
        None
    }

    /// Translates a federation value to its application value.
    ///
    /// A miss falls back to the declared default value directly.
    #[must_use]
    pub fn application_value_for(&self, federation_value: &str) -> String {
        if let Some(entry) = self
            .enumerations
            .iter()
            .find(|e| e.federation == federation_value)
        {
            return entry.application.clone();
        }

        debug!(
            parameter = %self.game_name,
            value = %federation_value,
            default = %self.default_value,
            "no enumeration mapping for value, using the default"
        );
        self.default_value.clone()
    }
}

/// Mapping from one federation attribute to an ordered list of application
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeMapping {
    /// Federation-side attribute name.
    pub federation_name: String,
    /// Wire type of the attribute.
    pub attribute_type: AttributeType,
    /// Ordered application parameter definitions. Most attributes use one;
    /// the spatial attribute fans out to seven.
    pub parameters: Vec<ParameterDefinition>,
}

impl AttributeMapping {
    /// Creates a mapping with no parameter definitions.
    #[must_use]
    pub fn new(federation_name: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            federation_name: federation_name.into(),
            attribute_type,
            parameters: Vec::new(),
        }
    }

    /// Adds a parameter definition.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterDefinition) -> Self {
        self.parameters.push(parameter);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enum_definition() -> ParameterDefinition {
        ParameterDefinition::new("test", AppDataType::Enumeration)
            .with_default("hello")
            .with_enumeration("1", "hello")
            .with_enumeration("33", "correct")
            .with_enumeration("123", "Another Value")
    }

    #[test]
    fn federation_lookup_finds_exact_match() {
        let pd = enum_definition();
        assert_eq!(pd.federation_value_for("correct").as_deref(), Some("33"));
    }

    #[test]
    fn federation_lookup_falls_back_to_default() {
        let pd = enum_definition();
        assert_eq!(pd.federation_value_for("unmapped").as_deref(), Some("1"));
    }

    #[test]
    fn federation_lookup_fails_when_default_unmapped() {
        let mut pd = enum_definition();
        pd.clear_enumerations();
        pd = pd.with_enumeration("123", "Another Value");
        assert_eq!(pd.federation_value_for("unmapped"), None);
    }

    #[test]
    fn application_lookup_finds_exact_match() {
        let pd = enum_definition();
        assert_eq!(pd.application_value_for("33"), "correct");
    }

    #[test]
    fn application_lookup_falls_back_to_default_directly() {
        let pd = enum_definition();
        assert_eq!(pd.application_value_for("800"), "hello");
    }

    #[test]
    fn first_entry_wins_on_duplicates() {
        let pd = ParameterDefinition::new("test", AppDataType::Enumeration)
            .with_enumeration("1", "a")
            .with_enumeration("2", "a");
        assert_eq!(pd.federation_value_for("a").as_deref(), Some("1"));
    }

    #[test]
    fn mapping_builder() {
        let mapping = AttributeMapping::new("DamageState", AttributeType::UnsignedInt)
            .with_parameter(enum_definition());
        assert_eq!(mapping.federation_name, "DamageState");
        assert_eq!(mapping.attribute_type, AttributeType::UnsignedInt);
        assert_eq!(mapping.parameters.len(), 1);
    }

    #[test]
    fn clear_enumerations_empties_table() {
        let mut pd = enum_definition();
        pd.clear_enumerations();
        assert!(pd.enumerations.is_empty());
    }
}
