//! The attribute translator facade.
//!
//! One entry point per direction: [`Translator::encode_attribute`] turns
//! application parameters into a wire buffer, [`Translator::decode_attribute`]
//! turns a wire buffer back into parameter slots. Dispatch is an exhaustive
//! match on the closed attribute type registry.
//!
//! Failures never cross this boundary: every degraded path produces a log
//! record and an empty result for the affected attribute only, so one bad
//! mapping cannot abort a multi-attribute state update.

use tracing::{debug, error, info, warn};

use records::{EntityIdentifier, EntityType, EventIdentifier};
use scalar::{WireReader, WireWriter};
use schema::{AppDataType, AttributeMapping, AttributeType, ParameterDefinition};

use crate::articulation;
use crate::convert::CoordinateConverter;
use crate::error::{TranslateError, TranslateResult};
use crate::numeric::{integer_parameter, integer_value};
use crate::runtime::RuntimeIdMap;
use crate::spatial;
use crate::strings::{read_char_array, read_marking, write_char_array, write_marking};
use crate::value::ParameterValue;

/// Allocates a zeroed buffer sized to an attribute's encoded length.
///
/// For variable-length types this is the maximum; the encode call reports
/// how much of it was actually used.
#[must_use]
pub fn attribute_buffer(attribute_type: AttributeType) -> Vec<u8> {
    vec![0u8; attribute_type.encoded_length()]
}

/// Looks up an attribute type by registry name.
///
/// Used by configuration loading to validate mapping files; an unknown name
/// means the mapping references a wire type this FOM revision does not
/// define.
#[must_use]
pub fn attribute_type_for_name(name: &str) -> Option<AttributeType> {
    AttributeType::for_name(name)
}

/// Returns `true` when the translator carries a codec for the type.
///
/// Registered types can exist without codec support (new wire types are
/// configured ahead of code); mappings using them translate to nothing at
/// runtime, so configuration loading should reject them here.
#[must_use]
pub const fn is_attribute_type_supported(attribute_type: AttributeType) -> bool {
    !matches!(attribute_type, AttributeType::TimeTag)
}

/// Translates between application parameter values and federation
/// attribute wire encodings.
///
/// The translator itself is stateless; it holds shared references to the
/// two collaborators owned by the surrounding system: the coordinate
/// converter and the runtime identifier map. Calls are independent and may
/// run concurrently as long as the collaborators tolerate concurrent reads.
#[derive(Debug)]
pub struct Translator<'a, C, R> {
    coordinates: &'a C,
    runtime: &'a R,
}

impl<'a, C, R> Translator<'a, C, R>
where
    C: CoordinateConverter,
    R: RuntimeIdMap,
{
    /// Creates a translator over the two collaborators.
    #[must_use]
    pub const fn new(coordinates: &'a C, runtime: &'a R) -> Self {
        Self {
            coordinates,
            runtime,
        }
    }

    /// Encodes one attribute's parameters into `out`.
    ///
    /// Returns the number of bytes written; zero means the attribute
    /// produced no data (every such case is logged).
    pub fn encode_attribute(
        &self,
        mapping: &AttributeMapping,
        parameters: &[Option<ParameterValue>],
        out: &mut [u8],
    ) -> usize {
        match self.try_encode(mapping, parameters, out) {
            Ok(written) => written,
            Err(err) => {
                log_failure(&err, mapping, "encode");
                0
            }
        }
    }

    /// Decodes one attribute's wire bytes into the output parameter slots.
    ///
    /// Slots whose wire field is marked absent are cleared; on failure the
    /// slots are left as supplied and the failure is logged.
    pub fn decode_attribute(
        &self,
        mapping: &AttributeMapping,
        bytes: &[u8],
        parameters: &mut [Option<ParameterValue>],
    ) {
        if let Err(err) = self.try_decode(mapping, bytes, parameters) {
            log_failure(&err, mapping, "decode");
        }
    }

    fn try_encode(
        &self,
        mapping: &AttributeMapping,
        parameters: &[Option<ParameterValue>],
        out: &mut [u8],
    ) -> TranslateResult<usize> {
        if parameters.is_empty() {
            info!(
                attribute = %mapping.federation_name,
                "no parameters were supplied for the outgoing attribute"
            );
            return Ok(0);
        }
        if mapping.parameters.is_empty() {
            info!(
                attribute = %mapping.federation_name,
                "the mapping carries no parameter definitions"
            );
            return Ok(0);
        }

        let attribute_type = mapping.attribute_type;
        if !attribute_type.is_variable_length() && out.len() < attribute_type.encoded_length() {
            return Err(TranslateError::OutputTooSmall {
                needed: attribute_type.encoded_length(),
                available: out.len(),
            });
        }

        if attribute_type == AttributeType::Spatial {
            let cap = out.len().min(attribute_type.encoded_length());
            return spatial::encode_spatial(
                self.coordinates,
                mapping,
                parameters,
                &mut out[..cap],
            );
        }

        // Every remaining type maps from the first parameter slot.
        let definition = &mapping.parameters[0];
        let Some(value) = parameters[0].as_ref() else {
            info!(
                attribute = %mapping.federation_name,
                parameter = %definition.game_name,
                "the first parameter slot is unpopulated"
            );
            return Ok(0);
        };

        if value.data_type() != definition.game_type {
            warn!(
                attribute = %mapping.federation_name,
                parameter = %definition.game_name,
                declared = %definition.game_type,
                actual = %value.data_type(),
                "parameter type differs from the mapping declaration"
            );
        }

        match attribute_type {
            AttributeType::WorldCoordinate => {
                let coordinate = spatial::position_to_remote(self.coordinates, value);
                debug!(
                    x = coordinate.x,
                    y = coordinate.y,
                    z = coordinate.z,
                    "world coordinate converted for the remote frame"
                );
                Ok(coordinate.encode(out)?)
            }
            AttributeType::EulerAngles => {
                let angles = spatial::rotation_to_remote(self.coordinates, value);
                Ok(angles.encode(out)?)
            }
            AttributeType::VelocityVector => {
                Ok(spatial::rate_to_remote(self.coordinates, value).encode(out)?)
            }
            AttributeType::AngularVelocityVector => {
                Ok(spatial::angular_to_remote(value).encode(out)?)
            }
            AttributeType::UnsignedInt => {
                let mut writer = WireWriter::new(out);
                writer.write_u32(integer_value(value, definition))?;
                Ok(writer.finish())
            }
            AttributeType::UnsignedShort => {
                let mut writer = WireWriter::new(out);
                writer.write_u16(integer_value(value, definition) as u16)?;
                Ok(writer.finish())
            }
            AttributeType::UnsignedChar => {
                let mut writer = WireWriter::new(out);
                writer.write_u8(integer_value(value, definition) as u8)?;
                Ok(writer.finish())
            }
            AttributeType::Float => {
                let float_value = match value {
                    ParameterValue::Float(v) => *v,
                    ParameterValue::Double(v) => *v as f32,
                    _ => 0.0,
                };
                let mut writer = WireWriter::new(out);
                writer.write_f32(float_value)?;
                Ok(writer.finish())
            }
            AttributeType::Double => {
                let double_value = match value {
                    ParameterValue::Double(v) => *v,
                    ParameterValue::Float(v) => f64::from(*v),
                    _ => 0.0,
                };
                let mut writer = WireWriter::new(out);
                writer.write_f64(double_value)?;
                Ok(writer.finish())
            }
            AttributeType::EntityType => self.encode_entity_type(definition, value, out),
            AttributeType::EntityIdentifier => self.encode_entity_identifier(value, out),
            AttributeType::EventIdentifier => {
                let event = EventIdentifier::new(integer_value(value, definition) as u16);
                Ok(event.encode(out)?)
            }
            AttributeType::Marking | AttributeType::Marking32 => {
                let ParameterValue::String(text) = value else {
                    return Err(TranslateError::WrongParameterKind {
                        attribute_type,
                        found: value.data_type().name(),
                    });
                };
                Ok(write_marking(out, attribute_type.encoded_length(), text))
            }
            AttributeType::StringType | AttributeType::Octet => {
                self.encode_char_array(attribute_type, definition, value, out)
            }
            AttributeType::RtiObjectIdStruct => self.encode_rti_id(definition, value, out),
            AttributeType::ArticulatedPart => {
                let cap = out.len().min(attribute_type.encoded_length());
                articulation::encode_articulations(definition, value, &mut out[..cap])
            }
            AttributeType::Spatial => unreachable!("handled before single-slot dispatch"),
            AttributeType::TimeTag => Err(TranslateError::UnhandledType { attribute_type }),
        }
    }

    fn encode_entity_type(
        &self,
        definition: &ParameterDefinition,
        value: &ParameterValue,
        out: &mut [u8],
    ) -> TranslateResult<usize> {
        // A string parameter already carries the canonical textual form;
        // only enumerations go through the mapping table.
        let text = match value {
            ParameterValue::Enumeration(app_value) => {
                definition.federation_value_for(app_value).unwrap_or_default()
            }
            ParameterValue::String(text) => text.clone(),
            other => {
                return Err(TranslateError::WrongParameterKind {
                    attribute_type: AttributeType::EntityType,
                    found: other.data_type().name(),
                });
            }
        };
        Ok(EntityType::from_text(&text).encode(out)?)
    }

    fn encode_entity_identifier(
        &self,
        value: &ParameterValue,
        out: &mut [u8],
    ) -> TranslateResult<usize> {
        let ParameterValue::Actor(actor) = value else {
            return Err(TranslateError::WrongParameterKind {
                attribute_type: AttributeType::EntityIdentifier,
                found: value.data_type().name(),
            });
        };
        match self.runtime.entity_id_for_actor(actor) {
            Some(id) => Ok(id.encode(out)?),
            None => {
                // The entity may simply not be registered yet; send the
                // all-zero identity instead of failing.
                let length = EntityIdentifier::ENCODED_LENGTH;
                let mut writer = WireWriter::new(out);
                writer.write_zeros(length)?;
                Ok(writer.finish())
            }
        }
    }

    fn encode_char_array(
        &self,
        attribute_type: AttributeType,
        definition: &ParameterDefinition,
        value: &ParameterValue,
        out: &mut [u8],
    ) -> TranslateResult<usize> {
        let add_null = matches!(
            attribute_type,
            AttributeType::StringType | AttributeType::RtiObjectIdStruct
        );
        let text = match value {
            ParameterValue::Enumeration(app_value) => {
                definition.federation_value_for(app_value).unwrap_or_default()
            }
            ParameterValue::String(text) => text.clone(),
            ParameterValue::Actor(actor) => actor.as_str().to_owned(),
            other => {
                return Err(TranslateError::WrongParameterKind {
                    attribute_type,
                    found: other.data_type().name(),
                });
            }
        };
        let cap = out.len().min(attribute_type.encoded_length());
        Ok(write_char_array(out, cap, &text, add_null))
    }

    fn encode_rti_id(
        &self,
        definition: &ParameterDefinition,
        value: &ParameterValue,
        out: &mut [u8],
    ) -> TranslateResult<usize> {
        match value {
            ParameterValue::Actor(actor) => {
                let federation_id = self.runtime.federation_id_for_actor(actor);
                match federation_id {
                    Some(id) if !id.is_empty() => {
                        let cap = out
                            .len()
                            .min(AttributeType::RtiObjectIdStruct.encoded_length());
                        Ok(write_char_array(out, cap, &id, true))
                    }
                    _ => {
                        // Unmapped ids are an expected steady-state for
                        // not-yet-published entities; produce nothing.
                        debug!(
                            actor = %actor,
                            "no federation object id is mapped to the actor"
                        );
                        Ok(0)
                    }
                }
            }
            // An enumeration makes little sense for an object id, but the
            // string path supports it, so it is not restricted.
            ParameterValue::String(_) | ParameterValue::Enumeration(_) => self.encode_char_array(
                AttributeType::RtiObjectIdStruct,
                definition,
                value,
                out,
            ),
            other => Err(TranslateError::WrongParameterKind {
                attribute_type: AttributeType::RtiObjectIdStruct,
                found: other.data_type().name(),
            }),
        }
    }

    fn try_decode(
        &self,
        mapping: &AttributeMapping,
        bytes: &[u8],
        parameters: &mut [Option<ParameterValue>],
    ) -> TranslateResult<()> {
        if parameters.is_empty() {
            info!(
                attribute = %mapping.federation_name,
                "no parameter slots were supplied for the incoming attribute"
            );
            return Ok(());
        }
        if mapping.parameters.is_empty() {
            info!(
                attribute = %mapping.federation_name,
                "the mapping carries no parameter definitions"
            );
            return Ok(());
        }

        let attribute_type = mapping.attribute_type;
        if !attribute_type.is_variable_length() && bytes.len() < attribute_type.encoded_length() {
            return Err(TranslateError::InputTooShort {
                needed: attribute_type.encoded_length(),
                available: bytes.len(),
            });
        }

        if attribute_type == AttributeType::Spatial {
            return spatial::decode_spatial(self.coordinates, mapping, bytes, parameters);
        }

        let definition = &mapping.parameters[0];
        let game_type = definition.game_type;

        match attribute_type {
            AttributeType::WorldCoordinate => {
                let coordinate = records::WorldCoordinate::decode(bytes)?;
                if let Some(value) =
                    spatial::position_to_local(self.coordinates, coordinate, game_type)
                {
                    parameters[0] = Some(value);
                }
            }
            AttributeType::EulerAngles => {
                let angles = records::EulerAngles::decode(bytes)?;
                if let Some(value) =
                    spatial::rotation_to_local(self.coordinates, angles, game_type)
                {
                    parameters[0] = Some(value);
                }
            }
            AttributeType::VelocityVector => {
                let vector = records::VelocityVector::decode(bytes)?;
                if let Some(value) = spatial::rate_to_local(self.coordinates, vector, game_type) {
                    parameters[0] = Some(value);
                }
            }
            AttributeType::AngularVelocityVector => {
                let vector = records::VelocityVector::decode(bytes)?;
                if let Some(value) = spatial::angular_to_local(vector, game_type) {
                    parameters[0] = Some(value);
                }
            }
            AttributeType::UnsignedInt => {
                let value = WireReader::new(bytes).read_u32()?;
                if let Some(parameter) = integer_parameter(value, definition) {
                    parameters[0] = Some(parameter);
                }
            }
            AttributeType::UnsignedShort => {
                let value = WireReader::new(bytes).read_u16()?;
                if let Some(parameter) = integer_parameter(u32::from(value), definition) {
                    parameters[0] = Some(parameter);
                }
            }
            AttributeType::UnsignedChar => {
                let value = WireReader::new(bytes).read_u8()?;
                if let Some(parameter) = integer_parameter(u32::from(value), definition) {
                    parameters[0] = Some(parameter);
                }
            }
            AttributeType::Float => {
                let value = WireReader::new(bytes).read_f32()?;
                match game_type {
                    AppDataType::Float => parameters[0] = Some(ParameterValue::Float(value)),
                    AppDataType::Double => {
                        parameters[0] = Some(ParameterValue::Double(f64::from(value)));
                    }
                    other => {
                        debug!(kind = %other, "unsupported parameter kind for a float value");
                    }
                }
            }
            AttributeType::Double => {
                let value = WireReader::new(bytes).read_f64()?;
                match game_type {
                    AppDataType::Double => parameters[0] = Some(ParameterValue::Double(value)),
                    AppDataType::Float => {
                        parameters[0] = Some(ParameterValue::Float(value as f32));
                    }
                    other => {
                        debug!(kind = %other, "unsupported parameter kind for a double value");
                    }
                }
            }
            AttributeType::EntityType => {
                let text = EntityType::decode(bytes)?.to_string();
                match game_type {
                    AppDataType::Enumeration => {
                        parameters[0] = Some(ParameterValue::Enumeration(
                            definition.application_value_for(&text),
                        ));
                    }
                    AppDataType::String => {
                        parameters[0] = Some(ParameterValue::String(text));
                    }
                    other => {
                        return Err(TranslateError::WrongParameterKind {
                            attribute_type,
                            found: other.name(),
                        });
                    }
                }
            }
            AttributeType::EntityIdentifier => {
                if game_type != AppDataType::Actor {
                    return Err(TranslateError::WrongParameterKind {
                        attribute_type,
                        found: game_type.name(),
                    });
                }
                let id = EntityIdentifier::decode(bytes)?;
                // An unknown identity is tolerated; the slot is left as
                // supplied so a later update can fill it.
                if let Some(actor) = self.runtime.actor_for_entity_id(&id) {
                    parameters[0] = Some(ParameterValue::Actor(actor));
                }
            }
            AttributeType::EventIdentifier => {
                let event = EventIdentifier::decode(bytes)?;
                if let Some(parameter) = integer_parameter(u32::from(event.event), definition) {
                    parameters[0] = Some(parameter);
                }
            }
            AttributeType::Marking | AttributeType::Marking32 => {
                if game_type != AppDataType::String {
                    return Err(TranslateError::WrongParameterKind {
                        attribute_type,
                        found: game_type.name(),
                    });
                }
                let text = read_marking(bytes, attribute_type.encoded_length());
                parameters[0] = Some(ParameterValue::String(text));
            }
            AttributeType::StringType | AttributeType::Octet => {
                let stop_at_null = attribute_type == AttributeType::StringType;
                self.decode_char_array(attribute_type, definition, bytes, stop_at_null, parameters)?;
            }
            AttributeType::RtiObjectIdStruct => match game_type {
                AppDataType::Actor => {
                    let federation_id = read_char_array(bytes, true);
                    let actor = self
                        .runtime
                        .actor_for_federation_id(&federation_id)
                        .unwrap_or_default();
                    parameters[0] = Some(ParameterValue::Actor(actor));
                }
                AppDataType::String | AppDataType::Enumeration => {
                    self.decode_char_array(attribute_type, definition, bytes, true, parameters)?;
                }
                other => {
                    return Err(TranslateError::WrongParameterKind {
                        attribute_type,
                        found: other.name(),
                    });
                }
            },
            AttributeType::ArticulatedPart => {
                if game_type != AppDataType::Group {
                    return Err(TranslateError::WrongParameterKind {
                        attribute_type,
                        found: game_type.name(),
                    });
                }
                parameters[0] = Some(articulation::decode_articulations(definition, bytes)?);
            }
            AttributeType::Spatial => unreachable!("handled before single-slot dispatch"),
            AttributeType::TimeTag => {
                return Err(TranslateError::UnhandledType { attribute_type });
            }
        }
        Ok(())
    }

    fn decode_char_array(
        &self,
        attribute_type: AttributeType,
        definition: &ParameterDefinition,
        bytes: &[u8],
        stop_at_null: bool,
        parameters: &mut [Option<ParameterValue>],
    ) -> TranslateResult<()> {
        let mut text = read_char_array(bytes, stop_at_null);
        if definition.game_type == AppDataType::Enumeration {
            text = definition.application_value_for(&text);
        }
        match ParameterValue::from_text(definition.game_type, &text) {
            Some(value) => {
                parameters[0] = Some(value);
                Ok(())
            }
            None => Err(TranslateError::WrongParameterKind {
                attribute_type,
                found: definition.game_type.name(),
            }),
        }
    }
}

fn log_failure(err: &TranslateError, mapping: &AttributeMapping, direction: &str) {
    match err {
        TranslateError::MissingParameters { needed, actual } => {
            warn!(
                attribute = %mapping.federation_name,
                needed,
                actual,
                "not enough parameter slots for a {} attribute ({direction})",
                mapping.attribute_type
            );
        }
        TranslateError::UnhandledType { attribute_type } => {
            error!(
                attribute = %mapping.federation_name,
                %attribute_type,
                "unhandled attribute type ({direction})"
            );
        }
        other => {
            error!(
                attribute = %mapping.federation_name,
                attribute_type = %mapping.attribute_type,
                error = %other,
                "attribute produced no data ({direction})"
            );
        }
    }
}
