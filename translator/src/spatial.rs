//! Motion-state translation: coordinate conversion plus the spatial record.
//!
//! The spatial attribute fans out across seven parameter slots with fixed
//! indices: dead-reckoning code, frozen flag, position, orientation,
//! velocity, acceleration, angular velocity. Slots 4..=6 are optional;
//! their presence is carried inline in the wire record.

use tracing::debug;

use records::{EulerAngles, Spatial, VelocityVector, WorldCoordinate};
use schema::{AppDataType, AttributeMapping};

use crate::convert::CoordinateConverter;
use crate::error::{TranslateError, TranslateResult};
use crate::numeric::{integer_parameter, integer_value};
use crate::value::ParameterValue;

/// Number of parameter slots a spatial mapping carries.
pub(crate) const SPATIAL_PARAMETER_COUNT: usize = 7;

/// Converts an application position vector to the remote frame.
///
/// Non-vector values translate as the origin, logged at debug level.
pub(crate) fn position_to_remote<C: CoordinateConverter>(
    converter: &C,
    value: &ParameterValue,
) -> WorldCoordinate {
    let local = value.as_vector_f64().unwrap_or_else(|| {
        debug!(kind = %value.data_type(), "unsupported parameter kind for a position");
        [0.0; 3]
    });
    converter.to_remote_translation(local).into()
}

/// Converts a remote world coordinate back to an application vector of the
/// declared type.
pub(crate) fn position_to_local<C: CoordinateConverter>(
    converter: &C,
    coordinate: WorldCoordinate,
    game_type: AppDataType,
) -> Option<ParameterValue> {
    let local = converter.to_local_translation(coordinate.to_array());
    match game_type {
        AppDataType::Vec3d => Some(ParameterValue::Vec3d(local)),
        AppDataType::Vec3f => Some(ParameterValue::Vec3f([
            local[0] as f32,
            local[1] as f32,
            local[2] as f32,
        ])),
        other => {
            debug!(kind = %other, "unsupported parameter kind for a position");
            None
        }
    }
}

/// Converts an application rotation vector to remote psi/theta/phi angles.
///
/// The application stores rotations in a different component order, so the
/// vector is reordered (z, x, y) before frame conversion.
pub(crate) fn rotation_to_remote<C: CoordinateConverter>(
    converter: &C,
    value: &ParameterValue,
) -> EulerAngles {
    let angle = value.as_vector_f32().unwrap_or_else(|| {
        debug!(kind = %value.data_type(), "unsupported parameter kind for a rotation");
        [0.0; 3]
    });
    let reordered = [angle[2], angle[0], angle[1]];
    converter.to_remote_rotation(reordered).into()
}

/// Converts remote psi/theta/phi angles back to an application rotation
/// vector of the declared type.
pub(crate) fn rotation_to_local<C: CoordinateConverter>(
    converter: &C,
    angles: EulerAngles,
    game_type: AppDataType,
) -> Option<ParameterValue> {
    let local = converter.to_local_rotation(angles.to_array());
    let reordered = [local[1], local[2], local[0]];
    match game_type {
        AppDataType::Vec3f => Some(ParameterValue::Vec3f(reordered)),
        AppDataType::Vec3d => Some(ParameterValue::Vec3d([
            f64::from(reordered[0]),
            f64::from(reordered[1]),
            f64::from(reordered[2]),
        ])),
        other => {
            debug!(kind = %other, "unsupported parameter kind for a rotation");
            None
        }
    }
}

/// Converts an application rate vector (velocity/acceleration) to the
/// remote frame. Rotation-only; no translation component.
pub(crate) fn rate_to_remote<C: CoordinateConverter>(
    converter: &C,
    value: &ParameterValue,
) -> VelocityVector {
    let local = value.as_vector_f32().unwrap_or_else(|| {
        debug!(kind = %value.data_type(), "unsupported parameter kind for a rate vector");
        [0.0; 3]
    });
    converter.rotate_to_remote(local).into()
}

/// Converts a remote rate vector back to an application vector of the
/// declared type.
pub(crate) fn rate_to_local<C: CoordinateConverter>(
    converter: &C,
    vector: VelocityVector,
    game_type: AppDataType,
) -> Option<ParameterValue> {
    vector_parameter(converter.rotate_to_local(vector.to_array()), game_type)
}

/// Converts an application angular-velocity vector; angular rates pass
/// through the frame seam unchanged.
pub(crate) fn angular_to_remote(value: &ParameterValue) -> VelocityVector {
    value
        .as_vector_f32()
        .unwrap_or_else(|| {
            debug!(kind = %value.data_type(), "unsupported parameter kind for a rate vector");
            [0.0; 3]
        })
        .into()
}

/// Converts a wire angular-velocity vector back to an application vector.
pub(crate) fn angular_to_local(
    vector: VelocityVector,
    game_type: AppDataType,
) -> Option<ParameterValue> {
    vector_parameter(vector.to_array(), game_type)
}

fn vector_parameter(components: [f32; 3], game_type: AppDataType) -> Option<ParameterValue> {
    match game_type {
        AppDataType::Vec3f => Some(ParameterValue::Vec3f(components)),
        AppDataType::Vec3d => Some(ParameterValue::Vec3d([
            f64::from(components[0]),
            f64::from(components[1]),
            f64::from(components[2]),
        ])),
        other => {
            debug!(kind = %other, "unsupported parameter kind for a rate vector");
            None
        }
    }
}

/// Encodes the seven spatial parameter slots into a wire record.
///
/// A missing optional slot is skipped, not fatal; the record's inline
/// presence accounting reflects what was populated.
pub(crate) fn encode_spatial<C: CoordinateConverter>(
    converter: &C,
    mapping: &AttributeMapping,
    parameters: &[Option<ParameterValue>],
    out: &mut [u8],
) -> TranslateResult<usize> {
    if parameters.len() < SPATIAL_PARAMETER_COUNT
        || mapping.parameters.len() < SPATIAL_PARAMETER_COUNT
    {
        return Err(TranslateError::MissingParameters {
            needed: SPATIAL_PARAMETER_COUNT,
            actual: parameters.len().min(mapping.parameters.len()),
        });
    }

    let mut spatial = Spatial::default();

    if let Some(value) = &parameters[0] {
        let code = integer_value(value, &mapping.parameters[0]);
        spatial.dead_reckoning = code.min(9) as u8;
    }

    if let Some(value) = &parameters[1] {
        let definition = &mapping.parameters[1];
        spatial.frozen = match value {
            ParameterValue::Boolean(frozen)
                if definition.game_type == AppDataType::Boolean =>
            {
                *frozen
            }
            other => integer_value(other, definition) != 0,
        };
    }

    if let Some(value) = &parameters[2] {
        spatial.world_coordinate = position_to_remote(converter, value);
    }

    if let Some(value) = &parameters[3] {
        spatial.orientation = rotation_to_remote(converter, value);
    }

    if let Some(value) = &parameters[4] {
        spatial.velocity = Some(rate_to_remote(converter, value));
    }

    if let Some(value) = &parameters[5] {
        spatial.acceleration = Some(rate_to_remote(converter, value));
    }

    if let Some(value) = &parameters[6] {
        spatial.angular_velocity = Some(angular_to_remote(value));
    }

    Ok(spatial.encode(out)?)
}

/// Decodes a wire spatial record into the seven parameter slots.
///
/// Slots whose wire field is absent are cleared.
pub(crate) fn decode_spatial<C: CoordinateConverter>(
    converter: &C,
    mapping: &AttributeMapping,
    bytes: &[u8],
    parameters: &mut [Option<ParameterValue>],
) -> TranslateResult<()> {
    if parameters.len() < SPATIAL_PARAMETER_COUNT
        || mapping.parameters.len() < SPATIAL_PARAMETER_COUNT
    {
        return Err(TranslateError::MissingParameters {
            needed: SPATIAL_PARAMETER_COUNT,
            actual: parameters.len().min(mapping.parameters.len()),
        });
    }

    let spatial = Spatial::decode(bytes)?;
    if bytes.len() != spatial.encoded_length() {
        debug!(
            attribute = %mapping.federation_name,
            received = bytes.len(),
            accounted = spatial.encoded_length(),
            "spatial record length not fully accounted for by its dead-reckoning algorithm"
        );
    }

    parameters[0] = integer_parameter(u32::from(spatial.dead_reckoning), &mapping.parameters[0]);

    let frozen_definition = &mapping.parameters[1];
    parameters[1] = if frozen_definition.game_type == AppDataType::Boolean {
        Some(ParameterValue::Boolean(spatial.frozen))
    } else {
        integer_parameter(u32::from(spatial.frozen), frozen_definition)
    };

    parameters[2] = position_to_local(
        converter,
        spatial.world_coordinate,
        mapping.parameters[2].game_type,
    );
    parameters[3] = rotation_to_local(
        converter,
        spatial.orientation,
        mapping.parameters[3].game_type,
    );

    parameters[4] = spatial
        .velocity
        .and_then(|v| rate_to_local(converter, v, mapping.parameters[4].game_type));
    parameters[5] = spatial
        .acceleration
        .and_then(|v| rate_to_local(converter, v, mapping.parameters[5].game_type));
    parameters[6] = spatial
        .angular_velocity
        .and_then(|v| angular_to_local(v, mapping.parameters[6].game_type));

    Ok(())
}
