//! The closed registry of federation attribute wire types.

use std::fmt;

/// A federation attribute wire type.
///
/// The set is closed for a given FOM revision: every variant carries a
/// stable name, a numeric id, and an encoded byte length fixed at compile
/// time. Lengths are authoritative — decoding must reject a buffer shorter
/// than the type's length, and fixed-type encoding must be given at least
/// that much room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeType {
    /// Geocentric position, 3 × float64.
    WorldCoordinate,
    /// Orientation as psi/theta/phi, 3 × float32.
    EulerAngles,
    /// Linear velocity or acceleration, 3 × float32.
    VelocityVector,
    /// Body-frame angular velocity, 3 × float32.
    AngularVelocityVector,
    /// Unsigned 32-bit integer.
    UnsignedInt,
    /// Unsigned 16-bit integer.
    UnsignedShort,
    /// Unsigned 8-bit integer.
    UnsignedChar,
    /// IEEE float32.
    Float,
    /// IEEE float64.
    Double,
    /// DIS entity classification 7-tuple.
    EntityType,
    /// Site/application/entity identity tuple.
    EntityIdentifier,
    /// Discrete event identity.
    EventIdentifier,
    /// Human-readable label, charset byte + 11 characters.
    Marking,
    /// Human-readable label, charset byte + 31 characters.
    Marking32,
    /// Null-terminated string, up to 128 bytes.
    StringType,
    /// Raw opaque bytes, no null handling.
    Octet,
    /// Composite motion-state record.
    Spatial,
    /// Variable-length articulated/attached part array.
    ArticulatedPart,
    /// Federation object identifier in string form.
    RtiObjectIdStruct,
    /// Time tag record; registered but carried without a codec.
    TimeTag,
}

impl AttributeType {
    /// All registered types, in id order.
    pub const ALL: [Self; 20] = [
        Self::WorldCoordinate,
        Self::EulerAngles,
        Self::VelocityVector,
        Self::AngularVelocityVector,
        Self::UnsignedInt,
        Self::UnsignedShort,
        Self::UnsignedChar,
        Self::Float,
        Self::Double,
        Self::EntityType,
        Self::EntityIdentifier,
        Self::EventIdentifier,
        Self::Marking,
        Self::Marking32,
        Self::StringType,
        Self::Octet,
        Self::Spatial,
        Self::ArticulatedPart,
        Self::RtiObjectIdStruct,
        Self::TimeTag,
    ];

    /// Returns the stable registry name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WorldCoordinate => "WORLD_COORDINATE_TYPE",
            Self::EulerAngles => "EULER_ANGLES_TYPE",
            Self::VelocityVector => "VELOCITY_VECTOR_TYPE",
            Self::AngularVelocityVector => "ANGULAR_VELOCITY_VECTOR_TYPE",
            Self::UnsignedInt => "UNSIGNED_INT_TYPE",
            Self::UnsignedShort => "UNSIGNED_SHORT_TYPE",
            Self::UnsignedChar => "UNSIGNED_CHAR_TYPE",
            Self::Float => "FLOAT_TYPE",
            Self::Double => "DOUBLE_TYPE",
            Self::EntityType => "ENTITY_TYPE",
            Self::EntityIdentifier => "ENTITY_IDENTIFIER_TYPE",
            Self::EventIdentifier => "EVENT_IDENTIFIER_TYPE",
            Self::Marking => "MARKING_TYPE",
            Self::Marking32 => "MARKING_TYPE_32",
            Self::StringType => "STRING_TYPE",
            Self::Octet => "OCTET_TYPE",
            Self::Spatial => "SPATIAL_TYPE",
            Self::ArticulatedPart => "ARTICULATED_PART_TYPE",
            Self::RtiObjectIdStruct => "RTI_OBJECT_ID_STRUCT_TYPE",
            Self::TimeTag => "TIME_TAG_TYPE",
        }
    }

    /// Returns the stable numeric id.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::WorldCoordinate => 1,
            Self::EulerAngles => 2,
            Self::VelocityVector => 3,
            Self::AngularVelocityVector => 4,
            Self::UnsignedInt => 5,
            Self::UnsignedShort => 6,
            Self::UnsignedChar => 7,
            Self::Float => 8,
            Self::Double => 9,
            Self::EntityType => 10,
            Self::EntityIdentifier => 11,
            Self::EventIdentifier => 12,
            Self::Marking => 13,
            Self::Marking32 => 14,
            Self::StringType => 15,
            Self::Octet => 16,
            Self::Spatial => 17,
            Self::ArticulatedPart => 18,
            Self::RtiObjectIdStruct => 19,
            Self::TimeTag => 20,
        }
    }

    /// Returns the encoded byte length.
    ///
    /// For variable-length types this is the maximum; the actual encoded
    /// size is reported by the codec per call.
    #[must_use]
    pub const fn encoded_length(self) -> usize {
        match self {
            Self::UnsignedChar => 1,
            Self::UnsignedShort => 2,
            Self::UnsignedInt | Self::Float => 4,
            Self::EventIdentifier => 5,
            Self::EntityIdentifier => 6,
            Self::Double | Self::EntityType => 8,
            Self::EulerAngles | Self::VelocityVector | Self::AngularVelocityVector
            | Self::Marking => 12,
            Self::TimeTag => 17,
            Self::WorldCoordinate => 24,
            Self::Marking32 => 32,
            Self::Spatial => 84,
            Self::StringType | Self::RtiObjectIdStruct => 128,
            Self::ArticulatedPart => 512,
            Self::Octet => 65535,
        }
    }

    /// Returns `true` when the encoded size is determined per call rather
    /// than by the registry.
    #[must_use]
    pub const fn is_variable_length(self) -> bool {
        matches!(
            self,
            Self::StringType
                | Self::Octet
                | Self::Spatial
                | Self::ArticulatedPart
                | Self::RtiObjectIdStruct
        )
    }

    /// Looks up a type by its registry name.
    #[must_use]
    pub fn for_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
