//! Application-side parameter data types.

use std::fmt;

/// The declared type of an application-side parameter slot.
///
/// This mirrors the value kinds the surrounding object model can hand the
/// translator. It drives the lenient-conversion policy: when a parameter's
/// runtime type disagrees with its declaration, simple types still convert
/// through the integer/string paths while structured types are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AppDataType {
    UnsignedInt,
    UnsignedLong,
    UnsignedShort,
    UnsignedChar,
    Int,
    Long,
    Short,
    Boolean,
    Float,
    Double,
    String,
    Enumeration,
    Actor,
    Vec3f,
    Vec3d,
    Group,
}

impl AppDataType {
    /// Returns `true` for types the integer conversion path accepts.
    #[must_use]
    pub const fn is_integer_like(self) -> bool {
        matches!(
            self,
            Self::UnsignedInt
                | Self::UnsignedLong
                | Self::UnsignedShort
                | Self::UnsignedChar
                | Self::Int
                | Self::Long
                | Self::Short
                | Self::Boolean
        )
    }

    /// Returns `true` for types that can fall back to string conversion
    /// when the declared and runtime types disagree.
    #[must_use]
    pub const fn is_simple(self) -> bool {
        self.is_integer_like()
            || matches!(
                self,
                Self::Float | Self::Double | Self::String | Self::Enumeration
            )
    }

    /// Returns a readable name for logging.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UnsignedInt => "unsigned int",
            Self::UnsignedLong => "unsigned long",
            Self::UnsignedShort => "unsigned short",
            Self::UnsignedChar => "unsigned char",
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Enumeration => "enumeration",
            Self::Actor => "actor",
            Self::Vec3f => "vec3f",
            Self::Vec3d => "vec3d",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for AppDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
