//! The application-side parameter value model.
//!
//! The surrounding object model hands the translator dynamically-typed
//! parameter values; this module is their tagged representation. A value is
//! either a scalar-like leaf or a named group of child values (used for
//! articulation data).

use std::fmt;

use schema::AppDataType;

/// Opaque application-side object identifier.
///
/// The runtime identifier map resolves these to federation identities; the
/// translator itself only passes them through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ActorId(String);

impl ActorId {
    /// Creates an actor id from its string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty ("no actor") id.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named list of child parameter values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupValue {
    entries: Vec<(String, ParameterValue)>,
}

impl GroupValue {
    /// Creates an empty group.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a named child value.
    pub fn add(&mut self, name: impl Into<String>, value: ParameterValue) {
        self.entries.push((name.into(), value));
    }

    /// Builder-style variant of [`add`](Self::add).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: ParameterValue) -> Self {
        self.add(name, value);
        self
    }

    /// Returns the first child with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Iterates over `(name, value)` children in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A dynamically-typed application parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    UnsignedInt(u32),
    UnsignedLong(u64),
    UnsignedShort(u16),
    UnsignedChar(u8),
    Int(i32),
    Long(i64),
    Short(i16),
    Boolean(bool),
    Float(f32),
    Double(f64),
    String(String),
    Enumeration(String),
    Actor(ActorId),
    Vec3f([f32; 3]),
    Vec3d([f64; 3]),
    Group(GroupValue),
}

impl ParameterValue {
    /// Returns the runtime data type of this value.
    #[must_use]
    pub const fn data_type(&self) -> AppDataType {
        match self {
            Self::UnsignedInt(_) => AppDataType::UnsignedInt,
            Self::UnsignedLong(_) => AppDataType::UnsignedLong,
            Self::UnsignedShort(_) => AppDataType::UnsignedShort,
            Self::UnsignedChar(_) => AppDataType::UnsignedChar,
            Self::Int(_) => AppDataType::Int,
            Self::Long(_) => AppDataType::Long,
            Self::Short(_) => AppDataType::Short,
            Self::Boolean(_) => AppDataType::Boolean,
            Self::Float(_) => AppDataType::Float,
            Self::Double(_) => AppDataType::Double,
            Self::String(_) => AppDataType::String,
            Self::Enumeration(_) => AppDataType::Enumeration,
            Self::Actor(_) => AppDataType::Actor,
            Self::Vec3f(_) => AppDataType::Vec3f,
            Self::Vec3d(_) => AppDataType::Vec3d,
            Self::Group(_) => AppDataType::Group,
        }
    }

    /// Renders the value in its string form, when it has one.
    ///
    /// Vectors and groups have no scalar string form and yield `None`.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::UnsignedInt(v) => Some(v.to_string()),
            Self::UnsignedLong(v) => Some(v.to_string()),
            Self::UnsignedShort(v) => Some(v.to_string()),
            Self::UnsignedChar(v) => Some(v.to_string()),
            Self::Int(v) => Some(v.to_string()),
            Self::Long(v) => Some(v.to_string()),
            Self::Short(v) => Some(v.to_string()),
            Self::Boolean(v) => Some(if *v { "true".into() } else { "false".into() }),
            Self::Float(v) => Some(v.to_string()),
            Self::Double(v) => Some(v.to_string()),
            Self::String(s) | Self::Enumeration(s) => Some(s.clone()),
            Self::Actor(id) => Some(id.as_str().to_owned()),
            Self::Vec3f(_) | Self::Vec3d(_) | Self::Group(_) => None,
        }
    }

    /// Builds a value of the declared type from its string form.
    ///
    /// Numeric parses are tolerant: malformed text yields zero, matching
    /// the lenient string-conversion policy for simple types. Returns
    /// `None` for types with no scalar string form.
    #[must_use]
    pub fn from_text(data_type: AppDataType, text: &str) -> Option<Self> {
        match data_type {
            AppDataType::UnsignedInt => Some(Self::UnsignedInt(text.parse().unwrap_or(0))),
            AppDataType::UnsignedLong => Some(Self::UnsignedLong(text.parse().unwrap_or(0))),
            AppDataType::UnsignedShort => Some(Self::UnsignedShort(text.parse().unwrap_or(0))),
            AppDataType::UnsignedChar => Some(Self::UnsignedChar(text.parse().unwrap_or(0))),
            AppDataType::Int => Some(Self::Int(text.parse().unwrap_or(0))),
            AppDataType::Long => Some(Self::Long(text.parse().unwrap_or(0))),
            AppDataType::Short => Some(Self::Short(text.parse().unwrap_or(0))),
            AppDataType::Boolean => Some(Self::Boolean(text == "true" || text == "1")),
            AppDataType::Float => Some(Self::Float(text.parse().unwrap_or(0.0))),
            AppDataType::Double => Some(Self::Double(text.parse().unwrap_or(0.0))),
            AppDataType::String => Some(Self::String(text.to_owned())),
            AppDataType::Enumeration => Some(Self::Enumeration(text.to_owned())),
            AppDataType::Actor => Some(Self::Actor(ActorId::new(text))),
            AppDataType::Vec3f | AppDataType::Vec3d | AppDataType::Group => None,
        }
    }

    /// Returns the group payload of a group value.
    #[must_use]
    pub const fn as_group(&self) -> Option<&GroupValue> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Widens a vector value to float64 components.
    #[must_use]
    pub fn as_vector_f64(&self) -> Option<[f64; 3]> {
        match self {
            Self::Vec3f(v) => Some([f64::from(v[0]), f64::from(v[1]), f64::from(v[2])]),
            Self::Vec3d(v) => Some(*v),
            _ => None,
        }
    }

    /// Narrows a vector value to float32 components.
    #[must_use]
    pub fn as_vector_f32(&self) -> Option<[f32; 3]> {
        match self {
            Self::Vec3f(v) => Some(*v),
            Self::Vec3d(v) => Some([v[0] as f32, v[1] as f32, v[2] as f32]),
            _ => None,
        }
    }
}
