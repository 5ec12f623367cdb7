//! World coordinate, orientation, and velocity vector layouts.

use scalar::{WireReader, WireWriter};

use crate::error::RecordResult;

/// A geocentric world coordinate (3 × float64, 24 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldCoordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WorldCoordinate {
    /// Encoded length in bytes.
    pub const ENCODED_LENGTH: usize = 24;

    /// Creates a world coordinate from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Encodes this coordinate into the provided buffer.
    pub fn encode(&self, out: &mut [u8]) -> RecordResult<usize> {
        let mut writer = WireWriter::new(out);
        writer.write_f64(self.x)?;
        writer.write_f64(self.y)?;
        writer.write_f64(self.z)?;
        Ok(writer.finish())
    }

    /// Decodes a coordinate from the provided buffer.
    pub fn decode(bytes: &[u8]) -> RecordResult<Self> {
        let mut reader = WireReader::new(bytes);
        Ok(Self {
            x: reader.read_f64()?,
            y: reader.read_f64()?,
            z: reader.read_f64()?,
        })
    }

    /// Returns the components as an array.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for WorldCoordinate {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// Entity orientation as psi/theta/phi Euler angles (3 × float32, 12 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub psi: f32,
    pub theta: f32,
    pub phi: f32,
}

impl EulerAngles {
    /// Encoded length in bytes.
    pub const ENCODED_LENGTH: usize = 12;

    /// Creates Euler angles from psi, theta, and phi.
    #[must_use]
    pub const fn new(psi: f32, theta: f32, phi: f32) -> Self {
        Self { psi, theta, phi }
    }

    /// Encodes the angles into the provided buffer.
    pub fn encode(&self, out: &mut [u8]) -> RecordResult<usize> {
        let mut writer = WireWriter::new(out);
        writer.write_f32(self.psi)?;
        writer.write_f32(self.theta)?;
        writer.write_f32(self.phi)?;
        Ok(writer.finish())
    }

    /// Decodes angles from the provided buffer.
    pub fn decode(bytes: &[u8]) -> RecordResult<Self> {
        let mut reader = WireReader::new(bytes);
        Ok(Self {
            psi: reader.read_f32()?,
            theta: reader.read_f32()?,
            phi: reader.read_f32()?,
        })
    }

    /// Returns the angles as an array in psi/theta/phi order.
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.psi, self.theta, self.phi]
    }
}

impl From<[f32; 3]> for EulerAngles {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// A linear rate vector (3 × float32, 12 bytes).
///
/// Shared by the velocity, acceleration, and angular-velocity attributes;
/// the three use an identical layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VelocityVector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl VelocityVector {
    /// Encoded length in bytes.
    pub const ENCODED_LENGTH: usize = 12;

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Encodes this vector into the provided buffer.
    pub fn encode(&self, out: &mut [u8]) -> RecordResult<usize> {
        let mut writer = WireWriter::new(out);
        writer.write_f32(self.x)?;
        writer.write_f32(self.y)?;
        writer.write_f32(self.z)?;
        Ok(writer.finish())
    }

    /// Decodes a vector from the provided buffer.
    pub fn decode(bytes: &[u8]) -> RecordResult<Self> {
        let mut reader = WireReader::new(bytes);
        Ok(Self {
            x: reader.read_f32()?,
            y: reader.read_f32()?,
            z: reader.read_f32()?,
        })
    }

    /// Returns the components as an array.
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for VelocityVector {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}
