//! The composite spatial (motion state) record.

use scalar::{WireReader, WireWriter};

use crate::error::RecordResult;
use crate::vectors::{EulerAngles, VelocityVector, WorldCoordinate};

/// Full motion state for an entity: dead-reckoning code, frozen flag,
/// position, orientation, and up to three optional rate vectors.
///
/// Wire layout (all offsets fixed, 48-byte base):
///
/// | Offset | Field |
/// |---|---|
/// | 0 | dead-reckoning algorithm (u8), then 7 pad bytes |
/// | 8 | world coordinate (24 bytes) |
/// | 32 | frozen (u8), then 3 pad bytes |
/// | 36 | orientation (12 bytes) |
/// | 48 | optional velocity, acceleration, angular velocity (12 bytes each) |
///
/// A rate vector is written only when populated. On decode a vector is read
/// only when the dead-reckoning algorithm calls for it and enough bytes
/// remain, so a record encoded without optional data decodes with those
/// fields absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spatial {
    pub dead_reckoning: u8,
    pub frozen: bool,
    pub world_coordinate: WorldCoordinate,
    pub orientation: EulerAngles,
    pub velocity: Option<VelocityVector>,
    pub acceleration: Option<VelocityVector>,
    pub angular_velocity: Option<VelocityVector>,
}

/// Rate vectors carried per dead-reckoning algorithm (DIS codes 0..=9).
const fn algorithm_sends_velocity(algorithm: u8) -> bool {
    algorithm >= 2 && algorithm <= 9
}

const fn algorithm_sends_acceleration(algorithm: u8) -> bool {
    matches!(algorithm, 4 | 5 | 8 | 9)
}

const fn algorithm_sends_angular_velocity(algorithm: u8) -> bool {
    matches!(algorithm, 3 | 4 | 7 | 8)
}

impl Spatial {
    /// Length of the mandatory header fields.
    pub const BASE_LENGTH: usize = 48;

    /// Maximum encoded length (all three rate vectors present).
    pub const MAX_ENCODED_LENGTH: usize = 84;

    /// Returns the encoded length of this record given its populated fields.
    #[must_use]
    pub fn encoded_length(&self) -> usize {
        let mut length = Self::BASE_LENGTH;
        for vector in [self.velocity, self.acceleration, self.angular_velocity] {
            if vector.is_some() {
                length += VelocityVector::ENCODED_LENGTH;
            }
        }
        length
    }

    /// Encodes this record into the provided buffer.
    ///
    /// Returns the number of bytes written (48..=84).
    pub fn encode(&self, out: &mut [u8]) -> RecordResult<usize> {
        let mut writer = WireWriter::new(out);
        writer.write_u8(self.dead_reckoning.min(9))?;
        writer.write_zeros(7)?;

        let mut coordinate = [0u8; WorldCoordinate::ENCODED_LENGTH];
        self.world_coordinate.encode(&mut coordinate)?;
        writer.write_bytes(&coordinate)?;

        writer.write_u8(u8::from(self.frozen))?;
        writer.write_zeros(3)?;

        let mut angles = [0u8; EulerAngles::ENCODED_LENGTH];
        self.orientation.encode(&mut angles)?;
        writer.write_bytes(&angles)?;

        for vector in [self.velocity, self.acceleration, self.angular_velocity]
            .into_iter()
            .flatten()
        {
            let mut rate = [0u8; VelocityVector::ENCODED_LENGTH];
            vector.encode(&mut rate)?;
            writer.write_bytes(&rate)?;
        }

        Ok(writer.finish())
    }

    /// Decodes a record from the provided buffer.
    pub fn decode(bytes: &[u8]) -> RecordResult<Self> {
        let mut reader = WireReader::new(bytes);
        let dead_reckoning = reader.read_u8()?;
        reader.skip(7)?;
        let world_coordinate =
            WorldCoordinate::decode(reader.read_bytes(WorldCoordinate::ENCODED_LENGTH)?)?;
        let frozen = reader.read_u8()? != 0;
        reader.skip(3)?;
        let orientation = EulerAngles::decode(reader.read_bytes(EulerAngles::ENCODED_LENGTH)?)?;

        let mut read_rate = |wanted: bool| -> RecordResult<Option<VelocityVector>> {
            if wanted && reader.remaining() >= VelocityVector::ENCODED_LENGTH {
                let bytes = reader.read_bytes(VelocityVector::ENCODED_LENGTH)?;
                Ok(Some(VelocityVector::decode(bytes)?))
            } else {
                Ok(None)
            }
        };

        let velocity = read_rate(algorithm_sends_velocity(dead_reckoning))?;
        let acceleration = read_rate(algorithm_sends_acceleration(dead_reckoning))?;
        let angular_velocity = read_rate(algorithm_sends_angular_velocity(dead_reckoning))?;

        Ok(Self {
            dead_reckoning,
            frozen,
            world_coordinate,
            orientation,
            velocity,
            acceleration,
            angular_velocity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_spatial() -> Spatial {
        Spatial {
            dead_reckoning: 4,
            frozen: true,
            world_coordinate: WorldCoordinate::new(500_000.0, -42.5, 6.1e6),
            orientation: EulerAngles::new(1.5, 3.14, -2.44),
            velocity: Some(VelocityVector::new(1.0, 2.0, 3.0)),
            acceleration: Some(VelocityVector::new(-0.5, 0.0, 9.8)),
            angular_velocity: Some(VelocityVector::new(0.1, 0.2, 0.3)),
        }
    }

    #[test]
    fn full_record_roundtrip() {
        let spatial = full_spatial();
        let mut buf = [0u8; Spatial::MAX_ENCODED_LENGTH];
        let written = spatial.encode(&mut buf).unwrap();
        assert_eq!(written, 84);
        assert_eq!(spatial.encoded_length(), 84);

        let decoded = Spatial::decode(&buf[..written]).unwrap();
        assert_eq!(decoded, spatial);
    }

    #[test]
    fn base_record_roundtrip_reports_rates_absent() {
        let spatial = Spatial {
            dead_reckoning: 4,
            frozen: false,
            world_coordinate: WorldCoordinate::new(1.0, 1.0, 1.0),
            orientation: EulerAngles::new(2.0, 1.1, 3.14),
            velocity: None,
            acceleration: None,
            angular_velocity: None,
        };
        let mut buf = [0u8; Spatial::MAX_ENCODED_LENGTH];
        let written = spatial.encode(&mut buf).unwrap();
        assert_eq!(written, Spatial::BASE_LENGTH);

        let decoded = Spatial::decode(&buf[..written]).unwrap();
        assert!(decoded.velocity.is_none());
        assert!(decoded.acceleration.is_none());
        assert!(decoded.angular_velocity.is_none());
    }

    #[test]
    fn static_algorithm_ignores_trailing_rate_bytes() {
        let mut spatial = full_spatial();
        spatial.dead_reckoning = 1;
        let mut buf = [0u8; Spatial::MAX_ENCODED_LENGTH];
        let written = spatial.encode(&mut buf).unwrap();
        assert_eq!(written, 84);

        // Algorithm 1 carries no rate vectors, so decode reports them absent
        // even though the bytes are present.
        let decoded = Spatial::decode(&buf[..written]).unwrap();
        assert!(decoded.velocity.is_none());
        assert!(decoded.acceleration.is_none());
        assert!(decoded.angular_velocity.is_none());
    }

    #[test]
    fn velocity_only_algorithm() {
        let spatial = Spatial {
            dead_reckoning: 2,
            velocity: Some(VelocityVector::new(4.0, 5.0, 6.0)),
            ..Spatial::default()
        };
        let mut buf = [0u8; Spatial::MAX_ENCODED_LENGTH];
        let written = spatial.encode(&mut buf).unwrap();
        assert_eq!(written, 60);

        let decoded = Spatial::decode(&buf[..written]).unwrap();
        assert_eq!(decoded.velocity, spatial.velocity);
        assert!(decoded.acceleration.is_none());
        assert!(decoded.angular_velocity.is_none());
    }

    #[test]
    fn layout_offsets() {
        let spatial = full_spatial();
        let mut buf = [0u8; Spatial::MAX_ENCODED_LENGTH];
        spatial.encode(&mut buf).unwrap();

        assert_eq!(buf[0], 4);
        assert_eq!(&buf[1..8], &[0u8; 7]);
        assert_eq!(&buf[8..16], &500_000.0f64.to_be_bytes());
        assert_eq!(buf[32], 1);
        assert_eq!(&buf[33..36], &[0u8; 3]);
        assert_eq!(&buf[36..40], &1.5f32.to_be_bytes());
        assert_eq!(&buf[48..52], &1.0f32.to_be_bytes());
        assert_eq!(&buf[60..64], &(-0.5f32).to_be_bytes());
        assert_eq!(&buf[72..76], &0.1f32.to_be_bytes());
    }

    #[test]
    fn dead_reckoning_code_is_clamped() {
        let spatial = Spatial {
            dead_reckoning: 200,
            ..Spatial::default()
        };
        let mut buf = [0u8; Spatial::MAX_ENCODED_LENGTH];
        spatial.encode(&mut buf).unwrap();
        assert_eq!(buf[0], 9);
    }

    #[test]
    fn short_buffer_fails() {
        assert!(Spatial::decode(&[0u8; 47]).is_err());
    }
}
