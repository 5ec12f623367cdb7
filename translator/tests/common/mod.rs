use translator::CoordinateConverter;

/// A fixed, exactly invertible frame for round-trip tests: positions are
/// offset by a constant, rotations are shifted by a constant, and rate
/// vectors are cyclically permuted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedFrame;

const TRANSLATION: [f64; 3] = [100.0, -250.0, 75.0];
const ROTATION: [f32; 3] = [0.25, -0.5, 1.0];

impl CoordinateConverter for FixedFrame {
    fn to_remote_translation(&self, local: [f64; 3]) -> [f64; 3] {
        [
            local[0] + TRANSLATION[0],
            local[1] + TRANSLATION[1],
            local[2] + TRANSLATION[2],
        ]
    }

    fn to_local_translation(&self, remote: [f64; 3]) -> [f64; 3] {
        [
            remote[0] - TRANSLATION[0],
            remote[1] - TRANSLATION[1],
            remote[2] - TRANSLATION[2],
        ]
    }

    fn to_remote_rotation(&self, local: [f32; 3]) -> [f32; 3] {
        [
            local[0] + ROTATION[0],
            local[1] + ROTATION[1],
            local[2] + ROTATION[2],
        ]
    }

    fn to_local_rotation(&self, remote: [f32; 3]) -> [f32; 3] {
        [
            remote[0] - ROTATION[0],
            remote[1] - ROTATION[1],
            remote[2] - ROTATION[2],
        ]
    }

    fn rotate_to_remote(&self, local: [f32; 3]) -> [f32; 3] {
        [local[1], local[2], local[0]]
    }

    fn rotate_to_local(&self, remote: [f32; 3]) -> [f32; 3] {
        [remote[2], remote[0], remote[1]]
    }
}
