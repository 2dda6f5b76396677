// File: crates/hero-scene/src/motion.rs
// Summary: Motion primitives. Each maps elapsed seconds to a transform with no carried state.

use crate::transform::Transform;

/// Frame rate that per-frame increments assume.
pub const FRAME_RATE: f64 = 60.0;

/// Constant rotation about Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    pub radians_per_second: f64,
}

impl Spin {
    /// Spin expressed as a per-frame increment at [`FRAME_RATE`].
    pub fn per_frame(radians: f64) -> Self { Self { radians_per_second: radians * FRAME_RATE } }

    pub fn at(&self, t: f64) -> Transform {
        Transform { rotation: [0.0, t * self.radians_per_second, 0.0], ..Transform::IDENTITY }
    }
}

/// Vertical sine bob: `y = sin(t * frequency) * amplitude`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bob {
    pub frequency: f64,
    pub amplitude: f64,
}

impl Bob {
    pub fn at(&self, t: f64) -> Transform {
        Transform { position: [0.0, (t * self.frequency).sin() * self.amplitude, 0.0], ..Transform::IDENTITY }
    }
}

/// Gentle floating wobble: small rotation on all axes plus a vertical drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub speed: f64,
    pub rotation_intensity: f64,
    pub float_intensity: f64,
}

impl Default for FloatMotion {
    fn default() -> Self { Self { speed: 1.0, rotation_intensity: 1.0, float_intensity: 1.0 } }
}

impl FloatMotion {
    pub fn at(&self, t: f64) -> Transform {
        let phase = t * self.speed / 4.0;
        let ri = self.rotation_intensity;
        Transform {
            position: [0.0, phase.sin() / 10.0 * self.float_intensity, 0.0],
            rotation: [phase.cos() / 8.0 * ri, phase.sin() / 8.0 * ri, phase.sin() / 20.0 * ri],
        }
    }
}
