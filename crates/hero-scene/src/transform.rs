// File: crates/hero-scene/src/transform.rs
// Summary: Object transform (position + Euler rotation) in scene units and radians.

use serde::Serialize;

pub type Vec3 = [f64; 3];

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self { position: [0.0; 3], rotation: [0.0; 3] };

    /// Child transform applied inside `self`. Componentwise: only valid for the
    /// single-level, unscaled nesting the scenes use.
    pub fn then(&self, child: &Transform) -> Transform {
        Transform {
            position: add(self.position, child.position),
            rotation: add(self.rotation, child.rotation),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().chain(self.rotation.iter()).all(|v| v.is_finite())
    }
}

fn add(a: Vec3, b: Vec3) -> Vec3 { [a[0] + b[0], a[1] + b[1], a[2] + b[2]] }
