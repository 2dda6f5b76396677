// File: crates/hero-scene/src/scene.rs
// Summary: Scene descriptions (camera, lights, objects) and per-frame sampling.

use serde::Serialize;

use crate::error::SceneError;
use crate::motion::{Bob, FloatMotion, Spin};
use crate::particles::ParticleField;
use crate::transform::{Transform, Vec3};

pub const PARTICLE_COUNT: usize = 1200;
pub const PARTICLE_EXTENT: f32 = 15.0;
pub const DEFAULT_SEED: u64 = 0x5AA_1981;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Camera {
    pub position: Vec3,
    pub fov_degrees: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    Ambient,
    Point,
    Spot { angle: f64, penumbra: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Light {
    pub kind: LightKind,
    pub position: Vec3,
    pub intensity: f64,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StarField {
    pub radius: f64,
    pub depth: f64,
    pub count: usize,
    pub factor: f64,
    pub speed: f64,
}

/// Transforms of every animated object at one instant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneFrame {
    pub t: f64,
    pub objects: Vec<(&'static str, Transform)>,
}

impl SceneFrame {
    pub fn get(&self, name: &str) -> Option<&Transform> {
        self.objects.iter().find(|(n, _)| *n == name).map(|(_, t)| t)
    }
}

fn check_time(t: f64) -> Result<f64, SceneError> {
    if t.is_finite() && t >= 0.0 { Ok(t) } else { Err(SceneError::InvalidTime(t)) }
}

/// Landing-page backdrop: dust cloud plus a slowly turning, floating peak.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeroScene {
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub stars: StarField,
    pub particles: ParticleField,
    #[serde(skip)]
    particle_spin: Spin,
    #[serde(skip)]
    particle_bob: Bob,
    #[serde(skip)]
    peak_spin: Spin,
    #[serde(skip)]
    peak_float: FloatMotion,
}

impl HeroScene {
    pub fn new(seed: u64) -> Result<Self, SceneError> {
        Ok(Self {
            camera: Camera { position: [0.0, 0.0, 8.0], fov_degrees: 40.0 },
            lights: vec![
                Light { kind: LightKind::Ambient, position: [0.0; 3], intensity: 0.4, color: "#ffffff" },
                Light { kind: LightKind::Point, position: [10.0, 10.0, 10.0], intensity: 1.5, color: "#fbbf24" },
                Light { kind: LightKind::Point, position: [-10.0, -10.0, -5.0], intensity: 0.5, color: "#0ea5e9" },
            ],
            stars: StarField { radius: 100.0, depth: 50.0, count: 3000, factor: 4.0, speed: 0.5 },
            particles: ParticleField::generate(PARTICLE_COUNT, PARTICLE_EXTENT, seed)?,
            particle_spin: Spin::per_frame(0.0003),
            particle_bob: Bob { frequency: 0.1, amplitude: 0.2 },
            peak_spin: Spin { radians_per_second: 0.05 },
            peak_float: FloatMotion { speed: 1.0, rotation_intensity: 0.2, float_intensity: 0.4 },
        })
    }

    /// Sample every animated object at `t` seconds since mount.
    pub fn frame(&self, t: f64) -> Result<SceneFrame, SceneError> {
        let t = check_time(t)?;
        let particles = self.particle_spin.at(t).then(&self.particle_bob.at(t));
        let float = self.peak_float.at(t);
        let peak = float.then(&self.peak_spin.at(t));
        Ok(SceneFrame {
            t,
            objects: vec![("particles", particles), ("peak_float", float), ("peak", peak), ("halo", float)],
        })
    }
}

/// Smaller scene beside the impact section: one distorted sphere, floating.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VisualizerScene {
    pub camera: Camera,
    pub lights: Vec<Light>,
    #[serde(skip)]
    float: FloatMotion,
}

impl Default for VisualizerScene {
    fn default() -> Self {
        Self {
            camera: Camera { position: [0.0, 0.0, 4.5], fov_degrees: 45.0 },
            lights: vec![
                Light { kind: LightKind::Ambient, position: [0.0; 3], intensity: 0.8, color: "#ffffff" },
                Light {
                    kind: LightKind::Spot { angle: 0.3, penumbra: 1.0 },
                    position: [5.0, 5.0, 5.0],
                    intensity: 2.0,
                    color: "#9a3412",
                },
            ],
            float: FloatMotion { speed: 1.5, rotation_intensity: 0.5, float_intensity: 0.3 },
        }
    }
}

impl VisualizerScene {
    pub fn frame(&self, t: f64) -> Result<SceneFrame, SceneError> {
        let t = check_time(t)?;
        Ok(SceneFrame { t, objects: vec![("terrain", self.float.at(t))] })
    }
}
