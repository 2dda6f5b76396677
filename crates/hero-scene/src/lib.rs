// File: crates/hero-scene/src/lib.rs
// Summary: Hero scene motion model. Every animated transform is sampled from elapsed
// time, so a frame never depends on the frames before it.

pub mod error;
pub mod motion;
pub mod particles;
pub mod scene;
pub mod transform;

pub use error::SceneError;
pub use motion::{Bob, FloatMotion, Spin, FRAME_RATE};
pub use particles::ParticleField;
pub use scene::{HeroScene, SceneFrame, VisualizerScene, DEFAULT_SEED};
pub use transform::Transform;
