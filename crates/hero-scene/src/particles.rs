// File: crates/hero-scene/src/particles.rs
// Summary: Seeded random particle cloud (the drifting dust around the peak).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::SceneError;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticleField {
    pub extent: f32,
    pub positions: Vec<[f32; 3]>,
}

impl ParticleField {
    /// `count` points uniformly inside a cube of side `extent` centered on the origin.
    pub fn generate(count: usize, extent: f32, seed: u64) -> Result<Self, SceneError> {
        if count == 0 {
            return Err(SceneError::EmptyField);
        }
        if !extent.is_finite() || extent <= 0.0 {
            return Err(SceneError::InvalidExtent(extent as f64));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let positions = (0..count)
            .map(|_| {
                [
                    (rng.gen::<f32>() - 0.5) * extent,
                    (rng.gen::<f32>() - 0.5) * extent,
                    (rng.gen::<f32>() - 0.5) * extent,
                ]
            })
            .collect();
        tracing::debug!(count, extent, seed, "particle field generated");
        Ok(Self { extent, positions })
    }

    pub fn len(&self) -> usize { self.positions.len() }
    pub fn is_empty(&self) -> bool { self.positions.is_empty() }

    /// Flat `[x0, y0, z0, x1, ...]` buffer, the layout GPU point buffers expect.
    pub fn flattened(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| p.iter().copied()).collect()
    }
}
