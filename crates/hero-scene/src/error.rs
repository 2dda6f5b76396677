// File: crates/hero-scene/src/error.rs
// Summary: Scene sampling errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("elapsed time must be finite and non-negative, got {0}")]
    InvalidTime(f64),

    #[error("particle field needs at least one particle")]
    EmptyField,

    #[error("particle extent must be finite and positive, got {0}")]
    InvalidExtent(f64),
}
