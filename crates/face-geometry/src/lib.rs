//! Facial Landmark Geometry
//!
//! Landmark types and the stateless aspect-ratio calculators used for
//! drowsiness signals:
//! - Eye aspect ratio (EAR) per eye and combined
//! - Mouth aspect ratio (MAR)
//! - Face-mesh point layout constants shared with the external detector

pub mod mesh;

mod landmarks;
mod ratios;

pub use landmarks::{LandmarkFrame, LandmarkPoint, LandmarkSet};
pub use ratios::{combined_ear, eye_aspect_ratio, mouth_aspect_ratio};

use thiserror::Error;

/// Geometry contract violations
///
/// These indicate a misconfigured caller, not bad frame data; degenerate
/// geometry and missing faces are handled without errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// An eye index set must name exactly 6 landmarks
    #[error("eye index set must contain exactly 6 points, got {0}")]
    BadEyeIndexCount(usize),

    /// An index referenced a landmark the set does not contain
    #[error("landmark index {index} out of bounds for set of {len} points")]
    LandmarkOutOfBounds { index: usize, len: usize },
}
