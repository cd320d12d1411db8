//! Aspect-ratio calculators
//!
//! Stateless geometry over a landmark set. The eye aspect ratio drops as
//! the eye closes; the mouth aspect ratio rises as the mouth opens.

use crate::landmarks::LandmarkPoint;
use crate::mesh;
use crate::GeometryError;

/// Near-zero horizontal distance cutoff for the mouth ratio
const DEGENERATE_DISTANCE: f32 = 1e-6;

/// Eye aspect ratio over a 6-point index set ordered
/// (corner1, upper1, upper2, corner2, lower1, lower2).
///
/// Value = (‖upper1−lower2‖ + ‖upper2−lower1‖) / (2·‖corner1−corner2‖).
/// The horizontal distance is intentionally unguarded: a degenerate eye
/// yields a non-finite ratio, which every threshold comparison treats as
/// "open".
pub fn eye_aspect_ratio(
    landmarks: &[LandmarkPoint],
    indices: &[usize],
) -> Result<f32, GeometryError> {
    if indices.len() != 6 {
        return Err(GeometryError::BadEyeIndexCount(indices.len()));
    }

    let point = |slot: usize| {
        let index = indices[slot];
        landmarks
            .get(index)
            .copied()
            .ok_or(GeometryError::LandmarkOutOfBounds {
                index,
                len: landmarks.len(),
            })
    };

    let corner1 = point(0)?;
    let upper1 = point(1)?;
    let upper2 = point(2)?;
    let corner2 = point(3)?;
    let lower1 = point(4)?;
    let lower2 = point(5)?;

    let vertical1 = upper1.distance(lower2);
    let vertical2 = upper2.distance(lower1);
    let horizontal = corner1.distance(corner2);

    Ok((vertical1 + vertical2) / (2.0 * horizontal))
}

/// Mouth aspect ratio from the fixed mouth landmarks.
///
/// A set below the reference layout minimum reads as "mouth closed"
/// rather than an error, and so does a near-zero corner distance
/// (extreme head pose).
pub fn mouth_aspect_ratio(landmarks: &[LandmarkPoint]) -> f32 {
    if landmarks.len() < mesh::MIN_LANDMARKS {
        return 0.0;
    }

    let horizontal =
        landmarks[mesh::MOUTH_CORNER_LEFT].distance(landmarks[mesh::MOUTH_CORNER_RIGHT]);
    if horizontal < DEGENERATE_DISTANCE {
        return 0.0;
    }

    let vertical = landmarks[mesh::LIP_INNER_UPPER].distance(landmarks[mesh::LIP_INNER_LOWER]);
    vertical / horizontal
}

/// Combined per-frame eye aspect ratio (mean of both eyes)
pub fn combined_ear(left: f32, right: f32) -> f32 {
    (left + right) / 2.0
}
