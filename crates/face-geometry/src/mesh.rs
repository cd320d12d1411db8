//! Face-mesh point layout constants
//!
//! Index assignments follow the 468/478-point face mesh produced by the
//! external landmark detector. They are contractual: a detector with a
//! different point layout cannot feed this pipeline.

/// Left eye, ordered (corner, upper lid, upper lid, corner, lower lid, lower lid)
pub const LEFT_EYE: [usize; 6] = [33, 160, 158, 133, 153, 144];

/// Right eye, same ordering as [`LEFT_EYE`]
pub const RIGHT_EYE: [usize; 6] = [362, 385, 387, 263, 373, 380];

/// Left mouth corner
pub const MOUTH_CORNER_LEFT: usize = 61;

/// Right mouth corner
pub const MOUTH_CORNER_RIGHT: usize = 291;

/// Inner upper lip
pub const LIP_INNER_UPPER: usize = 13;

/// Inner lower lip
pub const LIP_INNER_LOWER: usize = 14;

/// Minimum landmark count before ratios are trusted. A full mesh always
/// exceeds this; a smaller set is treated as "no usable face", not an error.
pub const MIN_LANDMARKS: usize = 405;
