//! Detector configuration and shared runtime thresholds

use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

/// Default eye-openness cutoff
pub const DEFAULT_EAR_THRESHOLD: f32 = 0.15;

/// Default mouth-openness cutoff
pub const DEFAULT_MAR_THRESHOLD: f32 = 0.35;

/// Default consecutive-frame window before a yawn is confirmed
pub const DEFAULT_MIN_YAWN_FRAMES: u32 = 10;

/// Adjustable EAR threshold bounds
pub const EAR_THRESHOLD_RANGE: (f32, f32) = (0.05, 0.5);

/// Adjustable MAR threshold bounds
pub const MAR_THRESHOLD_RANGE: (f32, f32) = (0.1, 1.0);

/// Construction-time detector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Eye-openness cutoff; a lower ratio reads as closed
    pub ear_threshold: f32,

    /// Mouth-openness cutoff; a higher ratio reads as open
    pub mar_threshold: f32,

    /// Consecutive frames above the MAR cutoff before a yawn is confirmed
    pub min_yawn_frames: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            ear_threshold: DEFAULT_EAR_THRESHOLD,
            mar_threshold: DEFAULT_MAR_THRESHOLD,
            min_yawn_frames: DEFAULT_MIN_YAWN_FRAMES,
        }
    }
}

impl DetectorConfig {
    /// Create strict config (flags drowsiness earlier)
    pub fn strict() -> Self {
        Self {
            ear_threshold: 0.2,
            mar_threshold: 0.3,
            min_yawn_frames: 6,
        }
    }

    /// Create lenient config (tolerates more movement)
    pub fn lenient() -> Self {
        Self {
            ear_threshold: 0.12,
            mar_threshold: 0.45,
            min_yawn_frames: 15,
        }
    }
}

/// Live threshold pair shared between the host application and the frame
/// loop.
///
/// Values are stored as float bits in atomics so a UI or control thread
/// can adjust them while `process` reads; each threshold is a single
/// scalar, so relaxed loads and stores are enough (no tearing, visible by
/// the next frame). Setters clamp to the documented bounds.
#[derive(Debug)]
pub struct ThresholdConfig {
    ear_bits: AtomicU32,
    mar_bits: AtomicU32,
}

impl ThresholdConfig {
    /// Threshold pair clamped to the adjustable bounds
    pub fn new(ear_threshold: f32, mar_threshold: f32) -> Self {
        Self {
            ear_bits: AtomicU32::new(clamp(ear_threshold, EAR_THRESHOLD_RANGE).to_bits()),
            mar_bits: AtomicU32::new(clamp(mar_threshold, MAR_THRESHOLD_RANGE).to_bits()),
        }
    }

    /// Current eye-openness cutoff
    pub fn ear_threshold(&self) -> f32 {
        f32::from_bits(self.ear_bits.load(Ordering::Relaxed))
    }

    /// Current mouth-openness cutoff
    pub fn mar_threshold(&self) -> f32 {
        f32::from_bits(self.mar_bits.load(Ordering::Relaxed))
    }

    /// Set the eye cutoff, clamped to [`EAR_THRESHOLD_RANGE`]
    pub fn set_ear_threshold(&self, value: f32) {
        self.ear_bits
            .store(clamp(value, EAR_THRESHOLD_RANGE).to_bits(), Ordering::Relaxed);
    }

    /// Set the mouth cutoff, clamped to [`MAR_THRESHOLD_RANGE`]
    pub fn set_mar_threshold(&self, value: f32) {
        self.mar_bits
            .store(clamp(value, MAR_THRESHOLD_RANGE).to_bits(), Ordering::Relaxed);
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EAR_THRESHOLD, DEFAULT_MAR_THRESHOLD)
    }
}

fn clamp(value: f32, range: (f32, f32)) -> f32 {
    value.clamp(range.0, range.1)
}
