//! Per-frame processor output

use serde::{Deserialize, Serialize};

use crate::event::DrowsinessEvent;

/// Snapshot of the drowsiness signals for one frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameResult {
    /// Whether a usable face was present
    pub face_detected: bool,

    /// Combined eye aspect ratio (mean of both eyes)
    pub ear: f32,

    /// Mouth aspect ratio
    pub mar: f32,

    /// Both eyes currently closed
    pub is_blinking: bool,

    /// A confirmed yawn is in progress
    pub is_yawning: bool,

    /// Completed blinks since the processor was created
    pub blink_count: u64,

    /// Confirmed yawns since the processor was created
    pub yawn_count: u64,

    /// Continuous eye-closure duration (seconds), 0 while open
    pub microsleep_duration: f32,

    /// Current yawn duration (seconds), 0 outside a confirmed yawn
    pub yawn_duration: f32,

    /// Events that fired this frame, in occurrence order
    pub events: Vec<DrowsinessEvent>,
}

impl FrameResult {
    /// Check if any events fired this frame
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}
