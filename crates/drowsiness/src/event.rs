//! Discrete drowsiness notifications

use serde::{Deserialize, Serialize};

/// Event emitted alongside a frame result.
///
/// Events appear in occurrence order, both inside
/// [`FrameResult::events`](crate::FrameResult) and on subscription
/// channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrowsinessEvent {
    /// A blink completed (eyes reopened after a closure)
    BlinkDetected,

    /// Sustained mouth opening was confirmed as a yawn
    YawnDetected,

    /// A confirmed yawn ended
    YawnComplete,

    /// The detector reported no usable face; transient state was reset
    NoFace,
}
