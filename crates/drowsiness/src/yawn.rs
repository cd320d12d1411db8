//! Yawn detection with consecutive-frame debouncing

use tracing::debug;

use crate::state::YawnState;

/// Outcome of advancing the yawn machine one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YawnTransition {
    /// No confirmed transition this frame
    None,
    /// Sustained mouth opening crossed the debounce window
    Started,
    /// A confirmed yawn ended
    Completed,
}

/// Hysteresis state machine over the mouth aspect ratio.
///
/// Unlike blinks, a yawn is only confirmed once the ratio has stayed
/// above threshold for a full debounce window, suppressing brief mouth
/// movement such as speech.
#[derive(Debug, Default)]
pub struct YawnMonitor {
    state: YawnState,
}

impl YawnMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame
    pub fn update(
        &mut self,
        mar: f32,
        threshold: f32,
        min_yawn_frames: u32,
        timestamp_ms: u64,
    ) -> YawnTransition {
        if mar > threshold {
            self.state.frames_above_threshold += 1;

            let mut transition = YawnTransition::None;
            if self.state.frames_above_threshold >= min_yawn_frames && !self.state.in_progress {
                debug!(
                    "yawn confirmed after {} frames",
                    self.state.frames_above_threshold
                );
                self.state.in_progress = true;
                self.state.start_time_ms = Some(timestamp_ms);
                transition = YawnTransition::Started;
            }

            if self.state.in_progress {
                self.state.duration_secs = self.state.elapsed_secs(timestamp_ms);
            }
            return transition;
        }

        // Mouth closed; the episode ends even mid-debounce
        let completed = self.state.in_progress;
        if completed {
            debug!("yawn completed after {:.2} s", self.state.duration_secs);
        }
        self.state.reset();

        if completed {
            YawnTransition::Completed
        } else {
            YawnTransition::None
        }
    }

    /// Discard the episode without signalling completion (no-face path)
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// A confirmed yawn is in progress
    pub fn in_progress(&self) -> bool {
        self.state.in_progress
    }

    /// Yawn duration so far (seconds), 0 outside a confirmed yawn
    pub fn duration_secs(&self) -> f32 {
        self.state.duration_secs
    }

    pub fn state(&self) -> &YawnState {
        &self.state
    }
}
