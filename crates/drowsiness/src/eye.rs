//! Eye closure and microsleep tracking

use tracing::debug;

use crate::state::EyeClosureState;

/// Hysteresis state machine over the per-eye aspect ratios.
///
/// A closure episode begins when both eyes drop below the threshold and
/// ends when either reopens. Every closure, however brief, counts as one
/// blink on reopening; duration alone distinguishes a quick blink from a
/// sustained microsleep, observed by the caller.
#[derive(Debug, Default)]
pub struct EyeMonitor {
    state: EyeClosureState,
}

impl EyeMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame. Returns true when a blink completed this frame.
    pub fn update(
        &mut self,
        left_ear: f32,
        right_ear: f32,
        threshold: f32,
        timestamp_ms: u64,
    ) -> bool {
        let left_closed = left_ear < threshold;
        let right_closed = right_ear < threshold;

        if left_closed && right_closed {
            if self.state.is_closed {
                // Eyes remain closed
                self.state.consecutive_frames += 1;
                self.state.duration_secs = self.state.elapsed_secs(timestamp_ms);
            } else {
                // Start of eye closure
                debug!("eye closure started at {} ms", timestamp_ms);
                self.state.is_closed = true;
                self.state.start_time_ms = Some(timestamp_ms);
                self.state.consecutive_frames = 1;
            }
            return false;
        }

        // At least one eye is open
        let blink_completed = self.state.is_closed && self.state.consecutive_frames > 0;
        if blink_completed {
            debug!(
                "blink completed after {} frames ({:.3} s)",
                self.state.consecutive_frames, self.state.duration_secs
            );
        }
        self.state.reset();
        blink_completed
    }

    /// Discard the closure episode without counting a blink (no-face path)
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Both eyes currently closed
    pub fn is_closed(&self) -> bool {
        self.state.is_closed
    }

    /// Continuous closure duration (seconds), 0 while open
    pub fn duration_secs(&self) -> f32 {
        self.state.duration_secs
    }

    pub fn state(&self) -> &EyeClosureState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 0.15;

    #[test]
    fn test_open_eyes_stay_open() {
        let mut monitor = EyeMonitor::new();
        for i in 0..10u64 {
            assert!(!monitor.update(0.3, 0.3, THRESHOLD, i * 33));
        }
        assert!(!monitor.is_closed());
        assert_eq!(monitor.duration_secs(), 0.0);
    }

    #[test]
    fn test_single_frame_dip_counts_one_blink() {
        let mut monitor = EyeMonitor::new();
        assert!(!monitor.update(0.3, 0.3, THRESHOLD, 0));
        assert!(!monitor.update(0.1, 0.1, THRESHOLD, 33));
        assert!(monitor.update(0.3, 0.3, THRESHOLD, 66));
        assert_eq!(monitor.duration_secs(), 0.0);
        assert!(!monitor.is_closed());
    }

    #[test]
    fn test_one_closed_eye_is_not_a_closure() {
        let mut monitor = EyeMonitor::new();
        assert!(!monitor.update(0.1, 0.3, THRESHOLD, 0));
        assert!(!monitor.is_closed());
        assert!(!monitor.update(0.3, 0.1, THRESHOLD, 33));
        assert!(!monitor.is_closed());
    }

    #[test]
    fn test_sustained_closure_duration_grows() {
        let mut monitor = EyeMonitor::new();
        let mut previous = 0.0;
        for i in 0..5u64 {
            monitor.update(0.05, 0.05, THRESHOLD, i * 33);
            assert!(monitor.duration_secs() >= previous);
            previous = monitor.duration_secs();
        }

        // 5 closed frames at 33 ms: the first frame opens the episode
        assert!((monitor.duration_secs() - 0.132).abs() < 1e-6);
        assert_eq!(monitor.state().consecutive_frames, 5);
        assert!(monitor.is_closed());
    }

    #[test]
    fn test_non_finite_ratio_reads_open() {
        let mut monitor = EyeMonitor::new();
        monitor.update(0.1, 0.1, THRESHOLD, 0);
        // Degenerate geometry produces NaN; the comparison is false and
        // the episode ends as a normal reopening
        assert!(monitor.update(f32::NAN, f32::NAN, THRESHOLD, 33));
        assert!(!monitor.is_closed());
    }

    #[test]
    fn test_reset_discards_closure_without_blink() {
        let mut monitor = EyeMonitor::new();
        monitor.update(0.1, 0.1, THRESHOLD, 0);
        monitor.update(0.1, 0.1, THRESHOLD, 33);
        monitor.reset();

        assert!(!monitor.is_closed());
        assert_eq!(monitor.duration_secs(), 0.0);
        // Reopening after the reset must not report a blink
        assert!(!monitor.update(0.3, 0.3, THRESHOLD, 66));
    }
}
