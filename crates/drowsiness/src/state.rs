//! Transient episode state (tracked over time)

/// Eye closure episode state
#[derive(Debug, Clone, Default)]
pub struct EyeClosureState {
    /// Both eyes currently below the closure threshold
    pub is_closed: bool,

    /// Frames the closure has lasted
    pub consecutive_frames: u32,

    /// Closure onset timestamp (ms)
    pub start_time_ms: Option<u64>,

    /// Continuous closure duration (seconds)
    pub duration_secs: f32,
}

impl EyeClosureState {
    /// Seconds elapsed since the episode started
    pub fn elapsed_secs(&self, timestamp_ms: u64) -> f32 {
        match self.start_time_ms {
            Some(start) => timestamp_ms.saturating_sub(start) as f32 / 1000.0,
            None => 0.0,
        }
    }

    /// Zero the episode
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Yawn episode state
#[derive(Debug, Clone, Default)]
pub struct YawnState {
    /// A confirmed yawn is in progress
    pub in_progress: bool,

    /// Consecutive frames the mouth ratio has stayed above threshold
    pub frames_above_threshold: u32,

    /// Yawn onset timestamp (ms)
    pub start_time_ms: Option<u64>,

    /// Yawn duration so far (seconds)
    pub duration_secs: f32,
}

impl YawnState {
    /// Seconds elapsed since the episode started
    pub fn elapsed_secs(&self, timestamp_ms: u64) -> f32 {
        match self.start_time_ms {
            Some(start) => timestamp_ms.saturating_sub(start) as f32 / 1000.0,
            None => 0.0,
        }
    }

    /// Zero the episode
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
