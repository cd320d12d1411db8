//! Drowsiness Signal Processor
//!
//! Turns the per-frame landmark stream from an external face-landmark
//! detector into discrete drowsiness signals:
//! - Eye and mouth aspect ratios per frame
//! - Blink detection and counting
//! - Microsleep duration tracking (sustained eye closure)
//! - Yawn detection with consecutive-frame debouncing
//! - Ordered event notifications for downstream alerting

pub mod config;
pub mod event;
pub mod eye;
pub mod result;
pub mod state;
pub mod yawn;

pub use config::{DetectorConfig, ThresholdConfig};
pub use event::DrowsinessEvent;
pub use eye::EyeMonitor;
pub use result::FrameResult;
pub use state::{EyeClosureState, YawnState};
pub use yawn::{YawnMonitor, YawnTransition};

use std::sync::Arc;

use face_geometry::{combined_ear, eye_aspect_ratio, mesh, mouth_aspect_ratio, LandmarkFrame};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Processor error types
#[derive(Debug, Error)]
pub enum DrowsinessError {
    #[error("landmark geometry error: {0}")]
    Geometry(#[from] face_geometry::GeometryError),
}

/// Capacity of each event subscription channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Per-frame drowsiness signal processor.
///
/// Single-writer: exactly one `process` call is in flight at a time,
/// driven by whatever delivers frames. Thresholds live in a shared
/// [`ThresholdConfig`] and may be adjusted from another thread between
/// frames; a change is visible to the next frame.
pub struct DrowsinessProcessor {
    thresholds: Arc<ThresholdConfig>,
    min_yawn_frames: u32,
    eyes: EyeMonitor,
    mouth: YawnMonitor,
    blink_count: u64,
    yawn_count: u64,
    subscribers: Vec<mpsc::Sender<DrowsinessEvent>>,
}

impl DrowsinessProcessor {
    /// Create a processor owning its threshold pair
    pub fn new(config: DetectorConfig) -> Self {
        let thresholds = Arc::new(ThresholdConfig::new(
            config.ear_threshold,
            config.mar_threshold,
        ));
        Self::with_thresholds(config, thresholds)
    }

    /// Create a processor reading a host-owned threshold pair
    pub fn with_thresholds(config: DetectorConfig, thresholds: Arc<ThresholdConfig>) -> Self {
        Self {
            thresholds,
            min_yawn_frames: config.min_yawn_frames,
            eyes: EyeMonitor::new(),
            mouth: YawnMonitor::new(),
            blink_count: 0,
            yawn_count: 0,
            subscribers: Vec::new(),
        }
    }

    /// Shared thresholds, adjustable at any time from any thread
    pub fn thresholds(&self) -> Arc<ThresholdConfig> {
        Arc::clone(&self.thresholds)
    }

    /// Open an event subscription.
    ///
    /// Events arrive in occurrence order. A subscriber that stops
    /// draining loses events rather than stalling the frame loop.
    pub fn subscribe(&mut self) -> mpsc::Receiver<DrowsinessEvent> {
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        self.subscribers.push(tx);
        rx
    }

    /// Process one detector frame
    pub fn process(&mut self, frame: &LandmarkFrame) -> Result<FrameResult, DrowsinessError> {
        let landmarks = match frame.faces.first() {
            // An undersized set carries no usable face geometry; it takes
            // the same reset path as an empty detection
            Some(landmarks) if landmarks.len() >= mesh::MIN_LANDMARKS => landmarks,
            _ => return Ok(self.handle_no_face()),
        };

        let left_ear = eye_aspect_ratio(landmarks, &mesh::LEFT_EYE)?;
        let right_ear = eye_aspect_ratio(landmarks, &mesh::RIGHT_EYE)?;
        let ear = combined_ear(left_ear, right_ear);
        let mar = mouth_aspect_ratio(landmarks);

        let ear_threshold = self.thresholds.ear_threshold();
        let mar_threshold = self.thresholds.mar_threshold();

        let mut events = Vec::new();

        if self
            .eyes
            .update(left_ear, right_ear, ear_threshold, frame.timestamp_ms)
        {
            self.blink_count += 1;
            events.push(DrowsinessEvent::BlinkDetected);
        }

        match self
            .mouth
            .update(mar, mar_threshold, self.min_yawn_frames, frame.timestamp_ms)
        {
            YawnTransition::Started => {
                self.yawn_count += 1;
                events.push(DrowsinessEvent::YawnDetected);
            }
            YawnTransition::Completed => events.push(DrowsinessEvent::YawnComplete),
            YawnTransition::None => {}
        }

        self.notify(&events);

        Ok(FrameResult {
            face_detected: true,
            ear,
            mar,
            is_blinking: self.eyes.is_closed(),
            is_yawning: self.mouth.in_progress(),
            blink_count: self.blink_count,
            yawn_count: self.yawn_count,
            microsleep_duration: self.eyes.duration_secs(),
            yawn_duration: self.mouth.duration_secs(),
            events,
        })
    }

    /// Clear transient state; cumulative counters survive
    pub fn reset(&mut self) {
        debug!("processor reset requested");
        self.eyes.reset();
        self.mouth.reset();
    }

    fn handle_no_face(&mut self) -> FrameResult {
        self.eyes.reset();
        self.mouth.reset();

        let events = vec![DrowsinessEvent::NoFace];
        self.notify(&events);

        FrameResult {
            face_detected: false,
            blink_count: self.blink_count,
            yawn_count: self.yawn_count,
            events,
            ..Default::default()
        }
    }

    fn notify(&mut self, events: &[DrowsinessEvent]) {
        if events.is_empty() || self.subscribers.is_empty() {
            return;
        }

        self.subscribers.retain(|tx| {
            for &event in events {
                match tx.try_send(event) {
                    Ok(()) => {}
                    Err(mpsc::error::TrySendError::Full(_)) => {
                        warn!("event subscriber lagging, dropping {:?}", event);
                    }
                    Err(mpsc::error::TrySendError::Closed(_)) => return false,
                }
            }
            true
        });
    }
}
