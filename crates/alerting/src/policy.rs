//! Alert Policy Implementation

use std::collections::HashMap;

use drowsiness::FrameResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Alert policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Eye closure duration that becomes a microsleep alert (seconds)
    pub microsleep_alert_secs: f32,
    /// Yawn duration that becomes a prolonged-yawn alert (seconds)
    pub yawn_alert_secs: f32,
    /// Cooldown period between duplicate alerts (seconds)
    pub cooldown_seconds: u64,
    /// Maximum alerts per hour before throttling
    pub max_alerts_per_hour: usize,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            microsleep_alert_secs: 0.7,
            yawn_alert_secs: 2.0,
            cooldown_seconds: 5,
            max_alerts_per_hour: 120,
        }
    }
}

/// Alert kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertKind {
    /// Sustained eye closure past the microsleep duration threshold
    Microsleep,
    /// Yawn lasting past the prolonged-yawn duration threshold
    ProlongedYawn,
}

/// Severity of a fired alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Medium,
    High,
    Critical,
}

/// A fired alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrowsinessAlert {
    pub kind: AlertKind,
    pub severity: Severity,
    /// Episode duration when the alert fired (seconds)
    pub duration_secs: f32,
    /// Frame timestamp of the firing (ms)
    pub timestamp_ms: u64,
}

/// State of an alert kind
#[derive(Debug, Clone)]
struct AlertState {
    /// Last time this alert was fired (frame timestamp, ms)
    last_fired_ms: u64,
    /// Number of times fired
    fire_count: usize,
}

/// Alert policy over per-frame processor results.
///
/// Runs on the pipeline's frame timebase so decisions replay
/// deterministically.
pub struct AlertPolicy {
    config: AlertConfig,
    /// Firing states by alert kind
    states: HashMap<AlertKind, AlertState>,
    /// Alerts fired in the current hour
    hourly_count: usize,
    /// Hour window start (frame timestamp, ms)
    hour_start_ms: u64,
}

impl AlertPolicy {
    /// Create a new alert policy
    pub fn new(config: AlertConfig) -> Self {
        info!("Creating alert policy with config: {:?}", config);
        Self {
            config,
            states: HashMap::new(),
            hourly_count: 0,
            hour_start_ms: 0,
        }
    }

    /// Evaluate one frame result; returns the alert that fired, if any
    pub fn evaluate(
        &mut self,
        result: &FrameResult,
        timestamp_ms: u64,
    ) -> Option<DrowsinessAlert> {
        let (kind, duration, threshold) =
            if result.microsleep_duration > self.config.microsleep_alert_secs {
                (
                    AlertKind::Microsleep,
                    result.microsleep_duration,
                    self.config.microsleep_alert_secs,
                )
            } else if result.is_yawning && result.yawn_duration > self.config.yawn_alert_secs {
                (
                    AlertKind::ProlongedYawn,
                    result.yawn_duration,
                    self.config.yawn_alert_secs,
                )
            } else {
                return None;
            };

        if !self.should_fire(kind, timestamp_ms) {
            return None;
        }
        self.record_fire(kind, timestamp_ms);

        let severity = severity_for(duration, threshold);
        warn!(
            "Drowsiness alert: {:?} after {:.1} s ({:?})",
            kind, duration, severity
        );

        Some(DrowsinessAlert {
            kind,
            severity,
            duration_secs: duration,
            timestamp_ms,
        })
    }

    fn should_fire(&mut self, kind: AlertKind, timestamp_ms: u64) -> bool {
        // Reset hourly counter if needed
        if timestamp_ms.saturating_sub(self.hour_start_ms) > 3_600_000 {
            self.hourly_count = 0;
            self.hour_start_ms = timestamp_ms;
        }

        // Check hourly throttle
        if self.hourly_count >= self.config.max_alerts_per_hour {
            warn!("Alert throttled: max alerts per hour reached");
            return false;
        }

        // Check cooldown
        if let Some(state) = self.states.get(&kind) {
            let cooldown_ms = self.config.cooldown_seconds * 1000;
            if timestamp_ms.saturating_sub(state.last_fired_ms) < cooldown_ms {
                debug!("Alert suppressed: {:?} in cooldown period", kind);
                return false;
            }
        }

        true
    }

    fn record_fire(&mut self, kind: AlertKind, timestamp_ms: u64) {
        self.hourly_count += 1;

        let state = self.states.entry(kind).or_insert(AlertState {
            last_fired_ms: timestamp_ms,
            fire_count: 0,
        });
        state.last_fired_ms = timestamp_ms;
        state.fire_count += 1;

        debug!("Alert recorded: {:?} (count: {})", kind, state.fire_count);
    }

    /// Get hourly alert count
    pub fn hourly_count(&self) -> usize {
        self.hourly_count
    }

    /// Clear all firing history
    pub fn clear(&mut self) {
        self.states.clear();
        self.hourly_count = 0;
    }
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self::new(AlertConfig::default())
    }
}

/// Severity scales with how far past the duration threshold the episode is
fn severity_for(duration: f32, threshold: f32) -> Severity {
    if duration > threshold * 3.0 {
        Severity::Critical
    } else if duration > threshold * 1.5 {
        Severity::High
    } else {
        Severity::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn microsleep_result(duration: f32) -> FrameResult {
        FrameResult {
            face_detected: true,
            is_blinking: true,
            microsleep_duration: duration,
            ..Default::default()
        }
    }

    fn yawn_result(duration: f32) -> FrameResult {
        FrameResult {
            face_detected: true,
            is_yawning: true,
            yawn_duration: duration,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_alert_below_duration_thresholds() {
        let mut policy = AlertPolicy::default();
        assert!(policy.evaluate(&microsleep_result(0.5), 0).is_none());
        assert!(policy.evaluate(&yawn_result(1.5), 33).is_none());
    }

    #[test]
    fn test_microsleep_alert_fires() {
        let mut policy = AlertPolicy::default();
        let alert = policy.evaluate(&microsleep_result(0.8), 1000).unwrap();
        assert_eq!(alert.kind, AlertKind::Microsleep);
        assert_eq!(alert.severity, Severity::Medium);
    }

    #[test]
    fn test_yawn_alert_requires_yawn_in_progress() {
        let mut policy = AlertPolicy::default();
        let mut result = yawn_result(2.5);
        result.is_yawning = false;
        assert!(policy.evaluate(&result, 0).is_none());
        assert!(policy.evaluate(&yawn_result(2.5), 33).is_some());
    }

    #[test]
    fn test_cooldown_suppresses_duplicates() {
        let mut policy = AlertPolicy::default();
        assert!(policy.evaluate(&microsleep_result(0.8), 1000).is_some());

        // Still inside the 5 s cooldown
        assert!(policy.evaluate(&microsleep_result(0.9), 2000).is_none());

        // Past it
        assert!(policy.evaluate(&microsleep_result(0.9), 7000).is_some());
    }

    #[test]
    fn test_cooldown_is_per_kind() {
        let mut policy = AlertPolicy::default();
        assert!(policy.evaluate(&microsleep_result(0.8), 1000).is_some());
        assert!(policy.evaluate(&yawn_result(2.5), 2000).is_some());
    }

    #[test]
    fn test_severity_scales_with_duration() {
        assert_eq!(severity_for(0.8, 0.7), Severity::Medium);
        assert_eq!(severity_for(1.2, 0.7), Severity::High);
        assert_eq!(severity_for(2.5, 0.7), Severity::Critical);
    }

    #[test]
    fn test_hourly_throttle() {
        let config = AlertConfig {
            cooldown_seconds: 0,
            max_alerts_per_hour: 2,
            ..Default::default()
        };
        let mut policy = AlertPolicy::new(config);

        assert!(policy.evaluate(&microsleep_result(0.8), 1000).is_some());
        assert!(policy.evaluate(&microsleep_result(0.8), 2000).is_some());
        assert!(policy.evaluate(&microsleep_result(0.8), 3000).is_none());
        assert_eq!(policy.hourly_count(), 2);

        // A new hour window clears the throttle
        assert!(policy
            .evaluate(&microsleep_result(0.8), 3_700_000)
            .is_some());
    }
}
