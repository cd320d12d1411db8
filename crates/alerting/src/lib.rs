//! Alerting System
//!
//! Evaluates per-frame drowsiness results into deduplicated alerts:
//! duration thresholds, per-kind cooldown, hourly throttling, and
//! severity mapping.

mod policy;

pub use policy::{AlertConfig, AlertKind, AlertPolicy, DrowsinessAlert, Severity};
