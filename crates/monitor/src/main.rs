//! Drowsiness Monitor - Replay Entry Point
//!
//! Stands in for the camera/UI glue: replays recorded landmark frames
//! through the signal processor and the alert policy.

mod replay;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use alerting::{AlertConfig, AlertPolicy};
use drowsiness::{DetectorConfig, DrowsinessProcessor};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    info!("=== Drowsiness Monitor v{} ===", env!("CARGO_PKG_VERSION"));

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: drowsiness-monitor <frames.jsonl>")?;

    let frames = replay::load_frames(&path)
        .with_context(|| format!("failed to load frames from {}", path.display()))?;
    info!("Loaded {} frames from {}", frames.len(), path.display());

    let mut processor = DrowsinessProcessor::new(DetectorConfig::default());
    let mut policy = AlertPolicy::new(AlertConfig::default());

    // Drain events on a separate task, the way an alert sound trigger would
    let mut events = processor.subscribe();
    let consumer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            info!("Event: {:?}", event);
        }
    });

    let mut last = None;
    for frame in &frames {
        let result = processor.process(frame)?;
        if let Some(alert) = policy.evaluate(&result, frame.timestamp_ms) {
            warn!(
                "{:?} alert after {:.1} s ({:?})",
                alert.kind, alert.duration_secs, alert.severity
            );
        }
        last = Some(result);
    }

    // Close the event channel so the consumer drains and exits
    drop(processor);
    consumer.await?;

    if let Some(result) = last {
        info!(
            "Replay finished: {} blinks, {} yawns",
            result.blink_count, result.yawn_count
        );
    }

    Ok(())
}

fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
