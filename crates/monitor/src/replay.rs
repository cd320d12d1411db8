//! Recorded landmark frame loading
//!
//! Replay files hold one JSON-encoded [`LandmarkFrame`] per line, as
//! captured at the detector boundary.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use face_geometry::LandmarkFrame;

/// Load every frame from a JSONL replay file
pub fn load_frames(path: &Path) -> Result<Vec<LandmarkFrame>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut frames = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let frame: LandmarkFrame = serde_json::from_str(&line)
            .with_context(|| format!("bad frame on line {}", number + 1))?;
        frames.push(frame);
    }

    Ok(frames)
}
