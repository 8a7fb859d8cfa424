use crate::gaze::types::GazeReading;
use serde::{Deserialize, Serialize};

/// Gaze position counted as centered.
pub const CENTER_RATIO: f64 = 0.5;

/// How far the horizontal gaze ratio may deviate from center before the
/// frame counts as distracted. Fixed policy constant, not configurable.
pub const HORIZONTAL_THRESHOLD: f64 = 0.2;

/// The binary attention state derived from one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttentionState {
    Focused,
    Distracted,
}

/// Classifies one gaze reading.
///
/// Policy:
/// 1. a blink counts as distracted, whatever the gaze position says;
/// 2. a gaze deviating strictly more than [`HORIZONTAL_THRESHOLD`] from
///    center counts as distracted;
/// 3. everything else is focused, including the absence of any reading
///    (no face detected is deliberately not treated as distraction).
///
/// Pure and stateless: no temporal smoothing, no memory of prior frames.
pub fn classify(reading: &GazeReading) -> AttentionState {
    if reading.is_blinking {
        return AttentionState::Distracted;
    }

    match reading.horizontal_ratio {
        Some(ratio) if (ratio - CENTER_RATIO).abs() > HORIZONTAL_THRESHOLD => {
            AttentionState::Distracted
        }
        _ => AttentionState::Focused,
    }
}
