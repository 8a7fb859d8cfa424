use serde::{Deserialize, Serialize};

/// Output of the external gaze-analysis capability for one frame.
///
/// `horizontal_ratio` is a normalized horizontal eye-position signal in
/// `[0, 1]`, `0.5` being dead-center; `None` means no face/gaze was detected
/// in the frame. `is_blinking` reports whether the eyes are closed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GazeReading {
    pub horizontal_ratio: Option<f64>,
    pub is_blinking: bool,
}
