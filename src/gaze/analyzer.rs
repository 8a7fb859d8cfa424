use crate::error_handling::types::ClassificationError;
use crate::frame_codec::types::Frame;
use crate::gaze::types::GazeReading;
use std::sync::Arc;

/// The external gaze-analysis capability, seen from the service.
///
/// Implementations take a decoded pixel buffer and report a gaze reading for
/// it. The call may block for the duration of the analysis; sessions invoke
/// it through `tokio::task::spawn_blocking`, so a slow or hung analysis
/// stalls only the session that owns the analyzer.
pub trait GazeAnalysis: Send + Sync {
    fn analyze(&self, frame: &Frame) -> Result<GazeReading, ClassificationError>;
}

/// Creates one analyzer per accepted connection.
///
/// Sessions never share an analyzer instance, so a stuck analysis on one
/// connection cannot delay another.
pub trait GazeAnalysisFactory: Send + Sync {
    fn create_analyzer(&self) -> Result<Arc<dyn GazeAnalysis>, ClassificationError>;
}
