//! Gaze analysis capability boundary.
//!
//! How attention is computed from pixels is not this service's business: the
//! gaze/blink analysis is an external capability consumed as a black box.
//! This module defines the boundary ([`GazeAnalysis`], [`GazeAnalysisFactory`])
//! so sessions can be driven by fakes in tests, and ships one production
//! adapter ([`sidecar::SidecarAnalyzer`]) that runs the analysis in an
//! external process, one per session.

pub mod analyzer;
pub mod sidecar;
pub mod types;

pub use analyzer::{GazeAnalysis, GazeAnalysisFactory};
pub use sidecar::{SidecarAnalyzer, SidecarFactory};
pub use types::GazeReading;
