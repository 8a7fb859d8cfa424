pub mod classifier;
pub mod client;
pub mod configuration;
pub mod controller;
pub mod error_handling;
pub mod frame_codec;
pub mod gaze;
pub mod network;
pub mod session_management;
