//! Client-side monitor controller.
//!
//! The counterpart of the service: captures frames from a local source at a
//! fixed cadence, ships them over the socket, throttles user-facing alerts
//! with a cooldown, and reconnects forever with a fixed delay. Its contract
//! is load-bearing for the overall UX, which is why it lives in this crate
//! next to the server rather than being an afterthought.

pub mod alert;
pub mod capture;
pub mod monitor_client;
pub mod types;

pub use alert::{AlertGate, AlertSink, LogAlert};
pub use capture::{DirectoryFrameSource, FrameSource};
pub use monitor_client::MonitorClient;
pub use types::ClientConfig;
