//! # Network Listener Module
//!
//! Binds the fixed attention endpoint and turns every accepted connection
//! into an independent session.
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │ Incoming        │───▶│ ServiceListener  │───▶│ SessionHandler  │
//! │ Connections     │    │                  │    │ (one task per   │
//! └─────────────────┘    │ - WS handshake   │    │  connection)    │
//!                        │ - path check     │    └─────────────────┘
//!                        │ - analyzer setup │
//!                        └──────────────────┘
//! ```
//!
//! Sessions share no mutable state and never block one another; the listener
//! itself never restarts a session, it only accepts new ones. Process
//! termination is the only path that closes all sessions at once.

pub mod service_listener;


pub use service_listener::ServiceListener;
