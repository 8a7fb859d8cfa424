//! Session management core module.
//!
//! A session is the full lifetime of one client connection, from accept to
//! close. Each accepted WebSocket gets its own [`session_handler::SessionHandler`]
//! which drives the receive loop until the transport goes away; sessions hold
//! no shared mutable state and never block one another.

/// Submodule for session data structures.
pub mod session;
/// Submodule for the per-connection message loop.
pub mod session_handler;
/// Submodule for the wire message types.
pub mod types;

pub use session::Session;
pub use session_handler::SessionHandler;
pub use types::{FramePayload, StatusReply};
