//! Frame codec.
//!
//! Turns the transport encoding of a camera frame (a data-URI-style string:
//! optional `<metadata>,` header followed by base64-encoded compressed image
//! bytes) into a decoded pixel buffer. Malformed payloads are rejected with a
//! [`DecodeError`](crate::error_handling::types::DecodeError) and never
//! terminate the session that received them.

pub mod codec;
pub mod types;

pub use codec::decode_frame;
pub use types::Frame;
