use crate::classifier::attention_classifier::AttentionState;
use serde::{Deserialize, Serialize};

/// Client → server message: one captured frame.
///
/// `image` holds a data-URI-style string (optional header before a comma,
/// then base64 image bytes). A message without the field is silently ignored
/// by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FramePayload {
    pub image: Option<String>,
}

/// Server → client message: the attention state for one processed frame.
///
/// Sent exactly once per successfully processed frame; skipped or errored
/// frames produce no reply at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReply {
    pub status: AttentionState,
}
