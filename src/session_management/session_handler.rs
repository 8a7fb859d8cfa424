use crate::classifier::attention_classifier::{classify, AttentionState};
use crate::error_handling::types::{ClassificationError, FrameError};
use crate::frame_codec::codec::decode_frame;
use crate::gaze::analyzer::GazeAnalysis;
use crate::session_management::session::Session;
use crate::session_management::types::{FramePayload, StatusReply};
use chrono::Utc;
use futures_util::{SinkExt, StreamExt};
use log::{debug, error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::WebSocketStream;

/// Drives one connection's message loop until closure.
///
/// State machine: `Open → (ReceiveLoop)* → Closed`. There is no handshake
/// beyond protocol acceptance and no close handshake is required from the
/// client; an abrupt disconnect is normal termination, not an error.
///
/// Each text message is processed fully (parse → decode → analyze → reply)
/// before the next one is received, so replies always preserve arrival order
/// and inbound frames buffer in the transport, never in the service.
pub struct SessionHandler {
    session: Session,
    analyzer: Arc<dyn GazeAnalysis>,
}

impl SessionHandler {
    pub fn new(client_addr: SocketAddr, analyzer: Arc<dyn GazeAnalysis>) -> Self {
        Self {
            session: Session::new(client_addr),
            analyzer,
        }
    }

    /// Runs the receive loop to completion.
    ///
    /// Per-message failures (unparseable JSON, undecodable frames, analyzer
    /// errors) are logged and skipped without a reply; the loop only ends
    /// when the transport closes or fails. The client sends another frame on
    /// its next capture tick regardless, so there is no per-frame retry.
    pub async fn run<S>(mut self, mut socket: WebSocketStream<S>)
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        info!(
            "[{}] session opened for {}",
            self.session.id, self.session.client_addr
        );

        let mut frames_processed: u64 = 0;

        while let Some(incoming) = socket.next().await {
            let message = match incoming {
                Ok(message) => message,
                Err(e) => {
                    debug!("[{}] transport error: {}", self.session.id, e);
                    break;
                }
            };

            if message.is_close() {
                break;
            }
            if !message.is_text() {
                continue;
            }
            let text = match message.to_text() {
                Ok(text) => text,
                Err(_) => continue,
            };

            self.session.last_seen = Utc::now();

            let state = match self.process_message(text).await {
                Ok(Some(state)) => state,
                // No image field: silently skip, no reply, no termination
                Ok(None) => continue,
                Err(FrameError::Parse(e)) => {
                    debug!("[{}] unparseable message skipped: {}", self.session.id, e);
                    continue;
                }
                Err(e) => {
                    warn!("[{}] frame skipped: {}", self.session.id, e);
                    continue;
                }
            };

            let reply = StatusReply { status: state };
            let json = match serde_json::to_string(&reply) {
                Ok(json) => json,
                Err(e) => {
                    error!("[{}] reply serialization failed: {}", self.session.id, e);
                    continue;
                }
            };

            if let Err(e) = socket.send(Message::text(json)).await {
                debug!("[{}] reply send failed: {}", self.session.id, e);
                break;
            }

            frames_processed += 1;
        }

        info!(
            "[{}] session closed ({} frames processed)",
            self.session.id, frames_processed
        );
    }

    /// Processes one inbound text message.
    ///
    /// Returns `Ok(None)` when the message carries no image (skipped without
    /// being an error) and the classified state otherwise.
    async fn process_message(&self, text: &str) -> Result<Option<AttentionState>, FrameError> {
        let payload: FramePayload = serde_json::from_str(text).map_err(FrameError::Parse)?;

        let image = match payload.image {
            Some(image) if !image.is_empty() => image,
            _ => return Ok(None),
        };

        let frame = decode_frame(&image, Utc::now())?;

        // The analysis may block for its full duration; keep it off the
        // async workers so it stalls only this session.
        let analyzer = Arc::clone(&self.analyzer);
        let reading = tokio::task::spawn_blocking(move || analyzer.analyze(&frame))
            .await
            .map_err(|e| {
                FrameError::Classification(ClassificationError::AnalyzerFailed(e.to_string()))
            })??;

        Ok(Some(classify(&reading)))
    }
}
