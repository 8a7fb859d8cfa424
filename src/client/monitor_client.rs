use crate::client::alert::{AlertGate, AlertSink};
use crate::client::capture::FrameSource;
use crate::client::types::ClientConfig;
use crate::classifier::attention_classifier::AttentionState;
use crate::session_management::types::{FramePayload, StatusReply};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use futures_util::{SinkExt, StreamExt};
use log::{debug, info};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::time::MissedTickBehavior;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, WebSocketStream};

/// Text shown to the user when attention drifts.
const ALERT_MESSAGE: &str = "Attention not focused, please focus on the screen!";

/// The browser-side counterpart of the service, as a library component.
///
/// While a connection is open it captures one frame per tick and sends it;
/// ticks that fall while disconnected (or whose capture fails) are dropped
/// silently, nothing is ever queued. `distracted` replies raise an alert
/// through the [`AlertSink`], gated by the cooldown. On any close it waits
/// the fixed reconnect delay and tries again, forever.
pub struct MonitorClient<S: FrameSource, A: AlertSink> {
    config: ClientConfig,
    source: S,
    alerts: A,
    gate: AlertGate,
}

impl<S: FrameSource, A: AlertSink> MonitorClient<S, A> {
    pub fn new(config: ClientConfig, source: S, alerts: A) -> Self {
        let gate = AlertGate::new(config.alert_cooldown);
        Self {
            config,
            source,
            alerts,
            gate,
        }
    }

    /// Runs until the process is torn down. There is deliberately no retry
    /// cap and no backoff growth: a monitoring feed never gives up.
    pub async fn run(mut self) {
        loop {
            match connect_async(self.config.endpoint.as_str()).await {
                Ok((socket, _response)) => {
                    info!("connected to {}", self.config.endpoint);
                    self.stream_frames(socket).await;
                    info!(
                        "connection closed, reconnecting in {:?}",
                        self.config.reconnect_delay
                    );
                }
                Err(e) => {
                    debug!("connect to {} failed: {}", self.config.endpoint, e);
                }
            }
            tokio::time::sleep(self.config.reconnect_delay).await;
        }
    }

    /// Pumps one connection until it closes, from either end.
    async fn stream_frames<T>(&mut self, mut socket: WebSocketStream<T>)
    where
        T: AsyncRead + AsyncWrite + Unpin,
    {
        let mut ticker = tokio::time::interval(self.config.capture_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let frame = match self.source.next_frame() {
                        Ok(frame) => frame,
                        Err(e) => {
                            debug!("capture tick dropped: {}", e);
                            continue;
                        }
                    };
                    let payload = FramePayload {
                        image: Some(format!(
                            "data:image/jpeg;base64,{}",
                            STANDARD.encode(&frame)
                        )),
                    };
                    let json = match serde_json::to_string(&payload) {
                        Ok(json) => json,
                        Err(_) => continue,
                    };
                    if socket.send(Message::text(json)).await.is_err() {
                        break;
                    }
                }
                incoming = socket.next() => {
                    match incoming {
                        Some(Ok(message)) if message.is_text() => {
                            if let Ok(text) = message.to_text() {
                                self.handle_reply(text);
                            }
                        }
                        Some(Ok(message)) if message.is_close() => break,
                        Some(Ok(_)) => {}
                        Some(Err(_)) | None => break,
                    }
                }
            }
        }
    }

    /// Reacts to one server reply. Malformed replies are ignored; `focused`
    /// needs no action (the cooldown is time-based, not cleared by it).
    fn handle_reply(&mut self, text: &str) {
        let reply: StatusReply = match serde_json::from_str(text) {
            Ok(reply) => reply,
            Err(_) => return,
        };

        if reply.status == AttentionState::Distracted && self.gate.try_fire() {
            self.alerts.raise(ALERT_MESSAGE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::types::CaptureError;
    use image::{ImageFormat, Rgb, RgbImage};
    use serial_test::serial;
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tokio::time::timeout;
    use tokio_tungstenite::accept_async;

    struct TestPatternSource {
        jpeg: Vec<u8>,
    }

    impl TestPatternSource {
        fn new() -> Self {
            let pixels = RgbImage::from_pixel(8, 8, Rgb([90, 90, 90]));
            let mut cursor = Cursor::new(Vec::new());
            pixels.write_to(&mut cursor, ImageFormat::Jpeg).unwrap();
            Self {
                jpeg: cursor.into_inner(),
            }
        }
    }

    impl FrameSource for TestPatternSource {
        fn next_frame(&mut self) -> Result<Vec<u8>, CaptureError> {
            Ok(self.jpeg.clone())
        }
    }

    struct CountingAlert {
        count: Arc<AtomicUsize>,
    }

    impl AlertSink for CountingAlert {
        fn raise(&self, _message: &str) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn test_client(
        config: ClientConfig,
    ) -> (MonitorClient<TestPatternSource, CountingAlert>, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let client = MonitorClient::new(
            config,
            TestPatternSource::new(),
            CountingAlert {
                count: Arc::clone(&count),
            },
        );
        (client, count)
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_distracted_fires_once_per_cooldown() {
        let (mut client, alerts) = test_client(ClientConfig::default());

        // Three distracted replies within one second: exactly one alert
        client.handle_reply(r#"{"status":"distracted"}"#);
        tokio::time::advance(Duration::from_millis(400)).await;
        client.handle_reply(r#"{"status":"distracted"}"#);
        tokio::time::advance(Duration::from_millis(400)).await;
        client.handle_reply(r#"{"status":"distracted"}"#);
        assert_eq!(alerts.load(Ordering::SeqCst), 1);

        // After the cooldown expires, the next one fires again
        tokio::time::advance(Duration::from_secs(3)).await;
        client.handle_reply(r#"{"status":"distracted"}"#);
        assert_eq!(alerts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_focused_and_garbage_replies_do_nothing() {
        let (mut client, alerts) = test_client(ClientConfig::default());

        client.handle_reply(r#"{"status":"focused"}"#);
        client.handle_reply("not json");
        client.handle_reply(r#"{"status":"asleep"}"#);

        assert_eq!(alerts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    #[serial]
    async fn test_reconnects_and_resumes_after_server_drop() {
        let listener = TcpListener::bind("127.0.0.1:48765").await.unwrap();
        let config = ClientConfig {
            endpoint: "ws://127.0.0.1:48765/attention".to_string(),
            capture_interval: Duration::from_millis(10),
            reconnect_delay: Duration::from_millis(50),
            alert_cooldown: Duration::from_millis(100),
        };
        let (client, alerts) = test_client(config);
        let client_task = tokio::spawn(client.run());

        // First connection: receive one frame, answer distracted, then hang up
        let (stream, _) = timeout(Duration::from_secs(5), listener.accept())
            .await
            .unwrap()
            .unwrap();
        let mut server = accept_async(stream).await.unwrap();
        let first = timeout(Duration::from_secs(5), server.next())
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        let payload: FramePayload = serde_json::from_str(first.to_text().unwrap()).unwrap();
        assert!(payload
            .image
            .unwrap()
            .starts_with("data:image/jpeg;base64,"));
        server
            .send(Message::text(r#"{"status":"distracted"}"#))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        drop(server);

        // The client must come back on its own and resume sending frames
        let (stream, _) = timeout(Duration::from_secs(5), listener.accept())
            .await
            .unwrap()
            .unwrap();
        let mut server = accept_async(stream).await.unwrap();
        let resumed = timeout(Duration::from_secs(5), server.next())
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert!(resumed.is_text());
        assert_eq!(alerts.load(Ordering::SeqCst), 1);

        client_task.abort();
    }
}
