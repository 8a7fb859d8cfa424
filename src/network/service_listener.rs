use crate::configuration::types::ListenerConfig;
use crate::error_handling::types::NetworkError;
use crate::gaze::analyzer::GazeAnalysisFactory;
use crate::session_management::session_handler::SessionHandler;
use log::{debug, error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::accept_hdr_async;
use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};

/// Fixed path of the attention endpoint. Upgrade requests for any other path
/// are rejected during the handshake.
pub const ENDPOINT_PATH: &str = "/attention";

/// Accepts connections on the attention endpoint and spawns one
/// [`SessionHandler`] per connection.
///
/// Each accepted socket gets its own analyzer instance from the factory and
/// its own tokio task, so a slow or stuck classification on one connection
/// never delays another.
pub struct ServiceListener {
    config: ListenerConfig,
    analyzers: Arc<dyn GazeAnalysisFactory>,
}

impl ServiceListener {
    pub fn new(config: ListenerConfig, analyzers: Arc<dyn GazeAnalysisFactory>) -> Self {
        Self { config, analyzers }
    }

    /// Binds the endpoint and runs the accept loop forever.
    ///
    /// # Errors
    ///
    /// `NetworkError::BindError` if the configured address cannot be bound.
    /// Accept failures after a successful bind are logged and the loop
    /// continues.
    pub async fn run(&self) -> Result<(), NetworkError> {
        let addr = format!("{}:{}", self.config.bind_address, self.config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(NetworkError::BindError)?;

        info!("listening on ws://{}{}", addr, ENDPOINT_PATH);

        loop {
            let (stream, client_addr) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!("accept failed: {}", e);
                    continue;
                }
            };

            let analyzers = Arc::clone(&self.analyzers);
            tokio::spawn(async move {
                Self::handle_connection(stream, client_addr, analyzers).await;
            });
        }
    }

    async fn handle_connection(
        stream: TcpStream,
        client_addr: SocketAddr,
        analyzers: Arc<dyn GazeAnalysisFactory>,
    ) {
        let path_check = |request: &Request, response: Response| {
            if request.uri().path() == ENDPOINT_PATH {
                Ok(response)
            } else {
                debug!(
                    "rejecting upgrade for unknown path '{}'",
                    request.uri().path()
                );
                let reject: ErrorResponse = Response::builder()
                    .status(404)
                    .body(None)
                    .unwrap_or_default();
                Err(reject)
            }
        };

        let socket = match accept_hdr_async(stream, path_check).await {
            Ok(socket) => socket,
            Err(e) => {
                debug!("handshake with {} failed: {}", client_addr, e);
                return;
            }
        };

        let analyzer = match analyzers.create_analyzer() {
            Ok(analyzer) => analyzer,
            Err(e) => {
                warn!("closing connection from {}: {}", client_addr, e);
                return;
            }
        };

        SessionHandler::new(client_addr, analyzer).run(socket).await;
    }
}
