use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use uuid::Uuid;

/// Per-connection state, owned exclusively by the session's handler.
///
/// Deliberately tiny: the service is stateless per frame, so the only thing
/// a session carries is its identity and timestamps. Destroyed when the
/// socket closes.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub client_addr: SocketAddr,
    pub started_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    pub fn new(client_addr: SocketAddr) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            client_addr,
            started_at: now,
            last_seen: now,
        }
    }
}
