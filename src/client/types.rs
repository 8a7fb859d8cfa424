use std::time::Duration;

/// Default endpoint the monitor client connects to.
pub const DEFAULT_ENDPOINT: &str = "ws://127.0.0.1:8765/attention";

/// Capture cadence: 5 frames per second.
pub const CAPTURE_INTERVAL: Duration = Duration::from_millis(200);

/// Fixed delay before every reconnection attempt. Deliberately has no
/// backoff growth and no retry cap: this is a monitoring feed that never
/// gives up.
pub const RECONNECT_DELAY: Duration = Duration::from_secs(1);

/// While a cooldown is active, further `distracted` replies raise no alert.
pub const ALERT_COOLDOWN: Duration = Duration::from_secs(3);

/// Monitor client settings. The defaults are the fixed constants of the
/// design; tests shrink the durations to keep wall-clock time down.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub capture_interval: Duration,
    pub reconnect_delay: Duration,
    pub alert_cooldown: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            capture_interval: CAPTURE_INTERVAL,
            reconnect_delay: RECONNECT_DELAY,
            alert_cooldown: ALERT_COOLDOWN,
        }
    }
}
