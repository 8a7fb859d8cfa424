use log::warn;
use std::time::Duration;
use tokio::time::Instant;

/// Where user-visible alerts go. A browser front end would pop a dialog;
/// the default here logs at warn level. Decode/classification problems never
/// reach this: the only user-visible failure mode is the absence of alerts.
pub trait AlertSink: Send {
    fn raise(&self, message: &str);
}

/// Log-backed alert sink.
pub struct LogAlert;

impl AlertSink for LogAlert {
    fn raise(&self, message: &str) {
        warn!("[!] ALERT: {}", message);
    }
}

/// Debounces alerts: once fired, further qualifying events are suppressed
/// until the cooldown elapses. The cooldown is purely time-based; a
/// `focused` reply does not clear it.
#[derive(Debug)]
pub struct AlertGate {
    cooldown: Duration,
    last_fired: Option<Instant>,
}

impl AlertGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_fired: None,
        }
    }

    /// Returns true if the alert may fire now, starting a new cooldown.
    pub fn try_fire(&mut self) -> bool {
        match self.last_fired {
            Some(fired) if fired.elapsed() < self.cooldown => false,
            _ => {
                self.last_fired = Some(Instant::now());
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::types::ALERT_COOLDOWN;

    #[tokio::test(start_paused = true)]
    async fn test_gate_suppresses_repeats_within_cooldown() {
        let mut gate = AlertGate::new(ALERT_COOLDOWN);

        assert!(gate.try_fire());
        assert!(!gate.try_fire());
        tokio::time::advance(Duration::from_millis(500)).await;
        assert!(!gate.try_fire());
    }

    #[tokio::test(start_paused = true)]
    async fn test_gate_rearms_after_cooldown() {
        let mut gate = AlertGate::new(ALERT_COOLDOWN);

        assert!(gate.try_fire());
        tokio::time::advance(ALERT_COOLDOWN + Duration::from_millis(1)).await;
        assert!(gate.try_fire());
    }
}
