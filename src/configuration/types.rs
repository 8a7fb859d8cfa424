use serde::Deserialize;

/// Default bind address for the attention endpoint.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
/// Default port for the attention endpoint.
pub const DEFAULT_PORT: u16 = 8765;
/// Default program spawned as the per-session gaze-analysis sidecar.
pub const DEFAULT_ANALYZER_PROGRAM: &str = "gaze-analyzer";

/// Where the service listener binds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListenerConfig {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// External gaze-analysis capability: the program (and its arguments) spawned
/// once per session to turn pixel buffers into gaze readings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GazeConfig {
    pub analyzer_program: String,
    pub analyzer_args: Vec<String>,
}

impl Default for GazeConfig {
    fn default() -> Self {
        Self {
            analyzer_program: DEFAULT_ANALYZER_PROGRAM.to_string(),
            analyzer_args: Vec::new(),
        }
    }
}
