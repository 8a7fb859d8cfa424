use super::types::{GazeConfig, ListenerConfig};
use crate::error_handling::types::ConfigError;
use std::net::IpAddr;
use std::path::Path;

/// Runtime configuration for the service.
///
/// All fields carry fixed defaults (the endpoint address and sidecar program
/// are constants of the design), so the service runs without any file at all;
/// a TOML file can override them.
///
/// # Examples
///
/// ```toml
/// [listener]
/// bind_address = "127.0.0.1"
/// port = 8765
///
/// [gaze]
/// analyzer_program = "python3"
/// analyzer_args = ["-u", "gaze_sidecar.py"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub listener: ListenerConfig,
    pub gaze: GazeConfig,
}

impl Config {
    /// Loads and validates a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// * `ConfigError::IoError` if the file cannot be read
    /// * `ConfigError::TomlError` if the contents are not valid TOML
    /// * any validation error from [`Config::validate`]
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(ConfigError::IoError)?;
        let config: Config =
            toml::from_str(&raw).map_err(|e| ConfigError::TomlError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configured values can actually be used to bring the
    /// service up.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listener.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::BadIPFormatting(format!(
                "'{}' is not a valid IP address",
                self.listener.bind_address
            )));
        }

        if self.listener.port == 0 {
            return Err(ConfigError::BadPortsRange(
                "port 0 is not a usable listening port".to_string(),
            ));
        }

        if self.gaze.analyzer_program.is_empty() {
            return Err(ConfigError::AnalyzerEmpty(
                "analyzer_program must name an executable".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::types::{DEFAULT_BIND_ADDRESS, DEFAULT_PORT};
    use std::io::Write;

    #[test]
    fn test_defaults_match_design_constants() {
        let config = Config::default();

        assert_eq!(config.listener.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.listener.port, DEFAULT_PORT);
        assert_eq!(config.gaze.analyzer_program, "gaze-analyzer");
        assert!(config.gaze.analyzer_args.is_empty());
        config.validate().unwrap();
    }

    #[test]
    fn test_from_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [listener]
            bind_address = "127.0.0.1"
            port = 9000

            [gaze]
            analyzer_program = "python3"
            analyzer_args = ["-u", "sidecar.py"]
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1");
        assert_eq!(config.listener.port, 9000);
        assert_eq!(config.gaze.analyzer_program, "python3");
        assert_eq!(config.gaze.analyzer_args, vec!["-u", "sidecar.py"]);
    }

    #[test]
    fn test_partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [listener]
            port = 9001
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.listener.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.listener.port, 9001);
        assert_eq!(config.gaze, GazeConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_address() {
        let mut config = Config::default();
        config.listener.bind_address = "not-an-ip".to_string();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadIPFormatting(_))
        ));
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let mut config = Config::default();
        config.listener.port = 0;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadPortsRange(_))
        ));
    }

    #[test]
    fn test_from_file_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "this is not toml [[[").unwrap();

        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::TomlError(_))
        ));
    }
}
