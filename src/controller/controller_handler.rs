use crate::configuration::config::Config;
use crate::error_handling::types::ControllerError;
use crate::gaze::analyzer::GazeAnalysisFactory;
use crate::gaze::sidecar::SidecarFactory;
use crate::network::service_listener::ServiceListener;
use log::info;
use std::sync::Arc;

/// Wires configuration into running subsystems: builds the gaze analyzer
/// factory and hands it to the service listener.
pub struct Controller {
    pub config: Config,
}

impl Controller {
    pub fn new(config: Config) -> Result<Self, ControllerError> {
        config
            .validate()
            .map_err(ControllerError::ConfigurationError)?;
        Ok(Self { config })
    }

    /// Brings the service up and runs it until the process terminates.
    pub async fn run(&mut self) -> Result<(), ControllerError> {
        info!("starting attention monitoring service");

        let analyzers: Arc<dyn GazeAnalysisFactory> =
            Arc::new(SidecarFactory::new(self.config.gaze.clone()));
        let listener = ServiceListener::new(self.config.listener.clone(), analyzers);

        listener.run().await.map_err(ControllerError::NetworkError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::types::ConfigError;

    #[test]
    fn test_new_rejects_invalid_configuration() {
        let mut config = Config::default();
        config.listener.bind_address = "nowhere".to_string();

        assert!(matches!(
            Controller::new(config),
            Err(ControllerError::ConfigurationError(
                ConfigError::BadIPFormatting(_)
            ))
        ));
    }

    #[test]
    fn test_new_accepts_defaults() {
        assert!(Controller::new(Config::default()).is_ok());
    }
}
