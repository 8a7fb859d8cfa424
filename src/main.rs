use clap::Parser;
use log::{error, info};
use std::path::Path;
use vigie::configuration::config::Config;
use vigie::controller::controller_handler::Controller;

#[derive(Parser)]
#[command(name = "vigie")]
#[command(version = "0.1.0")]
#[command(about = "Real-time attention monitoring over WebSocket")]
struct Args {
    /// Optional TOML configuration file; built-in defaults apply without it
    config_file: Option<String>,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .init();

    println!(
        "
██╗   ██╗██╗ ██████╗ ██╗███████╗
██║   ██║██║██╔════╝ ██║██╔════╝
██║   ██║██║██║  ███╗██║█████╗
╚██╗ ██╔╝██║██║   ██║██║██╔══╝
 ╚████╔╝ ██║╚██████╔╝██║███████╗
  ╚═══╝  ╚═╝ ╚═════╝ ╚═╝╚══════╝
================================================
  Real-time attention monitoring service v0.1.0
================================================
"
    );

    let args = Args::parse();

    let config = match args.config_file {
        Some(path) => match Config::from_file(Path::new(path.as_str())) {
            Ok(config) => {
                info!("configuration imported from {}", path);
                config
            }
            Err(e) => {
                error!("Unable to import configuration from file: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            info!("no configuration file given, using built-in defaults");
            Config::default()
        }
    };

    let mut controller = Controller::new(config)
        .map_err(|e| {
            error!("Unable to create a controller instance: {}, exiting...", e);
            std::process::exit(1);
        })
        .unwrap();

    let result = tokio::spawn(async move {
        info!("Spawning the controller");
        controller
            .run()
            .await
            .map_err(|e| error!("Error occured in the controller process: {}, exiting...", e))
            .unwrap();
    });

    let _ = result.await.map_err(|e| {
        error!("Error joining at the end of execution: {:?}", e);
        std::process::exit(1);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }
}
