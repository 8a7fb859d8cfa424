use clap::Parser;
use log::{error, info};
use vigie::client::capture::DirectoryFrameSource;
use vigie::client::monitor_client::MonitorClient;
use vigie::client::types::{ClientConfig, DEFAULT_ENDPOINT};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vigie-client")]
#[command(version = "0.1.0")]
#[command(about = "Monitor client: streams frames to the attention service")]
struct Args {
    /// WebSocket endpoint of the attention service
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Directory of image files cycled as the frame source (camera stand-in)
    #[arg(long)]
    frames: PathBuf,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .init();

    let args = Args::parse();

    let source = match DirectoryFrameSource::new(&args.frames) {
        Ok(source) => source,
        Err(e) => {
            error!("Unable to open frame source: {}", e);
            std::process::exit(1);
        }
    };

    let config = ClientConfig {
        endpoint: args.endpoint,
        ..ClientConfig::default()
    };

    info!("monitoring attention via {}", config.endpoint);

    MonitorClient::new(config, source, vigie::client::alert::LogAlert)
        .run()
        .await;
}
