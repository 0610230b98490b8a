mod broadcaster;
mod server_config;
mod session_tracker;
mod web_server;
mod ws_handler;

use std::path::PathBuf;

use clap::Parser;
use common::config::{ConfigManager, FileContentConfigProvider};
use common::games::snake::SnakeSessionSettings;
use common::{log, logger};

use server_config::{DEFAULT_CONFIG_PATH, ServerConfig};
use session_tracker::SessionTracker;
use web_server::{WebServerState, run_web_server};

#[derive(Parser)]
#[command(name = "snake_server")]
struct Args {
    /// YAML config file; defaults apply when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the default config to `--config` and exit.
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<FileContentConfigProvider, ServerConfig> =
        ConfigManager::from_yaml_file(&args.config);

    if args.write_default_config {
        config_manager.store(&ServerConfig::default())?;
        log!("Default config written to {}", config_manager.source());
        return Ok(());
    }

    let config = config_manager.load()?;
    log!("Config loaded from {}", config_manager.source());

    let addr = config.socket_addr()?;
    let settings = SnakeSessionSettings::from(&config.game);
    log!(
        "Board {}x{}, initial length {}, tick {}ms",
        settings.board_width,
        settings.board_height,
        settings.initial_length,
        settings.tick_interval.as_millis()
    );

    let tracker = SessionTracker::new();
    let state = WebServerState {
        settings,
        tracker: tracker.clone(),
    };
    run_web_server(addr, config.static_files_path.map(PathBuf::from), state).await?;

    log!(
        "Server shut down gracefully ({} sessions still active)",
        tracker.count().await
    );

    Ok(())
}
