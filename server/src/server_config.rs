use std::net::SocketAddr;
use std::time::Duration;

use common::config::Validate;
use common::games::snake::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_INITIAL_LENGTH, DEFAULT_TICK_INTERVAL,
    SnakeSessionSettings,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "snake_server.yaml";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Frontend build served at `/` when set.
    pub static_files_path: Option<String>,
    pub game: GameConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: u32,
    pub board_height: u32,
    pub initial_length: u32,
    pub tick_interval_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            static_files_path: None,
            game: GameConfig::default(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            initial_length: DEFAULT_INITIAL_LENGTH,
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
        }
    }
}

impl From<&GameConfig> for SnakeSessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            board_width: config.board_width,
            board_height: config.board_height,
            initial_length: config.initial_length,
            tick_interval: Duration::from_millis(config.tick_interval_ms),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.bind_address
            .parse()
            .map_err(|e| format!("Invalid bind address '{}': {}", self.bind_address, e))
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.socket_addr()?;
        SnakeSessionSettings::from(&self.game).validate()
    }
}
