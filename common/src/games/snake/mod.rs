mod board;
mod game;
mod session;
mod settings;
mod snake;
mod snapshot;
mod types;

pub use board::Board;
pub use game::{FOOD_SAMPLE_ATTEMPTS, SnakeGame};
pub use session::{SessionCommand, SessionEnd, SnakeSession};
pub use settings::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_INITIAL_LENGTH, DEFAULT_TICK_INTERVAL,
    SnakeSessionSettings,
};
pub use snake::Snake;
pub use snapshot::SnakeSnapshot;
pub use types::{DeathReason, Direction, GameState, Point};
