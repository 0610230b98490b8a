use serde::Serialize;

use super::types::{GameState, Point};

/// Read-only view of a session after a tick, in the shape the frontend expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnakeSnapshot {
    pub board_width: i32,
    pub board_height: i32,
    pub snake_body: Vec<Point>,
    pub food: Point,
    pub score: u32,
    pub game_state: GameState,
}
