use axum::extract::ws::{Message, WebSocket};
use futures_util::SinkExt;
use futures_util::stream::SplitSink;

use common::games::GameBroadcaster;
use common::games::snake::SnakeSnapshot;

pub fn encode_snapshot(snapshot: &SnakeSnapshot) -> Result<String, String> {
    serde_json::to_string(snapshot).map_err(|e| format!("Failed to encode game state: {}", e))
}

/// Write half of one client's WebSocket. Snapshots go out as JSON text frames.
pub struct WsBroadcaster {
    sender: SplitSink<WebSocket, Message>,
}

impl WsBroadcaster {
    pub fn new(sender: SplitSink<WebSocket, Message>) -> Self {
        Self { sender }
    }

    /// Best effort; the peer may already be gone.
    pub async fn close(&mut self) {
        let _ = self.sender.send(Message::Close(None)).await;
        let _ = self.sender.close().await;
    }
}

impl GameBroadcaster for WsBroadcaster {
    async fn broadcast_state(&mut self, snapshot: &SnakeSnapshot) -> Result<(), String> {
        let payload = encode_snapshot(snapshot)?;
        self.sender
            .send(Message::Text(payload.into()))
            .await
            .map_err(|e| format!("Failed to send game state: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::{GameState, Point};

    #[test]
    fn test_encode_snapshot_matches_frontend_payload() {
        let snapshot = SnakeSnapshot {
            board_width: 30,
            board_height: 20,
            snake_body: vec![Point::new(16, 10), Point::new(15, 10), Point::new(14, 10)],
            food: Point::new(2, 3),
            score: 0,
            game_state: GameState::Lost,
        };
        let json = encode_snapshot(&snapshot).unwrap();
        assert_eq!(
            json,
            r#"{"boardWidth":30,"boardHeight":20,"snakeBody":[{"X":16,"Y":10},{"X":15,"Y":10},{"X":14,"Y":10}],"food":{"X":2,"Y":3},"score":0,"gameState":"Lost"}"#
        );
    }
}
