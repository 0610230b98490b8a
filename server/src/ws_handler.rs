use std::fmt::Display;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{Stream, StreamExt};
use tokio::sync::mpsc;

use common::games::SessionRng;
use common::games::snake::{Direction, SessionCommand, SessionEnd, SnakeGame, SnakeSession};
use common::id_generator::generate_session_id;
use common::{SessionId, log, log_error};

use crate::broadcaster::WsBroadcaster;
use crate::web_server::WebServerState;

/// One connection, one game. Returns once the game is over or either side of
/// the socket fails; the reader task never outlives the session.
pub async fn handle_websocket(socket: WebSocket, state: WebServerState) {
    let session_id = generate_session_id();
    let active = state.tracker.add(&session_id).await;
    log!("[session:{}] client connected ({} active)", session_id, active);

    let (ws_sender, ws_receiver) = socket.split();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let reader = tokio::spawn(read_commands(session_id.clone(), ws_receiver, command_tx));

    let game = SnakeGame::new(&state.settings, SessionRng::from_random());
    let mut broadcaster = WsBroadcaster::new(ws_sender);
    let end = SnakeSession::run(
        session_id.clone(),
        game,
        state.settings.tick_interval,
        command_rx,
        &mut broadcaster,
    )
    .await;

    reader.abort();
    broadcaster.close().await;

    let active = state.tracker.remove(&session_id).await;
    match end {
        SessionEnd::GameOver {
            state: game_state,
            score,
            ..
        } => log!(
            "[session:{}] client disconnected after game over ({}), score {} ({} active)",
            session_id,
            game_state.name(),
            score,
            active
        ),
        SessionEnd::InputClosed { score } => log!(
            "[session:{}] client disconnected, score {} ({} active)",
            session_id,
            score,
            active
        ),
        SessionEnd::TransportFailed(e) => log_error!(
            "[session:{}] session aborted: {} ({} active)",
            session_id,
            e,
            active
        ),
    }
}

/// Forwards direction tokens to the session. Unknown tokens are logged and dropped.
/// Returning drops `command_tx`, which ends the session.
async fn read_commands<S, E>(
    session_id: SessionId,
    mut ws_receiver: S,
    command_tx: mpsc::UnboundedSender<SessionCommand>,
) where
    S: Stream<Item = Result<Message, E>> + Unpin,
    E: Display,
{
    while let Some(result) = ws_receiver.next().await {
        let message = match result {
            Ok(message) => message,
            Err(e) => {
                log!("[session:{}] Client read error: {}", session_id, e);
                break;
            }
        };

        let token = match message {
            Message::Text(text) => text.as_str().to_string(),
            Message::Binary(data) => String::from_utf8_lossy(&data).into_owned(),
            Message::Close(_) => break,
            _ => continue,
        };

        match Direction::from_command(&token) {
            Some(direction) => {
                if command_tx.send(SessionCommand::Turn(direction)).is_err() {
                    break;
                }
            }
            None => log!("[session:{}] Received unknown command: {}", session_id, token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    fn session_id() -> SessionId {
        SessionId::new("reader".to_string())
    }

    fn text(token: &'static str) -> Result<Message, String> {
        Ok(Message::Text(token.into()))
    }

    async fn collect_turns(
        messages: Vec<Result<Message, String>>,
    ) -> Vec<Direction> {
        let (command_tx, mut command_rx) = mpsc::unbounded_channel();
        read_commands(session_id(), stream::iter(messages), command_tx).await;

        let mut turns = Vec::new();
        while let Some(SessionCommand::Turn(direction)) = command_rx.recv().await {
            turns.push(direction);
        }
        turns
    }

    #[tokio::test]
    async fn test_reader_skips_unknown_tokens_and_decodes_binary() {
        let turns = collect_turns(vec![
            text("UP"),
            text("JUMP"),
            text("left"),
            Ok(Message::Ping(Vec::new().into())),
            Ok(Message::Binary(b"LEFT".to_vec().into())),
            text("DOWN"),
        ])
        .await;

        assert_eq!(turns, vec![Direction::Up, Direction::Left, Direction::Down]);
    }

    #[tokio::test]
    async fn test_reader_stops_at_close_frame() {
        let turns = collect_turns(vec![
            text("RIGHT"),
            Ok(Message::Close(None)),
            text("UP"),
        ])
        .await;

        // recv() returned None above, so the sender was dropped.
        assert_eq!(turns, vec![Direction::Right]);
    }

    #[tokio::test]
    async fn test_reader_stops_on_read_error() {
        let turns = collect_turns(vec![
            text("DOWN"),
            Err("connection reset".to_string()),
            text("UP"),
        ])
        .await;

        assert_eq!(turns, vec![Direction::Down]);
    }

    #[tokio::test]
    async fn test_reader_stops_when_session_is_gone() {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        drop(command_rx);
        read_commands(session_id(), stream::iter(vec![text("UP"), text("DOWN")]), command_tx).await;
    }
}
