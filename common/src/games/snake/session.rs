use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::games::GameBroadcaster;
use crate::identifiers::SessionId;
use crate::{log, log_error};

use super::game::SnakeGame;
use super::types::{DeathReason, Direction, GameState};

pub enum SessionCommand {
    Turn(Direction),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver {
        state: GameState,
        score: u32,
        reason: Option<DeathReason>,
    },
    /// The input side hung up (peer disconnected or reader stopped).
    InputClosed { score: u32 },
    TransportFailed(String),
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives one game until it ends.
    ///
    /// The loop is the only owner of `game`: timer ticks and turn commands are
    /// handled one at a time, so a turn can never land in the middle of a tick.
    /// The first tick fires one interval after start. The broadcaster is only
    /// borrowed so the caller can still close the transport afterwards.
    pub async fn run<B: GameBroadcaster>(
        session_id: SessionId,
        mut game: SnakeGame,
        tick_interval: Duration,
        mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: &mut B,
    ) -> SessionEnd {
        let mut tick_timer = interval_at(Instant::now() + tick_interval, tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        log!(
            "[session:{}] started, seed {}, food at ({}, {})",
            session_id,
            game.seed(),
            game.food().x,
            game.food().y
        );

        loop {
            tokio::select! {
                _ = tick_timer.tick() => {
                    let score_before = game.score();
                    game.tick();
                    let snapshot = game.snapshot();

                    if snapshot.score != score_before {
                        log!(
                            "[session:{}] ate food. Score: {}, next food at ({}, {})",
                            session_id,
                            snapshot.score,
                            snapshot.food.x,
                            snapshot.food.y
                        );
                    }

                    if let Err(e) = broadcaster.broadcast_state(&snapshot).await {
                        log_error!("[session:{}] Error sending game state: {}", session_id, e);
                        return SessionEnd::TransportFailed(e);
                    }

                    if snapshot.game_state.is_terminal() {
                        let cause = game
                            .death_reason()
                            .map_or(snapshot.game_state.name(), |reason| reason.description());
                        log!(
                            "[session:{}] game over, snake {}. Score: {}",
                            session_id,
                            cause,
                            snapshot.score
                        );
                        return SessionEnd::GameOver {
                            state: snapshot.game_state,
                            score: snapshot.score,
                            reason: game.death_reason(),
                        };
                    }
                }
                command = command_rx.recv() => {
                    match command {
                        Some(SessionCommand::Turn(direction)) => game.set_direction(direction),
                        None => {
                            log!("[session:{}] input closed. Score: {}", session_id, game.score());
                            return SessionEnd::InputClosed { score: game.score() };
                        }
                    }
                }
            }
        }
    }
}
