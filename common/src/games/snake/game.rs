use crate::games::SessionRng;

use super::board::Board;
use super::settings::SnakeSessionSettings;
use super::snake::Snake;
use super::snapshot::SnakeSnapshot;
use super::types::{DeathReason, Direction, GameState, Point};

/// Random draws before food placement falls back to scanning the free cells.
pub const FOOD_SAMPLE_ATTEMPTS: usize = 1000;

/// Single-player session state: board, snake, food, score and lifecycle.
///
/// `tick` and `set_direction` take `&mut self`, so whoever owns the game
/// decides how the two are serialized. See `SnakeSession` for the actor that
/// does this for a live connection.
pub struct SnakeGame {
    board: Board,
    snake: Snake,
    food: Point,
    state: GameState,
    score: u32,
    death_reason: Option<DeathReason>,
    rng: SessionRng,
}

impl SnakeGame {
    /// Expects settings that passed `SnakeSessionSettings::validate`.
    pub fn new(settings: &SnakeSessionSettings, rng: SessionRng) -> Self {
        let board = Board::new(settings.board_width as i32, settings.board_height as i32);
        let start = Point::new(board.width() / 2, board.height() / 2);
        let snake = Snake::new(start, settings.initial_length as usize, Direction::Right);

        let mut game = Self {
            board,
            snake,
            food: start,
            state: GameState::Running,
            score: 0,
            death_reason: None,
            rng,
        };
        game.spawn_food();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn tick(&mut self) {
        if self.state != GameState::Running {
            return;
        }

        let next_head = self.snake.advance();

        // The body is left in its post-move position once the game is lost.
        if self.board.is_out_of_bounds(next_head) {
            self.lose(DeathReason::WallCollision);
            return;
        }

        if self.snake.check_self_collision() {
            self.lose(DeathReason::SelfCollision);
            return;
        }

        if next_head == self.food {
            self.score += 1;
            self.snake.grow(1);
            self.spawn_food();
        }
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if self.state == GameState::Running {
            self.snake.set_direction(direction);
        }
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            board_width: self.board.width(),
            board_height: self.board.height(),
            snake_body: self.snake.body().collect(),
            food: self.food,
            score: self.score,
            game_state: self.state,
        }
    }

    fn lose(&mut self, reason: DeathReason) {
        self.state = GameState::Lost;
        self.death_reason = Some(reason);
    }

    /// Leaves the food in place when every cell is occupied; the next move then
    /// necessarily ends the game.
    fn spawn_food(&mut self) {
        if let Some(p) = self.pick_free_cell() {
            self.food = p;
        }
    }

    fn pick_free_cell(&mut self) -> Option<Point> {
        for _ in 0..FOOD_SAMPLE_ATTEMPTS {
            let p = Point::new(
                self.rng.random_range(0..self.board.width()),
                self.rng.random_range(0..self.board.height()),
            );
            if !self.snake.is_on_snake(p) {
                return Some(p);
            }
        }

        let mut free = Vec::with_capacity(
            self.board.cell_count().saturating_sub(self.snake.len()),
        );
        free.extend(self.board.cells().filter(|p| !self.snake.is_on_snake(*p)));
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.random_range(0..free.len())])
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Point) {
        self.food = food;
    }

    #[cfg(test)]
    fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }
}
