use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    #[serde(rename = "X")]
    pub x: i32,
    #[serde(rename = "Y")]
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    /// Screen coordinates: y grows downwards.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parses a client command token. Tokens are case-sensitive.
    pub fn from_command(token: &str) -> Option<Self> {
        match token {
            "UP" => Some(Direction::Up),
            "DOWN" => Some(Direction::Down),
            "LEFT" => Some(Direction::Left),
            "RIGHT" => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameState {
    Running,
    Lost,
    /// Reserved for a full-board win; no transition produces it.
    Won,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::Running)
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameState::Running => "Running",
            GameState::Lost => "Lost",
            GameState::Won => "Won",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

impl DeathReason {
    pub fn description(&self) -> &'static str {
        match self {
            DeathReason::WallCollision => "hit the wall",
            DeathReason::SelfCollision => "ran into itself",
        }
    }
}
