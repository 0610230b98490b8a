use std::time::Duration;

pub const DEFAULT_BOARD_WIDTH: u32 = 30;
pub const DEFAULT_BOARD_HEIGHT: u32 = 20;
pub const DEFAULT_INITIAL_LENGTH: u32 = 3;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(120);

const MAX_BOARD_DIMENSION: u32 = 1000;
const MIN_TICK_INTERVAL: Duration = Duration::from_millis(10);
const MAX_TICK_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSessionSettings {
    pub board_width: u32,
    pub board_height: u32,
    pub initial_length: u32,
    pub tick_interval: Duration,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            initial_length: DEFAULT_INITIAL_LENGTH,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl SnakeSessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.board_width == 0 || self.board_width > MAX_BOARD_DIMENSION {
            return Err(format!(
                "Board width must be between 1 and {}, got {}",
                MAX_BOARD_DIMENSION, self.board_width
            ));
        }
        if self.board_height == 0 || self.board_height > MAX_BOARD_DIMENSION {
            return Err(format!(
                "Board height must be between 1 and {}, got {}",
                MAX_BOARD_DIMENSION, self.board_height
            ));
        }
        if self.initial_length == 0 {
            return Err("Initial length must be at least 1".to_string());
        }
        // The body extends left from the center column and must start on the board.
        let max_length = self.board_width / 2 + 1;
        if self.initial_length > max_length {
            return Err(format!(
                "Initial length {} does not fit a board {} cells wide (max {})",
                self.initial_length, self.board_width, max_length
            ));
        }
        if (self.board_width as u64) * (self.board_height as u64) <= self.initial_length as u64 {
            return Err("Board must leave at least one free cell for food".to_string());
        }
        if self.tick_interval < MIN_TICK_INTERVAL || self.tick_interval > MAX_TICK_INTERVAL {
            return Err(format!(
                "Tick interval must be between {}ms and {}ms, got {}ms",
                MIN_TICK_INTERVAL.as_millis(),
                MAX_TICK_INTERVAL.as_millis(),
                self.tick_interval.as_millis()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(width: u32, height: u32, initial_length: u32) -> SnakeSessionSettings {
        SnakeSessionSettings {
            board_width: width,
            board_height: height,
            initial_length,
            ..SnakeSessionSettings::default()
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(SnakeSessionSettings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(settings(0, 10, 1).validate().is_err());
        assert!(settings(10, 0, 1).validate().is_err());
    }

    #[test]
    fn test_initial_length_must_fit_left_of_center() {
        assert!(settings(10, 10, 6).validate().is_ok());
        assert!(settings(10, 10, 7).validate().is_err());
        assert!(settings(10, 10, 0).validate().is_err());
    }

    #[test]
    fn test_board_needs_a_free_cell() {
        assert!(settings(1, 1, 1).validate().is_err());
        assert!(settings(1, 2, 1).validate().is_ok());
    }

    #[test]
    fn test_tick_interval_range() {
        let mut s = SnakeSessionSettings::default();
        s.tick_interval = Duration::from_millis(5);
        assert!(s.validate().is_err());
        s.tick_interval = Duration::from_millis(6000);
        assert!(s.validate().is_err());
        s.tick_interval = Duration::from_millis(10);
        assert!(s.validate().is_ok());
    }
}
