use std::collections::VecDeque;

use super::types::{Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    direction: Direction,
    pending_growth: u32,
}

impl Snake {
    /// Head at `start`, the rest laid out to its left: `(start.x - i, start.y)`.
    pub fn new(start: Point, initial_length: usize, direction: Direction) -> Self {
        let length = initial_length.max(1);
        let body = (0..length as i32)
            .map(|i| Point::new(start.x - i, start.y))
            .collect();

        Self {
            body,
            direction,
            pending_growth: 0,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    #[cfg(test)]
    fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// Head first.
    pub fn body(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// Pushes a new head one cell ahead and drops the tail unless growth is pending.
    /// Bounds and collisions are left to the caller.
    pub fn advance(&mut self) -> Point {
        let next = self.head().step(self.direction);
        self.body.push_front(next);

        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop_back();
        }

        next
    }

    /// A reversal is ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.direction) {
            self.direction = direction;
        }
    }

    pub fn grow(&mut self, amount: u32) {
        self.pending_growth += amount;
    }

    pub fn check_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|p| *p == head)
    }

    pub fn is_on_snake(&self, p: Point) -> bool {
        self.body.contains(&p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_at_center() -> Snake {
        Snake::new(Point::new(5, 5), 3, Direction::Right)
    }

    #[test]
    fn test_new_lays_body_left_of_head() {
        let snake = snake_at_center();
        let body: Vec<Point> = snake.body().collect();
        assert_eq!(body, vec![Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)]);
        assert_eq!(snake.head(), Point::new(5, 5));
        assert_eq!(snake.tail(), Point::new(3, 5));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_new_never_builds_empty_body() {
        let snake = Snake::new(Point::new(2, 2), 0, Direction::Right);
        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_advance_keeps_length_without_growth() {
        let mut snake = snake_at_center();
        let head = snake.advance();
        assert_eq!(head, Point::new(6, 5));
        let body: Vec<Point> = snake.body().collect();
        assert_eq!(body, vec![Point::new(6, 5), Point::new(5, 5), Point::new(4, 5)]);
    }

    #[test]
    fn test_growth_is_realized_one_segment_per_move() {
        let mut snake = snake_at_center();
        snake.grow(2);
        assert_eq!(snake.len(), 3);

        snake.advance();
        assert_eq!(snake.len(), 4);
        snake.advance();
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.pending_growth(), 0);

        snake.advance();
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn test_set_direction_rejects_only_reversal() {
        for current in Direction::ALL {
            for requested in Direction::ALL {
                let mut snake = Snake::new(Point::new(5, 5), 1, current);
                snake.set_direction(requested);
                let expected = if requested.is_opposite(&current) {
                    current
                } else {
                    requested
                };
                assert_eq!(snake.direction(), expected, "{:?} -> {:?}", current, requested);
            }
        }
    }

    #[test]
    fn test_self_collision_on_tight_turn() {
        let mut snake = Snake::new(Point::new(5, 5), 5, Direction::Right);
        snake.set_direction(Direction::Up);
        snake.advance();
        snake.set_direction(Direction::Left);
        snake.advance();
        assert!(!snake.check_self_collision());
        snake.set_direction(Direction::Down);
        snake.advance();
        assert!(snake.check_self_collision());
    }

    #[test]
    fn test_moving_into_vacated_tail_is_not_a_collision() {
        // A 2x2 loop of four segments chases its own tail.
        let mut snake = Snake::new(Point::new(5, 5), 4, Direction::Right);
        snake.set_direction(Direction::Up);
        snake.advance();
        snake.set_direction(Direction::Left);
        snake.advance();
        snake.set_direction(Direction::Down);
        snake.advance();
        assert_eq!(snake.head(), Point::new(4, 5));
        assert!(!snake.check_self_collision());
    }

    #[test]
    fn test_is_on_snake_includes_head() {
        let snake = snake_at_center();
        assert!(snake.is_on_snake(Point::new(5, 5)));
        assert!(snake.is_on_snake(Point::new(3, 5)));
        assert!(!snake.is_on_snake(Point::new(2, 5)));
        assert!(!snake.is_on_snake(Point::new(5, 4)));
    }
}
