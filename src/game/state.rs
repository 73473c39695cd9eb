use rand::Rng;

use super::direction::Direction;

/// A cell on the game grid, as (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move position by delta.
    pub fn moved_by(&self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }
}

/// The snake: body segments ordered tail to head, plus the current heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, tail at index 0, head last. Never empty.
    pub body: Vec<Position>,
    /// Current direction of movement.
    pub direction: Direction,
}

impl Snake {
    /// Create a snake from an initial body (tail to head) and heading.
    pub fn new(body: Vec<Position>, direction: Direction) -> Self {
        Self { body, direction }
    }

    /// Get the head position.
    pub fn head(&self) -> Position {
        *self.body.last().unwrap()
    }

    /// Where the head lands next, before any wrapping. May be off the board;
    /// the caller wraps it.
    pub fn next_step(&self) -> Position {
        let (drow, dcol) = self.direction.delta();
        self.head().moved_by(drow, dcol)
    }

    /// Replace the heading unconditionally. Reversing straight into the body
    /// is allowed; it just ends the game on the next turn.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advance by appending `position` as the new head. When not growing,
    /// the tail segment vacates.
    pub fn take_step(&mut self, position: Position, grow: bool) {
        if !grow {
            self.body.remove(0);
        }
        self.body.push(position);
    }

    /// Check whether moving the head to `position` would hit the body.
    ///
    /// The current tail is excluded: it will have vacated by the time the
    /// head arrives, so stepping onto it is safe.
    pub fn would_collide(&self, position: Position) -> bool {
        self.body[1..].contains(&position)
    }

    /// Get the length of the snake.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice).
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// The apple. One position, relocated uniformly at random when eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub position: Position,
}

impl Apple {
    /// Create an apple at a random position within the board.
    pub fn new<R: Rng>(height: i32, width: i32, rng: &mut R) -> Self {
        let mut apple = Self {
            position: Position::new(0, 0),
        };
        apple.set_random_position(height, width, rng);
        apple
    }

    /// Re-sample the position, each axis independently. No exclusions: the
    /// apple may land on the snake body or on its own previous cell.
    pub fn set_random_position<R: Rng>(&mut self, height: i32, width: i32, rng: &mut R) {
        let row = rng.gen_range(0..height);
        let col = rng.gen_range(0..width);
        self.position = Position::new(row, col);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(2, 3);
        assert_eq!(pos.moved_by(1, 0), Position::new(3, 3));
        assert_eq!(pos.moved_by(-1, 0), Position::new(1, 3));
        assert_eq!(pos.moved_by(0, 1), Position::new(2, 4));
        assert_eq!(pos.moved_by(0, -1), Position::new(2, 2));
    }

    #[test]
    fn test_head_is_last_segment() {
        let snake = Snake::new(
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
            Direction::Down,
        );
        assert_eq!(snake.head(), Position::new(0, 2));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_next_step_unwrapped() {
        // 5x5 scenario: body tail-to-head along row 0, heading Down.
        let snake = Snake::new(
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
            Direction::Down,
        );
        assert_eq!(snake.next_step(), Position::new(1, 2));
    }

    #[test]
    fn test_take_step_grow() {
        let mut snake = Snake::new(
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
            Direction::Down,
        );
        snake.take_step(Position::new(1, 2), true);
        assert_eq!(
            snake.body,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 2)
            ]
        );
    }

    #[test]
    fn test_take_step_shift() {
        let mut snake = Snake::new(
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
            Direction::Down,
        );
        snake.take_step(Position::new(1, 2), false);
        assert_eq!(
            snake.body,
            vec![Position::new(0, 1), Position::new(0, 2), Position::new(1, 2)]
        );
        assert_eq!(snake.head(), Position::new(1, 2));
    }

    #[test]
    fn test_collision_excludes_tail() {
        let snake = Snake::new(
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
            Direction::Down,
        );
        // Tail cell vacates this turn, so it is safe.
        assert!(!snake.would_collide(Position::new(0, 0)));
        assert!(snake.would_collide(Position::new(0, 1)));
        assert!(snake.would_collide(Position::new(0, 2)));
        assert!(!snake.would_collide(Position::new(4, 4)));
    }

    #[test]
    fn test_reversal_is_accepted() {
        let mut snake = Snake::new(
            vec![Position::new(0, 0), Position::new(0, 1)],
            Direction::Left,
        );
        snake.set_direction(Direction::Right);
        assert_eq!(snake.direction, Direction::Right);
    }

    #[test]
    fn test_apple_deterministic_spawn() {
        // An all-zeros random source pins the apple to (0, 0) on a 3x3 board.
        let mut rng = StepRng::new(0, 0);
        let mut apple = Apple::new(3, 3, &mut rng);
        assert_eq!(apple.position, Position::new(0, 0));

        apple.set_random_position(3, 3, &mut rng);
        assert_eq!(apple.position, Position::new(0, 0));
    }

    #[test]
    fn test_apple_spawns_in_bounds() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let apple = Apple::new(4, 7, &mut rng);
            assert!(apple.position.row >= 0 && apple.position.row < 4);
            assert!(apple.position.col >= 0 && apple.position.col < 7);
        }
    }
}
