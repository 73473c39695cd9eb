/// Direction the snake can move.
///
/// The row/col deltas reproduce the original rule set: `Left` increases the
/// column and `Right` decreases it. The names only have to stay consistent
/// with the `u`/`d`/`l`/`r` tokens and the rendering, and they do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the (row, col) delta for one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, 1),
            Direction::Right => (0, -1),
        }
    }

    /// Maps an input token to a direction. Anything outside `u`/`d`/`l`/`r`
    /// is not a steering command and yields `None`.
    pub fn from_token(token: char) -> Option<Direction> {
        match token {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, 1));
        assert_eq!(Direction::Right.delta(), (0, -1));
    }

    #[test]
    fn test_token_mapping() {
        assert_eq!(Direction::from_token('u'), Some(Direction::Up));
        assert_eq!(Direction::from_token('d'), Some(Direction::Down));
        assert_eq!(Direction::from_token('l'), Some(Direction::Left));
        assert_eq!(Direction::from_token('r'), Some(Direction::Right));
    }

    #[test]
    fn test_unrecognized_tokens() {
        assert_eq!(Direction::from_token('x'), None);
        assert_eq!(Direction::from_token('U'), None);
        assert_eq!(Direction::from_token(' '), None);
    }
}
