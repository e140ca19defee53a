/// Direction the snake can travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the per-frame velocity (dx, dy) for travelling at `speed` pixels
    pub fn velocity(&self, speed: i32) -> (i32, i32) {
        match self {
            Direction::Up => (0, -speed),
            Direction::Right => (speed, 0),
            Direction::Down => (0, speed),
            Direction::Left => (-speed, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn test_direction_velocity() {
        assert_eq!(Direction::Up.velocity(4), (0, -4));
        assert_eq!(Direction::Right.velocity(4), (4, 0));
        assert_eq!(Direction::Down.velocity(4), (0, 4));
        assert_eq!(Direction::Left.velocity(4), (-4, 0));
    }
}
