use super::error::GameError;
use super::snake::Coordinate;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

    /// Returns the unit vector (dx, dy) for moving in this direction
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        let (dx, dy) = self.vector();
        let (ox, oy) = other.vector();
        dx == -ox && dy == -oy
    }

    /// Inverse of [`Direction::vector`]
    pub fn from_vector(dx: i32, dy: i32) -> Result<Self, GameError> {
        match (dx, dy) {
            (0, -1) => Ok(Direction::Up),
            (0, 1) => Ok(Direction::Down),
            (-1, 0) => Ok(Direction::Left),
            (1, 0) => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirectionVector { dx, dy }),
        }
    }

    /// Direction of the single step leading from `from` to `to`
    pub fn between(from: Coordinate, to: Coordinate) -> Result<Self, GameError> {
        Self::from_vector(to.x - from.x, to.y - from.y)
    }
}
