//! Direction enum for snake movement

use super::location::Cell;

/// Direction of movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Moving up (decreasing y)
    Up,
    /// Moving right (increasing x)
    Right,
    /// Moving down (increasing y)
    Down,
    /// Moving left (decreasing x)
    Left,
}

impl Direction {
    /// All four directions, clockwise from `Up`
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The reverse direction
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Check if this direction is opposite to another
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Whether this direction runs along the x axis
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Direction of the step from `from` to `to`, if the cells are grid neighbours
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| from.adjacent(direction) == Some(to))
    }
}
