//! Cell coordinates on the game grid

use rand::Rng;

use super::direction::Direction;

/// A position on the game grid, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
}

impl Cell {
    /// Create a new cell
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// The cell one step away in `direction`.
    /// Returns `None` if a coordinate would drop below zero or overflow `u8`;
    /// the upper grid bound is not checked here.
    pub fn adjacent(&self, direction: Direction) -> Option<Cell> {
        let x = match direction {
            Direction::Left => self.x.checked_sub(1)?,
            Direction::Right => self.x.checked_add(1)?,
            Direction::Up | Direction::Down => self.x,
        };
        let y = match direction {
            Direction::Up => self.y.checked_sub(1)?,
            Direction::Down => self.y.checked_add(1)?,
            Direction::Left | Direction::Right => self.y,
        };
        Some(Cell::new(x, y))
    }

    /// Whether the cell lies inside a `width` x `height` grid
    pub fn is_within(&self, width: u8, height: u8) -> bool {
        self.x < width && self.y < height
    }

    /// Uniformly random cell on a `width` x `height` grid
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: u8, height: u8) -> Self {
        Cell::new(rng.gen_range(0..width), rng.gen_range(0..height))
    }
}
