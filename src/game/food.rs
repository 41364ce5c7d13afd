//! Food entity - spawns randomly on a free cell

use rand::Rng;

use super::collision::food_overlaps_snake;
use super::location::Cell;
use super::snake::Snake;

/// The food block on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    /// Position of the food
    pub location: Cell,
}

impl Food {
    /// Create food at a specific location
    pub fn at(location: Cell) -> Self {
        Self { location }
    }

    /// Check if a location matches the food position
    pub fn is_at(&self, cell: Cell) -> bool {
        self.location == cell
    }

    /// Place food on a random cell not covered by `snake`.
    ///
    /// Rejection sampling with no retry cap: the expected number of draws grows
    /// as the snake fills the grid. Returns `None` only when no free cell is left.
    pub fn respawn<R: Rng + ?Sized>(
        rng: &mut R,
        width: u8,
        height: u8,
        snake: &Snake,
    ) -> Option<Food> {
        if snake.len() >= usize::from(width) * usize::from(height) {
            return None;
        }

        loop {
            let candidate = Cell::random(rng, width, height);
            if !food_overlaps_snake(candidate, snake) {
                return Some(Food::at(candidate));
            }
        }
    }
}
