//! Collision detection logic

use super::direction::Direction;
use super::location::Cell;
use super::snake::Snake;

/// Check whether one step from `head` in `direction` leaves a `width` x `height` grid
pub fn would_exit_bounds(head: Cell, direction: Direction, width: u8, height: u8) -> bool {
    match direction {
        Direction::Up => head.y == 0,
        Direction::Down => head.y.saturating_add(1) >= height,
        Direction::Left => head.x == 0,
        Direction::Right => head.x.saturating_add(1) >= width,
    }
}

/// Check whether `candidate` lands on any segment of the snake
pub fn food_overlaps_snake(candidate: Cell, snake: &Snake) -> bool {
    snake.iter().any(|segment| segment == candidate)
}
