//! Drawing the game onto a rectangle-filling surface

use crate::config::{BACKGROUND_COLOR, FOOD_COLOR, SNAKE_COLOR};
use crate::error::GameError;
use crate::game::{Cell, Direction};
use crate::state::GameState;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// An axis-aligned rectangle in rendering units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Shrink by one unit on every side
    pub fn inset(self) -> Self {
        Self {
            x: self.x + 1,
            y: self.y + 1,
            width: self.width.saturating_sub(2),
            height: self.height.saturating_sub(2),
        }
    }
}

/// A draw target
pub trait Renderer {
    /// Fill `rect` with `color`
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), GameError>;

    /// Show everything drawn since the last call
    fn present(&mut self) -> Result<(), GameError>;
}

/// Draw one frame: background, snake, food (unless crashed), then present
pub fn draw<R, D: Renderer + ?Sized>(
    state: &GameState<R>,
    renderer: &mut D,
) -> Result<(), GameError> {
    let config = state.config();
    let cell_size = u32::from(config.cell_size);

    renderer.fill_rect(
        Rect::new(0, 0, config.pixel_width(), config.pixel_height()),
        BACKGROUND_COLOR,
    )?;

    // Two segments at a time so the link between them is filled too
    let mut segments = state.snake().iter().peekable();
    while let Some(segment) = segments.next() {
        let rect = match segments.peek() {
            Some(&following) => link_rect(segment, following, cell_size)?,
            None => cell_rect(segment, cell_size),
        };
        renderer.fill_rect(rect.inset(), SNAKE_COLOR)?;
    }

    if !state.is_crashed() {
        if let Some(food) = state.food() {
            renderer.fill_rect(cell_rect(food.location, cell_size).inset(), FOOD_COLOR)?;
        }
    }

    renderer.present()
}

/// The full rectangle covered by `cell`
fn cell_rect(cell: Cell, cell_size: u32) -> Rect {
    Rect::new(
        i32::from(cell.x) * cell_size as i32,
        i32::from(cell.y) * cell_size as i32,
        cell_size,
        cell_size,
    )
}

/// The rectangle covering two neighbouring segments
fn link_rect(from: Cell, to: Cell, cell_size: u32) -> Result<Rect, GameError> {
    let direction = Direction::between(from, to).ok_or_else(|| {
        GameError::Invariant(format!("segments {:?} and {:?} are not neighbours", from, to))
    })?;

    let origin = match direction {
        Direction::Right | Direction::Down => from,
        Direction::Left | Direction::Up => to,
    };
    let mut rect = cell_rect(origin, cell_size);
    if direction.is_horizontal() {
        rect.width *= 2;
    } else {
        rect.height *= 2;
    }
    Ok(rect)
}
