//! Game configuration constants

use std::time::Duration;

use crate::error::GameError;
use crate::render::Color;

/// Grid width in cells
pub const GRID_WIDTH: u8 = 15;

/// Grid height in cells
pub const GRID_HEIGHT: u8 = 10;

/// Cell size in rendering units
pub const CELL_SIZE: u16 = 16;

/// Frame period in milliseconds
pub const FRAME_PERIOD_MS: u64 = 200;

/// A frame this many periods late snaps the scheduler to "now" instead of catching up
pub const CATCH_UP_FACTOR: u32 = 2;

/// Smallest cell that still shows something after the one-unit inset on each side
pub const MIN_CELL_SIZE: u16 = 3;

/// Largest accepted cell size
pub const MAX_CELL_SIZE: u16 = 64;

/// Largest playfield side in rendering units
pub const MAX_PLAYFIELD_SIZE: u32 = 4096;

// =============================================================================
// Colors
// =============================================================================

/// Background fill
pub const BACKGROUND_COLOR: Color = Color::rgb(0x00, 0x00, 0x00);

/// Snake body
pub const SNAKE_COLOR: Color = Color::rgb(0x00, 0xFF, 0x00);

/// Food block
pub const FOOD_COLOR: Color = Color::rgb(0xFF, 0x00, 0x00);

// =============================================================================
// Terminal front-end
// =============================================================================

/// Rendering units per terminal column
pub const TERMINAL_SAMPLE_X: u16 = 4;

/// Rendering units per half-block row (two per terminal line)
pub const TERMINAL_SAMPLE_Y: u16 = 4;

// =============================================================================
// Logging
// =============================================================================

/// Log file path (the terminal itself is owned by the game)
pub const LOG_FILE: &str = "ring-snake.log";

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "ring_snake=debug";

/// Gameplay configuration, fixed for the lifetime of a [`GameState`](crate::state::GameState)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Grid width in cells
    pub grid_width: u8,
    /// Grid height in cells
    pub grid_height: u8,
    /// Cell size in rendering units
    pub cell_size: u16,
    /// Time between two updates
    pub frame_period: Duration,
}

impl GameConfig {
    /// Create a validated configuration
    pub fn new(
        grid_width: u8,
        grid_height: u8,
        cell_size: u16,
        frame_period: Duration,
    ) -> Result<Self, GameError> {
        if grid_width == 0 || grid_height == 0 {
            return Err(GameError::Config(format!(
                "grid must be at least 1x1, got {}x{}",
                grid_width, grid_height
            )));
        }
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&cell_size) {
            return Err(GameError::Config(format!(
                "cell size must be between {} and {}, got {}",
                MIN_CELL_SIZE, MAX_CELL_SIZE, cell_size
            )));
        }
        if frame_period.is_zero() {
            return Err(GameError::Config("frame period must be non-zero".into()));
        }

        let config = Self {
            grid_width,
            grid_height,
            cell_size,
            frame_period,
        };
        let (width, height) = (config.pixel_width(), config.pixel_height());
        if width > MAX_PLAYFIELD_SIZE || height > MAX_PLAYFIELD_SIZE {
            return Err(GameError::Config(format!(
                "playfield {}x{} exceeds {} units per side",
                width, height, MAX_PLAYFIELD_SIZE
            )));
        }
        Ok(config)
    }

    /// Number of cells on the grid, which is also the maximum snake length
    pub fn cell_count(&self) -> usize {
        usize::from(self.grid_width) * usize::from(self.grid_height)
    }

    /// Playfield width in rendering units
    pub fn pixel_width(&self) -> u32 {
        u32::from(self.grid_width) * u32::from(self.cell_size)
    }

    /// Playfield height in rendering units
    pub fn pixel_height(&self) -> u32 {
        u32::from(self.grid_height) * u32::from(self.cell_size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            frame_period: Duration::from_millis(FRAME_PERIOD_MS),
        }
    }
}
