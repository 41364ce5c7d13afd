//! Grid snake game: a ring-buffer body, collision rules, food placement and a
//! fixed-timestep loop driving a playing/crashed state machine.

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod state;
pub mod term;

pub use config::GameConfig;
pub use error::GameError;
pub use game::game_loop::{run, FrameScheduler, Tick};
pub use game::{Cell, Direction, Food, Snake};
pub use input::{InputEvent, InputSource, Key};
pub use render::{draw, Color, Rect, Renderer};
pub use state::{Control, GameState, Phase};
