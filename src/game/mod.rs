//! Game module

pub mod collision;
pub mod direction;
pub mod food;
pub mod game_loop;
pub mod location;
pub mod ring;
pub mod snake;

pub use direction::Direction;
pub use food::Food;
pub use location::Cell;
pub use snake::Snake;
