//! Input events consumed by the game

use std::collections::VecDeque;

use crate::error::GameError;
use crate::game::direction::Direction;

/// Keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Escape,
    Q,
    /// Any other key: ignored while playing, restarts after a crash
    Other,
}

impl Key {
    /// The direction an arrow key asks for
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Escape | Key::Q | Key::Other => None,
        }
    }

    /// Whether the key ends the game
    pub fn is_quit(self) -> bool {
        matches!(self, Key::Escape | Key::Q)
    }
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window or terminal asked to close
    Quit,
    /// A key was pressed
    KeyDown(Key),
}

/// A producer of input events, polled without blocking
pub trait InputSource {
    /// Take the next pending event, or `None` when the queue is empty
    fn poll(&mut self) -> Result<Option<InputEvent>, GameError>;
}

/// A pre-filled queue, for scripted play
impl InputSource for VecDeque<InputEvent> {
    fn poll(&mut self) -> Result<Option<InputEvent>, GameError> {
        Ok(self.pop_front())
    }
}
