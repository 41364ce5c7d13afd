//! Game state and the playing/crashed state machine

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::collision::would_exit_bounds;
use crate::game::{Cell, Direction, Food, Snake};
use crate::input::{InputEvent, InputSource};

/// Whether the snake is still moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Crashed,
}

/// What the frame loop should do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Everything one game needs, created once and restarted in place
#[derive(Debug)]
pub struct GameState<R> {
    config: GameConfig,
    snake: Snake,
    /// `None` only when the snake covers the whole grid
    food: Option<Food>,
    direction: Direction,
    phase: Phase,
    rng: R,
}

impl<R: Rng> GameState<R> {
    /// Allocate the snake storage once and start the first game
    pub fn new(config: GameConfig, rng: R) -> Result<Self, GameError> {
        let snake = Snake::with_capacity(config.cell_count())?;
        let mut state = Self {
            config,
            snake,
            food: None,
            direction: Direction::Right,
            phase: Phase::Playing,
            rng,
        };
        state.restart();
        Ok(state)
    }

    /// Start a new game: random head, facing the wider side, fresh food
    pub fn restart(&mut self) {
        let (width, height) = (self.config.grid_width, self.config.grid_height);
        let head = Cell::random(&mut self.rng, width, height);
        self.snake.reset(head);
        self.respawn_food();
        self.phase = Phase::Playing;

        self.direction = if head.x > width / 2 {
            Direction::Left
        } else {
            Direction::Right
        };

        info!("New game: head at ({}, {}) facing {:?}", head.x, head.y, self.direction);
    }

    /// Load a prepared position, head first.
    ///
    /// Every segment must be on the grid, appear once and neighbour the next
    /// one. `direction` must not lead back into the second segment, and the
    /// food must be on a free cell.
    pub fn place(
        &mut self,
        segments: &[Cell],
        direction: Direction,
        food: Option<Cell>,
    ) -> Result<(), GameError> {
        let (width, height) = (self.config.grid_width, self.config.grid_height);

        if let Some(cell) = segments.iter().find(|c| !c.is_within(width, height)) {
            return Err(GameError::Layout(format!("segment {:?} is off the grid", cell)));
        }
        if let Some(pair) = segments
            .windows(2)
            .find(|pair| Direction::between(pair[0], pair[1]).is_none())
        {
            return Err(GameError::Layout(format!(
                "segments {:?} and {:?} are not neighbours",
                pair[0], pair[1]
            )));
        }
        let mut seen = HashSet::with_capacity(segments.len());
        if let Some(cell) = segments.iter().find(|&&cell| !seen.insert(cell)) {
            return Err(GameError::Layout(format!("segment {:?} appears twice", cell)));
        }
        if let [head, neck, ..] = segments {
            if head.adjacent(direction) == Some(*neck) {
                return Err(GameError::Layout(format!(
                    "heading {:?} from {:?} runs back into the body",
                    direction, head
                )));
            }
        }
        if let Some(food) = food {
            if !food.is_within(width, height) || segments.contains(&food) {
                return Err(GameError::Layout(format!("food {:?} is not on a free cell", food)));
            }
        }

        self.snake.rebuild(segments)?;
        self.food = food.map(Food::at);
        self.direction = direction;
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Run one tick: read input, then move the snake if it is still playing
    pub fn update<I>(&mut self, input: &mut I) -> Result<Control, GameError>
    where
        I: InputSource + ?Sized,
    {
        while let Some(event) = input.poll()? {
            let key = match event {
                InputEvent::Quit => return Ok(Control::Quit),
                InputEvent::KeyDown(key) if key.is_quit() => return Ok(Control::Quit),
                InputEvent::KeyDown(key) => key,
            };

            if self.phase == Phase::Crashed {
                self.restart();
                return Ok(Control::Continue);
            }

            // One direction change per tick; later events wait for the next one.
            if let Some(direction) = key.direction() {
                if self.steer(direction) {
                    break;
                }
            }
        }

        if self.phase == Phase::Playing {
            self.step()?;
        }
        Ok(Control::Continue)
    }

    /// Turn toward `direction` unless that reverses the snake
    pub fn steer(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) {
            return false;
        }
        if direction != self.direction {
            debug!("Direction {:?} -> {:?}", self.direction, direction);
        }
        self.direction = direction;
        true
    }

    /// Move the snake one cell, eating, growing and crashing as needed
    pub fn step(&mut self) -> Result<(), GameError> {
        let (width, height) = (self.config.grid_width, self.config.grid_height);

        if would_exit_bounds(self.snake.head(), self.direction, width, height) {
            warn!("Crashed into the wall at length {}", self.snake.len());
            self.phase = Phase::Crashed;
            return Ok(());
        }

        let head = self.snake.advance(self.direction)?;
        let ate = self.food.map_or(false, |food| self.snake.did_eat_food(food.location));
        if ate {
            debug!("Ate food at ({}, {}), length {}", head.x, head.y, self.snake.len());
            self.respawn_food();
        } else {
            self.snake.retract();
        }

        if self.snake.self_collides() {
            warn!("Crashed into itself at length {}", self.snake.len());
            self.phase = Phase::Crashed;
        }
        Ok(())
    }

    fn respawn_food(&mut self) {
        self.food = Food::respawn(
            &mut self.rng,
            self.config.grid_width,
            self.config.grid_height,
            &self.snake,
        );
        if self.food.is_none() {
            info!("The snake covers the whole grid, no room for food");
        }
    }
}

impl<R> GameState<R> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Food> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_crashed(&self) -> bool {
        self.phase == Phase::Crashed
    }
}
