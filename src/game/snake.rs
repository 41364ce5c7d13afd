//! Snake body: a bounded deque over a ring buffer

use super::direction::Direction;
use super::location::Cell;
use super::ring::{Cursor, RingBuffer};
use crate::error::GameError;

/// The snake's body.
///
/// Segments live in a [`RingBuffer`] between two cursors. The head grows
/// backwards through the ring with `prev`, and the tail follows it the same
/// way, so walking from head to tail with `next` visits every live segment
/// exactly once.
#[derive(Debug, Clone)]
pub struct Snake {
    /// Backing storage, one slot per grid cell
    ring: RingBuffer<Cell>,
    /// Slot of the leading segment
    head: Cursor,
    /// Slot of the trailing segment
    tail: Cursor,
}

impl Snake {
    /// Allocate storage for `capacity` segments and place a single segment at the origin
    pub fn with_capacity(capacity: usize) -> Result<Self, GameError> {
        let ring = RingBuffer::with_capacity(capacity)?;
        let first = ring.first();
        Ok(Self {
            ring,
            head: first,
            tail: first,
        })
    }

    /// Restart as a single segment at `head`, reusing the same storage
    pub fn reset(&mut self, head: Cell) {
        self.head = self.ring.first();
        self.tail = self.head;
        self.ring[self.head] = head;
    }

    /// Rebuild the body from `segments`, head first.
    /// Only the length is checked; placement rules belong to the caller.
    pub fn rebuild(&mut self, segments: &[Cell]) -> Result<(), GameError> {
        let (&tail, rest) = segments
            .split_last()
            .ok_or_else(|| GameError::Layout("snake needs at least one segment".into()))?;
        if segments.len() > self.capacity() {
            return Err(GameError::Layout(format!(
                "{} segments exceed capacity {}",
                segments.len(),
                self.capacity()
            )));
        }

        self.reset(tail);
        for &segment in rest.iter().rev() {
            self.head = self.ring.prev(self.head);
            self.ring[self.head] = segment;
        }
        Ok(())
    }

    /// Get the snake's head location
    pub fn head(&self) -> Cell {
        self.ring[self.head]
    }

    /// Get the snake's last segment
    pub fn tail(&self) -> Cell {
        self.ring[self.tail]
    }

    /// Number of live segments, in `[1, capacity]`
    pub fn len(&self) -> usize {
        let capacity = self.capacity();
        (self.tail + capacity - self.head) % capacity + 1
    }

    /// A snake always has at least its head
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Maximum number of segments
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Push a new head one cell away in `direction`.
    ///
    /// The caller checks the grid bounds first; a step below zero means that
    /// check was skipped.
    pub fn advance(&mut self, direction: Direction) -> Result<Cell, GameError> {
        let current = self.head();
        let next = current.adjacent(direction).ok_or_else(|| {
            GameError::Invariant(format!(
                "advancing {:?} from {:?} leaves the grid",
                direction, current
            ))
        })?;

        self.head = self.ring.prev(self.head);
        self.ring[self.head] = next;
        Ok(next)
    }

    /// Whether the head sits on `food`
    pub fn did_eat_food(&self, food: Cell) -> bool {
        self.head() == food
    }

    /// Drop the last segment by moving the tail one slot toward the head
    pub fn retract(&mut self) {
        self.tail = self.ring.prev(self.tail);
    }

    /// Whether the head overlaps any other segment
    pub fn self_collides(&self) -> bool {
        if self.head == self.tail {
            return false;
        }
        let head = self.head();
        self.iter().skip(1).any(|segment| segment == head)
    }

    /// Iterate over segments from head to tail
    pub fn iter(&self) -> Segments<'_> {
        Segments {
            snake: self,
            cursor: Some(self.head),
        }
    }
}

/// Iterator over the live segments of a [`Snake`], head first
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    snake: &'a Snake,
    cursor: Option<Cursor>,
}

impl Iterator for Segments<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let cursor = self.cursor?;
        self.cursor = if cursor == self.snake.tail {
            None
        } else {
            Some(self.snake.ring.next(cursor))
        };
        Some(self.snake.ring[cursor])
    }
}

impl<'a> IntoIterator for &'a Snake {
    type Item = Cell;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Segments<'a> {
        self.iter()
    }
}
