//! Fixed-capacity ring of slots addressed by cursor

use std::ops::{Index, IndexMut};

use crate::error::GameError;

/// A position inside a [`RingBuffer`]
pub type Cursor = usize;

/// Fixed-capacity circular storage.
///
/// The backing block is allocated once and never resized. Cursors step with
/// [`next`](RingBuffer::next) and [`prev`](RingBuffer::prev), wrapping across the
/// `first`/`last` boundary.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Vec<T>,
}

impl<T: Copy + Default> RingBuffer<T> {
    /// Allocate exactly `count` slots
    pub fn with_capacity(count: usize) -> Result<Self, GameError> {
        if count == 0 {
            return Err(GameError::EmptyRing);
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(count)
            .map_err(|source| GameError::Allocation { count, source })?;
        slots.resize(count, T::default());

        Ok(Self { slots })
    }
}

impl<T> RingBuffer<T> {
    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Cursor of the first slot
    pub fn first(&self) -> Cursor {
        0
    }

    /// Cursor of the last slot
    pub fn last(&self) -> Cursor {
        self.slots.len() - 1
    }

    /// Step one slot forward, wrapping from `last` to `first`
    pub fn next(&self, cursor: Cursor) -> Cursor {
        debug_assert!(cursor < self.slots.len(), "cursor {} out of ring", cursor);
        if cursor >= self.last() {
            self.first()
        } else {
            cursor + 1
        }
    }

    /// Step one slot backward, wrapping from `first` to `last`
    pub fn prev(&self, cursor: Cursor) -> Cursor {
        debug_assert!(cursor < self.slots.len(), "cursor {} out of ring", cursor);
        if cursor == self.first() {
            self.last()
        } else {
            cursor - 1
        }
    }
}

impl<T> Index<Cursor> for RingBuffer<T> {
    type Output = T;

    fn index(&self, cursor: Cursor) -> &T {
        &self.slots[cursor]
    }
}

impl<T> IndexMut<Cursor> for RingBuffer<T> {
    fn index_mut(&mut self, cursor: Cursor) -> &mut T {
        &mut self.slots[cursor]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocates_exact_capacity() {
        let ring: RingBuffer<u16> = RingBuffer::with_capacity(150).unwrap();
        assert_eq!(ring.capacity(), 150);
        assert_eq!(ring.first(), 0);
        assert_eq!(ring.last(), 149);
    }

    #[test]
    fn test_zero_capacity_is_fatal() {
        assert!(matches!(
            RingBuffer::<u8>::with_capacity(0),
            Err(GameError::EmptyRing)
        ));
    }

    #[test]
    fn test_wrap_around() {
        let ring: RingBuffer<u8> = RingBuffer::with_capacity(4).unwrap();

        assert_eq!(ring.next(2), 3);
        assert_eq!(ring.next(3), 0);
        assert_eq!(ring.prev(1), 0);
        assert_eq!(ring.prev(0), 3);
    }

    #[test]
    fn test_next_prev_round_trip() {
        for capacity in [1, 2, 7, 150] {
            let ring: RingBuffer<u8> = RingBuffer::with_capacity(capacity).unwrap();
            for cursor in 0..capacity {
                assert_eq!(ring.next(ring.prev(cursor)), cursor);
                assert_eq!(ring.prev(ring.next(cursor)), cursor);
            }
        }
    }

    #[test]
    fn test_single_slot_ring() {
        let ring: RingBuffer<u8> = RingBuffer::with_capacity(1).unwrap();
        assert_eq!(ring.next(0), 0);
        assert_eq!(ring.prev(0), 0);
    }

    #[test]
    fn test_slot_access() {
        let mut ring: RingBuffer<u8> = RingBuffer::with_capacity(3).unwrap();
        ring[2] = 9;
        assert_eq!(ring[ring.prev(ring.first())], 9);
    }
}
