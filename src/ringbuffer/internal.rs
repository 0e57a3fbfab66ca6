use alloc::boxed::Box;
use core::iter;

use super::RingBuffer;
use crate::behavior::Behavior;
use crate::logic::CircularBuffer;

impl<T> CircularBuffer for RingBuffer<T> {
    type Item = T;

    #[inline]
    fn array_len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn behavior(&self) -> Behavior {
        self.behavior
    }

    #[inline]
    fn head(&self) -> usize {
        self.head
    }

    #[inline]
    fn tail(&self) -> usize {
        self.tail
    }

    #[inline]
    fn set_head(&mut self, head: usize) {
        debug_assert!(head < self.xs.len() || head == 0);
        self.head = head;
    }

    #[inline]
    fn set_tail(&mut self, tail: usize) {
        debug_assert!(tail < self.xs.len() || tail == 0);
        self.tail = tail;
    }

    #[inline]
    fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.xs.len());
        self.len = len;
    }

    #[inline]
    fn slot(&self, index: usize) -> &T {
        &self.xs[index]
    }

    #[inline]
    fn slot_mut(&mut self, index: usize) -> &mut T {
        &mut self.xs[index]
    }
}

/// Allocates `capacity` slots holding `T::default()`.
#[inline]
pub fn new_array<T: Default>(capacity: usize) -> Box<[T]> {
    iter::repeat_with(T::default).take(capacity).collect()
}
