pub mod copy;
pub mod insert;
pub mod remove;

use crate::behavior::Behavior;
use crate::utils::{wrap_add, wrap_sub};

/// Cursor view of a ring buffer.
///
/// The logical sequence is `slot(front_index(i))` for `i` in `0..len()`.
/// Every algorithm in `logic` is written against this trait and keeps
/// `len() <= array_len()` and `head(), tail() < array_len()` (both are 0
/// when `array_len()` is 0).
pub trait CircularBuffer {
    type Item;

    fn array_len(&self) -> usize;
    fn len(&self) -> usize;
    fn behavior(&self) -> Behavior;

    fn head(&self) -> usize;
    fn tail(&self) -> usize;

    fn set_head(&mut self, head: usize);
    fn set_tail(&mut self, tail: usize);
    fn set_len(&mut self, len: usize);

    fn slot(&self, index: usize) -> &Self::Item;
    fn slot_mut(&mut self, index: usize) -> &mut Self::Item;

    /// Physical index of the element `offset` positions behind the front.
    #[inline]
    fn front_index(&self, offset: usize) -> usize {
        wrap_add(self.head(), offset, self.array_len())
    }

    /// Physical index of the element `offset` positions before the back,
    /// `back_index(0)` being the most recently written element.
    ///
    /// Computed from `tail` with full modular arithmetic, so offsets that
    /// reach past physical index 0 wrap to the end of the array.
    #[inline]
    fn back_index(&self, offset: usize) -> usize {
        wrap_sub(self.tail(), offset % self.array_len().max(1) + 1, self.array_len())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// Bare cursor triple over a `Vec`, for exercising the algorithms
    /// without the public wrapper.
    pub struct Cursors {
        pub xs: Vec<u32>,
        pub head: usize,
        pub tail: usize,
        pub len: usize,
        pub behavior: Behavior,
    }

    impl Cursors {
        pub fn new(capacity: usize, behavior: Behavior) -> Cursors {
            Cursors {
                xs: (0..capacity).map(|_| 0).collect(),
                head: 0,
                tail: 0,
                len: 0,
                behavior,
            }
        }
    }

    impl CircularBuffer for Cursors {
        type Item = u32;

        fn array_len(&self) -> usize {
            self.xs.len()
        }

        fn len(&self) -> usize {
            self.len
        }

        fn behavior(&self) -> Behavior {
            self.behavior
        }

        fn head(&self) -> usize {
            self.head
        }

        fn tail(&self) -> usize {
            self.tail
        }

        fn set_head(&mut self, head: usize) {
            self.head = head;
        }

        fn set_tail(&mut self, tail: usize) {
            self.tail = tail;
        }

        fn set_len(&mut self, len: usize) {
            self.len = len;
        }

        fn slot(&self, index: usize) -> &u32 {
            &self.xs[index]
        }

        fn slot_mut(&mut self, index: usize) -> &mut u32 {
            &mut self.xs[index]
        }
    }

    #[test]
    fn front_index_wraps() {
        let mut c = Cursors::new(5, Behavior::Wrapping);
        c.head = 3;
        assert_eq!(c.front_index(0), 3);
        assert_eq!(c.front_index(1), 4);
        assert_eq!(c.front_index(2), 0);
        assert_eq!(c.front_index(7), 0);
    }

    #[test]
    fn back_index_from_zero_tail() {
        // full buffer, tail back at the start of the array
        let mut c = Cursors::new(3, Behavior::Wrapping);
        c.len = 3;
        assert_eq!(c.back_index(0), 2);
        assert_eq!(c.back_index(1), 1);
        assert_eq!(c.back_index(2), 0);
    }

    #[test]
    fn back_index_wraps_past_zero() {
        //       T
        // [c d . a b]  tail = 2, head = 3
        let mut c = Cursors::new(5, Behavior::Wrapping);
        c.head = 3;
        c.tail = 2;
        c.len = 4;
        assert_eq!(c.back_index(0), 1);
        assert_eq!(c.back_index(1), 0);
        assert_eq!(c.back_index(2), 4);
        assert_eq!(c.back_index(3), 3);
    }

    #[test]
    fn back_index_empty_array() {
        let c = Cursors::new(0, Behavior::Wrapping);
        assert_eq!(c.back_index(0), 0);
        assert_eq!(c.front_index(3), 0);
    }
}
