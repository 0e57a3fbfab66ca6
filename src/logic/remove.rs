use core::cmp;
use core::mem;

use super::CircularBuffer;
use crate::error::{Error, Result};
use crate::utils::wrap_add;

pub struct Remove;

impl Remove {
    /// Removes the element at the front.
    #[inline]
    pub fn front<B>(buffer: &mut B) -> Result<B::Item>
        where B: CircularBuffer,
              B::Item: Default
    {
        if buffer.len() == 0 {
            return Err(Error::Empty);
        }
        Ok(Self::take_front(buffer))
    }

    /// Removes the element at the back.
    #[inline]
    pub fn back<B>(buffer: &mut B) -> Result<B::Item>
        where B: CircularBuffer,
              B::Item: Default
    {
        if buffer.len() == 0 {
            return Err(Error::Empty);
        }
        Ok(Self::take_back(buffer))
    }

    /// Moves up to `dest.len()` elements from the front into `dest`, oldest
    /// first. Slots of `dest` past the returned count are not touched.
    pub fn front_into<B>(buffer: &mut B, dest: &mut [B::Item]) -> usize
        where B: CircularBuffer,
              B::Item: Default
    {
        let count = cmp::min(dest.len(), buffer.len());
        for slot in &mut dest[..count] {
            *slot = Self::take_front(buffer);
        }
        count
    }

    /// Moves up to `dest.len()` elements from the back into `dest`.
    ///
    /// `dest` is filled back to front, so it ends up in logical order with the
    /// most recent element last.
    pub fn back_into<B>(buffer: &mut B, dest: &mut [B::Item]) -> usize
        where B: CircularBuffer,
              B::Item: Default
    {
        let count = cmp::min(dest.len(), buffer.len());
        for slot in dest[..count].iter_mut().rev() {
            *slot = Self::take_back(buffer);
        }
        count
    }

    /// Advances the head by `count` slots.
    ///
    /// Nothing is read and the length is left as it is: this is a raw cursor
    /// move, not `count` removals.
    #[inline]
    pub fn skip<B: CircularBuffer>(buffer: &mut B, count: usize) {
        let head = buffer.front_index(count);
        buffer.set_head(head);
    }

    #[inline]
    fn take_front<B>(buffer: &mut B) -> B::Item
        where B: CircularBuffer,
              B::Item: Default
    {
        debug_assert!(buffer.len() > 0);
        let head = buffer.head();
        let item = mem::take(buffer.slot_mut(head));
        buffer.set_head(wrap_add(head, 1, buffer.array_len()));
        let len = buffer.len();
        buffer.set_len(len - 1);
        item
    }

    #[inline]
    fn take_back<B>(buffer: &mut B) -> B::Item
        where B: CircularBuffer,
              B::Item: Default
    {
        // The retreating tail wraps like every other index:
        //
        //  T                     T
        // [o o . . . o o] => [o o . . . o .]
        //                                 ^ removed
        //
        debug_assert!(buffer.len() > 0);
        let last = buffer.back_index(0);
        let item = mem::take(buffer.slot_mut(last));
        buffer.set_tail(last);
        let len = buffer.len();
        buffer.set_len(len - 1);
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::Behavior;
    use crate::logic::insert::Insert;
    use crate::logic::tests::Cursors;

    fn filled(capacity: usize, items: &[u32]) -> Cursors {
        let mut c = Cursors::new(capacity, Behavior::Wrapping);
        Insert::put_all(&mut c, items.iter().cloned()).unwrap();
        c
    }

    #[test]
    fn front_in_order() {
        let mut c = filled(10, &[1, 2, 3]);
        assert_eq!(Remove::front(&mut c), Ok(1));
        assert_eq!((c.head, c.tail, c.len), (1, 3, 2));
        assert_eq!(c.xs[0], 0);
        assert_eq!(Remove::front(&mut c), Ok(2));
        assert_eq!(Remove::front(&mut c), Ok(3));
        assert_eq!(Remove::front(&mut c), Err(Error::Empty));
    }

    #[test]
    fn front_head_wraps() {
        let mut c = filled(3, &[1, 2, 3, 4]);
        assert_eq!(c.head, 1);
        assert_eq!(Remove::front(&mut c), Ok(2));
        assert_eq!(Remove::front(&mut c), Ok(3));
        assert_eq!(c.head, 0);
        assert_eq!(Remove::front(&mut c), Ok(4));
        assert_eq!(c.len, 0);
    }

    #[test]
    fn back_in_reverse_order() {
        let mut c = filled(10, &[1, 2, 3]);
        assert_eq!(Remove::back(&mut c), Ok(3));
        assert_eq!((c.head, c.tail, c.len), (0, 2, 2));
        assert_eq!(Remove::back(&mut c), Ok(2));
        assert_eq!(Remove::back(&mut c), Ok(1));
        assert_eq!(Remove::back(&mut c), Err(Error::Empty));
    }

    #[test]
    fn back_tail_wraps_instead_of_clamping() {
        let mut c = filled(3, &[1, 2, 3]);
        assert_eq!(c.tail, 0);
        assert_eq!(Remove::back(&mut c), Ok(3));
        assert_eq!(c.tail, 2);

        // the freed slot is reused by the next put, the front is kept
        Insert::put(&mut c, 9).unwrap();
        assert_eq!(c.xs, vec![1, 2, 9]);
        assert_eq!(Remove::front(&mut c), Ok(1));
    }

    #[test]
    fn back_across_physical_zero() {
        let mut c = filled(4, &[1, 2, 3, 4, 5, 6]);
        // [5 6 3 4], head = tail = 2
        assert_eq!(Remove::back(&mut c), Ok(6));
        assert_eq!(Remove::back(&mut c), Ok(5));
        assert_eq!(Remove::back(&mut c), Ok(4));
        assert_eq!(c.tail, 3);
        assert_eq!(Remove::back(&mut c), Ok(3));
        assert_eq!(c.len, 0);
    }

    #[test]
    fn front_into_stops_at_len() {
        let mut c = filled(10, &[1, 2, 3]);
        let mut dest = [7; 5];
        assert_eq!(Remove::front_into(&mut c, &mut dest), 3);
        assert_eq!(dest, [1, 2, 3, 7, 7]);
        assert_eq!((c.head, c.tail, c.len), (3, 3, 0));
    }

    #[test]
    fn back_into_keeps_logical_order() {
        let mut c = filled(10, &[1, 2, 3]);
        let mut dest = [0; 2];
        assert_eq!(Remove::back_into(&mut c, &mut dest), 2);
        assert_eq!(dest, [2, 3]);
        assert_eq!((c.head, c.tail, c.len), (0, 1, 1));
    }

    #[test]
    fn skip_is_a_raw_cursor_move() {
        let mut c = filled(10, &[1, 2, 3, 4]);
        Remove::skip(&mut c, 2);
        assert_eq!(c.head, 2);
        assert_eq!(c.len, 4);

        let mut c = Cursors::new(100, Behavior::Wrapping);
        Remove::skip(&mut c, 75);
        Remove::skip(&mut c, 50);
        assert_eq!(c.head, 25);
    }
}
