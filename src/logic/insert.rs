use core::mem;

use log::trace;

use super::CircularBuffer;
use crate::behavior::Behavior;
use crate::error::{Error, Result};
use crate::utils::wrap_add;

pub struct Insert;

impl Insert {
    /// Writes `item` at the tail.
    ///
    /// On a full `Wrapping` buffer the head advances past the oldest element
    /// and the value that was overwritten is returned. A full `Saturating`
    /// buffer rejects the item and is left untouched.
    #[inline]
    pub fn put<B: CircularBuffer>(buffer: &mut B, item: B::Item) -> Result<Option<B::Item>> {
        let capacity = buffer.array_len();
        let full = buffer.len() == capacity;

        match (full, buffer.behavior()) {
            (true, Behavior::Saturating) => {
                trace!("rejected put into full buffer (capacity {})", capacity);
                Err(Error::Full)
            }
            // nothing to hold the item in, it is its own eviction
            (true, Behavior::Wrapping) if capacity == 0 => Ok(Some(item)),
            (true, Behavior::Wrapping) => Ok(Some(Self::overwrite(buffer, item))),
            (false, _) => {
                Self::append(buffer, item);
                Ok(None)
            }
        }
    }

    /// Puts every item of `items` in order, returning how many were written.
    ///
    /// A `Saturating` buffer checks the whole batch against the free capacity
    /// before writing anything, so a batch that does not fit is rejected
    /// without mutation.
    pub fn put_all<B, I>(buffer: &mut B, items: I) -> Result<usize>
        where B: CircularBuffer,
              I: ExactSizeIterator<Item = B::Item>
    {
        let count = items.len();
        let free = buffer.array_len() - buffer.len();

        if buffer.behavior() == Behavior::Saturating && count > free {
            trace!("rejected batch of {} items, {} slots free", count, free);
            return Err(Error::Full);
        }

        let mut written = 0;
        for item in items {
            Self::put(buffer, item)?;
            written += 1;
        }
        Ok(written)
    }

    #[inline]
    fn append<B: CircularBuffer>(buffer: &mut B, item: B::Item) {
        // not full:
        //
        //        H     T
        // [. . . o o o . . .]
        //
        //        H       T
        // [. . . o o o I . .]
        //
        let tail = buffer.tail();
        *buffer.slot_mut(tail) = item;
        buffer.set_tail(wrap_add(tail, 1, buffer.array_len()));
        let len = buffer.len();
        buffer.set_len(len + 1);
    }

    #[inline]
    fn overwrite<B: CircularBuffer>(buffer: &mut B, item: B::Item) -> B::Item {
        // full:
        //
        //          T
        //          H
        // [o o o o A o o o o]
        //
        //            T
        //            H
        // [o o o o I o o o o]
        //
        let capacity = buffer.array_len();
        let tail = buffer.tail();
        let head = buffer.head();

        let replaced = mem::replace(buffer.slot_mut(tail), item);
        buffer.set_tail(wrap_add(tail, 1, capacity));
        buffer.set_head(wrap_add(head, 1, capacity));

        trace!("overwrote slot {} of {}", tail, capacity);
        replaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::tests::Cursors;

    #[test]
    fn append_advances_tail_and_len() {
        let mut c = Cursors::new(4, Behavior::Saturating);
        assert_eq!(Insert::put(&mut c, 7), Ok(None));
        assert_eq!(Insert::put(&mut c, 8), Ok(None));
        assert_eq!((c.head, c.tail, c.len), (0, 2, 2));
        assert_eq!(&c.xs[..2], &[7, 8]);
    }

    #[test]
    fn tail_wraps_to_zero() {
        let mut c = Cursors::new(3, Behavior::Saturating);
        for i in 1..4 {
            Insert::put(&mut c, i).unwrap();
        }
        assert_eq!((c.head, c.tail, c.len), (0, 0, 3));
    }

    #[test]
    fn overwrite_moves_head() {
        let mut c = Cursors::new(3, Behavior::Wrapping);
        for i in 1..4 {
            Insert::put(&mut c, i).unwrap();
        }
        assert_eq!(Insert::put(&mut c, 4), Ok(Some(1)));
        assert_eq!((c.head, c.tail, c.len), (1, 1, 3));
        assert_eq!(Insert::put(&mut c, 5), Ok(Some(2)));
        assert_eq!((c.head, c.tail, c.len), (2, 2, 3));
        assert_eq!(c.xs, vec![4, 5, 3]);
    }

    #[test]
    fn saturating_rejects_when_full() {
        let mut c = Cursors::new(2, Behavior::Saturating);
        Insert::put(&mut c, 1).unwrap();
        Insert::put(&mut c, 2).unwrap();
        assert_eq!(Insert::put(&mut c, 3), Err(Error::Full));
        assert_eq!((c.head, c.tail, c.len), (0, 0, 2));
        assert_eq!(c.xs, vec![1, 2]);
    }

    #[test]
    fn zero_capacity() {
        let mut c = Cursors::new(0, Behavior::Wrapping);
        assert_eq!(Insert::put(&mut c, 9), Ok(Some(9)));
        assert_eq!(c.len, 0);

        c.behavior = Behavior::Saturating;
        assert_eq!(Insert::put(&mut c, 9), Err(Error::Full));
    }

    #[test]
    fn batch_is_rejected_atomically() {
        let mut c = Cursors::new(4, Behavior::Saturating);
        Insert::put(&mut c, 1).unwrap();
        Insert::put(&mut c, 2).unwrap();

        assert_eq!(Insert::put_all(&mut c, vec![3, 4, 5].into_iter()), Err(Error::Full));
        assert_eq!((c.head, c.tail, c.len), (0, 2, 2));
        assert_eq!(c.xs, vec![1, 2, 0, 0]);

        assert_eq!(Insert::put_all(&mut c, vec![3, 4].into_iter()), Ok(2));
        assert_eq!(c.xs, vec![1, 2, 3, 4]);
    }

    #[test]
    fn batch_wraps_over_old_items() {
        let mut c = Cursors::new(3, Behavior::Wrapping);
        assert_eq!(Insert::put_all(&mut c, (1..6).collect::<Vec<_>>().into_iter()), Ok(5));
        assert_eq!((c.head, c.tail, c.len), (2, 2, 3));
        assert_eq!(c.xs, vec![4, 5, 3]);
    }
}
