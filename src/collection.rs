//! Generic collection interface implemented by `RingBuffer`.

use crate::error::{Error, Result};
use crate::ringbuffer::RingBuffer;

/// Element-container capabilities for code that is generic over collections.
///
/// The trait is object safe, so a `RingBuffer` can be handed around as a
/// `&mut dyn Collection<T>`.
pub trait Collection<T> {
    /// Adds an element at the back.
    fn add(&mut self, item: T) -> Result<()>;

    /// Returns the number of elements.
    fn count(&self) -> usize;

    /// Removes the first element equal to `item`.
    fn remove(&mut self, item: &T) -> Result<bool>;

    /// Returns true if an element equal to `item` is present.
    fn contains(&self, item: &T) -> bool;

    /// Removes every element.
    fn clear(&mut self);

    /// Clones the elements, front to back, into `dest[dest_offset..]` and
    /// returns how many were copied.
    fn copy_to_offset(&self, dest: &mut [T], dest_offset: usize) -> Result<usize>;

    /// Returns true if the collection cannot be modified.
    fn is_read_only(&self) -> bool {
        false
    }

    /// Returns true if access to the collection is internally synchronized.
    fn is_synchronized(&self) -> bool {
        false
    }
}

impl<T> Collection<T> for RingBuffer<T>
    where T: Clone + Default + PartialEq
{
    /// Same as `put`; a `Wrapping` buffer silently drops its oldest element.
    #[inline]
    fn add(&mut self, item: T) -> Result<()> {
        self.put(item).map(|_| ())
    }

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    /// Always fails with `Error::Unsupported`. Elements leave the buffer only
    /// through `get`, `get_last` and their bulk forms.
    fn remove(&mut self, _item: &T) -> Result<bool> {
        Err(Error::Unsupported("cannot remove items from the buffer by value"))
    }

    #[inline]
    fn contains(&self, item: &T) -> bool {
        RingBuffer::contains(self, item)
    }

    #[inline]
    fn clear(&mut self) {
        RingBuffer::clear(self)
    }

    #[inline]
    fn copy_to_offset(&self, dest: &mut [T], dest_offset: usize) -> Result<usize> {
        RingBuffer::copy_to_offset(self, dest, dest_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::Behavior;

    fn fill(collection: &mut dyn Collection<i32>, items: &[i32]) -> Result<()> {
        for &item in items {
            collection.add(item)?;
        }
        Ok(())
    }

    #[test]
    fn through_trait_object() {
        let mut buf: RingBuffer<i32> = RingBuffer::new(3);
        fill(&mut buf, &[1, 2, 3, 4]).unwrap();

        let collection: &mut dyn Collection<i32> = &mut buf;
        assert_eq!(collection.count(), 3);
        assert!(!collection.contains(&1));
        assert!(collection.contains(&4));
        assert!(!collection.is_read_only());
        assert!(!collection.is_synchronized());

        let mut dest = [0; 5];
        assert_eq!(collection.copy_to_offset(&mut dest, 1), Ok(3));
        assert_eq!(dest, [0, 2, 3, 4, 0]);
        assert_eq!(collection.copy_to_offset(&mut dest, 6),
                   Err(Error::InvalidArgument { offset: 6, count: 0, len: 5 }));

        collection.clear();
        assert_eq!(collection.count(), 0);
    }

    #[test]
    fn inherent_and_trait_copies_agree() {
        let mut buf: RingBuffer<i32> = RingBuffer::new(3);
        buf.put_slice(&[1, 2, 3, 4]).unwrap();

        let mut inherent = [0; 4];
        let mut through_trait = [0; 4];
        assert_eq!(buf.copy_to_slice(&mut inherent), 3);
        assert_eq!(Collection::copy_to_offset(&buf, &mut through_trait, 0), Ok(3));
        assert_eq!(inherent, through_trait);
        assert_eq!(buf.copy_to_offset(&mut inherent, 1), Ok(3));
        assert_eq!(inherent, [2, 2, 3, 4]);
    }

    #[test]
    fn add_to_full_saturating() {
        let mut buf: RingBuffer<i32> = RingBuffer::with_behavior(2, Behavior::Saturating);
        assert_eq!(fill(&mut buf, &[1, 2, 3]), Err(Error::Full));
        assert_eq!(buf.to_vec(), vec![1, 2]);
    }

    #[test]
    fn remove_by_value_is_unsupported() {
        let mut buf = RingBuffer::new(3);
        buf.put(1).unwrap();
        assert_eq!(Collection::remove(&mut buf, &1),
                   Err(Error::Unsupported("cannot remove items from the buffer by value")));
        assert_eq!(buf.len(), 1);
    }
}
