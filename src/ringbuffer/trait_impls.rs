use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;
use core::ops::Index;

use log::trace;

use super::*;

impl<T: Clone> Clone for RingBuffer<T> {
    fn clone(&self) -> RingBuffer<T> {
        RingBuffer {
            xs: self.xs.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
            behavior: self.behavior,
        }
    }
}

impl<T> PartialEq for RingBuffer<T>
    where T: PartialEq
{
    fn eq(&self, other: &RingBuffer<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<'a, T> PartialEq<&'a [T]> for RingBuffer<T>
    where T: PartialEq
{
    fn eq(&self, other: &&'a [T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<Vec<T>> for RingBuffer<T>
    where T: PartialEq
{
    fn eq(&self, other: &Vec<T>) -> bool {
        self == &&other[..]
    }
}

impl<T> Eq for RingBuffer<T> where T: Eq {}

impl<T> PartialOrd for RingBuffer<T>
    where T: PartialOrd
{
    fn partial_cmp(&self, other: &RingBuffer<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T> Ord for RingBuffer<T>
    where T: Ord
{
    #[inline]
    fn cmp(&self, other: &RingBuffer<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Hash for RingBuffer<T>
    where T: Hash
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        let (a, b) = self.as_slices();
        Hash::hash_slice(a, state);
        Hash::hash_slice(b, state);
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.peek_at(index) {
            Ok(item) => item,
            Err(_) => {
                panic!("index out of bounds: the len is {} but the index is {}",
                       self.len(),
                       index)
            }
        }
    }
}

impl<T> From<Vec<T>> for RingBuffer<T> {
    /// Creates a full `Wrapping` buffer whose capacity is the length of the
    /// vector.
    fn from(xs: Vec<T>) -> RingBuffer<T> {
        let len = xs.len();
        RingBuffer {
            xs: xs.into_boxed_slice(),
            head: 0,
            tail: 0,
            len,
            behavior: Behavior::Wrapping,
        }
    }
}

impl<T> iter::FromIterator<T> for RingBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> RingBuffer<T> {
        RingBuffer::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Default> Extend<T> for RingBuffer<T> {
    /// Puts every element in order. A `Saturating` buffer stops at the
    /// first element that does not fit: that element is dropped and the rest
    /// of the iterator is left unconsumed.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for (taken, elt) in iter.into_iter().enumerate() {
            if self.put(elt).is_err() {
                trace!("extend stopped on a full buffer after {} elements", taken);
                return;
            }
        }
    }
}

impl<T> fmt::Debug for RingBuffer<T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
