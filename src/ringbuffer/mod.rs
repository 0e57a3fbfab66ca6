use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp;

use log::{debug, trace};

use crate::behavior::Behavior;
use crate::error::{Error, Result};
use crate::logic::copy::Transfer;
use crate::logic::insert::Insert;
use crate::logic::remove::Remove;
use crate::logic::CircularBuffer;
use crate::utils::wrap_add;
use crate::RangeArgument;

use self::internal::new_array;

mod internal;
mod iterator_impls;
mod trait_impls;

/// `RingBuffer` is a fixed capacity ring buffer.
///
/// Elements are put at the back and read with FIFO semantics from the front
/// (`get`, `peek`) or LIFO semantics from the back (`get_last`, `peek_last`).
/// What happens when a full buffer receives another element is decided by
/// its [`Behavior`]: `Wrapping` buffers overwrite their oldest element,
/// `Saturating` buffers reject the put.
///
/// The capacity only changes through an explicit call to `set_capacity`.
///
/// # Cursors
///
/// The content lives in one array of `capacity` slots. `head` is the slot of
/// the oldest element, `tail` the slot the next put writes to, and `len` the
/// number of live elements; the logical sequence is
/// `xs[(head + i) % capacity]` for `i` in `0..len`. Slots outside that window
/// hold `T::default()`, which is why mutating operations require
/// `T: Default`.
///
/// [`Behavior`]: enum.Behavior.html
pub struct RingBuffer<T> {
    xs: Box<[T]>,
    head: usize,
    tail: usize,
    len: usize,
    behavior: Behavior,
}

/// `RingBuffer` iterator
///
/// Walks the elements present when it was created, front to back. The
/// borrow it holds keeps the buffer from being mutated meanwhile.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a, T: 'a> {
    ring: &'a [T],
    head: usize,
    remaining: usize,
}

/// A by-value `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: RingBuffer<T>,
}

impl<T: Default> RingBuffer<T> {
    /// Creates an empty `RingBuffer` with room for `capacity` elements that
    /// overwrites its oldest element when full.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::{Behavior, RingBuffer};
    ///
    /// let buf: RingBuffer<u8> = RingBuffer::new(3);
    /// assert_eq!(buf.capacity(), 3);
    /// assert_eq!(buf.behavior(), Behavior::Wrapping);
    /// ```
    #[inline]
    pub fn new(capacity: usize) -> RingBuffer<T> {
        RingBuffer::with_behavior(capacity, Behavior::Wrapping)
    }

    /// Creates an empty `RingBuffer` with the given overflow behavior.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::{Behavior, RingBuffer};
    ///
    /// let buf: RingBuffer<u8> = RingBuffer::with_behavior(3, Behavior::Saturating);
    /// assert!(!buf.allow_overwrite());
    /// ```
    pub fn with_behavior(capacity: usize, behavior: Behavior) -> RingBuffer<T> {
        RingBuffer {
            xs: new_array(capacity),
            head: 0,
            tail: 0,
            len: 0,
            behavior,
        }
    }

    /// Creates an empty `RingBuffer`, `allow_overwrite` selecting between
    /// `Wrapping` (true) and `Saturating` (false).
    #[inline]
    pub fn with_overwrite(capacity: usize, allow_overwrite: bool) -> RingBuffer<T> {
        RingBuffer::with_behavior(capacity, Behavior::from_overwrite(allow_overwrite))
    }

    /// Adds an element to the back of the buffer.
    ///
    /// Returns `Ok(None)` if there was room, `Ok(Some(old))` if a `Wrapping`
    /// buffer was full and `old` got overwritten, or `Err(Error::Full)` if a
    /// `Saturating` buffer was full.
    ///
    /// # Examples
    ///
    /// ```text
    /// [_, _, _] <-(+)- 1 => [1, _, _] -> Ok(None)
    /// [1, _, _] <-(+)- 2 => [1, 2, _] -> Ok(None)
    /// [1, 2, _] <-(+)- 3 => [1, 2, 3] -> Ok(None)
    /// [1, 2, 3] <-(+)- 4 => [2, 3, 4] -> Ok(Some(1))   (Wrapping)
    /// [1, 2, 3] <-(+)- 4 => [1, 2, 3] -> Err(Full)     (Saturating)
    /// ```
    ///
    /// ```
    /// use ringbuffer::{Behavior, Error, RingBuffer};
    ///
    /// let mut buf = RingBuffer::new(2);
    /// buf.put(1).unwrap();
    /// buf.put(2).unwrap();
    /// assert_eq!(buf.put(3), Ok(Some(1)));
    ///
    /// let mut buf = RingBuffer::with_behavior(2, Behavior::Saturating);
    /// buf.put(1).unwrap();
    /// buf.put(2).unwrap();
    /// assert_eq!(buf.put(3), Err(Error::Full));
    /// ```
    #[inline]
    pub fn put(&mut self, item: T) -> Result<Option<T>> {
        Insert::put(self, item)
    }

    /// Puts every element yielded by `items`, in order, and returns how many
    /// were written.
    ///
    /// A `Saturating` buffer that cannot take the whole batch rejects it with
    /// `Error::Full` before writing anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::{Behavior, RingBuffer};
    ///
    /// let mut buf = RingBuffer::with_behavior(4, Behavior::Saturating);
    /// assert_eq!(buf.put_iter(vec![1, 2, 3]), Ok(3));
    /// assert!(buf.put_iter(vec![4, 5]).is_err());
    /// assert_eq!(buf.len(), 3);
    /// ```
    pub fn put_iter<I>(&mut self, items: I) -> Result<usize>
        where I: IntoIterator<Item = T>,
              I::IntoIter: ExactSizeIterator
    {
        Insert::put_all(self, items.into_iter())
    }

    /// Removes the element at the front and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::{Error, RingBuffer};
    ///
    /// let mut buf = RingBuffer::new(10);
    /// buf.put("Alpha").unwrap();
    /// buf.put("Beta").unwrap();
    ///
    /// assert_eq!(buf.get(), Ok("Alpha"));
    /// assert_eq!(buf.get(), Ok("Beta"));
    /// assert_eq!(buf.get(), Err(Error::Empty));
    /// ```
    #[inline]
    pub fn get(&mut self) -> Result<T> {
        Remove::front(self)
    }

    /// Removes up to `dest.len()` elements from the front into `dest` and
    /// returns how many were removed.
    ///
    /// Asking for more elements than the buffer holds is not an error; the
    /// slots of `dest` past the returned count are left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(10);
    /// buf.put_slice(&[1, 2, 3]).unwrap();
    ///
    /// let mut dest = [0; 5];
    /// assert_eq!(buf.get_slice(&mut dest), 3);
    /// assert_eq!(dest, [1, 2, 3, 0, 0]);
    /// assert!(buf.is_empty());
    /// ```
    #[inline]
    pub fn get_slice(&mut self, dest: &mut [T]) -> usize {
        Remove::front_into(self, dest)
    }

    /// Removes up to `count` elements from the front into
    /// `dest[offset..offset + count]`.
    ///
    /// Fails with `Error::InvalidArgument` if that window does not fit
    /// `dest`.
    pub fn get_range(&mut self, dest: &mut [T], offset: usize, count: usize) -> Result<usize> {
        Error::check_window(offset, count, dest.len())?;
        Ok(self.get_slice(&mut dest[offset..offset + count]))
    }

    /// Removes up to `count` elements from the front into a new vector of
    /// exactly `count` elements; positions past the removed ones hold
    /// `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(10);
    /// buf.put_slice(&[1, 2, 3]).unwrap();
    ///
    /// assert_eq!(buf.get_many(2), vec![1, 2]);
    /// assert_eq!(buf.get_many(2), vec![3, 0]);
    /// ```
    pub fn get_many(&mut self, count: usize) -> Vec<T> {
        let mut out = new_array(count).into_vec();
        self.get_slice(&mut out);
        out
    }

    /// Removes the most recently put element and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3);
    /// buf.put_slice(&["Alpha", "Beta", "Gamma"]).unwrap();
    ///
    /// assert_eq!(buf.get_last(), Ok("Gamma"));
    /// assert_eq!(buf.len(), 2);
    /// assert_eq!(buf.tail(), 2);
    /// ```
    #[inline]
    pub fn get_last(&mut self) -> Result<T> {
        Remove::back(self)
    }

    /// Removes up to `dest.len()` elements from the back into `dest`.
    ///
    /// `dest` is filled back to front, so it holds the removed elements in
    /// their original order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(10);
    /// buf.put_slice(&[1, 2, 3]).unwrap();
    ///
    /// let mut dest = [0; 2];
    /// assert_eq!(buf.get_last_slice(&mut dest), 2);
    /// assert_eq!(dest, [2, 3]);
    /// assert_eq!(buf.to_vec(), vec![1]);
    /// ```
    #[inline]
    pub fn get_last_slice(&mut self, dest: &mut [T]) -> usize {
        Remove::back_into(self, dest)
    }

    /// Removes up to `count` elements from the back into
    /// `dest[offset..offset + count]`.
    pub fn get_last_range(&mut self, dest: &mut [T], offset: usize, count: usize) -> Result<usize> {
        Error::check_window(offset, count, dest.len())?;
        Ok(self.get_last_slice(&mut dest[offset..offset + count]))
    }

    /// Removes up to `count` elements from the back into a new vector of
    /// exactly `count` elements.
    pub fn get_last_many(&mut self, count: usize) -> Vec<T> {
        let mut out = new_array(count).into_vec();
        self.get_last_slice(&mut out);
        out
    }

    /// Changes the capacity of the buffer.
    ///
    /// The content is moved into a new array of `capacity` slots, in order,
    /// starting at slot 0: afterwards `head` is 0 and `tail` is `len`
    /// (0 when the buffer is exactly full). Fails with `Error::OutOfRange` if
    /// `capacity` is smaller than the number of elements held.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4);
    /// buf.put_slice(&[1, 2, 3, 4, 5, 6]).unwrap();
    ///
    /// buf.set_capacity(6).unwrap();
    /// assert_eq!(buf.to_vec(), vec![3, 4, 5, 6]);
    /// assert_eq!((buf.head(), buf.tail()), (0, 4));
    ///
    /// assert!(buf.set_capacity(3).is_err());
    /// assert_eq!(buf.capacity(), 6);
    /// ```
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        let old = self.capacity();
        if capacity == old {
            return Ok(());
        }
        if capacity < self.len {
            return Err(Error::OutOfRange {
                reason: "the new capacity must be greater than or equal to the buffer size",
                value: capacity,
            });
        }

        let mut xs = new_array(capacity);
        Transfer::move_into(self, &mut xs);
        self.xs = xs;
        self.head = 0;
        self.tail = wrap_add(0, self.len, capacity);

        debug!("resized ring buffer from {} to {} slots, {} elements kept", old, capacity, self.len);
        Ok(())
    }

    /// Removes every element and resets the cursors to 0.
    ///
    /// The backing array is reallocated, so the buffer no longer owns any of
    /// the discarded elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4);
    /// buf.put(1).unwrap();
    /// buf.clear();
    /// assert!(buf.is_empty());
    /// assert_eq!((buf.head(), buf.tail()), (0, 0));
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing ring buffer, {} elements dropped", self.len);
        self.xs = new_array(self.xs.len());
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }
}

impl<T> RingBuffer<T> {
    /// Returns the number of elements the buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.xs.len()
    }

    /// Returns the number of elements in the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4);
    /// assert_eq!(buf.len(), 0);
    /// buf.put(1).unwrap();
    /// assert_eq!(buf.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the slot index of the oldest element.
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Returns the slot index the next put writes to.
    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Returns true if the buffer contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the buffer is at capacity and would reject a put.
    ///
    /// A `Wrapping` buffer is never full, since a put always succeeds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::{Behavior, RingBuffer};
    ///
    /// let mut buf = RingBuffer::with_behavior(1, Behavior::Saturating);
    /// assert!(!buf.is_full());
    /// buf.put(1).unwrap();
    /// assert!(buf.is_full());
    ///
    /// buf.set_behavior(Behavior::Wrapping);
    /// assert!(!buf.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.allow_overwrite() && self.len == self.capacity()
    }

    /// Returns the overflow behavior.
    #[inline]
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Changes the overflow behavior; the content is left as it is.
    #[inline]
    pub fn set_behavior(&mut self, behavior: Behavior) {
        self.behavior = behavior;
    }

    /// Returns true if a put into a full buffer overwrites the oldest element.
    #[inline]
    pub fn allow_overwrite(&self) -> bool {
        self.behavior.allows_overwrite()
    }

    /// Boolean form of `set_behavior`.
    #[inline]
    pub fn set_allow_overwrite(&mut self, allow_overwrite: bool) {
        self.behavior = Behavior::from_overwrite(allow_overwrite);
    }

    /// Returns a reference to the front element without removing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::{Error, RingBuffer};
    ///
    /// let mut buf = RingBuffer::new(3);
    /// assert_eq!(buf.peek(), Err(Error::Empty));
    /// buf.put(1).unwrap();
    /// buf.put(2).unwrap();
    /// assert_eq!(buf.peek(), Ok(&1));
    /// assert_eq!(buf.len(), 2);
    /// ```
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.front().ok_or(Error::Empty)
    }

    /// Returns a reference to the most recently put element without removing
    /// it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3);
    /// buf.put(1).unwrap();
    /// buf.put(2).unwrap();
    /// assert_eq!(buf.peek_last(), Ok(&2));
    /// ```
    #[inline]
    pub fn peek_last(&self) -> Result<&T> {
        self.back().ok_or(Error::Empty)
    }

    /// Returns a reference to the element `index` positions behind the front.
    ///
    /// Fails with `Error::Empty` on an empty buffer and with
    /// `Error::OutOfRange` if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3);
    /// buf.put_slice(&["Alpha", "Beta", "Gamma", "Delta"]).unwrap();
    /// assert_eq!(buf.peek_at(0), Ok(&"Beta"));
    /// assert_eq!(buf.peek_at(2), Ok(&"Delta"));
    /// assert!(buf.peek_at(3).is_err());
    /// ```
    pub fn peek_at(&self, index: usize) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        if index >= self.len {
            return Err(Error::OutOfRange {
                reason: "index must be less than the buffer size",
                value: index,
            });
        }
        Ok(self.slot(self.front_index(index)))
    }

    /// Provides a reference to the front element, or `None` if the buffer is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(&self.xs[self.head])
        }
    }

    /// Provides a reference to the back element, or `None` if the buffer is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(&self.xs[self.back_index(0)])
        }
    }

    /// Advances the head by `count` slots without reading or removing
    /// anything.
    ///
    /// The length is **not** changed and `count` is not checked against it;
    /// this fast-forwards the read cursor past data known to be stale.
    /// Use `get_slice` or `get_many` to actually drop elements from the front.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4);
    /// buf.put_slice(&[1, 2, 3, 4]).unwrap();
    /// buf.skip(2);
    /// assert_eq!(buf.head(), 2);
    /// assert_eq!(buf.len(), 4);
    /// assert_eq!(buf.to_vec(), vec![3, 4, 1, 2]);
    /// ```
    pub fn skip(&mut self, count: usize) {
        Remove::skip(self, count);
        trace!("skipped {} slots, head now {}", count, self.head);
    }

    /// Returns `true` if the buffer contains an element equal to `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3);
    /// buf.put(0).unwrap();
    /// buf.put(1).unwrap();
    ///
    /// assert_eq!(buf.contains(&1), true);
    /// assert_eq!(buf.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
        where T: PartialEq
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3);
    /// buf.put_slice(&[5, 3, 4, 6]).unwrap();
    /// let b: &[_] = &[&3, &4, &6];
    /// let c: Vec<&i32> = buf.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: &self.xs[..],
            head: self.head,
            remaining: self.len,
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4);
    /// buf.put_slice(&[0, 1, 2]).unwrap();
    /// assert_eq!(buf.as_slices(), (&[0, 1, 2][..], &[][..]));
    ///
    /// buf.put_slice(&[3, 4]).unwrap();
    /// assert_eq!(buf.as_slices(), (&[1, 2, 3][..], &[4][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let capacity = self.capacity();
        if self.head + self.len <= capacity {
            (&self.xs[self.head..self.head + self.len], &[])
        } else {
            let (left, right) = self.xs.split_at(self.head);
            (right, &left[..self.head + self.len - capacity])
        }
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Copies `count` elements, starting `index` positions behind the front,
    /// into `dest[dest_offset..dest_offset + count]`. The buffer is not
    /// changed.
    ///
    /// Fails with `Error::OutOfRange` if `count > len`, and with
    /// `Error::InvalidArgument` if the window does not fit `dest`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(10);
    /// buf.put_slice(&[1, 2, 3, 4]).unwrap();
    ///
    /// let mut dest = [0; 4];
    /// buf.copy_to(1, &mut dest, 1, 3).unwrap();
    /// assert_eq!(dest, [0, 2, 3, 4]);
    ///
    /// assert!(buf.copy_to(0, &mut dest, 0, 5).is_err());
    /// ```
    #[inline]
    pub fn copy_to(&self, index: usize, dest: &mut [T], dest_offset: usize, count: usize) -> Result<()> {
        Transfer::copy_to(self, index, dest, dest_offset, count)
    }

    /// Copies as many elements from the front as fit into `dest` and returns
    /// how many were copied.
    #[inline]
    pub fn copy_to_slice(&self, dest: &mut [T]) -> usize {
        // a zero offset always fits
        self.copy_to_offset(dest, 0).unwrap_or(0)
    }

    /// Copies as many elements from the front as fit into `dest[dest_offset..]`
    /// and returns how many were copied.
    pub fn copy_to_offset(&self, dest: &mut [T], dest_offset: usize) -> Result<usize> {
        let count = cmp::min(self.len, dest.len().saturating_sub(dest_offset));
        self.copy_to(0, dest, dest_offset, count)?;
        Ok(count)
    }

    /// Copies the elements in the logical `range` into the start of `dest`
    /// and returns how many were copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3);
    /// buf.put_slice(&[1, 2, 3, 4, 5]).unwrap();
    ///
    /// let mut dest = [0; 3];
    /// assert_eq!(buf.copy_range(1.., &mut dest), Ok(2));
    /// assert_eq!(dest, [4, 5, 0]);
    /// assert_eq!(buf.copy_range(..1, &mut dest), Ok(1));
    /// assert_eq!(dest, [3, 5, 0]);
    /// ```
    pub fn copy_range<R>(&self, range: R, dest: &mut [T]) -> Result<usize>
        where R: RangeArgument<usize>
    {
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(self.len);
        if end > self.len {
            return Err(Error::OutOfRange {
                reason: "range end cannot be greater than the buffer size",
                value: end,
            });
        }
        if start > end {
            return Err(Error::OutOfRange {
                reason: "range start cannot be greater than its end",
                value: start,
            });
        }
        let count = end - start;
        self.copy_to(start, dest, 0, count)?;
        Ok(count)
    }

    /// Copies up to `dest.len()` elements from the back into `dest`, in
    /// logical order, and returns how many were copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(5);
    /// buf.put_slice(&[1, 2, 3, 4, 5, 6]).unwrap();
    ///
    /// let mut dest = [0; 2];
    /// assert_eq!(buf.peek_last_slice(&mut dest), 2);
    /// assert_eq!(dest, [5, 6]);
    /// assert_eq!(buf.len(), 5);
    /// ```
    #[inline]
    pub fn peek_last_slice(&self, dest: &mut [T]) -> usize {
        Transfer::copy_back(self, dest)
    }

    /// Copies up to `count` elements from the back into
    /// `dest[offset..offset + count]`.
    pub fn peek_last_range(&self, dest: &mut [T], offset: usize, count: usize) -> Result<usize> {
        Error::check_window(offset, count, dest.len())?;
        Ok(self.peek_last_slice(&mut dest[offset..offset + count]))
    }

    /// Returns the elements, front to back, in a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3);
    /// buf.put_slice(&["Alpha", "Beta", "Gamma", "Delta"]).unwrap();
    /// assert_eq!(buf.to_vec(), vec!["Beta", "Gamma", "Delta"]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        let (a, b) = self.as_slices();
        let mut out = Vec::with_capacity(self.len);
        out.extend_from_slice(a);
        out.extend_from_slice(b);
        out
    }
}

impl<T: Clone + Default> RingBuffer<T> {
    /// Puts clones of every element of `items`, in order.
    ///
    /// Same semantics as `put_iter`: a `Saturating` buffer rejects a batch
    /// that does not fit without writing anything.
    #[inline]
    pub fn put_slice(&mut self, items: &[T]) -> Result<usize> {
        self.put_iter(items.iter().cloned())
    }

    /// Puts clones of `items[offset..offset + count]`, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(5);
    /// assert_eq!(buf.put_range(&[1, 2, 3, 4], 1, 2), Ok(2));
    /// assert_eq!(buf.to_vec(), vec![2, 3]);
    /// assert!(buf.put_range(&[1, 2, 3, 4], 3, 2).is_err());
    /// ```
    pub fn put_range(&mut self, items: &[T], offset: usize, count: usize) -> Result<usize> {
        Error::check_window(offset, count, items.len())?;
        self.put_slice(&items[offset..offset + count])
    }

    /// Returns clones of up to `count` front elements in a vector of exactly
    /// `count` elements, without removing them.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::{Error, RingBuffer};
    ///
    /// let mut buf = RingBuffer::new(5);
    /// assert_eq!(buf.peek_many(2), Err(Error::Empty));
    ///
    /// buf.put_slice(&[1, 2, 3]).unwrap();
    /// assert_eq!(buf.peek_many(2), Ok(vec![1, 2]));
    /// assert_eq!(buf.peek_many(4), Ok(vec![1, 2, 3, 0]));
    /// ```
    pub fn peek_many(&self, count: usize) -> Result<Vec<T>> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let mut out = new_array(count).into_vec();
        self.copy_to_slice(&mut out);
        Ok(out)
    }

    /// Returns clones of up to `count` back elements, in logical order, in a
    /// vector of exactly `count` elements, without removing them.
    ///
    /// An empty buffer fails with `Error::Empty`, the same as `peek_many`,
    /// instead of yielding `count` defaults. Use `peek_last_slice` for a
    /// non-failing copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::{Error, RingBuffer};
    ///
    /// let mut buf = RingBuffer::new(5);
    /// assert_eq!(buf.peek_last_many(2), Err(Error::Empty));
    ///
    /// buf.put_slice(&[1, 2, 3]).unwrap();
    /// assert_eq!(buf.peek_last_many(2), Ok(vec![2, 3]));
    /// assert_eq!(buf.peek_last_many(4), Ok(vec![1, 2, 3, 0]));
    /// ```
    pub fn peek_last_many(&self, count: usize) -> Result<Vec<T>> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let mut out = new_array(count).into_vec();
        self.peek_last_slice(&mut out);
        Ok(out)
    }
}
