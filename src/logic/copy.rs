use core::cmp;
use core::mem;

use super::CircularBuffer;
use crate::error::{Error, Result};
use crate::utils::wrap_add;

pub struct Transfer;

impl Transfer {
    /// Clones `count` elements, starting `index` elements behind the front,
    /// into `dest[dest_offset..dest_offset + count]`.
    ///
    /// Positions are mapped with `front_index`, so a start index plus count
    /// reaching past the logical end keeps walking the physical ring.
    pub fn copy_to<B>(buffer: &B,
                      index: usize,
                      dest: &mut [B::Item],
                      dest_offset: usize,
                      count: usize)
                      -> Result<()>
        where B: CircularBuffer,
              B::Item: Clone
    {
        if count > buffer.len() {
            return Err(Error::OutOfRange {
                reason: "the read count cannot be greater than the buffer size",
                value: count,
            });
        }
        Error::check_window(dest_offset, count, dest.len())?;

        let capacity = buffer.array_len();
        let mut src = buffer.front_index(index);
        for slot in &mut dest[dest_offset..dest_offset + count] {
            *slot = buffer.slot(src).clone();
            src = wrap_add(src, 1, capacity);
        }
        Ok(())
    }

    /// Clones up to `dest.len()` elements from the back into `dest`, keeping
    /// logical order (most recent element last). Returns the number copied.
    pub fn copy_back<B>(buffer: &B, dest: &mut [B::Item]) -> usize
        where B: CircularBuffer,
              B::Item: Clone
    {
        let count = cmp::min(dest.len(), buffer.len());
        for (i, slot) in dest[..count].iter_mut().rev().enumerate() {
            *slot = buffer.slot(buffer.back_index(i)).clone();
        }
        count
    }

    /// Moves the logical content into `dest[..len]`, oldest first, leaving
    /// defaults behind. `dest` must hold at least `len()` elements.
    ///
    /// Used to relinearize the content into a freshly allocated array.
    pub fn move_into<B>(buffer: &mut B, dest: &mut [B::Item])
        where B: CircularBuffer,
              B::Item: Default
    {
        let len = buffer.len();
        debug_assert!(dest.len() >= len);

        let capacity = buffer.array_len();
        let mut src = buffer.head();
        for slot in &mut dest[..len] {
            *slot = mem::take(buffer.slot_mut(src));
            src = wrap_add(src, 1, capacity);
        }
    }
}
