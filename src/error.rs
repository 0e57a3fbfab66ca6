//! Error values returned by `RingBuffer` operations.
//!
//! Every failing operation leaves the buffer exactly as it was before the
//! call.

use core::result;

use thiserror::Error;

/// The result type of fallible `RingBuffer` operations.
pub type Result<T> = result::Result<T, Error>;

/// Error kinds reported by `RingBuffer`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// An `offset`/`count` window does not fit the slice it refers to.
    #[error("invalid argument: range {offset}..{offset}+{count} does not fit a slice of length {len}")]
    InvalidArgument {
        /// First slot of the window.
        offset: usize,
        /// Number of slots in the window.
        count: usize,
        /// Length of the slice the window was applied to.
        len: usize,
    },

    /// A count, index or capacity lies outside what the buffer currently holds.
    #[error("out of range: {reason} (got {value})")]
    OutOfRange {
        /// What was violated.
        reason: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// A read was attempted on a buffer holding no elements.
    #[error("the buffer is empty")]
    Empty,

    /// A put was attempted beyond the free capacity of a saturating buffer.
    #[error("the buffer does not have sufficient capacity to put new items")]
    Full,

    /// The operation is not supported by a ring buffer.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

impl Error {
    #[inline]
    pub(crate) fn check_window(offset: usize, count: usize, len: usize) -> Result<()> {
        match offset.checked_add(count) {
            Some(end) if end <= len => Ok(()),
            _ => Err(Error::InvalidArgument { offset, count, len }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_fits() {
        assert_eq!(Error::check_window(0, 0, 0), Ok(()));
        assert_eq!(Error::check_window(2, 3, 5), Ok(()));
    }

    #[test]
    fn window_overflows() {
        assert_eq!(Error::check_window(3, 3, 5),
                   Err(Error::InvalidArgument { offset: 3, count: 3, len: 5 }));
        assert!(Error::check_window(usize::MAX, 1, 5).is_err());
    }

    #[test]
    fn messages() {
        assert_eq!(Error::Empty.to_string(), "the buffer is empty");
        assert_eq!(Error::OutOfRange { reason: "index must be less than the buffer size", value: 7 }
                       .to_string(),
                   "out of range: index must be less than the buffer size (got 7)");
    }
}
