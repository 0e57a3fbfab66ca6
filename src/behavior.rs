//! Behavior semantics for `RingBuffer`.

/// What `put` does once the buffer has reached its capacity.
///
/// Unlike a type-level tag, the behavior is stored in the buffer and can be
/// changed at any time with `RingBuffer::set_behavior`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Behavior {
    /// Wrapping write semantics.
    ///
    /// Putting an element into a buffer that **has already reached its capacity**
    /// causes it to **overwrite** the oldest element at the **front**.
    Wrapping,

    /// Saturating write semantics.
    ///
    /// Putting an element into a buffer that **has already reached its capacity**
    /// causes it to **fail with `Error::Full`, without performing any mutation**.
    Saturating,
}

impl Behavior {
    /// Maps the boolean overwrite flag onto a behavior.
    #[inline]
    pub fn from_overwrite(allow_overwrite: bool) -> Behavior {
        if allow_overwrite {
            Behavior::Wrapping
        } else {
            Behavior::Saturating
        }
    }

    /// Returns true for `Wrapping`.
    #[inline]
    pub fn allows_overwrite(self) -> bool {
        self == Behavior::Wrapping
    }
}

impl Default for Behavior {
    #[inline]
    fn default() -> Behavior {
        Behavior::Wrapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_flag() {
        assert_eq!(Behavior::from_overwrite(true), Behavior::Wrapping);
        assert_eq!(Behavior::from_overwrite(false), Behavior::Saturating);
        assert!(Behavior::default().allows_overwrite());
        assert!(!Behavior::Saturating.allows_overwrite());
    }
}
