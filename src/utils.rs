// A zero capacity has no slots to map onto, every helper maps to 0 then.

#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    debug_assert!(index < capacity);
    (index + addend % capacity) % capacity
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    debug_assert!(index < capacity);
    (index + capacity - subtrahend % capacity) % capacity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_wraps() {
        assert_eq!(wrap_add(0, 0, 4), 0);
        assert_eq!(wrap_add(3, 1, 4), 0);
        assert_eq!(wrap_add(2, 5, 4), 3);
        assert_eq!(wrap_add(75, 50, 100), 25);
    }

    #[test]
    fn sub_wraps() {
        assert_eq!(wrap_sub(0, 1, 4), 3);
        assert_eq!(wrap_sub(3, 1, 4), 2);
        assert_eq!(wrap_sub(1, 6, 4), 3);
    }

    #[test]
    fn zero_capacity() {
        assert_eq!(wrap_add(0, 7, 0), 0);
        assert_eq!(wrap_sub(0, 7, 0), 0);
    }
}
