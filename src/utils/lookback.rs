use alloc::boxed::Box;

/// A fixed-capacity ring buffer holding the observations that precede the next one.
///
/// Once full, each push overwrites the oldest observation. A capacity of zero
/// is valid and stores nothing, which is how a window of size one is modelled.
#[derive(Debug, Clone)]
pub struct Lookback<T> {
    /// Storage for the retained observations
    data: Box<[T]>,
    /// Index of the oldest retained observation
    head: usize,
    /// Number of retained observations, never above `data.len()`
    len: usize,
}

impl<T: Default + Copy> Lookback<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![T::default(); capacity].into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Appends an observation, overwriting the oldest one once full
    ///
    /// With zero capacity nothing is stored.
    pub fn push(&mut self, value: T) {
        let cap = self.capacity();
        if cap == 0 {
            return;
        }

        if self.is_full() {
            self.data[self.head] = value;
            self.head = (self.head + 1) % cap;
        } else {
            self.data[(self.head + self.len) % cap] = value;
            self.len += 1;
        }
    }

    pub fn reset(&mut self) {
        self.head = 0;
        self.len = 0;
        self.data.fill(T::default());
    }

    /// Iterates oldest to newest, pairing each observation with its distance
    /// to the observation that will be pushed next
    pub fn iter_with_distance(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        let cap = self.capacity();
        (0..self.len).map(move |i| (self.len - i, self.data[(self.head + i) % cap]))
    }
}

#[cfg(test)]
mod tests {
    use super::Lookback;
    use alloc::vec::Vec;

    fn contents(buf: &Lookback<i32>) -> Vec<(usize, i32)> {
        buf.iter_with_distance().collect()
    }

    #[test]
    fn test_fill_then_overwrite() {
        let mut buf = Lookback::new(2);
        buf.push(1);
        buf.push(2);
        assert!(buf.is_full());
        assert_eq!(contents(&buf), vec![(2, 1), (1, 2)]);

        buf.push(3);
        buf.push(4);
        assert!(buf.is_full());
        assert_eq!(contents(&buf), vec![(2, 3), (1, 4)]);
    }

    #[test]
    fn test_distances_count_down_to_one() {
        let mut buf = Lookback::new(4);
        buf.push(10);
        buf.push(20);
        buf.push(30);
        assert!(!buf.is_full());
        assert_eq!(contents(&buf), vec![(3, 10), (2, 20), (1, 30)]);

        buf.push(40);
        buf.push(50);
        assert_eq!(contents(&buf), vec![(4, 20), (3, 30), (2, 40), (1, 50)]);
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut buf: Lookback<i32> = Lookback::new(0);
        assert_eq!(buf.capacity(), 0);
        buf.push(7);
        buf.push(8);
        assert!(contents(&buf).is_empty());
    }

    #[test]
    fn test_reset() {
        let mut buf = Lookback::new(3);
        buf.push(1);
        buf.push(2);
        buf.push(3);
        buf.push(4);
        buf.reset();

        assert!(contents(&buf).is_empty());
        assert_eq!(buf.head, 0);
        assert!(buf.data.iter().all(|&v| v == 0));

        buf.push(42);
        assert_eq!(contents(&buf), vec![(1, 42)]);
    }
}
