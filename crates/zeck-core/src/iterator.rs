//! Lazy Fibonacci iterator using the standard additive recurrence.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Lazy iterator over the Fibonacci sequence.
///
/// Yields `(index, F(index))` pairs starting from F(0).
///
/// # Example
/// ```
/// use zeck_core::iterator::FibIterator;
/// let fibs: Vec<_> = FibIterator::new().take(7).map(|(_, v)| v.to_string()).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
#[derive(Debug, Clone)]
pub struct FibIterator {
    a: BigUint,
    b: BigUint,
    index: usize,
}

impl FibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: BigUint::zero(),
            b: BigUint::one(),
            index: 0,
        }
    }

    /// Start iteration at the first Zeckendorf base element, F(2).
    #[must_use]
    pub fn from_base() -> Self {
        Self {
            a: BigUint::one(),
            b: BigUint::from(2u32),
            index: 2,
        }
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = (usize, BigUint);

    fn next(&mut self) -> Option<Self::Item> {
        let next = &self.a + &self.b;
        let val = std::mem::replace(&mut self.a, std::mem::replace(&mut self.b, next));
        let idx = self.index;
        self.index += 1;
        Some((idx, val))
    }
}
