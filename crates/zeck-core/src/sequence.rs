//! Fibonacci terms on demand, memoized in a process-wide table.
//!
//! The shared table is append-only: readers take the read lock, a miss takes
//! the write lock and extends the table with the additive recurrence. The
//! length is re-checked under the write lock, so each term is appended at
//! most once no matter how many threads miss together.

use std::sync::LazyLock;

use num_bigint::BigUint;
use parking_lot::RwLock;
use tracing::trace;

use crate::constants::{FIBONACCI_OFFSET, FIB_TABLE};
use crate::iterator::FibIterator;

static GLOBAL: LazyLock<FibonacciSequence> = LazyLock::new(FibonacciSequence::new);

/// Source of Fibonacci numbers F(n), n >= 0.
#[derive(Debug)]
pub struct FibonacciSequence {
    terms: Option<RwLock<Vec<BigUint>>>,
}

impl FibonacciSequence {
    /// Create a memoizing sequence seeded with F(0)..=F(93).
    #[must_use]
    pub fn new() -> Self {
        let seed = FIB_TABLE.iter().map(|&v| BigUint::from(v)).collect();
        Self {
            terms: Some(RwLock::new(seed)),
        }
    }

    /// Create a sequence that recomputes every term.
    #[must_use]
    pub fn unmemoized() -> Self {
        Self { terms: None }
    }

    /// The process-wide memoized sequence.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Whether computed terms are kept.
    #[must_use]
    pub fn is_memoized(&self) -> bool {
        self.terms.is_some()
    }

    /// Number of terms currently held (0 when unmemoized).
    #[must_use]
    pub fn cached_terms(&self) -> usize {
        self.terms.as_ref().map_or(0, |terms| terms.read().len())
    }

    /// F(n).
    #[must_use]
    pub fn term(&self, n: usize) -> BigUint {
        let Some(terms) = &self.terms else {
            return FibIterator::new()
                .nth(n)
                .map(|(_, value)| value)
                .unwrap_or_default();
        };

        if let Some(value) = terms.read().get(n) {
            return value.clone();
        }

        let mut terms = terms.write();
        Self::extend_to(&mut terms, n);
        terms[n].clone()
    }

    /// F(start), F(start + 1), ..., F(end - 1).
    #[must_use]
    pub fn terms(&self, start: usize, end: usize) -> Vec<BigUint> {
        if start >= end {
            return Vec::new();
        }
        let Some(terms) = &self.terms else {
            return FibIterator::new()
                .skip(start)
                .take(end - start)
                .map(|(_, value)| value)
                .collect();
        };

        {
            let terms = terms.read();
            if end <= terms.len() {
                return terms[start..end].to_vec();
            }
        }

        let mut terms = terms.write();
        Self::extend_to(&mut terms, end - 1);
        terms[start..end].to_vec()
    }

    /// The Zeckendorf bases F(2), F(3), ... up to and including the largest
    /// term not exceeding `magnitude`, in ascending order.
    #[must_use]
    pub fn bases_up_to(&self, magnitude: &BigUint) -> Vec<BigUint> {
        let Some(terms) = &self.terms else {
            return FibIterator::from_base()
                .map(|(_, value)| value)
                .take_while(|value| value <= magnitude)
                .collect();
        };

        let mut end = FIBONACCI_OFFSET;
        loop {
            {
                let terms = terms.read();
                while end < terms.len() && terms[end] <= *magnitude {
                    end += 1;
                }
                if end < terms.len() {
                    return terms[FIBONACCI_OFFSET..end].to_vec();
                }
            }
            // Every cached term fits; grow the table geometrically and rescan.
            let target = (end * 2).max(end + 1);
            Self::extend_to(&mut terms.write(), target);
        }
    }

    fn extend_to(terms: &mut Vec<BigUint>, n: usize) {
        if n < terms.len() {
            return;
        }
        let before = terms.len();
        terms.reserve(n + 1 - before);
        while terms.len() <= n {
            let len = terms.len();
            let next = &terms[len - 1] + &terms[len - 2];
            terms.push(next);
        }
        trace!(from = before, to = terms.len(), "Extended Fibonacci table");
    }
}

impl Default for FibonacciSequence {
    fn default() -> Self {
        Self::new()
    }
}
