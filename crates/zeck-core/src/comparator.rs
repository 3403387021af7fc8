//! Ordering of Zeckendorf values straight from their digits.

use std::cmp::Ordering;

use crate::value::{Sign, ZeckendorfValue};

/// Compare two canonical magnitudes.
///
/// Canonical sequences have no leading zero, so a longer sequence uses a
/// larger top Fibonacci number than the other can reach. Equal lengths order
/// lexicographically from the most-significant digit.
#[must_use]
pub fn compare_magnitude(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare two signed values: by sign first, then by magnitude, reversed
/// for negatives.
#[must_use]
pub fn compare(a: &ZeckendorfValue, b: &ZeckendorfValue) -> Ordering {
    match a.sign().cmp(&b.sign()) {
        Ordering::Equal => {}
        unequal => return unequal,
    }
    match a.sign() {
        Sign::Zero => Ordering::Equal,
        Sign::Positive => compare_magnitude(a.digits(), b.digits()),
        Sign::Negative => compare_magnitude(a.digits(), b.digits()).reverse(),
    }
}
