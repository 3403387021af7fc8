//! Signed addition carried out on Zeckendorf digits.
//!
//! Like signs add digit-wise and normalize. Unlike signs subtract the smaller
//! magnitude from the larger one digit-wise; a negative digit borrows from
//! the nearest positive digit above it, where giving up one F(k) supplies
//! F(k-1) + F(k-2) to the two positions below. The borrowed sequence is
//! non-negative and goes through the normalizer like a sum would.

use std::cmp::Ordering;

use tracing::trace;

use crate::comparator::compare_magnitude;
use crate::normalizer::normalize_weights;
use crate::value::ZeckendorfValue;

/// `a + b`.
#[must_use]
pub fn add(a: &ZeckendorfValue, b: &ZeckendorfValue) -> ZeckendorfValue {
    if a.is_zero() {
        return b.clone();
    }
    if b.is_zero() {
        return a.clone();
    }

    if a.sign() == b.sign() {
        let weights = sum_aligned(a.digits(), b.digits());
        return ZeckendorfValue::from_canonical(a.sign(), normalize_weights(weights));
    }

    match compare_magnitude(a.digits(), b.digits()) {
        Ordering::Equal => ZeckendorfValue::ZERO,
        Ordering::Greater => {
            let weights = subtract_with_borrow(a.digits(), b.digits());
            ZeckendorfValue::from_canonical(a.sign(), normalize_weights(weights))
        }
        Ordering::Less => {
            let weights = subtract_with_borrow(b.digits(), a.digits());
            ZeckendorfValue::from_canonical(b.sign(), normalize_weights(weights))
        }
    }
}

/// Digit `j` counted from the least-significant end, zero past the top.
fn lsb_digit(digits: &[u8], j: usize) -> u8 {
    if j < digits.len() {
        digits[digits.len() - 1 - j]
    } else {
        0
    }
}

/// Right-align and add digit-wise, least-significant first.
fn sum_aligned(a: &[u8], b: &[u8]) -> Vec<u32> {
    let len = a.len().max(b.len());
    (0..len)
        .map(|j| u32::from(lsb_digit(a, j)) + u32::from(lsb_digit(b, j)))
        .collect()
}

/// Right-align and subtract `smaller` from `larger` digit-wise, borrowing
/// until no digit is negative. Least-significant first.
///
/// Positions are settled from the top down. When position `j` is reached,
/// everything below it is still the untouched difference of two canonical
/// sequences, worth less than F(j + 2); so whenever `j` holds a deficit some
/// digit above it must still be positive.
fn subtract_with_borrow(larger: &[u8], smaller: &[u8]) -> Vec<u32> {
    let len = larger.len();
    let mut weights: Vec<i64> = (0..len)
        .map(|j| i64::from(lsb_digit(larger, j)) - i64::from(lsb_digit(smaller, j)))
        .collect();

    let mut borrows = 0usize;
    for j in (0..len).rev() {
        while weights[j] < 0 {
            let source = (j + 1..len)
                .find(|&i| weights[i] > 0)
                .expect("larger magnitude always has a positive digit above a deficit");
            weights[source] -= 1;
            if source == 1 {
                // F(3) = F(2) + F(1) and F(1) = F(2)
                weights[0] += 2;
            } else {
                weights[source - 1] += 1;
                weights[source - 2] += 1;
            }
            borrows += 1;
        }
    }
    trace!(borrows, len, "Subtracted aligned magnitudes");

    weights
        .into_iter()
        .map(|w| u32::try_from(w).expect("borrowing leaves every digit non-negative"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_magnitude, encode, is_canonical};
    use num_bigint::BigUint;

    fn z(n: i64) -> ZeckendorfValue {
        ZeckendorfValue::from(n)
    }

    #[test]
    fn zero_is_identity() {
        assert_eq!(add(&z(0), &z(38)), z(38));
        assert_eq!(add(&z(-38), &z(0)), z(-38));
        assert_eq!(add(&z(0), &z(0)), z(0));
    }

    #[test]
    fn four_plus_four_is_canonical_eight() {
        let sum = add(&z(4), &z(4));
        assert_eq!(sum.digits(), encode(&BigUint::from(8u32)).as_slice());
        assert_eq!(sum, z(8));
    }

    #[test]
    fn like_signs() {
        assert_eq!(add(&z(38), &z(17)), z(55));
        assert_eq!(add(&z(-38), &z(-17)), z(-55));
    }

    #[test]
    fn unlike_signs_cancel() {
        assert_eq!(add(&z(21), &z(-21)), z(0));
        assert!(add(&z(-5), &z(5)).is_zero());
    }

    #[test]
    fn unlike_signs_take_larger_sign() {
        assert_eq!(add(&z(38), &z(-17)), z(21));
        assert_eq!(add(&z(17), &z(-38)), z(-21));
        assert_eq!(add(&z(-1), &z(2)), z(1));
        assert_eq!(add(&z(100), &z(-1)), z(99));
    }

    #[test]
    fn borrow_cascades_from_distant_digit() {
        // 89 - 1: the only positive digit is eleven positions above F(2).
        assert_eq!(add(&z(89), &z(-1)), z(88));
        assert_eq!(add(&z(-89), &z(54)), z(-35));
    }

    #[test]
    fn subtract_all_small_pairs() {
        for a in 1u32..120 {
            for b in 1..a {
                let big = encode(&BigUint::from(a));
                let small = encode(&BigUint::from(b));
                let raw = subtract_with_borrow(&big, &small);
                let digits = normalize_weights(raw);
                assert!(is_canonical(&digits));
                assert_eq!(decode_magnitude(&digits), BigUint::from(a - b), "{a} - {b}");
            }
        }
    }

    #[test]
    fn sum_aligned_pads_shorter_operand() {
        assert_eq!(sum_aligned(&[1, 0, 1], &[1]), [2, 0, 1]);
        assert_eq!(sum_aligned(&[1], &[1, 0, 0, 1]), [2, 0, 0, 1]);
    }
}
