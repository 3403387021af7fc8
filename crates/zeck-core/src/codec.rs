//! Conversion between big-integer magnitudes and Zeckendorf digit sequences.
//!
//! Digit sequences are most-significant first. The digit at index `i` of a
//! sequence of length `L` weighs F(L - i + 1), so the last digit weighs F(2).
//!
//! ```text
//! 38 = 34 + 3 + 1 = F(9) + F(4) + F(2)  ->  1 0 0 0 0 1 0 1
//! ```

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::constants::FIBONACCI_OFFSET;
use crate::sequence::FibonacciSequence;
use crate::value::Sign;

/// Encode a magnitude into its canonical Zeckendorf digits.
///
/// The greedy choice of the largest fitting Fibonacci number always yields
/// the canonical form; `encode(0)` is the empty sequence.
#[must_use]
pub fn encode(magnitude: &BigUint) -> Vec<u8> {
    encode_with(FibonacciSequence::global(), magnitude)
}

/// [`encode`] against an explicit term source.
#[must_use]
pub fn encode_with(sequence: &FibonacciSequence, magnitude: &BigUint) -> Vec<u8> {
    let bases = sequence.bases_up_to(magnitude);
    let mut remainder = magnitude.clone();
    let mut digits = Vec::with_capacity(bases.len());
    for base in bases.iter().rev() {
        if *base <= remainder {
            remainder -= base;
            digits.push(1);
        } else {
            digits.push(0);
        }
    }
    debug_assert!(remainder.is_zero());
    digits
}

/// Decode digits into their unsigned magnitude.
#[must_use]
pub fn decode_magnitude(digits: &[u8]) -> BigUint {
    decode_magnitude_with(FibonacciSequence::global(), digits)
}

/// [`decode_magnitude`] against an explicit term source.
#[must_use]
pub fn decode_magnitude_with(sequence: &FibonacciSequence, digits: &[u8]) -> BigUint {
    let weights = sequence.terms(FIBONACCI_OFFSET, FIBONACCI_OFFSET + digits.len());
    digits
        .iter()
        .rev()
        .zip(&weights)
        .filter(|(digit, _)| **digit != 0)
        .fold(BigUint::zero(), |acc, (&digit, weight)| {
            acc + weight * u32::from(digit)
        })
}

/// Decode digits and apply `sign`.
#[must_use]
pub fn decode(digits: &[u8], sign: Sign) -> BigInt {
    let magnitude = decode_magnitude(digits);
    BigInt::from_biguint(sign.into(), magnitude)
}

/// Check the canonical invariants: only 0/1 digits, no two adjacent ones,
/// and no leading zero.
#[must_use]
pub fn is_canonical(digits: &[u8]) -> bool {
    if digits.first().is_some_and(|&d| d != 1) {
        return false;
    }
    if digits.iter().any(|&d| d > 1) {
        return false;
    }
    !digits.windows(2).any(|pair| pair[0] == 1 && pair[1] == 1)
}
