//! Reduction of raw digit sequences to canonical Zeckendorf form.
//!
//! Raw sequences come out of digit-wise arithmetic: digits may exceed 1 and
//! ones may sit next to each other. Two value-preserving rewrites are applied
//! until neither matches:
//!
//! - carry: `F(k) + F(k+1) -> F(k+2)`
//! - split: a doubled digit hands one copy down as `F(k-1) + F(k-2)`, whose
//!   `F(k-1)` share carries straight back up with the copy left at `F(k)`,
//!   so `2F(k) -> F(k+1) + F(k-2)`. At the bottom, `2F(2) -> F(3)` and
//!   `2F(3) -> F(4) + F(2)` since `F(1) = F(2)`.
//!
//! Every rewrite strictly lowers the measure
//! `(sum of digits, sum of position * digit, digit at F(3))` in lexicographic
//! order, so the loop terminates whatever the scheduling.

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::trace;

use crate::codec::{encode_with, is_canonical};
use crate::constants::FIBONACCI_OFFSET;
use crate::sequence::FibonacciSequence;

/// Largest raw digit reduced by rewriting. A split only sheds two copies, so
/// larger digits are evaluated and re-encoded instead.
pub const MAX_REWRITE_DIGIT: u32 = 3;

/// Normalize a raw, most-significant-first digit sequence.
///
/// Digits may hold any `u32` value; the input is weighted exactly like
/// [`crate::codec::decode_magnitude`]. The result is the unique canonical
/// sequence with the same value, empty for zero.
#[must_use]
pub fn normalize(raw: &[u32]) -> Vec<u8> {
    if raw.iter().any(|&d| d > MAX_REWRITE_DIGIT) {
        return reencode(raw);
    }
    normalize_weights(raw.iter().rev().copied().collect())
}

/// Evaluate a raw sequence and encode the value greedily.
fn reencode(raw: &[u32]) -> Vec<u8> {
    let sequence = FibonacciSequence::global();
    let weights = sequence.terms(FIBONACCI_OFFSET, FIBONACCI_OFFSET + raw.len());
    let magnitude = raw
        .iter()
        .rev()
        .zip(&weights)
        .filter(|(digit, _)| **digit != 0)
        .fold(BigUint::zero(), |acc, (&digit, weight)| acc + weight * digit);
    trace!(len = raw.len(), "Re-encoded raw digits above the rewrite bound");
    encode_with(sequence, &magnitude)
}

/// Normalize a least-significant-first sequence: `weights[j]` counts copies
/// of F(j + 2).
///
/// Rewrites never raise the digit sum, so no digit outgrows the input total.
pub(crate) fn normalize_weights(mut weights: Vec<u32>) -> Vec<u8> {
    let mut rewrites = 0usize;
    loop {
        let mut changed = false;
        let mut j = weights.len();
        while j > 0 {
            j -= 1;
            if weights[j] >= 2 {
                split(&mut weights, j);
            } else if weights[j] >= 1 && weights.get(j + 1).is_some_and(|&w| w >= 1) {
                carry(&mut weights, j);
            } else {
                continue;
            }
            rewrites += 1;
            changed = true;
            // The rewrite may have raised digits above `j`; rescan from there.
            j = (j + 3).min(weights.len());
        }
        if !changed {
            break;
        }
    }

    while weights.last() == Some(&0) {
        weights.pop();
    }
    trace!(rewrites, len = weights.len(), "Normalized digit sequence");

    let digits: Vec<u8> = weights.iter().rev().map(|&w| u8::from(w == 1)).collect();
    debug_assert!(is_canonical(&digits), "normalizer produced {digits:?}");
    digits
}

fn bump(weights: &mut Vec<u32>, j: usize) {
    if j >= weights.len() {
        weights.resize(j + 1, 0);
    }
    weights[j] += 1;
}

fn carry(weights: &mut Vec<u32>, j: usize) {
    weights[j] -= 1;
    weights[j + 1] -= 1;
    bump(weights, j + 2);
}

fn split(weights: &mut Vec<u32>, j: usize) {
    weights[j] -= 2;
    bump(weights, j + 1);
    match j {
        0 => {}
        1 => weights[0] += 1,
        _ => weights[j - 2] += 1,
    }
}
