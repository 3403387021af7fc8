//! # zeck-core
//!
//! Immutable arbitrary-precision integers stored in the Zeckendorf
//! (Fibonacci) numeral system. Addition and comparison work directly on the
//! digit sequences, following Fenwick (2003) and Ahlbach, Usatine &
//! Pippenger (2012); decoding to a conventional integer is only needed for
//! conversions.

pub mod adder;
pub mod codec;
pub mod comparator;
pub mod constants;
pub mod errors;
pub mod iterator;
pub mod normalizer;
pub mod sequence;
pub mod value;

// Re-exports
pub use codec::{decode, decode_magnitude, encode, is_canonical};
pub use constants::{exit_codes, FIBONACCI_OFFSET, FIB_TABLE, MAX_FIB_U64};
pub use errors::ZeckError;
pub use sequence::FibonacciSequence;
pub use value::{Sign, ZeckendorfValue};

/// Encode a decimal string and return its Zeckendorf digits.
///
/// # Example
/// ```
/// assert_eq!(zeck_core::zeckendorf("38").unwrap(), [1, 0, 0, 0, 0, 1, 0, 1]);
/// assert!(zeck_core::zeckendorf("0").unwrap().is_empty());
/// ```
pub fn zeckendorf(decimal: &str) -> Result<Vec<u8>, ZeckError> {
    let value: ZeckendorfValue = decimal.parse()?;
    Ok(value.digits().to_vec())
}
