//! The immutable Zeckendorf integer.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg};
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::adder;
use crate::codec::{self, is_canonical};
use crate::comparator;
use crate::constants::FIBONACCI_OFFSET;
use crate::errors::ZeckError;
use crate::normalizer::normalize;

/// Sign of a [`ZeckendorfValue`], ordered `Negative < Zero < Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// -1, 0, or 1.
    #[must_use]
    pub fn signum(self) -> i32 {
        match self {
            Self::Negative => -1,
            Self::Zero => 0,
            Self::Positive => 1,
        }
    }

    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Negative => "-",
            Self::Zero => "0",
            Self::Positive => "+",
        })
    }
}

impl From<Sign> for num_bigint::Sign {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Negative => Self::Minus,
            Sign::Zero => Self::NoSign,
            Sign::Positive => Self::Plus,
        }
    }
}

impl From<num_bigint::Sign> for Sign {
    fn from(sign: num_bigint::Sign) -> Self {
        match sign {
            num_bigint::Sign::Minus => Self::Negative,
            num_bigint::Sign::NoSign => Self::Zero,
            num_bigint::Sign::Plus => Self::Positive,
        }
    }
}

/// An immutable arbitrary-precision integer held as a sign and canonical
/// Zeckendorf digits.
///
/// Digits are most-significant first and the last digit stands for F(2).
/// Every value is canonical: no adjacent ones, only 0/1 digits, no leading
/// zero, and zero has no digits at all. Equal integers therefore have
/// identical digits, and the derived equality and hash are exact.
///
/// # Example
/// ```
/// use zeck_core::ZeckendorfValue;
///
/// let four: ZeckendorfValue = "4".parse().unwrap();
/// let eight = &four + &four;
/// assert_eq!(eight.digits(), &[1, 0, 0, 0, 0]);
/// assert_eq!(eight.to_string(), "8");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ZeckendorfValue {
    sign: Sign,
    digits: Vec<u8>,
}

impl ZeckendorfValue {
    /// The value zero.
    pub const ZERO: Self = Self {
        sign: Sign::Zero,
        digits: Vec::new(),
    };

    #[must_use]
    pub fn zero() -> Self {
        Self::ZERO
    }

    #[must_use]
    pub fn one() -> Self {
        Self {
            sign: Sign::Positive,
            digits: vec![1],
        }
    }

    /// Wrap digits already known to be canonical.
    pub(crate) fn from_canonical(sign: Sign, digits: Vec<u8>) -> Self {
        debug_assert!(is_canonical(&digits), "non-canonical digits {digits:?}");
        if digits.is_empty() {
            return Self::ZERO;
        }
        debug_assert!(sign != Sign::Zero);
        Self { sign, digits }
    }

    /// Build a value from explicit canonical digits.
    ///
    /// Fails with [`ZeckError::InvariantViolation`] when the digits are not
    /// canonical or disagree with `sign` about being zero.
    pub fn from_digits(sign: Sign, digits: &[u8]) -> Result<Self, ZeckError> {
        if !is_canonical(digits) {
            return Err(ZeckError::InvariantViolation(format!(
                "digits {digits:?} are not in canonical Zeckendorf form"
            )));
        }
        if (sign == Sign::Zero) != digits.is_empty() {
            return Err(ZeckError::InvariantViolation(format!(
                "sign {sign:?} does not match digits {digits:?}"
            )));
        }
        Ok(Self {
            sign,
            digits: digits.to_vec(),
        })
    }

    /// Build a value from arbitrary non-negative digits, normalizing them.
    ///
    /// A zero result is always [`ZeckendorfValue::ZERO`]; a non-zero result
    /// with [`Sign::Zero`] is an invariant violation.
    pub fn from_raw_digits(sign: Sign, raw: &[u32]) -> Result<Self, ZeckError> {
        let digits = normalize(raw);
        if digits.is_empty() {
            return Ok(Self::ZERO);
        }
        if sign == Sign::Zero {
            return Err(ZeckError::InvariantViolation(format!(
                "sign {sign:?} given for non-zero digits {raw:?}"
            )));
        }
        Ok(Self { sign, digits })
    }

    fn from_magnitude(sign: Sign, magnitude: &BigUint) -> Self {
        Self::from_canonical(sign, codec::encode(magnitude))
    }

    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i32 {
        self.sign.signum()
    }

    /// Canonical digits, most-significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        match self.sign {
            Sign::Negative => Self {
                sign: Sign::Positive,
                digits: self.digits.clone(),
            },
            _ => self.clone(),
        }
    }

    /// Indices `n` of the Fibonacci numbers F(n) making up the magnitude,
    /// largest first.
    #[must_use]
    pub fn fibonacci_indices(&self) -> Vec<usize> {
        let len = self.digits.len();
        self.digits
            .iter()
            .enumerate()
            .filter(|(_, d)| **d == 1)
            .map(|(i, _)| len - i - 1 + FIBONACCI_OFFSET)
            .collect()
    }

    /// Exact conversion to a signed big integer.
    #[must_use]
    pub fn to_bigint(&self) -> BigInt {
        codec::decode(&self.digits, self.sign)
    }

    /// Exact unsigned magnitude.
    #[must_use]
    pub fn magnitude(&self) -> BigUint {
        codec::decode_magnitude(&self.digits)
    }

    /// Nearest `f64`; fails when the value is beyond the finite range.
    pub fn to_f64(&self) -> Result<f64, ZeckError> {
        self.to_bigint()
            .to_f64()
            .filter(|v| v.is_finite())
            .ok_or(ZeckError::Overflow { target: "f64" })
    }

    /// Nearest `f32`; fails when the value is beyond the finite range.
    pub fn to_f32(&self) -> Result<f32, ZeckError> {
        self.to_bigint()
            .to_f32()
            .filter(|v| v.is_finite())
            .ok_or(ZeckError::Overflow { target: "f32" })
    }
}

/// Parse `-?[0-9]+`. Rejected before any encoding happens.
fn parse_decimal(s: &str) -> Result<(bool, BigUint), ZeckError> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ZeckError::Format(s.to_string()));
    }
    let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| ZeckError::Format(s.to_string()))?;
    Ok((negative, magnitude))
}

impl FromStr for ZeckendorfValue {
    type Err = ZeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, magnitude) = parse_decimal(s)?;
        let sign = if negative { Sign::Negative } else { Sign::Positive };
        Ok(Self::from_magnitude(sign, &magnitude))
    }
}

impl Default for ZeckendorfValue {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for ZeckendorfValue {
    /// `+ ~ [10000101] | 38`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ [", self.sign)?;
        for digit in &self.digits {
            write!(f, "{digit}")?;
        }
        write!(f, "] | {}", self.to_bigint())
    }
}

impl fmt::Display for ZeckendorfValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_bigint(), f)
    }
}

impl Ord for ZeckendorfValue {
    fn cmp(&self, other: &Self) -> Ordering {
        comparator::compare(self, other)
    }
}

impl PartialOrd for ZeckendorfValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for ZeckendorfValue {
    type Output = ZeckendorfValue;

    fn add(self, rhs: Self) -> Self::Output {
        adder::add(&self, &rhs)
    }
}

impl<'a> Add<&'a ZeckendorfValue> for ZeckendorfValue {
    type Output = ZeckendorfValue;

    fn add(self, rhs: &'a ZeckendorfValue) -> Self::Output {
        adder::add(&self, rhs)
    }
}

impl Add<ZeckendorfValue> for &ZeckendorfValue {
    type Output = ZeckendorfValue;

    fn add(self, rhs: ZeckendorfValue) -> Self::Output {
        adder::add(self, &rhs)
    }
}

impl<'a> Add<&'a ZeckendorfValue> for &ZeckendorfValue {
    type Output = ZeckendorfValue;

    fn add(self, rhs: &'a ZeckendorfValue) -> Self::Output {
        adder::add(self, rhs)
    }
}

impl Neg for ZeckendorfValue {
    type Output = ZeckendorfValue;

    fn neg(self) -> Self::Output {
        Self {
            sign: self.sign.negate(),
            digits: self.digits,
        }
    }
}

impl Neg for &ZeckendorfValue {
    type Output = ZeckendorfValue;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Sum for ZeckendorfValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| adder::add(&acc, &v))
    }
}

impl<'a> Sum<&'a ZeckendorfValue> for ZeckendorfValue {
    fn sum<I: Iterator<Item = &'a ZeckendorfValue>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| adder::add(&acc, v))
    }
}

impl num_traits::Zero for ZeckendorfValue {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }
}

impl From<BigInt> for ZeckendorfValue {
    fn from(value: BigInt) -> Self {
        let (sign, magnitude) = value.into_parts();
        Self::from_magnitude(sign.into(), &magnitude)
    }
}

impl From<&BigInt> for ZeckendorfValue {
    fn from(value: &BigInt) -> Self {
        Self::from_magnitude(value.sign().into(), value.magnitude())
    }
}

impl From<BigUint> for ZeckendorfValue {
    fn from(value: BigUint) -> Self {
        Self::from_magnitude(Sign::Positive, &value)
    }
}

impl From<&ZeckendorfValue> for BigInt {
    fn from(value: &ZeckendorfValue) -> Self {
        value.to_bigint()
    }
}

impl From<ZeckendorfValue> for BigInt {
    fn from(value: ZeckendorfValue) -> Self {
        value.to_bigint()
    }
}

macro_rules! impl_primitive_conversions {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ZeckendorfValue {
                fn from(value: $t) -> Self {
                    Self::from(BigInt::from(value))
                }
            }

            impl TryFrom<&ZeckendorfValue> for $t {
                type Error = ZeckError;

                fn try_from(value: &ZeckendorfValue) -> Result<Self, Self::Error> {
                    <$t>::try_from(&value.to_bigint())
                        .map_err(|_| ZeckError::Overflow { target: stringify!($t) })
                }
            }

            impl TryFrom<ZeckendorfValue> for $t {
                type Error = ZeckError;

                fn try_from(value: ZeckendorfValue) -> Result<Self, Self::Error> {
                    <$t>::try_from(&value)
                }
            }
        )*
    };
}

impl_primitive_conversions!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Narrowing conversions return `None` rather than saturating or wrapping.
impl ToPrimitive for ZeckendorfValue {
    fn to_i64(&self) -> Option<i64> {
        i64::try_from(self).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self).ok()
    }

    fn to_i128(&self) -> Option<i128> {
        i128::try_from(self).ok()
    }

    fn to_u128(&self) -> Option<u128> {
        u128::try_from(self).ok()
    }

    fn to_f32(&self) -> Option<f32> {
        ZeckendorfValue::to_f32(self).ok()
    }

    fn to_f64(&self) -> Option<f64> {
        ZeckendorfValue::to_f64(self).ok()
    }
}

impl Serialize for ZeckendorfValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ZeckendorfValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
