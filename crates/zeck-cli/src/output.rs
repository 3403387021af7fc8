//! CLI output formatting.

use std::cmp::Ordering;

use num_bigint::BigInt;
use serde::Serialize;
use zeck_core::ZeckendorfValue;

/// Digits as a bit string; zero is the empty string.
#[must_use]
pub fn bit_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// Render digits for text output, `(empty)` for zero.
#[must_use]
pub fn format_digits(digits: &[u8]) -> String {
    if digits.is_empty() {
        return "(empty)".to_string();
    }
    bit_string(digits)
}

/// Format a decimal value for display, truncating the middle of very long
/// numbers unless `verbose`.
#[must_use]
pub fn format_result(value: &BigInt, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && s.len() > 100 {
        format!("{}...{} ({} digits)", &s[..50], &s[s.len() - 50..], s.len())
    } else {
        s
    }
}

/// `38 = F(9) + F(4) + F(2)`
#[must_use]
pub fn format_decomposition(value: &ZeckendorfValue) -> String {
    let terms: Vec<String> = value
        .fibonacci_indices()
        .into_iter()
        .map(|n| format!("F({n})"))
        .collect();
    let sum = match terms.len() {
        0 => "0".to_string(),
        1 => terms[0].clone(),
        _ => terms.join(" + "),
    };
    if value.is_negative() && terms.len() > 1 {
        format!("{value} = -({sum})")
    } else if value.is_negative() {
        format!("{value} = -{sum}")
    } else {
        format!("{value} = {sum}")
    }
}

/// Symbol for an ordering.
#[must_use]
pub fn format_ordering(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

/// JSON view of a single value. `digits` is the raw bit string, empty for
/// zero, so it round-trips through [`ZeckendorfValue::from_digits`].
#[derive(Debug, Clone, Serialize)]
pub struct ValueReport {
    pub decimal: ZeckendorfValue,
    pub signum: i32,
    pub digits: String,
    pub fibonacci_indices: Vec<usize>,
}

impl From<&ZeckendorfValue> for ValueReport {
    fn from(value: &ZeckendorfValue) -> Self {
        Self {
            decimal: value.clone(),
            signum: value.signum(),
            digits: bit_string(value.digits()),
            fibonacci_indices: value.fibonacci_indices(),
        }
    }
}

/// JSON view of one CLI operation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub operation: &'static str,
    pub operands: Vec<ValueReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ValueReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<&'static str>,
}
