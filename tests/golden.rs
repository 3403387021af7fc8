//! Golden file integration tests.
//!
//! Reads tests/testdata/zeckendorf_golden.json and checks encoding, signed
//! addition, and ordering against independently computed values.

use std::cmp::Ordering;

use num_bigint::BigInt;
use serde::Deserialize;

use zeck_core::codec::{decode_magnitude, is_canonical};
use zeck_core::{Sign, ZeckendorfValue};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    encodings: Vec<EncodingEntry>,
    additions: Vec<AdditionEntry>,
    comparisons: Vec<ComparisonEntry>,
}

#[derive(Deserialize)]
struct EncodingEntry {
    value: ZeckendorfValue,
    digits: String,
}

#[derive(Deserialize)]
struct AdditionEntry {
    a: ZeckendorfValue,
    b: ZeckendorfValue,
    sum: String,
    digits: String,
}

#[derive(Deserialize)]
struct ComparisonEntry {
    a: ZeckendorfValue,
    b: ZeckendorfValue,
    ordering: String,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/zeckendorf_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn bits(digits: &str) -> Vec<u8> {
    digits.bytes().map(|b| b - b'0').collect()
}

// ---------------------------------------------------------------------------
// Golden: encodings
// ---------------------------------------------------------------------------

#[test]
fn golden_encodings() {
    let data = load_golden_data();
    for entry in &data.encodings {
        let expected = bits(&entry.digits);
        assert_eq!(
            entry.value.digits(),
            expected.as_slice(),
            "digits mismatch for {}",
            entry.value
        );
        assert_eq!(entry.value.is_zero(), expected.is_empty());
    }
}

#[test]
fn golden_encodings_decode_back() {
    let data = load_golden_data();
    for entry in &data.encodings {
        let magnitude = decode_magnitude(&bits(&entry.digits));
        assert_eq!(&magnitude, entry.value.to_bigint().magnitude());
    }
}

#[test]
fn golden_checked_construction() {
    let data = load_golden_data();
    for entry in &data.encodings {
        let rebuilt = ZeckendorfValue::from_digits(entry.value.sign(), &bits(&entry.digits))
            .expect("golden digits are canonical");
        assert_eq!(rebuilt, entry.value);
    }
}

// ---------------------------------------------------------------------------
// Golden: additions
// ---------------------------------------------------------------------------

#[test]
fn golden_additions() {
    let data = load_golden_data();
    for entry in &data.additions {
        let sum = &entry.a + &entry.b;
        assert!(is_canonical(sum.digits()));
        assert_eq!(sum.to_string(), entry.sum, "{} + {}", entry.a, entry.b);
        assert_eq!(
            sum.digits(),
            bits(&entry.digits).as_slice(),
            "{} + {}",
            entry.a,
            entry.b
        );
        let expected_sign = match entry.sum.parse::<BigInt>().unwrap().sign() {
            num_bigint::Sign::Minus => Sign::Negative,
            num_bigint::Sign::NoSign => Sign::Zero,
            num_bigint::Sign::Plus => Sign::Positive,
        };
        assert_eq!(sum.sign(), expected_sign);
    }
}

#[test]
fn golden_additions_commute() {
    let data = load_golden_data();
    for entry in &data.additions {
        assert_eq!(&entry.a + &entry.b, &entry.b + &entry.a);
    }
}

// ---------------------------------------------------------------------------
// Golden: comparisons
// ---------------------------------------------------------------------------

#[test]
fn golden_comparisons() {
    let data = load_golden_data();
    for entry in &data.comparisons {
        let expected = match entry.ordering.as_str() {
            "<" => Ordering::Less,
            "=" => Ordering::Equal,
            ">" => Ordering::Greater,
            other => panic!("unknown ordering {other}"),
        };
        assert_eq!(
            entry.a.cmp(&entry.b),
            expected,
            "{} vs {}",
            entry.a,
            entry.b
        );
        assert_eq!(entry.b.cmp(&entry.a), expected.reverse());
    }
}
