#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::{BigInt, Sign};

use zeck_core::codec::is_canonical;
use zeck_core::ZeckendorfValue;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks signs and the split point between the two operands
    let control = data[0];
    let rest = &data[1..data.len().min(257)];
    let split = usize::from(control >> 2) % rest.len();
    let sign_of = |bit: u8| if control & bit != 0 { Sign::Minus } else { Sign::Plus };
    let a = BigInt::from_bytes_le(sign_of(1), &rest[..split]);
    let b = BigInt::from_bytes_le(sign_of(2), &rest[split..]);

    let za = ZeckendorfValue::from(&a);
    let zb = ZeckendorfValue::from(&b);
    let sum = &za + &zb;

    assert!(is_canonical(sum.digits()));
    assert_eq!(sum.to_bigint(), &a + &b, "{a} + {b}");
    assert_eq!(sum, &zb + &za);
    assert_eq!(za.cmp(&zb), a.cmp(&b));
});
