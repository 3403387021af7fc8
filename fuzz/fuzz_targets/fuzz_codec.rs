#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use zeck_core::codec::{decode_magnitude, encode, is_canonical};
use zeck_core::normalizer::normalize;

fuzz_target!(|data: &[u8]| {
    // Bytes as a little-endian magnitude, capped at 256 bytes for speed
    let data = &data[..data.len().min(256)];
    let magnitude = BigUint::from_bytes_le(data);
    let digits = encode(&magnitude);
    assert!(is_canonical(&digits));
    assert_eq!(decode_magnitude(&digits), magnitude);

    // Same bytes as a raw digit sequence for the normalizer
    let raw: Vec<u32> = data.iter().map(|&b| u32::from(b % 4)).collect();
    let normalized = normalize(&raw);
    assert!(is_canonical(&normalized));
    let widened: Vec<u8> = data.iter().map(|&b| b % 4).collect();
    assert_eq!(decode_magnitude(&normalized), decode_magnitude(&widened));
});
