#![no_main]

use libfuzzer_sys::fuzz_target;

use decparse_core::parse_big_integer;
use num_bigint::BigUint;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > 4096 {
        return;
    }

    let result = parse_big_integer(data, 0, data.len());

    // Compare against num-bigint whenever the input is all digits.
    if data.iter().all(u8::is_ascii_digit) {
        let parsed = result.expect("digit-only input must parse");
        let oracle = BigUint::parse_bytes(data, 10).expect("oracle parse");
        assert_eq!(
            parsed.magnitude(),
            &oracle.to_u32_digits()[..],
            "magnitude mismatch"
        );
    }
});
