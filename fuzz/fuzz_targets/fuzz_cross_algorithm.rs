#![no_main]

use libfuzzer_sys::fuzz_target;

use decparse_core::{multiply_fft, multiply_schoolbook, multiply_toom_cook_3, BigInt};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 || data.len() > 2048 {
        return;
    }

    // Split the input into two limb vectors.
    let mid = data.len() / 2;
    let to_limbs = |bytes: &[u8]| -> Vec<u32> {
        bytes
            .chunks(4)
            .map(|c| {
                let mut buf = [0u8; 4];
                buf[..c.len()].copy_from_slice(c);
                u32::from_le_bytes(buf)
            })
            .collect()
    };
    let a = BigInt::from_signum_and_mag(1, &to_limbs(&data[..mid]));
    let b = BigInt::from_signum_and_mag(1, &to_limbs(&data[mid..]));
    if a.is_zero() || b.is_zero() {
        return;
    }

    let schoolbook = multiply_schoolbook(&a, &b);
    let toom = multiply_toom_cook_3(&a, &b);
    let fft = multiply_fft(&a, &b);
    assert_eq!(schoolbook, toom, "schoolbook != toom-cook");
    assert_eq!(schoolbook, fft, "schoolbook != fft");
});
