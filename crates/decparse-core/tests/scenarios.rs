//! End-to-end scenarios with known answers.

use num_bigint::BigUint;

use decparse_core::{
    multiply, multiply_fft, multiply_schoolbook, multiply_toom_cook_3, parse_big_integer,
    parse_decimal, square, BigInt,
};

/// Deterministic limb generator (xorshift64*), so failures reproduce.
struct Rng(u64);

impl Rng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        (x.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 32) as u32
    }

    fn bigint(&mut self, limbs: usize) -> BigInt {
        let mut mag: Vec<u32> = (0..limbs).map(|_| self.next_u32()).collect();
        if let Some(top) = mag.last_mut() {
            *top |= 1 << 31; // pin the bit length
        }
        BigInt::from_signum_and_mag(1, &mag)
    }
}

fn oracle(a: &BigInt, b: &BigInt) -> BigUint {
    BigUint::new(a.magnitude().to_vec()) * BigUint::new(b.magnitude().to_vec())
}

#[test]
fn zeros_and_one() {
    assert_eq!(parse_decimal("0").unwrap(), BigInt::zero());
    assert_eq!(parse_decimal("1").unwrap(), BigInt::from_u64(1));
    assert_eq!(parse_decimal("00000000000000000000").unwrap(), BigInt::zero());
}

#[test]
fn two_to_the_sixty_four_round_trips() {
    let n = parse_decimal("18446744073709551616").unwrap();
    assert_eq!(n.magnitude(), &[0, 0, 1]);
    assert_eq!(n.to_decimal_string(), "18446744073709551616");
}

#[test]
fn thousand_digit_square_matches_digit_string() {
    let digits = "9806543217".repeat(100);
    assert_eq!(digits.len(), 1000);
    let v = parse_big_integer(digits.as_bytes(), 0, digits.len()).unwrap();

    // explicitly computed squared digit string
    let squared_digits = {
        let n: BigUint = digits.parse().unwrap();
        (&n * &n).to_string()
    };
    let expected = parse_big_integer(squared_digits.as_bytes(), 0, squared_digits.len()).unwrap();

    let w = v.clone();
    assert_eq!(multiply(&v, &w, false), expected);
    assert_eq!(square(&v), expected);
    assert_eq!(multiply_fft(&v, &w), expected);
}

#[test]
fn forty_kilobit_operands_cross_algorithms() {
    let mut rng = Rng(0x5EED_CAFE_F00D_0001);
    let a = rng.bigint(1250); // 40_000 bits
    let b = rng.bigint(1250);
    assert_eq!(a.bit_length(), 40_000);

    let via_fft = multiply_fft(&a, &b);
    let via_toom = multiply_toom_cook_3(&a, &b);
    let via_schoolbook = multiply_schoolbook(&a, &b);
    assert_eq!(via_fft, via_toom);
    assert_eq!(via_fft, via_schoolbook);
    assert_eq!(via_fft.magnitude(), &oracle(&a, &b).to_u32_digits()[..]);
}

#[test]
fn million_digit_all_nines_parses() {
    // 10^L - 1 for L >= 64 is congruent to -1 mod 2^64, so the low two
    // limbs of the magnitude are all ones.
    let digits = "9".repeat(1_000_001);
    let v = parse_big_integer(digits.as_bytes(), 0, digits.len()).unwrap();
    assert_eq!(v.signum(), 1);
    assert_eq!(v.magnitude()[0], u32::MAX);
    assert_eq!(v.magnitude()[1], u32::MAX);
    // expected bit length of 10^1000001 - 1
    let expected_bits = (1_000_001f64 * 10f64.log2()).floor() as usize + 1;
    assert_eq!(v.bit_length(), expected_bits);
}

#[test]
fn commutativity_spot_check() {
    // operand sizes span 32..50_000 bits, crossing every dispatch regime
    let mut rng = Rng(0xD1CE_0000_0000_0042);
    for round in 0..1000 {
        let a_limbs = (rng.next_u32() as usize % 1562) + 1;
        let b_limbs = (rng.next_u32() as usize % 1562) + 1;
        let a = rng.bigint(a_limbs);
        let b = rng.bigint(b_limbs);
        assert_eq!(
            multiply(&a, &b, false),
            multiply(&b, &a, false),
            "round {round}"
        );
    }
}

#[test]
fn bits_per_point_row_transitions() {
    // straddle the 19 -> 18 bits-per-point boundary (19 * 2^9 bits)
    let mut rng = Rng(0xABCD_EF01_2345_6789);
    let below = rng.bigint(19 * 512 / 32); // exactly at the boundary
    let above = rng.bigint(19 * 512 / 32 + 1);
    let other = rng.bigint(120);
    for x in [&below, &above] {
        let got = multiply_fft(x, &other);
        assert_eq!(got.magnitude(), &oracle(x, &other).to_u32_digits()[..]);
    }
}

#[test]
fn balanced_packing_edge() {
    // A value whose every 19-bit group is exactly base/2: packing balances
    // each point to the boundary of (-base/2, base/2].
    let groups = 200;
    let mut limbs = vec![0u32; (groups * 19 + 31) / 32];
    for g in 0..groups {
        let bit = g * 19 + 18;
        limbs[bit / 32] |= 1 << (bit % 32);
    }
    let v = BigInt::from_signum_and_mag(1, &limbs);
    let got = multiply_fft(&v, &v);
    let w = v.clone();
    assert_eq!(got.magnitude(), &oracle(&v, &w).to_u32_digits()[..]);
}

#[test]
fn transform_shape_selection_agrees() {
    // Sizes that land on the 3*2^n shape and on the 2^n shape must give
    // identical results for the same mathematical product.
    let mut rng = Rng(0x0BAD_F00D_DEAD_BEEF);
    for limbs in [900usize, 1100, 1400, 1800] {
        let a = rng.bigint(limbs);
        let b = rng.bigint(limbs);
        let got = multiply_fft(&a, &b);
        assert_eq!(got.magnitude(), &oracle(&a, &b).to_u32_digits()[..], "limbs={limbs}");
    }
}
