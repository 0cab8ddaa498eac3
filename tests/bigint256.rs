use smcrypto::primitives::BigInt256;

#[test]
fn hex_parse_accepts_prefix_and_case() {
    let plain = BigInt256::from_hex("DEADBEEF");
    let prefixed = BigInt256::from_hex("0xdeadbeef");
    let upper_prefix = BigInt256::from_hex("0XDEADBEEF");

    assert_eq!(plain, prefixed);
    assert_eq!(plain, upper_prefix);
}

#[test]
fn hex_parse_odd_length_pads_a_nibble() {
    let odd = BigInt256::from_hex("ABC");
    let even = BigInt256::from_hex("0ABC");

    assert_eq!(odd, even);
}

#[test]
fn hex_emit_is_always_64_chars() {
    let v = BigInt256::from_hex("1");

    assert_eq!(v.to_hex().len(), 64);
    assert_eq!(
        v.to_hex(),
        "0000000000000000000000000000000000000000000000000000000000000001"
    );
    assert_eq!(
        BigInt256::from_hex("ff").to_hex_lower(),
        "00000000000000000000000000000000000000000000000000000000000000ff"
    );
}

#[test]
fn hex_parse_oversized_keeps_low_bits() {
    let long = BigInt256::from_hex(
        "11112222000000000000000000000000000000000000000000000000000000000000000000000003",
    );

    let mut expected = [0u8; 32];
    expected[31] = 3;
    assert_eq!(long, BigInt256::from_be_bytes(&expected));
}

#[test]
fn byte_codec_pads_and_truncates() {
    let short = BigInt256::from_be_bytes(&[0x12, 0x34]);
    assert_eq!(short, BigInt256::from_hex("1234"));

    let mut long = vec![0xAAu8; 40];
    long[39] = 0x07;
    let truncated = BigInt256::from_be_bytes(&long);
    let round = truncated.to_be_bytes();
    assert_eq!(&round[..], &long[8..]);
}

#[test]
fn add_reports_carry() {
    let max = BigInt256::from_hex(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
    );

    let (sum, carry) = max.overflowing_add(&BigInt256::ONE);
    assert!(carry);
    assert_eq!(sum, BigInt256::ZERO);

    let (sum, carry) = BigInt256::ONE.overflowing_add(&BigInt256::ONE);
    assert!(!carry);
    assert_eq!(sum, BigInt256::from_hex("2"));
}

#[test]
fn sub_reports_borrow() {
    let (diff, borrow) = BigInt256::ZERO.overflowing_sub(&BigInt256::ONE);
    assert!(borrow);
    assert_eq!(
        diff.to_hex(),
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
    );

    let (diff, borrow) = BigInt256::from_hex("5").overflowing_sub(&BigInt256::from_hex("3"));
    assert!(!borrow);
    assert_eq!(diff, BigInt256::from_hex("2"));
}

#[test]
fn widening_mul_crosses_limbs() {
    // 2^64 * 2^64 = 2^128
    let x = BigInt256::from_hex("10000000000000000");
    let wide = x.widening_mul(&x);

    assert_eq!(wide, [0, 0, 1, 0, 0, 0, 0, 0]);
}

#[test]
fn widening_mul_max_value() {
    let max = BigInt256::from_hex(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
    );

    // (2^256 - 1)^2 = 2^512 - 2^257 + 1
    let wide = max.widening_mul(&max);
    assert_eq!(wide[0], 1);
    assert_eq!(wide[1], 0);
    assert_eq!(wide[2], 0);
    assert_eq!(wide[3], 0);
    assert_eq!(wide[4], 0xFFFFFFFFFFFFFFFE);
    assert_eq!(wide[5], u64::MAX);
    assert_eq!(wide[6], u64::MAX);
    assert_eq!(wide[7], u64::MAX);
}

#[test]
fn mod_add_and_sub_wrap_once() {
    let m = BigInt256::from_hex("11");
    let a = BigInt256::from_hex("10");
    let b = BigInt256::from_hex("5");

    // 16 + 5 mod 17 = 4
    assert_eq!(a.mod_add(&b, &m), BigInt256::from_hex("4"));
    // 5 - 16 mod 17 = 6
    assert_eq!(b.mod_sub(&a, &m), BigInt256::from_hex("6"));
}

#[test]
fn mod_mul_small_values() {
    let m = BigInt256::from_hex("65");

    // 13 * 11 mod 101 = 42
    let r = BigInt256::from_hex("D").mod_mul(&BigInt256::from_hex("B"), &m);
    assert_eq!(r, BigInt256::from_hex("2A"));
}

#[test]
fn mod_pow_small_values() {
    let m = BigInt256::from_hex("7");

    // 3^5 mod 7 = 5
    let r = BigInt256::from_hex("3").mod_pow(&BigInt256::from_hex("5"), &m);
    assert_eq!(r, BigInt256::from_hex("5"));

    // zero exponent yields one
    let r = BigInt256::from_hex("3").mod_pow(&BigInt256::ZERO, &m);
    assert_eq!(r, BigInt256::ONE);
}

#[test]
fn mod_inverse_small_and_large() {
    let m = BigInt256::from_hex("7");
    assert_eq!(
        BigInt256::from_hex("3").mod_inverse(&m),
        BigInt256::from_hex("5")
    );

    // the SM2 group order is prime, so any nonzero value inverts
    let n = BigInt256::from_hex(
        "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFF7203DF6B21C6052B53BBF40939D54123",
    );
    let a = BigInt256::from_hex(
        "6FCBA2EF9AE0AB902BC3BDE3FF915D44BA4CC78F88E2F8E7F8996D3B8CCEEDEE",
    );
    let product = a.mod_mul(&a.mod_inverse(&n), &n);
    assert_eq!(product, BigInt256::ONE, "a * a^-1 must be 1 mod n");
}

#[test]
fn reduce_wide_zero_modulus_yields_zero() {
    let wide = [1u64, 2, 3, 4, 5, 6, 7, 8];

    assert_eq!(BigInt256::reduce_wide(&wide, &BigInt256::ZERO), BigInt256::ZERO);
}

#[test]
fn reduce_wide_small_dividend_passes_through() {
    let wide = [42u64, 0, 0, 0, 0, 0, 0, 0];
    let m = BigInt256::from_hex("100");

    assert_eq!(BigInt256::reduce_wide(&wide, &m), BigInt256::from_hex("2A"));
}

#[test]
fn reduce_wide_matches_known_square() {
    // (p - 1)^2 mod p = 1
    let p = BigInt256::from_hex(
        "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFF",
    );
    let pm1 = p.overflowing_sub(&BigInt256::ONE).0;

    let r = BigInt256::reduce_wide(&pm1.widening_mul(&pm1), &p);
    assert_eq!(r, BigInt256::ONE);
}

#[test]
fn bit_accessors() {
    let v = BigInt256::from_hex("8000000000000001");

    assert!(v.bit(0));
    assert!(v.bit(63));
    assert!(!v.bit(1));
    assert!(!v.bit(256));
    assert!(!v.bit(1000));
    assert_eq!(v.bit_length(), 64);
    assert_eq!(BigInt256::ZERO.bit_length(), 0);
    assert_eq!(BigInt256::ONE.bit_length(), 1);
}

#[test]
fn comparison_runs_most_significant_first() {
    let low = BigInt256::from_hex("FFFFFFFFFFFFFFFF");
    let high = BigInt256::from_hex("10000000000000000");

    assert!(low < high);
    assert!(high > low);
    assert_eq!(low, BigInt256::from_hex("FFFFFFFFFFFFFFFF"));
}

#[test]
fn bitwise_and() {
    let a = BigInt256::from_hex("FF00FF00");
    let b = BigInt256::from_hex("0FF00FF0");

    assert_eq!(a & b, BigInt256::from_hex("0F000F00"));
}
