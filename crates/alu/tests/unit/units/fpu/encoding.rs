//! IEEE-754 Bit-Pattern Extraction Tests
//!
//! Bit vectors must reproduce the native binary32/binary64 layouts exactly,
//! including signed zero, subnormals, infinities and NaN.

use alu64_core::codec::{from_bits_unsigned, Width};
use alu64_core::units::fpu::encoding::{
    double_word, f32_bit_vector, f32_bit_vector_narrow, f64_bit_vector, float_word,
};
use rstest::rstest;

#[rstest]
#[case(1.0)]
#[case(-1.0)]
#[case(-0.0)]
#[case(f32::MIN_POSITIVE)]
#[case(f32::from_bits(1))]
#[case(f32::INFINITY)]
#[case(f32::NEG_INFINITY)]
#[case(f32::NAN)]
#[case(f32::MAX)]
fn f32_layout_is_native(#[case] f: f32) {
    let wide = f32_bit_vector(f);
    assert_eq!(wide.width(), Width::WORD);
    assert_eq!(from_bits_unsigned(&wide), u64::from(f.to_bits()));
    assert!(wide.iter().take(32).all(|bit| !bit), "left padding must be zero");

    let narrow = f32_bit_vector_narrow(f);
    assert_eq!(narrow.width(), Width::SINGLE);
    assert_eq!(narrow.raw(), u64::from(f.to_bits()));
}

#[rstest]
#[case(1.0)]
#[case(-2.5)]
#[case(-0.0)]
#[case(f64::MIN_POSITIVE)]
#[case(f64::from_bits(1))]
#[case(f64::INFINITY)]
#[case(f64::NAN)]
fn f64_layout_is_native(#[case] f: f64) {
    let v = f64_bit_vector(f);
    assert_eq!(v.width(), Width::WORD);
    assert_eq!(v.raw(), f.to_bits());
    assert_eq!(double_word(f) as u64, f.to_bits());
}

#[test]
fn sign_bit_positions() {
    // binary32 sign sits at index 32 of the padded vector, index 0 of the narrow one.
    assert!(f32_bit_vector(-1.0)[32]);
    assert!(!f32_bit_vector(-1.0)[0]);
    assert!(f32_bit_vector_narrow(-1.0)[0]);
    assert!(f64_bit_vector(-0.0)[0]);
    assert_eq!(f64_bit_vector(-0.0).count_ones(), 1);
}

#[test]
fn float_word_of_minus_one() {
    assert_eq!(float_word(-1.0), 0xBF80_0000);
    assert_eq!(f32_bit_vector(-1.0).to_string(), format!("{}{:032b}", "0".repeat(32), 0xBF80_0000_u32));
}

#[test]
fn subnormal_and_nan_patterns() {
    assert_eq!(float_word(f32::from_bits(1)), 1);
    assert_eq!(float_word(f32::NAN), i64::from(f32::NAN.to_bits()));
    assert_eq!(double_word(f64::INFINITY) as u64, 0x7FF0_0000_0000_0000);
}
