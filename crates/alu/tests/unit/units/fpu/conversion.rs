//! Integer to Float/Double Conversion Tests
//!
//! Expected bit patterns are written out in hex and cross-checked against the
//! native encodings. Covers round-to-nearest-even ties, unsigned
//! reinterpretation of negative words and zero-extension of binary32 results.

use alu64_core::units::fpu::conversion::{int_to_double, int_to_float, to_f32, to_f64};
use alu64_core::units::fpu::Fpu;
use alu64_core::{Alu, AluOp, Flags, Signedness};
use rstest::rstest;

use crate::common::{EDGE_VALUES, I64_MAX, I64_MIN, NEG1, ONE, ZERO, word};

#[rstest]
#[case(ZERO, 0x0000_0000)]
#[case(ONE, 0x3F80_0000)]
#[case(NEG1, 0xBF80_0000)]
#[case(I64_MIN, 0xDF00_0000)]
#[case(I64_MAX, 0x5F00_0000)]
#[case(1 << 24, 0x4B80_0000)]
#[case((1 << 24) + 1, 0x4B80_0000)]
#[case((1 << 24) + 3, 0x4B80_0002)]
fn signed_to_float(#[case] a: i64, #[case] bits: u32) {
    let out = Alu::execute_unary(AluOp::SignedToFloat, a);
    assert_eq!(out.value, i64::from(bits));
    assert_eq!(out.flags, Flags::CLEAR);
}

#[rstest]
#[case(ZERO, 0x0000_0000)]
#[case(ONE, 0x3F80_0000)]
#[case(NEG1, 0x5F80_0000)]
#[case(I64_MIN, 0x5F00_0000)]
fn unsigned_to_float(#[case] a: i64, #[case] bits: u32) {
    assert_eq!(Alu::execute_unary(AluOp::UnsignedToFloat, a).value, i64::from(bits));
}

#[rstest]
#[case(ZERO, 0x0000_0000_0000_0000)]
#[case(ONE, 0x3FF0_0000_0000_0000)]
#[case(NEG1, 0xBFF0_0000_0000_0000)]
#[case(I64_MIN, 0xC3E0_0000_0000_0000)]
#[case(I64_MAX, 0x43E0_0000_0000_0000)]
#[case((1 << 53) + 1, 0x4340_0000_0000_0000)]
#[case((1 << 53) + 3, 0x4340_0000_0000_0002)]
fn signed_to_double(#[case] a: i64, #[case] bits: u64) {
    let out = Alu::execute_unary(AluOp::SignedToDouble, a);
    assert_eq!(out.value, word(bits));
    assert_eq!(out.flags, Flags::CLEAR);
}

#[rstest]
#[case(ZERO, 0x0000_0000_0000_0000)]
#[case(NEG1, 0x43F0_0000_0000_0000)]
#[case(I64_MIN, 0x43E0_0000_0000_0000)]
fn unsigned_to_double(#[case] a: i64, #[case] bits: u64) {
    assert_eq!(Alu::execute_unary(AluOp::UnsignedToDouble, a).value, word(bits));
}

#[test]
fn signed_minus_one_to_float_matches_native_encoding() {
    let out = Alu::execute_unary(AluOp::SignedToFloat, NEG1);
    assert_eq!(out.value as u64 >> 32, 0);
    assert_eq!(out.value as u32, (-1.0_f32).to_bits());
}

#[test]
fn float_results_are_zero_extended() {
    for a in EDGE_VALUES {
        for op in [AluOp::SignedToFloat, AluOp::UnsignedToFloat] {
            let value = Alu::execute_unary(op, a).value;
            assert!(value >= 0, "{op}({a}) = {value:#x}");
            assert_eq!(value as u64 >> 32, 0);
        }
    }
}

#[test]
fn ties_round_to_even() {
    // 2^24 + 1 is halfway between 2^24 and 2^24 + 2; the even mantissa wins.
    assert_eq!(to_f32((1 << 24) + 1, Signedness::Signed), 16_777_216.0);
    // 2^24 + 3 is halfway between 2^24 + 2 and 2^24 + 4.
    assert_eq!(to_f32((1 << 24) + 3, Signedness::Signed), 16_777_220.0);
    assert_eq!(to_f64((1 << 53) + 1, Signedness::Signed), 9_007_199_254_740_992.0);
}

#[test]
fn unsigned_reinterprets_negative_words() {
    assert_eq!(to_f64(NEG1, Signedness::Unsigned), 18_446_744_073_709_551_616.0);
    assert_eq!(to_f64(NEG1, Signedness::Signed), -1.0);
    assert_eq!(to_f32(I64_MIN, Signedness::Unsigned), 9_223_372_036_854_775_808.0);
}

#[test]
fn helpers_agree_with_execute() {
    for a in EDGE_VALUES {
        assert_eq!(Fpu::execute(AluOp::SignedToFloat, a).value, int_to_float(a, Signedness::Signed));
        assert_eq!(
            Fpu::execute(AluOp::UnsignedToDouble, a).value,
            int_to_double(a, Signedness::Unsigned)
        );
    }
}

#[test]
fn execute_non_conversion_op_is_clear_zero() {
    assert_eq!(Fpu::execute(AluOp::SignedAdd, NEG1).value, 0);
}

const ONE_AS_FLOAT: i64 = int_to_float(ONE, Signedness::Signed);
const NEG1_AS_DOUBLE: i64 = int_to_double(NEG1, Signedness::Signed);
const MAX_UNSIGNED_AS_FLOAT: i64 = Fpu::execute(AluOp::UnsignedToFloat, NEG1).value;

#[test]
fn conversions_evaluate_in_const_context() {
    assert_eq!(ONE_AS_FLOAT, 0x3F80_0000);
    assert_eq!(NEG1_AS_DOUBLE as u64, 0xBFF0_0000_0000_0000);
    assert_eq!(MAX_UNSIGNED_AS_FLOAT, 0x5F80_0000);
}
