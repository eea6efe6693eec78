//! ALU Logical Operation Tests
//!
//! Deterministic vectors for AND, OR, NOR, XOR, NAND, XNOR and NOT. Logical
//! operations never raise flags.

use alu64_core::units::alu::logic;
use alu64_core::{Alu, AluOp, Flags};
use rstest::rstest;

use crate::common::{ALTERNATING_5, ALTERNATING_A, EDGE_VALUES, I64_MAX, I64_MIN, NEG1, ONE, ZERO};

fn value(op: AluOp, a: i64, b: i64) -> i64 {
    Alu::execute(op, a, b).value
}

#[rstest]
#[case(0b1100, 0b1010, 0b1000)]
#[case(NEG1, I64_MIN, I64_MIN)]
#[case(ALTERNATING_A, ALTERNATING_5, ZERO)]
#[case(NEG1, NEG1, NEG1)]
fn and(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
    assert_eq!(value(AluOp::And, a, b), expected);
}

#[rstest]
#[case(0b1100, 0b1010, 0b1110)]
#[case(ALTERNATING_A, ALTERNATING_5, NEG1)]
#[case(I64_MIN, I64_MAX, NEG1)]
#[case(ZERO, ZERO, ZERO)]
fn or(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
    assert_eq!(value(AluOp::Or, a, b), expected);
}

#[rstest]
#[case(ZERO, ZERO, NEG1)]
#[case(0b1100, 0b1010, !0b1110)]
#[case(ALTERNATING_A, ALTERNATING_5, ZERO)]
#[case(ONE, ZERO, -2)]
fn nor(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
    assert_eq!(value(AluOp::Nor, a, b), expected);
}

#[rstest]
#[case(0b1100, 0b1010, 0b0110)]
#[case(NEG1, I64_MAX, I64_MIN)]
#[case(ALTERNATING_A, ALTERNATING_A, ZERO)]
#[case(ALTERNATING_A, ALTERNATING_5, NEG1)]
fn xor(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
    assert_eq!(value(AluOp::Xor, a, b), expected);
}

#[rstest]
#[case(NEG1, NEG1, ZERO)]
#[case(ZERO, NEG1, NEG1)]
#[case(0b1100, 0b1010, !0b1000)]
fn nand(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
    assert_eq!(value(AluOp::Nand, a, b), expected);
}

#[rstest]
#[case(5, 5, NEG1)]
#[case(ZERO, NEG1, ZERO)]
#[case(0b1100, 0b1010, !0b0110)]
fn xnor(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
    assert_eq!(value(AluOp::Xnor, a, b), expected);
}

#[rstest]
#[case(ZERO, NEG1)]
#[case(NEG1, ZERO)]
#[case(I64_MAX, I64_MIN)]
#[case(I64_MIN, I64_MAX)]
#[case(ALTERNATING_A, ALTERNATING_5)]
fn not(#[case] a: i64, #[case] expected: i64) {
    assert_eq!(Alu::execute_unary(AluOp::Not, a).value, expected);
    assert_eq!(logic::not(a).value, expected);
}

#[test]
fn not_ignores_second_operand() {
    assert_eq!(value(AluOp::Not, ONE, NEG1), -2);
}

#[test]
fn logical_operations_never_raise_flags() {
    let ops = [
        AluOp::And,
        AluOp::Or,
        AluOp::Nor,
        AluOp::Xor,
        AluOp::Nand,
        AluOp::Xnor,
        AluOp::Not,
    ];
    for op in ops {
        for a in EDGE_VALUES {
            for b in EDGE_VALUES {
                assert_eq!(Alu::execute(op, a, b).flags, Flags::CLEAR, "{op}({a}, {b})");
            }
        }
    }
}

#[test]
fn submodule_matches_native_operators() {
    for a in EDGE_VALUES {
        for b in EDGE_VALUES {
            assert_eq!(logic::and(a, b).value, a & b);
            assert_eq!(logic::or(a, b).value, a | b);
            assert_eq!(logic::nor(a, b).value, !(a | b));
            assert_eq!(logic::xor(a, b).value, a ^ b);
            assert_eq!(logic::nand(a, b).value, !(a & b));
            assert_eq!(logic::xnor(a, b).value, !(a ^ b));
        }
    }
}

#[test]
fn execute_non_logic_op_is_clear_zero() {
    assert_eq!(logic::execute(AluOp::SignedAdd, 3, 4).value, 0);
}
