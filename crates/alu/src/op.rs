//! ALU operation catalogue.
//!
//! Enumerates every operation the model evaluates, along with the metadata a
//! vector generator needs to drive it: how many operands it takes, which unit
//! computes it and its display name. Opcode numbering belongs to the target
//! hardware and is deliberately absent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::Signedness;

/// Number of operands an operation consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    /// One operand (`NOT`, negate, int-to-float conversions).
    Unary,
    /// Two operands.
    Binary,
}

impl Arity {
    /// Operand count.
    pub const fn operands(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// Operation class, which also fixes which flags can ever be raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpClass {
    /// Bitwise logic; flags always clear.
    Logical,
    /// Shifts and rotates; flags always clear.
    ShiftRotate,
    /// Negation; may overflow.
    Negate,
    /// Add, subtract, multiply; may overflow.
    Arithmetic,
    /// Divide and modulo; may overflow or divide by zero.
    DivideModulo,
    /// Integer to float/double bit pattern; flags always clear.
    Conversion,
}

/// An operation understood by [`Alu::execute`](crate::units::alu::Alu::execute).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AluOp {
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise NOR.
    Nor,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NAND.
    Nand,
    /// Bitwise XNOR.
    Xnor,
    /// Bitwise NOT (unary).
    Not,
    /// Logical shift left by a signed amount.
    Shl,
    /// Logical shift right by a signed amount.
    Shr,
    /// Rotate left by a signed amount.
    Rotl,
    /// Rotate right by a signed amount.
    Rotr,
    /// Arithmetic shift right by a signed amount.
    Ashr,
    /// Two's-complement negation (unary).
    Negate,
    /// Unsigned addition.
    UnsignedAdd,
    /// Signed addition.
    SignedAdd,
    /// Unsigned subtraction.
    UnsignedSub,
    /// Signed subtraction.
    SignedSub,
    /// Unsigned multiplication.
    UnsignedMul,
    /// Signed multiplication.
    SignedMul,
    /// Unsigned integer division.
    UnsignedDiv,
    /// Unsigned integer modulo.
    UnsignedMod,
    /// Signed floor division.
    SignedDiv,
    /// Signed floor modulo.
    SignedMod,
    /// Unsigned integer to binary32 bit pattern (unary).
    UnsignedToFloat,
    /// Signed integer to binary32 bit pattern (unary).
    SignedToFloat,
    /// Unsigned integer to binary64 bit pattern (unary).
    UnsignedToDouble,
    /// Signed integer to binary64 bit pattern (unary).
    SignedToDouble,
}

impl AluOp {
    /// Every operation, bitwise group first, in the order test suites list them.
    pub const ALL: [Self; 27] = [
        Self::And,
        Self::Or,
        Self::Nor,
        Self::Xor,
        Self::Nand,
        Self::Xnor,
        Self::Not,
        Self::Shl,
        Self::Shr,
        Self::Rotl,
        Self::Rotr,
        Self::Ashr,
        Self::Negate,
        Self::UnsignedAdd,
        Self::SignedAdd,
        Self::UnsignedSub,
        Self::SignedSub,
        Self::UnsignedMul,
        Self::SignedMul,
        Self::UnsignedDiv,
        Self::UnsignedMod,
        Self::SignedDiv,
        Self::SignedMod,
        Self::UnsignedToFloat,
        Self::SignedToFloat,
        Self::UnsignedToDouble,
        Self::SignedToDouble,
    ];

    /// Operand count class.
    pub const fn arity(self) -> Arity {
        match self {
            Self::Not
            | Self::Negate
            | Self::UnsignedToFloat
            | Self::SignedToFloat
            | Self::UnsignedToDouble
            | Self::SignedToDouble => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    /// Operation class.
    pub const fn class(self) -> OpClass {
        match self {
            Self::And | Self::Or | Self::Nor | Self::Xor | Self::Nand | Self::Xnor | Self::Not => {
                OpClass::Logical
            }
            Self::Shl | Self::Shr | Self::Rotl | Self::Rotr | Self::Ashr => OpClass::ShiftRotate,
            Self::Negate => OpClass::Negate,
            Self::UnsignedAdd
            | Self::SignedAdd
            | Self::UnsignedSub
            | Self::SignedSub
            | Self::UnsignedMul
            | Self::SignedMul => OpClass::Arithmetic,
            Self::UnsignedDiv | Self::UnsignedMod | Self::SignedDiv | Self::SignedMod => {
                OpClass::DivideModulo
            }
            Self::UnsignedToFloat
            | Self::SignedToFloat
            | Self::UnsignedToDouble
            | Self::SignedToDouble => OpClass::Conversion,
        }
    }

    /// Operand interpretation for operations that have one.
    pub const fn signedness(self) -> Option<Signedness> {
        match self {
            Self::UnsignedAdd
            | Self::UnsignedSub
            | Self::UnsignedMul
            | Self::UnsignedDiv
            | Self::UnsignedMod
            | Self::UnsignedToFloat
            | Self::UnsignedToDouble => Some(Signedness::Unsigned),
            Self::Negate
            | Self::SignedAdd
            | Self::SignedSub
            | Self::SignedMul
            | Self::SignedDiv
            | Self::SignedMod
            | Self::SignedToFloat
            | Self::SignedToDouble => Some(Signedness::Signed),
            _ => None,
        }
    }

    /// Human-readable name used in generated test headers.
    pub const fn name(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Nor => "NOR",
            Self::Xor => "XOR",
            Self::Nand => "NAND",
            Self::Xnor => "XNOR",
            Self::Not => "NOT",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
            Self::Rotl => "ROTL",
            Self::Rotr => "ROTR",
            Self::Ashr => "ASHR",
            Self::Negate => "Negate",
            Self::UnsignedAdd => "Unsigned Addition",
            Self::SignedAdd => "Signed Addition",
            Self::UnsignedSub => "Unsigned Subtraction",
            Self::SignedSub => "Signed Subtraction",
            Self::UnsignedMul => "Unsigned Multiplication",
            Self::SignedMul => "Signed Multiplication",
            Self::UnsignedDiv => "Unsigned Integer Division",
            Self::UnsignedMod => "Unsigned Integer Modulo",
            Self::SignedDiv => "Signed Integer Division",
            Self::SignedMod => "Signed Integer Modulo",
            Self::UnsignedToFloat => "Unsigned Integer to Float",
            Self::SignedToFloat => "Signed Integer to Float",
            Self::UnsignedToDouble => "Unsigned Integer to Double",
            Self::SignedToDouble => "Signed Integer to Double",
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
