// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Error type shared by every fallible `Cint` operation.
//!
//! Integer overflow is never an error. The variants below cover the cases
//! where an operation has no meaningful fixed-width result: malformed
//! constructor input, operands outside the registry, integer-only operators
//! applied to floats, and in-place operators applied to the immutable
//! `MIN`/`MAX` sentinels.

/// The error type for `Cint` construction and operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CintError {
    /// The constructor input cannot be represented by the target type
    /// (unparsable text, a non-finite float for an integer type, or a byte
    /// buffer that is too short).
    InvalidValue {
        /// The registry name of the target type.
        type_name: &'static str,
        /// A human-readable description of the rejected input.
        reason: String,
    },
    /// One of the operands has a type outside the registry.
    IncompatibleOperand {
        /// The type name of the left operand.
        lhs: &'static str,
        /// The type name of the right operand.
        rhs: &'static str,
    },
    /// An integer-only operator (`%`, `<<`, `>>`, `&`, `|`, `^`, `~`) was
    /// applied to a float operand.
    UnsupportedOperand {
        /// The operator symbol, e.g. `"%"` or `"<<="`.
        op: &'static str,
        /// The float type that caused the rejection.
        type_name: &'static str,
    },
    /// An in-place operator was applied to a `MIN`/`MAX` sentinel.
    UnsupportedOperation {
        /// The in-place operator symbol, e.g. `"+="`.
        op: &'static str,
        /// The registry name of the sentinel's type.
        type_name: &'static str,
    },
    /// Integer division, modulo, or a negative power of zero.
    DivisionByZero {
        /// The registry name of the result type.
        type_name: &'static str,
    },
    /// A shift by a negative amount.
    NegativeShiftCount {
        /// The rejected shift amount.
        amount: i128,
    },
}

impl CintError {
    #[inline]
    pub(crate) fn invalid_value(type_name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            type_name,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for CintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { type_name, reason } => {
                write!(f, "Invalid value for {}: {}", type_name, reason)
            }
            Self::IncompatibleOperand { lhs, rhs } => write!(
                f,
                "Cannot perform arithmetic operations between {} and {}",
                lhs, rhs
            ),
            Self::UnsupportedOperand { op, type_name } => {
                write!(f, "Unsupported operand type for {}: {}", op, type_name)
            }
            Self::UnsupportedOperation { op, type_name } => write!(
                f,
                "Cannot apply {} to the immutable {} MIN/MAX sentinel",
                op, type_name
            ),
            Self::DivisionByZero { type_name } => {
                write!(f, "{} division or modulo by zero", type_name)
            }
            Self::NegativeShiftCount { amount } => write!(f, "Negative shift count: {}", amount),
        }
    }
}

impl std::error::Error for CintError {}
