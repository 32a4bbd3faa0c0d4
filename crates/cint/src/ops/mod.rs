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

//! # Operators
//!
//! Every operator on a [`Cint`] runs through the same pipeline:
//!
//! 1. extract the raw payload and descriptor of the other operand,
//! 2. resolve the result type by promotion,
//! 3. compute in the widest native domain (`i128` or `f64`),
//! 4. truncate (or round, for `F32`) into the result type.
//!
//! Three forms exist for each binary operator:
//!
//! - [`Cint::apply`]: `self <op> rhs`, promoted result type.
//! - [`Cint::apply_reflected`]: `lhs <op> self`, same promotion, used when a
//!   bare literal is on the left (`5 - x`).
//! - [`Cint::apply_assign`]: the in-place form `self <op>= rhs`. It returns
//!   a fresh value of the receiver's own type and refuses to act on the
//!   `MIN`/`MAX` sentinels. [`Cint::try_assign`] stores that fresh value
//!   back into the receiver.
//!
//! Shifts take their amount from the right operand's raw value; the
//! amount's type does not participate in promotion.
//!
//! ## Submodules
//!
//! - `int`: Wrapping integer kernels (floor division, floor modulo,
//!   exponentiation by squaring, shifts).
//! - `float`: IEEE-754 kernels.
//! - `std_impls`: `std::ops` and `num_traits::Pow` operator impls, which
//!   panic where the `Result` forms return an error.

mod float;
mod int;
mod std_impls;

use crate::{
    error::CintError,
    operand::{Operand, Raw, payload_of},
    promotion::{promote, resolve},
    registry::{CType, TypeDescriptor},
    value::Cint,
};

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    /// Floor division for integer result types, including an integer
    /// divided by a bare float literal (`I8(-7) / 2.0 == I8(-4)`). IEEE
    /// division for float result types.
    Div,
    /// Floor modulo. Integer-only.
    Rem,
    Pow,
    /// Integer-only.
    Shl,
    /// Arithmetic shift on the value. Integer-only.
    Shr,
    /// Integer-only.
    BitAnd,
    /// Integer-only.
    BitOr,
    /// Integer-only.
    BitXor,
}

impl BinaryOp {
    /// Every binary operator.
    pub const ALL: [BinaryOp; 11] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Rem,
        BinaryOp::Pow,
        BinaryOp::Shl,
        BinaryOp::Shr,
        BinaryOp::BitAnd,
        BinaryOp::BitOr,
        BinaryOp::BitXor,
    ];

    /// The operator's symbol, e.g. `"<<"`.
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "**",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
        }
    }

    /// The in-place operator's symbol, e.g. `"<<="`.
    pub const fn assign_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+=",
            BinaryOp::Sub => "-=",
            BinaryOp::Mul => "*=",
            BinaryOp::Div => "/=",
            BinaryOp::Rem => "%=",
            BinaryOp::Pow => "**=",
            BinaryOp::Shl => "<<=",
            BinaryOp::Shr => ">>=",
            BinaryOp::BitAnd => "&=",
            BinaryOp::BitOr => "|=",
            BinaryOp::BitXor => "^=",
        }
    }

    /// Returns `true` for operators that reject float operands.
    pub const fn is_integer_only(self) -> bool {
        matches!(
            self,
            BinaryOp::Rem
                | BinaryOp::Shl
                | BinaryOp::Shr
                | BinaryOp::BitAnd
                | BinaryOp::BitOr
                | BinaryOp::BitXor
        )
    }

    #[inline]
    pub const fn is_shift(self) -> bool {
        matches!(self, BinaryOp::Shl | BinaryOp::Shr)
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A unary operator. None of them promotes; the result keeps the operand's
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Wrapping negation: `-I8(-128) == I8(-128)`.
    Neg,
    /// Identity.
    Pos,
    /// Wrapping absolute value: `abs(I8(-128)) == I8(-128)`.
    Abs,
    /// Bitwise complement within the type's width. Integer-only.
    Not,
}

impl UnaryOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Pos => "+",
            UnaryOp::Abs => "abs",
            UnaryOp::Not => "~",
        }
    }
}

/// One side of a binary operation.
#[derive(Clone, Copy)]
struct Side<'a> {
    raw: Raw,
    descriptor: Option<&'a TypeDescriptor>,
}

impl Side<'_> {
    /// The float type name on this side, if any.
    fn float_type_name(&self) -> Option<&'static str> {
        match (self.descriptor, self.raw) {
            (Some(d), _) if d.is_float => Some(d.name),
            (None, Raw::Float(_)) => Some("float"),
            _ => None,
        }
    }
}

fn evaluate(
    op: BinaryOp,
    symbol: &'static str,
    lhs: Side<'_>,
    rhs: Side<'_>,
    result: CType,
) -> Result<Cint, CintError> {
    if op.is_integer_only() {
        if let Some(type_name) = lhs.float_type_name().or_else(|| rhs.float_type_name()) {
            return Err(CintError::UnsupportedOperand { op: symbol, type_name });
        }
    }

    match (lhs.raw, rhs.raw) {
        (Raw::Int(a), Raw::Int(b)) if result.is_integer() => {
            Ok(Cint::from_int(result, int::binary(op, a, b, result)?))
        }
        (a, b) => {
            let value = float::binary(op, a.as_f64(), b.as_f64()).ok_or(
                CintError::UnsupportedOperand {
                    op: symbol,
                    type_name: result.name(),
                },
            )?;
            // Integer result types keep floor division with a float literal.
            let value = if op == BinaryOp::Div && result.is_integer() {
                value.floor()
            } else {
                value
            };
            Cint::from_float(result, value)
        }
    }
}

impl Cint {
    #[inline]
    fn side(&self) -> Side<'static> {
        Side {
            raw: self.raw(),
            descriptor: Some(self.type_descriptor()),
        }
    }

    /// Computes `self <op> rhs`.
    ///
    /// # Errors
    ///
    /// - [`CintError::IncompatibleOperand`] if `rhs` is not a registry type.
    /// - [`CintError::UnsupportedOperand`] for an integer-only operator with
    ///   a float operand.
    /// - [`CintError::DivisionByZero`] for integer `/` or `%` by zero.
    /// - [`CintError::NegativeShiftCount`] for a negative shift amount.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cint::{BinaryOp, Cint, registry::CType};
    ///
    /// let sum = Cint::u8(250).apply(BinaryOp::Add, Cint::u8(10)).unwrap();
    /// assert_eq!(sum, 4);
    ///
    /// let mixed = Cint::i8(-1).apply(BinaryOp::Mul, Cint::u32(2)).unwrap();
    /// assert_eq!(mixed.ctype(), CType::U32);
    /// assert_eq!(mixed, u32::MAX - 1);
    /// ```
    pub fn apply<R>(&self, op: BinaryOp, rhs: R) -> Result<Cint, CintError>
    where
        R: Operand,
    {
        let (raw, descriptor) = payload_of(&rhs);
        let promoted = promote(self.ctype(), descriptor)?;
        let result = if op.is_shift() { self.ctype() } else { promoted };
        evaluate(op, op.symbol(), self.side(), Side { raw, descriptor }, result)
    }

    /// Computes `lhs <op> self`, for a left operand that is not a `Cint`.
    ///
    /// Promotion is the same as for [`Cint::apply`], so a bare literal on
    /// the left never changes the type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cint::{BinaryOp, Cint};
    ///
    /// let r = Cint::u8(3).apply_reflected(BinaryOp::Sub, 1).unwrap();
    /// assert_eq!(r, 254);
    /// ```
    pub fn apply_reflected<L>(&self, op: BinaryOp, lhs: L) -> Result<Cint, CintError>
    where
        L: Operand,
    {
        let (raw, descriptor) = payload_of(&lhs);
        let promoted = promote(self.ctype(), descriptor)?;
        let result = match (op.is_shift(), descriptor) {
            (true, Some(d)) => resolve(self.ctype(), d)?,
            (true, None) => self.ctype(),
            (false, _) => promoted,
        };
        evaluate(op, op.symbol(), Side { raw, descriptor }, self.side(), result)
    }

    /// Computes the in-place form `self <op>= rhs` without mutating `self`.
    ///
    /// The result keeps the receiver's type: `rhs` is coerced into it
    /// rather than promoted. The result is a fresh, non-sentinel value.
    ///
    /// # Errors
    ///
    /// [`CintError::UnsupportedOperation`] if `self` is a `MIN`/`MAX`
    /// sentinel, otherwise the same errors as [`Cint::apply`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cint::{BinaryOp, Cint, CintError, registry::CType};
    ///
    /// let x = Cint::u8(100);
    /// let r = x.apply_assign(BinaryOp::Add, Cint::u64(200)).unwrap();
    /// assert_eq!(r.ctype(), CType::U8);
    /// assert_eq!(r, 44);
    /// assert_eq!(x, 100);
    ///
    /// assert!(matches!(
    ///     CType::U8.max().apply_assign(BinaryOp::Add, 1),
    ///     Err(CintError::UnsupportedOperation { .. })
    /// ));
    /// ```
    pub fn apply_assign<R>(&self, op: BinaryOp, rhs: R) -> Result<Cint, CintError>
    where
        R: Operand,
    {
        if self.is_sentinel() {
            return Err(CintError::UnsupportedOperation {
                op: op.assign_symbol(),
                type_name: self.ctype().name(),
            });
        }
        let (raw, descriptor) = payload_of(&rhs);
        promote(self.ctype(), descriptor)?;
        evaluate(op, op.assign_symbol(), self.side(), Side { raw, descriptor }, self.ctype())
    }

    /// Replaces `self` with the result of `self <op>= rhs`.
    ///
    /// On error `self` is left unchanged.
    pub fn try_assign<R>(&mut self, op: BinaryOp, rhs: R) -> Result<(), CintError>
    where
        R: Operand,
    {
        *self = self.apply_assign(op, rhs)?;
        Ok(())
    }

    /// Applies a unary operator.
    ///
    /// # Errors
    ///
    /// [`CintError::UnsupportedOperand`] for `~` on a float.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cint::{Cint, UnaryOp};
    ///
    /// assert_eq!(Cint::i8(-128).apply_unary(UnaryOp::Neg).unwrap(), -128);
    /// assert_eq!(Cint::u16(0).apply_unary(UnaryOp::Not).unwrap(), 65_535);
    /// assert!(Cint::f32(1.0).apply_unary(UnaryOp::Not).is_err());
    /// ```
    pub fn apply_unary(&self, op: UnaryOp) -> Result<Cint, CintError> {
        let ty = self.ctype();
        match (op, self.raw()) {
            (UnaryOp::Neg, Raw::Int(a)) => Ok(Cint::from_int(ty, a.wrapping_neg())),
            (UnaryOp::Pos, Raw::Int(a)) => Ok(Cint::from_int(ty, a)),
            (UnaryOp::Abs, Raw::Int(a)) => Ok(Cint::from_int(ty, a.wrapping_abs())),
            (UnaryOp::Not, Raw::Int(a)) => Ok(Cint::from_int(ty, !a)),
            (UnaryOp::Neg, Raw::Float(f)) => Cint::from_float(ty, -f),
            (UnaryOp::Pos, Raw::Float(f)) => Cint::from_float(ty, f),
            (UnaryOp::Abs, Raw::Float(f)) => Cint::from_float(ty, f.abs()),
            (UnaryOp::Not, Raw::Float(_)) => Err(CintError::UnsupportedOperand {
                op: op.symbol(),
                type_name: ty.name(),
            }),
        }
    }
}

macro_rules! try_binary_impl {
    ($($method:ident => $op:expr),* $(,)*) => {
        impl Cint {
            $(
                #[doc = concat!("Shorthand for [`Cint::apply`] with `", stringify!($op), "`.")]
                #[inline]
                pub fn $method<R>(&self, rhs: R) -> Result<Cint, CintError>
                where
                    R: Operand,
                {
                    self.apply($op, rhs)
                }
            )*
        }
    };
}

try_binary_impl!(
    try_add => BinaryOp::Add,
    try_sub => BinaryOp::Sub,
    try_mul => BinaryOp::Mul,
    try_div => BinaryOp::Div,
    try_rem => BinaryOp::Rem,
    try_pow => BinaryOp::Pow,
    try_shl => BinaryOp::Shl,
    try_shr => BinaryOp::Shr,
    try_bitand => BinaryOp::BitAnd,
    try_bitor => BinaryOp::BitOr,
    try_bitxor => BinaryOp::BitXor,
);
