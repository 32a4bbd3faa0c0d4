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

//! Operator traits for [`Cint`].
//!
//! These are thin wrappers over [`Cint::apply`], [`Cint::apply_reflected`],
//! [`Cint::try_assign`] and [`Cint::apply_unary`]. Where those return an
//! error, the operator panics with the error's message, the way native
//! integer division by zero panics. Use the `Result` forms to handle the
//! error instead.
//!
//! `x op= y` stores a fresh value in `x`; copies of the old `x` are
//! unaffected.

use super::{BinaryOp, UnaryOp};
use crate::{error::CintError, operand::Operand, value::Cint};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};
use num_traits::Pow;

#[track_caller]
#[inline]
fn expect_value(result: Result<Cint, CintError>) -> Cint {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

macro_rules! binary_operator_impl {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:expr) => {
        impl<R> $trait_name<R> for Cint
        where
            R: Operand,
        {
            type Output = Cint;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: R) -> Cint {
                expect_value(self.apply($op, rhs))
            }
        }

        impl<R> $assign_trait<R> for Cint
        where
            R: Operand,
        {
            #[track_caller]
            #[inline]
            fn $assign_method(&mut self, rhs: R) {
                if let Err(e) = self.try_assign($op, rhs) {
                    panic!("{}", e);
                }
            }
        }
    };
}

binary_operator_impl!(Add, add, AddAssign, add_assign, BinaryOp::Add);
binary_operator_impl!(Sub, sub, SubAssign, sub_assign, BinaryOp::Sub);
binary_operator_impl!(Mul, mul, MulAssign, mul_assign, BinaryOp::Mul);
binary_operator_impl!(Div, div, DivAssign, div_assign, BinaryOp::Div);
binary_operator_impl!(Rem, rem, RemAssign, rem_assign, BinaryOp::Rem);
binary_operator_impl!(Shl, shl, ShlAssign, shl_assign, BinaryOp::Shl);
binary_operator_impl!(Shr, shr, ShrAssign, shr_assign, BinaryOp::Shr);
binary_operator_impl!(BitAnd, bitand, BitAndAssign, bitand_assign, BinaryOp::BitAnd);
binary_operator_impl!(BitOr, bitor, BitOrAssign, bitor_assign, BinaryOp::BitOr);
binary_operator_impl!(BitXor, bitxor, BitXorAssign, bitxor_assign, BinaryOp::BitXor);

impl<R> Pow<R> for Cint
where
    R: Operand,
{
    type Output = Cint;

    #[track_caller]
    #[inline]
    fn pow(self, rhs: R) -> Cint {
        expect_value(self.apply(BinaryOp::Pow, rhs))
    }
}

/// Operators with a native number on the left: `5 - x`, `1 << x`.
macro_rules! reflected_operator_impl {
    ($trait_name:ident, $method:ident, $op:expr; $($t:ty),* $(,)*) => {
        $(impl $trait_name<Cint> for $t {
            type Output = Cint;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: Cint) -> Cint {
                expect_value(rhs.apply_reflected($op, self))
            }
        })*
    };
}

macro_rules! reflected_operators_for {
    ($($t:ty),* $(,)*) => {
        reflected_operator_impl!(Add, add, BinaryOp::Add; $($t),*);
        reflected_operator_impl!(Sub, sub, BinaryOp::Sub; $($t),*);
        reflected_operator_impl!(Mul, mul, BinaryOp::Mul; $($t),*);
        reflected_operator_impl!(Div, div, BinaryOp::Div; $($t),*);
        reflected_operator_impl!(Rem, rem, BinaryOp::Rem; $($t),*);
        reflected_operator_impl!(Pow, pow, BinaryOp::Pow; $($t),*);
        reflected_operator_impl!(Shl, shl, BinaryOp::Shl; $($t),*);
        reflected_operator_impl!(Shr, shr, BinaryOp::Shr; $($t),*);
        reflected_operator_impl!(BitAnd, bitand, BinaryOp::BitAnd; $($t),*);
        reflected_operator_impl!(BitOr, bitor, BinaryOp::BitOr; $($t),*);
        reflected_operator_impl!(BitXor, bitxor, BinaryOp::BitXor; $($t),*);
    };
}

reflected_operators_for!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize, f32, f64);

impl Neg for Cint {
    type Output = Cint;

    #[inline]
    fn neg(self) -> Cint {
        expect_value(self.apply_unary(UnaryOp::Neg))
    }
}

impl Not for Cint {
    type Output = Cint;

    /// # Panics
    ///
    /// Panics for float values; `~` is integer-only.
    #[track_caller]
    #[inline]
    fn not(self) -> Cint {
        expect_value(self.apply_unary(UnaryOp::Not))
    }
}

impl Cint {
    /// Wrapping absolute value; `abs(MIN) == MIN` for signed integers.
    #[inline]
    pub fn abs(self) -> Cint {
        expect_value(self.apply_unary(UnaryOp::Abs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CType;

    #[test]
    fn test_binary_operators() {
        assert_eq!(Cint::u8(250) + Cint::u8(10), 4);
        assert_eq!(Cint::u8(3) - 5, 254);
        assert_eq!(Cint::i8(64) * 2, -128);
        assert_eq!(Cint::i8(-7) / 2, -4);
        assert_eq!(Cint::i8(-7) % 2, 1);
        assert_eq!(Cint::u8(0b1100) & 0b1010, 0b1000);
        assert_eq!(Cint::u8(0b1100) | 0b1010, 0b1110);
        assert_eq!(Cint::u8(0b1100) ^ 0b1010, 0b0110);
        assert_eq!(Cint::u8(1) << 7, 128);
        assert_eq!(Cint::i16(-256) >> 4, -16);
        assert_eq!(Cint::i32(3).pow(3), 27);
    }

    #[test]
    fn test_reflected_operators() {
        assert_eq!(1i32 + Cint::u8(255), 0);
        assert_eq!((1i32 + Cint::u8(255)).ctype(), CType::U8);
        assert_eq!(5i32 - Cint::u8(6), 255);
        assert_eq!(-1i32 * Cint::i8(-128), -128);
        assert_eq!(10i32 / Cint::i8(-3), -4);
        assert_eq!(1u32 << Cint::u8(4), 16);
        assert_eq!(Pow::pow(2i32, Cint::u16(10)), 1024);
        assert_eq!((2.5f64 * Cint::f32(2.0)).ctype(), CType::F32);
    }

    #[test]
    fn test_assign_operators_rebind() {
        let x = Cint::i32(100);
        let mut y = x;
        y += 10;
        y *= 2;
        y -= Cint::i64(20);
        y /= 4;
        y %= 7;
        y <<= 2;
        y >>= 1;
        y |= 1;
        y &= 0xF;
        y ^= 2;
        assert_eq!(x, 100);
        assert_eq!(y.ctype(), CType::I32);
        // 110, 220, 200, 50, 1, 4, 2, 3, 3, 1
        assert_eq!(y, 1);
    }

    #[test]
    #[should_panic(expected = "immutable")]
    fn test_assign_on_sentinel_panics() {
        let mut m = CType::U32.max();
        m += 1;
    }

    #[test]
    #[should_panic(expected = "division or modulo by zero")]
    fn test_division_by_zero_panics() {
        let _ = Cint::u8(1) / 0;
    }

    #[test]
    #[should_panic(expected = "Unsupported operand type for %: F64")]
    fn test_float_rem_panics() {
        let _ = Cint::f64(1.0) % 1;
    }

    #[test]
    fn test_unary_operators() {
        assert_eq!(-Cint::i8(-128), -128);
        assert_eq!(-Cint::u16(1), 65_535);
        assert_eq!(!Cint::u8(0), 255);
        assert_eq!(!Cint::i32(0), -1);
        assert_eq!(Cint::i64(i64::MIN).abs(), i64::MIN);
        assert_eq!(Cint::f32(-1.5).abs(), 1.5);
    }
}
