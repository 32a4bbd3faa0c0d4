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

//! Integer kernels. Inputs are mathematical values; outputs are congruent
//! to the mathematical result modulo 2^64 and are truncated by the caller.
//! Every step wraps at 128 bits, which preserves that congruence.

use super::BinaryOp;
use crate::{error::CintError, registry::CType};

/// Evaluates an integer binary operator whose result has type `result`.
pub(crate) fn binary(op: BinaryOp, a: i128, b: i128, result: CType) -> Result<i128, CintError> {
    let division_by_zero = || CintError::DivisionByZero {
        type_name: result.name(),
    };

    match op {
        BinaryOp::Add => Ok(a.wrapping_add(b)),
        BinaryOp::Sub => Ok(a.wrapping_sub(b)),
        BinaryOp::Mul => Ok(a.wrapping_mul(b)),
        BinaryOp::Div => floor_div(a, b).ok_or_else(division_by_zero),
        BinaryOp::Rem => floor_mod(a, b).ok_or_else(division_by_zero),
        BinaryOp::Pow => pow(a, b).ok_or_else(division_by_zero),
        BinaryOp::Shl => shift_amount(b).map(|n| if n >= 128 { 0 } else { a << n }),
        BinaryOp::Shr => shift_amount(b).map(|n| a >> n.min(127)),
        BinaryOp::BitAnd => Ok(a & b),
        BinaryOp::BitOr => Ok(a | b),
        BinaryOp::BitXor => Ok(a ^ b),
    }
}

/// Division rounding toward negative infinity. `None` on a zero divisor.
///
/// `i8::MIN / -1` has no in-range quotient; the caller's truncation maps
/// `128` back to `-128`, as two's-complement hardware does.
#[inline]
pub(crate) fn floor_div(a: i128, b: i128) -> Option<i128> {
    if b == 0 {
        return None;
    }
    let q = a.wrapping_div(b);
    if a.wrapping_rem(b) != 0 && ((a < 0) != (b < 0)) {
        Some(q.wrapping_sub(1))
    } else {
        Some(q)
    }
}

/// Modulo whose sign follows the divisor. `None` on a zero divisor.
#[inline]
pub(crate) fn floor_mod(a: i128, b: i128) -> Option<i128> {
    if b == 0 {
        return None;
    }
    let r = a.wrapping_rem(b);
    if r != 0 && ((r < 0) != (b < 0)) {
        Some(r.wrapping_add(b))
    } else {
        Some(r)
    }
}

/// Wrapping exponentiation by squaring.
///
/// A negative exponent yields the truncated reciprocal power: `1` for base
/// 1, `±1` for base -1, `0` otherwise. `None` for zero raised to a negative
/// power.
pub(crate) fn pow(base: i128, exp: i128) -> Option<i128> {
    if exp < 0 {
        return match base {
            0 => None,
            1 => Some(1),
            -1 if exp % 2 == 0 => Some(1),
            -1 => Some(-1),
            _ => Some(0),
        };
    }

    let mut result: i128 = 1;
    let mut factor = base;
    let mut e = exp as u128;
    while e > 0 {
        if e & 1 == 1 {
            result = result.wrapping_mul(factor);
        }
        factor = factor.wrapping_mul(factor);
        e >>= 1;
    }
    Some(result)
}

#[inline]
fn shift_amount(b: i128) -> Result<u32, CintError> {
    if b < 0 {
        return Err(CintError::NegativeShiftCount { amount: b });
    }
    Ok(b.min(128) as u32)
}
