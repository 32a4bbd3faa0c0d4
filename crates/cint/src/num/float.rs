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

use std::cmp::Ordering;

/// 2^127, the first magnitude that no longer fits in an `i128`.
const TWO_POW_127: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Truncates a finite float toward zero, returning an integer congruent to
/// the truncated value modulo 2^64.
///
/// Magnitudes of 2^127 and above are multiples of 2^75, so their residue
/// modulo any cell width is zero. Returns `None` for NaN and infinities.
///
/// # Examples
///
/// ```rust
/// # use cint::num::float::trunc_wrapping;
///
/// assert_eq!(trunc_wrapping(-2.9), Some(-2));
/// assert_eq!(trunc_wrapping(1e300), Some(0));
/// assert_eq!(trunc_wrapping(f64::NAN), None);
/// ```
pub fn trunc_wrapping(f: f64) -> Option<i128> {
    if !f.is_finite() {
        return None;
    }
    let t = f.trunc();
    if t.abs() >= TWO_POW_127 {
        Some(0)
    } else {
        Some(t as i128)
    }
}

/// Compares an integer with a float exactly, without rounding the integer.
///
/// Returns `None` if `f` is NaN.
///
/// # Examples
///
/// ```rust
/// # use cint::num::float::cmp_int_float;
/// # use std::cmp::Ordering;
///
/// // 2^53 + 1 is not representable as f64, but still compares greater.
/// let big = (1i128 << 53) + 1;
/// assert_eq!(cmp_int_float(big, (1u64 << 53) as f64), Some(Ordering::Greater));
/// assert_eq!(cmp_int_float(3, 3.5), Some(Ordering::Less));
/// assert_eq!(cmp_int_float(0, f64::NAN), None);
/// ```
pub fn cmp_int_float(i: i128, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= TWO_POW_127 {
        return Some(Ordering::Less);
    }
    if f < -TWO_POW_127 {
        return Some(Ordering::Greater);
    }
    let whole = f.trunc();
    match i.cmp(&(whole as i128)) {
        Ordering::Equal if f > whole => Some(Ordering::Less),
        Ordering::Equal if f < whole => Some(Ordering::Greater),
        ordering => Some(ordering),
    }
}

/// Returns `true` if the integer and the float denote the same number.
#[inline]
pub fn eq_int_float(i: i128, f: f64) -> bool {
    cmp_int_float(i, f) == Some(Ordering::Equal)
}

/// Returns the integer value of `f` if it is integral and fits in an `i128`.
#[inline]
pub fn integral_value(f: f64) -> Option<i128> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < TWO_POW_127 {
        Some(f as i128)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trunc_wrapping() {
        assert_eq!(trunc_wrapping(0.0), Some(0));
        assert_eq!(trunc_wrapping(-0.0), Some(0));
        assert_eq!(trunc_wrapping(2.5), Some(2));
        assert_eq!(trunc_wrapping(-2.5), Some(-2));
        assert_eq!(trunc_wrapping(f64::INFINITY), None);
        assert_eq!(trunc_wrapping(f64::NEG_INFINITY), None);
        assert_eq!(trunc_wrapping(f64::MAX), Some(0));
        // 2^64 + 2^12 keeps its low bits.
        assert_eq!(trunc_wrapping(18_446_744_073_709_555_712.0), Some((1i128 << 64) + 4096));
    }

    #[test]
    fn test_cmp_int_float() {
        assert_eq!(cmp_int_float(1, 1.0), Some(Ordering::Equal));
        assert_eq!(cmp_int_float(-1, -0.5), Some(Ordering::Less));
        assert_eq!(cmp_int_float(-1, -1.5), Some(Ordering::Greater));
        assert_eq!(cmp_int_float(i128::MAX, f64::INFINITY), Some(Ordering::Less));
        assert_eq!(cmp_int_float(i128::MIN, f64::NEG_INFINITY), Some(Ordering::Greater));
        assert_eq!(cmp_int_float(i128::MIN, -TWO_POW_127), Some(Ordering::Equal));
        assert_eq!(cmp_int_float(0, -0.0), Some(Ordering::Equal));
    }

    #[test]
    fn test_eq_int_float() {
        assert!(eq_int_float(4, 4.0));
        assert!(!eq_int_float(4, 4.000001));
        assert!(!eq_int_float(0, f64::NAN));
        assert!(!eq_int_float(u64::MAX as i128, u64::MAX as f64));
    }

    #[test]
    fn test_integral_value() {
        assert_eq!(integral_value(-3.0), Some(-3));
        assert_eq!(integral_value(-0.0), Some(0));
        assert_eq!(integral_value(3.25), None);
        assert_eq!(integral_value(f64::INFINITY), None);
    }
}
