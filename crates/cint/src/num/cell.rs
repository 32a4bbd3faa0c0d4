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

/// A native fixed-width integer that can back a `Cint` cell.
///
/// A cell is a `u64` holding the value's bit pattern in its low bits, as
/// many as the type is wide. Converting into a cell truncates; converting
/// out of a cell sign-extends for signed types and zero-extends for
/// unsigned ones.
///
/// # Examples
///
/// ```rust
/// # use cint::num::cell::MachineCell;
///
/// assert_eq!(i8::wrap_i128(200), -56);
/// assert_eq!(u8::wrap_i128(-1), 255);
/// assert_eq!((-1i16).to_cell(), 0xFFFF);
/// assert_eq!(i16::from_cell(0xFFFF).widen(), -1);
/// ```
pub trait MachineCell: Copy {
    /// Truncates a mathematical value to this width (two's complement).
    fn wrap_i128(v: i128) -> Self;

    /// Returns the mathematical value of `self`.
    fn widen(self) -> i128;

    /// Returns the bit pattern of `self`, zero-extended to 64 bits.
    fn to_cell(self) -> u64;

    /// Reads a value back from the low bits of `cell`.
    fn from_cell(cell: u64) -> Self;
}

macro_rules! machine_cell_impl {
    ($t:ty, $bits_ty:ty) => {
        impl MachineCell for $t {
            #[inline(always)]
            fn wrap_i128(v: i128) -> Self {
                v as $t
            }

            #[inline(always)]
            fn widen(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn to_cell(self) -> u64 {
                self as $bits_ty as u64
            }

            #[inline(always)]
            fn from_cell(cell: u64) -> Self {
                cell as $bits_ty as $t
            }
        }
    };
}

machine_cell_impl!(u8, u8);
machine_cell_impl!(u16, u16);
machine_cell_impl!(u32, u32);
machine_cell_impl!(u64, u64);

machine_cell_impl!(i8, u8);
machine_cell_impl!(i16, u16);
machine_cell_impl!(i32, u32);
machine_cell_impl!(i64, u64);

/// Selects the native integer type for a `(width_bytes, is_unsigned)` pair
/// and evaluates `$body` with `$T` bound to it. Widths other than 1, 2 and
/// 4 select the 64-bit types.
macro_rules! with_machine_cell {
    ($width:expr, $unsigned:expr, $T:ident => $body:expr) => {
        match ($width, $unsigned) {
            (1, false) => {
                type $T = i8;
                $body
            }
            (2, false) => {
                type $T = i16;
                $body
            }
            (4, false) => {
                type $T = i32;
                $body
            }
            (_, false) => {
                type $T = i64;
                $body
            }
            (1, true) => {
                type $T = u8;
                $body
            }
            (2, true) => {
                type $T = u16;
                $body
            }
            (4, true) => {
                type $T = u32;
                $body
            }
            (_, true) => {
                type $T = u64;
                $body
            }
        }
    };
}

/// Truncates `v` into a cell of the given integer width and signedness.
#[inline]
pub fn wrap(width_bytes: u8, is_unsigned: bool, v: i128) -> u64 {
    with_machine_cell!(width_bytes, is_unsigned, T => T::wrap_i128(v).to_cell())
}

/// Reads the mathematical value stored in an integer cell.
#[inline]
pub fn read(width_bytes: u8, is_unsigned: bool, cell: u64) -> i128 {
    with_machine_cell!(width_bytes, is_unsigned, T => T::from_cell(cell).widen())
}

/// Returns the mask covering the low `width_bytes * 8` bits.
#[inline]
pub fn mask(width_bytes: u8) -> u64 {
    match width_bytes {
        8.. => u64::MAX,
        w => (1u64 << (u32::from(w) * 8)) - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_unsigned() {
        assert_eq!(wrap(1, true, 256), 0);
        assert_eq!(wrap(1, true, 260), 4);
        assert_eq!(wrap(1, true, -1), 0xFF);
        assert_eq!(wrap(2, true, -1), 0xFFFF);
        assert_eq!(wrap(4, true, 1 << 32), 0);
        assert_eq!(wrap(8, true, -1), u64::MAX);
        assert_eq!(wrap(8, true, 1i128 << 64), 0);
    }

    #[test]
    fn test_wrap_signed() {
        assert_eq!(wrap(1, false, 128), 0x80);
        assert_eq!(read(1, false, wrap(1, false, 128)), -128);
        assert_eq!(read(2, false, wrap(2, false, 32_768)), -32_768);
        assert_eq!(read(4, false, wrap(4, false, -1)), -1);
        assert_eq!(read(8, false, wrap(8, false, i64::MAX as i128 + 1)), i64::MIN as i128);
    }

    #[test]
    fn test_read_extends_by_signedness() {
        assert_eq!(read(1, true, 0xFF), 255);
        assert_eq!(read(1, false, 0xFF), -1);
        assert_eq!(read(8, true, u64::MAX), u64::MAX as i128);
        assert_eq!(read(8, false, u64::MAX), -1);
    }

    #[test]
    fn test_cell_ignores_high_bits() {
        assert_eq!(read(1, true, 0xABCD), 0xCD);
        assert_eq!(u16::from_cell(0x1_0002), 2);
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask(1), 0xFF);
        assert_eq!(mask(2), 0xFFFF);
        assert_eq!(mask(4), 0xFFFF_FFFF);
        assert_eq!(mask(8), u64::MAX);
    }

    #[test]
    fn test_cell_round_trip_per_type() {
        assert_eq!(i8::from_cell((-5i8).to_cell()).widen(), -5);
        assert_eq!(u32::from_cell(u32::MAX.to_cell()).widen(), u32::MAX as i128);
        assert_eq!(i64::wrap_i128(i128::from(i64::MAX) + 1), i64::MIN);
    }
}
