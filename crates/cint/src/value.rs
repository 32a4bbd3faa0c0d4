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

//! # Wrapped Numeric Values
//!
//! [`Cint`] is a fixed-width number whose type travels with the value. It
//! pairs a registry tag ([`CType`]) with an 8-byte cell holding the value's
//! bit pattern at the type's native width, so the payload is always the
//! two's-complement (or IEEE-754) image of the last result, truncated.
//!
//! Values are `Copy` and operators never mutate their operands. The `MIN`
//! and `MAX` sentinels returned by [`CType::min`] and [`CType::max`] carry
//! an immutability flag that in-place operators honor.
//!
//! ## Construction
//!
//! - Typed shorthands: [`Cint::i8`], [`Cint::u64`], [`Cint::f32`], ...
//! - From any operand (literal or another value): [`Cint::try_new`],
//!   [`Cint::new`], [`Cint::cast`].
//! - From text: [`Cint::parse`].
//! - From memory: [`Cint::from_ne_bytes`], [`Cint::from_bits`].
//!
//! ```rust
//! use cint::{Cint, registry::CType};
//!
//! let a = Cint::new(CType::U8, 300);
//! assert_eq!(a, 44);
//!
//! let b = Cint::i8(-1).cast(CType::U16).unwrap();
//! assert_eq!(b, 65_535);
//! ```

use crate::{
    error::CintError,
    num::{cell, float},
    operand::{Operand, Raw},
    registry::{CType, TypeDescriptor},
};
use num_traits::ToPrimitive;

/// A fixed-width numeric value of a registry type.
///
/// Equality and hashing are by numeric value, independent of the type and
/// of the sentinel flag. Ordering converts the right operand into the
/// promoted type first; see the crate documentation for the signedness
/// quirk this implies.
#[derive(Clone, Copy)]
pub struct Cint {
    ty: CType,
    cell: u64,
    sentinel: bool,
}

macro_rules! int_constructor_impl {
    ($name:ident, $t:ty, $ctype:expr) => {
        #[doc = concat!("Creates a `", stringify!($t), "`-backed value.")]
        #[inline]
        pub const fn $name(v: $t) -> Cint {
            Cint::from_cell($ctype, v as u64 & Self::cell_mask($ctype))
        }
    };
}

impl Cint {
    int_constructor_impl!(i8, i8, CType::I8);
    int_constructor_impl!(i16, i16, CType::I16);
    int_constructor_impl!(i32, i32, CType::I32);
    int_constructor_impl!(i64, i64, CType::I64);
    int_constructor_impl!(u8, u8, CType::U8);
    int_constructor_impl!(u16, u16, CType::U16);
    int_constructor_impl!(u32, u32, CType::U32);
    int_constructor_impl!(u64, u64, CType::U64);

    /// Creates an `F32` value.
    #[inline]
    pub const fn f32(v: f32) -> Cint {
        Cint::from_cell(CType::F32, v.to_bits() as u64)
    }

    /// Creates an `F64` value.
    #[inline]
    pub const fn f64(v: f64) -> Cint {
        Cint::from_cell(CType::F64, v.to_bits())
    }

    #[inline]
    const fn from_cell(ty: CType, cell: u64) -> Cint {
        Cint {
            ty,
            cell,
            sentinel: false,
        }
    }

    #[inline]
    pub(crate) const fn sentinel(ty: CType, cell: u64) -> Cint {
        Cint {
            ty,
            cell,
            sentinel: true,
        }
    }

    const fn cell_mask(ty: CType) -> u64 {
        match ty {
            CType::I8 | CType::U8 => 0xFF,
            CType::I16 | CType::U16 => 0xFFFF,
            CType::I32 | CType::U32 | CType::F32 => 0xFFFF_FFFF,
            CType::I64 | CType::U64 | CType::F64 => u64::MAX,
        }
    }

    /// Converts `source` into a value of type `ty`.
    ///
    /// Integers are truncated (or extended) per two's-complement rules.
    /// Floats converted into an integer type are truncated toward zero and
    /// then wrapped. Integers converted into a float type round to nearest.
    /// The result is never a sentinel, even if `source` is one.
    ///
    /// # Errors
    ///
    /// Returns [`CintError::InvalidValue`] if `source` is a NaN or infinite
    /// float and `ty` is an integer type, or if `source` reports a type that
    /// is not in the registry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cint::{Cint, CintError, registry::CType};
    ///
    /// assert_eq!(Cint::try_new(CType::I8, 255).unwrap(), -1);
    /// assert_eq!(Cint::try_new(CType::U32, -2.7).unwrap(), u32::MAX - 1);
    /// assert!(matches!(
    ///     Cint::try_new(CType::I64, f64::NAN),
    ///     Err(CintError::InvalidValue { .. })
    /// ));
    /// ```
    pub fn try_new<S>(ty: CType, source: S) -> Result<Cint, CintError>
    where
        S: Operand,
    {
        if let Some(descriptor) = source.descriptor() {
            if descriptor.ctype().is_none() {
                return Err(CintError::invalid_value(
                    ty.name(),
                    format!("unsupported source type {}", descriptor.name),
                ));
            }
        }
        Cint::from_raw(ty, source.payload())
    }

    /// Converts `source` into a value of type `ty`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions in which [`Cint::try_new`] returns
    /// an error.
    #[track_caller]
    pub fn new<S>(ty: CType, source: S) -> Cint
    where
        S: Operand,
    {
        match Cint::try_new(ty, source) {
            Ok(v) => v,
            Err(e) => panic!("called `Cint::new` with an invalid source: {}", e),
        }
    }

    /// Converts this value into another registry type.
    ///
    /// # Errors
    ///
    /// Returns [`CintError::InvalidValue`] when casting a NaN or infinite
    /// float into an integer type.
    #[inline]
    pub fn cast(self, ty: CType) -> Result<Cint, CintError> {
        Cint::from_raw(ty, self.raw())
    }

    pub(crate) fn from_raw(ty: CType, raw: Raw) -> Result<Cint, CintError> {
        match raw {
            Raw::Int(i) => Ok(Cint::from_int(ty, i)),
            Raw::Float(f) => Cint::from_float(ty, f),
        }
    }

    /// Truncates a mathematical integer into `ty`.
    pub(crate) fn from_int(ty: CType, v: i128) -> Cint {
        match ty {
            CType::F32 => Cint::f32(v as f32),
            CType::F64 => Cint::f64(v as f64),
            _ => {
                let d = ty.descriptor();
                Cint::from_cell(ty, cell::wrap(d.width_bytes, d.is_unsigned, v))
            }
        }
    }

    pub(crate) fn from_float(ty: CType, f: f64) -> Result<Cint, CintError> {
        match ty {
            CType::F32 => Ok(Cint::f32(f as f32)),
            CType::F64 => Ok(Cint::f64(f)),
            _ => float::trunc_wrapping(f)
                .map(|i| Cint::from_int(ty, i))
                .ok_or_else(|| {
                    CintError::invalid_value(ty.name(), format!("cannot convert {} to an integer", f))
                }),
        }
    }

    /// Creates a value from its bit pattern. Bits above the type's width
    /// are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cint::{Cint, registry::CType};
    ///
    /// assert_eq!(Cint::from_bits(CType::I8, 0x1FF), -1);
    /// assert!(Cint::from_bits(CType::F32, 0x7FC0_0000).is_nan());
    /// ```
    #[inline]
    pub fn from_bits(ty: CType, bits: u64) -> Cint {
        Cint::from_cell(ty, bits & cell::mask(ty.width_bytes()))
    }

    /// Returns the bit pattern at the type's native width, zero-extended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cint::Cint;
    ///
    /// assert_eq!(Cint::i16(-1).to_bits(), 0xFFFF);
    /// assert_eq!(Cint::f32(f32::INFINITY).to_bits(), 0x7F80_0000);
    /// ```
    #[inline]
    pub fn to_bits(&self) -> u64 {
        self.cell
    }

    /// Creates a value by copying `width_bytes` bytes from `buf` at
    /// `offset`, in native byte order.
    ///
    /// # Errors
    ///
    /// Returns [`CintError::InvalidValue`] if `buf` holds fewer than
    /// `offset + width_bytes` bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cint::{Cint, registry::CType};
    ///
    /// let buf = 0xBEEFu16.to_ne_bytes();
    /// assert_eq!(Cint::from_ne_bytes(CType::U16, &buf, 0).unwrap(), 0xBEEF);
    /// assert!(Cint::from_ne_bytes(CType::U32, &buf, 0).is_err());
    /// ```
    pub fn from_ne_bytes(ty: CType, buf: &[u8], offset: usize) -> Result<Cint, CintError> {
        let width = usize::from(ty.width_bytes());
        let bytes = offset
            .checked_add(width)
            .and_then(|end| buf.get(offset..end))
            .ok_or_else(|| {
                CintError::invalid_value(
                    ty.name(),
                    format!(
                        "need {} bytes at offset {}, buffer holds {}",
                        width,
                        offset,
                        buf.len()
                    ),
                )
            })?;

        let mut raw = [0u8; 8];
        raw[..width].copy_from_slice(bytes);
        let bits = match width {
            1 => u64::from(raw[0]),
            2 => u64::from(u16::from_ne_bytes([raw[0], raw[1]])),
            4 => u64::from(u32::from_ne_bytes([raw[0], raw[1], raw[2], raw[3]])),
            _ => u64::from_ne_bytes(raw),
        };
        Ok(Cint::from_cell(ty, bits))
    }

    /// Returns the `width_bytes` bytes of this value in native byte order.
    pub fn to_ne_bytes(&self) -> Vec<u8> {
        match self.ty.width_bytes() {
            1 => vec![self.cell as u8],
            2 => (self.cell as u16).to_ne_bytes().to_vec(),
            4 => (self.cell as u32).to_ne_bytes().to_vec(),
            _ => self.cell.to_ne_bytes().to_vec(),
        }
    }

    /// The registry tag of this value.
    #[inline]
    pub fn ctype(&self) -> CType {
        self.ty
    }

    /// The descriptor of this value's type.
    #[inline]
    pub fn type_descriptor(&self) -> &'static TypeDescriptor {
        self.ty.descriptor()
    }

    /// Returns `true` for the immutable `MIN`/`MAX` sentinels.
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.sentinel
    }

    /// Returns the raw numeric payload.
    pub fn raw(&self) -> Raw {
        match self.ty {
            CType::F32 => Raw::Float(f32::from_bits(self.cell as u32) as f64),
            CType::F64 => Raw::Float(f64::from_bits(self.cell)),
            ty => {
                let d = ty.descriptor();
                Raw::Int(cell::read(d.width_bytes, d.is_unsigned, self.cell))
            }
        }
    }

    /// Returns the value as a platform integer. Floats are truncated toward
    /// zero, saturating at the `i128` bounds; NaN reads as 0.
    #[inline]
    pub fn to_i128(&self) -> i128 {
        match self.raw() {
            Raw::Int(i) => i,
            Raw::Float(f) => f as i128,
        }
    }

    /// Returns the value as a platform float, rounding to nearest.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.raw().as_f64()
    }

    /// Returns `true` unless the value is zero.
    #[inline]
    pub fn is_nonzero(&self) -> bool {
        match self.raw() {
            Raw::Int(i) => i != 0,
            Raw::Float(f) => f != 0.0,
        }
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self.raw(), Raw::Float(f) if f.is_nan())
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self.raw(), Raw::Float(f) if f.is_infinite())
    }
}

impl Operand for Cint {
    #[inline]
    fn payload(&self) -> Raw {
        self.raw()
    }

    #[inline]
    fn descriptor(&self) -> Option<&TypeDescriptor> {
        Some(self.ty.descriptor())
    }
}

impl ToPrimitive for Cint {
    fn to_i64(&self) -> Option<i64> {
        match self.raw() {
            Raw::Int(i) => i.to_i64(),
            Raw::Float(f) => f.to_i64(),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self.raw() {
            Raw::Int(i) => i.to_u64(),
            Raw::Float(f) => f.to_u64(),
        }
    }

    fn to_i128(&self) -> Option<i128> {
        match self.raw() {
            Raw::Int(i) => Some(i),
            Raw::Float(f) => f.to_i128(),
        }
    }

    fn to_u128(&self) -> Option<u128> {
        match self.raw() {
            Raw::Int(i) => i.to_u128(),
            Raw::Float(f) => f.to_u128(),
        }
    }

    fn to_f32(&self) -> Option<f32> {
        match self.raw() {
            Raw::Int(i) => i.to_f32(),
            Raw::Float(f) => Some(f as f32),
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.raw().as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{INTS, TYPES};

    #[test]
    fn test_typed_constructors() {
        assert_eq!(Cint::i8(-5).raw(), Raw::Int(-5));
        assert_eq!(Cint::u8(250).raw(), Raw::Int(250));
        assert_eq!(Cint::i64(i64::MIN).raw(), Raw::Int(i64::MIN as i128));
        assert_eq!(Cint::u64(u64::MAX).raw(), Raw::Int(u64::MAX as i128));
        assert_eq!(Cint::i16(-1).to_bits(), 0xFFFF);
        assert_eq!(Cint::f32(0.5).raw(), Raw::Float(0.5));
        assert_eq!(Cint::f64(-2.25).raw(), Raw::Float(-2.25));
    }

    #[test]
    fn test_new_wraps_literals() {
        assert_eq!(Cint::new(CType::U8, 256).raw(), Raw::Int(0));
        assert_eq!(Cint::new(CType::U8, -1).raw(), Raw::Int(255));
        assert_eq!(Cint::new(CType::I8, 128).raw(), Raw::Int(-128));
        assert_eq!(Cint::new(CType::U16, 70_000).raw(), Raw::Int(70_000 - 65_536));
        assert_eq!(Cint::new(CType::U64, -1i64).raw(), Raw::Int(u64::MAX as i128));
    }

    #[test]
    fn test_new_from_other_values() {
        let narrow = Cint::new(CType::I8, Cint::u16(0x1234));
        assert_eq!(narrow.raw(), Raw::Int(0x34));

        let widened = Cint::new(CType::I64, Cint::i8(-3));
        assert_eq!(widened.raw(), Raw::Int(-3));

        let zero_extended = Cint::new(CType::U32, Cint::u8(200));
        assert_eq!(zero_extended.raw(), Raw::Int(200));
    }

    #[test]
    fn test_new_clears_sentinel_flag() {
        for ty in TYPES {
            let copy = Cint::new(ty, ty.min());
            assert!(!copy.is_sentinel());
            assert_eq!(copy.to_bits(), ty.min().to_bits());
        }
    }

    #[test]
    fn test_float_into_integer() {
        assert_eq!(Cint::new(CType::I32, 3.99).raw(), Raw::Int(3));
        assert_eq!(Cint::new(CType::I32, -3.99).raw(), Raw::Int(-3));
        assert_eq!(Cint::new(CType::U8, 257.0).raw(), Raw::Int(1));
        assert!(Cint::try_new(CType::U8, f64::INFINITY).is_err());
        assert!(Cint::try_new(CType::I8, Cint::f32(f32::NAN)).is_err());
    }

    #[test]
    fn test_integer_into_float() {
        assert_eq!(Cint::new(CType::F64, 3).raw(), Raw::Float(3.0));
        assert_eq!(Cint::new(CType::F32, u64::MAX).raw(), Raw::Float(u64::MAX as f32 as f64));
        assert_eq!(Cint::new(CType::F32, 0.1f64).raw(), Raw::Float(0.1f32 as f64));
    }

    #[test]
    #[should_panic(expected = "called `Cint::new` with an invalid source")]
    fn test_new_panics_on_nan_into_integer() {
        Cint::new(CType::I16, f64::NAN);
    }

    #[test]
    fn test_foreign_source_is_rejected() {
        struct Foreign;
        static D: TypeDescriptor = TypeDescriptor::new("Q16", "q16_t", 2, false, false);
        impl Operand for Foreign {
            fn payload(&self) -> Raw {
                Raw::Int(1)
            }
            fn descriptor(&self) -> Option<&TypeDescriptor> {
                Some(&D)
            }
        }

        match Cint::try_new(CType::I32, Foreign) {
            Err(CintError::InvalidValue { type_name, reason }) => {
                assert_eq!(type_name, "I32");
                assert!(reason.contains("Q16"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_cast() {
        assert_eq!(Cint::i8(-1).cast(CType::U8).unwrap().raw(), Raw::Int(255));
        assert_eq!(Cint::u8(255).cast(CType::I8).unwrap().raw(), Raw::Int(-1));
        assert_eq!(Cint::f64(-1.5).cast(CType::I16).unwrap().raw(), Raw::Int(-1));
        assert!(Cint::f64(f64::NEG_INFINITY).cast(CType::U64).is_err());
        assert_eq!(Cint::i32(7).cast(CType::I32).unwrap().ctype(), CType::I32);
    }

    #[test]
    fn test_bits_round_trip_masks_high_bits() {
        let v = Cint::from_bits(CType::U16, 0xDEAD_BEEF);
        assert_eq!(v.to_bits(), 0xBEEF);
        assert_eq!(v.raw(), Raw::Int(0xBEEF));
        assert_eq!(Cint::from_bits(CType::I32, 0x8000_0000).raw(), Raw::Int(i32::MIN as i128));
    }

    #[test]
    fn test_ne_bytes() {
        for ty in INTS {
            let v = ty.max();
            let bytes = v.to_ne_bytes();
            assert_eq!(bytes.len(), usize::from(ty.width_bytes()));
            let back = Cint::from_ne_bytes(ty, &bytes, 0).unwrap();
            assert_eq!(back.to_bits(), v.to_bits());
        }

        let mut buf = vec![0u8; 3];
        buf.extend_from_slice(&(-2i32).to_ne_bytes());
        assert_eq!(Cint::from_ne_bytes(CType::I32, &buf, 3).unwrap().raw(), Raw::Int(-2));
        assert!(Cint::from_ne_bytes(CType::I32, &buf, 4).is_err());
        assert!(Cint::from_ne_bytes(CType::U8, &buf, usize::MAX).is_err());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Cint::f64(-2.9).to_i128(), -2);
        assert_eq!(Cint::f64(f64::NAN).to_i128(), 0);
        assert_eq!(Cint::i8(-3).to_f64(), -3.0);
        assert_eq!(ToPrimitive::to_i64(&Cint::u64(u64::MAX)), None);
        assert_eq!(ToPrimitive::to_u64(&Cint::u64(u64::MAX)), Some(u64::MAX));
        assert_eq!(ToPrimitive::to_u8(&Cint::i16(-1)), None);
        assert_eq!(ToPrimitive::to_i32(&Cint::f32(1.0)), Some(1));
        assert_eq!(ToPrimitive::to_f64(&Cint::i32(5)), Some(5.0));
    }

    #[test]
    fn test_predicates() {
        assert!(!Cint::u8(0).is_nonzero());
        assert!(Cint::i8(-1).is_nonzero());
        assert!(!Cint::f64(0.0).is_nonzero());
        assert!(Cint::f64(f64::NAN).is_nan());
        assert!(!Cint::i64(0).is_nan());
        assert!(Cint::f32(f32::NEG_INFINITY).is_infinite());
    }
}
