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

//! Equality, ordering and hashing for [`Cint`].
//!
//! Equality is by mathematical value and ignores types: `U8(1) == 1.0` and
//! `I8(-1) != U8(255)`. Ordering first converts the right operand into the
//! promoted type, so it can disagree with equality across signedness:
//! `U8(1) < -1` holds because `-1` becomes `U8(255)`.

use crate::{
    error::CintError,
    num::float,
    operand::{Operand, Raw, payload_of},
    promotion::promote,
    value::Cint,
};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

fn raw_eq(a: Raw, b: Raw) -> bool {
    match (a, b) {
        (Raw::Int(a), Raw::Int(b)) => a == b,
        (Raw::Float(a), Raw::Float(b)) => a == b,
        (Raw::Int(i), Raw::Float(f)) | (Raw::Float(f), Raw::Int(i)) => float::eq_int_float(i, f),
    }
}

fn raw_cmp(a: Raw, b: Raw) -> Option<Ordering> {
    match (a, b) {
        (Raw::Int(a), Raw::Int(b)) => Some(a.cmp(&b)),
        (Raw::Float(a), Raw::Float(b)) => a.partial_cmp(&b),
        (Raw::Int(i), Raw::Float(f)) => float::cmp_int_float(i, f),
        (Raw::Float(f), Raw::Int(i)) => float::cmp_int_float(i, f).map(Ordering::reverse),
    }
}

impl Cint {
    /// Orders `self` against `rhs` after converting `rhs` into the
    /// promoted type.
    ///
    /// Returns `Ok(None)` when either side is NaN.
    ///
    /// # Errors
    ///
    /// - [`CintError::IncompatibleOperand`] if `rhs` is not a registry type.
    /// - [`CintError::InvalidValue`] if `rhs` is a NaN or infinite float and
    ///   the promoted type is an integer type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cint::Cint;
    /// # use std::cmp::Ordering;
    ///
    /// // -1 converts to U8(255) before comparing.
    /// assert_eq!(Cint::u8(1).compare(-1).unwrap(), Some(Ordering::Less));
    /// assert_eq!(Cint::i32(-1).compare(0).unwrap(), Some(Ordering::Less));
    /// assert!(Cint::u8(1).compare(f64::NAN).is_err());
    /// ```
    pub fn compare<R>(&self, rhs: R) -> Result<Option<Ordering>, CintError>
    where
        R: Operand,
    {
        let (raw, descriptor) = payload_of(&rhs);
        let promoted = promote(self.ctype(), descriptor)?;
        let converted = Cint::from_raw(promoted, raw)?;
        Ok(raw_cmp(self.raw(), converted.raw()))
    }
}

impl<R> PartialEq<R> for Cint
where
    R: Operand,
{
    #[inline]
    fn eq(&self, other: &R) -> bool {
        raw_eq(self.raw(), other.payload())
    }
}

/// Not consistent with `PartialEq` for operands of different signedness;
/// see [`Cint::compare`]. Comparisons that would fail yield `None`.
impl<R> PartialOrd<R> for Cint
where
    R: Operand,
{
    #[inline]
    fn partial_cmp(&self, other: &R) -> Option<Ordering> {
        self.compare(other).ok().flatten()
    }
}

macro_rules! reflected_cmp_impl {
    ($($t:ty),* $(,)*) => {
        $(
            impl PartialEq<Cint> for $t {
                #[inline]
                fn eq(&self, other: &Cint) -> bool {
                    other == self
                }
            }

            impl PartialOrd<Cint> for $t {
                /// `5 < x` means `x > 5`, with `5` converted into `x`'s type.
                #[inline]
                fn partial_cmp(&self, other: &Cint) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )*
    };
}

reflected_cmp_impl!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize, f32, f64);

/// Value-based and consistent with `==`: `U8(7)` and `I64(7)` hash equally.
///
/// `Cint` is not `Eq` because NaN is unequal to itself, so it cannot key a
/// `HashMap` or `HashSet` directly. Callers that need keyed storage wrap it
/// in a key type of their own that rules out NaN and implements `Eq`.
impl Hash for Cint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.raw() {
            Raw::Int(i) => i.hash(state),
            Raw::Float(f) => match float::integral_value(f) {
                Some(i) => i.hash(state),
                // NaN, infinities and fractions.
                None => f.to_bits().hash(state),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{CType, INTS, UNSIGNED_INTS};
    use std::hash::DefaultHasher;

    fn hash_of(v: &Cint) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(Cint::u8(1), 1.0);
        assert_eq!(Cint::i64(5), Cint::u8(5));
        assert_ne!(Cint::i8(-1), Cint::u8(255));
        assert_ne!(Cint::u8(1), -1);
        assert_eq!(Cint::f32(0.5), 0.5);
        assert_eq!(CType::U8.max(), 255);
    }

    #[test]
    fn test_nan_is_unequal_to_itself() {
        let nan = Cint::f64(f64::NAN);
        assert_ne!(nan, nan);
        assert_ne!(nan, f64::NAN);
        assert_eq!(nan.partial_cmp(&nan), None);
        assert_eq!(nan.compare(1.0), Ok(None));
    }

    #[test]
    fn test_unsigned_against_minus_one() {
        for ty in UNSIGNED_INTS {
            let one = Cint::new(ty, 1);
            assert!(!(one > -1), "{}", ty);
            assert!(one < -1, "{}", ty);
        }
        assert!(!(Cint::u64(1) > Cint::i8(-1)));
    }

    #[test]
    fn test_signed_ordering() {
        for ty in INTS.iter().filter(|t| !t.is_unsigned()) {
            let v = Cint::new(*ty, -1);
            assert!(v < 0);
            assert!(v <= -1);
            assert!(v >= -1);
        }
        assert!(Cint::i8(-1) < Cint::i64(1));
    }

    #[test]
    fn test_ordering_with_floats() {
        assert!(Cint::f64(1.5) > 1);
        assert!(Cint::i32(1) < Cint::f32(1.5));
        // The float literal truncates into I32 first.
        assert_eq!(Cint::i32(1).compare(1.5), Ok(Some(Ordering::Equal)));
        assert_eq!(Cint::f32(f32::INFINITY).compare(i64::MAX), Ok(Some(Ordering::Greater)));
    }

    #[test]
    fn test_reflected_comparisons() {
        assert!(1 == Cint::u8(1));
        assert!(-1 != Cint::u8(255));
        // Same as `U8(1) < -1`.
        assert!(-1 > Cint::u8(1));
        assert!(2.5 > Cint::f64(1.0));
    }

    #[test]
    fn test_foreign_operand_does_not_order() {
        use crate::registry::TypeDescriptor;
        #[derive(Debug)]
        struct Wide;
        static D: TypeDescriptor = TypeDescriptor::new("I128", "__int128", 16, false, false);
        impl Operand for Wide {
            fn payload(&self) -> Raw {
                Raw::Int(0)
            }
            fn descriptor(&self) -> Option<&TypeDescriptor> {
                Some(&D)
            }
        }

        assert!(Cint::i8(1).partial_cmp(&Wide).is_none());
        assert!(matches!(
            Cint::i8(1).compare(Wide),
            Err(CintError::IncompatibleOperand { lhs: "I8", rhs: "I128" })
        ));
        assert_eq!(Cint::i8(0), Wide);
    }

    #[test]
    fn test_hash_backs_a_non_nan_key() {
        use std::collections::HashSet;

        #[derive(Debug, Clone, Copy)]
        struct Key(Cint);

        impl PartialEq for Key {
            fn eq(&self, other: &Key) -> bool {
                self.0 == other.0
            }
        }
        impl Eq for Key {}
        impl Hash for Key {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.hash(state);
            }
        }

        let mut seen = HashSet::new();
        for v in [Cint::u8(1), Cint::i64(1), Cint::f32(1.0), Cint::i8(-1), Cint::u8(255)] {
            assert!(!v.is_nan());
            seen.insert(Key(v));
        }
        assert_eq!(seen.len(), 3);
        assert!(seen.contains(&Key(Cint::u16(255))));
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        assert_eq!(hash_of(&Cint::u8(7)), hash_of(&Cint::i64(7)));
        assert_eq!(hash_of(&Cint::i32(3)), hash_of(&Cint::f64(3.0)));
        assert_eq!(hash_of(&Cint::f32(0.0)), hash_of(&Cint::f64(-0.0)));
        assert_eq!(hash_of(&CType::U16.max()), hash_of(&Cint::u16(u16::MAX)));
        assert_ne!(hash_of(&Cint::i8(-1)), hash_of(&Cint::u8(255)));
    }
}
