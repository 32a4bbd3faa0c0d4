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

//! # Promotion
//!
//! Result-type resolution for binary operators, following C's usual
//! arithmetic conversions:
//!
//! - A bare literal never changes the type: the result is the left type.
//! - Floats are stronger than every integer; between floats the wider wins.
//! - Between integers, `(width_bytes, is_unsigned)` is compared
//!   lexicographically and the larger wins, so on equal width unsigned
//!   beats signed.
//!
//! Resolution is symmetric: `promote(a, b)` and `promote(b, a)` select the
//! same type.
//!
//! ```rust
//! use cint::{promote, registry::CType};
//!
//! assert_eq!(promote(CType::I8, Some(CType::U8.descriptor())), Ok(CType::U8));
//! assert_eq!(promote(CType::U32, Some(CType::I64.descriptor())), Ok(CType::I64));
//! assert_eq!(promote(CType::U64, Some(CType::F32.descriptor())), Ok(CType::F32));
//! assert_eq!(promote(CType::I16, None), Ok(CType::I16));
//! ```

use crate::{
    error::CintError,
    registry::{CType, TypeDescriptor},
};

/// Resolves the result type of `lhs <op> rhs`.
///
/// `rhs` is `None` for a bare literal.
///
/// # Errors
///
/// Returns [`CintError::IncompatibleOperand`] if `rhs` is not a registry
/// descriptor.
pub fn promote(lhs: CType, rhs: Option<&TypeDescriptor>) -> Result<CType, CintError> {
    match rhs {
        None => Ok(lhs),
        Some(descriptor) => Ok(lhs.stronger(resolve(lhs, descriptor)?)),
    }
}

/// Maps an operand descriptor to its registry tag.
pub(crate) fn resolve(lhs: CType, descriptor: &TypeDescriptor) -> Result<CType, CintError> {
    CType::from_descriptor(descriptor).ok_or(CintError::IncompatibleOperand {
        lhs: lhs.name(),
        rhs: descriptor.name,
    })
}

impl CType {
    /// Returns whichever of `self` and `other` a mixed operation promotes to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cint::registry::CType;
    ///
    /// assert_eq!(CType::I32.stronger(CType::U16), CType::I32);
    /// assert_eq!(CType::I32.stronger(CType::U32), CType::U32);
    /// assert_eq!(CType::F32.stronger(CType::U64), CType::F32);
    /// assert_eq!(CType::F32.stronger(CType::F64), CType::F64);
    /// ```
    pub fn stronger(self, other: CType) -> CType {
        match (self.is_float(), other.is_float()) {
            (true, false) => self,
            (false, true) => other,
            _ if other.rank() > self.rank() => other,
            _ => self,
        }
    }

    #[inline]
    fn rank(self) -> (u8, bool) {
        (self.width_bytes(), self.is_unsigned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{FLOATS, INTS, TYPES};

    #[test]
    fn test_literal_keeps_left_type() {
        for ty in TYPES {
            assert_eq!(promote(ty, None), Ok(ty));
        }
    }

    #[test]
    fn test_integer_pairs() {
        for a in INTS {
            for b in INTS {
                let expected = if (b.width_bytes(), b.is_unsigned()) > (a.width_bytes(), a.is_unsigned()) {
                    b
                } else {
                    a
                };
                assert_eq!(promote(a, Some(b.descriptor())), Ok(expected), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_symmetry() {
        for a in TYPES {
            for b in TYPES {
                assert_eq!(a.stronger(b), b.stronger(a), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_unsigned_wins_on_equal_width() {
        assert_eq!(CType::I8.stronger(CType::U8), CType::U8);
        assert_eq!(CType::I64.stronger(CType::U64), CType::U64);
        assert_eq!(CType::U16.stronger(CType::I32), CType::I32);
    }

    #[test]
    fn test_floats_beat_integers() {
        for f in FLOATS {
            for i in INTS {
                assert_eq!(promote(i, Some(f.descriptor())), Ok(f));
                assert_eq!(promote(f, Some(i.descriptor())), Ok(f));
            }
        }
        assert_eq!(CType::F64.stronger(CType::F32), CType::F64);
    }

    #[test]
    fn test_foreign_descriptor_is_rejected() {
        let wide = TypeDescriptor::new("I128", "int128_t", 16, false, false);
        assert_eq!(
            promote(CType::U8, Some(&wide)),
            Err(CintError::IncompatibleOperand {
                lhs: "U8",
                rhs: "I128"
            })
        );
    }
}
