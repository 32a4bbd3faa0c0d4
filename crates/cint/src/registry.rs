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

//! # Type Registry
//!
//! Static metadata for the ten fixed-width types a [`Cint`] can carry.
//! Every registry type has exactly one [`TypeDescriptor`], stored in a
//! process-wide table that is never mutated, and one [`CType`] tag that
//! values carry around.
//!
//! ## Usage
//!
//! ```rust
//! use cint::registry::{self, CType};
//!
//! let d = registry::integer(4, true).unwrap();
//! assert_eq!(d.ctype_name, "uint32_t");
//! assert_eq!(CType::from_descriptor(d), Some(CType::U32));
//! assert_eq!(CType::U32.max(), 4_294_967_295u32);
//! ```

use crate::{error::CintError, value::Cint};

/// Per-type metadata: width, signedness and names.
///
/// Registry descriptors are reachable through [`CType::descriptor`]. The
/// struct is public so that callers can describe types of their own (for
/// example a foreign `int128_t` typedef); such descriptors are not part of
/// the registry and are rejected as operand types.
///
/// # Examples
///
/// ```rust
/// # use cint::registry::{CType, TypeDescriptor};
///
/// let wide = TypeDescriptor::new("I128", "int128_t", 16, false, false);
/// assert!(wide.ctype().is_none());
/// assert_eq!(CType::I16.descriptor().bits(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    /// The registry name, e.g. `"U8"`.
    pub name: &'static str,
    /// The canonical C name, e.g. `"uint8_t"`. Documentation only.
    pub ctype_name: &'static str,
    /// The storage width in bytes.
    pub width_bytes: u8,
    /// Whether the type is an unsigned integer.
    pub is_unsigned: bool,
    /// Whether the type is an IEEE-754 float.
    pub is_float: bool,
}

impl TypeDescriptor {
    /// Creates a descriptor.
    #[inline]
    pub const fn new(
        name: &'static str,
        ctype_name: &'static str,
        width_bytes: u8,
        is_unsigned: bool,
        is_float: bool,
    ) -> Self {
        Self {
            name,
            ctype_name,
            width_bytes,
            is_unsigned,
            is_float,
        }
    }

    /// Returns the width in bits.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.width_bytes as u32 * 8
    }

    /// Returns the registry tag for this descriptor, or `None` if the
    /// descriptor is not one of the ten registry entries.
    #[inline]
    pub fn ctype(&self) -> Option<CType> {
        CType::from_descriptor(self)
    }

    /// Returns the `MIN` sentinel of a registry descriptor.
    #[inline]
    pub fn min(&self) -> Option<Cint> {
        self.ctype().map(CType::min)
    }

    /// Returns the `MAX` sentinel of a registry descriptor.
    #[inline]
    pub fn max(&self) -> Option<Cint> {
        self.ctype().map(CType::max)
    }
}

/// The registry tag of a `Cint`.
///
/// The discriminants index the descriptor table, so the variant order is
/// part of the registry layout. Tags carry no ordering; `min()` and
/// `max()` are the type's sentinels.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

static DESCRIPTORS: [TypeDescriptor; 10] = [
    TypeDescriptor::new("I8", "int8_t", 1, false, false),
    TypeDescriptor::new("I16", "int16_t", 2, false, false),
    TypeDescriptor::new("I32", "int32_t", 4, false, false),
    TypeDescriptor::new("I64", "int64_t", 8, false, false),
    TypeDescriptor::new("U8", "uint8_t", 1, true, false),
    TypeDescriptor::new("U16", "uint16_t", 2, true, false),
    TypeDescriptor::new("U32", "uint32_t", 4, true, false),
    TypeDescriptor::new("U64", "uint64_t", 8, true, false),
    TypeDescriptor::new("F32", "float", 4, false, true),
    TypeDescriptor::new("F64", "double", 8, false, true),
];

/// Signed integer types, narrowest first.
pub const SIGNED_INTS: [CType; 4] = [CType::I8, CType::I16, CType::I32, CType::I64];

/// Unsigned integer types, narrowest first.
pub const UNSIGNED_INTS: [CType; 4] = [CType::U8, CType::U16, CType::U32, CType::U64];

/// All integer types: signed first, then unsigned.
pub const INTS: [CType; 8] = [
    CType::I8,
    CType::I16,
    CType::I32,
    CType::I64,
    CType::U8,
    CType::U16,
    CType::U32,
    CType::U64,
];

/// Float types, narrowest first.
pub const FLOATS: [CType; 2] = [CType::F32, CType::F64];

/// Types that can hold negative values: the signed integers and the floats.
pub const SIGNED_TYPES: [CType; 6] = [
    CType::I8,
    CType::I16,
    CType::I32,
    CType::I64,
    CType::F32,
    CType::F64,
];

/// Every registry type.
pub const TYPES: [CType; 10] = [
    CType::I8,
    CType::I16,
    CType::I32,
    CType::I64,
    CType::U8,
    CType::U16,
    CType::U32,
    CType::U64,
    CType::F32,
    CType::F64,
];

/// Returns the integer descriptor of the given width and signedness.
///
/// # Examples
///
/// ```rust
/// # use cint::registry;
///
/// assert_eq!(registry::integer(2, false).unwrap().name, "I16");
/// assert!(registry::integer(3, false).is_none());
/// ```
pub fn integer(width_bytes: u8, is_unsigned: bool) -> Option<&'static TypeDescriptor> {
    INTS.iter()
        .map(|ty| ty.descriptor())
        .find(|d| d.width_bytes == width_bytes && d.is_unsigned == is_unsigned)
}

/// Returns the float descriptor of the given width.
///
/// # Examples
///
/// ```rust
/// # use cint::registry;
///
/// assert_eq!(registry::float(8).unwrap().ctype_name, "double");
/// assert!(registry::float(2).is_none());
/// ```
pub fn float(width_bytes: u8) -> Option<&'static TypeDescriptor> {
    FLOATS
        .iter()
        .map(|ty| ty.descriptor())
        .find(|d| d.width_bytes == width_bytes)
}

impl CType {
    /// Returns the descriptor of this registry type.
    #[inline]
    pub fn descriptor(self) -> &'static TypeDescriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Returns the registry tag matching `descriptor`, if it is a registry
    /// descriptor.
    pub fn from_descriptor(descriptor: &TypeDescriptor) -> Option<CType> {
        TYPES
            .iter()
            .copied()
            .find(|ty| ty.descriptor() == descriptor)
    }

    /// Looks a type up by its registry name (`"U32"`) or its C name
    /// (`"uint32_t"`).
    pub fn from_name(name: &str) -> Option<CType> {
        TYPES.iter().copied().find(|ty| {
            let d = ty.descriptor();
            d.name == name || d.ctype_name == name
        })
    }

    /// Returns the integer tag of the given width and signedness.
    #[inline]
    pub fn for_integer(width_bytes: u8, is_unsigned: bool) -> Option<CType> {
        integer(width_bytes, is_unsigned).and_then(CType::from_descriptor)
    }

    /// The registry name, e.g. `"I64"`.
    #[inline]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// The canonical C name, e.g. `"int64_t"`.
    #[inline]
    pub fn ctype_name(self) -> &'static str {
        self.descriptor().ctype_name
    }

    #[inline]
    pub fn width_bytes(self) -> u8 {
        self.descriptor().width_bytes
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.descriptor().bits()
    }

    #[inline]
    pub fn is_unsigned(self) -> bool {
        self.descriptor().is_unsigned
    }

    #[inline]
    pub fn is_float(self) -> bool {
        self.descriptor().is_float
    }

    #[inline]
    pub fn is_integer(self) -> bool {
        !self.is_float()
    }

    /// Returns the immutable `MIN` sentinel of this type.
    ///
    /// For integers this is the two's-complement lower bound. For floats it
    /// is the smallest positive normal value (C's `FLT_MIN`/`DBL_MIN`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cint::registry::CType;
    ///
    /// assert_eq!(CType::I8.min(), -128);
    /// assert_eq!(CType::U64.min(), 0);
    /// assert!(CType::I8.min().is_sentinel());
    /// ```
    pub const fn min(self) -> Cint {
        let bits = match self {
            CType::I8 => i8::MIN as u8 as u64,
            CType::I16 => i16::MIN as u16 as u64,
            CType::I32 => i32::MIN as u32 as u64,
            CType::I64 => i64::MIN as u64,
            CType::U8 | CType::U16 | CType::U32 | CType::U64 => 0,
            CType::F32 => f32::MIN_POSITIVE.to_bits() as u64,
            CType::F64 => f64::MIN_POSITIVE.to_bits(),
        };
        Cint::sentinel(self, bits)
    }

    /// Returns the immutable `MAX` sentinel of this type.
    ///
    /// For floats this is the largest finite value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cint::registry::CType;
    ///
    /// assert_eq!(CType::I16.max(), 32_767);
    /// assert_eq!(CType::U8.max(), 255);
    /// assert_eq!(CType::F64.max(), f64::MAX);
    /// ```
    pub const fn max(self) -> Cint {
        let bits = match self {
            CType::I8 => i8::MAX as u8 as u64,
            CType::I16 => i16::MAX as u16 as u64,
            CType::I32 => i32::MAX as u32 as u64,
            CType::I64 => i64::MAX as u64,
            CType::U8 => u8::MAX as u64,
            CType::U16 => u16::MAX as u64,
            CType::U32 => u32::MAX as u64,
            CType::U64 => u64::MAX,
            CType::F32 => f32::MAX.to_bits() as u64,
            CType::F64 => f64::MAX.to_bits(),
        };
        Cint::sentinel(self, bits)
    }
}

impl std::fmt::Display for CType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CType {
    type Err = CintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CType::from_name(s)
            .ok_or_else(|| CintError::invalid_value("CType", format!("unknown type name '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_tags() {
        for ty in TYPES {
            assert_eq!(ty.descriptor().name, format!("{:?}", ty));
            assert_eq!(CType::from_descriptor(ty.descriptor()), Some(ty));
        }
    }

    #[test]
    fn test_widths_and_flags() {
        let expected = [
            (CType::I8, 1, false, false),
            (CType::I16, 2, false, false),
            (CType::I32, 4, false, false),
            (CType::I64, 8, false, false),
            (CType::U8, 1, true, false),
            (CType::U16, 2, true, false),
            (CType::U32, 4, true, false),
            (CType::U64, 8, true, false),
            (CType::F32, 4, false, true),
            (CType::F64, 8, false, true),
        ];
        for (ty, width, unsigned, float) in expected {
            assert_eq!(ty.width_bytes(), width, "{}", ty);
            assert_eq!(ty.is_unsigned(), unsigned, "{}", ty);
            assert_eq!(ty.is_float(), float, "{}", ty);
        }
    }

    #[test]
    fn test_integer_lookup() {
        for ty in INTS {
            let d = integer(ty.width_bytes(), ty.is_unsigned()).unwrap();
            assert_eq!(d, ty.descriptor());
            assert_eq!(CType::for_integer(ty.width_bytes(), ty.is_unsigned()), Some(ty));
        }
        assert!(integer(16, true).is_none());
        assert!(integer(0, false).is_none());
    }

    #[test]
    fn test_float_lookup() {
        assert_eq!(float(4), Some(CType::F32.descriptor()));
        assert_eq!(float(8), Some(CType::F64.descriptor()));
        assert_eq!(float(1), None);
    }

    #[test]
    fn test_ctype_names() {
        assert_eq!(CType::I8.ctype_name(), "int8_t");
        assert_eq!(CType::U64.ctype_name(), "uint64_t");
        assert_eq!(CType::F32.ctype_name(), "float");
        assert_eq!(CType::from_name("uint16_t"), Some(CType::U16));
        assert_eq!(CType::from_name("I32"), Some(CType::I32));
        assert_eq!(CType::from_name("int128_t"), None);
        assert_eq!("double".parse::<CType>(), Ok(CType::F64));
        assert!("long".parse::<CType>().is_err());
    }

    #[test]
    fn test_tuples_are_consistent() {
        assert!(SIGNED_INTS.iter().all(|t| !t.is_unsigned() && t.is_integer()));
        assert!(UNSIGNED_INTS.iter().all(|t| t.is_unsigned()));
        assert!(FLOATS.iter().all(|t| t.is_float()));
        assert!(SIGNED_TYPES.iter().all(|t| !t.is_unsigned()));
        assert_eq!(INTS.len() + FLOATS.len(), TYPES.len());
    }

    #[test]
    fn test_foreign_descriptor_is_not_registered() {
        let foreign = TypeDescriptor::new("I128", "int128_t", 16, false, false);
        assert_eq!(foreign.ctype(), None);
        assert!(foreign.min().is_none());

        // Same fields as a registry entry means the same type.
        let u8_like = TypeDescriptor::new("U8", "uint8_t", 1, true, false);
        assert_eq!(u8_like.ctype(), Some(CType::U8));
    }

    #[test]
    fn test_sentinels_through_references() {
        for ty in INTS.iter().filter(|t| !t.is_unsigned()) {
            assert!(ty.min() < 0, "{}", ty);
            assert!(ty.min().is_sentinel());
            assert_eq!(ty.max().ctype(), *ty);
        }
        for ty in TYPES.iter() {
            assert_eq!(ty.min().to_bits(), CType::min(*ty).to_bits());
            assert_eq!(ty.max().to_bits(), CType::max(*ty).to_bits());
        }
    }

    #[test]
    fn test_sentinel_bounds() {
        assert_eq!(CType::I8.min().to_i128(), -128);
        assert_eq!(CType::I8.max().to_i128(), 127);
        assert_eq!(CType::I64.min().to_i128(), i64::MIN as i128);
        assert_eq!(CType::U64.max().to_i128(), u64::MAX as i128);
        assert_eq!(CType::U32.min().to_i128(), 0);
        assert_eq!(CType::F32.min().to_f64(), f32::MIN_POSITIVE as f64);
        assert_eq!(CType::F32.max().to_f64(), f32::MAX as f64);
        for ty in TYPES {
            assert_eq!(ty.min().ctype(), ty);
            assert_eq!(ty.max().ctype(), ty);
            assert!(ty.min().is_sentinel() && ty.max().is_sentinel());
        }
    }
}
