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

//! Formatting for [`Cint`].
//!
//! `Display` prints the decimal value and honors width, fill and precision
//! flags. `Debug` prefixes the registry name: `U8(4)`, `F64(0.5)`. The
//! radix formats print the bit pattern at the type's native width, so
//! `format!("{:x}", Cint::i8(-1))` is `ff`.

use crate::{operand::Raw, registry::CType, value::Cint};
use std::fmt;

impl fmt::Display for Cint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.ctype(), self.raw()) {
            (_, Raw::Int(i)) => fmt::Display::fmt(&i, f),
            // Print the shortest form that round-trips at single precision.
            (CType::F32, Raw::Float(v)) => fmt::Display::fmt(&(v as f32), f),
            (_, Raw::Float(v)) => fmt::Display::fmt(&v, f),
        }
    }
}

impl fmt::Debug for Cint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.ctype().name())?;
        match (self.ctype(), self.raw()) {
            (_, Raw::Int(i)) => write!(f, "{}", i)?,
            (CType::F32, Raw::Float(v)) => write!(f, "{:?}", v as f32)?,
            (_, Raw::Float(v)) => write!(f, "{:?}", v)?,
        }
        f.write_str(")")
    }
}

macro_rules! bits_format_impl {
    ($($trait_name:ident),* $(,)*) => {
        $(impl fmt::$trait_name for Cint {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::$trait_name::fmt(&self.to_bits(), f)
            }
        })*
    };
}

bits_format_impl!(Binary, LowerHex, UpperHex, Octal);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_decimal_value() {
        assert_eq!(Cint::u8(4).to_string(), "4");
        assert_eq!(Cint::i64(i64::MIN).to_string(), i64::MIN.to_string());
        assert_eq!(Cint::u64(u64::MAX).to_string(), u64::MAX.to_string());
        assert_eq!(Cint::f32(0.1).to_string(), "0.1");
        assert_eq!(Cint::f64(-2.5).to_string(), "-2.5");
        assert_eq!(Cint::f64(f64::NAN).to_string(), "NaN");
        assert_eq!(Cint::f32(f32::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn test_display_honors_flags() {
        assert_eq!(format!("{:>5}", Cint::i8(-3)), "   -3");
        assert_eq!(format!("{:+}", Cint::u16(7)), "+7");
        assert_eq!(format!("{:.2}", Cint::f64(1.0)), "1.00");
    }

    #[test]
    fn test_debug_names_the_type() {
        assert_eq!(format!("{:?}", Cint::u8(4)), "U8(4)");
        assert_eq!(format!("{:?}", Cint::i32(-1)), "I32(-1)");
        assert_eq!(format!("{:?}", Cint::f64(1.0)), "F64(1.0)");
        assert_eq!(format!("{:?}", Cint::f32(0.1)), "F32(0.1)");
        assert_eq!(format!("{:?}", CType::I16.min()), "I16(-32768)");
    }

    #[test]
    fn test_radix_formats_use_native_width() {
        assert_eq!(format!("{:x}", Cint::i8(-1)), "ff");
        assert_eq!(format!("{:X}", Cint::i16(-2)), "FFFE");
        assert_eq!(format!("{:#b}", Cint::u8(5)), "0b101");
        assert_eq!(format!("{:o}", Cint::i8(-128)), "200");
        assert_eq!(format!("{:08x}", Cint::f32(1.0)), "3f800000");
        assert_eq!(format!("{:x}", Cint::i64(-1)), "ffffffffffffffff");
    }
}
