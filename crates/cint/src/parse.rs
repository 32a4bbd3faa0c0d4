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

use crate::{error::CintError, registry::CType, value::Cint};

impl Cint {
    /// Parses `text` as a value of type `ty`.
    ///
    /// Float types accept any decimal float literal plus `nan`, `inf` and
    /// `-inf` in any case. Integer types accept a decimal literal with an
    /// optional sign; out-of-range literals wrap. Surrounding whitespace is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CintError::InvalidValue`] if `text` is not a literal of the
    /// expected kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cint::{Cint, registry::CType};
    ///
    /// assert!(Cint::parse(CType::F64, "NaN").unwrap().is_nan());
    /// assert_eq!(Cint::parse(CType::U8, "-1").unwrap(), 255);
    /// assert!(Cint::parse(CType::I32, "inf").is_err());
    /// ```
    pub fn parse(ty: CType, text: &str) -> Result<Cint, CintError> {
        let trimmed = text.trim();
        let invalid = || CintError::invalid_value(ty.name(), format!("cannot parse {:?}", text));

        match ty {
            CType::F32 => trimmed.parse::<f32>().map(Cint::f32).map_err(|_| invalid()),
            CType::F64 => trimmed.parse::<f64>().map(Cint::f64).map_err(|_| invalid()),
            _ => parse_wrapping(trimmed)
                .map(|v| Cint::from_int(ty, v))
                .ok_or_else(invalid),
        }
    }
}

/// Parses a signed decimal literal modulo 2^128, which keeps it congruent
/// to the exact value modulo every cell width.
fn parse_wrapping(text: &str) -> Option<i128> {
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() {
        return None;
    }

    let mut acc: i128 = 0;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            return None;
        }
        acc = acc.wrapping_mul(10).wrapping_add(i128::from(b - b'0'));
    }
    Some(if negative { acc.wrapping_neg() } else { acc })
}
