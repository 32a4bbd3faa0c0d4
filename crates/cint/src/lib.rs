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

//! # Cint
//!
//! Fixed-width numbers with C semantics: `I8`..`I64`, `U8`..`U64`, `F32` and
//! `F64`. Integer arithmetic wraps at the type's width instead of growing or
//! panicking, mixed-type operations promote the way C's usual arithmetic
//! conversions do, and float arithmetic rounds to the type's precision.
//!
//! ```rust
//! use cint::{Cint, registry::CType};
//!
//! let x = Cint::u8(250) + Cint::u8(10);
//! assert_eq!(x, 4);
//!
//! let y = Cint::i8(-1) * Cint::u32(2);
//! assert_eq!(y.ctype(), CType::U32);
//! assert_eq!(y, u32::MAX - 1);
//!
//! assert_eq!(-CType::I8.min(), -128);
//! ```
//!
//! ## Promotion
//!
//! A bare literal never changes the type: `U8(250) + 10` is a `U8`. Between
//! two registry types, a float beats any integer and the wider float wins;
//! between two integers the wider wins, and at equal width the unsigned one
//! wins. Shifts keep the left operand's type.
//!
//! ## Comparison quirk
//!
//! `==` compares mathematical values. Ordering (`<`, `>`, ...) converts the
//! right operand into the promoted type first, as C does, so
//!
//! ```rust
//! # use cint::Cint;
//! assert!(Cint::u8(1) < -1);
//! assert!(!(Cint::u64(1) > Cint::i8(-1)));
//! assert!(Cint::u8(1) != -1);
//! ```
//!
//! `PartialOrd` is therefore not consistent with `PartialEq` across
//! signedness. Use [`Cint::compare`] for the fallible form.
//!
//! ## Errors
//!
//! Every fallible operation has a `Result` form ([`Cint::try_new`],
//! [`Cint::apply`], [`Cint::apply_assign`], [`Cint::compare`],
//! [`Cint::parse`]) returning a [`CintError`]. The `std::ops` impls panic
//! with the same message instead.
//!
//! ## Modules
//!
//! - `registry`: The ten type descriptors, the [`CType`] tag and the
//!   `MIN`/`MAX` sentinels.
//! - `value`: The [`Cint`] value, construction and conversion.
//! - `operand`: The [`Operand`] trait, implemented by native numbers and
//!   [`Cint`], which supplies the raw payload and type of a right operand.
//! - `promotion`: Result type selection.
//! - `ops`: Binary and unary operators, in `Result` and `std::ops` forms.
//! - `num`: Width-generic cell helpers and exact integer/float comparison.
//! - `error`: The [`CintError`] type.

pub mod error;
pub mod num;
pub mod operand;
pub mod ops;
pub mod promotion;
pub mod registry;
pub mod value;

mod cmp;
mod fmt;
mod parse;

pub use error::CintError;
pub use operand::{Operand, Raw, payload_of};
pub use ops::{BinaryOp, UnaryOp};
pub use promotion::promote;
pub use registry::{CType, TypeDescriptor};
pub use value::Cint;
