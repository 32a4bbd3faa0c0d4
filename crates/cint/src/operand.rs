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

//! # Operands
//!
//! The closed set of things a `Cint` operator accepts on its other side:
//! bare native numbers (literals) and values of a registry type. Operator
//! code never inspects operands directly; it asks [`payload_of`] for the raw
//! numeric payload and the operand's type descriptor, if it has one.
//!
//! Bare literals have no descriptor and never influence the result type.
//! Third-party types may implement [`Operand`] and report a descriptor of
//! their own; promotion rejects descriptors that are not registry entries.

use crate::registry::TypeDescriptor;

/// The raw numeric payload of an operand, in the widest native domain.
///
/// Integers of every registry width fit in `i128`, and `f32` converts to
/// `f64` without loss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Raw {
    Int(i128),
    Float(f64),
}

impl Raw {
    /// Returns `true` for a float payload.
    #[inline]
    pub fn is_float(self) -> bool {
        matches!(self, Raw::Float(_))
    }

    /// Returns the payload as `f64`, rounding large integers to nearest.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Raw::Int(i) => i as f64,
            Raw::Float(f) => f,
        }
    }
}

/// A value that can stand on either side of a `Cint` operator.
///
/// # Examples
///
/// ```rust
/// # use cint::{Cint, Operand, Raw};
///
/// assert_eq!(5u16.payload(), Raw::Int(5));
/// assert!(5u16.descriptor().is_none());
///
/// let x = Cint::u8(7);
/// assert_eq!(x.payload(), Raw::Int(7));
/// assert_eq!(x.descriptor().unwrap().name, "U8");
/// ```
pub trait Operand {
    /// Returns the raw numeric payload.
    fn payload(&self) -> Raw;

    /// Returns the operand's type, or `None` for a bare literal.
    #[inline]
    fn descriptor(&self) -> Option<&TypeDescriptor> {
        None
    }
}

/// Extracts the raw payload and optional type descriptor of an operand.
#[inline]
pub fn payload_of<O>(operand: &O) -> (Raw, Option<&TypeDescriptor>)
where
    O: Operand + ?Sized,
{
    (operand.payload(), operand.descriptor())
}

macro_rules! int_operand_impl {
    ($($t:ty),* $(,)*) => {
        $(impl Operand for $t {
            #[inline(always)]
            fn payload(&self) -> Raw {
                Raw::Int(*self as i128)
            }
        })*
    };
}

macro_rules! float_operand_impl {
    ($($t:ty),* $(,)*) => {
        $(impl Operand for $t {
            #[inline(always)]
            fn payload(&self) -> Raw {
                Raw::Float(*self as f64)
            }
        })*
    };
}

int_operand_impl!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
float_operand_impl!(f32, f64);

impl<T> Operand for &T
where
    T: Operand + ?Sized,
{
    #[inline(always)]
    fn payload(&self) -> Raw {
        (**self).payload()
    }

    #[inline(always)]
    fn descriptor(&self) -> Option<&TypeDescriptor> {
        (**self).descriptor()
    }
}
