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

//! # Integer Trait
//!
//! `Integer` collects the capabilities every checked operation in the
//! workspace needs from a primitive integer type: the intrinsic `PrimInt`
//! surface, defined wrapping arithmetic for the bit-level overflow checks,
//! and a same-width unsigned twin used to reinterpret bit patterns and hold
//! magnitudes that do not fit the signed range (such as `|i8::MIN| == 128`).
//!
//! The trait is implemented for every primitive integer, signed and
//! unsigned, including `i128`/`u128` and the pointer-sized types.

use crate::error::{ArithError, Result};
use num_traits::{One, PrimInt, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub, Zero};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// A primitive integer type usable with the checked operations.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::num::integer::Integer;
///
/// assert_eq!((-128i8).magnitude(), 128u8);
/// assert_eq!(i8::from_magnitude(true, 128u8), Ok(-128));
/// assert!(i8::from_magnitude(false, 128u8).is_err());
/// assert_eq!((-1i8).to_bits(), 0xFFu8);
/// ```
pub trait Integer:
    PrimInt
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + WrappingNeg
    + Debug
    + Display
    + Hash
    + Send
    + Sync
    + 'static
{
    /// The unsigned integer type with the same bit width.
    type Unsigned: Integer<Unsigned = Self::Unsigned>;

    /// Whether the type can represent negative values.
    const SIGNED: bool;

    /// Reinterprets the two's-complement bit pattern as the unsigned twin.
    fn to_bits(self) -> Self::Unsigned;

    /// Reinterprets an unsigned bit pattern as `Self`.
    fn from_bits(bits: Self::Unsigned) -> Self;

    /// Returns `|self|` as the unsigned twin. Total, also for the signed minimum.
    #[inline]
    fn magnitude(self) -> Self::Unsigned {
        if self < Self::zero() {
            self.wrapping_neg().to_bits()
        } else {
            self.to_bits()
        }
    }

    /// Builds the value with the given sign and magnitude.
    ///
    /// Fails with [`ArithError::Overflow`] when the signed value is outside
    /// the range of `Self`. A zero magnitude is always accepted, whatever the
    /// sign.
    #[inline]
    fn from_magnitude(negative: bool, magnitude: Self::Unsigned) -> Result<Self> {
        let max = Self::max_value().to_bits();
        if magnitude.is_zero() {
            return Ok(Self::zero());
        }
        if !negative {
            return if magnitude <= max {
                Ok(Self::from_bits(magnitude))
            } else {
                Err(ArithError::Overflow)
            };
        }
        // `magnitude - 1` cannot wrap here since the zero case returned above.
        if Self::SIGNED && magnitude.wrapping_sub(&Self::Unsigned::one()) <= max {
            Ok(Self::from_bits(magnitude).wrapping_neg())
        } else {
            Err(ArithError::Overflow)
        }
    }
}

macro_rules! impl_integer_for {
    ($t:ty, $u:ty, $signed:expr) => {
        impl Integer for $t {
            type Unsigned = $u;

            const SIGNED: bool = $signed;

            #[inline(always)]
            fn to_bits(self) -> $u {
                self as $u
            }

            #[inline(always)]
            fn from_bits(bits: $u) -> Self {
                bits as $t
            }
        }
    };
}

impl_integer_for!(u8, u8, false);
impl_integer_for!(u16, u16, false);
impl_integer_for!(u32, u32, false);
impl_integer_for!(u64, u64, false);
impl_integer_for!(u128, u128, false);
impl_integer_for!(usize, usize, false);

impl_integer_for!(i8, u8, true);
impl_integer_for!(i16, u16, true);
impl_integer_for!(i32, u32, true);
impl_integer_for!(i64, u64, true);
impl_integer_for!(i128, u128, true);
impl_integer_for!(isize, usize, true);
