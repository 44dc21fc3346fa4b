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

//! # Type Range Introspection
//!
//! Minimum, maximum and bit width of an integer type, derived purely from
//! bit manipulation on values of that type. No wider type is ever involved,
//! so the same code serves `u8` and `i128` alike.
//!
//! ```rust
//! use exactint_core::num::range::{bit_width, range};
//!
//! assert_eq!(range::<i8>(), (-128, 127));
//! assert_eq!(range::<u16>(), (0, u16::MAX));
//! assert_eq!(bit_width::<i32>(), 32);
//! ```

use crate::num::integer::Integer;

/// Returns `(min, max)` of `T`.
///
/// Decrementing zero yields `-1` for signed and the maximum for unsigned
/// types. For signed types the maximum is the all-ones pattern shifted right
/// logically by one, and the minimum is its complement.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::num::range::range;
///
/// assert_eq!(range::<i64>(), (i64::MIN, i64::MAX));
/// assert_eq!(range::<u8>(), (0, 255));
/// ```
#[inline]
pub fn range<T: Integer>() -> (T, T) {
    let all_ones = T::zero().wrapping_sub(&T::one());
    if all_ones > T::zero() {
        (T::zero(), all_ones)
    } else {
        let max = all_ones.unsigned_shr(1);
        (!max, max)
    }
}

/// Returns the minimum value of `T`.
#[inline]
pub fn min_value<T: Integer>() -> T {
    range::<T>().0
}

/// Returns the maximum value of `T`.
#[inline]
pub fn max_value<T: Integer>() -> T {
    range::<T>().1
}

/// Returns the number of bits in `T`.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::num::range::bit_width;
///
/// assert_eq!(bit_width::<u8>(), 8);
/// assert_eq!(bit_width::<i128>(), 128);
/// ```
#[inline]
pub fn bit_width<T: Integer>() -> u32 {
    T::zero().count_zeros()
}

/// Returns `true` if `v` is the minimum value of `T`.
///
/// For signed types this is the only value whose wrapping negation is itself
/// while being non-zero.
#[inline]
pub fn is_min<T: Integer>(v: T) -> bool {
    if T::SIGNED {
        !v.is_zero() && v.wrapping_neg() == v
    } else {
        v.is_zero()
    }
}

/// Returns `true` if `v` is the maximum value of `T`.
#[inline]
pub fn is_max<T: Integer>(v: T) -> bool {
    v == max_value::<T>()
}
