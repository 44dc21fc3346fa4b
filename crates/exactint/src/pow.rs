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

//! Checked integer powers.

use exactint_core::{
    ArithError, Integer, Result,
    num::ops::checked_arithmetic::mul,
};
use num_traits::NumCast;

/// `base` raised to `exponent` by square-and-multiply.
///
/// The base is squared only while higher exponent bits remain, so a square
/// that is never multiplied in cannot report a spurious overflow.
///
/// # Examples
///
/// ```rust
/// # use exactint::pow::pow;
/// # use exactint_core::ArithError;
///
/// assert_eq!(pow(-2i8, 7), Ok(-128));
/// assert_eq!(pow(2i8, 7), Err(ArithError::Overflow));
/// assert_eq!(pow(3u64, 0), Ok(1));
/// assert_eq!(pow(-1i32, u32::MAX), Ok(-1));
/// ```
pub fn pow<T: Integer>(base: T, exponent: u32) -> Result<T> {
    let mut result = T::one();
    let mut square = base;
    let mut remaining = exponent;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = mul(result, square)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            square = mul(square, square)?;
        }
    }
    Ok(result)
}

/// `10^power` in `T`.
///
/// # Examples
///
/// ```rust
/// # use exactint::pow::pow10;
/// # use exactint_core::ArithError;
///
/// assert_eq!(pow10::<i8>(2), Ok(100));
/// assert_eq!(pow10::<i8>(3), Err(ArithError::Overflow));
/// assert_eq!(pow10::<u64>(19), Ok(10_000_000_000_000_000_000));
/// ```
#[inline]
pub fn pow10<T: Integer>(power: u32) -> Result<T> {
    let ten = <T as NumCast>::from(10u8).ok_or(ArithError::Overflow)?;
    pow(ten, power)
}
