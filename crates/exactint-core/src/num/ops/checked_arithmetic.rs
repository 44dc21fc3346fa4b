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

//! # Primitive Checked Arithmetic
//!
//! Overflow-checked add, subtract, multiply, divide, remainder, negate and
//! left shift for any [`Integer`]. Each operation computes the wrapped
//! two's-complement result and then decides from the operands alone whether
//! wrapping happened, so every check is a handful of comparisons on values of
//! the operand type.
//!
//! The free functions are the primary API. [`SafeArith`] exposes the same
//! operations with method syntax for chaining.

use crate::{
    error::{ArithError, Result},
    num::{
        integer::Integer,
        range::{bit_width, is_min},
    },
};

#[inline(always)]
fn minus_one<T: Integer>() -> T {
    T::zero().wrapping_sub(&T::one())
}

/// Checked addition.
///
/// For signed types the wrapped sum moves against the sign of `b` exactly
/// when overflow happened; for unsigned types addition is monotone, so a sum
/// below `a` is the only symptom.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::num::ops::checked_arithmetic::add;
/// # use exactint_core::error::ArithError;
///
/// assert_eq!(add(124i8, 3), Ok(127));
/// assert_eq!(add(125i8, 3), Err(ArithError::Overflow));
/// assert_eq!(add(200u8, 100), Err(ArithError::Overflow));
/// ```
#[inline]
pub fn add<T: Integer>(a: T, b: T) -> Result<T> {
    let sum = a.wrapping_add(&b);
    let overflow = if T::SIGNED {
        (b > T::zero() && sum < a) || (b < T::zero() && sum > a)
    } else {
        sum < a
    };
    if overflow {
        Err(ArithError::Overflow)
    } else {
        Ok(sum)
    }
}

/// Checked subtraction.
///
/// Mirrors [`add`] without ever forming `-b`, which itself overflows when
/// `b` is the signed minimum.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::num::ops::checked_arithmetic::sub;
/// # use exactint_core::error::ArithError;
///
/// assert_eq!(sub(-1i8, i8::MIN), Ok(127));
/// assert_eq!(sub(0i8, i8::MIN), Err(ArithError::Overflow));
/// assert_eq!(sub(3u8, 4), Err(ArithError::Overflow));
/// ```
#[inline]
pub fn sub<T: Integer>(a: T, b: T) -> Result<T> {
    let diff = a.wrapping_sub(&b);
    let overflow = if T::SIGNED {
        (b > T::zero() && diff > a) || (b < T::zero() && diff < a)
    } else {
        diff > a
    };
    if overflow {
        Err(ArithError::Overflow)
    } else {
        Ok(diff)
    }
}

/// Checked multiplication.
///
/// Two independent tests are needed: the sign of the wrapped product must
/// agree with the signs of the operands (`a ^ b ^ p` must be non-negative),
/// and dividing the product by `b` must give back `a`. The sign test alone
/// misses overflows that only lose magnitude.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::num::ops::checked_arithmetic::mul;
/// # use exactint_core::error::ArithError;
///
/// assert_eq!(mul(-64i8, 2), Ok(-128));
/// assert_eq!(mul(-128i8, -1), Err(ArithError::Overflow));
/// assert_eq!(mul(16u8, 16), Err(ArithError::Overflow));
/// ```
#[inline]
pub fn mul<T: Integer>(a: T, b: T) -> Result<T> {
    if a.is_zero() || b.is_zero() {
        return Ok(T::zero());
    }
    let product = a.wrapping_mul(&b);
    if T::SIGNED && (a ^ b ^ product) < T::zero() {
        return Err(ArithError::Overflow);
    }
    match product.checked_div(&b) {
        Some(q) if q == a => Ok(product),
        _ => Err(ArithError::Overflow),
    }
}

/// Checked truncating division.
///
/// Division by zero is reported as [`ArithError::DivisionByZero`]. The only
/// overflowing quotient is the signed minimum divided by `-1`.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::num::ops::checked_arithmetic::div;
/// # use exactint_core::error::ArithError;
///
/// assert_eq!(div(-128i8, -2), Ok(64));
/// assert_eq!(div(-128i8, -1), Err(ArithError::Overflow));
/// assert_eq!(div(7u8, 0), Err(ArithError::DivisionByZero));
/// ```
#[inline]
pub fn div<T: Integer>(a: T, b: T) -> Result<T> {
    if b.is_zero() {
        return Err(ArithError::DivisionByZero);
    }
    if T::SIGNED && b == minus_one::<T>() && is_min(a) {
        return Err(ArithError::Overflow);
    }
    Ok(a / b)
}

/// Checked remainder of truncating division.
///
/// The remainder carries the sign of `a`. Unlike the intrinsic
/// `checked_rem`, the signed minimum modulo `-1` is the exact value `0`.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::num::ops::checked_arithmetic::rem;
/// # use exactint_core::error::ArithError;
///
/// assert_eq!(rem(-7i8, 3), Ok(-1));
/// assert_eq!(rem(i8::MIN, -1), Ok(0));
/// assert_eq!(rem(1i8, 0), Err(ArithError::DivisionByZero));
/// ```
#[inline]
pub fn rem<T: Integer>(a: T, b: T) -> Result<T> {
    if b.is_zero() {
        return Err(ArithError::DivisionByZero);
    }
    if T::SIGNED && b == minus_one::<T>() {
        return Ok(T::zero());
    }
    Ok(a % b)
}

/// Checked negation.
///
/// Signed types fail only at their minimum. Unsigned types can only negate
/// zero.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::num::ops::checked_arithmetic::negate;
/// # use exactint_core::error::ArithError;
///
/// assert_eq!(negate(127i8), Ok(-127));
/// assert_eq!(negate(-128i8), Err(ArithError::Overflow));
/// assert_eq!(negate(0u8), Ok(0));
/// assert_eq!(negate(1u8), Err(ArithError::Overflow));
/// ```
#[inline]
pub fn negate<T: Integer>(a: T) -> Result<T> {
    if T::SIGNED {
        if is_min(a) {
            Err(ArithError::Overflow)
        } else {
            Ok(a.wrapping_neg())
        }
    } else if a.is_zero() {
        Ok(a)
    } else {
        Err(ArithError::Overflow)
    }
}

/// Checked absolute value. Fails only at the signed minimum.
#[inline]
pub fn abs<T: Integer>(a: T) -> Result<T> {
    if a < T::zero() { negate(a) } else { Ok(a) }
}

/// Checked left shift by `count` bits.
///
/// A negative `count` is rejected with [`ArithError::NegativeShift`]. The
/// shifted value is shifted back (arithmetically for signed types) and must
/// reproduce `a`; any bit, including the sign bit, pushed out of the top is
/// therefore reported as overflow.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::num::ops::checked_arithmetic::shift;
/// # use exactint_core::error::ArithError;
///
/// assert_eq!(shift(1i8, 6), Ok(64));
/// assert_eq!(shift(1i8, 7), Err(ArithError::Overflow));
/// assert_eq!(shift(-1i8, 7), Ok(-128));
/// assert_eq!(shift(1u8, -1), Err(ArithError::NegativeShift));
/// ```
#[inline]
pub fn shift<T: Integer>(a: T, count: i32) -> Result<T> {
    if count < 0 {
        return Err(ArithError::NegativeShift);
    }
    let count = count.unsigned_abs();
    if count >= bit_width::<T>() {
        return if a.is_zero() {
            Ok(a)
        } else {
            Err(ArithError::Overflow)
        };
    }
    let shifted = a << count as usize;
    if shifted >> count as usize == a {
        Ok(shifted)
    } else {
        Err(ArithError::Overflow)
    }
}

/// Method-syntax access to the checked primitives.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::num::ops::checked_arithmetic::SafeArith;
/// # use exactint_core::error::ArithError;
///
/// assert_eq!(100i8.safe_add(20).and_then(|v| v.safe_mul(2)), Err(ArithError::Overflow));
/// assert_eq!(100i8.safe_sub(20).and_then(|v| v.safe_div(2)), Ok(40));
/// ```
pub trait SafeArith: Integer {
    /// See [`add`].
    #[inline(always)]
    fn safe_add(self, rhs: Self) -> Result<Self> {
        add(self, rhs)
    }

    /// See [`sub`].
    #[inline(always)]
    fn safe_sub(self, rhs: Self) -> Result<Self> {
        sub(self, rhs)
    }

    /// See [`mul`].
    #[inline(always)]
    fn safe_mul(self, rhs: Self) -> Result<Self> {
        mul(self, rhs)
    }

    /// See [`div`].
    #[inline(always)]
    fn safe_div(self, rhs: Self) -> Result<Self> {
        div(self, rhs)
    }

    /// See [`rem`].
    #[inline(always)]
    fn safe_rem(self, rhs: Self) -> Result<Self> {
        rem(self, rhs)
    }

    /// See [`negate`].
    #[inline(always)]
    fn safe_neg(self) -> Result<Self> {
        negate(self)
    }

    /// See [`abs`].
    #[inline(always)]
    fn safe_abs(self) -> Result<Self> {
        abs(self)
    }

    /// See [`shift`].
    #[inline(always)]
    fn safe_shl(self, count: i32) -> Result<Self> {
        shift(self, count)
    }
}

impl<T: Integer> SafeArith for T {}
