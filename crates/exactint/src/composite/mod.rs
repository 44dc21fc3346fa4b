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

//! # Composite Expressions
//!
//! Fused expressions such as `(a + b) / c` that succeed whenever the exact
//! mathematical result fits in `T`, even if an intermediate does not.
//!
//! Each function first rejects a zero divisor, so [`ArithError::DivisionByZero`]
//! wins over any overflow. It then tries the expression directly with the
//! checked primitives, in every grouping the expression allows. Only when all
//! groupings overflow does it build the exact numerator one bit wider than
//! `T` and divide that instead. The exact path never loses precision, so an
//! [`ArithError::Overflow`] from it means the true result is out of range.
//!
//! ```rust
//! use exactint::composite::{add_div, sub_div_rem};
//! use exactint_core::ArithError;
//!
//! // 100 + 100 overflows i8, but 200 / 3 = 66 fits.
//! assert_eq!(add_div(100i8, 100, 3), Ok(66));
//! assert_eq!(add_div(100i8, 100, 1), Err(ArithError::Overflow));
//! assert_eq!(add_div(100i8, 100, 0), Err(ArithError::DivisionByZero));
//! // (-128 - 127) % 100 = -55
//! assert_eq!(sub_div_rem(-128i8, 127, 100), Ok(-55));
//! ```

mod numerator;

use exactint_core::{
    ArithError, Integer, Result,
    num::ops::checked_arithmetic::{add, div, rem, sub},
};
use numerator::Numerator;

#[inline]
fn ensure_divisor<T: Integer>(divisor: T) -> Result<()> {
    if divisor.is_zero() {
        Err(ArithError::DivisionByZero)
    } else {
        Ok(())
    }
}

/// `a + b - c` directly in `T`, trying each grouping in turn.
#[inline]
fn grouped_add_sub<T: Integer>(a: T, b: T, c: T) -> Result<T> {
    add(a, b)
        .and_then(|sum| sub(sum, c))
        .or_else(|_| sub(a, c).and_then(|difference| add(difference, b)))
        .or_else(|_| sub(b, c).and_then(|difference| add(a, difference)))
}

#[inline]
fn numerator_add_sub<T: Integer>(a: T, b: T, c: T) -> Result<Numerator<T>> {
    Numerator::new(a).plus(b)?.minus(c)
}

#[inline]
fn exact_path(operation: &'static str) {
    tracing::trace!(operation, "direct evaluation overflowed, using exact numerator");
}

/// `(a + b) / c` with truncating division.
///
/// # Examples
///
/// ```rust
/// # use exactint::composite::add_div;
/// # use exactint_core::ArithError;
///
/// assert_eq!(add_div(250u8, 250, 2), Ok(250));
/// assert_eq!(add_div(-128i8, -128, -128), Ok(2));
/// assert_eq!(add_div(-128i8, 0, -1), Err(ArithError::Overflow));
/// ```
pub fn add_div<T: Integer>(a: T, b: T, c: T) -> Result<T> {
    ensure_divisor(c)?;
    match add(a, b) {
        Ok(sum) => div(sum, c),
        Err(_) => {
            exact_path("add_div");
            Numerator::new(a).plus(b)?.quotient(c)
        }
    }
}

/// `(a - b) / c` with truncating division.
///
/// # Examples
///
/// ```rust
/// # use exactint::composite::sub_div;
///
/// assert_eq!(sub_div(127i8, -128, 5), Ok(51));
/// assert_eq!(sub_div(0u8, 5, 10), Ok(0));
/// ```
pub fn sub_div<T: Integer>(a: T, b: T, c: T) -> Result<T> {
    ensure_divisor(c)?;
    match sub(a, b) {
        Ok(difference) => div(difference, c),
        Err(_) => {
            exact_path("sub_div");
            Numerator::new(a).minus(b)?.quotient(c)
        }
    }
}

/// `(a + b) % c`; the remainder takes the sign of `a + b`.
///
/// # Examples
///
/// ```rust
/// # use exactint::composite::add_div_rem;
///
/// assert_eq!(add_div_rem(100i8, 100, 7), Ok(4));
/// assert_eq!(add_div_rem(-100i8, -100, 7), Ok(-4));
/// ```
pub fn add_div_rem<T: Integer>(a: T, b: T, c: T) -> Result<T> {
    ensure_divisor(c)?;
    match add(a, b) {
        Ok(sum) => rem(sum, c),
        Err(_) => {
            exact_path("add_div_rem");
            Numerator::new(a).plus(b)?.remainder(c)
        }
    }
}

/// `(a - b) % c`; the remainder takes the sign of `a - b`.
///
/// For unsigned `T` a negative difference with a non-zero remainder has no
/// representation and fails with [`ArithError::Overflow`].
pub fn sub_div_rem<T: Integer>(a: T, b: T, c: T) -> Result<T> {
    ensure_divisor(c)?;
    match sub(a, b) {
        Ok(difference) => rem(difference, c),
        Err(_) => {
            exact_path("sub_div_rem");
            Numerator::new(a).minus(b)?.remainder(c)
        }
    }
}

/// `a + b - c`, exact whenever the result fits.
///
/// # Examples
///
/// ```rust
/// # use exactint::composite::add_sub;
///
/// assert_eq!(add_sub(100i8, 100, 100), Ok(100));
/// assert_eq!(add_sub(0u8, 1, 1), Ok(0));
/// ```
pub fn add_sub<T: Integer>(a: T, b: T, c: T) -> Result<T> {
    grouped_add_sub(a, b, c).or_else(|_| {
        exact_path("add_sub");
        numerator_add_sub(a, b, c)?.value()
    })
}

/// `(a + b - c) / d` with truncating division.
///
/// # Examples
///
/// ```rust
/// # use exactint::composite::add_sub_div;
///
/// assert_eq!(add_sub_div(127i8, 127, -127, 3), Ok(127));
/// assert_eq!(add_sub_div(10u8, 0, 20, 20), Ok(0));
/// ```
pub fn add_sub_div<T: Integer>(a: T, b: T, c: T, d: T) -> Result<T> {
    ensure_divisor(d)?;
    match grouped_add_sub(a, b, c) {
        Ok(numerator) => div(numerator, d),
        Err(_) => {
            exact_path("add_sub_div");
            numerator_add_sub(a, b, c)?.quotient(d)
        }
    }
}

/// `(a + 1 - b) / c` with truncating division.
///
/// # Examples
///
/// ```rust
/// # use exactint::composite::add_one_sub_div;
///
/// assert_eq!(add_one_sub_div(127i8, -128, 4), Ok(64));
/// assert_eq!(add_one_sub_div(9u32, 0, 5), Ok(2));
/// ```
pub fn add_one_sub_div<T: Integer>(a: T, b: T, c: T) -> Result<T> {
    ensure_divisor(c)?;
    match grouped_add_sub(a, T::one(), b) {
        Ok(numerator) => div(numerator, c),
        Err(_) => {
            exact_path("add_one_sub_div");
            numerator_add_sub(a, T::one(), b)?.quotient(c)
        }
    }
}
