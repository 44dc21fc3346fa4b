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

//! # Multi-Term Operations
//!
//! Sums, differences, products and division chains over three or more
//! operands, built only from the pairwise checked primitives. No wider
//! accumulator is used; instead the operands are reordered so that every
//! intermediate result stays as close to zero as the operands allow. With
//! that ordering an intermediate step can only overflow when the exact final
//! result overflows too, so the first failing step is reported immediately.
//!
//! Empty operand lists fail with `MissingArguments`.
//!
//! ```rust
//! use exactint::multi::{add_m, mul_m, div_m};
//!
//! // 100 + 100 alone overflows i8, but the whole sum fits.
//! assert_eq!(add_m(&[100i8, 100, -100, -50]), Ok(50));
//! // (-1) * (-1) first keeps the product at -128 instead of +128.
//! assert_eq!(mul_m(&[-1i8, -128, -1]), Ok(-128));
//! // The -1 is applied last, after -128 / 2 = -64.
//! assert_eq!(div_m(&[-128i8, -1, 2]), Ok(64));
//! ```

use exactint_core::{
    ArithError, Integer, Result,
    num::ops::checked_arithmetic::{add, div, mul, sub},
};
use smallvec::SmallVec;

/// Operand count kept inline before the reordering buffer spills to the heap.
pub const INLINE_OPERANDS: usize = 8;

type Operands<T> = SmallVec<[T; INLINE_OPERANDS]>;

#[inline]
fn sorted<T: Integer>(values: &[T]) -> Operands<T> {
    let mut operands: Operands<T> = values.iter().copied().collect();
    operands.sort_unstable();
    operands
}

#[inline]
fn fail_fast<T>(operation: &'static str, operands: usize, result: Result<T>) -> Result<T> {
    if let Err(error) = &result {
        tracing::trace!(operation, operands, %error, "multi-term evaluation stopped");
    }
    result
}

/// Sum of three values, exact whenever the true sum fits.
///
/// # Examples
///
/// ```rust
/// # use exactint::multi::add3;
/// # use exactint_core::ArithError;
///
/// assert_eq!(add3(100i8, 100, -100), Ok(100));
/// assert_eq!(add3(100i8, 27, 1), Err(ArithError::Overflow));
/// ```
#[inline]
pub fn add3<T: Integer>(a: T, b: T, c: T) -> Result<T> {
    let mut operands = [a, b, c];
    operands.sort_unstable();
    add(add(operands[0], operands[2])?, operands[1])
}

/// `a - b - c`, exact whenever the true result fits.
///
/// # Examples
///
/// ```rust
/// # use exactint::multi::sub3;
///
/// // `0 - (-128)` overflows, `0 - 1 - (-128)` does not.
/// assert_eq!(sub3(0i8, -128, 1), Ok(127));
/// ```
#[inline]
pub fn sub3<T: Integer>(a: T, b: T, c: T) -> Result<T> {
    sub(a, b)
        .and_then(|d| sub(d, c))
        .or_else(|_| sub(a, c).and_then(|d| sub(d, b)))
}

/// Product of three values, exact whenever the true product fits.
#[inline]
pub fn mul3<T: Integer>(a: T, b: T, c: T) -> Result<T> {
    mul_m(&[a, b, c])
}

/// `a / b / c` with truncation toward zero, exact whenever the true quotient
/// fits.
#[inline]
pub fn div3<T: Integer>(a: T, b: T, c: T) -> Result<T> {
    div_m(&[a, b, c])
}

/// Sum of all values.
///
/// The smallest and largest remaining operands are combined and the partial
/// sum goes back into the ordered pool. A mixed-sign pair cannot overflow,
/// and once all remaining operands share a sign every further step moves
/// away from zero, so any overflow is real.
///
/// # Examples
///
/// ```rust
/// # use exactint::multi::add_m;
/// # use exactint_core::ArithError;
///
/// assert_eq!(add_m(&[120i8, 120, -120, -120, 7]), Ok(7));
/// assert_eq!(add_m::<u8>(&[]), Err(ArithError::MissingArguments));
/// ```
pub fn add_m<T: Integer>(values: &[T]) -> Result<T> {
    if values.is_empty() {
        return Err(ArithError::MissingArguments);
    }
    let mut pool = sorted(values);
    while pool.len() > 1 {
        let (smallest, largest) = (pool[0], pool[pool.len() - 1]);
        let partial = fail_fast("add_m", values.len(), add(smallest, largest))?;
        pool.pop();
        pool.remove(0);
        let at = pool.partition_point(|&v| v < partial);
        pool.insert(at, partial);
    }
    Ok(pool[0])
}

/// The first value minus all following values.
///
/// While the running difference is non-negative the largest remaining
/// subtrahend is taken, otherwise the smallest. Either the step moves the
/// running value toward zero, or all remaining subtrahends push it the same
/// way and an overflow is real.
///
/// # Examples
///
/// ```rust
/// # use exactint::multi::sub_m;
///
/// assert_eq!(sub_m(&[0i8, -100, -100, 100, 100]), Ok(0));
/// assert_eq!(sub_m(&[5u8]), Ok(5));
/// ```
pub fn sub_m<T: Integer>(values: &[T]) -> Result<T> {
    let (&first, rest) = values
        .split_first()
        .ok_or(ArithError::MissingArguments)?;
    let pool = sorted(rest);
    let (mut lo, mut hi) = (0, pool.len());
    let mut acc = first;
    while lo < hi {
        let subtrahend = if acc >= T::zero() {
            hi -= 1;
            pool[hi]
        } else {
            lo += 1;
            pool[lo - 1]
        };
        acc = fail_fast("sub_m", values.len(), sub(acc, subtrahend))?;
    }
    Ok(acc)
}

/// Product of all values.
///
/// A zero operand makes the product zero regardless of the others. The
/// remaining operands are sorted so negative values come first, most
/// negative first, and are multiplied in pairs into positive partial
/// products. With an odd number of negatives the most negative value seeds
/// the accumulator, which keeps the running product negative and lets a
/// result of exactly the signed minimum through.
///
/// # Examples
///
/// ```rust
/// # use exactint::multi::mul_m;
/// # use exactint_core::ArithError;
///
/// assert_eq!(mul_m(&[-2i8, 4, -4, -4]), Ok(-128));
/// assert_eq!(mul_m(&[127i8, 127, 0]), Ok(0));
/// assert_eq!(mul_m(&[-2i8, -64]), Err(ArithError::Overflow));
/// ```
pub fn mul_m<T: Integer>(values: &[T]) -> Result<T> {
    if values.is_empty() {
        return Err(ArithError::MissingArguments);
    }
    if values.iter().any(|v| v.is_zero()) {
        return Ok(T::zero());
    }
    let operands = sorted(values);
    let negatives = operands.partition_point(|&v| v < T::zero());
    let (negative, positive) = operands.split_at(negatives);
    let (mut acc, pairs) = match negative.split_first() {
        Some((&seed, rest)) if negative.len() % 2 == 1 => (seed, rest),
        _ => (T::one(), negative),
    };
    for pair in pairs.chunks_exact(2) {
        let partial = fail_fast("mul_m", values.len(), mul(pair[0], pair[1]))?;
        acc = fail_fast("mul_m", values.len(), mul(acc, partial))?;
    }
    for &v in positive {
        acc = fail_fast("mul_m", values.len(), mul(acc, v))?;
    }
    Ok(acc)
}

/// The first value divided successively by all following values, truncating
/// toward zero.
///
/// Every divisor is checked for zero before any division happens, so
/// `DivisionByZero` wins over `Overflow`. Dividing by `-1` twice is the
/// identity, so `-1` divisors cancel in pairs and a leftover one is applied
/// after all other divisors; it overflows only if the quotient is still the
/// signed minimum at that point.
///
/// # Examples
///
/// ```rust
/// # use exactint::multi::div_m;
/// # use exactint_core::ArithError;
///
/// assert_eq!(div_m(&[i8::MIN, -1, -1]), Ok(i8::MIN));
/// assert_eq!(div_m(&[i8::MIN, -1]), Err(ArithError::Overflow));
/// assert_eq!(div_m(&[i8::MIN, 0, -1]), Err(ArithError::DivisionByZero));
/// ```
pub fn div_m<T: Integer>(values: &[T]) -> Result<T> {
    let (&dividend, divisors) = values
        .split_first()
        .ok_or(ArithError::MissingArguments)?;
    if divisors.iter().any(|d| d.is_zero()) {
        return Err(ArithError::DivisionByZero);
    }
    let minus_one = T::zero().wrapping_sub(&T::one());
    let mut sign_flips = 0usize;
    let mut acc = dividend;
    for &d in divisors {
        if T::SIGNED && d == minus_one {
            sign_flips += 1;
            continue;
        }
        acc = fail_fast("div_m", values.len(), div(acc, d))?;
    }
    if sign_flips % 2 == 1 {
        acc = fail_fast("div_m", values.len(), div(acc, minus_one))?;
    }
    Ok(acc)
}
