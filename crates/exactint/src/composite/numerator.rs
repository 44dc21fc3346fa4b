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

//! Exact numerator of a short sum of `T` operands.
//!
//! The sum or difference of a few `T` values needs at most one bit more than
//! `T` itself. `Numerator` keeps it as a sign, a magnitude in the unsigned
//! twin `U`, and a flag for the extra bit worth `2^n`. Division splits an
//! oversized magnitude `2^n + low` into two representable dividends, the
//! extremal value `U::MAX` and the excess `low + 1`, divides both, and
//! recombines quotients and remainders the way long division carries.

use exactint_core::{ArithError, Integer, Result, num::ops::checked_arithmetic::add};
use num_traits::{Bounded, One, WrappingAdd, WrappingSub, Zero};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Numerator<T: Integer> {
    negative: bool,
    /// Set when the magnitude carries the bit worth `2^n`.
    high: bool,
    low: T::Unsigned,
}

impl<T: Integer> Numerator<T> {
    /// Starts the sum with a single operand.
    #[inline]
    pub(crate) fn new(v: T) -> Self {
        Self {
            negative: v < T::zero(),
            high: false,
            low: v.magnitude(),
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        !self.high && self.low.is_zero()
    }

    /// Adds `v` to the exact value.
    #[inline]
    pub(crate) fn plus(self, v: T) -> Result<Self> {
        self.accumulate(v < T::zero(), v.magnitude())
    }

    /// Subtracts `v` from the exact value. `-v` is never formed, so the
    /// signed minimum is subtracted like any other value.
    #[inline]
    pub(crate) fn minus(self, v: T) -> Result<Self> {
        self.accumulate(v > T::zero(), v.magnitude())
    }

    fn accumulate(self, negative: bool, magnitude: T::Unsigned) -> Result<Self> {
        if magnitude.is_zero() {
            return Ok(self);
        }
        if self.is_zero() {
            return Ok(Self {
                negative,
                high: false,
                low: magnitude,
            });
        }
        if self.negative == negative {
            let low = self.low.wrapping_add(&magnitude);
            let carry = low < self.low;
            if carry && self.high {
                // Beyond n + 1 bits; no composite expression gets here.
                return Err(ArithError::Overflow);
            }
            return Ok(Self {
                negative,
                high: self.high || carry,
                low,
            });
        }
        if self.high || self.low >= magnitude {
            let borrow = self.low < magnitude;
            let result = Self {
                negative: self.negative,
                high: self.high && !borrow,
                low: self.low.wrapping_sub(&magnitude),
            };
            return Ok(result.normalized());
        }
        Ok(Self {
            negative,
            high: false,
            low: magnitude.wrapping_sub(&self.low),
        })
    }

    #[inline]
    fn normalized(self) -> Self {
        if self.is_zero() {
            Self {
                negative: false,
                ..self
            }
        } else {
            self
        }
    }

    /// The exact value as `T`, if it fits.
    #[inline]
    pub(crate) fn value(self) -> Result<T> {
        if self.high {
            return Err(ArithError::Overflow);
        }
        T::from_magnitude(self.negative, self.low)
    }

    /// Truncated quotient `self / divisor`.
    pub(crate) fn quotient(self, divisor: T) -> Result<T> {
        if divisor.is_zero() {
            return Err(ArithError::DivisionByZero);
        }
        let quotient = self.quotient_magnitude(divisor.magnitude())?;
        T::from_magnitude(self.negative != (divisor < T::zero()), quotient)
    }

    /// Remainder of the truncated division `self / divisor`; it takes the
    /// sign of the numerator.
    pub(crate) fn remainder(self, divisor: T) -> Result<T> {
        if divisor.is_zero() {
            return Err(ArithError::DivisionByZero);
        }
        let remainder = self.remainder_magnitude(divisor.magnitude());
        T::from_magnitude(self.negative, remainder)
    }

    fn quotient_magnitude(self, d: T::Unsigned) -> Result<T::Unsigned> {
        if !self.high {
            return Ok(self.low / d);
        }
        let extremal = T::Unsigned::max_value();
        let (ext_q, ext_r) = (extremal / d, extremal % d);
        let (low_q, low_r) = (self.low / d, self.low % d);
        // The leftover `ext_r + 1 + low_r` is below `2d`, so it carries at
        // most one more unit into the quotient.
        let gap = d - T::Unsigned::one() - low_r;
        let carry = if ext_r >= gap {
            T::Unsigned::one()
        } else {
            T::Unsigned::zero()
        };
        add(add(ext_q, low_q)?, carry)
    }

    fn remainder_magnitude(self, d: T::Unsigned) -> T::Unsigned {
        if !self.high {
            return self.low % d;
        }
        let ext_r = T::Unsigned::max_value() % d;
        let low_r = self.low % d;
        let gap = d - T::Unsigned::one() - low_r;
        if ext_r >= gap {
            ext_r - gap
        } else {
            ext_r + T::Unsigned::one() + low_r
        }
    }
}
