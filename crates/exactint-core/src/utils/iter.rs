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

//! # Wrap-Free Range Iteration
//!
//! Inclusive integer sequences that never overflow their counter. A loop of
//! the form `while v <= end { ...; v += 1 }` never terminates when `end` is
//! the type's maximum, because `v` wraps back to the minimum. The iterators
//! here emit the final element and then stop, without ever computing a value
//! past `end`.
//!
//! ## Highlights
//!
//! - `iter`, `inc`, `dec`: unit steps, in the direction implied by the
//!   bounds, forward only, or backward only.
//! - `step`, `inc_step`, `dec_step`: positive step sizes, yielding
//!   `(index, value)` pairs. A step that would carry the counter past the
//!   type's range ends the sequence.
//! - All iterators are `FusedIterator`s with exact `size_hint`s;
//!   `RangeIter` is also a `DoubleEndedIterator`.
//!
//! ## Usage
//!
//! ```rust
//! use exactint_core::utils::iter::{iter, step};
//!
//! assert_eq!(iter(126i8, 127).collect::<Vec<_>>(), vec![126, 127]);
//! assert_eq!(iter(2u8, 0).collect::<Vec<_>>(), vec![2, 1, 0]);
//! assert_eq!(step(126i8, 127, 2).collect::<Vec<_>>(), vec![(0, 126)]);
//! ```

use crate::num::integer::Integer;
use num_traits::{ToPrimitive, WrappingSub};
use std::iter::FusedIterator;

/// Whether a sequence counts up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Values increase from the start bound to the end bound.
    Forward,
    /// Values decrease from the start bound to the end bound.
    Backward,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "Forward"),
            Self::Backward => write!(f, "Backward"),
        }
    }
}

/// Number of values in the inclusive span between `from` and `to`, minus one,
/// measured in `direction`. Computed on the unsigned bit patterns, where the
/// wrapped difference is the exact distance.
#[inline]
fn distance<T: Integer>(from: T, to: T, direction: Direction) -> T::Unsigned {
    match direction {
        Direction::Forward => to.to_bits().wrapping_sub(&from.to_bits()),
        Direction::Backward => from.to_bits().wrapping_sub(&to.to_bits()),
    }
}

#[inline]
fn exact_hint<U: Integer>(steps: U) -> (usize, Option<usize>) {
    match steps.to_usize().and_then(|n| n.checked_add(1)) {
        Some(n) => (n, Some(n)),
        None => (usize::MAX, None),
    }
}

/// An inclusive unit-step sequence between two bounds.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::utils::iter::inc;
///
/// let tail: Vec<u8> = inc(253u8, 255).collect();
/// assert_eq!(tail, vec![253, 254, 255]);
///
/// let mut it = inc(1i32, 4);
/// assert_eq!(it.next_back(), Some(4));
/// assert_eq!(it.next(), Some(1));
/// assert_eq!(it.size_hint(), (2, Some(2)));
/// ```
#[derive(Debug, Clone)]
pub struct RangeIter<T> {
    front: T,
    back: T,
    direction: Direction,
    exhausted: bool,
}

impl<T: Integer> RangeIter<T> {
    #[inline]
    fn new(begin: T, end: T, direction: Direction, exhausted: bool) -> Self {
        Self {
            front: begin,
            back: end,
            direction,
            exhausted,
        }
    }

    /// The direction the sequence moves in.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    fn toward_back(&self, v: T) -> T {
        match self.direction {
            Direction::Forward => v.wrapping_add(&T::one()),
            Direction::Backward => v.wrapping_sub(&T::one()),
        }
    }

    #[inline]
    fn toward_front(&self, v: T) -> T {
        match self.direction {
            Direction::Forward => v.wrapping_sub(&T::one()),
            Direction::Backward => v.wrapping_add(&T::one()),
        }
    }
}

impl<T: Integer> Iterator for RangeIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }
        let v = self.front;
        if v == self.back {
            self.exhausted = true;
        } else {
            // `front` has not reached `back`, so one step toward it stays in range.
            self.front = self.toward_back(v);
        }
        Some(v)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        exact_hint(distance(self.front, self.back, self.direction))
    }
}

impl<T: Integer> DoubleEndedIterator for RangeIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }
        let v = self.back;
        if v == self.front {
            self.exhausted = true;
        } else {
            self.back = self.toward_front(v);
        }
        Some(v)
    }
}

impl<T: Integer> FusedIterator for RangeIter<T> {}

// A full inclusive span of these widths always fits `usize`.
macro_rules! impl_exact_size_for {
    ($($t:ty),*) => {
        $(impl ExactSizeIterator for RangeIter<$t> {})*
    };
}

impl_exact_size_for!(i8, u8, i16, u16);

/// Iterates from `begin` to `end` inclusive, counting up or down as needed.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::utils::iter::iter;
///
/// assert_eq!(iter(-128i8, -126).collect::<Vec<_>>(), vec![-128, -127, -126]);
/// assert_eq!(iter(5u8, 5).collect::<Vec<_>>(), vec![5]);
/// ```
#[inline]
pub fn iter<T: Integer>(begin: T, end: T) -> RangeIter<T> {
    let direction = if begin <= end {
        Direction::Forward
    } else {
        Direction::Backward
    };
    RangeIter::new(begin, end, direction, false)
}

/// Iterates upward from `begin` to `end` inclusive; empty if `begin > end`.
#[inline]
pub fn inc<T: Integer>(begin: T, end: T) -> RangeIter<T> {
    RangeIter::new(begin, end, Direction::Forward, begin > end)
}

/// Iterates downward from `begin` to `end` inclusive; empty if `begin < end`.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::utils::iter::dec;
///
/// assert_eq!(dec(1u8, 0).collect::<Vec<_>>(), vec![1, 0]);
/// assert_eq!(dec(0u8, 1).count(), 0);
/// ```
#[inline]
pub fn dec<T: Integer>(begin: T, end: T) -> RangeIter<T> {
    RangeIter::new(begin, end, Direction::Backward, begin < end)
}

/// A stepped sequence yielding `(index, value)` pairs, with a zero-based
/// `index`.
///
/// The sequence ends when the next value would pass the end bound, or when
/// adding the step carries the counter out of the type's range. The latter
/// shows up as the wrapped value moving backwards relative to the previous
/// one, which cannot happen for an in-range step.
#[derive(Debug, Clone)]
pub struct StepIter<T> {
    next: Option<T>,
    end: T,
    step: T,
    direction: Direction,
    index: usize,
}

impl<T: Integer> StepIter<T> {
    #[inline]
    fn new(begin: T, end: T, step: T, direction: Direction, empty: bool) -> Self {
        assert!(
            step > T::zero(),
            "Invalid step: step must be positive to guarantee progress"
        );
        Self {
            next: if empty { None } else { Some(begin) },
            end,
            step,
            direction,
            index: 0,
        }
    }

    /// The direction the sequence moves in.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The positive step size.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    #[inline]
    fn advance(&self, v: T) -> Option<T> {
        let (candidate, wrapped, passed) = match self.direction {
            Direction::Forward => {
                let c = v.wrapping_add(&self.step);
                (c, c < v, c > self.end)
            }
            Direction::Backward => {
                let c = v.wrapping_sub(&self.step);
                (c, c > v, c < self.end)
            }
        };
        if wrapped {
            tracing::trace!(
                value = %v,
                step = %self.step,
                direction = %self.direction,
                "stepped iteration stopped at counter wraparound"
            );
            return None;
        }
        if passed { None } else { Some(candidate) }
    }
}

impl<T: Integer> Iterator for StepIter<T> {
    type Item = (usize, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let v = self.next?;
        let index = self.index;
        self.index = self.index.wrapping_add(1);
        self.next = self.advance(v);
        Some((index, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(v) => exact_hint(distance(v, self.end, self.direction) / self.step.to_bits()),
        }
    }
}

impl<T: Integer> FusedIterator for StepIter<T> {}

/// Steps from `begin` toward `end` inclusive by `step`, in the direction the
/// bounds imply. `begin` is always yielded.
///
/// # Panics
///
/// Panics if `step <= 0`.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::utils::iter::step;
///
/// let values: Vec<_> = step(0u8, 10, 4).map(|(_, v)| v).collect();
/// assert_eq!(values, vec![0, 4, 8]);
///
/// let values: Vec<_> = step(10i8, 0, 5).collect();
/// assert_eq!(values, vec![(0, 10), (1, 5), (2, 0)]);
/// ```
#[inline]
pub fn step<T: Integer>(begin: T, end: T, step: T) -> StepIter<T> {
    let direction = if begin <= end {
        Direction::Forward
    } else {
        Direction::Backward
    };
    StepIter::new(begin, end, step, direction, false)
}

/// Steps upward from `begin` to `end` inclusive; empty if `begin > end`.
///
/// # Panics
///
/// Panics if `step <= 0`.
#[inline]
pub fn inc_step<T: Integer>(begin: T, end: T, step: T) -> StepIter<T> {
    StepIter::new(begin, end, step, Direction::Forward, begin > end)
}

/// Steps downward from `begin` to `end` inclusive; empty if `begin < end`.
///
/// # Panics
///
/// Panics if `step <= 0`.
#[inline]
pub fn dec_step<T: Integer>(begin: T, end: T, step: T) -> StepIter<T> {
    StepIter::new(begin, end, step, Direction::Backward, begin < end)
}
