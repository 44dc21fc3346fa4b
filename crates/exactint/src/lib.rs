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

//! # Exactint
//!
//! Integer expressions over several operands that fail only when the exact
//! mathematical result does not fit the integer type. An intermediate that
//! overflows is never reported on its own: operands are reordered, groupings
//! are retried, and composite divisions fall back to an exact numerator one
//! bit wider than the operand type.
//!
//! ## Modules
//!
//! - `multi`: Three-operand and variadic sums, differences, products and
//!   division chains.
//! - `composite`: Fused `(a + b) / c` style expressions and their remainder
//!   siblings.
//! - `pow`: Checked powers.
//!
//! The pairwise primitives, conversions, range introspection and iteration
//! live in [`exactint_core`] and are re-exported here.
//!
//! ## Example
//!
//! ```rust
//! use exactint::{ArithError, composite::add_div, multi::add_m};
//!
//! assert_eq!(add_div(100i8, 100, 3), Ok(66));
//! assert_eq!(add_m(&[120i8, 120, -120]), Ok(120));
//! assert_eq!(add_m::<i8>(&[]), Err(ArithError::MissingArguments));
//! ```

pub mod composite;
pub mod multi;
pub mod pow;

pub use exactint_core::{
    ArithError, Integer, Result,
    num::{
        convert::{FLOAT_TRUNCATION_TOLERANCE, f_to_i, i_to_f, i_to_i},
        ops::checked_arithmetic::{SafeArith, abs, add, div, mul, negate, rem, shift, sub},
        range::{bit_width, is_max, is_min, max_value, min_value, range},
    },
    utils::iter::{Direction, RangeIter, StepIter, dec, dec_step, inc, inc_step, iter, step},
};
