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

//! # Exactint Core
//!
//! Overflow-checked integer primitives for every fixed-width integer type.
//! Each operation either returns the exact mathematical result or reports
//! why it cannot: the value does not fit, the divisor is zero, a float is
//! NaN or cannot be represented exactly, or a shift count is negative.
//! Nothing ever wraps or truncates silently.
//!
//! ## Modules
//!
//! - `error`: The `ArithError` taxonomy and the `Result` alias.
//! - `num`: The `Integer` trait, type-range introspection (`range`,
//!   `bit_width`), checked primitives (`add`, `sub`, `mul`, `div`, `rem`,
//!   `negate`, `abs`, `shift`) and lossless conversions (`i_to_i`, `i_to_f`,
//!   `f_to_i`).
//! - `utils`: Wrap-free inclusive range iteration (`iter`, `inc`, `dec`,
//!   `step`, `inc_step`, `dec_step`).
//!
//! ## Example
//!
//! ```rust
//! use exactint_core::{error::ArithError, num::ops::checked_arithmetic::{add, div}};
//!
//! assert_eq!(add(124i8, 3), Ok(127));
//! assert_eq!(add(125i8, 3), Err(ArithError::Overflow));
//! assert_eq!(div(i8::MIN, -1), Err(ArithError::Overflow));
//! ```
//!
//! All functions are pure and stateless, so they can be called from any
//! number of threads without synchronization.

pub mod error;
pub mod num;
pub mod utils;

pub use error::{ArithError, Result};
pub use num::integer::Integer;
