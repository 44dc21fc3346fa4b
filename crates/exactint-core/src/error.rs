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

//! # Arithmetic Errors
//!
//! The fixed failure taxonomy shared by every checked operation in the
//! workspace. All outcomes are pure functions of the inputs, so an error is a
//! plain `Copy` value that can be compared, hashed and returned through `?`.

/// The reason a checked operation could not produce an exact result.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithError {
    /// The exact result lies outside the range of the result type.
    #[error("integer overflow")]
    Overflow,
    /// The divisor of a division or remainder was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A floating-point input was NaN.
    #[error("floating-point value is NaN")]
    NaN,
    /// The value is in range but has no exact representation in the target type.
    #[error("conversion loses precision")]
    PrecisionLoss,
    /// A variadic operation was called without operands.
    #[error("missing arguments")]
    MissingArguments,
    /// A shift was requested with a negative bit count.
    #[error("negative shift count")]
    NegativeShift,
}

/// Result type returned by every checked operation.
pub type Result<T> = core::result::Result<T, ArithError>;

#[cfg(test)]
mod tests {
    use super::ArithError;

    #[test]
    fn test_display_messages() {
        assert_eq!(ArithError::Overflow.to_string(), "integer overflow");
        assert_eq!(ArithError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(ArithError::NaN.to_string(), "floating-point value is NaN");
        assert_eq!(
            ArithError::PrecisionLoss.to_string(),
            "conversion loses precision"
        );
        assert_eq!(ArithError::MissingArguments.to_string(), "missing arguments");
        assert_eq!(ArithError::NegativeShift.to_string(), "negative shift count");
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: E) {}
        assert_error(ArithError::Overflow);
    }
}
