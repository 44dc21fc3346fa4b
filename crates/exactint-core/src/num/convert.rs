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

//! # Checked Conversions
//!
//! Lossless conversion between integer types of any width and signedness,
//! and between integers and floats. Every conversion is a round trip: the
//! value is converted, converted back, and accepted only if nothing changed.

use crate::{
    error::{ArithError, Result},
    num::integer::Integer,
};
use num_traits::{AsPrimitive, Float, NumCast};

/// Largest accepted distance between a float and its truncated integer after
/// converting the integer back to the float type.
///
/// The integer part of an in-range float converts back exactly, so in
/// practice the distance is the discarded fraction and stays below `1.0`
/// for every float/integer pair; the unit test
/// `test_truncation_distance_below_one_for_all_pairs` re-checks this.
pub const FLOAT_TRUNCATION_TOLERANCE: f64 = 2.0;

/// Converts an integer to another integer type.
///
/// Fails with [`ArithError::Overflow`] if the value does not fit. The bit
/// round trip catches values that are too large or too small for the target
/// width; the sign comparison catches reinterpretations such as `-1i8`
/// becoming `65535u16`, whose bits survive the round trip.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::num::convert::i_to_i;
/// # use exactint_core::error::ArithError;
///
/// assert_eq!(i_to_i::<u8, i32>(255), Ok(255u8));
/// assert_eq!(i_to_i::<u8, i32>(256), Err(ArithError::Overflow));
/// assert_eq!(i_to_i::<u16, i8>(-1), Err(ArithError::Overflow));
/// assert_eq!(i_to_i::<i8, u64>(127), Ok(127i8));
/// ```
#[inline]
pub fn i_to_i<To, Src>(v: Src) -> Result<To>
where
    Src: Integer + AsPrimitive<To>,
    To: Integer + AsPrimitive<Src>,
{
    let converted: To = v.as_();
    let back: Src = converted.as_();
    if back == v && (converted < To::zero()) == (v < Src::zero()) {
        Ok(converted)
    } else {
        Err(ArithError::Overflow)
    }
}

/// Converts an integer to a float, failing with
/// [`ArithError::PrecisionLoss`] if the float cannot hold the value exactly.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::num::convert::i_to_f;
/// # use exactint_core::error::ArithError;
///
/// assert_eq!(i_to_f::<f32, i32>(16_777_216), Ok(16_777_216.0));
/// assert_eq!(i_to_f::<f32, i32>(16_777_217), Err(ArithError::PrecisionLoss));
/// assert_eq!(i_to_f::<f64, i64>(i64::MAX), Err(ArithError::PrecisionLoss));
/// ```
#[inline]
pub fn i_to_f<F, I>(v: I) -> Result<F>
where
    I: Integer + AsPrimitive<F>,
    F: Float + 'static,
{
    let converted: F = v.as_();
    // `NumCast` refuses out-of-range floats instead of saturating, so a value
    // rounded up past the integer maximum cannot masquerade as a round trip.
    match <I as NumCast>::from(converted) {
        Some(back) if back == v => Ok(converted),
        _ => Err(ArithError::PrecisionLoss),
    }
}

/// Converts a float to an integer by truncating toward zero.
///
/// NaN fails with [`ArithError::NaN`]; infinities and finite values outside
/// the integer range fail with [`ArithError::Overflow`]. The truncated value
/// is converted back to the float type and must lie within
/// [`FLOAT_TRUNCATION_TOLERANCE`] of the input, otherwise
/// [`ArithError::PrecisionLoss`] is returned.
///
/// # Examples
///
/// ```rust
/// # use exactint_core::num::convert::f_to_i;
/// # use exactint_core::error::ArithError;
///
/// assert_eq!(f_to_i::<i8, f64>(-3.7), Ok(-3));
/// assert_eq!(f_to_i::<u8, f32>(255.9), Ok(255));
/// assert_eq!(f_to_i::<u8, f32>(256.0), Err(ArithError::Overflow));
/// assert_eq!(f_to_i::<i32, f64>(f64::NAN), Err(ArithError::NaN));
/// ```
#[inline]
pub fn f_to_i<I, F>(f: F) -> Result<I>
where
    I: Integer + AsPrimitive<F>,
    F: Float + 'static,
{
    if f.is_nan() {
        return Err(ArithError::NaN);
    }
    let value = <I as NumCast>::from(f.trunc()).ok_or(ArithError::Overflow)?;
    let back: F = value.as_();
    match (back - f).abs().to_f64() {
        Some(distance) if distance < FLOAT_TRUNCATION_TOLERANCE => Ok(value),
        _ => Err(ArithError::PrecisionLoss),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_i_to_i_exhaustive_i16_to_i8_and_u8() {
        for v in i16::MIN..=i16::MAX {
            let as_i8 = i8::try_from(v).map_err(|_| ArithError::Overflow);
            let as_u8 = u8::try_from(v).map_err(|_| ArithError::Overflow);
            assert_eq!(i_to_i::<i8, i16>(v), as_i8, "i16 {v} -> i8");
            assert_eq!(i_to_i::<u8, i16>(v), as_u8, "i16 {v} -> u8");
        }
    }

    #[test]
    fn test_i_to_i_widening_signed_to_unsigned() {
        for v in i8::MIN..=i8::MAX {
            let expected = u64::try_from(v).map_err(|_| ArithError::Overflow);
            assert_eq!(i_to_i::<u64, i8>(v), expected);
            assert_eq!(i_to_i::<i64, i8>(v), Ok(v as i64));
        }
    }

    #[test]
    fn test_i_to_i_unsigned_to_signed_same_width() {
        assert_eq!(i_to_i::<i32, u32>(u32::MAX), Err(ArithError::Overflow));
        assert_eq!(i_to_i::<i32, u32>(i32::MAX as u32), Ok(i32::MAX));
        assert_eq!(i_to_i::<i128, u128>(1u128 << 127), Err(ArithError::Overflow));
        assert_eq!(i_to_i::<u128, i128>(i128::MAX), Ok(i128::MAX as u128));
    }

    #[test]
    fn test_i_to_f_small_types_are_exact() {
        for v in i16::MIN..=i16::MAX {
            assert_eq!(i_to_f::<f32, i16>(v), Ok(v as f32));
        }
        for v in u8::MIN..=u8::MAX {
            assert_eq!(i_to_f::<f64, u8>(v), Ok(v as f64));
        }
    }

    #[test]
    fn test_i_to_f_precision_boundaries() {
        let exact = 1i64 << 53;
        assert_eq!(i_to_f::<f64, i64>(exact), Ok(exact as f64));
        assert_eq!(
            i_to_f::<f64, i64>(exact + 1),
            Err(ArithError::PrecisionLoss)
        );
        assert_eq!(
            i_to_f::<f32, u64>(u64::MAX),
            Err(ArithError::PrecisionLoss)
        );
        assert_eq!(i_to_f::<f32, u32>(1 << 31), Ok(2_147_483_648.0));
    }

    #[test]
    fn test_f_to_i_special_values() {
        assert_eq!(f_to_i::<i64, f64>(f64::NAN), Err(ArithError::NaN));
        assert_eq!(f_to_i::<i64, f64>(f64::INFINITY), Err(ArithError::Overflow));
        assert_eq!(
            f_to_i::<i64, f64>(f64::NEG_INFINITY),
            Err(ArithError::Overflow)
        );
        assert_eq!(f_to_i::<u8, f64>(-0.9), Ok(0));
        assert_eq!(f_to_i::<u8, f64>(-1.0), Err(ArithError::Overflow));
        assert_eq!(f_to_i::<i8, f32>(-128.9), Ok(-128));
        assert_eq!(f_to_i::<i8, f32>(127.9), Ok(127));
        assert_eq!(f_to_i::<i8, f32>(128.0), Err(ArithError::Overflow));
    }

    fn assert_truncation_distance<I, F>(rng: &mut ChaCha8Rng, lo: f64, hi: f64)
    where
        I: Integer + AsPrimitive<F>,
        F: Float + 'static,
    {
        for _ in 0..2_000 {
            let raw = rng.random_range(lo..hi);
            let Some(f) = <F as NumCast>::from(raw) else {
                continue;
            };
            if let Ok(v) = f_to_i::<I, F>(f) {
                let back: F = v.as_();
                let distance = (back - f).abs().to_f64().unwrap_or(f64::INFINITY);
                assert!(distance < 1.0, "distance {distance} for {raw}");
            }
        }
    }

    #[test]
    fn test_truncation_distance_below_one_for_all_pairs() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_truncation_distance::<i8, f32>(&mut rng, -200.0, 200.0);
        assert_truncation_distance::<u8, f32>(&mut rng, -10.0, 300.0);
        assert_truncation_distance::<i16, f32>(&mut rng, -40_000.0, 40_000.0);
        assert_truncation_distance::<i32, f32>(&mut rng, -3e9, 3e9);
        assert_truncation_distance::<u32, f32>(&mut rng, -1e3, 5e9);
        assert_truncation_distance::<i64, f32>(&mut rng, -1e19, 1e19);
        assert_truncation_distance::<u64, f32>(&mut rng, 0.0, 2e19);
        assert_truncation_distance::<i32, f64>(&mut rng, -3e9, 3e9);
        assert_truncation_distance::<i64, f64>(&mut rng, -1e19, 1e19);
        assert_truncation_distance::<u64, f64>(&mut rng, -1e3, 2e19);
        assert_truncation_distance::<i128, f64>(&mut rng, -1e38, 1e38);
    }
}
