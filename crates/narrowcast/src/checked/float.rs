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

//! # Float Boundary Rules
//!
//! [`TruncFrom`] and [`RoundFrom`] implementations for `f32`/`f64` to
//! every supported integer type, plus the `f64`→`f32` narrowing rule.
//!
//! The conversion order is fixed: NaN rejection, infinity rejection,
//! policy application (truncate or round half away from zero), then a
//! range comparison of the prepared value against the target bounds
//! rendered in `f64`. `f32` sources are promoted to `f64` before any
//! comparison, so a target bound that is not exactly representable in
//! `f32` can never misclassify. The comparison happens in float space
//! before the cast: floats beyond 2^53 cannot represent every integer,
//! and casting first would silently saturate instead of classifying.

use crate::checked::{NarrowFrom, RoundFrom, TruncFrom, WidenFrom};
use crate::error::{ConvertError, ConvertKind};
use num_traits::Float;

/// Classifies a special float value, if any. NaN takes precedence over
/// infinity; both take precedence over any range consideration.
#[inline]
pub(crate) fn special_kind<F: Float>(value: F) -> Option<ConvertKind> {
    if value.is_nan() {
        Some(ConvertKind::Nan)
    } else if value.is_infinite() {
        Some(ConvertKind::Infinity)
    } else {
        None
    }
}

/// Rounds to the nearest integral value, ties away from zero.
#[inline]
pub(crate) fn round_half_away_from_zero<F: Float>(value: F) -> F {
    value.round()
}

/// Classifies a prepared (finite) value against target bounds rendered
/// in `f64`. The underflow check runs first, keeping the sign check
/// ahead of the magnitude check for unsigned targets; the intervals are
/// disjoint, so the order never changes the outcome.
#[inline]
pub(crate) fn classify_range(prepared: f64, min: f64, max: f64) -> Option<ConvertKind> {
    if prepared < min {
        Some(ConvertKind::Underflow)
    } else if prepared > max {
        Some(ConvertKind::Overflow)
    } else {
        None
    }
}

macro_rules! impl_float_to_int {
    ($($src:ty => $($dst:ty),+;)+) => {$($(
        impl TruncFrom<$src> for $dst {
            #[inline]
            fn trunc_from(value: $src) -> Result<Self, ConvertError> {
                if let Some(kind) = special_kind(value) {
                    return Err(ConvertError::new::<$src, $dst>(value, kind));
                }
                let prepared = f64::from(value);
                match classify_range(prepared, <$dst>::MIN as f64, <$dst>::MAX as f64) {
                    Some(kind) => Err(ConvertError::new::<$src, $dst>(value, kind)),
                    None => Ok(prepared as $dst),
                }
            }
        }

        impl RoundFrom<$src> for $dst {
            #[inline]
            fn round_from(value: $src) -> Result<Self, ConvertError> {
                if let Some(kind) = special_kind(value) {
                    return Err(ConvertError::new::<$src, $dst>(value, kind));
                }
                let prepared = round_half_away_from_zero(f64::from(value));
                match classify_range(prepared, <$dst>::MIN as f64, <$dst>::MAX as f64) {
                    Some(kind) => Err(ConvertError::new::<$src, $dst>(value, kind)),
                    None => Ok(prepared as $dst),
                }
            }
        }
    )+)+};
}

impl_float_to_int! {
    f64 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize;
    f32 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize;
}

/// The `f64`→`f32` narrowing rule: NaN and ±∞ are propagated, not
/// rejected, because float-to-float conversion preserves IEEE
/// special-value semantics. A finite value whose magnitude exceeds the
/// largest finite `f32` fails as overflow; in-range values accept
/// ordinary precision loss. Negative zero survives with its sign bit.
///
/// # Examples
///
/// ```rust
/// use narrowcast::checked::NarrowFrom;
///
/// assert_eq!(f32::narrow_from(1.5f64), Ok(1.5f32));
/// assert!(f32::narrow_from(1e39f64).unwrap_err().is_overflow());
/// assert!(f32::narrow_from(f64::NAN).unwrap().is_nan());
/// ```
impl NarrowFrom<f64> for f32 {
    #[inline]
    fn narrow_from(value: f64) -> Result<Self, ConvertError> {
        if value.is_nan() || value.is_infinite() {
            return Ok(value as f32);
        }
        if value > f64::from(f32::MAX) || value < f64::from(f32::MIN) {
            return Err(ConvertError::new::<f64, f32>(value, ConvertKind::Overflow));
        }
        Ok(value as f32)
    }
}

impl WidenFrom<f32> for f64 {
    #[inline]
    fn widen_from(value: f32) -> Self {
        f64::from(value)
    }
}
