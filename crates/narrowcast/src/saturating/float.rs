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

//! # Saturating Float Conversions
//!
//! [`SaturatingTruncFrom`] and [`SaturatingRoundFrom`] implementations
//! for `f32`/`f64` to every supported integer type, plus `f64`→`f32`
//! clamping. These perform the identical NaN/infinity/policy/range steps
//! as the checked family, through the same helpers, and substitute
//! instead of failing: NaN becomes zero, ±∞ and out-of-range values
//! clamp to the target extremes.

use crate::checked::float::{classify_range, round_half_away_from_zero, special_kind};
use crate::error::ConvertKind;
use crate::saturating::{SaturatingNarrowFrom, SaturatingRoundFrom, SaturatingTruncFrom};

macro_rules! impl_saturating_float_to_int {
    ($($src:ty => $($dst:ty),+;)+) => {$($(
        impl SaturatingTruncFrom<$src> for $dst {
            #[inline]
            fn saturating_trunc_from(value: $src) -> Self {
                match special_kind(value) {
                    Some(ConvertKind::Nan) => 0,
                    Some(_) if value.is_sign_positive() => <$dst>::MAX,
                    Some(_) => <$dst>::MIN,
                    None => {
                        let prepared = f64::from(value);
                        match classify_range(prepared, <$dst>::MIN as f64, <$dst>::MAX as f64) {
                            Some(ConvertKind::Underflow) => <$dst>::MIN,
                            Some(_) => <$dst>::MAX,
                            None => prepared as $dst,
                        }
                    }
                }
            }
        }

        impl SaturatingRoundFrom<$src> for $dst {
            #[inline]
            fn saturating_round_from(value: $src) -> Self {
                match special_kind(value) {
                    Some(ConvertKind::Nan) => 0,
                    Some(_) if value.is_sign_positive() => <$dst>::MAX,
                    Some(_) => <$dst>::MIN,
                    None => {
                        let prepared = round_half_away_from_zero(f64::from(value));
                        match classify_range(prepared, <$dst>::MIN as f64, <$dst>::MAX as f64) {
                            Some(ConvertKind::Underflow) => <$dst>::MIN,
                            Some(_) => <$dst>::MAX,
                            None => prepared as $dst,
                        }
                    }
                }
            }
        }
    )+)+};
}

impl_saturating_float_to_int! {
    f64 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize;
    f32 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize;
}

/// `f64`→`f32` clamping: NaN and ±∞ propagate unchanged, finite values
/// beyond the largest finite `f32` clamp to ±`f32::MAX`.
impl SaturatingNarrowFrom<f64> for f32 {
    #[inline]
    fn saturating_narrow_from(value: f64) -> Self {
        if value.is_nan() || value.is_infinite() {
            return value as f32;
        }
        if value > f64::from(f32::MAX) {
            f32::MAX
        } else if value < f64::from(f32::MIN) {
            f32::MIN
        } else {
            value as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trunc_and_round_in_range() {
        assert_eq!(i32::saturating_trunc_from(3.9f64), 3);
        assert_eq!(i32::saturating_trunc_from(-3.9f64), -3);
        assert_eq!(i32::saturating_round_from(3.5f64), 4);
        assert_eq!(i32::saturating_round_from(-3.5f64), -4);
        assert_eq!(u16::saturating_round_from(2.5f32), 3);
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(i8::saturating_trunc_from(1000.0f64), i8::MAX);
        assert_eq!(i8::saturating_trunc_from(-1000.0f64), i8::MIN);
        assert_eq!(u8::saturating_round_from(-2.5f64), 0);
        assert_eq!(u32::saturating_trunc_from(1e300f64), u32::MAX);
        assert_eq!(i64::saturating_round_from(-1e300f64), i64::MIN);
    }

    #[test]
    fn test_rounding_induced_crossing_clamps() {
        assert_eq!(i32::saturating_round_from(i32::MAX as f64 + 0.5), i32::MAX);
        assert_eq!(i32::saturating_round_from(i32::MIN as f64 - 0.5), i32::MIN);
        assert_eq!(i32::saturating_trunc_from(i32::MAX as f64 + 0.5), i32::MAX);
    }

    #[test]
    fn test_specials_substitute() {
        assert_eq!(i32::saturating_trunc_from(f64::NAN), 0);
        assert_eq!(i32::saturating_round_from(f64::NAN), 0);
        assert_eq!(i32::saturating_trunc_from(f64::INFINITY), i32::MAX);
        assert_eq!(i32::saturating_trunc_from(f64::NEG_INFINITY), i32::MIN);
        assert_eq!(u64::saturating_round_from(f32::NEG_INFINITY), 0);
        assert_eq!(u64::saturating_round_from(f32::INFINITY), u64::MAX);
    }

    #[test]
    fn test_f64_to_f32_clamps_finite_overflow() {
        assert_eq!(f32::saturating_narrow_from(1e39f64), f32::MAX);
        assert_eq!(f32::saturating_narrow_from(-1e39f64), f32::MIN);
        assert_eq!(f32::saturating_narrow_from(1.5f64), 1.5f32);
    }

    #[test]
    fn test_agrees_with_checked_family_on_seeded_sweep() {
        use crate::checked::RoundFrom;
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..1024 {
            let value: f64 = rng.random_range(-1.0e12..1.0e12);
            let saturated = i32::saturating_round_from(value);
            match i32::round_from(value) {
                Ok(converted) => assert_eq!(saturated, converted),
                Err(err) if err.is_overflow() => assert_eq!(saturated, i32::MAX),
                Err(err) if err.is_underflow() => assert_eq!(saturated, i32::MIN),
                Err(err) => panic!("unexpected failure kind: {err}"),
            }
        }
    }

    #[test]
    fn test_f64_to_f32_propagates_specials() {
        assert!(f32::saturating_narrow_from(f64::NAN).is_nan());
        assert_eq!(f32::saturating_narrow_from(f64::INFINITY), f32::INFINITY);
        assert_eq!(
            f32::saturating_narrow_from(f64::NEG_INFINITY),
            f32::NEG_INFINITY
        );
    }
}
