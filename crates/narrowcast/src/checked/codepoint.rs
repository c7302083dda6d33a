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

//! # Code Point Conversions
//!
//! Integer↔`char` conversions. An integer is a valid Unicode scalar
//! value iff it lies in `0..=0x10FFFF` and outside the surrogate range
//! `0xD800..=0xDFFF`. Signed sources check sign first (underflow before
//! any validity consideration); sources whose non-negative range cannot
//! reach the surrogate gap skip the validity predicate. A `char` is a
//! valid scalar value by construction, so conversions out of `char`
//! never re-validate it and fail only when the target type cannot hold
//! the scalar.

use crate::checked::{NarrowFrom, WidenFrom};
use crate::error::{ConvertError, ConvertKind};

/// The maximum valid Unicode code point.
pub(crate) const MAX_CODE_POINT: u32 = 0x10FFFF;

macro_rules! impl_signed_to_char {
    ($($src:ty),+ $(,)?) => {$(
        impl NarrowFrom<$src> for char {
            #[inline]
            fn narrow_from(value: $src) -> Result<Self, ConvertError> {
                if value < 0 {
                    return Err(ConvertError::new::<$src, char>(value, ConvertKind::Underflow));
                }
                if value as u64 > MAX_CODE_POINT as u64 {
                    return Err(ConvertError::new::<$src, char>(
                        value,
                        ConvertKind::InvalidCodePoint,
                    ));
                }
                char::from_u32(value as u32).ok_or_else(|| {
                    ConvertError::new::<$src, char>(value, ConvertKind::InvalidCodePoint)
                })
            }
        }
    )+};
}

impl_signed_to_char!(i32, i64, isize);

// Non-negative i8/i16 values top out at 32767, below the surrogate
// range, so only the sign check applies.
macro_rules! impl_small_signed_to_char {
    ($($src:ty),+ $(,)?) => {$(
        impl NarrowFrom<$src> for char {
            #[inline]
            fn narrow_from(value: $src) -> Result<Self, ConvertError> {
                if value < 0 {
                    return Err(ConvertError::new::<$src, char>(value, ConvertKind::Underflow));
                }
                char::from_u32(value as u32).ok_or_else(|| {
                    ConvertError::new::<$src, char>(value, ConvertKind::InvalidCodePoint)
                })
            }
        }
    )+};
}

impl_small_signed_to_char!(i8, i16);

macro_rules! impl_unsigned_to_char {
    ($($src:ty),+ $(,)?) => {$(
        impl NarrowFrom<$src> for char {
            #[inline]
            fn narrow_from(value: $src) -> Result<Self, ConvertError> {
                if value as u64 > MAX_CODE_POINT as u64 {
                    return Err(ConvertError::new::<$src, char>(
                        value,
                        ConvertKind::InvalidCodePoint,
                    ));
                }
                char::from_u32(value as u32).ok_or_else(|| {
                    ConvertError::new::<$src, char>(value, ConvertKind::InvalidCodePoint)
                })
            }
        }
    )+};
}

impl_unsigned_to_char!(u16, u32, u64, usize);

// Every u8 value is a valid scalar value.
impl WidenFrom<u8> for char {
    #[inline]
    fn widen_from(value: u8) -> Self {
        char::from(value)
    }
}

// Every scalar value fits these integer types.
macro_rules! impl_char_widen {
    ($($dst:ty),+ $(,)?) => {$(
        impl WidenFrom<char> for $dst {
            #[inline]
            fn widen_from(value: char) -> Self {
                value as u32 as $dst
            }
        }
    )+};
}

impl_char_widen!(i32, i64, isize, u32, u64, usize);

macro_rules! impl_char_narrow {
    ($($dst:ty),+ $(,)?) => {$(
        impl NarrowFrom<char> for $dst {
            #[inline]
            fn narrow_from(value: char) -> Result<Self, ConvertError> {
                let scalar = value as u32;
                if scalar > <$dst>::MAX as u32 {
                    return Err(ConvertError::new::<char, $dst>(value, ConvertKind::Overflow));
                }
                Ok(scalar as $dst)
            }
        }
    )+};
}

impl_char_narrow!(i8, i16, u8, u16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_values_convert() {
        assert_eq!(char::narrow_from(0i64), Ok('\0'));
        assert_eq!(char::narrow_from(65i64), Ok('A'));
        assert_eq!(char::narrow_from(0x4E2Di32), Ok('中'));
        assert_eq!(char::narrow_from(0x1F600i64), Ok('😀'));
        assert_eq!(char::narrow_from(0x10FFFFi64), Ok('\u{10FFFF}'));
        assert_eq!(char::narrow_from(0x10FFFFu32), Ok('\u{10FFFF}'));
    }

    #[test]
    fn test_surrogate_range_is_excluded() {
        for src in [0xD800i64, 0xDBFF, 0xDFFF] {
            let err = char::narrow_from(src).unwrap_err();
            assert!(err.is_invalid_code_point(), "expected rejection for {src:#X}");
        }
        // The immediately adjacent code points convert.
        assert_eq!(char::narrow_from(0xD7FFi64), Ok('\u{D7FF}'));
        assert_eq!(char::narrow_from(0xE000i64), Ok('\u{E000}'));

        // The same gap applies to u16 sources, whose whole range is
        // otherwise valid.
        assert!(char::narrow_from(0xD800u16).unwrap_err().is_invalid_code_point());
        assert_eq!(char::narrow_from(0xD7FFu16), Ok('\u{D7FF}'));
        assert_eq!(char::narrow_from(0xFFFFu16), Ok('\u{FFFF}'));
    }

    #[test]
    fn test_above_max_code_point() {
        assert!(char::narrow_from(0x110000i32).unwrap_err().is_invalid_code_point());
        assert!(char::narrow_from(0x110000u32).unwrap_err().is_invalid_code_point());
        assert!(char::narrow_from(u64::MAX).unwrap_err().is_invalid_code_point());
        assert!(char::narrow_from(i64::MAX).unwrap_err().is_invalid_code_point());
    }

    #[test]
    fn test_negative_values_underflow_before_validity() {
        assert!(char::narrow_from(-1i64).unwrap_err().is_underflow());
        assert!(char::narrow_from(-1i8).unwrap_err().is_underflow());
        assert!(char::narrow_from(i32::MIN).unwrap_err().is_underflow());
    }

    #[test]
    fn test_small_signed_sources_only_check_sign() {
        assert_eq!(char::narrow_from(i8::MAX), Ok('\u{7F}'));
        assert_eq!(char::narrow_from(i16::MAX), Ok('\u{7FFF}'));
    }

    #[test]
    fn test_u8_widens() {
        assert_eq!(char::widen_from(0u8), '\0');
        assert_eq!(char::widen_from(255u8), 'ÿ');
    }

    #[test]
    fn test_char_to_integer_widening() {
        assert_eq!(u32::widen_from('\u{10FFFF}'), 0x10FFFF);
        assert_eq!(i64::widen_from('A'), 65i64);
        assert_eq!(usize::widen_from('中'), 0x4E2D);
    }

    #[test]
    fn test_char_to_small_integer_overflow() {
        assert_eq!(u8::narrow_from('A'), Ok(65u8));
        assert_eq!(u8::narrow_from('ÿ'), Ok(255u8));
        assert!(u8::narrow_from('€').unwrap_err().is_overflow());

        assert_eq!(i8::narrow_from('\u{7F}'), Ok(127i8));
        assert!(i8::narrow_from('\u{80}').unwrap_err().is_overflow());

        assert_eq!(u16::narrow_from('\u{FFFF}'), Ok(0xFFFFu16));
        assert!(u16::narrow_from('\u{10000}').unwrap_err().is_overflow());

        assert_eq!(i16::narrow_from('\u{7FFF}'), Ok(0x7FFFi16));
        assert!(i16::narrow_from('\u{8000}').unwrap_err().is_overflow());
    }
}
