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

//! # Saturating Code Point Conversions
//!
//! Total integer↔`char` conversions. Negative inputs substitute the
//! minimum scalar value `'\0'`, inputs above U+10FFFF substitute
//! `char::MAX`, and surrogate-range inputs (which have no meaningful
//! nearest in-range neighbor) substitute the Unicode replacement
//! character U+FFFD. `char` sources clamp to the target maximum;
//! underflow is impossible.

use crate::checked::codepoint::MAX_CODE_POINT;
use crate::saturating::SaturatingNarrowFrom;

#[inline]
fn saturate_code_point(scalar: u64) -> char {
    if scalar > u64::from(MAX_CODE_POINT) {
        return char::MAX;
    }
    char::from_u32(scalar as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
}

macro_rules! impl_saturating_signed_to_char {
    ($($src:ty),+ $(,)?) => {$(
        impl SaturatingNarrowFrom<$src> for char {
            #[inline]
            fn saturating_narrow_from(value: $src) -> Self {
                if value < 0 {
                    return '\0';
                }
                saturate_code_point(value as u64)
            }
        }
    )+};
}

impl_saturating_signed_to_char!(i8, i16, i32, i64, isize);

macro_rules! impl_saturating_unsigned_to_char {
    ($($src:ty),+ $(,)?) => {$(
        impl SaturatingNarrowFrom<$src> for char {
            #[inline]
            fn saturating_narrow_from(value: $src) -> Self {
                saturate_code_point(value as u64)
            }
        }
    )+};
}

impl_saturating_unsigned_to_char!(u16, u32, u64, usize);

macro_rules! impl_saturating_char_to_int {
    ($($dst:ty),+ $(,)?) => {$(
        impl SaturatingNarrowFrom<char> for $dst {
            #[inline]
            fn saturating_narrow_from(value: char) -> Self {
                let scalar = value as u32;
                if scalar > <$dst>::MAX as u32 {
                    <$dst>::MAX
                } else {
                    scalar as $dst
                }
            }
        }
    )+};
}

impl_saturating_char_to_int!(i8, i16, u8, u16);
