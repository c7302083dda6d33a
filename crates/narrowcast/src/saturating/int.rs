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

//! # Saturating Integer Narrowing
//!
//! [`SaturatingNarrowFrom`] implementations for every checked integer
//! pair. The range comparison is the same `i128` widening used by the
//! checked family; below-range values clamp to the target minimum,
//! above-range values to the target maximum.

use crate::saturating::SaturatingNarrowFrom;

macro_rules! impl_saturating_narrow_int {
    ($($src:ty => $($dst:ty),+;)+) => {$($(
        impl SaturatingNarrowFrom<$src> for $dst {
            #[inline]
            fn saturating_narrow_from(value: $src) -> Self {
                const MIN: i128 = <$dst>::MIN as i128;
                const MAX: i128 = <$dst>::MAX as i128;
                let wide = value as i128;
                if wide < MIN {
                    <$dst>::MIN
                } else if wide > MAX {
                    <$dst>::MAX
                } else {
                    value as $dst
                }
            }
        }
    )+)+};
}

// Mirrors the checked narrowing table exactly.
impl_saturating_narrow_int! {
    // Signed to narrower signed.
    i16 => i8;
    i32 => i8, i16;
    i64 => i8, i16, i32, isize;
    isize => i8, i16, i32;
    // Signed to unsigned, any width.
    i8 => u8, u16, u32, u64, usize;
    i16 => u8, u16, u32, u64, usize;
    i32 => u8, u16, u32, u64, usize;
    i64 => u8, u16, u32, u64, usize;
    isize => u8, u16, u32, u64, usize;
    // Unsigned to narrower unsigned.
    u16 => u8;
    u32 => u8, u16;
    u64 => u8, u16, u32, usize;
    usize => u8, u16, u32;
    // Unsigned to signed.
    u8 => i8;
    u16 => i8, i16;
    u32 => i8, i16, i32, isize;
    u64 => i8, i16, i32, i64, isize;
    usize => i8, i16, i32, i64, isize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checked::NarrowFrom;
    use crate::saturating::SaturatingNarrowInto;

    #[test]
    fn test_in_range_values_pass_through() {
        assert_eq!(i8::saturating_narrow_from(100i64), 100i8);
        assert_eq!(u16::saturating_narrow_from(65535u32), u16::MAX);
        assert_eq!(i32::saturating_narrow_from(-1i64), -1i32);
    }

    #[test]
    fn test_clamps_to_extremes() {
        assert_eq!(i8::saturating_narrow_from(300i32), i8::MAX);
        assert_eq!(i8::saturating_narrow_from(-300i32), i8::MIN);
        assert_eq!(u32::saturating_narrow_from(-1i64), 0u32);
        assert_eq!(u32::saturating_narrow_from(u64::MAX), u32::MAX);
        assert_eq!(i64::saturating_narrow_from(u64::MAX), i64::MAX);
        assert_eq!(u8::saturating_narrow_from(-1i8), 0u8);
        assert_eq!(i8::saturating_narrow_from(255u8), i8::MAX);
    }

    #[test]
    fn test_agrees_with_checked_family() {
        let cases: [i64; 8] = [0, 1, -1, 127, 128, -128, -129, i64::MAX];
        for value in cases {
            let saturated = i8::saturating_narrow_from(value);
            match i8::narrow_from(value) {
                Ok(converted) => assert_eq!(saturated, converted),
                Err(err) if err.is_overflow() => assert_eq!(saturated, i8::MAX),
                Err(_) => assert_eq!(saturated, i8::MIN),
            }
        }
    }

    #[test]
    fn test_into_form_delegates() {
        let clamped: u8 = 1000i32.saturating_narrow_into();
        assert_eq!(clamped, u8::MAX);
    }
}
