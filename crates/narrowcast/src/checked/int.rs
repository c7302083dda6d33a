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

//! # Integer Narrowing
//!
//! [`NarrowFrom`] and [`WidenFrom`] implementations for every ordered
//! pair of supported integer types. The range check is a single generic
//! comparison: value and target bounds both widen losslessly to `i128`,
//! so one rule covers signed→signed, signed→unsigned, unsigned→unsigned,
//! and unsigned→signed alike. The underflow check runs first, making a
//! negative value converted to an unsigned target an underflow before
//! any magnitude consideration.
//!
//! `isize`/`usize` bounds come from the platform constants, so the
//! classification is correct on any pointer width.

use crate::checked::{NarrowFrom, WidenFrom};
use crate::error::{ConvertError, ConvertKind};

macro_rules! impl_narrow_int {
    ($($src:ty => $($dst:ty),+;)+) => {$($(
        impl NarrowFrom<$src> for $dst {
            #[inline]
            fn narrow_from(value: $src) -> Result<Self, ConvertError> {
                const MIN: i128 = <$dst>::MIN as i128;
                const MAX: i128 = <$dst>::MAX as i128;
                let wide = value as i128;
                if wide < MIN {
                    Err(ConvertError::new::<$src, $dst>(value, ConvertKind::Underflow))
                } else if wide > MAX {
                    Err(ConvertError::new::<$src, $dst>(value, ConvertKind::Overflow))
                } else {
                    Ok(value as $dst)
                }
            }
        }
    )+)+};
}

impl_narrow_int! {
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

macro_rules! impl_widen_int {
    ($($src:ty => $($dst:ty),+;)+) => {$($(
        impl WidenFrom<$src> for $dst {
            #[inline]
            fn widen_from(value: $src) -> Self {
                value as $dst
            }
        }
    )+)+};
}

// Widening within and across signedness. Pairs involving pointer-width
// types are listed only where they hold for every pointer width >= 32
// bits; the rest stay checked conversions above.
impl_widen_int! {
    i8 => i16, i32, i64, isize;
    i16 => i32, i64, isize;
    i32 => i64, isize;
    isize => i64;
    u8 => u16, u32, u64, usize, i16, i32, i64, isize;
    u16 => u32, u64, usize, i32, i64, isize;
    u32 => u64, usize, i64;
    usize => u64;
}
