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

//! # Panicking Conversions
//!
//! Thin wrappers over the checked family that panic with the structured
//! conversion error on failure. Intended only for call sites where the
//! input is a compile-time-known-safe constant; everywhere else, handle
//! the `Result` from the checked family instead.

use crate::checked::{NarrowFrom, RoundFrom, TruncFrom};

/// Converts with [`NarrowFrom`], panicking on failure.
///
/// # Panics
///
/// Panics with the rendered [`ConvertError`](crate::error::ConvertError)
/// if the value is not representable in `Dst`.
///
/// # Examples
///
/// ```rust
/// use narrowcast::must::must_narrow;
///
/// let port: u16 = must_narrow(8080i64);
/// assert_eq!(port, 8080);
/// ```
#[inline]
#[track_caller]
pub fn must_narrow<Src, Dst>(value: Src) -> Dst
where
    Dst: NarrowFrom<Src>,
{
    match Dst::narrow_from(value) {
        Ok(converted) => converted,
        Err(error) => panic!("{error}"),
    }
}

/// Converts with [`TruncFrom`], panicking on failure.
///
/// # Panics
///
/// Panics with the rendered [`ConvertError`](crate::error::ConvertError)
/// if the value is NaN, infinite, or out of range.
///
/// # Examples
///
/// ```rust
/// use narrowcast::must::must_trunc;
///
/// let whole: i64 = must_trunc(3.5f64);
/// assert_eq!(whole, 3);
/// ```
#[inline]
#[track_caller]
pub fn must_trunc<Src, Dst>(value: Src) -> Dst
where
    Dst: TruncFrom<Src>,
{
    match Dst::trunc_from(value) {
        Ok(converted) => converted,
        Err(error) => panic!("{error}"),
    }
}

/// Converts with [`RoundFrom`], panicking on failure.
///
/// # Panics
///
/// Panics with the rendered [`ConvertError`](crate::error::ConvertError)
/// if the value is NaN, infinite, or out of range after rounding.
///
/// # Examples
///
/// ```rust
/// use narrowcast::must::must_round;
///
/// let nearest: i64 = must_round(3.5f64);
/// assert_eq!(nearest, 4);
/// ```
#[inline]
#[track_caller]
pub fn must_round<Src, Dst>(value: Src) -> Dst
where
    Dst: RoundFrom<Src>,
{
    match Dst::round_from(value) {
        Ok(converted) => converted,
        Err(error) => panic!("{error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_narrow_passes_through() {
        let narrowed: u8 = must_narrow(200i64);
        assert_eq!(narrowed, 200u8);
        let code_point: char = must_narrow(0x1F600i64);
        assert_eq!(code_point, '😀');
    }

    #[test]
    #[should_panic(expected = "cannot convert i64(-1) to u32: value underflows target type")]
    fn test_must_narrow_panics_with_structured_message() {
        let _: u32 = must_narrow(-1i64);
    }

    #[test]
    fn test_must_trunc_and_round() {
        let truncated: i32 = must_trunc(-3.9f64);
        assert_eq!(truncated, -3);
        let rounded: i32 = must_round(-3.9f64);
        assert_eq!(rounded, -4);
    }

    #[test]
    #[should_panic(expected = "cannot convert NaN")]
    fn test_must_round_panics_on_nan() {
        let _: i32 = must_round(f64::NAN);
    }
}
