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

//! # Saturating Conversions
//!
//! Total counterparts to the checked family: the same boundary logic,
//! but every failure class recovers into a substitute value, so these
//! conversions always return a value and never error. Out-of-range
//! values clamp to the target minimum or maximum; NaN substitutes zero
//! (there is no natural nearest value); ±∞ clamp to the corresponding
//! extreme. The classification itself is shared with the checked family,
//! so the two can never disagree about what counts as overflow or
//! underflow.
//!
//! ## Submodules
//!
//! - `int`: Integer-to-integer clamping for every checked pair.
//! - `float`: Float-to-integer clamping under both rounding policies,
//!   and `f64`→`f32` clamping.
//! - `codepoint`: Integer↔`char` substitution, including the
//!   replacement character for surrogate inputs.

pub mod codepoint;
pub mod float;
pub mod int;

/// A conversion from `Src` that substitutes the nearest representable
/// value instead of failing. Total: defined for every input, including
/// NaN and ±∞ where the source is a float.
///
/// # Examples
///
/// ```rust
/// use narrowcast::saturating::SaturatingNarrowFrom;
///
/// assert_eq!(i8::saturating_narrow_from(300i32), 127i8);
/// assert_eq!(u32::saturating_narrow_from(-1i64), 0u32);
/// assert_eq!(i32::saturating_narrow_from(42i64), 42i32);
/// ```
pub trait SaturatingNarrowFrom<Src>: Sized {
    /// Converts `value`, clamping it into the representable range.
    fn saturating_narrow_from(value: Src) -> Self;
}

/// The reciprocal of [`SaturatingNarrowFrom`], implemented blanket-wise.
pub trait SaturatingNarrowInto<Dst> {
    /// Converts `self`, clamping it into the representable range.
    fn saturating_narrow_into(self) -> Dst;
}

impl<Src, Dst> SaturatingNarrowInto<Dst> for Src
where
    Dst: SaturatingNarrowFrom<Src>,
{
    #[inline]
    fn saturating_narrow_into(self) -> Dst {
        Dst::saturating_narrow_from(self)
    }
}

/// A float-to-integer conversion that truncates toward zero and clamps
/// instead of failing. NaN substitutes zero; ±∞ clamp to the target
/// extremes.
///
/// # Examples
///
/// ```rust
/// use narrowcast::saturating::SaturatingTruncFrom;
///
/// assert_eq!(i32::saturating_trunc_from(3.9f64), 3);
/// assert_eq!(i32::saturating_trunc_from(1e300f64), i32::MAX);
/// assert_eq!(i32::saturating_trunc_from(f64::NAN), 0);
/// ```
pub trait SaturatingTruncFrom<Src>: Sized {
    /// Converts `value` by truncation, clamping into range.
    fn saturating_trunc_from(value: Src) -> Self;
}

/// The reciprocal of [`SaturatingTruncFrom`], implemented blanket-wise.
pub trait SaturatingTruncInto<Dst> {
    /// Converts `self` by truncation, clamping into range.
    fn saturating_trunc_into(self) -> Dst;
}

impl<Src, Dst> SaturatingTruncInto<Dst> for Src
where
    Dst: SaturatingTruncFrom<Src>,
{
    #[inline]
    fn saturating_trunc_into(self) -> Dst {
        Dst::saturating_trunc_from(self)
    }
}

/// A float-to-integer conversion that rounds to nearest (ties away from
/// zero) and clamps instead of failing. NaN substitutes zero; ±∞ clamp
/// to the target extremes.
///
/// # Examples
///
/// ```rust
/// use narrowcast::saturating::SaturatingRoundFrom;
///
/// assert_eq!(i32::saturating_round_from(3.5f64), 4);
/// assert_eq!(u8::saturating_round_from(-2.5f64), 0);
/// assert_eq!(u8::saturating_round_from(f64::INFINITY), u8::MAX);
/// ```
pub trait SaturatingRoundFrom<Src>: Sized {
    /// Converts `value` by rounding, clamping into range.
    fn saturating_round_from(value: Src) -> Self;
}

/// The reciprocal of [`SaturatingRoundFrom`], implemented blanket-wise.
pub trait SaturatingRoundInto<Dst> {
    /// Converts `self` by rounding, clamping into range.
    fn saturating_round_into(self) -> Dst;
}

impl<Src, Dst> SaturatingRoundInto<Dst> for Src
where
    Dst: SaturatingRoundFrom<Src>,
{
    #[inline]
    fn saturating_round_into(self) -> Dst {
        Dst::saturating_round_from(self)
    }
}
