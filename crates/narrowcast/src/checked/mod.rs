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
//! Erroring conversion traits returning `Result<T, ConvertError>`.
//! Every conversion is a named, explicit call with no behavior flags,
//! and every failure surfaces as a structured [`ConvertError`](crate::error::ConvertError)
//! to the immediate caller, never logged or swallowed.
//!
//! ## Submodules
//!
//! - `int`: Integer-to-integer narrowing and cross-signedness checks,
//!   plus the named widening conversions.
//! - `float`: Float-to-integer conversion under the truncate and
//!   round-half-away-from-zero policies, `f64`→`f32` narrowing, and
//!   `f32`→`f64` widening.
//! - `codepoint`: Integer↔`char` conversions with surrogate-range
//!   exclusion.
//!
//! ## Traits
//!
//! - [`NarrowFrom`] / [`NarrowInto`]: range-checked conversion that fails
//!   when the value is not representable in the target type.
//! - [`WidenFrom`] / [`WidenInto`]: always-succeeding conversion kept as
//!   an explicit call so that call sites document intent.
//! - [`TruncFrom`] / [`TruncInto`]: float→integer, discarding the
//!   fractional part toward zero.
//! - [`RoundFrom`] / [`RoundInto`]: float→integer, rounding to nearest
//!   with ties away from zero.

pub mod codepoint;
pub mod float;
pub mod int;

use crate::error::ConvertError;

/// A range-checked conversion from `Src`.
///
/// Fails with a structured error when the source value cannot be
/// represented in the target type: `Underflow` when below the target
/// minimum (checked before magnitude, so a negative value converted to
/// an unsigned target is always an underflow), `Overflow` when above the
/// target maximum, and `InvalidCodePoint` for values outside the Unicode
/// scalar-value ranges.
///
/// # Examples
///
/// ```rust
/// use narrowcast::checked::NarrowFrom;
///
/// assert_eq!(i8::narrow_from(127i32), Ok(127i8));
/// assert!(i8::narrow_from(128i32).unwrap_err().is_overflow());
/// assert!(u32::narrow_from(-1i64).unwrap_err().is_underflow());
/// ```
pub trait NarrowFrom<Src>: Sized {
    /// Converts `value`, failing if it is not representable in `Self`.
    fn narrow_from(value: Src) -> Result<Self, ConvertError>;
}

/// The reciprocal of [`NarrowFrom`], implemented blanket-wise.
///
/// # Examples
///
/// ```rust
/// use narrowcast::checked::NarrowInto;
///
/// let small: i8 = 100i64.narrow_into().unwrap();
/// assert_eq!(small, 100);
/// ```
pub trait NarrowInto<Dst> {
    /// Converts `self`, failing if it is not representable in `Dst`.
    fn narrow_into(self) -> Result<Dst, ConvertError>;
}

impl<Src, Dst> NarrowInto<Dst> for Src
where
    Dst: NarrowFrom<Src>,
{
    #[inline]
    fn narrow_into(self) -> Result<Dst, ConvertError> {
        Dst::narrow_from(self)
    }
}

/// A widening conversion from `Src` that always succeeds.
///
/// The target range is a superset of the source range, so no check is
/// required, but the operation exists as a named call (never an
/// implicit cast) so that call sites document intent.
///
/// # Examples
///
/// ```rust
/// use narrowcast::checked::WidenFrom;
///
/// assert_eq!(i64::widen_from(-5i8), -5i64);
/// assert_eq!(u32::widen_from(255u8), 255u32);
/// ```
pub trait WidenFrom<Src>: Sized {
    /// Converts `value` without loss.
    fn widen_from(value: Src) -> Self;
}

/// The reciprocal of [`WidenFrom`], implemented blanket-wise.
pub trait WidenInto<Dst> {
    /// Converts `self` without loss.
    fn widen_into(self) -> Dst;
}

impl<Src, Dst> WidenInto<Dst> for Src
where
    Dst: WidenFrom<Src>,
{
    #[inline]
    fn widen_into(self) -> Dst {
        Dst::widen_from(self)
    }
}

/// A float-to-integer conversion that truncates toward zero.
///
/// NaN fails as `Nan` and ±∞ as `Infinity` before any range check; the
/// untruncated value is then compared against the target range in `f64`
/// space, so a fractional value beyond the target maximum is an overflow
/// even though its integral part would fit.
///
/// # Examples
///
/// ```rust
/// use narrowcast::checked::TruncFrom;
///
/// assert_eq!(i64::trunc_from(3.5f64), Ok(3));
/// assert_eq!(i64::trunc_from(-3.5f64), Ok(-3));
/// assert!(i32::trunc_from(f64::NAN).unwrap_err().is_nan());
/// ```
pub trait TruncFrom<Src>: Sized {
    /// Converts `value` by discarding the fractional part toward zero.
    fn trunc_from(value: Src) -> Result<Self, ConvertError>;
}

/// The reciprocal of [`TruncFrom`], implemented blanket-wise.
pub trait TruncInto<Dst> {
    /// Converts `self` by discarding the fractional part toward zero.
    fn trunc_into(self) -> Result<Dst, ConvertError>;
}

impl<Src, Dst> TruncInto<Dst> for Src
where
    Dst: TruncFrom<Src>,
{
    #[inline]
    fn trunc_into(self) -> Result<Dst, ConvertError> {
        Dst::trunc_from(self)
    }
}

/// A float-to-integer conversion that rounds to nearest, ties away from
/// zero.
///
/// Rounding happens in floating point before the range check, because
/// rounding can itself push a value across a target boundary: a value
/// just below the target maximum that rounds up past it must classify as
/// overflow, never wrap.
///
/// # Examples
///
/// ```rust
/// use narrowcast::checked::RoundFrom;
///
/// assert_eq!(i64::round_from(3.5f64), Ok(4));
/// assert_eq!(i64::round_from(-3.5f64), Ok(-4));
/// assert_eq!(i64::round_from(0.5f64), Ok(1));
/// assert_eq!(i64::round_from(-0.5f64), Ok(-1));
/// ```
pub trait RoundFrom<Src>: Sized {
    /// Converts `value` by rounding to nearest, ties away from zero.
    fn round_from(value: Src) -> Result<Self, ConvertError>;
}

/// The reciprocal of [`RoundFrom`], implemented blanket-wise.
pub trait RoundInto<Dst> {
    /// Converts `self` by rounding to nearest, ties away from zero.
    fn round_into(self) -> Result<Dst, ConvertError>;
}

impl<Src, Dst> RoundInto<Dst> for Src
where
    Dst: RoundFrom<Src>,
{
    #[inline]
    fn round_into(self) -> Result<Dst, ConvertError> {
        Dst::round_from(self)
    }
}
