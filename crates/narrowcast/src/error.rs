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

//! # Conversion Failure Model
//!
//! Structured errors for rejected numeric conversions. A failed
//! conversion produces a [`ConvertError`] carrying the source and target
//! type names, the offending value typed per source type
//! ([`SourceValue`]), and the failure classification ([`ConvertKind`]).
//! Callers match programmatically on the kind, never on strings,
//! while `Display` renders a diagnostic of the form
//! `cannot convert i64(-1) to u32: value underflows target type`.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The reason a conversion was rejected.
///
/// Kinds are mutually exclusive per failure and chosen by a fixed
/// precedence: special-value checks (NaN, infinity) before range checks,
/// sign checks before magnitude checks.
///
/// # Examples
///
/// ```rust
/// use narrowcast::checked::NarrowFrom;
/// use narrowcast::error::ConvertKind;
///
/// let err = u32::narrow_from(-1i64).unwrap_err();
/// assert_eq!(err.kind(), ConvertKind::Underflow);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ConvertKind {
    /// The value exceeds the maximum representable by the target type.
    Overflow,
    /// The value is below the minimum representable by the target type.
    /// Includes negative values converted to unsigned targets.
    Underflow,
    /// The source float is not-a-number.
    Nan,
    /// The source float is positive or negative infinity.
    Infinity,
    /// The value is not a valid Unicode scalar value: outside
    /// `0..=0x10FFFF` or inside the surrogate range `0xD800..=0xDFFF`.
    InvalidCodePoint,
}

impl Display for ConvertKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Overflow => "value overflows target type",
            Self::Underflow => "value underflows target type",
            Self::Nan => "cannot convert NaN",
            Self::Infinity => "cannot convert infinity",
            Self::InvalidCodePoint => "value is not a valid Unicode code point",
        };
        f.write_str(reason)
    }
}

/// The offending source value, retained with its original type for
/// diagnostics. The value is never reinterpreted: an `i64` that failed
/// to convert stays an `i64` here.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SourceValue {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Char(char),
}

macro_rules! impl_source_value_from {
    ($($variant:ident($t:ty)),+ $(,)?) => {$(
        impl From<$t> for SourceValue {
            #[inline]
            fn from(value: $t) -> Self {
                Self::$variant(value)
            }
        }
    )+};
}

impl_source_value_from!(
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Char(char),
);

impl Display for SourceValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::Isize(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::Usize(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v:?}"),
        }
    }
}

/// A trait that names a convertible primitive for diagnostics.
///
/// Every supported source and target type carries its canonical Rust
/// name as an associated constant, so error construction costs no
/// runtime reflection.
///
/// # Examples
///
/// ```rust
/// use narrowcast::error::TypeLabel;
///
/// assert_eq!(<i64 as TypeLabel>::NAME, "i64");
/// assert_eq!(<char as TypeLabel>::NAME, "char");
/// ```
pub trait TypeLabel {
    /// The canonical Rust name of the type (e.g., `"i64"`).
    const NAME: &'static str;
}

macro_rules! impl_type_label {
    ($($t:ty => $name:literal),+ $(,)?) => {$(
        impl TypeLabel for $t {
            const NAME: &'static str = $name;
        }
    )+};
}

impl_type_label!(
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
    char => "char",
);

/// The error type for a rejected numeric conversion.
///
/// Carries enough structure to render a human-readable message and to be
/// matched programmatically against a specific [`ConvertKind`].
///
/// # Examples
///
/// ```rust
/// use narrowcast::checked::NarrowFrom;
///
/// let err = u32::narrow_from(-1i64).unwrap_err();
/// assert!(err.is_underflow());
/// assert_eq!(
///     err.to_string(),
///     "cannot convert i64(-1) to u32: value underflows target type"
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ConvertError {
    from: &'static str,
    to: &'static str,
    value: SourceValue,
    kind: ConvertKind,
}

impl ConvertError {
    /// Creates a new error for a conversion from `Src` to `Dst`.
    #[inline]
    pub(crate) fn new<Src, Dst>(value: Src, kind: ConvertKind) -> Self
    where
        Src: TypeLabel + Into<SourceValue>,
        Dst: TypeLabel,
    {
        Self {
            from: Src::NAME,
            to: Dst::NAME,
            value: value.into(),
            kind,
        }
    }

    /// Returns the name of the source type.
    #[inline]
    pub fn source_type(&self) -> &'static str {
        self.from
    }

    /// Returns the name of the target type.
    #[inline]
    pub fn target_type(&self) -> &'static str {
        self.to
    }

    /// Returns the offending source value.
    #[inline]
    pub fn value(&self) -> SourceValue {
        self.value
    }

    /// Returns the failure classification.
    #[inline]
    pub fn kind(&self) -> ConvertKind {
        self.kind
    }

    /// Returns `true` if the conversion failed due to overflow.
    #[inline]
    pub fn is_overflow(&self) -> bool {
        self.kind == ConvertKind::Overflow
    }

    /// Returns `true` if the conversion failed due to underflow.
    #[inline]
    pub fn is_underflow(&self) -> bool {
        self.kind == ConvertKind::Underflow
    }

    /// Returns `true` if the source float was NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.kind == ConvertKind::Nan
    }

    /// Returns `true` if the source float was infinite.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.kind == ConvertKind::Infinity
    }

    /// Returns `true` if the value was not a valid Unicode scalar value.
    #[inline]
    pub fn is_invalid_code_point(&self) -> bool {
        self.kind == ConvertKind::InvalidCodePoint
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot convert {}({}) to {}: {}",
            self.from, self.value, self.to, self.kind
        )
    }
}

impl Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message_shape() {
        let err = ConvertError::new::<i64, u32>(-1, ConvertKind::Underflow);
        assert_eq!(
            err.to_string(),
            "cannot convert i64(-1) to u32: value underflows target type"
        );

        let err = ConvertError::new::<u64, u32>(4294967296, ConvertKind::Overflow);
        assert_eq!(
            err.to_string(),
            "cannot convert u64(4294967296) to u32: value overflows target type"
        );
    }

    #[test]
    fn test_kind_predicates_are_exclusive() {
        let err = ConvertError::new::<f64, i32>(f64::NAN, ConvertKind::Nan);
        assert!(err.is_nan());
        assert!(!err.is_overflow());
        assert!(!err.is_underflow());
        assert!(!err.is_infinity());
        assert!(!err.is_invalid_code_point());
    }

    #[test]
    fn test_accessors() {
        let err = ConvertError::new::<i32, char>(0x110000, ConvertKind::InvalidCodePoint);
        assert_eq!(err.source_type(), "i32");
        assert_eq!(err.target_type(), "char");
        assert_eq!(err.kind(), ConvertKind::InvalidCodePoint);
        assert_eq!(err.value(), SourceValue::I32(0x110000));
    }

    #[test]
    fn test_reason_phrases() {
        assert_eq!(ConvertKind::Overflow.to_string(), "value overflows target type");
        assert_eq!(ConvertKind::Underflow.to_string(), "value underflows target type");
        assert_eq!(ConvertKind::Nan.to_string(), "cannot convert NaN");
        assert_eq!(ConvertKind::Infinity.to_string(), "cannot convert infinity");
        assert_eq!(
            ConvertKind::InvalidCodePoint.to_string(),
            "value is not a valid Unicode code point"
        );
    }

    #[test]
    fn test_source_value_retains_float_payload() {
        let err = ConvertError::new::<f64, i32>(2147483648.5, ConvertKind::Overflow);
        assert_eq!(err.value(), SourceValue::F64(2147483648.5));
        assert_eq!(
            err.to_string(),
            "cannot convert f64(2147483648.5) to i32: value overflows target type"
        );
    }
}
