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

//! # Narrowcast
//!
//! Checked, saturating, and panicking conversions between fixed-width
//! numeric representations: signed and unsigned integers of widths
//! {8, 16, 32, 64, pointer}, IEEE-754 `f32`/`f64`, and Unicode scalar
//! values (`char`). Where the language's `as` casts silently truncate,
//! wrap, or saturate, these conversions classify every unrepresentable
//! value as a structured failure or substitute the nearest representable
//! one; the caller picks the family matching its need for detectability
//! versus availability.
//!
//! ## Modules
//!
//! - `error`: The failure taxonomy (`ConvertKind`), the structured
//!   conversion error (`ConvertError`) carrying source/target type names
//!   and the offending value (`SourceValue`), and compile-time type
//!   naming (`TypeLabel`).
//! - `checked`: Erroring conversion traits returning
//!   `Result<T, ConvertError>`: `NarrowFrom` for range-checked
//!   conversions, `WidenFrom` for named always-succeeding widenings, and
//!   `TruncFrom`/`RoundFrom` for float-to-integer conversion under an
//!   explicit rounding policy.
//! - `saturating`: Total counterparts (`SaturatingNarrowFrom`,
//!   `SaturatingTruncFrom`, `SaturatingRoundFrom`) that substitute the
//!   nearest in-range value instead of failing.
//! - `must`: Panicking wrappers over the erroring family for call sites
//!   with compile-time-known-safe inputs.
//!
//! ## Purpose
//!
//! Pipelines that move values across type boundaries (wire decoding,
//! index math, FFI edges) need predictable narrowing semantics. These
//! traits make every conversion a named, explicit call with a fixed
//! classification (identical inputs always yield identical outcomes),
//! so the erroring and saturating families can never disagree about what
//! counts as overflow, underflow, NaN, infinity, or an invalid code
//! point.
//!
//! Refer to each module for detailed APIs and examples.

pub mod checked;
pub mod error;
pub mod must;
pub mod saturating;
