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

//! # Real Numeric Trait
//!
//! `Real` specifies the floating-point capabilities the arithmetic
//! operations rely on: intrinsic operations from `num_traits::Float`
//! and the by-value checked traits from `checked_arithmetic`. It is blanket-implemented, so `f32` and `f64`
//! satisfy it without any opt-in.

use crate::num::ops::checked_arithmetic::{CheckedDivVal, CheckedPowVal, CheckedSqrtVal};
use num_traits::Float;

/// A trait alias for floating-point types usable with the arithmetic
/// operations of this crate.
///
/// These are `f32` and `f64`. Results are only documented for `f64`,
/// which preserves double-precision rounding and special values.
///
/// # Examples
///
/// ```rust
/// # use suede_math::num::real::Real;
/// fn midpoint<T: Real>(a: T, b: T) -> T {
///     suede_math::divide(suede_math::add(a, b), T::one() + T::one())
/// }
///
/// assert_eq!(midpoint(2.0f64, 4.0), 3.0);
/// assert_eq!(midpoint(2.0f32, 4.0), 3.0);
/// ```
pub trait Real: Float + CheckedDivVal + CheckedPowVal + CheckedSqrtVal + Send + Sync {}

impl<T> Real for T where T: Float + CheckedDivVal + CheckedPowVal + CheckedSqrtVal + Send + Sync {}
