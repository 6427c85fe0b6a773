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

//! Powers and roots of a single `Real` value.

use crate::num::real::Real;

/// Returns `a * a`.
///
/// # Examples
///
/// ```rust
/// # use suede_math::num::ops::powers::square;
/// assert_eq!(square(4.0), 16.0);
/// assert_eq!(square(-3.0), 9.0);
/// ```
#[inline]
pub fn square<T: Real>(a: T) -> T {
    a * a
}

/// Returns `a * a * a`.
///
/// # Examples
///
/// ```rust
/// # use suede_math::num::ops::powers::cube;
/// assert_eq!(cube(3.0), 27.0);
/// assert_eq!(cube(-2.0), -8.0);
/// ```
#[inline]
pub fn cube<T: Real>(a: T) -> T {
    a * a * a
}

/// Returns the principal (non-negative) square root of `a`.
///
/// Negative inputs have no real square root and yield `NaN`.
///
/// # Examples
///
/// ```rust
/// # use suede_math::num::ops::powers::sqrt;
/// assert_eq!(sqrt(16.0), 4.0);
/// assert!(sqrt(-1.0f64).is_nan());
/// ```
#[inline]
pub fn sqrt<T: Real>(a: T) -> T {
    a.sqrt()
}

/// Returns the real cube root of `a`. Defined for every real `a`, including
/// negative values.
///
/// # Examples
///
/// ```rust
/// # use suede_math::num::ops::powers::cbrt;
/// assert!((cbrt(27.0f64) - 3.0).abs() < 1e-12);
/// assert!((cbrt(-8.0f64) + 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn cbrt<T: Real>(a: T) -> T {
    a.cbrt()
}

/// Returns the principal square root of `a`, or `None` if `a` is negative
/// or `NaN`.
///
/// # Examples
///
/// ```rust
/// # use suede_math::num::ops::powers::checked_sqrt;
/// assert_eq!(checked_sqrt(9.0), Some(3.0));
/// assert_eq!(checked_sqrt(-9.0), None);
/// ```
#[inline]
pub fn checked_sqrt<T: Real>(a: T) -> Option<T> {
    a.checked_sqrt_val()
}
