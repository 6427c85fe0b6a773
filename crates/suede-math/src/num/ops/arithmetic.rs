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

//! Binary arithmetic over `Real` values.
//!
//! Each function is a named, inlined wrapper around the matching IEEE-754
//! operation and inherits its special-value behavior unchanged.

use crate::num::real::Real;

/// Returns `a + b`.
///
/// # Examples
///
/// ```rust
/// # use suede_math::num::ops::arithmetic::add;
/// assert_eq!(add(1.0, 2.0), 3.0);
/// ```
#[inline]
pub fn add<T: Real>(a: T, b: T) -> T {
    a + b
}

/// Returns `a - b`.
///
/// # Examples
///
/// ```rust
/// # use suede_math::num::ops::arithmetic::subtract;
/// assert_eq!(subtract(5.0, 2.0), 3.0);
/// ```
#[inline]
pub fn subtract<T: Real>(a: T, b: T) -> T {
    a - b
}

/// Returns `a * b`.
///
/// # Examples
///
/// ```rust
/// # use suede_math::num::ops::arithmetic::multiply;
/// assert_eq!(multiply(3.0, 4.0), 12.0);
/// ```
#[inline]
pub fn multiply<T: Real>(a: T, b: T) -> T {
    a * b
}

/// Returns `a / b`.
///
/// A zero divisor does not panic. The result is `+inf` or `-inf` for a
/// non-zero dividend (sign given by the signs of both operands) and `NaN`
/// for `0 / 0`.
///
/// # Examples
///
/// ```rust
/// # use suede_math::num::ops::arithmetic::divide;
/// assert_eq!(divide(10.0, 2.0), 5.0);
/// assert_eq!(divide(1.0, 0.0), f64::INFINITY);
/// assert_eq!(divide(-1.0, 0.0), f64::NEG_INFINITY);
/// assert!(divide(0.0f64, 0.0).is_nan());
/// ```
#[inline]
pub fn divide<T: Real>(a: T, b: T) -> T {
    a / b
}

/// Returns `a` raised to the power `b`.
///
/// Fractional and negative exponents are supported. A negative base with a
/// non-integer exponent has no real result and yields `NaN`. A `NaN`
/// exponent always yields `NaN`, as does a base of `±1` with an infinite
/// exponent; `powf` alone would return `1` in those cases.
///
/// # Examples
///
/// ```rust
/// # use suede_math::num::ops::arithmetic::exponentiate;
/// assert_eq!(exponentiate(2.0, 3.0), 8.0);
/// assert_eq!(exponentiate(4.0, 0.5), 2.0);
/// assert_eq!(exponentiate(2.0, -2.0), 0.25);
/// assert!(exponentiate(-8.0f64, 1.0 / 3.0).is_nan());
/// assert!(exponentiate(1.0f64, f64::NAN).is_nan());
/// ```
#[inline]
pub fn exponentiate<T: Real>(a: T, b: T) -> T {
    if b.is_nan() || (b.is_infinite() && a.abs() == T::one()) {
        return T::nan();
    }
    a.powf(b)
}

/// Returns `a / b`, or `None` if `b` is zero.
///
/// # Examples
///
/// ```rust
/// # use suede_math::num::ops::arithmetic::checked_divide;
/// assert_eq!(checked_divide(10.0, 2.0), Some(5.0));
/// assert_eq!(checked_divide(10.0, 0.0), None);
/// ```
#[inline]
pub fn checked_divide<T: Real>(a: T, b: T) -> Option<T> {
    a.checked_div_val(b)
}

/// Returns `a` raised to the power `b`, or `None` if finite operands
/// produce a non-finite power.
///
/// # Examples
///
/// ```rust
/// # use suede_math::num::ops::arithmetic::checked_exponentiate;
/// assert_eq!(checked_exponentiate(2.0, 3.0), Some(8.0));
/// assert_eq!(checked_exponentiate(-8.0, 1.0 / 3.0), None);
/// ```
#[inline]
pub fn checked_exponentiate<T: Real>(a: T, b: T) -> Option<T> {
    a.checked_pow_val(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(1.0, 2.0), 3.0);
        assert_eq!(add(-1.5, 1.5), 0.0);
        assert_eq!(add(0.1f32, 0.2f32), 0.1f32 + 0.2f32);
        assert_eq!(add(f64::INFINITY, 1.0), f64::INFINITY);
        assert!(add(f64::INFINITY, f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(5.0, 2.0), 3.0);
        assert_eq!(subtract(2.0, 5.0), -3.0);
        assert!(subtract(f64::INFINITY, f64::INFINITY).is_nan());
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(3.0, 4.0), 12.0);
        assert_eq!(multiply(-3.0, 4.0), -12.0);
        assert_eq!(multiply(f64::MAX, 2.0), f64::INFINITY);
        assert!(multiply(0.0, f64::INFINITY).is_nan());
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 2.0), 5.0);
        assert_eq!(divide(1.0, 4.0), 0.25);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(3.0, 0.0), f64::INFINITY);
        assert_eq!(divide(-3.0, 0.0), f64::NEG_INFINITY);
        assert_eq!(divide(3.0, -0.0), f64::NEG_INFINITY);
        assert!(divide(0.0f64, 0.0).is_nan());
        assert!(divide(-0.0f64, 0.0).is_nan());
    }

    #[test]
    fn test_exponentiate() {
        assert_eq!(exponentiate(2.0, 3.0), 8.0);
        assert_eq!(exponentiate(4.0, 0.5), 2.0);
        assert_eq!(exponentiate(2.0, -1.0), 0.5);
        assert_eq!(exponentiate(-2.0, 2.0), 4.0);
        assert_eq!(exponentiate(7.0, 0.0), 1.0);
        assert_eq!(exponentiate(0.0, -1.0), f64::INFINITY);
        assert!(exponentiate(-4.0f64, 0.5).is_nan());
    }

    #[test]
    fn test_exponentiate_unit_base_and_nan_exponent() {
        assert!(exponentiate(1.0f64, f64::NAN).is_nan());
        assert!(exponentiate(-1.0f64, f64::INFINITY).is_nan());
        assert!(exponentiate(-1.0f64, f64::NEG_INFINITY).is_nan());
        assert!(exponentiate(1.0f64, f64::INFINITY).is_nan());
        assert!(exponentiate(1.0f32, f32::NAN).is_nan());
        // A NaN base with a zero exponent still yields one.
        assert_eq!(exponentiate(f64::NAN, 0.0), 1.0);
        assert_eq!(exponentiate(1.0f64, 1.0e300), 1.0);
        assert_eq!(exponentiate(2.0f64, f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_checked_divide() {
        assert_eq!(checked_divide(10.0, 2.0), Some(5.0));
        assert_eq!(checked_divide(1.0, 0.0), None);
        assert_eq!(checked_divide(0.0, 0.0), None);
    }

    #[test]
    fn test_checked_exponentiate() {
        assert_eq!(checked_exponentiate(2.0, 3.0), Some(exponentiate(2.0, 3.0)));
        assert_eq!(checked_exponentiate(-4.0, 0.5), None);
        assert_eq!(checked_exponentiate(0.0, -1.0), None);
    }
}
