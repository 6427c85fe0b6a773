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

use core::ops::Div;

/// A trait for floating-point types that support checked division by value.
///
/// Plain IEEE-754 division by zero produces `±inf` or `NaN`. This trait mirrors
/// the integer `checked_div` instead: any zero divisor, positive or negative,
/// yields `None`.
///
/// # Examples
///
/// ```rust
/// # use suede_math::num::ops::checked_arithmetic::CheckedDivVal;
/// let a: f64 = 10.0;
/// assert_eq!(a.checked_div_val(0.0), None); // Division by zero
/// assert_eq!(a.checked_div_val(-0.0), None); // Negative zero as well
/// assert_eq!(a.checked_div_val(4.0), Some(2.5));
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Performs checked division by value, returning `None` if the divisor is zero.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_div_impl_val {
    ($t:ty) => {
        impl CheckedDivVal for $t {
            #[inline(always)]
            fn checked_div_val(self, v: $t) -> Option<$t> {
                if v == 0.0 { None } else { Some(self / v) }
            }
        }
    };
}

checked_div_impl_val!(f32);
checked_div_impl_val!(f64);

/// A trait for floating-point types that support checked exponentiation by value.
///
/// Returns `None` when both operands are finite but the power is not, which
/// covers a negative base with a fractional exponent (`NaN`), zero raised to a
/// negative exponent (`inf`) and overflow. Non-finite operands yield
/// `Some` of the total power, which is `NaN` for a `NaN` exponent and for a
/// base of `±1` with an infinite exponent.
///
/// # Examples
///
/// ```rust
/// # use suede_math::num::ops::checked_arithmetic::CheckedPowVal;
/// let a: f64 = 2.0;
/// assert_eq!(a.checked_pow_val(3.0), Some(8.0));
///
/// let b: f64 = -8.0;
/// assert_eq!(b.checked_pow_val(1.0 / 3.0), None); // No real result
///
/// let c: f64 = 0.0;
/// assert_eq!(c.checked_pow_val(-1.0), None); // Pole at zero
///
/// let d: f64 = 10.0;
/// assert_eq!(d.checked_pow_val(400.0), None); // Overflow
/// ```
pub trait CheckedPowVal: Sized {
    /// Raises `self` to the power `v`, returning `None` if finite inputs
    /// produce a non-finite result.
    fn checked_pow_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_pow_impl_val {
    ($t:ty) => {
        impl CheckedPowVal for $t {
            #[inline(always)]
            fn checked_pow_val(self, v: $t) -> Option<$t> {
                let result = if v.is_nan() || (v.is_infinite() && self.abs() == 1.0) {
                    <$t>::NAN
                } else {
                    <$t>::powf(self, v)
                };
                if self.is_finite() && v.is_finite() && !result.is_finite() {
                    None
                } else {
                    Some(result)
                }
            }
        }
    };
}

checked_pow_impl_val!(f32);
checked_pow_impl_val!(f64);

/// A trait for floating-point types that support a checked square root by value.
///
/// # Examples
///
/// ```rust
/// # use suede_math::num::ops::checked_arithmetic::CheckedSqrtVal;
/// let a: f64 = 16.0;
/// assert_eq!(a.checked_sqrt_val(), Some(4.0));
///
/// let b: f64 = -1.0;
/// assert_eq!(b.checked_sqrt_val(), None); // Negative input
/// ```
pub trait CheckedSqrtVal: Sized {
    /// Returns the principal square root, or `None` for negative or `NaN` input.
    fn checked_sqrt_val(self) -> Option<Self>;
}

macro_rules! checked_sqrt_impl_val {
    ($t:ty) => {
        impl CheckedSqrtVal for $t {
            #[inline(always)]
            fn checked_sqrt_val(self) -> Option<$t> {
                if self.is_nan() || self < 0.0 {
                    None
                } else {
                    Some(<$t>::sqrt(self))
                }
            }
        }
    };
}

checked_sqrt_impl_val!(f32);
checked_sqrt_impl_val!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_div_val<T: CheckedDivVal>(a: T, b: T) -> Option<T> {
        a.checked_div_val(b)
    }
    fn checked_pow_val<T: CheckedPowVal>(a: T, b: T) -> Option<T> {
        a.checked_pow_val(b)
    }
    fn checked_sqrt_val<T: CheckedSqrtVal>(a: T) -> Option<T> {
        a.checked_sqrt_val()
    }

    #[test]
    fn test_checked_div_val() {
        assert_eq!(checked_div_val(10.0f64, 2.0), Some(5.0));
        assert_eq!(checked_div_val(1.0f64, 0.0), None);
        assert_eq!(checked_div_val(0.0f64, 0.0), None);
        assert_eq!(checked_div_val(-1.0f32, -0.0), None);
        assert_eq!(checked_div_val(7.5f32, 2.5), Some(3.0));
    }

    #[test]
    fn test_checked_div_val_passes_nan_dividend() {
        let r = checked_div_val(f64::NAN, 2.0).unwrap();
        assert!(r.is_nan());
    }

    #[test]
    fn test_checked_pow_val() {
        assert_eq!(checked_pow_val(2.0f64, 3.0), Some(8.0));
        assert_eq!(checked_pow_val(4.0f64, 0.5), Some(2.0));
        assert_eq!(checked_pow_val(2.0f64, -1.0), Some(0.5));
        assert_eq!(checked_pow_val(-2.0f64, 3.0), Some(-8.0));
        assert_eq!(checked_pow_val(-8.0f64, 1.0 / 3.0), None);
        assert_eq!(checked_pow_val(0.0f64, -2.0), None);
        assert_eq!(checked_pow_val(f32::MAX, 2.0), None);
    }

    #[test]
    fn test_checked_pow_val_non_finite_operands() {
        assert_eq!(checked_pow_val(f64::INFINITY, 2.0), Some(f64::INFINITY));
        assert_eq!(checked_pow_val(2.0f64, f64::NEG_INFINITY), Some(0.0));
        assert!(checked_pow_val(f64::NAN, 2.0).unwrap().is_nan());
        assert!(checked_pow_val(1.0f64, f64::NAN).unwrap().is_nan());
        assert!(checked_pow_val(-1.0f64, f64::INFINITY).unwrap().is_nan());
        assert!(checked_pow_val(-1.0f32, f32::NEG_INFINITY).unwrap().is_nan());
    }

    #[test]
    fn test_checked_sqrt_val() {
        assert_eq!(checked_sqrt_val(16.0f64), Some(4.0));
        assert_eq!(checked_sqrt_val(0.0f64), Some(0.0));
        assert_eq!(checked_sqrt_val(2.25f32), Some(1.5));
        assert_eq!(checked_sqrt_val(f64::INFINITY), Some(f64::INFINITY));
        assert_eq!(checked_sqrt_val(-1.0f64), None);
        assert_eq!(checked_sqrt_val(f64::NEG_INFINITY), None);
        assert_eq!(checked_sqrt_val(f64::NAN), None);
    }
}
