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

//! # Arithmetic Operations
//!
//! Named arithmetic operations over any `Real` type.
//!
//! ## Submodules
//!
//! - `arithmetic`: Binary operations `add`, `subtract`, `multiply`, `divide`
//!   and `exponentiate`, plus `checked_divide` and `checked_exponentiate`.
//! - `powers`: Unary operations `square`, `cube`, `sqrt` and `cbrt`, plus
//!   `checked_sqrt`.
//! - `checked_arithmetic`: By-value traits (`CheckedDivVal`, `CheckedPowVal`,
//!   `CheckedSqrtVal`) that return `None` instead of an IEEE-754 special value
//!   when the input lies outside the operation's domain.
//!
//! The total functions never fail. Division by zero yields `±inf` (or `NaN`
//! for `0 / 0`), the square root of a negative number yields `NaN`, and so on,
//! exactly as the underlying floating-point operations do.

pub mod arithmetic;
pub mod checked_arithmetic;
pub mod powers;
