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

//! # Suede Math
//!
//! Pure floating-point arithmetic utilities with a small, stable API. Every
//! function is a total, deterministic wrapper around the corresponding
//! IEEE-754 operation: out-of-domain inputs produce `NaN` or a signed
//! infinity rather than a panic or an error.
//!
//! ## Modules
//!
//! - `num`: The `Real` numeric bound and the arithmetic operations built on
//!   it, split into binary arithmetic (`add`, `subtract`, `multiply`,
//!   `divide`, `exponentiate`), powers and roots (`square`, `cube`, `sqrt`,
//!   `cbrt`), and by-value checked variants returning `Option<T>`.
//!
//! The operations are re-exported at the crate root for direct use:
//!
//! ```rust
//! use suede_math::{add, divide, square};
//!
//! assert_eq!(add(1.0, 2.0), 3.0);
//! assert_eq!(square(4.0), 16.0);
//! assert!(divide(1.0f64, 0.0).is_infinite());
//! ```

pub mod num;

pub use num::ops::arithmetic::{
    add, checked_divide, checked_exponentiate, divide, exponentiate, multiply, subtract,
};
pub use num::ops::powers::{cbrt, checked_sqrt, cube, sqrt, square};
pub use num::real::Real;
