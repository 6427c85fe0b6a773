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

//! # Suede Consumer
//!
//! A downstream crate built on `suede-math`. It exposes a single helper,
//! `add_five`, composed from the upstream `add`.

use suede_math::{Real, add};

/// Five, built from exact additions of one so no fallible cast is needed.
#[inline]
fn five<T: Real>() -> T {
    let two = T::one() + T::one();
    two + two + T::one()
}

/// Returns `a + 5`.
///
/// Generic over the same `Real` bound as the upstream operations. Follows
/// IEEE-754 addition: infinities are preserved and `NaN` propagates.
///
/// # Examples
///
/// ```rust
/// # use suede_consumer::add_five;
/// assert_eq!(add_five(10.0), 15.0);
/// assert_eq!(add_five(-5.0), 0.0);
/// assert_eq!(add_five(1.5f32), 6.5f32);
/// ```
#[inline]
pub fn add_five<T: Real>(a: T) -> T {
    add(a, five())
}
