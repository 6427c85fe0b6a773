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

//! # Floating-Point Numerics
//!
//! Generic building blocks for IEEE-754 arithmetic.
//!
//! ## Submodules
//!
//! - `real`: The `Real` trait alias collecting the bounds every operation
//!   requires (`num_traits::Float`, the checked traits and
//!   `Send + Sync`). Satisfied by `f32` and `f64`.
//! - `ops`: The arithmetic operations themselves, both the total functions
//!   and the checked (`Option<T>`) variants.
//!
//! `f64` is the reference type. All documented results assume double
//! precision unless stated otherwise.

pub mod ops;
pub mod real;
