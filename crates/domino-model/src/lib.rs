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


//! # Domino Model
//!
//! **The data model for the circular domino chain solver.**
//!
//! This crate defines the values exchanged between callers and the search
//! engine (`domino_solver`):
//!
//! * **`index`**: strongly-typed `DominoIndex` so positional tracking of input
//!   dominoes cannot be confused with pip values or chain positions.
//! * **`domino`**: the immutable `Domino<T>` value with `flip` and parsing.
//! * **`chain`**: the oriented `Chain<T>` output and its validation.
//! * **`loading`**: a text loader for domino sets.
//!
//! Pip values are generic over any `num_traits::PrimInt`, so `i32`, `i64`
//! and narrow unsigned types all work; negative pips are ordinary values.

pub mod chain;
pub mod domino;
pub mod index;
pub mod loading;
