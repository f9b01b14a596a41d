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


//! Positions in the input collection.
//!
//! Dominoes may repeat by value, so the solver tracks them by where they sit
//! in the caller's slice. `DominoIndex` wraps that position so it cannot be
//! confused with a pip value or a position in the resulting chain. It is
//! `#[repr(transparent)]` over `usize`.
//!
//! ```rust
//! use domino_model::index::DominoIndex;
//!
//! let i = DominoIndex::new(3);
//! assert_eq!(i.get(), 3);
//! assert_eq!(format!("{}", i), "DominoIndex(3)");
//! ```

/// The position of a domino in the input collection.
///
/// Duplicate-valued dominoes are told apart by this index, never by value.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DominoIndex(usize);

impl DominoIndex {
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw position.
    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Debug for DominoIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DominoIndex({})", self.0)
    }
}

impl std::fmt::Display for DominoIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl From<usize> for DominoIndex {
    #[inline]
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<DominoIndex> for usize {
    #[inline]
    fn from(index: DominoIndex) -> Self {
        index.0
    }
}
