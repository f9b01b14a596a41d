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


//! Placement decisions.
//!
//! A `Placement` is one branching choice of the search: put the input domino
//! at `domino_index` next in the chain, either as given or turned around.

use domino_model::{domino::Domino, index::DominoIndex};
use num_traits::PrimInt;

/// The orientation in which an input domino is placed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Orientation {
    /// As supplied by the caller.
    Forward,
    /// Turned around, `first` and `second` swapped.
    Flipped,
}

impl Orientation {
    /// Returns `domino` in this orientation.
    #[inline(always)]
    pub fn apply<T>(self, domino: Domino<T>) -> Domino<T>
    where
        T: PrimInt,
    {
        match self {
            Orientation::Forward => domino,
            Orientation::Flipped => domino.flip(),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Forward => write!(f, "Forward"),
            Orientation::Flipped => write!(f, "Flipped"),
        }
    }
}

/// A single branching decision: which input domino goes next, and which way round.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Placement {
    domino_index: DominoIndex,
    orientation: Orientation,
}

impl Placement {
    /// Creates a new `Placement`.
    #[inline(always)]
    pub const fn new(domino_index: DominoIndex, orientation: Orientation) -> Self {
        Self {
            domino_index,
            orientation,
        }
    }

    /// Creates a placement of the input domino as supplied.
    #[inline(always)]
    pub const fn forward(domino_index: DominoIndex) -> Self {
        Self::new(domino_index, Orientation::Forward)
    }

    /// Creates a placement of the input domino turned around.
    #[inline(always)]
    pub const fn flipped(domino_index: DominoIndex) -> Self {
        Self::new(domino_index, Orientation::Flipped)
    }

    /// Returns the input position of the placed domino.
    #[inline(always)]
    pub fn domino_index(&self) -> DominoIndex {
        self.domino_index
    }

    /// Returns the orientation of the placed domino.
    #[inline(always)]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the domino as it lands in the chain.
    ///
    /// # Panics
    ///
    /// Panics if `domino_index` is out of bounds for `dominoes`.
    #[inline]
    pub fn oriented<T>(&self, dominoes: &[Domino<T>]) -> Domino<T>
    where
        T: PrimInt,
    {
        self.orientation.apply(dominoes[self.domino_index.get()])
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Placement(domino: {}, orientation: {})",
            self.domino_index.get(),
            self.orientation
        )
    }
}
