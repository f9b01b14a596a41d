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


//! Search state for the chain solver.
//!
//! `SearchState` is the mutable container that the search extends and
//! shrinks while exploring: the partial chain (in placement orientation)
//! and one usage marker per input domino.
//!
//! Key responsibilities:
//! - Track which input positions are used, so duplicate-valued dominoes are
//!   distinguished by index and never by value.
//! - Expose the constraint for the next placement (`last_value`).
//! - Decide completion and closure of the chain.
//!
//! Invariants (debug-checked):
//! - `chain.len() == number of set markers <= num_dominoes`.
//! - `place` is only called for unused positions, `unplace` only for the
//!   most recently placed one.

use domino_model::{chain::Chain, domino::Domino, index::DominoIndex};
use fixedbitset::FixedBitSet;
use num_traits::PrimInt;

/// The incremental state of a single circular chain search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState<T> {
    chain: Vec<Domino<T>>,
    used: FixedBitSet,
    num_dominoes: usize,
}

impl<T> SearchState<T>
where
    T: PrimInt,
{
    /// Creates an empty state for an input of `num_dominoes` dominoes.
    #[inline]
    pub fn new(num_dominoes: usize) -> Self {
        Self {
            chain: Vec::with_capacity(num_dominoes),
            used: FixedBitSet::with_capacity(num_dominoes),
            num_dominoes,
        }
    }

    /// Returns the number of input dominoes.
    #[inline]
    pub fn num_dominoes(&self) -> usize {
        self.num_dominoes
    }

    /// Returns the number of dominoes placed in the partial chain.
    #[inline]
    pub fn num_placed(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if every input domino has been placed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.chain.len() == self.num_dominoes
    }

    /// Returns `true` if the input domino at `domino_index` is part of the partial chain.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `domino_index` is out of bounds `0..num_dominoes`.
    #[inline]
    pub fn is_used(&self, domino_index: DominoIndex) -> bool {
        let index = domino_index.get();
        debug_assert!(
            index < self.num_dominoes,
            "called `SearchState::is_used` with domino index out of bounds: the len is {} but the index is {}",
            self.num_dominoes,
            index
        );

        self.used.contains(index)
    }

    /// Returns the value the next domino must start with,
    /// or `None` while the chain is empty and the first placement is unconstrained.
    #[inline]
    pub fn last_value(&self) -> Option<T> {
        self.chain.last().map(|domino| domino.second())
    }

    /// Returns `true` if the partial chain is non-empty and ends on the value it starts with.
    #[inline]
    pub fn is_closed(&self) -> bool {
        match (self.chain.first(), self.chain.last()) {
            (Some(head), Some(tail)) => head.first() == tail.second(),
            _ => false,
        }
    }

    /// Returns the partial chain in placement orientation.
    #[inline]
    pub fn chain(&self) -> &[Domino<T>] {
        &self.chain
    }

    /// Appends `domino` (already oriented) and marks `domino_index` as used.
    ///
    /// # Panics
    ///
    /// Panics if `domino_index` is out of bounds. In debug builds, also panics
    /// if the position is already used.
    #[inline]
    pub fn place(&mut self, domino_index: DominoIndex, domino: Domino<T>) {
        let index = domino_index.get();
        debug_assert!(
            !self.used.contains(index),
            "called `SearchState::place` with domino {} which is already placed",
            index
        );

        self.used.insert(index);
        self.chain.push(domino);
    }

    /// Removes the last placed domino and clears the marker of `domino_index`.
    ///
    /// # Panics
    ///
    /// Panics if `domino_index` is out of bounds. In debug builds, also panics
    /// if the chain is empty or the position is not marked.
    #[inline]
    pub fn unplace(&mut self, domino_index: DominoIndex) {
        let index = domino_index.get();
        debug_assert!(
            self.used.contains(index),
            "called `SearchState::unplace` with domino {} which is not placed",
            index
        );
        debug_assert!(
            !self.chain.is_empty(),
            "called `SearchState::unplace` on an empty chain"
        );

        self.used.set(index, false);
        self.chain.pop();
    }
}

impl<T> std::fmt::Display for SearchState<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "State(placed: {}/{}",
            self.chain.len(),
            self.num_dominoes
        )?;
        if let Some(tail) = self.chain.last() {
            write!(f, ", last: {}", tail)?;
        }
        write!(f, ")")
    }
}

/// Error indicating that a chain was requested from a state
/// that has not placed every input domino yet.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
#[error("incomplete chain: placed {placed}/{total} dominoes")]
pub struct IncompleteChainError {
    placed: usize,
    total: usize,
}

impl<T> TryFrom<&SearchState<T>> for Chain<T>
where
    T: PrimInt,
{
    type Error = IncompleteChainError;

    fn try_from(state: &SearchState<T>) -> Result<Self, Self::Error> {
        if !state.is_complete() {
            return Err(IncompleteChainError {
                placed: state.num_placed(),
                total: state.num_dominoes(),
            });
        }

        Ok(Chain::new(state.chain.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn i(index: usize) -> DominoIndex {
        DominoIndex::new(index)
    }

    fn d(a: i32, b: i32) -> Domino<i32> {
        Domino::new(a, b)
    }

    #[test]
    fn test_new_initial_state() {
        let s = SearchState::<i32>::new(3);
        assert_eq!(s.num_dominoes(), 3);
        assert_eq!(s.num_placed(), 0);
        assert!(!s.is_complete());
        assert!(!s.is_closed());
        assert_eq!(s.last_value(), None);
        assert!((0..3).all(|k| !s.is_used(i(k))));
        assert_eq!(format!("{}", s), "State(placed: 0/3)");
    }

    #[test]
    fn test_place_and_unplace_restore_state() {
        let mut s = SearchState::<i32>::new(3);
        let before = s.clone();

        s.place(i(1), d(2, 3));
        assert!(s.is_used(i(1)));
        assert!(!s.is_used(i(0)));
        assert_eq!(s.last_value(), Some(3));
        assert_eq!(s.chain(), &[d(2, 3)]);

        s.place(i(0), d(3, 1));
        assert_eq!(s.last_value(), Some(1));
        assert_eq!(format!("{}", s), "State(placed: 2/3, last: [3|1])");

        s.unplace(i(0));
        s.unplace(i(1));
        assert_eq!(s, before);
    }

    #[test]
    fn test_duplicates_are_tracked_by_position() {
        let mut s = SearchState::<i32>::new(2);
        s.place(i(0), d(1, 2));
        assert!(s.is_used(i(0)));
        assert!(!s.is_used(i(1)));
    }

    #[test]
    fn test_completion_and_closure() {
        let mut s = SearchState::<i32>::new(2);
        s.place(i(0), d(1, 2));
        assert!(!s.is_complete());
        s.place(i(1), d(2, 1));
        assert!(s.is_complete());
        assert!(s.is_closed());

        s.unplace(i(1));
        s.place(i(1), d(2, 5));
        assert!(s.is_complete());
        assert!(!s.is_closed());
    }

    #[test]
    fn test_single_double_closes_on_itself() {
        let mut s = SearchState::<i32>::new(1);
        s.place(i(0), d(4, 4));
        assert!(s.is_complete());
        assert!(s.is_closed());
    }

    #[test]
    fn test_try_into_chain() {
        let mut s = SearchState::<i32>::new(2);
        s.place(i(0), d(1, 2));

        let err = Chain::try_from(&s).unwrap_err();
        assert_eq!(err, IncompleteChainError { placed: 1, total: 2 });
        assert_eq!(err.to_string(), "incomplete chain: placed 1/2 dominoes");

        s.place(i(1), d(2, 1));
        let chain = Chain::try_from(&s).unwrap();
        assert_eq!(chain.dominoes(), &[d(1, 2), d(2, 1)]);
    }
}
