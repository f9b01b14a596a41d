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


use crate::{placement::Placement, state::SearchState};
use domino_model::domino::Domino;
use num_traits::PrimInt;

/// A linear undo log with frame markers for backtracking.
///
/// `SearchTrail` records every placement applied to `SearchState` along with
/// frame boundaries, so that a backtrack undoes exactly the placements made
/// since the frame was opened, in reverse order. Typical usage:
/// 1. Call `push_frame()` before descending into a decision level,
/// 2. For each applied decision, call `apply_placement(...)`,
/// 3. On a dead end, call `backtrack(state)` to restore the state to the start of the frame.
///
/// Every mutation of the state made through the trail is paired with its
/// exact inverse, so the state after `backtrack` equals the state before the
/// matching `push_frame`.
#[derive(Debug, Clone, Default)]
pub struct SearchTrail {
    /// The linear history of all placements made to the state.
    entries: Vec<Placement>,
    /// `frames[i]` stores the index in `entries` where depth `i` began.
    frames: Vec<usize>,
}

impl SearchTrail {
    /// Creates a new, empty `SearchTrail`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Creates a new `SearchTrail` preallocating space for an input of `num_dominoes`.
    ///
    /// A chain never holds more than `num_dominoes` placements, and there is
    /// one frame per placement plus the root.
    #[inline]
    pub fn preallocated(num_dominoes: usize) -> Self {
        Self {
            entries: Vec::with_capacity(num_dominoes),
            frames: Vec::with_capacity(num_dominoes.saturating_add(1)),
        }
    }

    /// Ensures the trail has capacity for an input of `num_dominoes`.
    pub fn ensure_capacity(&mut self, num_dominoes: usize) {
        if self.entries.capacity() < num_dominoes {
            self.entries.reserve(num_dominoes - self.entries.len());
        }
        let frame_capacity = num_dominoes.saturating_add(1);
        if self.frames.capacity() < frame_capacity {
            self.frames.reserve(frame_capacity - self.frames.len());
        }
    }

    /// Returns the number of entries in the trail.
    #[inline]
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    /// Returns the current depth of the search trail.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if there are no frames tracked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Pushes a new frame, marking the start of a new decision level.
    #[inline]
    pub fn push_frame(&mut self) {
        self.frames.push(self.entries.len());
    }

    /// Applies `placement` to the search state and records it on the trail.
    ///
    /// # Panics
    ///
    /// Panics if the placement's index is out of bounds for `dominoes`.
    /// In debug builds, also panics if the domino is already placed.
    pub fn apply_placement<T>(
        &mut self,
        state: &mut SearchState<T>,
        dominoes: &[Domino<T>],
        placement: Placement,
    ) where
        T: PrimInt,
    {
        debug_assert!(
            placement.domino_index().get() < dominoes.len(),
            "called `SearchTrail::apply_placement` with domino index out of bounds: the len is {} but the index is {}",
            dominoes.len(),
            placement.domino_index().get()
        );

        state.place(placement.domino_index(), placement.oriented(dominoes));
        self.entries.push(placement);
    }

    /// Backtracks to the previous frame, undoing all placements made since then.
    ///
    /// Does nothing if no frame is open.
    pub fn backtrack<T>(&mut self, state: &mut SearchState<T>)
    where
        T: PrimInt,
    {
        let start = match self.frames.pop() {
            Some(start) => start,
            None => return,
        };

        while self.entries.len() > start {
            if let Some(entry) = self.entries.pop() {
                state.unplace(entry.domino_index());
            }
        }
    }

    /// Clears the entire trail, undoing all placements across all frames.
    pub fn clear<T>(&mut self, state: &mut SearchState<T>)
    where
        T: PrimInt,
    {
        while let Some(entry) = self.entries.pop() {
            state.unplace(entry.domino_index());
        }
        self.frames.clear();
    }

    /// Resets the trail markers without undoing any state changes.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
        self.frames.clear();
    }

    /// Returns the total allocated memory in bytes.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        let entries_size = self.entries.capacity() * std::mem::size_of::<Placement>();
        let frames_size = self.frames.capacity() * std::mem::size_of::<usize>();
        entries_size + frames_size
    }

    /// Returns an iterator over all applied placements, oldest first.
    #[inline]
    pub fn iter_entries(&self) -> std::slice::Iter<'_, Placement> {
        self.entries.iter()
    }
}

impl std::fmt::Display for SearchTrail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchTrail(entries: {}, frames: {})",
            self.entries.len(),
            self.frames.len()
        )
    }
}
