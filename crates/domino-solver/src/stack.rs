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


use crate::placement::Placement;

/// A frame-structured LIFO stack of pending placements.
///
/// `SearchStack` stores all enqueued `Placement`s linearly and uses a
/// `frames` index stack to mark decision-level boundaries. Popping a frame
/// truncates the `entries` back to the recorded start index, discarding the
/// siblings that were not tried.
///
/// Placements of a level are pushed in reverse of the order in which they
/// should be tried, so that `pop` yields them in the intended order.
#[derive(Clone, Debug, Default)]
pub struct SearchStack {
    /// The linear stack of pending placements.
    entries: Vec<Placement>,
    /// `frames[i]` stores the index in `entries` where depth `i` began.
    frames: Vec<usize>,
}

impl SearchStack {
    /// Creates a new, empty `SearchStack`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Creates a preallocated `SearchStack` for an input of `num_dominoes`.
    #[inline]
    pub fn preallocated(num_dominoes: usize) -> Self {
        let (entry_capacity, frame_capacity) = Self::capacities(num_dominoes);

        Self {
            entries: Vec::with_capacity(entry_capacity),
            frames: Vec::with_capacity(frame_capacity),
        }
    }

    /// Ensures the stack has capacity for an input of `num_dominoes`.
    #[inline]
    pub fn ensure_capacity(&mut self, num_dominoes: usize) {
        let (entry_capacity, frame_capacity) = Self::capacities(num_dominoes);

        if self.entries.capacity() < entry_capacity {
            self.entries.reserve(entry_capacity - self.entries.len());
        }
        if self.frames.capacity() < frame_capacity {
            self.frames.reserve(frame_capacity - self.frames.len());
        }
    }

    /// Worst-case sizes along one root-to-leaf path: a level with `k` unused
    /// dominoes holds at most `2k` placements, so `n(n + 1)` entries in total.
    #[inline]
    fn capacities(num_dominoes: usize) -> (usize, usize) {
        let entries = num_dominoes.saturating_mul(num_dominoes.saturating_add(1));
        let frames = num_dominoes.saturating_add(1);
        (entries, frames)
    }

    /// Returns the number of pending placements in the stack.
    #[inline]
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    /// Returns the current search depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if there are no frames tracked (search exhausted).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Pushes a new frame onto the stack.
    #[inline]
    pub fn push_frame(&mut self) {
        self.frames.push(self.entries.len());
    }

    /// Pops the current frame, dropping its untried placements.
    #[inline]
    pub fn pop_frame(&mut self) -> Option<()> {
        let start = self.frames.pop()?;
        self.entries.truncate(start);
        Some(())
    }

    /// Pushes a single placement onto the stack.
    #[inline]
    pub fn push(&mut self, placement: Placement) {
        self.entries.push(placement);
    }

    /// Pops the next placement (LIFO) from the current frame.
    ///
    /// Returns `None` if the current frame has no pending placements,
    /// even if enclosing frames still hold some.
    #[inline]
    pub fn pop(&mut self) -> Option<Placement> {
        if self.is_current_level_empty() {
            return None;
        }
        self.entries.pop()
    }

    /// Clears all entries and frames, but keeps allocated capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
        self.frames.clear();
    }

    /// Returns `true` if the current level has no remaining placements.
    #[inline]
    pub fn is_current_level_empty(&self) -> bool {
        match self.frames.last() {
            Some(&start) => self.entries.len() == start,
            None => true,
        }
    }

    /// Returns the pending placements of the current frame, next to be tried last.
    #[inline]
    pub fn current_frame_entries(&self) -> &[Placement] {
        match self.frames.last() {
            Some(&start) => &self.entries[start..],
            None => &[],
        }
    }

    /// Returns the total allocated memory in bytes.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        let entries_size = self.entries.capacity() * std::mem::size_of::<Placement>();
        let frames_size = self.frames.capacity() * std::mem::size_of::<usize>();
        entries_size + frames_size
    }
}

impl Extend<Placement> for SearchStack {
    #[inline]
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Placement>,
    {
        self.entries.extend(iter);
    }
}

impl std::fmt::Display for SearchStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchStack(entries: {}, frames: {})",
            self.entries.len(),
            self.frames.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domino_model::index::DominoIndex;

    fn fwd(i: usize) -> Placement {
        Placement::forward(DominoIndex::new(i))
    }

    fn flp(i: usize) -> Placement {
        Placement::flipped(DominoIndex::new(i))
    }

    #[test]
    fn test_new_and_preallocated_basic_props() {
        let s = SearchStack::new();
        assert_eq!(s.num_entries(), 0);
        assert_eq!(s.depth(), 0);
        assert!(s.is_empty());
        assert!(s.is_current_level_empty());
        assert_eq!(s.current_frame_entries(), &[]);
        assert_eq!(format!("{}", s), "SearchStack(entries: 0, frames: 0)");

        let s2 = SearchStack::preallocated(5);
        assert!(s2.is_empty());
        assert!(s2.entries.capacity() >= 30);
        assert!(s2.frames.capacity() >= 6);
    }

    #[test]
    fn test_ensure_capacity_grows_but_is_idempotent_when_large_enough() {
        let mut s = SearchStack::preallocated(2);
        s.ensure_capacity(7);
        let ecap = s.entries.capacity();
        let fcap = s.frames.capacity();
        assert!(ecap >= 56);
        assert!(fcap >= 8);

        s.ensure_capacity(1);
        assert_eq!(s.entries.capacity(), ecap);
        assert_eq!(s.frames.capacity(), fcap);
    }

    #[test]
    fn test_pop_stays_within_current_frame() {
        let mut s = SearchStack::new();

        s.push_frame();
        s.extend([flp(1), fwd(1)]);

        s.push_frame();
        s.push(fwd(0));
        assert_eq!(s.current_frame_entries(), &[fwd(0)]);
        assert_eq!(s.pop(), Some(fwd(0)));

        // Parent frame entries are not visible until the frame is popped
        assert!(s.is_current_level_empty());
        assert_eq!(s.pop(), None);

        assert!(s.pop_frame().is_some());
        assert_eq!(s.pop(), Some(fwd(1)));
        assert_eq!(s.pop(), Some(flp(1)));
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn test_pop_frame_discards_untried_siblings() {
        let mut s = SearchStack::new();
        s.push_frame();
        s.push(fwd(0));

        s.push_frame();
        s.extend([fwd(2), flp(1), fwd(1)]);
        assert_eq!(s.num_entries(), 4);

        assert!(s.pop_frame().is_some());
        assert_eq!(s.num_entries(), 1);
        assert_eq!(s.current_frame_entries(), &[fwd(0)]);
    }

    #[test]
    fn test_pop_frame_noop_when_empty() {
        let mut s = SearchStack::new();
        assert_eq!(s.pop_frame(), None);

        s.push_frame();
        assert!(s.pop_frame().is_some());
        assert!(s.is_empty());
    }

    #[test]
    fn test_reset_clears_but_keeps_capacity() {
        let mut s = SearchStack::preallocated(3);
        let ecap = s.entries.capacity();
        let fcap = s.frames.capacity();

        s.push_frame();
        s.extend([fwd(0), flp(0)]);
        s.reset();

        assert_eq!(s.num_entries(), 0);
        assert!(s.is_empty());
        assert_eq!(s.entries.capacity(), ecap);
        assert_eq!(s.frames.capacity(), fcap);
    }
}
