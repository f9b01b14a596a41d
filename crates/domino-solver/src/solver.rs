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


//! Depth-first backtracking search for circular domino chains.
//!
//! `ChainSolver` decides whether a set of dominoes can be laid out as one
//! closed ring in which neighbouring halves match and the last domino meets
//! the first. The search is exhaustive and deterministic: input positions are
//! tried in order, each one forward before flipped, and the first complete
//! closed arrangement in that depth-first order is returned.
//!
//! Instead of recursing, a search session drives an explicit decision stack
//! (pending placements per level, pushed in reverse so they pop in order) and
//! an undo trail (applied placements per level). Every placement is paired
//! with its exact inverse on backtrack, so the session always ends with the
//! usage markers and the partial chain restored. The solver keeps the stack
//! and trail allocations between runs and resets them after each solve.
//!
//! `find_circular_chain` wraps the engine for callers that only need the
//! chain or its absence.

use crate::{
    monitor::{
        no_op::NoOperationMonitor,
        tree_search_monitor::{SearchCommand, TreeSearchMonitor},
    },
    placement::Placement,
    result::{ChainSolverOutcome, TerminationReason},
    stack::SearchStack,
    state::SearchState,
    stats::ChainSolverStatistics,
    trail::SearchTrail,
};
use domino_model::{chain::Chain, domino::Domino, index::DominoIndex};
use num_traits::PrimInt;
use tracing::debug;

/// Returns a closed circular chain using every domino of `dominoes` exactly once,
/// or `None` if no such arrangement exists or the input is empty.
///
/// The input is never modified. For an absent collection use
/// `dominoes.and_then(find_circular_chain)`.
///
/// ```
/// use domino_model::domino::Domino;
/// use domino_solver::find_circular_chain;
///
/// let set = [Domino::new(2, 1), Domino::new(2, 3), Domino::new(1, 3)];
/// let chain = find_circular_chain(&set).unwrap();
/// assert!(chain.is_circular());
/// assert_eq!(chain.len(), 3);
///
/// assert!(find_circular_chain(&[Domino::new(1, 2)]).is_none());
/// ```
pub fn find_circular_chain<T>(dominoes: &[Domino<T>]) -> Option<Chain<T>>
where
    T: PrimInt,
{
    let mut solver = ChainSolver::preallocated(dominoes.len());
    solver
        .solve(dominoes, NoOperationMonitor::new())
        .into_chain()
}

/// A backtracking search engine for circular domino chains.
///
/// The solver only owns reusable buffers. All per-run state lives in a
/// search session, so one solver can serve any number of sequential solves.
#[derive(Debug, Clone)]
pub struct ChainSolver<T> {
    trail: SearchTrail,
    stack: SearchStack,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for ChainSolver<T>
where
    T: PrimInt,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ChainSolver<T>
where
    T: PrimInt,
{
    /// Create a new chain solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            trail: SearchTrail::new(),
            stack: SearchStack::new(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Create a new chain solver with storage preallocated
    /// for inputs of `num_dominoes` dominoes.
    ///
    /// # Note
    ///
    /// Every solve ensures sufficient capacity on its own. Preallocating only
    /// moves the allocations to construction time.
    #[inline]
    pub fn preallocated(num_dominoes: usize) -> Self {
        Self {
            trail: SearchTrail::preallocated(num_dominoes),
            stack: SearchStack::preallocated(num_dominoes),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Searches for a circular chain over `dominoes`, reporting to `monitor`.
    pub fn solve<S>(&mut self, dominoes: &[Domino<T>], mut monitor: S) -> ChainSolverOutcome<T>
    where
        S: TreeSearchMonitor<T>,
    {
        let session = ChainSearchSession::new(self, dominoes, &mut monitor);
        let outcome = session.run();
        self.reset();
        outcome
    }

    /// Returns the memory currently held by the trail and stack, in bytes.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        self.trail.allocated_memory_bytes() + self.stack.allocated_memory_bytes()
    }

    /// Clears the logical contents of the trail and stack, keeping their capacity.
    #[inline]
    fn reset(&mut self) {
        self.trail.reset();
        self.stack.reset();
    }
}

/// The state and logic of a single search run.
struct ChainSearchSession<'a, T, S>
where
    T: PrimInt,
{
    solver: &'a mut ChainSolver<T>,
    dominoes: &'a [Domino<T>],
    monitor: &'a mut S,
    state: SearchState<T>,
    found: Option<Chain<T>>,
    stats: ChainSolverStatistics,
    start_time: std::time::Instant,
}

impl<'a, T, S> std::fmt::Debug for ChainSearchSession<'a, T, S>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainSearchSession")
            .field("dominoes", &self.dominoes)
            .field("state", &self.state)
            .field("found", &self.found)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, T, S> ChainSearchSession<'a, T, S>
where
    T: PrimInt,
    S: TreeSearchMonitor<T>,
{
    #[inline]
    fn new(solver: &'a mut ChainSolver<T>, dominoes: &'a [Domino<T>], monitor: &'a mut S) -> Self {
        Self {
            solver,
            dominoes,
            monitor,
            state: SearchState::new(dominoes.len()),
            found: None,
            stats: ChainSolverStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    fn run(mut self) -> ChainSolverOutcome<T> {
        self.monitor.on_enter_search(self.dominoes, &self.stats);

        if self.dominoes.is_empty() {
            return self.finalize(TerminationReason::EmptyInput);
        }

        self.initialize();

        let termination_reason = loop {
            self.monitor.on_step(&self.state, &self.stats);
            self.stats.on_step();

            if let SearchCommand::Terminate(msg) =
                self.monitor.search_command(&self.state, &self.stats)
            {
                break TerminationReason::Aborted(msg);
            }

            if self.solver.stack.is_current_level_empty() {
                if self.solver.stack.depth() <= 1 {
                    break TerminationReason::SearchExhausted;
                }
                self.backtrack_step();
            } else if self.process_next_placement() {
                break TerminationReason::ChainFound;
            }
        };

        self.finalize(termination_reason)
    }

    /// Consumes the session and builds the outcome for `reason`.
    fn finalize(mut self, reason: TerminationReason) -> ChainSolverOutcome<T> {
        self.solver.trail.clear(&mut self.state);
        debug_assert!(self.solver.trail.is_empty());
        debug_assert_eq!(self.state.num_placed(), 0);

        self.stats.set_total_time(self.start_time.elapsed());
        debug!(
            num_dominoes = self.dominoes.len(),
            reason = %reason,
            nodes = self.stats.nodes_explored,
            "chain search terminated"
        );
        self.monitor.on_exit_search(&self.stats);

        match (reason, self.found) {
            (TerminationReason::ChainFound, Some(chain)) => {
                ChainSolverOutcome::found(chain, self.stats)
            }
            (TerminationReason::EmptyInput, _) => ChainSolverOutcome::empty_input(self.stats),
            (TerminationReason::Aborted(msg), _) => ChainSolverOutcome::aborted(msg, self.stats),
            _ => ChainSolverOutcome::exhausted(self.stats),
        }
    }

    /// Opens the root level and enqueues the unconstrained first placements.
    #[inline]
    fn initialize(&mut self) {
        let num_dominoes = self.dominoes.len();
        self.solver.trail.ensure_capacity(num_dominoes);
        self.solver.stack.ensure_capacity(num_dominoes);
        debug_assert!(self.solver.trail.is_empty() && self.solver.stack.is_empty());

        // Root frame. Must exist before any placement is enqueued.
        self.solver.trail.push_frame();
        self.solver.stack.push_frame();
        self.stats.on_node_explored();

        self.expand();
    }

    #[inline]
    fn backtrack_step(&mut self) {
        self.stats.on_backtrack();
        self.monitor.on_backtrack(&self.state, &self.stats);
        debug_assert_eq!(self.solver.trail.depth(), self.solver.stack.depth());

        self.solver.trail.backtrack(&mut self.state);
        self.solver.stack.pop_frame();
    }

    /// Takes the next pending placement of the current level and descends into it.
    /// Returns `true` once a closed chain has been found.
    #[inline(always)]
    fn process_next_placement(&mut self) -> bool {
        match self.solver.stack.pop() {
            Some(placement) => self.descend(placement),
            None => false,
        }
    }

    #[inline(always)]
    fn descend(&mut self, placement: Placement) -> bool {
        self.solver.trail.push_frame();
        self.solver
            .trail
            .apply_placement(&mut self.state, self.dominoes, placement);
        self.solver.stack.push_frame();

        self.stats.on_node_explored();
        self.stats.on_depth_update(self.state.num_placed() as u64);
        self.monitor.on_descend(&self.state, placement, &self.stats);

        if self.state.is_complete() {
            return self.handle_complete_chain();
        }

        self.expand();
        false
    }

    /// Accepts the full arrangement if it closes, otherwise backtracks out of it.
    #[inline(always)]
    fn handle_complete_chain(&mut self) -> bool {
        debug_assert_eq!(self.solver.trail.num_entries(), self.state.num_placed());
        debug_assert!(
            self.solver
                .trail
                .iter_entries()
                .all(|placement| self.state.is_used(placement.domino_index()))
        );

        if self.state.is_closed() {
            if let Ok(chain) = Chain::try_from(&self.state) {
                self.stats.on_chain_found();
                self.monitor.on_chain_found(&chain, &self.stats);
                self.found = Some(chain);
                return true;
            }
        }

        self.stats.on_closure_rejected();
        self.monitor.on_closure_rejected(&self.state, &self.stats);
        self.backtrack_step();
        false
    }

    /// Enqueues every placement that extends the partial chain.
    ///
    /// Positions are walked in reverse and flipped is pushed before forward,
    /// so pops yield position 0 forward, position 0 flipped, position 1 forward
    /// and so on. A double matches both ways and is enqueued twice.
    #[inline(always)]
    fn expand(&mut self) {
        let last_value = self.state.last_value();
        let count_before = self.solver.stack.num_entries();

        for index in (0..self.dominoes.len()).rev() {
            let domino_index = DominoIndex::new(index);
            if self.state.is_used(domino_index) {
                continue;
            }

            let domino = self.dominoes[index];
            if last_value.is_none_or(|value| domino.second() == value) {
                self.solver.stack.push(Placement::flipped(domino_index));
            }
            if last_value.is_none_or(|value| domino.first() == value) {
                self.solver.stack.push(Placement::forward(domino_index));
            }
        }

        let added = self.solver.stack.num_entries() - count_before;
        debug_assert_eq!(self.solver.stack.current_frame_entries().len(), added);
        self.stats.on_placements_generated(added);
        self.monitor
            .on_placements_enqueued(&self.state, added, &self.stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{
        composite::CompositeTreeSearchMonitor, log::LogTreeSearchMonitor,
        node_limit::NodeLimitMonitor, time::TimeLimitMonitor,
    };
    use crate::result::SolverResult;
    use rand::{Rng, SeedableRng, seq::SliceRandom};
    use rand_chacha::ChaCha8Rng;
    use std::time::Duration;

    type IntegerType = i64;

    fn d(a: IntegerType, b: IntegerType) -> Domino<IntegerType> {
        Domino::new(a, b)
    }

    fn set(pairs: &[(IntegerType, IntegerType)]) -> Vec<Domino<IntegerType>> {
        pairs.iter().map(|&(a, b)| d(a, b)).collect()
    }

    fn assert_valid_ring(input: &[Domino<IntegerType>], chain: &Chain<IntegerType>) {
        assert_eq!(chain.len(), input.len());
        assert!(chain.is_circular());
        chain
            .verify_arrangement_of(input)
            .unwrap_or_else(|e| panic!("invalid chain {} for {:?}: {}", chain, input, e));
    }

    /// A multiset of dominoes closes into one ring iff every pip value has even
    /// degree and all dominoes lie in one connected component.
    fn has_ring(input: &[Domino<IntegerType>]) -> bool {
        if input.is_empty() {
            return false;
        }

        let mut degree = [0usize; 16];
        let mut parent: Vec<usize> = (0..16).collect();
        fn root(parent: &mut [usize], mut x: usize) -> usize {
            while parent[x] != x {
                parent[x] = parent[parent[x]];
                x = parent[x];
            }
            x
        }

        for domino in input {
            let (a, b) = (domino.first() as usize, domino.second() as usize);
            degree[a] += 1;
            degree[b] += 1;
            let (ra, rb) = (root(&mut parent, a), root(&mut parent, b));
            parent[ra] = rb;
        }

        if degree.iter().any(|deg| deg % 2 != 0) {
            return false;
        }

        let anchor = root(&mut parent, input[0].first() as usize);
        input
            .iter()
            .all(|domino| root(&mut parent, domino.first() as usize) == anchor)
    }

    #[test]
    fn test_scenarios_with_a_ring() {
        let cases = [
            set(&[(2, 1), (2, 3), (1, 3)]),
            set(&[(6, 3), (3, 4), (4, 6)]),
            set(&[(1, 1), (1, 2), (2, 1)]),
            set(&[(5, 2), (2, 3), (3, 4), (4, 5)]),
            set(&[(1, 1)]),
        ];

        for input in cases.iter() {
            let chain = find_circular_chain(input)
                .unwrap_or_else(|| panic!("expected a ring for {:?}", input));
            assert_valid_ring(input, &chain);
        }
    }

    #[test]
    fn test_scenarios_without_a_ring() {
        let cases = [
            set(&[(1, 4), (2, 3), (4, 5)]),
            set(&[(1, 2), (3, 4), (5, 6)]),
            set(&[(1, 2)]),
            set(&[(1, 2), (4, 1), (2, 3)]),
            Vec::new(),
        ];

        for input in cases.iter() {
            assert_eq!(find_circular_chain(input), None, "input {:?}", input);
        }
    }

    #[test]
    fn test_absent_collection_is_absent() {
        let absent: Option<&[Domino<IntegerType>]> = None;
        assert_eq!(absent.and_then(find_circular_chain), None);

        let present = set(&[(1, 1)]);
        let some: Option<&[Domino<IntegerType>]> = Some(&present);
        assert_eq!(some.and_then(find_circular_chain), Some(Chain::new(vec![d(1, 1)])));
    }

    #[test]
    fn test_first_chain_follows_input_order() {
        // Position 0 forward, then position 2 forward, then position 1 flipped.
        let input = set(&[(2, 1), (2, 3), (1, 3)]);
        let chain = find_circular_chain(&input).unwrap();
        assert_eq!(chain.dominoes(), &[d(2, 1), d(1, 3), d(3, 2)]);

        let input = set(&[(1, 1), (1, 2), (2, 1)]);
        let chain = find_circular_chain(&input).unwrap();
        assert_eq!(chain.dominoes(), &[d(1, 1), d(1, 2), d(2, 1)]);

        let input = set(&[(5, 2), (2, 3), (3, 4), (4, 5)]);
        let chain = find_circular_chain(&input).unwrap();
        assert_eq!(chain.dominoes(), &[d(5, 2), d(2, 3), d(3, 4), d(4, 5)]);
    }

    #[test]
    fn test_lone_double_is_a_one_element_ring() {
        let mut solver = ChainSolver::<IntegerType>::new();
        let outcome = solver.solve(&set(&[(4, 4)]), NoOperationMonitor::new());

        assert_eq!(outcome.termination_reason(), &TerminationReason::ChainFound);
        assert_eq!(outcome.chain(), Some(&Chain::new(vec![d(4, 4)])));
        assert_eq!(outcome.statistics().chains_found, 1);
    }

    #[test]
    fn test_lone_non_double_exhausts_both_orientations() {
        let mut solver = ChainSolver::<IntegerType>::new();
        let outcome = solver.solve(&set(&[(1, 2)]), NoOperationMonitor::new());

        assert_eq!(outcome.result(), &SolverResult::NotFound);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::SearchExhausted
        );

        let stats = outcome.statistics();
        assert_eq!(stats.placements_generated, 2);
        assert_eq!(stats.closure_rejections, 2);
        assert_eq!(stats.nodes_explored, 3);
        assert_eq!(stats.max_depth, 1);
    }

    #[test]
    fn test_empty_input_reports_empty_input() {
        let mut solver = ChainSolver::<IntegerType>::new();
        let outcome = solver.solve(&[], NoOperationMonitor::new());

        assert_eq!(outcome.result(), &SolverResult::NotFound);
        assert_eq!(outcome.termination_reason(), &TerminationReason::EmptyInput);
        assert_eq!(outcome.statistics().steps, 0);
        assert_eq!(outcome.statistics().nodes_explored, 0);
    }

    #[test]
    fn test_doubles_are_enqueued_in_both_orientations() {
        // (3,3) matches either way, so it yields two placements after [1|3].
        let input = set(&[(1, 3), (3, 3), (3, 1)]);
        let chain = find_circular_chain(&input).unwrap();
        assert_valid_ring(&input, &chain);
        assert_eq!(chain.dominoes(), &[d(1, 3), d(3, 3), d(3, 1)]);

        // Only doubles that share a value can close.
        assert!(find_circular_chain(&set(&[(2, 2), (2, 2), (2, 2)])).is_some());
        assert!(find_circular_chain(&set(&[(1, 1), (2, 2)])).is_none());
    }

    #[test]
    fn test_negative_and_zero_pips() {
        let input = set(&[(-1, 0), (0, -7), (-7, -1)]);
        let chain = find_circular_chain(&input).unwrap();
        assert_valid_ring(&input, &chain);

        let input: Vec<Domino<u8>> = vec![Domino::new(0, 255), Domino::new(255, 0)];
        let chain = find_circular_chain(&input).unwrap();
        assert!(chain.is_circular());
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = set(&[(2, 1), (2, 3), (1, 3)]);
        let copy = input.clone();
        let _ = find_circular_chain(&input);
        assert_eq!(input, copy);
    }

    #[test]
    fn test_determinism_across_runs_and_solvers() {
        let input = set(&[(1, 2), (2, 3), (3, 1), (1, 4), (4, 5), (5, 1)]);
        let first = find_circular_chain(&input).unwrap();

        let mut solver = ChainSolver::preallocated(input.len());
        for _ in 0..5 {
            let outcome = solver.solve(&input, NoOperationMonitor::new());
            assert_eq!(outcome.chain(), Some(&first));
        }
    }

    #[test]
    fn test_solver_is_clean_after_each_solve() {
        let mut solver = ChainSolver::<IntegerType>::preallocated(4);
        let inputs = [
            set(&[(5, 2), (2, 3), (3, 4), (4, 5)]),
            set(&[(1, 4), (2, 3), (4, 5)]),
            set(&[(1, 1)]),
            Vec::new(),
        ];

        for input in inputs.iter() {
            let _ = solver.solve(input, NoOperationMonitor::new());
            assert!(solver.trail.is_empty());
            assert_eq!(solver.trail.num_entries(), 0);
            assert!(solver.stack.is_empty());
            assert_eq!(solver.stack.num_entries(), 0);
        }
    }

    #[test]
    fn test_solver_reuse_with_different_sizes() {
        let mut solver = ChainSolver::<IntegerType>::new();

        let small = set(&[(1, 1)]);
        assert!(solver.solve(&small, NoOperationMonitor::new()).result().is_found());

        let larger = set(&[(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 1)]);
        let outcome = solver.solve(&larger, NoOperationMonitor::new());
        assert_valid_ring(&larger, outcome.chain().unwrap());
        assert!(solver.allocated_memory_bytes() > 0);

        let none = set(&[(1, 2), (3, 4)]);
        assert!(!solver.solve(&none, NoOperationMonitor::new()).result().is_found());
    }

    #[test]
    fn test_statistics_are_coherent() {
        let input = set(&[(1, 4), (2, 3), (4, 5)]);
        let mut solver = ChainSolver::<IntegerType>::new();
        let outcome = solver.solve(&input, NoOperationMonitor::new());
        let stats = outcome.statistics();

        assert_eq!(stats.chains_found, 0);
        assert!(stats.steps >= stats.nodes_explored);
        // Every node but the root is entered through one generated placement.
        assert_eq!(stats.nodes_explored, stats.placements_generated + 1);
        // Every non-root node is left through exactly one backtrack.
        assert_eq!(stats.backtracks, stats.nodes_explored - 1);
        assert!(stats.max_depth <= input.len() as u64);
    }

    #[test]
    fn test_node_limit_aborts_distinct_from_exhaustion() {
        // No ring exists; a full search would prove it.
        let input = set(&[(1, 2), (2, 3), (3, 1), (1, 2), (2, 3), (3, 4)]);
        let mut solver = ChainSolver::<IntegerType>::new();

        let outcome = solver.solve(&input, NodeLimitMonitor::new(5));
        assert_eq!(outcome.result(), &SolverResult::NotFound);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::Aborted("node limit reached".to_string())
        );
        assert!(outcome.statistics().nodes_explored >= 5);

        let outcome = solver.solve(&input, NoOperationMonitor::new());
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::SearchExhausted
        );
    }

    #[test]
    fn test_time_limit_zero_aborts_on_first_step() {
        let input = set(&[(1, 2), (2, 3), (3, 1)]);
        let mut solver = ChainSolver::<IntegerType>::new();
        let outcome = solver.solve(
            &input,
            TimeLimitMonitor::with_clock_check_mask(Duration::ZERO, 0),
        );

        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::Aborted("time limit exceeded".to_string())
        );
        assert_eq!(outcome.statistics().steps, 1);
        assert!(solver.trail.is_empty());
        assert!(solver.stack.is_empty());
    }

    #[test]
    fn test_composite_with_log_monitor_does_not_change_the_result() {
        let input = set(&[(5, 2), (2, 3), (3, 4), (4, 5)]);
        let expected = find_circular_chain(&input);

        let mut composite = CompositeTreeSearchMonitor::new();
        composite.add_monitor(LogTreeSearchMonitor::new(Duration::ZERO, 0));
        composite.add_monitor(TimeLimitMonitor::new(Duration::from_secs(3600)));

        let mut solver = ChainSolver::<IntegerType>::new();
        let outcome = solver.solve(&input, composite);
        assert_eq!(outcome.termination_reason(), &TerminationReason::ChainFound);
        assert_eq!(outcome.chain(), expected.as_ref());
    }

    #[test]
    fn test_random_rings_are_always_found() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..200 {
            let len = rng.random_range(1..=8);
            let values: Vec<IntegerType> = (0..len).map(|_| rng.random_range(0..7)).collect();

            // Closed walk over `values`, then shuffled and randomly flipped.
            let mut input: Vec<Domino<IntegerType>> = (0..len)
                .map(|i| d(values[i], values[(i + 1) % len]))
                .map(|domino| if rng.random_bool(0.5) { domino.flip() } else { domino })
                .collect();
            input.shuffle(&mut rng);

            let chain = find_circular_chain(&input)
                .unwrap_or_else(|| panic!("expected a ring for {:?}", input));
            assert_valid_ring(&input, &chain);
        }
    }

    #[test]
    fn test_random_sets_match_the_degree_criterion() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..300 {
            let len = rng.random_range(0..=7);
            let input: Vec<Domino<IntegerType>> = (0..len)
                .map(|_| d(rng.random_range(0..5), rng.random_range(0..5)))
                .collect();

            match find_circular_chain(&input) {
                Some(chain) => {
                    assert!(has_ring(&input), "unexpected ring for {:?}", input);
                    assert_valid_ring(&input, &chain);
                }
                None => assert!(!has_ring(&input), "missed ring for {:?}", input),
            }
        }
    }
}
