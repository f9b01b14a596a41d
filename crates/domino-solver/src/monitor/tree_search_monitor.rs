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


//! Tree search monitoring interface
//!
//! Declares the `TreeSearchMonitor` trait and `SearchCommand` for observing
//! and controlling the chain search. Callbacks track the solver lifecycle,
//! and a monitor can stop execution via `search_command` (default: Continue).
//!
//! Lifecycle highlights
//! - enter → step → {enqueue | descend | closure rejected | backtrack} → chain found → exit
//! - `ChainSolverStatistics` is provided to every callback for telemetry.
//!
//! Design notes
//! - Methods take `&mut self`; monitors are assumed single‑threaded.
//! - Keep callbacks lightweight; avoid blocking I/O in hot paths.

use crate::{placement::Placement, state::SearchState, stats::ChainSolverStatistics};
use domino_model::{chain::Chain, domino::Domino};
use num_traits::PrimInt;

/// The action a monitor requests from the search loop.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Trait for monitoring and controlling the search process of the solver.
pub trait TreeSearchMonitor<T>
where
    T: PrimInt,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the search starts, before the empty-input check.
    fn on_enter_search(&mut self, dominoes: &[Domino<T>], statistics: &ChainSolverStatistics);
    /// Called when the search ends.
    fn on_exit_search(&mut self, statistics: &ChainSolverStatistics);
    /// Called to determine the next action of the search.
    fn search_command(
        &mut self,
        _state: &SearchState<T>,
        _statistics: &ChainSolverStatistics,
    ) -> SearchCommand {
        SearchCommand::Continue
    }
    /// Called at each step of the search.
    fn on_step(&mut self, state: &SearchState<T>, statistics: &ChainSolverStatistics);
    /// Called when candidate placements are enqueued for the current partial chain.
    fn on_placements_enqueued(
        &mut self,
        state: &SearchState<T>,
        count: usize,
        statistics: &ChainSolverStatistics,
    );
    /// Called after a placement has been applied.
    fn on_descend(
        &mut self,
        state: &SearchState<T>,
        placement: Placement,
        statistics: &ChainSolverStatistics,
    );
    /// Called when all dominoes are placed but the chain does not close.
    fn on_closure_rejected(&mut self, state: &SearchState<T>, statistics: &ChainSolverStatistics);
    /// Called before the most recent placement is undone.
    fn on_backtrack(&mut self, state: &SearchState<T>, statistics: &ChainSolverStatistics);
    /// Called when a closed chain is found.
    fn on_chain_found(&mut self, chain: &Chain<T>, statistics: &ChainSolverStatistics);
}

impl<'a, T> std::fmt::Debug for dyn TreeSearchMonitor<T> + 'a
where
    T: PrimInt,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl<'a, T> std::fmt::Display for dyn TreeSearchMonitor<T> + 'a
where
    T: PrimInt,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}
