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


//! Node limit monitor for tree search
//!
//! `NodeLimitMonitor` stops the search once a configured number of partial
//! chains has been explored. Unlike the time limit it is deterministic, which
//! makes it the budget of choice in tests and reproducible runs.

use crate::{
    monitor::tree_search_monitor::{SearchCommand, TreeSearchMonitor},
    placement::Placement,
    state::SearchState,
    stats::ChainSolverStatistics,
};
use domino_model::{chain::Chain, domino::Domino};
use num_traits::PrimInt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLimitMonitor<T> {
    node_limit: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NodeLimitMonitor<T> {
    /// Creates a new `NodeLimitMonitor` with the specified node limit.
    pub fn new(node_limit: u64) -> Self {
        Self {
            node_limit,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> TreeSearchMonitor<T> for NodeLimitMonitor<T>
where
    T: PrimInt,
{
    fn name(&self) -> &str {
        "NodeLimitMonitor"
    }

    fn on_enter_search(&mut self, _dominoes: &[Domino<T>], _statistics: &ChainSolverStatistics) {}

    fn on_exit_search(&mut self, _statistics: &ChainSolverStatistics) {}

    fn search_command(
        &mut self,
        _state: &SearchState<T>,
        statistics: &ChainSolverStatistics,
    ) -> SearchCommand {
        if statistics.nodes_explored >= self.node_limit {
            SearchCommand::Terminate("node limit reached".to_string())
        } else {
            SearchCommand::Continue
        }
    }

    fn on_step(&mut self, _state: &SearchState<T>, _statistics: &ChainSolverStatistics) {}

    fn on_placements_enqueued(
        &mut self,
        _state: &SearchState<T>,
        _count: usize,
        _statistics: &ChainSolverStatistics,
    ) {
    }

    fn on_descend(
        &mut self,
        _state: &SearchState<T>,
        _placement: Placement,
        _statistics: &ChainSolverStatistics,
    ) {
    }

    fn on_closure_rejected(&mut self, _state: &SearchState<T>, _statistics: &ChainSolverStatistics) {
    }

    fn on_backtrack(&mut self, _state: &SearchState<T>, _statistics: &ChainSolverStatistics) {}

    fn on_chain_found(&mut self, _chain: &Chain<T>, _statistics: &ChainSolverStatistics) {}
}
