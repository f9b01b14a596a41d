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


//! Progress logging for tree search
//!
//! `LogTreeSearchMonitor` reports search progress through `tracing` events:
//! one `info` event when the search starts, periodic `info` progress lines
//! while descending, and a summary when it ends. Clock reads are gated by a
//! node mask so the monitor stays cheap in the hot loop. Installing a
//! subscriber is left to the application.

use crate::{
    monitor::tree_search_monitor::TreeSearchMonitor, placement::Placement, state::SearchState,
    stats::ChainSolverStatistics,
};
use domino_model::{chain::Chain, domino::Domino};
use num_traits::PrimInt;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct LogTreeSearchMonitor<T> {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    num_dominoes: usize,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> LogTreeSearchMonitor<T> {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            num_dominoes: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the configured interval between progress lines.
    #[inline]
    pub fn log_interval(&self) -> Duration {
        self.log_interval
    }

    #[inline(always)]
    fn log_progress(&mut self, state: &SearchState<T>, stats: &ChainSolverStatistics)
    where
        T: PrimInt,
    {
        let now = Instant::now();
        info!(
            elapsed_s = now.duration_since(self.start_time).as_secs_f32(),
            nodes = stats.nodes_explored,
            placed = state.num_placed(),
            total = self.num_dominoes,
            max_depth = stats.max_depth,
            backtracks = stats.backtracks,
            closure_rejections = stats.closure_rejections,
            "chain search progress"
        );
        self.last_log_time = now;
    }
}

impl<T> Default for LogTreeSearchMonitor<T> {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<T> std::fmt::Display for LogTreeSearchMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogTreeSearchMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> TreeSearchMonitor<T> for LogTreeSearchMonitor<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn name(&self) -> &str {
        "LogTreeSearchMonitor"
    }

    fn on_enter_search(&mut self, dominoes: &[Domino<T>], _statistics: &ChainSolverStatistics) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.num_dominoes = dominoes.len();
        info!(num_dominoes = dominoes.len(), "chain search started");
    }

    fn on_exit_search(&mut self, statistics: &ChainSolverStatistics) {
        info!(
            nodes = statistics.nodes_explored,
            backtracks = statistics.backtracks,
            chains_found = statistics.chains_found,
            elapsed = ?statistics.time_total,
            "chain search finished"
        );
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
        state: &SearchState<T>,
        _placement: Placement,
        statistics: &ChainSolverStatistics,
    ) {
        if (statistics.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_progress(state, statistics);
        }
    }

    fn on_closure_rejected(&mut self, _state: &SearchState<T>, _statistics: &ChainSolverStatistics) {
    }

    fn on_backtrack(&mut self, _state: &SearchState<T>, _statistics: &ChainSolverStatistics) {}

    fn on_chain_found(&mut self, chain: &Chain<T>, statistics: &ChainSolverStatistics) {
        info!(
            length = chain.len(),
            nodes = statistics.nodes_explored,
            "circular chain found"
        );
        debug!(chain = %chain, "found chain");
    }
}
