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


use std::time::Duration;

/// Statistics collected during a circular chain search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainSolverStatistics {
    /// Iterations of the main search loop.
    pub steps: u64,
    /// Partial chains visited, including the empty root.
    pub nodes_explored: u64,
    /// Dead ends left by undoing a placement.
    pub backtracks: u64,
    /// Candidate placements enqueued for exploration.
    pub placements_generated: u64,
    /// Complete chains rejected because the last value did not meet the first.
    pub closure_rejections: u64,
    /// The deepest chain length reached.
    pub max_depth: u64,
    /// Circular chains found.
    pub chains_found: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl ChainSolverStatistics {
    #[inline]
    pub fn on_step(&mut self) {
        self.steps = self.steps.saturating_add(1);
    }

    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add(1);
    }

    #[inline]
    pub fn on_placements_generated(&mut self, count: usize) {
        self.placements_generated = self.placements_generated.saturating_add(count as u64);
    }

    #[inline]
    pub fn on_closure_rejected(&mut self) {
        self.closure_rejections = self.closure_rejections.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn on_chain_found(&mut self) {
        self.chains_found = self.chains_found.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for ChainSolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Chain Solver Statistics:")?;
        writeln!(f, "  Steps:                {}", self.steps)?;
        writeln!(f, "  Nodes explored:       {}", self.nodes_explored)?;
        writeln!(f, "  Backtracks:           {}", self.backtracks)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        writeln!(f, "  Placements generated: {}", self.placements_generated)?;
        writeln!(f, "  Closure rejections:   {}", self.closure_rejections)?;
        writeln!(f, "  Chains found:         {}", self.chains_found)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero_and_increment() {
        let mut s = ChainSolverStatistics::default();
        assert_eq!(s.nodes_explored, 0);

        s.on_step();
        s.on_node_explored();
        s.on_node_explored();
        s.on_backtrack();
        s.on_placements_generated(6);
        s.on_closure_rejected();
        s.on_chain_found();

        assert_eq!(s.steps, 1);
        assert_eq!(s.nodes_explored, 2);
        assert_eq!(s.backtracks, 1);
        assert_eq!(s.placements_generated, 6);
        assert_eq!(s.closure_rejections, 1);
        assert_eq!(s.chains_found, 1);
    }

    #[test]
    fn test_max_depth_keeps_maximum() {
        let mut s = ChainSolverStatistics::default();
        s.on_depth_update(3);
        s.on_depth_update(1);
        assert_eq!(s.max_depth, 3);
    }

    #[test]
    fn test_counters_saturate() {
        let mut s = ChainSolverStatistics {
            backtracks: u64::MAX,
            ..Default::default()
        };
        s.on_backtrack();
        assert_eq!(s.backtracks, u64::MAX);
    }

    #[test]
    fn test_display_lists_counters() {
        let s = ChainSolverStatistics {
            nodes_explored: 12,
            ..Default::default()
        };
        let text = format!("{}", s);
        assert!(text.starts_with("Chain Solver Statistics:"));
        assert!(text.contains("Nodes explored:       12"));
    }
}
