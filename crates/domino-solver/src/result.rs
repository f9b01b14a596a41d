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


use crate::stats::ChainSolverStatistics;
use domino_model::chain::Chain;

/// What the search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult<T> {
    /// A closed circular chain using every input domino.
    Found(Chain<T>),
    /// No chain is available; see the termination reason for why.
    NotFound,
}

impl<T> SolverResult<T> {
    /// Returns `true` if a chain was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, SolverResult::Found(_))
    }

    /// Returns the chain, if one was found.
    #[inline]
    pub fn as_chain(&self) -> Option<&Chain<T>> {
        match self {
            SolverResult::Found(chain) => Some(chain),
            SolverResult::NotFound => None,
        }
    }

    /// Consumes the result and returns the chain, if one was found.
    #[inline]
    pub fn into_chain(self) -> Option<Chain<T>> {
        match self {
            SolverResult::Found(chain) => Some(chain),
            SolverResult::NotFound => None,
        }
    }

    /// Returns the found chain.
    ///
    /// # Panics
    ///
    /// Panics if no chain was found.
    #[inline]
    pub fn unwrap_found(&self) -> &Chain<T> {
        match self {
            SolverResult::Found(chain) => chain,
            SolverResult::NotFound => {
                panic!("called `SolverResult::unwrap_found()` on a `NotFound` value")
            }
        }
    }
}

impl<T> std::fmt::Display for SolverResult<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Found(chain) => write!(f, "Found({})", chain),
            SolverResult::NotFound => write!(f, "NotFound"),
        }
    }
}

/// Why the search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// A closed chain was found; the search stopped at the first one.
    ChainFound,
    /// Every ordering and orientation was tried without closing a chain.
    SearchExhausted,
    /// The input held no dominoes; nothing was searched.
    EmptyInput,
    /// A monitor stopped the search before it completed.
    /// The string contains information about the reason for abortion.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::ChainFound => write!(f, "Chain Found"),
            TerminationReason::SearchExhausted => write!(f, "Search Exhausted"),
            TerminationReason::EmptyInput => write!(f, "Empty Input"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of the solver after termination.
#[derive(Debug, Clone)]
pub struct ChainSolverOutcome<T> {
    result: SolverResult<T>,
    termination_reason: TerminationReason,
    statistics: ChainSolverStatistics,
}

impl<T> ChainSolverOutcome<T> {
    #[inline]
    pub fn found(chain: Chain<T>, statistics: ChainSolverStatistics) -> Self {
        Self {
            result: SolverResult::Found(chain),
            termination_reason: TerminationReason::ChainFound,
            statistics,
        }
    }

    #[inline]
    pub fn exhausted(statistics: ChainSolverStatistics) -> Self {
        Self {
            result: SolverResult::NotFound,
            termination_reason: TerminationReason::SearchExhausted,
            statistics,
        }
    }

    #[inline]
    pub fn empty_input(statistics: ChainSolverStatistics) -> Self {
        Self {
            result: SolverResult::NotFound,
            termination_reason: TerminationReason::EmptyInput,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(reason: R, statistics: ChainSolverStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: SolverResult::NotFound,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &ChainSolverStatistics {
        &self.statistics
    }

    /// Returns the found chain, if any.
    #[inline]
    pub fn chain(&self) -> Option<&Chain<T>> {
        self.result.as_chain()
    }

    /// Collapses the outcome into the plain absence channel:
    /// `Some(chain)` on success, `None` for every other reason.
    #[inline]
    pub fn into_chain(self) -> Option<Chain<T>> {
        self.result.into_chain()
    }
}

impl<T> std::fmt::Display for ChainSolverOutcome<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Result:      {}", self.result)?;
        writeln!(f, "Termination: {}", self.termination_reason)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domino_model::domino::Domino;

    fn chain() -> Chain<i32> {
        Chain::new(vec![Domino::new(1, 1)])
    }

    #[test]
    fn test_found_outcome_exposes_chain() {
        let outcome = ChainSolverOutcome::found(chain(), ChainSolverStatistics::default());
        assert!(outcome.result().is_found());
        assert_eq!(outcome.termination_reason(), &TerminationReason::ChainFound);
        assert_eq!(outcome.chain(), Some(&chain()));
        assert_eq!(outcome.result().unwrap_found(), &chain());
        assert_eq!(outcome.into_chain(), Some(chain()));
    }

    #[test]
    fn test_every_failure_collapses_to_none() {
        let stats = ChainSolverStatistics::default;
        let outcomes = [
            ChainSolverOutcome::<i32>::exhausted(stats()),
            ChainSolverOutcome::<i32>::empty_input(stats()),
            ChainSolverOutcome::<i32>::aborted("time limit", stats()),
        ];
        for outcome in outcomes {
            assert!(!outcome.result().is_found());
            assert!(outcome.chain().is_none());
            assert_eq!(outcome.into_chain(), None);
        }
    }

    #[test]
    fn test_aborted_keeps_reason() {
        let outcome =
            ChainSolverOutcome::<i32>::aborted("node limit", ChainSolverStatistics::default());
        match outcome.termination_reason() {
            TerminationReason::Aborted(msg) => assert_eq!(msg, "node limit"),
            other => panic!("expected Aborted, got {}", other),
        }
    }

    #[test]
    #[should_panic(expected = "called `SolverResult::unwrap_found()` on a `NotFound` value")]
    fn test_unwrap_found_panics_on_not_found() {
        let result = SolverResult::<i32>::NotFound;
        let _ = result.unwrap_found();
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SolverResult::Found(chain())), "Found([1|1])");
        assert_eq!(format!("{}", SolverResult::<i32>::NotFound), "NotFound");
        assert_eq!(
            format!("{}", TerminationReason::Aborted("x".to_string())),
            "Aborted: x"
        );
        let outcome = ChainSolverOutcome::<i32>::exhausted(ChainSolverStatistics::default());
        assert!(format!("{}", outcome).contains("Termination: Search Exhausted"));
    }
}
