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


//! Domino‑Solver: circular chain search over domino sets
//!
//! Decides whether a set of dominoes can be arranged into one closed ring in
//! which touching halves carry the same pips and the last domino meets the
//! first, and returns the first such ring in a fixed depth‑first order.
//!
//! Core flow
//! - Build a `&[domino_model::domino::Domino<T>]`, by hand or through
//!   `domino_model::loading::DominoSetLoader`.
//! - Call `find_circular_chain` for the plain `Option<Chain<T>>` answer, or
//!   run `solver::ChainSolver::solve` with a monitor for the full outcome.
//!
//! Design highlights
//! - Tight inner loop: the partial chain is mutated in place and restored via
//!   a trail; pending placements live on an explicit frame stack.
//! - Deterministic: input order first, forward before flipped.
//! - Monitors observe and may stop the search; outcomes carry the reason.
//!
//! Module map
//! - `solver`: the engine, its search session and `find_circular_chain`.
//! - `placement`: one (input position, orientation) decision.
//! - `state`: usage markers and the partial chain.
//! - `monitor`: tree‑search monitors (log, composite, limits).
//! - `result`: solver outcomes with termination reasons.
//! - `stats`: lightweight counters/timing.

pub mod monitor;
pub mod placement;
pub mod result;
pub mod solver;
mod stack;
pub mod state;
pub mod stats;
mod trail;

pub use solver::{ChainSolver, find_circular_chain};
