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


//! Ordered arrangements of dominoes and their validation.
//!
//! A `Chain` is the output format of the solver: every domino is stored in
//! the orientation it was placed in. Validation is split in two levels:
//! - `verify` checks the chain on its own (adjacency and closure),
//! - `verify_arrangement_of` additionally checks that the chain uses every
//!   domino of a given input exactly once, either way round.

use crate::domino::Domino;
use num_traits::PrimInt;

/// Reasons why a sequence of dominoes is not a closed circular chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError<T>
where
    T: std::fmt::Debug + std::fmt::Display,
{
    /// The chain contains no dominoes.
    #[error("chain is empty")]
    Empty,
    /// `chain[position].second` does not match `chain[position + 1].first`.
    #[error("link broken after position {position}: {left} does not meet {right}")]
    Disconnected { position: usize, left: T, right: T },
    /// The last domino does not lead back to the first one.
    #[error("chain does not close: ends on {last} but starts with {first}")]
    OpenLoop { first: T, last: T },
    /// The chain has a different number of dominoes than the input.
    #[error("chain has {actual} dominoes but the input has {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    /// The domino at `position` is not an unused input domino in either orientation.
    #[error("domino {domino} at position {position} is not part of the input")]
    UnknownDomino { position: usize, domino: Domino<T> },
}

/// An ordered sequence of dominoes, each in the orientation it was placed in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Chain<T> {
    dominoes: Vec<Domino<T>>,
}

impl<T> Chain<T>
where
    T: PrimInt,
{
    /// Wraps an already oriented sequence. No validation is performed.
    #[inline]
    pub fn new(dominoes: Vec<Domino<T>>) -> Self {
        Self { dominoes }
    }

    /// Returns the number of dominoes in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.dominoes.len()
    }

    /// Returns `true` if the chain holds no dominoes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dominoes.is_empty()
    }

    /// Returns the dominoes in chain order.
    #[inline]
    pub fn dominoes(&self) -> &[Domino<T>] {
        &self.dominoes
    }

    /// Returns an iterator over the dominoes in chain order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Domino<T>> {
        self.dominoes.iter()
    }

    /// Consumes the chain and returns the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<Domino<T>> {
        self.dominoes
    }

    /// Returns `true` if the chain is non-empty and its last value equals its first.
    ///
    /// Only the closure is checked here; use [`Chain::verify`] for the adjacency
    /// of inner links as well.
    #[inline]
    pub fn is_circular(&self) -> bool {
        match (self.dominoes.first(), self.dominoes.last()) {
            (Some(head), Some(tail)) => head.first() == tail.second(),
            _ => false,
        }
    }

    /// Checks that every adjacent pair matches and that the chain closes.
    pub fn verify(&self) -> Result<(), ChainError<T>>
    where
        T: std::fmt::Debug + std::fmt::Display,
    {
        let (head, tail) = match (self.dominoes.first(), self.dominoes.last()) {
            (Some(head), Some(tail)) => (head, tail),
            _ => return Err(ChainError::Empty),
        };

        if let Some((position, pair)) = self
            .dominoes
            .windows(2)
            .enumerate()
            .find(|(_, pair)| pair[0].second() != pair[1].first())
        {
            return Err(ChainError::Disconnected {
                position,
                left: pair[0].second(),
                right: pair[1].first(),
            });
        }

        if head.first() != tail.second() {
            return Err(ChainError::OpenLoop {
                first: head.first(),
                last: tail.second(),
            });
        }

        Ok(())
    }

    /// Checks that the chain is valid and is an arrangement of `input`:
    /// same length, and each input domino used exactly once as itself or flipped.
    pub fn verify_arrangement_of(&self, input: &[Domino<T>]) -> Result<(), ChainError<T>>
    where
        T: std::fmt::Debug + std::fmt::Display,
    {
        if self.dominoes.len() != input.len() {
            return Err(ChainError::LengthMismatch {
                expected: input.len(),
                actual: self.dominoes.len(),
            });
        }

        let mut used = vec![false; input.len()];
        for (position, domino) in self.dominoes.iter().enumerate() {
            let slot = input
                .iter()
                .enumerate()
                .position(|(i, candidate)| !used[i] && candidate.matches_either_way(domino));

            match slot {
                Some(i) => used[i] = true,
                None => {
                    return Err(ChainError::UnknownDomino {
                        position,
                        domino: *domino,
                    });
                }
            }
        }

        self.verify()
    }
}

impl<T> From<Vec<Domino<T>>> for Chain<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(dominoes: Vec<Domino<T>>) -> Self {
        Self::new(dominoes)
    }
}

impl<T> FromIterator<Domino<T>> for Chain<T>
where
    T: PrimInt,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Domino<T>>,
    {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a Domino<T>;
    type IntoIter = std::slice::Iter<'a, Domino<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.dominoes.iter()
    }
}

impl<T> std::ops::Index<usize> for Chain<T> {
    type Output = Domino<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.dominoes[index]
    }
}

impl<T> std::fmt::Display for Chain<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.dominoes.iter();
        if let Some(head) = iter.next() {
            write!(f, "{}", head)?;
            for domino in iter {
                write!(f, " {}", domino)?;
            }
        }
        Ok(())
    }
}
