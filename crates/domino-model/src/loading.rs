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


//! Domino set loader.
//!
//! Turns whitespace-delimited text into the ordered `Vec<Domino<T>>` consumed
//! by the solver. Each token is one domino in any of the shapes accepted by
//! `Domino::from_str` (`1|2`, `1,2`, `(1,2)`, `[1|2]`) and must not contain
//! inner whitespace. Lines may carry comments introduced by `#`. Input order
//! is preserved, since the solver's tie-breaking depends on it.
//!
//! The parser accepts any `BufRead`, file path, raw reader, or string slice.
//! Errors point at the offending line (1-based).

use crate::domino::{Domino, ParseDominoError};
use num_traits::PrimInt;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// The error type for the domino set loading process.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// An I/O error occurred while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A token could not be parsed as a domino.
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseDominoError,
    },
    /// The input holds more dominoes than the configured limit.
    #[error("domino set exceeds the limit of {limit} dominoes")]
    TooManyDominoes { limit: usize },
}

/// A configurable loader for domino sets.
///
/// ```raw
/// # a triangle
/// 2|1 2|3
/// 1|3
/// ```
///
/// # Configuration
/// * `max_dominoes`: reject inputs with more dominoes than this. The search is
///   exponential in the set size, so callers feeding untrusted input should set it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DominoSetLoader<T> {
    max_dominoes: Option<usize>,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for DominoSetLoader<T> {
    fn default() -> Self {
        Self {
            max_dominoes: None,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> DominoSetLoader<T>
where
    T: PrimInt,
{
    /// Creates a new `DominoSetLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of dominoes accepted.
    #[inline]
    pub fn max_dominoes(mut self, limit: usize) -> Self {
        self.max_dominoes = Some(limit);
        self
    }

    /// Loads a domino set from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Vec<Domino<T>>, LoadError> {
        let mut dominoes = Vec::new();

        for (line_index, line) in rdr.lines().enumerate() {
            let line = line?;
            let content = match line.split_once('#') {
                Some((before, _)) => before,
                None => line.as_str(),
            };

            for token in content.split_whitespace() {
                let domino = token.parse::<Domino<T>>().map_err(|source| LoadError::Parse {
                    line: line_index + 1,
                    source,
                })?;

                if let Some(limit) = self.max_dominoes.filter(|&limit| dominoes.len() >= limit) {
                    return Err(LoadError::TooManyDominoes { limit });
                }
                dominoes.push(domino);
            }
        }

        Ok(dominoes)
    }

    /// Loads a domino set from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Domino<T>>, LoadError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads a domino set from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Vec<Domino<T>>, LoadError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a domino set from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Vec<Domino<T>>, LoadError> {
        self.from_reader(s.as_bytes())
    }
}
