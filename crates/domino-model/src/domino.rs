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


use num_traits::PrimInt;

/// A single domino: two integer pip values that may be placed either way round.
///
/// Equality is by value and respects orientation, so `[1|2] != [2|1]`.
/// Placing a domino the other way round is expressed with [`Domino::flip`],
/// which returns a new value and never mutates the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Domino<T> {
    first: T,
    second: T,
}

impl<T> Domino<T>
where
    T: PrimInt,
{
    /// Creates a new domino showing `first` on the left and `second` on the right.
    #[inline(always)]
    pub const fn new(first: T, second: T) -> Self {
        Self { first, second }
    }

    /// Returns the left pip value.
    #[inline(always)]
    pub fn first(&self) -> T {
        self.first
    }

    /// Returns the right pip value.
    #[inline(always)]
    pub fn second(&self) -> T {
        self.second
    }

    /// Returns the same domino turned around.
    #[inline(always)]
    pub fn flip(&self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }

    /// Returns `true` if both halves carry the same pip value.
    #[inline(always)]
    pub fn is_double(&self) -> bool {
        self.first == self.second
    }

    /// Returns `true` if `other` is this domino in either orientation.
    #[inline]
    pub fn matches_either_way(&self, other: &Self) -> bool {
        *self == *other || self.flip() == *other
    }

    /// Returns the orientation-independent form, smaller pip first.
    #[inline]
    pub fn canonical(&self) -> Self {
        if self.first <= self.second {
            *self
        } else {
            self.flip()
        }
    }
}

impl<T> From<(T, T)> for Domino<T>
where
    T: PrimInt,
{
    #[inline]
    fn from((first, second): (T, T)) -> Self {
        Self::new(first, second)
    }
}

impl<T> From<Domino<T>> for (T, T)
where
    T: PrimInt,
{
    #[inline]
    fn from(domino: Domino<T>) -> Self {
        (domino.first, domino.second)
    }
}

impl<T> std::fmt::Display for Domino<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.first, self.second)
    }
}

/// Error returned when a domino token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDominoError {
    /// The token has no `|` or `,` between the two halves.
    #[error("missing separator in domino token `{0}`")]
    MissingSeparator(String),
    /// One half of the token is not an integer of the requested width.
    #[error("invalid pip value `{pip}` in domino token `{token}`")]
    InvalidPip { token: String, pip: String },
}

impl<T> std::str::FromStr for Domino<T>
where
    T: PrimInt,
{
    type Err = ParseDominoError;

    /// Parses `a|b`, `a,b`, `(a,b)` or `[a|b]`, with optional inner whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let inner = token
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .or_else(|| token.strip_prefix('[').and_then(|t| t.strip_suffix(']')))
            .unwrap_or(token);

        let (left, right) = inner
            .split_once('|')
            .or_else(|| inner.split_once(','))
            .ok_or_else(|| ParseDominoError::MissingSeparator(token.to_string()))?;

        let parse_pip = |pip: &str| {
            let pip = pip.trim();
            T::from_str_radix(pip, 10).map_err(|_| ParseDominoError::InvalidPip {
                token: token.to_string(),
                pip: pip.to_string(),
            })
        };

        Ok(Self::new(parse_pip(left)?, parse_pip(right)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type D = Domino<i32>;

    #[test]
    fn test_accessors_and_flip() {
        let d = D::new(2, 5);
        assert_eq!(d.first(), 2);
        assert_eq!(d.second(), 5);

        let f = d.flip();
        assert_eq!(f.first(), 5);
        assert_eq!(f.second(), 2);

        // Flip is an involution and leaves the original untouched
        assert_eq!(f.flip(), d);
        assert_eq!(d, D::new(2, 5));
    }

    #[test]
    fn test_equality_respects_orientation() {
        assert_ne!(D::new(1, 2), D::new(2, 1));
        assert!(D::new(1, 2).matches_either_way(&D::new(2, 1)));
        assert!(!D::new(1, 2).matches_either_way(&D::new(1, 3)));
        assert_eq!(D::new(4, 1).canonical(), D::new(1, 4));
    }

    #[test]
    fn test_double_detection() {
        assert!(D::new(3, 3).is_double());
        assert!(!D::new(3, 4).is_double());
        assert_eq!(D::new(3, 3).flip(), D::new(3, 3));
    }

    #[test]
    fn test_negative_pips_are_ordinary_values() {
        let d = D::new(-1, 7);
        assert_eq!(d.flip(), D::new(7, -1));
        assert_eq!(format!("{}", d), "[-1|7]");
    }

    #[test]
    fn test_tuple_conversions() {
        let d: D = (6, 3).into();
        assert_eq!(d, D::new(6, 3));
        let t: (i32, i32) = d.into();
        assert_eq!(t, (6, 3));
    }

    #[test]
    fn test_parse_accepts_all_token_shapes() {
        assert_eq!("1|2".parse::<D>().unwrap(), D::new(1, 2));
        assert_eq!("3,4".parse::<D>().unwrap(), D::new(3, 4));
        assert_eq!("(5, 6)".parse::<D>().unwrap(), D::new(5, 6));
        assert_eq!("[ 0 | 7 ]".parse::<D>().unwrap(), D::new(0, 7));
        assert_eq!(" -2|2 ".parse::<D>().unwrap(), D::new(-2, 2));
    }

    #[test]
    fn test_parse_reports_missing_separator() {
        let err = "12".parse::<D>().unwrap_err();
        assert_eq!(err, ParseDominoError::MissingSeparator("12".to_string()));
        assert_eq!(err.to_string(), "missing separator in domino token `12`");
    }

    #[test]
    fn test_parse_reports_invalid_pip() {
        match "1|x".parse::<D>() {
            Err(ParseDominoError::InvalidPip { token, pip }) => {
                assert_eq!(token, "1|x");
                assert_eq!(pip, "x");
            }
            other => panic!("expected InvalidPip, got {:?}", other),
        }

        // Out of range for the requested width
        assert!("300|1".parse::<Domino<u8>>().is_err());
    }
}
