//! The `T`/`F` sign of a prefixed formula.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    T,
    F,
}

impl Sign {
    pub fn flip(self) -> Sign {
        match self {
            Sign::T => Sign::F,
            Sign::F => Sign::T,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::T => write!(f, "T"),
            Sign::F => write!(f, "F"),
        }
    }
}
