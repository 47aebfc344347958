//! Delimiter balance checking.
//!
//! Counts opening and closing characters for braces, brackets and
//! parentheses. The count is purely textual: delimiters inside string
//! literals and comments are counted like any other.

use serde::Serialize;

/// A pair of opening/closing delimiter characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterPair {
    /// `{` and `}`
    Braces,
    /// `[` and `]`
    Brackets,
    /// `(` and `)`
    Parentheses,
}

impl DelimiterPair {
    /// All pairs, in reporting order.
    pub const ALL: [DelimiterPair; 3] = [Self::Braces, Self::Brackets, Self::Parentheses];

    /// Opening character.
    pub fn open(self) -> char {
        match self {
            Self::Braces => '{',
            Self::Brackets => '[',
            Self::Parentheses => '(',
        }
    }

    /// Closing character.
    pub fn close(self) -> char {
        match self {
            Self::Braces => '}',
            Self::Brackets => ']',
            Self::Parentheses => ')',
        }
    }
}

impl std::fmt::Display for DelimiterPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Braces => write!(f, "braces"),
            Self::Brackets => write!(f, "brackets"),
            Self::Parentheses => write!(f, "parentheses"),
        }
    }
}

/// A non-zero difference between opening and closing counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Imbalance {
    pub pair: DelimiterPair,
    /// `count(open) - count(close)`; positive means unclosed openers.
    pub difference: i64,
}

fn count(text: &str, c: char) -> i64 {
    text.chars().filter(|&ch| ch == c).count() as i64
}

/// Signed `count(open) - count(close)` for one pair.
pub fn difference(text: &str, pair: DelimiterPair) -> i64 {
    count(text, pair.open()) - count(text, pair.close())
}

/// Check every pair independently and return the unbalanced ones, in
/// braces, brackets, parentheses order.
pub fn check_balance(text: &str) -> Vec<Imbalance> {
    DelimiterPair::ALL
        .iter()
        .filter_map(|&pair| {
            let difference = difference(text, pair);
            (difference != 0).then_some(Imbalance { pair, difference })
        })
        .collect()
}
