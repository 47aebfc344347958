//! Shallow lexical scanners.
//!
//! - [`delimiters`] - per-pair open/close counting
//! - [`imports`] - import extraction and existence heuristics

pub mod delimiters;
pub mod imports;

pub use delimiters::{check_balance, DelimiterPair, Imbalance};
pub use imports::{ImportRef, ImportScanner};
