//! Pattern matching for Solana addresses.
//!
//! Matching is a case-sensitive prefix/suffix predicate over the Base58
//! address text; the pattern also carries the difficulty model that drives
//! ETA estimation.

mod pattern;

pub use pattern::{MatchResult, Pattern};
