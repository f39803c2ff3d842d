//! Pattern matching implementation.

use std::fmt;

/// Result of a pattern match operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// Full match found
    Match,
    /// No match
    NoMatch,
}

impl MatchResult {
    #[inline]
    pub fn is_match(self) -> bool {
        matches!(self, MatchResult::Match)
    }
}

/// A compiled prefix/suffix pattern.
///
/// Matching is byte-exact and case-sensitive; Base58 addresses distinguish
/// upper and lower case. Either segment may be empty, but not both.
#[derive(Debug, Clone)]
pub struct Pattern {
    prefix: String,
    suffix: String,
}

impl Pattern {
    /// Creates a new pattern from a prefix and a suffix segment.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Returns the prefix segment.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the suffix segment.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns true if both segments are empty.
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }

    /// Matches an address against this pattern.
    ///
    /// An empty segment matches anything; a non-empty segment must match
    /// exactly at its end of the address.
    #[inline]
    pub fn matches(&self, address: &str) -> MatchResult {
        let matched = (self.prefix.is_empty() || address.starts_with(&self.prefix))
            && (self.suffix.is_empty() || address.ends_with(&self.suffix));

        if matched {
            MatchResult::Match
        } else {
            MatchResult::NoMatch
        }
    }

    /// Returns the per-attempt match probability, adjusted for case
    /// sensitivity.
    ///
    /// Base probability is (1/58)^(prefix len + suffix len). Each segment
    /// then contributes a difficulty multiplier: 1.5 if it mixes upper and
    /// lower case letters, 1.2 if its letters are all one case, 1.0 if it
    /// has no letters. The multipliers divide the raw probability. This is
    /// a heuristic, not an exact combinatorial count; ETA display depends
    /// on reproducing it as-is.
    pub fn adjusted_probability(&self) -> f64 {
        let total_len = self.prefix.len() + self.suffix.len();
        let raw = (1.0 / 58.0f64).powi(total_len as i32);
        raw / (case_factor(&self.prefix) * case_factor(&self.suffix))
    }

    /// Returns the expected number of attempts to find one match.
    pub fn expected_attempts(&self) -> f64 {
        1.0 / self.adjusted_probability()
    }

    /// Returns a human-readable difficulty estimate.
    pub fn difficulty_description(&self) -> String {
        match self.expected_attempts() as u64 {
            0..=1_000 => "Very Easy (< 1 second)".into(),
            1_001..=100_000 => "Easy (seconds)".into(),
            100_001..=10_000_000 => "Medium (minutes)".into(),
            10_000_001..=1_000_000_000 => "Hard (hours)".into(),
            _ => "Very Hard (days or more)".into(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'..'{}'", self.prefix, self.suffix)
    }
}

/// Case-sensitivity difficulty multiplier for one segment.
fn case_factor(segment: &str) -> f64 {
    let has_upper = segment.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = segment.chars().any(|c| c.is_ascii_lowercase());

    if has_upper && has_lower {
        1.5
    } else if has_upper || has_lower {
        1.2
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_match() {
        let pattern = Pattern::new("Sol", "");
        assert!(pattern.matches("Sol1111111111111111111111111111").is_match());
        assert!(!pattern.matches("1Sol111111111111111111111111111").is_match());
    }

    #[test]
    fn test_suffix_match() {
        let pattern = Pattern::new("", "AAaA");
        assert!(pattern.matches("111111111111111111111111111AAaA").is_match());
        assert!(!pattern.matches("AAaA111111111111111111111111111").is_match());
    }

    #[test]
    fn test_prefix_and_suffix_match() {
        let pattern = Pattern::new("So", "zz");
        assert!(pattern.matches("So11111111111111111111111111zz").is_match());
        assert!(!pattern.matches("So11111111111111111111111111zy").is_match());
        assert!(!pattern.matches("Xo11111111111111111111111111zz").is_match());
    }

    #[test]
    fn test_case_sensitive() {
        let pattern = Pattern::new("Sol", "");
        assert!(!pattern.matches("sol1111111111111111111111111111").is_match());
        assert!(!pattern.matches("SOL1111111111111111111111111111").is_match());
    }

    #[test]
    fn test_case_factor() {
        assert_eq!(case_factor("aB"), 1.5);
        assert_eq!(case_factor("Z9"), 1.2);
        assert_eq!(case_factor("sol"), 1.2);
        assert_eq!(case_factor("123"), 1.0);
        assert_eq!(case_factor(""), 1.0);
    }

    #[test]
    fn test_adjusted_probability_mixed_segments() {
        // prefix "aB" mixes cases (x1.5), suffix "Z9" has single-case
        // letters (x1.2); both divide the raw probability
        let pattern = Pattern::new("aB", "Z9");
        let raw = (1.0 / 58.0f64).powi(4);
        let expected = raw / (1.5 * 1.2);
        assert!((pattern.adjusted_probability() - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_digits_only_unadjusted() {
        let pattern = Pattern::new("123", "");
        let raw = (1.0 / 58.0f64).powi(3);
        assert!((pattern.adjusted_probability() - raw).abs() < f64::EPSILON);
    }

    #[test]
    fn test_expected_attempts_grows_with_length() {
        let short = Pattern::new("S", "");
        let long = Pattern::new("Sol", "");
        assert!(long.expected_attempts() > short.expected_attempts());
    }
}
