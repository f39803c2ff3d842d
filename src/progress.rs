//! Progress and ETA estimation.
//!
//! The estimation math lives here, independent of how it is rendered: the
//! coordinator produces [`ProgressReport`] snapshots and the caller decides
//! where they go.

use std::time::Duration;

use crate::matcher::Pattern;

/// Expected-attempts model for a fixed pattern.
#[derive(Debug, Clone, Copy)]
pub struct Estimator {
    expected_total: f64,
}

impl Estimator {
    /// Builds an estimator from the pattern's adjusted match probability.
    pub fn new(pattern: &Pattern) -> Self {
        Self {
            expected_total: pattern.expected_attempts(),
        }
    }

    /// Returns the expected total attempts for one match.
    pub fn expected_total(&self) -> f64 {
        self.expected_total
    }

    /// Returns the expected attempts still ahead, never negative.
    pub fn remaining(&self, attempts: u64) -> f64 {
        (self.expected_total - attempts as f64).max(0.0)
    }

    /// Returns the estimated time to the next match, or `None` while the
    /// rate is still zero or the estimate exceeds `Duration`'s range.
    pub fn eta(&self, attempts: u64, elapsed: Duration) -> Option<Duration> {
        let secs = elapsed.as_secs_f64();
        if secs <= 0.0 || attempts == 0 {
            return None;
        }

        // Long patterns produce estimates beyond what Duration can hold
        let rate = attempts as f64 / secs;
        Duration::try_from_secs_f64(self.remaining(attempts) / rate).ok()
    }

    /// Produces a report snapshot for the given counters.
    pub fn report(&self, attempts: u64, elapsed: Duration) -> ProgressReport {
        let secs = elapsed.as_secs_f64();
        let rate = if secs > 0.0 {
            attempts as f64 / secs
        } else {
            0.0
        };

        ProgressReport {
            attempts,
            rate,
            eta: self.eta(attempts, elapsed),
        }
    }
}

/// A point-in-time progress snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ProgressReport {
    /// Attempts made so far across all workers
    pub attempts: u64,
    /// Attempts per second since the search started
    pub rate: f64,
    /// Estimated time remaining, if a rate is available yet
    pub eta: Option<Duration>,
}

impl ProgressReport {
    /// Formats the ETA in the coarse day/hour/minute/second buckets.
    pub fn eta_display(&self) -> String {
        match self.eta {
            Some(eta) => format_eta(eta),
            None => "calculating".into(),
        }
    }
}

fn format_eta(eta: Duration) -> String {
    let secs = eta.as_secs();
    if secs > 86_400 {
        format!("{}d {}h", secs / 86_400, (secs % 86_400) / 3_600)
    } else if secs > 3_600 {
        format!("{}h {}m", secs / 3_600, (secs % 3_600) / 60)
    } else if secs > 60 {
        format!("{}m", secs / 60)
    } else if secs > 0 {
        format!("{}s", secs)
    } else {
        "calculating".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> Estimator {
        Estimator::new(&Pattern::new("Sol", ""))
    }

    #[test]
    fn test_remaining_non_negative() {
        let est = estimator();
        assert_eq!(est.remaining(u64::MAX), 0.0);
        assert!(est.remaining(0) > 0.0);
    }

    #[test]
    fn test_remaining_non_increasing() {
        let est = estimator();
        let mut prev = est.remaining(0);
        for attempts in [1, 100, 10_000, 1_000_000, u64::MAX] {
            let next = est.remaining(attempts);
            assert!(next <= prev);
            prev = next;
        }
    }

    #[test]
    fn test_eta_unavailable_without_rate() {
        let est = estimator();
        assert!(est.eta(0, Duration::from_secs(5)).is_none());
        assert!(est.eta(100, Duration::ZERO).is_none());
    }

    #[test]
    fn test_astronomical_eta_does_not_panic() {
        // 18 characters puts the expected total near 58^18; at a low rate
        // the estimate is far beyond Duration's range and must degrade to
        // "calculating" instead of panicking
        let est = Estimator::new(&Pattern::new("SolSolSolSolSolSol", ""));
        assert!(est.eta(100, Duration::from_secs(1)).is_none());

        let report = est.report(100, Duration::from_secs(1));
        assert_eq!(report.eta_display(), "calculating");
    }

    #[test]
    fn test_eta_shrinks_with_rate() {
        let est = estimator();
        let slow = est.eta(100, Duration::from_secs(10)).unwrap();
        let fast = est.eta(10_000, Duration::from_secs(10)).unwrap();
        assert!(fast < slow);
    }

    #[test]
    fn test_eta_formatting_buckets() {
        assert_eq!(format_eta(Duration::from_secs(30)), "30s");
        assert_eq!(format_eta(Duration::from_secs(90)), "1m");
        assert_eq!(format_eta(Duration::from_secs(3 * 3_600 + 120)), "3h 2m");
        assert_eq!(format_eta(Duration::from_secs(2 * 86_400 + 3_600)), "2d 1h");
        assert_eq!(format_eta(Duration::ZERO), "calculating");
    }
}
