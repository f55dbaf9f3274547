//! Session Statistics
//! Descriptive summary over the recorded samples.

use crate::session::Sample;

/// Descriptive statistics for one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub count: usize,
    pub max_voltage: f64,
    pub max_current: f64,
    pub mean_current: f64,
}

impl SessionSummary {
    /// Summarize a sample list; `None` when nothing has been recorded yet.
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let count = samples.len();
        let max_voltage = samples
            .iter()
            .map(|s| s.voltage)
            .fold(f64::NEG_INFINITY, f64::max);
        let max_current = samples
            .iter()
            .map(|s| s.current)
            .fold(f64::NEG_INFINITY, f64::max);
        let mean_current = samples.iter().map(|s| s.current).sum::<f64>() / count as f64;

        Some(Self {
            count,
            max_voltage,
            max_current,
            mean_current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_has_no_summary() {
        assert_eq!(SessionSummary::from_samples(&[]), None);
    }

    #[test]
    fn summary_matches_the_arithmetic() {
        let samples = [
            Sample {
                voltage: 10.0,
                current: 2.0,
            },
            Sample {
                voltage: 20.0,
                current: 4.0,
            },
            Sample {
                voltage: 5.0,
                current: 0.1,
            },
        ];

        let summary = SessionSummary::from_samples(&samples).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.max_voltage, 20.0);
        assert_eq!(summary.max_current, 4.0);
        assert_eq!(summary.mean_current, (2.0 + 4.0 + 0.1) / 3.0);
    }

    #[test]
    fn single_sample_summary_is_that_sample() {
        let samples = [Sample {
            voltage: 500.0,
            current: 50.0,
        }];

        let summary = SessionSummary::from_samples(&samples).unwrap();
        assert_eq!(summary.max_voltage, 500.0);
        assert_eq!(summary.max_current, 50.0);
        assert_eq!(summary.mean_current, 50.0);
    }
}
