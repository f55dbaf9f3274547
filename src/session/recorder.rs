//! Session Recorder
//! Ordered, append-only log of measurement samples taken during one run.

/// One recorded (voltage, current) measurement pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub voltage: f64,
    pub current: f64,
}

impl Sample {
    /// Render the sample as one results-file line.
    ///
    /// `{:?}` keeps at least one fractional digit and round-trips exactly,
    /// so `10.0` stays `10.0` rather than collapsing to `10`.
    pub fn to_line(&self) -> String {
        format!("Voltage: {:?} V, Current: {:?} A", self.voltage, self.current)
    }
}

/// The ordered set of samples collected during one run.
///
/// Insertion order is display order is chart draw order. The list grows only
/// by append; entries are never mutated or removed.
#[derive(Debug, Default, Clone)]
pub struct Session {
    samples: Vec<Sample>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample to the session.
    pub fn record(&mut self, voltage: f64, current: f64) {
        self.samples.push(Sample { voltage, current });
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Voltage column, in record order. Feeds the chart renderer.
    pub fn voltages(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.voltage).collect()
    }

    /// Current column, in record order.
    pub fn currents(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.current).collect()
    }

    /// Human-readable rendering of the whole session, one line per sample,
    /// newline-joined with no trailing newline.
    pub fn export(&self) -> String {
        self.samples
            .iter()
            .map(Sample::to_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{calculate_current, ResistancePreset};

    #[test]
    fn record_preserves_call_order() {
        let mut session = Session::new();
        session.record(10.0, 2.0);
        session.record(20.0, 4.0);
        session.record(5.0, 1.0);

        assert_eq!(session.len(), 3);
        assert_eq!(session.voltages(), vec![10.0, 20.0, 5.0]);
        assert_eq!(session.currents(), vec![2.0, 4.0, 1.0]);
    }

    #[test]
    fn recorded_currents_match_the_model_at_call_time() {
        let mut session = Session::new();
        let inputs = [
            (10.0, ResistancePreset::R5),
            (10.0, ResistancePreset::R10),
            (1000.0, ResistancePreset::R50),
        ];

        for (voltage, preset) in inputs {
            let current = calculate_current(voltage, preset.ohms()).unwrap();
            session.record(voltage, current);
        }

        for ((voltage, preset), sample) in inputs.iter().zip(session.samples()) {
            assert_eq!(sample.voltage, *voltage);
            assert_eq!(sample.current, voltage / preset.ohms());
        }
    }

    #[test]
    fn export_of_empty_session_is_empty() {
        assert_eq!(Session::new().export(), "");
    }

    #[test]
    fn export_joins_lines_without_trailing_newline() {
        let mut session = Session::new();
        session.record(10.0, 2.0);
        session.record(20.0, 4.0);

        assert_eq!(
            session.export(),
            "Voltage: 10.0 V, Current: 2.0 A\nVoltage: 20.0 V, Current: 4.0 A"
        );
    }

    #[test]
    fn sample_line_keeps_full_precision() {
        let sample = Sample {
            voltage: 7.0,
            current: 7.0 / 3.0,
        };
        let line = sample.to_line();
        assert!(line.starts_with("Voltage: 7.0 V, Current: 2.333333333333333"));
        assert!(line.ends_with(" A"));
    }
}
