//! Ohm's Law Model
//! Pure current calculation and the fixed resistance presets.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitError {
    #[error("Resistance must be non-zero")]
    ZeroResistance,
}

/// Fixed resistance values offered by the lab bench.
/// Exactly one preset is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResistancePreset {
    R5,
    R10,
    R50,
}

impl ResistancePreset {
    pub const ALL: [ResistancePreset; 3] = [Self::R5, Self::R10, Self::R50];

    /// Resistance in ohms.
    pub fn ohms(self) -> f64 {
        match self {
            Self::R5 => 5.0,
            Self::R10 => 10.0,
            Self::R50 => 50.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::R5 => "5 Ohms",
            Self::R10 => "10 Ohms",
            Self::R50 => "50 Ohms",
        }
    }
}

impl Default for ResistancePreset {
    fn default() -> Self {
        Self::R5
    }
}

/// Compute the circuit current from Ohm's law (I = V / R).
///
/// Zero resistance is rejected; the presets never produce it, but the
/// resistance may become user-entered later.
pub fn calculate_current(voltage: f64, resistance: f64) -> Result<f64, CircuitError> {
    if resistance == 0.0 {
        return Err(CircuitError::ZeroResistance);
    }
    Ok(voltage / resistance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_matches_ohms_law_for_all_presets() {
        for preset in ResistancePreset::ALL {
            for voltage in [0.0, 1.0, 7.5, 500.0, 1000.0] {
                let current = calculate_current(voltage, preset.ohms()).unwrap();
                assert_eq!(current, voltage / preset.ohms());
            }
        }
    }

    #[test]
    fn zero_resistance_is_rejected() {
        assert_eq!(
            calculate_current(5.0, 0.0),
            Err(CircuitError::ZeroResistance)
        );
    }

    #[test]
    fn preset_values() {
        assert_eq!(ResistancePreset::R5.ohms(), 5.0);
        assert_eq!(ResistancePreset::R10.ohms(), 10.0);
        assert_eq!(ResistancePreset::R50.ohms(), 50.0);
    }

    #[test]
    fn default_preset_is_the_first_one() {
        assert_eq!(ResistancePreset::default(), ResistancePreset::R5);
    }
}
