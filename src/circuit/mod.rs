//! Circuit module - Ohm's law model and resistance presets

mod ohm;

pub use ohm::{calculate_current, CircuitError, ResistancePreset};
