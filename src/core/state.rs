//! # Application State
//!
//! Core business state for imc. This module contains domain state only —
//! no TUI-specific types. Presentation state (text buffers, cursor, focus)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── measurement: Measurement     // the two numeric inputs
//! ├── status_message: String       // footer text
//! └── show_icons: bool             // from config/CLI
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::bmi::compute_bmi;

/// The two user-entered values. Unset fields are `None`; a field whose text
/// failed numeric coercion holds `Some(f64::NAN)` — set, but invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measurement {
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

/// How far along the form is. Purely derived; no transition validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Empty,
    Partial,
    Complete,
}

impl Measurement {
    /// Derived BMI. NaN until both fields are set and height is non-zero.
    pub fn bmi(&self) -> f64 {
        compute_bmi(self.height_cm, self.weight_kg)
    }

    pub fn phase(&self) -> FormPhase {
        match (self.height_cm, self.weight_kg) {
            (None, None) => FormPhase::Empty,
            (Some(_), Some(_)) => FormPhase::Complete,
            _ => FormPhase::Partial,
        }
    }
}

pub struct App {
    pub measurement: Measurement,
    pub status_message: String,
    pub show_icons: bool,
}

impl App {
    pub fn new(show_icons: bool) -> Self {
        Self {
            measurement: Measurement::default(),
            status_message: String::from("Tab alterna os campos | Esc sai"),
            show_icons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new(true);
        assert_eq!(app.measurement, Measurement::default());
        assert!(app.show_icons);
        assert!(app.status_message.contains("Tab"));
    }

    #[test]
    fn test_phase_transitions() {
        let mut m = Measurement::default();
        assert_eq!(m.phase(), FormPhase::Empty);

        m.height_cm = Some(175.0);
        assert_eq!(m.phase(), FormPhase::Partial);

        m.weight_kg = Some(80.0);
        assert_eq!(m.phase(), FormPhase::Complete);

        m.height_cm = None;
        assert_eq!(m.phase(), FormPhase::Partial);
    }

    #[test]
    fn test_nan_field_counts_as_set() {
        let m = Measurement {
            height_cm: Some(f64::NAN),
            weight_kg: Some(80.0),
        };
        assert_eq!(m.phase(), FormPhase::Complete);
        assert!(m.bmi().is_nan());
    }

    #[test]
    fn test_bmi_derived_not_stored() {
        let m = Measurement {
            height_cm: Some(175.0),
            weight_kg: Some(80.0),
        };
        assert!((m.bmi() - 26.1224).abs() < 1e-3);
    }
}
