//! # Actions
//!
//! Everything that can happen in imc becomes an `Action`.
//! User types into the height field? That's `Action::HeightInput(text)`.
//! User presses Esc? That's `Action::Quit`.
//!
//! The `update()` function takes the current state and an action and mutates
//! the state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! This makes everything testable: feed actions, assert on the state.
//! The numeric coercion lives here too, so "what does garbage input do"
//! is a reducer test, not a widget test.

use log::debug;

use crate::core::state::App;

/// Everything the UI can ask the core to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Raw text of the height field changed.
    HeightInput(String),
    /// Raw text of the weight field changed.
    WeightInput(String),
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// Coerce raw field text to a numeric value.
///
/// Empty (or whitespace-only) text means the field is unset. Anything else
/// parses as f64, with failures coerced to NaN so invalid text flows through
/// the pipeline as the usual sentinel instead of an error.
fn coerce(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.parse::<f64>().unwrap_or(f64::NAN))
}

/// The reducer. Recomputation of BMI/classification is not done here — those
/// are derived on demand from `Measurement`, so there is nothing to keep in
/// sync.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::HeightInput(text) => {
            app.measurement.height_cm = coerce(&text);
            Effect::None
        }
        Action::WeightInput(text) => {
            app.measurement.weight_kg = coerce(&text);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
