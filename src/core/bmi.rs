//! BMI calculation.
//!
//! Height comes in centimeters, weight in kilograms; the formula is
//! `weight / (height_m)^2`. Incomplete input and a zero height both yield
//! `f64::NAN` — the sentinel that suppresses classification and display
//! downstream. There is no error type here on purpose: malformed input is a
//! benign, displayable state, not a failure.

/// Compute BMI from height in centimeters and weight in kilograms.
///
/// Returns `f64::NAN` when either input is unset or height is zero.
/// A stored NaN (non-numeric field text) propagates through the arithmetic
/// without special casing. No rounding happens here; two-decimal formatting
/// is a display concern.
pub fn compute_bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> f64 {
    match (height_cm, weight_kg) {
        (Some(h), Some(w)) if h != 0.0 => {
            let height_m = h / 100.0;
            w / (height_m * height_m)
        }
        _ => f64::NAN,
    }
}
