//! BMI classification.
//!
//! Eight fixed categories partition the whole number line, each carrying one
//! pt-BR display message. The range bounds are a behavioral contract carried
//! over from the product copy — in particular the asymmetry around 17/18.5
//! (inclusive `16..=17`, then strict `>17 && <18.5`) stays exactly as
//! written. The ranges are contiguous either way; only the bound style is
//! uneven.

/// One of the eight weight-status categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    SevereThinness,
    ModerateThinness,
    Underweight,
    Healthy,
    Overweight,
    Obesity1,
    Obesity2,
    Obesity3,
}

/// All variants in ascending BMI order. Used by the presentation tests and
/// anywhere a total sweep over categories is needed.
pub const ALL: [Classification; 8] = [
    Classification::SevereThinness,
    Classification::ModerateThinness,
    Classification::Underweight,
    Classification::Healthy,
    Classification::Overweight,
    Classification::Obesity1,
    Classification::Obesity2,
    Classification::Obesity3,
];

impl Classification {
    /// The localized message shown for this classification, verbatim.
    pub fn message(self) -> &'static str {
        match self {
            Classification::SevereThinness => "Você está com magreza severa. Alimente-se!",
            Classification::ModerateThinness => "Você está bem magro.",
            Classification::Underweight => "Você está abaixo do peso.",
            Classification::Healthy => "Você está dentro da normalidade.",
            Classification::Overweight => "Você está acima do peso.",
            Classification::Obesity1 => "Você está no grau 1 de obesidade.",
            Classification::Obesity2 => "Você está no grau 2 de obesidade. Modere-se!",
            Classification::Obesity3 => "Você está com obesidade mórbida. Cuide-se urgentemente!",
        }
    }
}

/// Classify a finite BMI value.
///
/// Total over the reals; the final arm is a catch-all. Must not be called
/// with NaN — callers gate on `is_nan()` first (the render seam enforces
/// this by passing `Option<Classification>`).
pub fn classify(bmi: f64) -> Classification {
    if bmi < 16.0 {
        Classification::SevereThinness
    } else if (16.0..=17.0).contains(&bmi) {
        Classification::ModerateThinness
    } else if bmi > 17.0 && bmi < 18.5 {
        Classification::Underweight
    } else if (18.5..=24.99).contains(&bmi) {
        Classification::Healthy
    } else if (25.0..=29.99).contains(&bmi) {
        Classification::Overweight
    } else if (30.0..=34.99).contains(&bmi) {
        Classification::Obesity1
    } else if (35.0..=39.99).contains(&bmi) {
        Classification::Obesity2
    } else {
        Classification::Obesity3
    }
}
