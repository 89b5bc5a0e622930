//! Presentation tokens.
//!
//! Maps each [`Classification`] to a severity tier and an optional icon.
//! These are abstract tokens, not colors or glyphs — the TUI theme binds
//! them to ratatui styles so core stays free of UI types.

use crate::core::classify::Classification;

/// Visual-urgency bucket used for styling the classification line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Good,
    Ok,
    Concerning,
    Bad,
    Extreme,
}

/// Icon token shown next to some classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Check,
    Warning,
    Skull,
}

/// Severity tier for a classification. Total lookup, no side effects.
pub fn severity(c: Classification) -> Severity {
    match c {
        Classification::Healthy => Severity::Good,
        Classification::Underweight | Classification::Overweight => Severity::Ok,
        Classification::ModerateThinness | Classification::Obesity1 => Severity::Concerning,
        Classification::SevereThinness | Classification::Obesity2 => Severity::Bad,
        Classification::Obesity3 => Severity::Extreme,
    }
}

/// Icon token for a classification, if it has one.
pub fn icon(c: Classification) -> Option<Icon> {
    match c {
        Classification::Healthy => Some(Icon::Check),
        Classification::ModerateThinness
        | Classification::Obesity1
        | Classification::Obesity2
        | Classification::SevereThinness => Some(Icon::Warning),
        Classification::Obesity3 => Some(Icon::Skull),
        Classification::Underweight | Classification::Overweight => None,
    }
}
