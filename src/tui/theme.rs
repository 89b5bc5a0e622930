//! Bindings from core presentation tokens to terminal styling.
//!
//! Core hands out abstract `Severity` and `Icon` tokens; this is the one
//! place that decides what they look like on screen.

use ratatui::style::{Color, Modifier, Style};

use crate::core::presentation::{Icon, Severity};

/// Style for the classification line.
pub fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Good => Style::default().fg(Color::Green),
        Severity::Ok => Style::default().fg(Color::Yellow),
        Severity::Concerning => Style::default().fg(Color::Magenta),
        Severity::Bad => Style::default().fg(Color::Red),
        Severity::Extreme => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// Glyph rendered before the classification message.
pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Check => "✔",
        Icon::Warning => "⚠",
        Icon::Skull => "☠",
    }
}
