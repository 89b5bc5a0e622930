//! # ResultPanel Component
//!
//! Stateless display of the computed BMI and its classification.
//!
//! The value line shows `= {bmi:.2}` once the BMI is computable, otherwise
//! the configured placeholder. The classification line renders only for a
//! valid BMI — the `Option<Classification>` prop makes the NaN gate a type
//! level fact, so this component can never be asked to classify garbage.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::classify::Classification;
use crate::core::presentation::{icon, severity};
use crate::tui::component::Component;
use crate::tui::theme::{icon_glyph, severity_style};

/// Result readout. All fields are props; there is no internal state.
pub struct ResultPanel {
    /// Derived BMI value; NaN while the form is incomplete or invalid.
    pub bmi: f64,
    /// Present only when `bmi` is a real number.
    pub classification: Option<Classification>,
    /// Whether to prefix the message with its severity icon.
    pub show_icons: bool,
    /// Glyph shown while the BMI is not computable.
    pub placeholder: String,
}

impl ResultPanel {
    fn value_line(&self) -> Line<'_> {
        let text = if self.bmi.is_nan() {
            self.placeholder.clone()
        } else {
            format!("= {:.2}", self.bmi)
        };
        Line::from(Span::styled(text, Style::default().add_modifier(Modifier::BOLD)))
    }

    fn classification_line(&self) -> Option<Line<'_>> {
        let c = self.classification?;
        let style = severity_style(severity(c));

        let mut spans = Vec::new();
        if self.show_icons
            && let Some(i) = icon(c)
        {
            spans.push(Span::styled(format!("{} ", icon_glyph(i)), style));
        }
        spans.push(Span::styled(c.message(), style));
        Some(Line::from(spans))
    }
}

impl Component for ResultPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::Length;
        let [value_area, classification_area] = Layout::vertical([Length(1), Length(1)]).areas(area);

        frame.render_widget(
            Paragraph::new(self.value_line()).alignment(Alignment::Center),
            value_area,
        );

        if let Some(line) = self.classification_line() {
            frame.render_widget(
                Paragraph::new(line).alignment(Alignment::Center),
                classification_area,
            );
        }
    }
}
