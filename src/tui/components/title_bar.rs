//! # TitleBar Component
//!
//! Top line showing the application heading and a transient status message.
//!
//! Purely presentational — it receives both strings as props and has no
//! internal state, which keeps it trivial to test: render into a
//! `TestBackend` and check the text.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// Heading plus status. Both fields are props from App state.
pub struct TitleBar {
    pub heading: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(heading: String, status_message: String) -> Self {
        Self {
            heading,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.heading.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_heading_and_status() {
        let mut bar = TitleBar::new("Calcule seu IMC".to_string(), "Esc sai".to_string());
        let text = render_to_text(&mut bar);
        assert!(text.contains("Calcule seu IMC"));
        assert!(text.contains("| Esc sai"));
    }

    #[test]
    fn test_no_separator_without_status() {
        let mut bar = TitleBar::new("Calcule seu IMC".to_string(), String::new());
        let text = render_to_text(&mut bar);
        assert!(text.contains("Calcule seu IMC"));
        assert!(!text.contains('|'));
    }
}
