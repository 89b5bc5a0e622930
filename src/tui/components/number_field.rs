//! # NumberField Component
//!
//! Single-line text input for one numeric value (height or weight).
//!
//! ## Responsibilities
//!
//! - Capture text input and basic editing (backspace, delete, cursor moves)
//! - Emit `FieldEvent::Changed` with the full buffer after every edit
//! - Display the label, unit, advisory bounds hint, and a placeholder example
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. Everything else (label, unit,
//! bounds, focus) is a prop. The field accepts any character — numeric
//! validation is the pipeline's job, not the widget's, so garbled text flows
//! through as the NaN sentinel instead of being rejected at the keyboard.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::config::FieldLimits;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by a NumberField.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// The buffer changed; carries the full new text.
    Changed(String),
}

/// Single-line numeric input with a bounds hint.
///
/// # Props
///
/// - `label`: field title, e.g. "Sua altura (em centímetros)"
/// - `unit`: short unit suffix for the hint, e.g. "cm"
/// - `example`: dim placeholder shown while empty, e.g. "e.g: 175"
/// - `limits`: advisory bounds rendered in the hint (never enforced)
/// - `focused`: whether this field owns the terminal cursor
///
/// # State
///
/// - `buffer`: current text
/// - `cursor_pos`: cursor byte offset into `buffer`
pub struct NumberField {
    pub label: String,
    pub unit: String,
    pub example: String,
    pub limits: FieldLimits,
    pub focused: bool,
    pub buffer: String,
    cursor_pos: usize,
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(s.len())
}

impl NumberField {
    pub fn new(label: &str, unit: &str, example: &str, limits: FieldLimits) -> Self {
        Self {
            label: label.to_string(),
            unit: unit.to_string(),
            example: example.to_string(),
            limits,
            focused: false,
            buffer: String::new(),
            cursor_pos: 0,
        }
    }

    /// Advisory bounds hint, e.g. "1–300 cm".
    fn hint(&self) -> String {
        format!("{}–{} {}", self.limits.min, self.limits.max, self.unit)
    }
}

impl Component for NumberField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label.as_str())
            .title_bottom(Line::from(self.hint()).right_aligned());

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.example.as_str())
                .block(block)
                .style(Style::default().add_modifier(Modifier::DIM))
        } else {
            Paragraph::new(self.buffer.as_str())
                .block(block)
                .style(Style::default().fg(Color::Green))
        };

        frame.render_widget(paragraph, area);

        if self.focused {
            let cursor_x = area.x + 1 + self.buffer[..self.cursor_pos].width() as u16;
            frame.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
        }
    }
}

impl EventHandler for NumberField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor_pos, *c);
                self.cursor_pos += c.len_utf8();
                Some(FieldEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                if self.cursor_pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor_pos);
                    self.buffer.drain(prev..self.cursor_pos);
                    self.cursor_pos = prev;
                    Some(FieldEvent::Changed(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor_pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor_pos);
                    self.buffer.drain(self.cursor_pos..next);
                    Some(FieldEvent::Changed(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor_pos > 0 {
                    self.cursor_pos = prev_char_boundary(&self.buffer, self.cursor_pos);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor_pos < self.buffer.len() {
                    self.cursor_pos = next_char_boundary(&self.buffer, self.cursor_pos);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor_pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor_pos = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}
