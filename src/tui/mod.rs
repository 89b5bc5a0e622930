//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form, and
//! translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. Core
//! stays UI-free, so a different adapter (web form, plain CLI) could be
//! swapped in without touching the pipeline.
//!
//! ## Redraw Strategy
//!
//! Nothing animates here: the loop blocks in `event::poll` with a generous
//! timeout and only redraws after an event arrives. Every input event
//! re-derives the whole pipeline (BMI → classification → tokens) on the next
//! draw — recomputation is cheap enough that caching would only add state.

pub mod component;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

use log::info;
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{FieldEvent, NumberField};
use crate::tui::event::{TuiEvent, poll_event_timeout};

/// Which input field owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    Height,
    Weight,
}

impl FocusField {
    /// Two fields, so next and previous are the same toggle.
    fn toggle(self) -> Self {
        match self {
            FocusField::Height => FocusField::Weight,
            FocusField::Weight => FocusField::Height,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    pub height_field: NumberField,
    pub weight_field: NumberField,
    pub focus: FocusField,
    pub placeholder: String,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            height_field: NumberField::new(
                "Sua altura (em centímetros)",
                "cm",
                "e.g: 175",
                config.height_limits,
            ),
            weight_field: NumberField::new(
                "Seu peso (em quilogramas)",
                "kg",
                "e.g: 80",
                config.weight_limits,
            ),
            focus: FocusField::Height,
            placeholder: config.placeholder.clone(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // ratatui::init hides the cursor; we want it visible inside the
        // focused field. SteadyBlock avoids the blink timer being reset by
        // redraws.
        execute!(stdout(), Show, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (visible steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(config.show_icons);
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync focus props before drawing
        tui.height_field.focused = tui.focus == FocusField::Height;
        tui.weight_field.focused = tui.focus == FocusField::Weight;

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let Some(event) = poll_event_timeout(Duration::from_millis(250))? else {
            continue;
        };
        needs_redraw = true;

        match event {
            // Already flagged for redraw, nothing else to do
            TuiEvent::Resize => {}

            TuiEvent::Quit | TuiEvent::ForceQuit => {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    break;
                }
            }

            TuiEvent::NextField | TuiEvent::PrevField => {
                tui.focus = tui.focus.toggle();
            }

            // Everything else is editing, routed to the focused field
            ref editing_event => {
                let field_event = match tui.focus {
                    FocusField::Height => tui.height_field.handle_event(editing_event),
                    FocusField::Weight => tui.weight_field.handle_event(editing_event),
                };
                if let Some(FieldEvent::Changed(text)) = field_event {
                    let action = match tui.focus {
                        FocusField::Height => Action::HeightInput(text),
                        FocusField::Weight => Action::WeightInput(text),
                    };
                    update(&mut app, action);
                }
            }
        }
    }

    ratatui::restore();
    Ok(())
}
