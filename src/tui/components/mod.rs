//! # TUI Components
//!
//! All UI components for the terminal form.
//!
//! Two patterns, same as everywhere ratatui code grows up React-adjacent:
//!
//! - **Stateless, props-based**: [`TitleBar`], [`ResultPanel`] — receive all
//!   data as struct fields and just draw it.
//! - **Stateful, event-driven**: [`NumberField`] — owns its text buffer and
//!   cursor, emits [`FieldEvent`] values the event loop turns into actions.
//!
//! Each component file contains its state types, event types, rendering,
//! event handling, and tests. One file tells the whole story of a component.

pub mod number_field;
pub mod result_panel;
pub mod title_bar;

pub use number_field::{FieldEvent, NumberField};
pub use result_panel::ResultPanel;
pub use title_bar::TitleBar;
