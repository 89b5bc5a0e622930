//! # Core Domain Logic
//!
//! Everything that makes `imc` a BMI calculator lives here, and none of it
//! knows about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • bmi (calculation)    │
//!                    │  • classify (ranges)    │
//!                    │  • presentation (tokens)│
//!                    │  • state + update()     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! Data flows one direction: input text → [`state::Measurement`] →
//! [`bmi::compute_bmi`] → [`classify::classify`] → [`presentation`] tokens →
//! rendering. Invalid input is the `f64::NAN` sentinel, never an error.
//!
//! ## Modules
//!
//! - [`bmi`]: the calculation itself
//! - [`classify`]: the eight-way classification and its display messages
//! - [`presentation`]: severity and icon tokens per classification
//! - [`state`]: the `App` struct — all application state in one place
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`config`]: TOML configuration with a defaults → file → env → CLI hierarchy

pub mod action;
pub mod bmi;
pub mod classify;
pub mod config;
pub mod presentation;
pub mod state;
