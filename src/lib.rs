//! imc library exports for integration tests

pub mod core;
pub mod tui;
