//! Terminal input module.
//!
//! Maps `crossterm` key events into [`Command`]s for the runner. The rules
//! engine only ever sees the [`crate::types::Direction`] inside
//! [`Command::Move`]; everything else is session control.

pub mod map;

pub use water_2048_types as types;

pub use map::{handle_key_event, should_quit, Command};
