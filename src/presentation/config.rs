//! UI configuration
//!
//! Key bindings for the terminal front end.

pub mod keybindings;

// Re-export for convenience
pub use keybindings::{Action, KeyBindings};
