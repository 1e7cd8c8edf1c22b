//! Presentation layer
//!
//! This module contains the view renderer and the terminal components:
//! - Pure view functions producing element trees
//! - Stateless components drawing them
//! - Configuration (keybindings)

pub mod components;
pub mod config;
pub mod view;
