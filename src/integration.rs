//! Integration layer
//!
//! This module wires the pure core to the outside world:
//! - Elm runtime (message queues and command execution)
//! - App shell holding the mounted element tree
//! - App runner driving the terminal loop

pub mod app_runner;
pub mod app_shell;
pub mod elm_integration;
