//! Infrastructure layer
//!
//! This module handles external integrations:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - The Launch Library client

pub mod cli;
pub mod config;
pub mod launch_api;
pub mod tui;
