//! # Launchfinder - Space launch search TUI
//!
//! A terminal client for the Launch Library 2 API, built with Rust and Ratatui.
//! The app behaves like a small single-page site: a search frontpage and a
//! launch detail page, selected by the query parameters of the current
//! location and navigated with an in-memory history.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`state`): Application state (mounted view, history, focus)
//! - **Message** (`msg`): Events that can change the state
//! - **Update** (`update`): Pure functions that transform state
//! - **Command** (`cmd`): Side effects (Launch Library requests, terminal resize)
//! - **View** (`view`): Element trees rendered from state, drawn by components
//!
//! ## Example Usage
//!
//! ```rust
//! use launchfinder::{
//!     core::msg::navigation::NavigationMsg, domain::location::Location, update, AppState, Cmd,
//!     Msg,
//! };
//!
//! // Start at /?query=falcon
//! let init = Msg::Navigation(NavigationMsg::Init(Location::search("falcon")));
//! let (state, commands) = update(init, AppState::default());
//!
//! // The frontpage is mounted busy and a search is requested
//! assert!(state.is_busy());
//! assert!(matches!(commands.as_slice(), [Cmd::SearchLaunches { .. }]));
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and routing
//! - [`domain`] - Launch records, locations and the element tree
//! - [`infrastructure`] - Terminal, CLI, configuration and the API client
//! - [`integration`] - Runtime, app shell and the main loop
//! - [`presentation`] - View functions and terminal components
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod test_helpers;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::elm_integration::{ElmRuntime, ElmRuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
