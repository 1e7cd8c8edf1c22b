//! Domain types
//!
//! This module contains the data the application reasons about:
//! - Launch records and fetch outcomes
//! - Navigable locations and the view they select
//! - The element tree views are rendered into

pub mod element;
pub mod launch;
pub mod location;
