//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{core::state::AppState, domain::element::Node};

pub mod page;
pub mod status_bar;

pub use page::PageComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub page: PageComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    ///
    /// `mounted` is the subtree the app shell currently holds.
    pub fn render(&self, frame: &mut Frame, state: &AppState, mounted: Option<&Node>) {
        let area = frame.area();

        // Create layout: [page, status bar (2 rows)]
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),    // Page
                Constraint::Length(2), // Status bar (2 rows)
            ])
            .split(area);

        self.page.view(state, mounted, frame, layout[0]);
        self.status_bar.view(state, frame, layout[1]);
    }
}
