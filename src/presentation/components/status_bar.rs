//! Status bar component
//!
//! Displays the current location and system status at the bottom of the
//! screen. This is a pure, stateless component that renders from AppState.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

/// Status bar component
///
/// Two lines: the location line (href, history position, busy marker) and
/// the status message line.
#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),    // Main content area (not used by status bar)
                Constraint::Length(1), // Location line
                Constraint::Length(1), // Status message line
            ],
        )
        .split(area);

        // Clear the status bar area
        frame.render_widget(Clear, layout[1]);
        frame.render_widget(Clear, layout[2]);

        let location_line = Paragraph::new(self.location_line(state))
            .style(Style::default().fg(Color::Gray).bg(Color::Black).italic());
        frame.render_widget(location_line, layout[1]);

        let message = state.system.status_message().cloned().unwrap_or_default();
        frame.render_widget(Paragraph::new(message), layout[2]);
    }

    /// e.g. `/?query=falcon [2/3] loading`
    pub fn location_line(&self, state: &AppState) -> String {
        let history = &state.navigation;
        let mut line = format!(
            "{} [{}/{}]",
            history.current(),
            history.position() + 1,
            history.len()
        );
        if state.is_busy() {
            line.push_str(" loading");
        }
        line
    }
}
