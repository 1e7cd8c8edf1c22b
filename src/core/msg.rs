use serde::{Deserialize, Serialize};

pub mod fetch;
pub mod navigation;
pub mod system;
pub mod ui;

use fetch::FetchMsg;
use navigation::NavigationMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Location changes (handled by the location synchronizer)
    Navigation(NavigationMsg),

    // Search field and focus (delegated to UiState)
    Ui(UiMsg),

    // Data-source completions (handled by the view controller)
    Fetch(FetchMsg),
}

impl Msg {
    /// Whether this message completes an outstanding fetch
    pub fn is_fetch_completion(&self) -> bool {
        matches!(self, Msg::Fetch(_))
    }
}
