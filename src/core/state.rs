pub mod navigation;
pub mod page;
pub mod system;
pub mod ui;

use crate::infrastructure::config::Config;

use navigation::NavigationState;
use page::PageState;
use system::SystemState;
use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub page: PageState,
    pub navigation: NavigationState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the specified config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Whether a fetch for the mounted view is outstanding
    pub fn is_busy(&self) -> bool {
        self.page.is_busy()
    }
}
