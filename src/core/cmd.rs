use serde::{Deserialize, Serialize};

use crate::core::state::page::MountId;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects; fetch commands carry the mount they were issued for
/// so that their completions can be matched against the mounted view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Data-source requests
    SearchLaunches { mount: MountId, query: String },
    FetchLaunch { mount: MountId, id: String },

    // UI-related commands
    Tui(TuiCommand),
}

impl Cmd {
    /// Whether the command completes later with a `Msg::Fetch`
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::SearchLaunches { .. } | Cmd::FetchLaunch { .. } => true,
            Cmd::Tui(..) => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cmd::SearchLaunches { .. } => "SearchLaunches",
            Cmd::FetchLaunch { .. } => "FetchLaunch",
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)",
        }
    }
}
