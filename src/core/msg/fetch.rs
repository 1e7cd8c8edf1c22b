use serde::{Deserialize, Serialize};

use crate::{
    core::state::page::MountId,
    domain::launch::{DetailOutcome, SearchOutcome},
};

/// Completions of data-source requests, tagged with the mount that issued them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchMsg {
    SearchCompleted {
        mount: MountId,
        query: String,
        outcome: SearchOutcome,
    },
    LaunchLoaded {
        mount: MountId,
        id: String,
        outcome: DetailOutcome,
    },
}

impl FetchMsg {
    pub fn mount(&self) -> MountId {
        match self {
            FetchMsg::SearchCompleted { mount, .. } | FetchMsg::LaunchLoaded { mount, .. } => {
                *mount
            }
        }
    }
}
