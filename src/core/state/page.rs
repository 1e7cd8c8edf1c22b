use serde::{Deserialize, Serialize};

use crate::domain::{
    launch::{DetailOutcome, SearchOutcome},
    location::ViewState,
};

/// Generation of the mounted view. Bumped on every route so that fetch
/// completions issued for an earlier mount can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MountId(pub u64);

impl MountId {
    pub fn next(self) -> Self {
        MountId(self.0 + 1)
    }
}

/// Whether a fetch for the mounted view is outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BusyFlag(bool);

impl BusyFlag {
    pub fn enter(&mut self) {
        self.0 = true;
    }

    pub fn leave(&mut self) {
        self.0 = false;
    }

    pub fn is_busy(&self) -> bool {
        self.0
    }
}

/// Results shown below the search form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub query: String,
    pub outcome: SearchOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrontpageState {
    pub query: Option<String>,
    pub busy: BusyFlag,
    pub results: Option<SearchResults>,
}

impl FrontpageState {
    pub fn new(query: Option<String>) -> Self {
        Self {
            query,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    pub id: String,
    pub busy: BusyFlag,
    pub outcome: Option<DetailOutcome>,
}

impl DetailState {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            busy: BusyFlag::default(),
            outcome: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Frontpage(FrontpageState),
    Detail(DetailState),
}

impl Default for Page {
    fn default() -> Self {
        Page::Frontpage(FrontpageState::default())
    }
}

/// The single mounted view and its generation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    pub mount: MountId,
    pub page: Page,
}

impl PageState {
    pub fn view_state(&self) -> ViewState {
        match &self.page {
            Page::Frontpage(front) => ViewState::Frontpage {
                query: front.query.clone(),
            },
            Page::Detail(detail) => ViewState::Detail {
                id: detail.id.clone(),
            },
        }
    }

    pub fn is_busy(&self) -> bool {
        match &self.page {
            Page::Frontpage(front) => front.busy.is_busy(),
            Page::Detail(detail) => detail.busy.is_busy(),
        }
    }

    pub fn frontpage(&self) -> Option<&FrontpageState> {
        match &self.page {
            Page::Frontpage(front) => Some(front),
            Page::Detail(_) => None,
        }
    }

    pub fn detail(&self) -> Option<&DetailState> {
        match &self.page {
            Page::Detail(detail) => Some(detail),
            Page::Frontpage(_) => None,
        }
    }
}
