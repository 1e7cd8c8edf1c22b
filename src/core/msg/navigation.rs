use serde::{Deserialize, Serialize};

use crate::domain::location::Location;

/// Messages that move between locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMsg {
    /// Seed history with the launch location and route to it
    Init(Location),
    /// Search form submitted with the raw field value
    SubmitSearch(String),
    /// Activate a link on the mounted page
    FollowLink(String),
    /// History back (popstate)
    Back,
    /// History forward (popstate)
    Forward,
}
