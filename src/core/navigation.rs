//! Location synchronizer
//!
//! Keeps the history stack and the mounted view consistent in both
//! directions: form submissions and followed links write new history
//! entries, back/forward re-enter [`route`] for the entry now current.

use crate::{
    core::{
        cmd::Cmd,
        controller::{route, run_search},
        msg::system::SystemMsg,
        state::AppState,
    },
    domain::location::Location,
};

/// Seed history with the launch location and route to it once.
pub fn init(state: &mut AppState, location: Location) -> Vec<Cmd> {
    state.navigation.reset(location.clone());
    route(state, &location)
}

/// Handle a search form submission.
///
/// The raw value is used as-is. Empty submissions and submissions while a
/// fetch is outstanding (submit control disabled) are ignored. A submission
/// pushes `/?query=<value>` without remounting the frontpage.
pub fn submit_search(state: &mut AppState, value: String) -> Vec<Cmd> {
    if value.is_empty() {
        return vec![];
    }
    if state.page.frontpage().is_none() {
        tracing::warn!("search submitted without a mounted frontpage");
        return vec![];
    }
    if state.is_busy() {
        tracing::debug!(%value, "ignoring submission while busy");
        return vec![];
    }

    state.navigation.push(Location::search(value.clone()));
    run_search(state, value)
}

/// Navigate to `href` as a new history entry.
pub fn follow_link(state: &mut AppState, href: &str) -> Vec<Cmd> {
    let location = Location::parse(href);
    state.navigation.push(location.clone());
    route(state, &location)
}

pub fn back(state: &mut AppState) -> Vec<Cmd> {
    match state.navigation.back().cloned() {
        Some(location) => route(state, &location),
        None => {
            state.system.update(SystemMsg::UpdateStatusMessage(
                "No earlier page in history".to_string(),
            ));
            vec![]
        }
    }
}

pub fn forward(state: &mut AppState) -> Vec<Cmd> {
    match state.navigation.forward().cloned() {
        Some(location) => route(state, &location),
        None => {
            state.system.update(SystemMsg::UpdateStatusMessage(
                "No later page in history".to_string(),
            ));
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{controller::finish_search, state::page::MountId},
        domain::{launch::SearchOutcome, location::ViewState},
    };

    #[test]
    fn test_init_replaces_history_and_routes() {
        let mut state = AppState::default();

        let cmds = init(&mut state, Location::detail("42"));

        assert_eq!(state.navigation.len(), 1);
        assert_eq!(state.navigation.current(), &Location::detail("42"));
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn test_submit_pushes_raw_value() {
        let mut state = AppState::default();
        init(&mut state, Location::root());

        let cmds = submit_search(&mut state, " falcon ".to_string());

        assert_eq!(state.navigation.current().query(), Some(" falcon "));
        assert_eq!(state.navigation.len(), 2);
        assert_eq!(
            cmds,
            vec![Cmd::SearchLaunches {
                mount: MountId(1),
                query: " falcon ".to_string()
            }]
        );
    }

    #[test]
    fn test_submit_empty_value_is_ignored() {
        let mut state = AppState::default();
        init(&mut state, Location::root());

        assert!(submit_search(&mut state, String::new()).is_empty());
        assert_eq!(state.navigation.len(), 1);
    }

    #[test]
    fn test_submit_while_busy_is_ignored() {
        let mut state = AppState::default();
        init(&mut state, Location::search("falcon"));

        assert!(submit_search(&mut state, "electron".to_string()).is_empty());
        assert_eq!(state.navigation.len(), 1);
    }

    #[test]
    fn test_back_restores_prior_view() {
        let mut state = AppState::default();
        init(&mut state, Location::root());
        submit_search(&mut state, "falcon".to_string());
        finish_search(&mut state, MountId(1), "falcon".to_string(), SearchOutcome::Empty);

        let cmds = back(&mut state);

        assert!(cmds.is_empty());
        assert_eq!(state.page.view_state(), ViewState::Frontpage { query: None });
        assert!(state.page.frontpage().and_then(|f| f.results.as_ref()).is_none());
        assert_eq!(state.ui.input.value, "");
    }

    #[test]
    fn test_back_at_oldest_entry_reports_status() {
        let mut state = AppState::default();
        init(&mut state, Location::root());

        assert!(back(&mut state).is_empty());
        assert_eq!(
            state.system.status_message(),
            Some(&"No earlier page in history".to_string())
        );
        assert_eq!(state.page.mount, MountId(1));
    }

    #[test]
    fn test_follow_link_then_back_and_forward() {
        let mut state = AppState::default();
        init(&mut state, Location::root());

        let cmds = follow_link(&mut state, "/?id=42");
        assert_eq!(cmds.len(), 1);
        assert_eq!(
            state.page.view_state(),
            ViewState::Detail {
                id: "42".to_string()
            }
        );

        back(&mut state);
        assert_eq!(state.page.view_state(), ViewState::Frontpage { query: None });

        let cmds = forward(&mut state);
        assert_eq!(
            cmds,
            vec![Cmd::FetchLaunch {
                mount: MountId(4),
                id: "42".to_string()
            }]
        );
    }
}
