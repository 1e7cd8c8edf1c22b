//! View-state controller
//!
//! Maps the current location onto the mounted view and drives the busy/idle
//! cycle around each fetch. Every operation here is split in two halves: the
//! entry half mutates state and returns the fetch command, the completion
//! half runs when the matching `Msg::Fetch` arrives.
//!
//! Ordering within one cycle is fixed: busy is entered before the fetch
//! command is returned, and left before the outcome is stored.

use crate::{
    core::{
        cmd::Cmd,
        msg::system::SystemMsg,
        state::{
            page::{DetailState, FrontpageState, MountId, Page, SearchResults},
            AppState,
        },
    },
    domain::{
        launch::{DetailOutcome, SearchOutcome},
        location::{Location, ViewState},
    },
};

/// What a detail completion did to the mounted view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailRenderOutcome {
    /// The article was stored for rendering
    Rendered,
    /// The record was unavailable; the not-found message is shown
    NotFound,
    /// The completion belonged to a view that is no longer mounted
    Discarded,
}

/// Mount the view selected by `location`, replacing whatever was mounted.
pub fn route(state: &mut AppState, location: &Location) -> Vec<Cmd> {
    state.page.mount = state.page.mount.next();
    let view = location.view_state();
    tracing::debug!(mount = state.page.mount.0, ?view, "route");
    state.system.update(SystemMsg::ClearStatusMessage);

    match view {
        ViewState::Detail { id } => {
            state.ui.reset_for_detail();
            run_detail(state, id)
        }
        ViewState::Frontpage { query } => {
            state.ui.reset_for_frontpage(query.as_deref());
            state.page.page = Page::Frontpage(FrontpageState::new(None));
            match query {
                Some(query) => run_search(state, query),
                None => vec![],
            }
        }
    }
}

/// Start a search in the mounted frontpage.
///
/// Previous results are removed before the busy state is entered, so the
/// loading indicator never shares the page with stale results.
pub fn run_search(state: &mut AppState, query: String) -> Vec<Cmd> {
    let mount = state.page.mount;
    let Page::Frontpage(front) = &mut state.page.page else {
        tracing::warn!("search requested without a mounted frontpage");
        return vec![];
    };

    front.results = None;
    front.busy.enter();
    front.query = Some(query.clone());

    vec![Cmd::SearchLaunches { mount, query }]
}

/// Store a search outcome. Returns `false` when the completion was dropped
/// because another view has been mounted since.
pub fn finish_search(
    state: &mut AppState,
    mount: MountId,
    query: String,
    outcome: SearchOutcome,
) -> bool {
    if mount != state.page.mount {
        tracing::debug!(
            stale = mount.0,
            current = state.page.mount.0,
            "dropping search completion for unmounted view"
        );
        return false;
    }
    let Page::Frontpage(front) = &mut state.page.page else {
        return false;
    };

    front.busy.leave();
    front.results = Some(SearchResults { query, outcome });
    true
}

/// Mount the detail view for `id` and start its single fetch.
///
/// The page (with its back link) is visible immediately; the article or the
/// not-found message follows once the fetch completes.
pub fn run_detail(state: &mut AppState, id: String) -> Vec<Cmd> {
    let mount = state.page.mount;
    let mut detail = DetailState::new(id.clone());
    detail.busy.enter();
    state.page.page = Page::Detail(detail);

    vec![Cmd::FetchLaunch { mount, id }]
}

pub fn finish_detail(
    state: &mut AppState,
    mount: MountId,
    outcome: DetailOutcome,
) -> DetailRenderOutcome {
    if mount != state.page.mount {
        tracing::debug!(
            stale = mount.0,
            current = state.page.mount.0,
            "dropping launch completion for unmounted view"
        );
        return DetailRenderOutcome::Discarded;
    }
    let Page::Detail(detail) = &mut state.page.page else {
        return DetailRenderOutcome::Discarded;
    };

    detail.busy.leave();
    let rendered = match &outcome {
        DetailOutcome::Found(_) => DetailRenderOutcome::Rendered,
        DetailOutcome::Unavailable => DetailRenderOutcome::NotFound,
    };
    detail.outcome = Some(outcome);
    rendered
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_helpers::{sample_detail, sample_summary};

    #[test]
    fn test_route_without_params_mounts_empty_frontpage() {
        let mut state = AppState::default();

        let cmds = route(&mut state, &Location::root());

        assert!(cmds.is_empty());
        assert_eq!(state.page.mount, MountId(1));
        assert_eq!(state.page.view_state(), ViewState::Frontpage { query: None });
        assert!(!state.is_busy());
    }

    #[test]
    fn test_route_with_query_starts_search() {
        let mut state = AppState::default();

        let cmds = route(&mut state, &Location::search("falcon"));

        assert_eq!(
            cmds,
            vec![Cmd::SearchLaunches {
                mount: MountId(1),
                query: "falcon".to_string()
            }]
        );
        assert!(state.is_busy());
        assert_eq!(state.ui.input.value, "falcon");
    }

    #[test]
    fn test_route_id_takes_precedence_over_query() {
        let mut state = AppState::default();

        let cmds = route(&mut state, &Location::parse("/?id=42&query=rocket"));

        assert_eq!(
            cmds,
            vec![Cmd::FetchLaunch {
                mount: MountId(1),
                id: "42".to_string()
            }]
        );
        assert_eq!(
            state.page.view_state(),
            ViewState::Detail {
                id: "42".to_string()
            }
        );
    }

    #[test]
    fn test_run_search_clears_previous_results_before_busy() {
        let mut state = AppState::default();
        route(&mut state, &Location::search("falcon"));
        finish_search(&mut state, MountId(1), "falcon".to_string(), SearchOutcome::Empty);
        assert!(state.page.frontpage().and_then(|f| f.results.as_ref()).is_some());

        let cmds = run_search(&mut state, "electron".to_string());

        let front = state.page.frontpage().cloned().unwrap_or_default();
        assert!(front.results.is_none());
        assert!(front.busy.is_busy());
        assert_eq!(front.query.as_deref(), Some("electron"));
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn test_finish_search_leaves_busy_and_stores_outcome() {
        let mut state = AppState::default();
        route(&mut state, &Location::search("falcon"));
        let found = SearchOutcome::Found(vec![sample_summary("1", "Falcon 9")]);

        assert!(finish_search(&mut state, MountId(1), "falcon".to_string(), found.clone()));

        let front = state.page.frontpage().cloned().unwrap_or_default();
        assert!(!front.busy.is_busy());
        assert_eq!(
            front.results,
            Some(SearchResults {
                query: "falcon".to_string(),
                outcome: found
            })
        );
    }

    #[test]
    fn test_stale_search_completion_is_dropped() {
        let mut state = AppState::default();
        route(&mut state, &Location::search("falcon"));
        route(&mut state, &Location::root());

        let applied = finish_search(
            &mut state,
            MountId(1),
            "falcon".to_string(),
            SearchOutcome::Failed,
        );

        assert!(!applied);
        let front = state.page.frontpage().cloned().unwrap_or_default();
        assert!(front.results.is_none());
        assert!(!front.busy.is_busy());
    }

    #[test]
    fn test_run_detail_issues_one_fetch() {
        let mut state = AppState::default();
        state.page.mount = MountId(4);

        let cmds = run_detail(&mut state, "42".to_string());

        assert_eq!(
            cmds,
            vec![Cmd::FetchLaunch {
                mount: MountId(4),
                id: "42".to_string()
            }]
        );
        assert!(state.is_busy());
    }

    #[test]
    fn test_finish_detail_outcomes() {
        let mut state = AppState::default();
        route(&mut state, &Location::detail("42"));

        let outcome = finish_detail(&mut state, MountId(1), DetailOutcome::Unavailable);
        assert_eq!(outcome, DetailRenderOutcome::NotFound);
        assert!(!state.is_busy());

        route(&mut state, &Location::detail("42"));
        let found = DetailOutcome::Found(Box::new(sample_detail("42")));
        assert_eq!(
            finish_detail(&mut state, MountId(2), found),
            DetailRenderOutcome::Rendered
        );
        assert_eq!(
            finish_detail(&mut state, MountId(1), DetailOutcome::Unavailable),
            DetailRenderOutcome::Discarded
        );
        assert!(matches!(
            state.page.detail().and_then(|d| d.outcome.as_ref()),
            Some(DetailOutcome::Found(_))
        ));
    }

    #[test]
    fn test_detail_completion_after_navigating_to_frontpage_is_discarded() {
        let mut state = AppState::default();
        route(&mut state, &Location::detail("42"));
        route(&mut state, &Location::root());

        assert_eq!(
            finish_detail(&mut state, MountId(1), DetailOutcome::Unavailable),
            DetailRenderOutcome::Discarded
        );
        assert!(state.page.frontpage().is_some());
    }
}
