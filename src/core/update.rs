use crate::{
    core::{
        cmd::Cmd,
        controller::{finish_detail, finish_search},
        msg::{fetch::FetchMsg, navigation::NavigationMsg, Msg},
        navigation,
        state::{ui::Focus, AppState},
    },
    presentation::view,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // UI messages (delegated to UiState, bounded by the mounted page)
        Msg::Ui(ui_msg) => {
            let page = view::render_page(&state);
            let link_count = page.links().len();
            let has_input = page.find_by_tag("input").is_some();
            state.ui.update(ui_msg, link_count, has_input);
            (state, vec![])
        }

        // Location changes
        Msg::Navigation(nav_msg) => {
            let commands = match nav_msg {
                NavigationMsg::Init(location) => navigation::init(&mut state, location),
                NavigationMsg::SubmitSearch(value) => navigation::submit_search(&mut state, value),
                NavigationMsg::FollowLink(href) => navigation::follow_link(&mut state, &href),
                NavigationMsg::Back => navigation::back(&mut state),
                NavigationMsg::Forward => navigation::forward(&mut state),
            };
            (state, commands)
        }

        // Fetch completions
        Msg::Fetch(fetch_msg) => {
            match fetch_msg {
                FetchMsg::SearchCompleted {
                    mount,
                    query,
                    outcome,
                } => {
                    finish_search(&mut state, mount, query, outcome);
                }
                FetchMsg::LaunchLoaded { mount, id, outcome } => {
                    let rendered = finish_detail(&mut state, mount, outcome);
                    tracing::debug!(%id, ?rendered, "launch completion");
                }
            }
            clamp_focus(&mut state);
            (state, vec![])
        }
    }
}

// A completion can shrink the page under a focused link.
fn clamp_focus(state: &mut AppState) {
    let Some(index) = state.ui.focused_link() else {
        return;
    };
    let page = view::render_page(state);
    let link_count = page.links().len();
    if index < link_count {
        return;
    }
    state.ui.focus = if page.find_by_tag("input").is_some() || link_count == 0 {
        Focus::Input
    } else {
        Focus::Link(link_count - 1)
    };
}
