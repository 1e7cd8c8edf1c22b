//! View renderer
//!
//! Pure functions from state and fetch outcomes to element trees. No I/O and
//! no terminal types: the page component draws whatever these return.

use chrono::{DateTime, Utc};

use crate::{
    core::state::{
        page::{DetailState, FrontpageState, Page},
        AppState,
    },
    domain::{
        element::{el, no_attrs, text, Node},
        launch::{DetailOutcome, LaunchDetail, LaunchSummary, SearchOutcome},
        location::Location,
    },
};

pub const HEADING: &str = "Launch search 🚀";
pub const LOADING: &str = "Fetching data...";
pub const SUBMIT_LABEL: &str = "Search";
pub const BACK_LABEL: &str = "Back";
pub const NOT_FOUND: &str = "No launch found. 😢";

pub fn failed_message(query: &str) -> String {
    format!("error searching for \"{query}\"")
}

pub fn empty_message(query: &str) -> String {
    format!("no results for \"{query}\"")
}

fn loading() -> Node {
    el("div", [("class", "loading")], [text(LOADING)])
}

fn format_window(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Search form with the field pre-filled and the submit control disabled
/// while busy.
pub fn render_search_form(query: Option<&str>, busy: bool) -> Node {
    let button_attrs: Vec<(&str, &str)> = if busy {
        vec![("type", "submit"), ("disabled", "disabled")]
    } else {
        vec![("type", "submit")]
    };
    el(
        "form",
        no_attrs(),
        [
            el(
                "input",
                [("name", "query"), ("value", query.unwrap_or_default())],
                [],
            ),
            el("button", button_attrs, [text(SUBMIT_LABEL)]),
        ],
    )
}

fn render_result(summary: &LaunchSummary) -> Node {
    el(
        "div",
        [("class", "result")],
        [
            el(
                "p",
                [("class", "result__name")],
                [el(
                    "a",
                    [("href", Location::detail(&summary.id).href())],
                    [text(&summary.name)],
                )],
            ),
            el(
                "p",
                [("class", "result__status")],
                [text(format!("🚀 {}", summary.status.name))],
            ),
            el(
                "p",
                [("class", "result__mission")],
                [
                    el("span", [("class", "label")], [text("Mission:")]),
                    text(format!(" {}", summary.mission_name.as_deref().unwrap_or_default())),
                ],
            ),
        ],
    )
}

/// Results list for one search. Failed and empty outcomes produce a single
/// item each, with distinct texts; found launches keep their order.
pub fn render_results_list(outcome: &SearchOutcome, query: &str) -> Node {
    let items = match outcome {
        SearchOutcome::Failed => vec![el("li", no_attrs(), [text(failed_message(query))])],
        SearchOutcome::Empty => vec![el("li", no_attrs(), [text(empty_message(query))])],
        SearchOutcome::Found(launches) => {
            let header = el(
                "li",
                [("class", "results__header")],
                [el(
                    "h4",
                    [("class", "result_title")],
                    [text(format!("Search results for \"{query}\""))],
                )],
            );
            std::iter::once(header)
                .chain(launches.iter().map(render_result))
                .collect()
        }
    };
    el("ul", [("class", "results")], items)
}

pub fn render_detail_article(detail: &LaunchDetail) -> Node {
    let mut sections = vec![
        el("h1", no_attrs(), [text(&detail.name)]),
        el(
            "div",
            [("class", "window")],
            [
                el(
                    "p",
                    no_attrs(),
                    [text(format!(
                        "Window opens: {}",
                        format_window(&detail.window_start)
                    ))],
                ),
                el(
                    "p",
                    no_attrs(),
                    [text(format!(
                        "Window closes: {}",
                        format_window(&detail.window_end)
                    ))],
                ),
            ],
        ),
        el(
            "div",
            [("class", "status")],
            [
                el(
                    "h2",
                    no_attrs(),
                    [text(format!("Status: {}", detail.status.name))],
                ),
                el("p", no_attrs(), [text(&detail.status.description)]),
            ],
        ),
    ];
    if let Some(mission) = &detail.mission {
        sections.push(el(
            "div",
            [("class", "mission")],
            [
                el(
                    "h2",
                    no_attrs(),
                    [text(format!("Mission: {}", mission.name))],
                ),
                el("p", no_attrs(), [text(&mission.description)]),
            ],
        ));
    }
    let info = el("section", [("class", "info")], sections);

    let mut children = vec![info];
    if let Some(image_url) = &detail.image_url {
        children.push(el(
            "div",
            [("class", "image")],
            [el("img", [("src", image_url.as_str()), ("alt", "")], [])],
        ));
    }
    el("article", [("class", "launch")], children)
}

/// Frontpage: heading, form, then either the loading node or the results.
///
/// `input` is the live value of the search field.
pub fn render_frontpage(front: &FrontpageState, input: &str) -> Node {
    let busy = front.busy.is_busy();
    let mut children = vec![
        el("h3", [("class", "heading")], [text(HEADING)]),
        render_search_form(Some(input), busy),
    ];
    if busy {
        children.push(loading());
    } else if let Some(results) = &front.results {
        children.push(render_results_list(&results.outcome, &results.query));
    }
    el("main", no_attrs(), children)
}

pub fn render_detail_page(detail: &DetailState) -> Node {
    let mut children = vec![el(
        "div",
        [("class", "back")],
        [el("a", [("href", Location::root().href())], [text(BACK_LABEL)])],
    )];
    if detail.busy.is_busy() {
        children.push(loading());
    } else {
        match &detail.outcome {
            Some(DetailOutcome::Found(launch)) => children.push(render_detail_article(launch)),
            Some(DetailOutcome::Unavailable) => {
                children.push(el("p", [("class", "not-found")], [text(NOT_FOUND)]))
            }
            None => {}
        }
    }
    el("main", no_attrs(), children)
}

/// The subtree to mount for the current state
pub fn render_page(state: &AppState) -> Node {
    match &state.page.page {
        Page::Frontpage(front) => render_frontpage(front, &state.ui.input.value),
        Page::Detail(detail) => render_detail_page(detail),
    }
}
