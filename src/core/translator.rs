use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{navigation::NavigationMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::{ui::Focus, AppState},
    },
    presentation::{config::keybindings::Action, view},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on focus and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => translate_paste(&text, state),

        // System events
        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

fn is_editing(state: &AppState) -> bool {
    state.ui.is_editing() && state.page.frontpage().is_some()
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    if is_editing(state) {
        if let Some(msg) = translate_input_key(key) {
            return vec![Msg::Ui(msg)];
        }
    }

    translate_bound_key(key, state)
}

/// Keys consumed by the search field while it has focus
fn translate_input_key(key: KeyEvent) -> Option<UiMsg> {
    match key.code {
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            Some(UiMsg::InsertChar(c))
        }
        KeyCode::Backspace => Some(UiMsg::DeleteBackward),
        KeyCode::Delete => Some(UiMsg::DeleteForward),
        KeyCode::Left if key.modifiers == KeyModifiers::NONE => Some(UiMsg::CursorLeft),
        KeyCode::Right if key.modifiers == KeyModifiers::NONE => Some(UiMsg::CursorRight),
        KeyCode::Left | KeyCode::Right => None,
        KeyCode::Home => Some(UiMsg::CursorHome),
        KeyCode::End => Some(UiMsg::CursorEnd),
        _ => None,
    }
}

fn translate_bound_key(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    let key = KeyEvent::new(key.code, key.modifiers);
    match state.config.config.keybindings.get(&vec![key]) {
        Some(action) => translate_action_to_msg(action, state),
        None => vec![], // No matching keybinding found
    }
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Back => vec![Msg::Navigation(NavigationMsg::Back)],
        Action::Forward => vec![Msg::Navigation(NavigationMsg::Forward)],
        Action::FocusNext => vec![Msg::Ui(UiMsg::FocusNext)],
        Action::FocusPrev => vec![Msg::Ui(UiMsg::FocusPrev)],
        Action::FocusSearch => vec![Msg::Ui(UiMsg::FocusInput)],
        Action::ClearInput => vec![Msg::Ui(UiMsg::ClearInput)],
        Action::Activate => translate_activate(state),
    }
}

/// Enter on the search field submits the form; on a link it follows it.
fn translate_activate(state: &AppState) -> Vec<Msg> {
    match state.ui.focus {
        Focus::Input if state.page.frontpage().is_some() => {
            if state.is_busy() {
                return vec![Msg::System(SystemMsg::UpdateStatusMessage(
                    "Search in progress".to_string(),
                ))];
            }
            vec![Msg::Navigation(NavigationMsg::SubmitSearch(
                state.ui.input.value.clone(),
            ))]
        }
        Focus::Input => vec![],
        Focus::Link(index) => view::render_page(state)
            .links()
            .get(index)
            .map(|href| vec![Msg::Navigation(NavigationMsg::FollowLink(href.to_string()))])
            .unwrap_or_default(),
    }
}

fn translate_paste(text: &str, state: &AppState) -> Vec<Msg> {
    if !is_editing(state) {
        return vec![];
    }
    text.chars()
        .filter(|c| !c.is_control())
        .map(|c| Msg::Ui(UiMsg::InsertChar(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        core::{
            controller::finish_search,
            navigation::init,
            state::page::MountId,
        },
        domain::{launch::SearchOutcome, location::Location},
        infrastructure::config::Config,
        test_helpers::sample_summary,
    };

    fn state_at(location: Location) -> Result<AppState> {
        let mut state = AppState::new_with_config(Config::bundled()?);
        init(&mut state, location);
        Ok(state)
    }

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_ctrl_c_always_quits() -> Result<()> {
        let state = state_at(Location::root())?;
        let msgs = translate_raw_to_domain(
            RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            &state,
        );
        assert_eq!(msgs, vec![Msg::System(SystemMsg::Quit)]);
        Ok(())
    }

    #[rstest]
    #[case(KeyCode::Char('q'), UiMsg::InsertChar('q'))]
    #[case(KeyCode::Char('j'), UiMsg::InsertChar('j'))]
    #[case(KeyCode::Backspace, UiMsg::DeleteBackward)]
    #[case(KeyCode::Delete, UiMsg::DeleteForward)]
    #[case(KeyCode::Home, UiMsg::CursorHome)]
    fn test_editing_keys_go_to_search_field(
        #[case] code: KeyCode,
        #[case] expected: UiMsg,
    ) -> Result<()> {
        let state = state_at(Location::root())?;
        assert_eq!(
            translate_raw_to_domain(key(code), &state),
            vec![Msg::Ui(expected)]
        );
        Ok(())
    }

    #[test]
    fn test_bound_keys_apply_outside_search_field() -> Result<()> {
        let state = state_at(Location::detail("42"))?;

        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('q')), &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Backspace), &state),
            vec![Msg::Navigation(NavigationMsg::Back)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Tab), &state),
            vec![Msg::Ui(UiMsg::FocusNext)]
        );
        Ok(())
    }

    #[test]
    fn test_enter_submits_raw_input_value() -> Result<()> {
        let mut state = state_at(Location::root())?;
        for c in " falcon".chars() {
            state.ui.input.insert(c);
        }

        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Enter), &state),
            vec![Msg::Navigation(NavigationMsg::SubmitSearch(
                " falcon".to_string()
            ))]
        );
        Ok(())
    }

    #[test]
    fn test_enter_while_busy_reports_status() -> Result<()> {
        let state = state_at(Location::search("falcon"))?;

        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Enter), &state),
            vec![Msg::System(SystemMsg::UpdateStatusMessage(
                "Search in progress".to_string()
            ))]
        );
        Ok(())
    }

    #[test]
    fn test_enter_on_focused_link_follows_it() -> Result<()> {
        let mut state = state_at(Location::search("falcon"))?;
        finish_search(
            &mut state,
            MountId(1),
            "falcon".to_string(),
            SearchOutcome::Found(vec![sample_summary("a", "A"), sample_summary("b", "B")]),
        );
        state.ui.focus = Focus::Link(1);

        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Enter), &state),
            vec![Msg::Navigation(NavigationMsg::FollowLink("/?id=b".to_string()))]
        );
        Ok(())
    }

    #[test]
    fn test_paste_inserts_printable_chars_only_when_editing() -> Result<()> {
        let state = state_at(Location::root())?;
        assert_eq!(
            translate_raw_to_domain(RawMsg::Paste("ab\n".to_string()), &state),
            vec![
                Msg::Ui(UiMsg::InsertChar('a')),
                Msg::Ui(UiMsg::InsertChar('b'))
            ]
        );

        let detail = state_at(Location::detail("42"))?;
        assert!(translate_raw_to_domain(RawMsg::Paste("ab".to_string()), &detail).is_empty());
        Ok(())
    }

    #[test]
    fn test_tick_and_render_are_ignored() -> Result<()> {
        let state = state_at(Location::root())?;
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
        Ok(())
    }
}
