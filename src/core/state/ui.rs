use tui_textarea::{CursorMove, TextArea};

use crate::core::msg::ui::UiMsg;

/// Single-line text field backing the search form
///
/// Value and cursor are the source of truth. Edits go through a temporary
/// `TextArea` hydrated from them, and the result is written back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputState {
    pub value: String,
    /// Cursor position in characters, `0..=value.chars().count()`
    pub cursor: usize,
}

impl InputState {
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// A `TextArea` holding the value with the cursor in place
    pub fn textarea(&self) -> TextArea<'static> {
        let mut textarea = TextArea::new(vec![self.value.clone()]);
        textarea.move_cursor(CursorMove::Jump(
            0,
            u16::try_from(self.cursor).unwrap_or(u16::MAX),
        ));
        textarea
    }

    fn edit(&mut self, apply: impl FnOnce(&mut TextArea<'static>)) {
        let mut textarea = self.textarea();
        apply(&mut textarea);
        self.value = textarea.lines().join("");
        self.cursor = textarea.cursor().1;
    }

    pub fn insert(&mut self, c: char) {
        // single line
        if c.is_control() {
            return;
        }
        self.edit(|t| t.insert_char(c));
    }

    pub fn delete_backward(&mut self) {
        self.edit(|t| {
            t.delete_char();
        });
    }

    pub fn delete_forward(&mut self) {
        self.edit(|t| {
            t.delete_next_char();
        });
    }

    pub fn move_left(&mut self) {
        self.edit(|t| t.move_cursor(CursorMove::Back));
    }

    pub fn move_right(&mut self) {
        self.edit(|t| t.move_cursor(CursorMove::Forward));
    }

    pub fn move_home(&mut self) {
        self.edit(|t| t.move_cursor(CursorMove::Head));
    }

    pub fn move_end(&mut self) {
        self.edit(|t| t.move_cursor(CursorMove::End));
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// Which interactive element receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    /// Index into the mounted page's links, in document order
    Link(usize),
}

/// UI-related state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    pub input: InputState,
    pub focus: Focus,
}

impl UiState {
    /// Fresh UI for a newly mounted frontpage
    pub fn reset_for_frontpage(&mut self, query: Option<&str>) {
        self.input = InputState::with_value(query.unwrap_or_default());
        self.focus = Focus::Input;
    }

    /// Fresh UI for a newly mounted detail page; the back link takes focus
    pub fn reset_for_detail(&mut self) {
        self.input = InputState::default();
        self.focus = Focus::Link(0);
    }

    pub fn is_editing(&self) -> bool {
        self.focus == Focus::Input
    }

    pub fn focused_link(&self) -> Option<usize> {
        match self.focus {
            Focus::Link(index) => Some(index),
            Focus::Input => None,
        }
    }

    /// UI-specific update function.
    ///
    /// `link_count` is the number of links on the mounted page and
    /// `has_input` whether it carries the search field; both bound focus
    /// movement.
    pub fn update(&mut self, msg: UiMsg, link_count: usize, has_input: bool) {
        match msg {
            UiMsg::InsertChar(c) => self.input.insert(c),
            UiMsg::DeleteBackward => self.input.delete_backward(),
            UiMsg::DeleteForward => self.input.delete_forward(),
            UiMsg::CursorLeft => self.input.move_left(),
            UiMsg::CursorRight => self.input.move_right(),
            UiMsg::CursorHome => self.input.move_home(),
            UiMsg::CursorEnd => self.input.move_end(),
            UiMsg::ClearInput => self.input.clear(),
            UiMsg::FocusNext => self.focus = next_focus(self.focus, link_count, has_input),
            UiMsg::FocusPrev => self.focus = prev_focus(self.focus, link_count, has_input),
            UiMsg::FocusInput if has_input => self.focus = Focus::Input,
            UiMsg::FocusInput => {}
        }
    }
}

// Focus order: input (if any), then links, wrapping around.
fn next_focus(focus: Focus, link_count: usize, has_input: bool) -> Focus {
    match focus {
        Focus::Input if link_count > 0 => Focus::Link(0),
        Focus::Input => Focus::Input,
        Focus::Link(i) if i + 1 < link_count => Focus::Link(i + 1),
        Focus::Link(_) if has_input => Focus::Input,
        Focus::Link(_) if link_count > 0 => Focus::Link(0),
        Focus::Link(_) => Focus::Input,
    }
}

fn prev_focus(focus: Focus, link_count: usize, has_input: bool) -> Focus {
    match focus {
        Focus::Input if link_count > 0 => Focus::Link(link_count - 1),
        Focus::Input => Focus::Input,
        Focus::Link(0) if has_input => Focus::Input,
        Focus::Link(0) if link_count > 0 => Focus::Link(link_count - 1),
        Focus::Link(i) if i < link_count => Focus::Link(i - 1),
        Focus::Link(_) if has_input => Focus::Input,
        Focus::Link(_) => Focus::Input,
    }
}
