use serde::{Deserialize, Serialize};

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    // Search field editing
    InsertChar(char),
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearInput,

    // Focus movement between the search field and links
    FocusNext,
    FocusPrev,
    FocusInput,
}
