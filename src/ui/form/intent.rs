use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    FocusNext,
    FocusPrev,
    /// Append a character to the focused text field.
    Input(char),
    /// Delete the last character of the focused text field.
    Backspace,
    /// Capture the current value. Does not clear the fields.
    Submit,
}

impl Intent for FormIntent {}
