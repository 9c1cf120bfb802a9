use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::FormState;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::FocusNext => FormState {
                focus: state.focus.next(),
                ..state
            },
            FormIntent::FocusPrev => FormState {
                focus: state.focus.prev(),
                ..state
            },
            FormIntent::Input(ch) => {
                let focus = state.focus;
                if let Some(field) = state.field_mut(focus) {
                    field.push(ch);
                }
                state
            }
            FormIntent::Backspace => {
                let focus = state.focus;
                if let Some(field) = state.field_mut(focus) {
                    field.pop();
                }
                state
            }
            FormIntent::Submit => FormState {
                last_submitted: Some(state.value.clone()),
                ..state
            },
        }
    }
}
