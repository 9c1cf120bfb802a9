use crate::ui::mvi::Reducer;

use super::{ActionParseError, PeopleIntent, PeopleReducer, PeopleState};

/// Apply textual actions to the initial people state.
///
/// Every action is parsed before the first one is applied, so a bad action
/// anywhere in the list yields an error and no state at all.
pub fn replay<S: AsRef<str>>(actions: &[S]) -> Result<PeopleState, ActionParseError> {
    let intents = actions
        .iter()
        .map(|action| action.as_ref().parse::<PeopleIntent>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(intents
        .into_iter()
        .fold(PeopleState::default(), PeopleReducer::reduce))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_script_is_initial_state() {
        let actions: [&str; 0] = [];
        assert_eq!(replay(&actions), Ok(PeopleState::default()));
    }

    #[test]
    fn bad_id_stops_replay() {
        assert_eq!(
            replay(&["CLEAR", "REMOVE_ITEM:x"]),
            Err(ActionParseError::InvalidId {
                kind: "REMOVE_ITEM".to_string(),
                value: "x".to_string(),
            })
        );
    }
}
