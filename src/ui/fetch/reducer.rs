//! Reducer for the users fetch.

use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::FetchState;

pub struct FetchReducer;

impl Reducer for FetchReducer {
    type State = FetchState;
    type Intent = FetchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Started { generation } => FetchState {
                loading: true,
                generation,
                ..state
            },
            // Completion of a fetch that is no longer current
            FetchIntent::Loaded { generation, .. } | FetchIntent::Failed { generation }
                if generation != state.generation =>
            {
                state
            }
            FetchIntent::Loaded { users, .. } => FetchState {
                users,
                loading: false,
                ..state
            },
            FetchIntent::Failed { .. } => FetchState {
                loading: false,
                ..state
            },
        }
    }
}
