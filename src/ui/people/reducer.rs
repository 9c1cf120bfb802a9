//! Reducer for the people list.

use crate::ui::mvi::Reducer;

use super::intent::PeopleIntent;
use super::state::{seed_people, PeopleState};

pub struct PeopleReducer;

impl Reducer for PeopleReducer {
    type State = PeopleState;
    type Intent = PeopleIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PeopleIntent::Clear => PeopleState {
                people: Vec::new(),
                ..state
            },
            PeopleIntent::Reset => PeopleState {
                people: seed_people(),
                ..state
            },
            PeopleIntent::RemoveItem { id } => {
                let PeopleState {
                    people,
                    user,
                    login,
                } = state;
                PeopleState {
                    people: people.into_iter().filter(|person| person.id != id).collect(),
                    user,
                    login,
                }
            }
        }
    }
}
