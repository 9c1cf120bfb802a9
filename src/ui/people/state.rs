use serde::Serialize;

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: u32,
    pub name: String,
}

impl Person {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Seed list used as the initial state and as the `Reset` target.
///
/// Returns a new `Vec` on every call so no caller can alter a later reset.
pub fn seed_people() -> Vec<Person> {
    vec![Person::new(1, "Roitai"), Person::new(2, "Tam")]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeopleState {
    /// Display order only; ids are unique as long as the seed is.
    pub people: Vec<Person>,
    pub user: String,
    pub login: bool,
}

impl Default for PeopleState {
    fn default() -> Self {
        Self {
            people: seed_people(),
            user: "TAM".to_string(),
            login: true,
        }
    }
}

impl UiState for PeopleState {}

impl PeopleState {
    pub fn contains(&self, id: u32) -> bool {
        self.people.iter().any(|person| person.id == id)
    }
}
