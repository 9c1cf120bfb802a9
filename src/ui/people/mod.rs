//! People list demo.
//!
//! A reducer over `{ people, user, login }` with three intents: remove one
//! person, restore the seed list, clear the list.
//!
//! - `state.rs` - `Person`, `PeopleState`, seed data
//! - `intent.rs` - `PeopleIntent` and its textual form
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `script.rs` - Replaying a list of textual actions

mod intent;
mod reducer;
mod script;
mod state;

pub use intent::{ActionParseError, PeopleIntent};
pub use reducer::PeopleReducer;
pub use script::replay;
pub use state::{seed_people, PeopleState, Person};
