//! Users fetch demo.
//!
//! On mount the app spawns a [`FetchTask`]; its completion comes back as a
//! [`FetchIntent`] tagged with the generation that started it. Results from
//! an older generation are dropped by the reducer, and unmounting aborts the
//! task, so a discarded view is never updated.

mod intent;
mod reducer;
mod state;
mod task;

pub use intent::FetchIntent;
pub use reducer::FetchReducer;
pub use state::FetchState;
pub use task::FetchTask;
