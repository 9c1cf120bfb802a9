//! Counter demo with lifecycle effects.
//!
//! The reducer only counts. Which effects run after a commit is decided by
//! [`EffectTracker`], and `App` performs them.

mod effects;
mod intent;
mod reducer;
mod state;

pub use effects::{CounterEffect, EffectTracker};
pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
