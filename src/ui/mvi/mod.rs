//! Model-View-Intent primitives shared by every demo.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ render
//!     ↑                                            │
//!     └────────────────────────────────────────────┘
//! ```
//!
//! Reducers are pure. Side effects (logging a submitted form, spawning a
//! fetch, running lifecycle effects) happen in `App` around the dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
