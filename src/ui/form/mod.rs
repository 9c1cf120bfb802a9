//! Form demo: two free-text fields, a Submit button and a Hello button.

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormField, FormState, FormValue};
