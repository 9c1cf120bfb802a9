//! Small stateful UI demos in a terminal: a reducer-driven list, a
//! cancellable users fetch, a form, a counter with lifecycle effects and a
//! role-dependent greeting.

pub mod config;
pub mod github;
pub mod logging;
pub mod ui;
