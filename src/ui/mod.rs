pub mod app;
pub mod counter;
pub mod events;
pub mod fetch;
pub mod footer;
pub mod form;
pub mod greeting;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod people;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
