//! Reactive application state shared through Leptos context.

pub mod chat;
pub mod ui;

pub use chat::ChatState;
pub use ui::UiState;
