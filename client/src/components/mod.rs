//! Page components: chrome, landing sections, the animated backdrop host,
//! and the chat widget.

pub mod backdrop_host;
pub mod chat_widget;
pub mod contact_form;
pub mod contact_section;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod plans;
pub mod portfolio;
pub mod services;
pub mod testimonials;
