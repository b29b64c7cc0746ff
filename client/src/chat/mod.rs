//! The scripted conversation engine behind the chat widget.
//!
//! DESIGN
//! ======
//! The engine is split so every behavioral piece is pure and testable
//! without a browser: [`transcript`] owns the ordered turn list,
//! [`replies`] derives a canned reply from keyword matching,
//! [`submission`] pairs each user turn with its pending reply,
//! [`navigator`] is the capability seam for navigation side effects, and
//! [`storage`] persists the session transcript. Timing (the simulated
//! typing delay) lives in the widget component, not here.

pub mod config;
pub mod navigator;
pub mod replies;
pub mod storage;
pub mod submission;
pub mod transcript;
