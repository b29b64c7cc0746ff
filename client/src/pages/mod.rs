//! Top-level pages, one per route.

pub mod contact;
pub mod home;
