//! Small shared helpers: currency and phone formatting plus contact-form
//! validation.

pub mod format;
pub mod validate;
