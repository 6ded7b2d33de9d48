//! Agent registration: form state, validation, submission and feedback.

pub mod api;
pub mod error;
pub mod form;
pub mod section;

pub use section::{RegistrationSection, REGISTRATION_SECTION_ID};
