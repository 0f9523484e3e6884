//! Pure field checks for the lead form. Nothing in here touches the DOM.

pub mod fields;
pub mod format;
pub mod rules;

pub use fields::FieldName;
pub use format::{digits_only, transform_input};
pub use rules::{is_valid_email, run_chain, FieldInput, Rule, ValidationError};
