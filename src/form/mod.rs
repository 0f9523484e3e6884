//! Demo request form: validator, submit pipeline and the reducer state the
//! form component renders from.

pub mod state;
pub mod submission;
pub mod validator;

pub use state::{DemoFormState, FormAction};
pub use validator::FieldStatus;
