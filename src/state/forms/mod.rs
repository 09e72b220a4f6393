//! Form domain layer
//!
//! Typed field state, composable validation rules and the controller that
//! turns a filled form into one remote mutation.

mod controller;
mod field;
mod form_state;
mod rules;

pub use controller::{FailureMessage, FormController, FormDefinition, ResetPolicy, SubmitMessages};
pub use field::{FieldValue, FormField, InputKind};
pub use form_state::FormState;
pub use rules::{Check, ValidationRule};
