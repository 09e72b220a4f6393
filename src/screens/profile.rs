//! Profile editing form
//!
//! Only the username is editable; email and id come from the session.

use crate::api::Method;
use crate::state::{
    FailureMessage, FieldValue, FormDefinition, FormField, FormState, ResetPolicy, SubmitMessages,
    User, ValidationRule,
};
use serde_json::{json, Value};

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const ID: &str = "id";

fn payload(state: &FormState) -> Value {
    json!({
        "username": state.text(NAME),
        "id": state.text(ID),
    })
}

/// Profile form seeded from the signed-in user, if any
pub fn definition(user: Option<&User>) -> FormDefinition {
    let (username, email, id) = user
        .map(|u| (u.username.as_str(), u.email.as_str(), u.id.as_str()))
        .unwrap_or(("", "", ""));
    let email = if email.is_empty() {
        "No email available"
    } else {
        email
    };

    FormDefinition {
        title: "Profile Information",
        initial: FormState::new(vec![
            FormField::text(NAME, "Username")
                .with_value(FieldValue::Text(username.to_string())),
            FormField::read_only(EMAIL, "Email Address (cannot be changed)", email),
            FormField::read_only(ID, "User ID", id),
        ]),
        rules: vec![ValidationRule::non_empty(NAME, "Please enter a username")],
        method: Method::Put,
        path: "/users/profile",
        payload,
        reset: ResetPolicy::Keep,
        messages: SubmitMessages {
            success_title: "Profile updated".to_string(),
            success_message: "Your username has been updated successfully.".to_string(),
            error_title: "Error".to_string(),
            failure: FailureMessage::RemoteReason {
                fallback: "An error occurred while updating your profile.".to_string(),
            },
        },
        submit_label: "Save Changes",
        busy_label: "Updating...",
    }
}
