//! Admin & store creation form

use crate::api::Method;
use crate::state::{
    Check, FailureMessage, FormDefinition, FormField, FormState, ResetPolicy, SubmitMessages,
    ValidationRule,
};
use serde_json::{json, Value};

pub const ADMIN_NAME: &str = "adminName";
pub const ADMIN_EMAIL: &str = "adminEmail";
pub const ADMIN_PASSWORD: &str = "adminPassword";
pub const STORE_NAME: &str = "storeName";
pub const STORE_LOCATION: &str = "storeLocation";

fn payload(state: &FormState) -> Value {
    json!({
        "name": state.text(ADMIN_NAME),
        "email": state.text(ADMIN_EMAIL),
        "password": state.text(ADMIN_PASSWORD),
        "storeName": state.text(STORE_NAME),
        "storeLocation": state.text(STORE_LOCATION),
    })
}

/// Form that creates an admin account together with its store
pub fn definition(min_password_length: usize) -> FormDefinition {
    FormDefinition {
        title: "Create Admin & Store",
        initial: FormState::new(vec![
            FormField::text(ADMIN_NAME, "Admin Name"),
            FormField::email(ADMIN_EMAIL, "Admin Email"),
            FormField::password(ADMIN_PASSWORD, "Admin Password"),
            FormField::text(STORE_NAME, "Store Name"),
            FormField::text(STORE_LOCATION, "Store Location"),
        ]),
        rules: vec![
            ValidationRule::new(
                Check::AllOf(vec![
                    Check::Email(ADMIN_EMAIL),
                    Check::MinLength {
                        field: ADMIN_PASSWORD,
                        min: min_password_length,
                    },
                ]),
                format!(
                    "Please enter a valid email and password (min {min_password_length} characters)"
                ),
            ),
            ValidationRule::required(
                &[ADMIN_NAME, STORE_NAME, STORE_LOCATION],
                "Please fill in all fields",
            ),
        ],
        method: Method::Post,
        path: "/admins",
        payload,
        reset: ResetPolicy::Initial,
        messages: SubmitMessages {
            success_title: "Success".to_string(),
            success_message: "Admin and store created successfully".to_string(),
            error_title: "Error".to_string(),
            failure: FailureMessage::Fixed("Failed to create admin and store".to_string()),
        },
        submit_label: "Create Admin & Store",
        busy_label: "Creating...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockRemoteMutationClient;
    use crate::error::RemoteFailure;
    use crate::state::{
        FieldValue, FormController, MockNotificationSink, NotificationKind, ToastQueue,
    };
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn controller_with(values: &[(&str, &str)]) -> FormController {
        let mut controller = FormController::new(definition(6));
        for (name, value) in values {
            controller.set_field(name, FieldValue::Text(value.to_string()));
        }
        controller
    }

    fn valid() -> FormController {
        controller_with(&[
            (ADMIN_NAME, "Ada"),
            (ADMIN_EMAIL, "ada@example.com"),
            (ADMIN_PASSWORD, "123456"),
            (STORE_NAME, "Corner Shop"),
            (STORE_LOCATION, "Lisbon"),
        ])
    }

    #[test]
    fn test_payload_maps_field_names() {
        let controller = valid();
        assert_eq!(
            payload(controller.state()),
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": "123456",
                "storeName": "Corner Shop",
                "storeLocation": "Lisbon",
            })
        );
    }

    #[test]
    fn test_threshold_is_configurable() {
        let mut controller = FormController::new(definition(8));
        for (name, value) in [
            (ADMIN_NAME, "Ada"),
            (ADMIN_EMAIL, "ada@example.com"),
            (ADMIN_PASSWORD, "1234567"),
            (STORE_NAME, "Shop"),
            (STORE_LOCATION, "Porto"),
        ] {
            controller.set_field(name, FieldValue::Text(value.to_string()));
        }
        let err = controller.validate(controller.state()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter a valid email and password (min 8 characters)"
        );
    }

    #[tokio::test]
    async fn test_empty_admin_name_reports_fill_in_all_fields() {
        let mut controller = controller_with(&[
            (ADMIN_NAME, ""),
            (ADMIN_EMAIL, "ada@example.com"),
            (ADMIN_PASSWORD, "123456"),
            (STORE_NAME, "Corner Shop"),
            (STORE_LOCATION, "Lisbon"),
        ]);
        let mut client = MockRemoteMutationClient::new();
        client.expect_request().times(0);
        let mut sink = MockNotificationSink::new();
        sink.expect_notify()
            .with(
                eq(NotificationKind::Error),
                eq("Error"),
                eq("Please fill in all fields"),
            )
            .times(1)
            .return_const(());

        controller.submit(&client, &mut sink).await;
    }

    #[tokio::test]
    async fn test_bad_email_and_short_password_report_credentials() {
        let mut controller = controller_with(&[
            (ADMIN_NAME, "Ada"),
            (ADMIN_EMAIL, "bad"),
            (ADMIN_PASSWORD, "12345"),
            (STORE_NAME, "Corner Shop"),
            (STORE_LOCATION, "Lisbon"),
        ]);
        let mut client = MockRemoteMutationClient::new();
        client.expect_request().times(0);
        let mut sink = MockNotificationSink::new();
        sink.expect_notify()
            .with(
                eq(NotificationKind::Error),
                eq("Error"),
                eq("Please enter a valid email and password (min 6 characters)"),
            )
            .times(1)
            .return_const(());

        controller.submit(&client, &mut sink).await;
    }

    #[tokio::test]
    async fn test_valid_submission_posts_and_clears() {
        let mut controller = valid();
        let mut client = MockRemoteMutationClient::new();
        client
            .expect_request()
            .withf(|method, path, body| {
                *method == Method::Post && path == "/admins" && body.is_some()
            })
            .times(1)
            .returning(|_, _, _| Ok(json!({ "id": "admin-1" })));
        let mut toasts = ToastQueue::default();

        controller.submit(&client, &mut toasts).await;

        for field in controller.state().fields() {
            assert_eq!(field.as_text(), "", "{} not cleared", field.name);
        }
        assert_eq!(toasts.len(), 1);
        let toast = &toasts.latest().unwrap().notification;
        assert_eq!(toast.kind, NotificationKind::Success);
        assert_eq!(toast.message, "Admin and store created successfully");
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_values() {
        let mut controller = valid();
        let before = controller.state().clone();
        let mut client = MockRemoteMutationClient::new();
        client
            .expect_request()
            .times(1)
            .returning(|_, _, _| Err(RemoteFailure::new("Email already registered")));
        let mut toasts = ToastQueue::default();

        controller.submit(&client, &mut toasts).await;

        assert_eq!(controller.state(), &before);
        let toast = &toasts.latest().unwrap().notification;
        assert_eq!(toast.kind, NotificationKind::Error);
        assert_eq!(toast.message, "Failed to create admin and store");
    }
}
