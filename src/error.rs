//! Error taxonomy for user-initiated actions
//!
//! None of these are fatal: every variant ends up as a notification and the
//! user can retry the action.

use crate::state::Notification;
use thiserror::Error;

/// Opaque failure of a remote call.
///
/// Transport errors, non-2xx statuses and malformed bodies all collapse into
/// this one type; the reason string is meant for humans.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct RemoteFailure {
    pub reason: String,
}

impl RemoteFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Why a submit or toggle did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Local rule violation; never reaches the network
    #[error("{0}")]
    Validation(String),
    /// Caller's role is insufficient; checked before any optimistic change
    #[error("{0}")]
    Authorization(String),
    #[error(transparent)]
    Remote(#[from] RemoteFailure),
}

impl ActionError {
    /// Convert into an error notification with the given title
    pub fn into_notification(self, title: &str) -> Notification {
        Notification::error(title, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NotificationKind;

    #[test]
    fn test_remote_failure_displays_reason() {
        let failure = RemoteFailure::new("connection refused");
        assert_eq!(failure.to_string(), "connection refused");
    }

    #[test]
    fn test_remote_converts_into_action_error() {
        let err: ActionError = RemoteFailure::new("boom").into();
        assert_eq!(err, ActionError::Remote(RemoteFailure::new("boom")));
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_into_notification_is_error_kind() {
        let notification =
            ActionError::Validation("Please fill in all fields".into()).into_notification("Error");
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.title, "Error");
        assert_eq!(notification.message, "Please fill in all fields");
    }
}
