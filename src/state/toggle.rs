//! Optimistic boolean toggle backed by a remote flag
//!
//! The displayed value flips as soon as the user acts. If the remote call
//! fails the exact previous value is restored.

use super::pending::{PendingCall, Submission, Ticket, TicketCounter};
use super::session::{Role, SessionContext};
use super::Notification;
use crate::api::{Method, RemoteMutationClient};
use crate::error::{ActionError, RemoteFailure};
use crate::state::NotificationSink;
use serde_json::Value;

/// Where a toggle is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Idle(bool),
    Pending {
        value: bool,
        previous: bool,
        ticket: Ticket,
    },
}

impl ToggleState {
    /// Value the user currently sees
    pub fn displayed(&self) -> bool {
        match self {
            ToggleState::Idle(value) => *value,
            ToggleState::Pending { value, .. } => *value,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ToggleState::Pending { .. })
    }
}

/// Notification texts for a toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleMessages {
    pub enabled_title: String,
    pub enabled_message: String,
    pub disabled_title: String,
    pub disabled_message: String,
    pub error_title: String,
    pub failure_message: String,
    pub login_required: String,
    pub role_required: String,
}

/// Declarative description of a remote flag
#[derive(Debug, Clone)]
pub struct ToggleDefinition {
    pub path: &'static str,
    pub required_role: Role,
    /// Maps the requested value to a request body
    pub payload: fn(bool) -> Value,
    pub messages: ToggleMessages,
}

#[derive(Debug)]
pub struct OptimisticToggle {
    definition: ToggleDefinition,
    state: ToggleState,
    tickets: TicketCounter,
}

impl OptimisticToggle {
    /// Start idle at a value fetched from the remote system
    pub fn from_snapshot(definition: ToggleDefinition, value: bool) -> Self {
        Self {
            definition,
            state: ToggleState::Idle(value),
            tickets: TicketCounter::default(),
        }
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn displayed(&self) -> bool {
        self.state.displayed()
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Check the acting user may flip this flag
    pub fn authorize(&self, session: &dyn SessionContext) -> Result<(), ActionError> {
        let messages = &self.definition.messages;
        match session.current_user() {
            None => Err(ActionError::Authorization(messages.login_required.clone())),
            Some(user) if user.role != self.definition.required_role => {
                Err(ActionError::Authorization(messages.role_required.clone()))
            }
            Some(_) => Ok(()),
        }
    }

    /// Authorize, then flip the displayed value and describe the call to make
    pub fn begin_toggle(&mut self, session: &dyn SessionContext) -> Submission {
        if self.is_pending() {
            tracing::debug!("Ignoring toggle of {}: already in flight", self.definition.path);
            return Submission::Ignored;
        }

        // Authorization happens before the flip so a refused user never sees it change
        if let Err(err) = self.authorize(session) {
            tracing::warn!("Refused toggle of {}: {}", self.definition.path, err);
            let title = &self.definition.messages.error_title;
            return Submission::Rejected(err.into_notification(title));
        }

        let previous = self.state.displayed();
        let value = !previous;
        let ticket = self.tickets.issue();
        self.state = ToggleState::Pending {
            value,
            previous,
            ticket,
        };
        tracing::debug!("{} flipped to {} optimistically", self.definition.path, value);

        Submission::Started(PendingCall {
            ticket,
            method: Method::Post,
            path: self.definition.path,
            body: Some((self.definition.payload)(value)),
        })
    }

    /// Settle the pending flip identified by `ticket`.
    ///
    /// Returns the notification to show, or `None` when the ticket is stale.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<Value, RemoteFailure>,
    ) -> Option<Notification> {
        let (value, previous) = match self.state {
            ToggleState::Pending {
                value,
                previous,
                ticket: pending,
            } if pending == ticket => (value, previous),
            _ => {
                tracing::debug!("Dropping stale toggle resolution for {}", self.definition.path);
                return None;
            }
        };

        let messages = &self.definition.messages;
        match result {
            Ok(_) => {
                self.state = ToggleState::Idle(value);
                tracing::info!("{} set to {}", self.definition.path, value);
                Some(if value {
                    Notification::success(&messages.enabled_title, &messages.enabled_message)
                } else {
                    Notification::success(&messages.disabled_title, &messages.disabled_message)
                })
            }
            Err(failure) => {
                self.state = ToggleState::Idle(previous);
                tracing::warn!(
                    "{} update failed, reverted to {}: {}",
                    self.definition.path,
                    previous,
                    failure
                );
                Some(Notification::error(
                    &messages.error_title,
                    &messages.failure_message,
                ))
            }
        }
    }

    /// Run a whole toggle against `client`, reporting one notification to `sink`
    /// unless the toggle was ignored as re-entrant.
    ///
    /// Single-task counterpart of [`Self::begin_toggle`] + [`Self::complete`],
    /// which `App` uses so the screen keeps redrawing while the call runs.
    #[allow(dead_code)]
    pub async fn toggle(
        &mut self,
        client: &dyn RemoteMutationClient,
        session: &dyn SessionContext,
        sink: &mut dyn NotificationSink,
    ) {
        let call = match self.begin_toggle(session) {
            Submission::Started(call) => call,
            Submission::Rejected(notification) => {
                notification.deliver(sink);
                return;
            }
            Submission::Ignored => return,
        };

        let result = client.request(call.method, call.path, call.body).await;
        if let Some(notification) = self.complete(call.ticket, result) {
            notification.deliver(sink);
        }
    }
}
