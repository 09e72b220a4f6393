//! Form submission controller
//!
//! Mediates between field edits and a single remote mutation: validates in
//! rule order, allows one submission in flight, resets the form on success and
//! keeps the user's values on failure so they can retry.

use super::form_state::FormState;
use super::field::FieldValue;
use super::rules::{first_violation, ValidationRule};
use crate::api::{Method, RemoteMutationClient};
use crate::error::{ActionError, RemoteFailure};
use crate::state::{
    Notification, NotificationSink, PendingCall, Submission, Ticket, TicketCounter,
};
use serde_json::Value;

/// Maps the submitted state to a request body
pub type PayloadFn = fn(&FormState) -> Value;

/// What happens to the form after a successful submission
#[derive(Debug, Clone, Copy)]
pub enum ResetPolicy {
    /// Restore the declared initial values
    Initial,
    /// Leave the submitted values in place
    Keep,
    Custom(fn(&FormState) -> FormState),
}

impl ResetPolicy {
    fn apply(&self, initial: &FormState, current: &FormState) -> FormState {
        match self {
            ResetPolicy::Initial => initial.clone(),
            ResetPolicy::Keep => current.clone(),
            ResetPolicy::Custom(transform) => transform(current),
        }
    }
}

/// Message shown when the remote call fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureMessage {
    Fixed(String),
    /// Show the server's reason, or `fallback` when it gave none
    RemoteReason { fallback: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitMessages {
    pub success_title: String,
    pub success_message: String,
    /// Title for validation and remote failures
    pub error_title: String,
    pub failure: FailureMessage,
}

/// Declarative description of one form screen
#[derive(Debug, Clone)]
pub struct FormDefinition {
    pub title: &'static str,
    pub initial: FormState,
    pub rules: Vec<ValidationRule>,
    pub method: Method,
    pub path: &'static str,
    pub payload: PayloadFn,
    pub reset: ResetPolicy,
    pub messages: SubmitMessages,
    pub submit_label: &'static str,
    pub busy_label: &'static str,
}

/// Owns the live state of one mounted form
#[derive(Debug)]
pub struct FormController {
    definition: FormDefinition,
    state: FormState,
    in_flight: Option<Ticket>,
    tickets: TicketCounter,
}

impl FormController {
    pub fn new(definition: FormDefinition) -> Self {
        Self {
            state: definition.initial.clone(),
            definition,
            in_flight: None,
            tickets: TicketCounter::default(),
        }
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// True when `ticket` is the call this controller is waiting on
    pub fn is_awaiting(&self, ticket: Ticket) -> bool {
        self.in_flight == Some(ticket)
    }

    /// Label for the submit button, reflecting the busy flag
    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            self.definition.busy_label
        } else {
            self.definition.submit_label
        }
    }

    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        self.state = self.state.with_field(name, value);
    }

    /// Check `state` against the form's rules; reports only the first violation
    pub fn validate(&self, state: &FormState) -> Result<(), ActionError> {
        match first_violation(&self.definition.rules, state) {
            Some(message) => Err(ActionError::Validation(message.to_string())),
            None => Ok(()),
        }
    }

    /// Validate and, if valid, mark the form busy and describe the call to make.
    ///
    /// The caller performs the call and reports back through [`Self::complete`].
    pub fn begin_submit(&mut self) -> Submission {
        if self.is_busy() {
            tracing::debug!("Ignoring submit of {}: already in flight", self.definition.title);
            return Submission::Ignored;
        }

        if let Err(err) = self.validate(&self.state) {
            tracing::debug!("Rejected submit of {}: {}", self.definition.title, err);
            let title = &self.definition.messages.error_title;
            return Submission::Rejected(err.into_notification(title));
        }

        let ticket = self.tickets.issue();
        self.in_flight = Some(ticket);
        Submission::Started(PendingCall {
            ticket,
            method: self.definition.method,
            path: self.definition.path,
            body: Some((self.definition.payload)(&self.state)),
        })
    }

    /// Apply the outcome of the call identified by `ticket`.
    ///
    /// Returns the notification to show, or `None` when the ticket is stale.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<Value, RemoteFailure>,
    ) -> Option<Notification> {
        if !self.is_awaiting(ticket) {
            tracing::debug!("Dropping stale resolution for {}", self.definition.title);
            return None;
        }
        self.in_flight = None;

        let messages = &self.definition.messages;
        match result {
            Ok(_) => {
                self.state = self
                    .definition
                    .reset
                    .apply(&self.definition.initial, &self.state);
                tracing::info!(
                    "{} {} succeeded",
                    self.definition.method.as_str(),
                    self.definition.path
                );
                Some(Notification::success(
                    &messages.success_title,
                    &messages.success_message,
                ))
            }
            Err(failure) => {
                tracing::warn!(
                    "{} {} failed: {}",
                    self.definition.method.as_str(),
                    self.definition.path,
                    failure
                );
                let message = match &messages.failure {
                    FailureMessage::Fixed(message) => message.clone(),
                    FailureMessage::RemoteReason { fallback } => {
                        if failure.reason.trim().is_empty() {
                            fallback.clone()
                        } else {
                            failure.reason
                        }
                    }
                };
                let err = ActionError::Remote(RemoteFailure::new(message));
                Some(err.into_notification(&messages.error_title))
            }
        }
    }

    /// Run a whole submission against `client`, reporting exactly one
    /// notification to `sink` unless the submit was ignored as re-entrant.
    ///
    /// Holds `&mut self` across the await. The event loop cannot do that while
    /// it keeps handling keys, so `App` drives [`Self::begin_submit`] and
    /// [`Self::complete`] directly around a spawned task instead.
    #[allow(dead_code)]
    pub async fn submit(
        &mut self,
        client: &dyn RemoteMutationClient,
        sink: &mut dyn NotificationSink,
    ) {
        let call = match self.begin_submit() {
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
