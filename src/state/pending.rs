//! Bookkeeping for remote calls that are in flight

use super::Notification;
use crate::api::Method;
use serde_json::Value;

/// Identifies one remote call issued by a controller.
///
/// A resolution is only applied when its ticket matches the call the
/// controller is still waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Hands out increasing tickets
#[derive(Debug, Default)]
pub struct TicketCounter {
    next: u64,
}

impl TicketCounter {
    pub fn issue(&mut self) -> Ticket {
        self.next += 1;
        Ticket(self.next)
    }
}

/// A request the caller must perform and later report back
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCall {
    pub ticket: Ticket,
    pub method: Method,
    pub path: &'static str,
    pub body: Option<Value>,
}

/// Result of asking a controller to start a remote action
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Refused locally (validation or authorization); nothing was sent
    Rejected(Notification),
    /// Another call from the same controller is still in flight
    Ignored,
    Started(PendingCall),
}
