//! User-facing notifications (toasts)

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen
const DEFAULT_TOAST_TTL: Duration = Duration::from_secs(4);

/// Maximum number of toasts kept around
const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A message surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Hand this notification to a sink
    pub fn deliver(&self, sink: &mut dyn NotificationSink) {
        sink.notify(self.kind, &self.title, &self.message);
    }
}

/// Anything that can show a notification to the user
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink {
    fn notify(&mut self, kind: NotificationKind, title: &str, message: &str);
}

/// A notification with the moment it was raised
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub raised_at: Instant,
}

/// Bounded queue of recent toasts; the newest one is rendered
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL)
    }
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    fn push_at(&mut self, notification: Notification, raised_at: Instant) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            notification,
            raised_at,
        });
    }

    /// Drop toasts older than the TTL
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.raised_at) < ttl);
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    /// Dismiss the newest toast
    pub fn dismiss(&mut self) {
        self.toasts.pop_back();
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&mut self, kind: NotificationKind, title: &str, message: &str) {
        match kind {
            NotificationKind::Success => tracing::info!("{title}: {message}"),
            NotificationKind::Error => tracing::warn!("{title}: {message}"),
        }
        self.push(Notification {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
