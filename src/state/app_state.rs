//! Application state definitions

use super::ToastQueue;
use crate::screens::Screen;

/// Screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    AdminStore,
    SystemStatus,
    Profile,
}

impl View {
    pub const ALL: [View; 3] = [View::AdminStore, View::SystemStatus, View::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Self::AdminStore => "Admin & Store",
            Self::SystemStatus => "System Status",
            Self::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::AdminStore => 0,
            Self::SystemStatus => 1,
            Self::Profile => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Main application state
pub struct AppState {
    pub current_view: View,
    /// Bumped on every mount so late results for an unmounted screen are dropped
    pub mount: u64,
    pub screen: Screen,
    pub toasts: ToastQueue,
}

impl AppState {
    pub fn new(view: View, screen: Screen) -> Self {
        Self {
            current_view: view,
            mount: 0,
            screen,
            toasts: ToastQueue::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_admin_store() {
        assert_eq!(View::default(), View::AdminStore);
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(View::AdminStore.next(), View::SystemStatus);
        assert_eq!(View::SystemStatus.next(), View::Profile);
        assert_eq!(View::Profile.next(), View::AdminStore);
    }

    #[test]
    fn test_prev_wraps() {
        assert_eq!(View::AdminStore.prev(), View::Profile);
        assert_eq!(View::Profile.prev(), View::SystemStatus);
    }

    #[test]
    fn test_index_matches_all() {
        for (i, view) in View::ALL.iter().enumerate() {
            assert_eq!(view.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(View::AdminStore.label(), "Admin & Store");
        assert_eq!(View::SystemStatus.label(), "System Status");
        assert_eq!(View::Profile.label(), "Profile");
    }
}
