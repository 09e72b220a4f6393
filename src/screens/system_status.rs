//! System status screen: platform stats and the maintenance-mode switch

use crate::api::{get_json, MaintenanceStatus, PlatformStats, RemoteMutationClient};
use crate::error::RemoteFailure;
use crate::state::{Notification, OptimisticToggle, Role, ToggleDefinition, ToggleMessages};
use serde_json::{json, Value};

const MAINTENANCE_MESSAGE: &str = "System is currently under maintenance. Please try again later.";
const TOGGLE_FAILED: &str =
    "Failed to update maintenance mode. Please ensure you're logged in with developer privileges.";

fn maintenance_payload(enabled: bool) -> Value {
    if enabled {
        json!({
            "enabled": true,
            "message": MAINTENANCE_MESSAGE,
            "reason": "Scheduled maintenance",
        })
    } else {
        json!({
            "enabled": false,
            "message": "",
            "reason": "Maintenance completed",
        })
    }
}

/// Platform-wide maintenance flag, developers only
pub fn maintenance_definition() -> ToggleDefinition {
    ToggleDefinition {
        path: "/system/maintenance",
        required_role: Role::Developer,
        payload: maintenance_payload,
        messages: ToggleMessages {
            enabled_title: "Maintenance Mode Enabled".to_string(),
            enabled_message: "The platform is now in maintenance mode.".to_string(),
            disabled_title: "Maintenance Mode Disabled".to_string(),
            disabled_message: "The platform is now active.".to_string(),
            error_title: "Error".to_string(),
            failure_message: TOGGLE_FAILED.to_string(),
            login_required: "You must be logged in to perform this action".to_string(),
            role_required: "Only developers can toggle maintenance mode".to_string(),
        },
    }
}

/// Everything the screen fetches on mount
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub stats: PlatformStats,
    pub maintenance: MaintenanceStatus,
}

/// Fetch stats, then the maintenance flag
pub async fn fetch_snapshot(
    client: &dyn RemoteMutationClient,
) -> Result<StatusSnapshot, RemoteFailure> {
    let stats = get_json(client, "/platform-stats").await?;
    let maintenance = get_json(client, "/system/maintenance").await?;
    Ok(StatusSnapshot { stats, maintenance })
}

#[derive(Debug)]
pub struct SystemStatusScreen {
    pub stats: PlatformStats,
    pub maintenance: OptimisticToggle,
    pub loading: bool,
}

impl Default for SystemStatusScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemStatusScreen {
    /// Fresh screen waiting for its first snapshot
    pub fn new() -> Self {
        Self {
            stats: PlatformStats::default(),
            maintenance: OptimisticToggle::from_snapshot(maintenance_definition(), false),
            loading: true,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.loading || self.maintenance.is_pending()
    }

    /// Show a fetched snapshot; a pending toggle keeps its optimistic value
    pub fn apply_snapshot(&mut self, snapshot: StatusSnapshot) {
        self.stats = snapshot.stats;
        if !self.maintenance.is_pending() {
            self.maintenance = OptimisticToggle::from_snapshot(
                maintenance_definition(),
                snapshot.maintenance.enabled,
            );
        }
        self.loading = false;
    }

    /// Stop loading after a failed fetch; previous values stay on screen
    pub fn load_failed(&mut self, failure: &RemoteFailure) -> Notification {
        tracing::warn!("Failed to load system status: {failure}");
        self.loading = false;
        Notification::error("Error", "Failed to load system status")
    }
}
